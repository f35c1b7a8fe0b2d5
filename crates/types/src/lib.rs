pub mod geometry;
pub mod ids;

pub use geometry::{Direction, Padding, Rect};
pub use ids::{ItemId, SizeId};
