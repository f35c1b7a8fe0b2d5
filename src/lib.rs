//! Trellis lays out a tree of boxes along one main axis per container.
//!
//! Build the tree through a [`LayoutEngine`], call [`LayoutEngine::solve`] with the
//! available rectangle, then read each item's rectangle back, directly or through a
//! [`report::LayoutReport`].

pub mod error;
pub mod report;
pub mod shell;

pub use error::ReportError;
pub use report::{ItemReport, LayoutReport};

pub use trellis_layout::{
    Builder, DebugProfiler, Direction, IdRegistry, Item, ItemId, LayoutEngine, LayoutError,
    LayoutTree, NoOpProfiler, Node, NodeId, OverrunKind, Padding, Profiler, Rect, SizeId,
    SizeReference, SizeSpec, SizeTable, SolverConfig,
};
