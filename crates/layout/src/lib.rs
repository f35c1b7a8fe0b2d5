use std::fmt;
use thiserror::Error;

/// Which budget a container overran while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrunKind {
    /// Main-axis padding alone exceeds the container's main-axis length.
    Margin,
    /// Fixed and percentage items leave negative space for flex items.
    Flex,
    /// Fixed and percentage items exceed the container with no flex items present.
    NonFlex,
}

impl fmt::Display for OverrunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverrunKind::Margin => "margin overrun",
            OverrunKind::Flex => "flex overrun",
            OverrunKind::NonFlex => "non-flex overrun",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Cannot nest: no item named '{0}' exists.")]
    MissingItem(ItemId),
    #[error("Size link references unregistered size '{0}'.")]
    MissingLink(SizeId),
    #[error("An item named '{0}' already exists.")]
    DuplicateItem(ItemId),
    #[error("Item '{0}' is already a container.")]
    AlreadyNested(ItemId),
    #[error("No size entry named '{0}'.")]
    MissingSize(SizeId),
    #[error("Invalid {kind} value {value}: sizes must be finite and non-negative.")]
    InvalidSizeValue { kind: &'static str, value: f32 },
    #[error("Invalid {field} {value} for the available rectangle: it must be finite with a non-negative extent.")]
    InvalidRegion { field: &'static str, value: f32 },
    #[error("Invalid {side} padding {value}: padding must be finite and non-negative.")]
    InvalidPadding { side: &'static str, value: f32 },
    #[error("Insufficient space ({reason}): {required:.2} required but only {available:.2} available.")]
    InsufficientSpace {
        reason: OverrunKind,
        required: f32,
        available: f32,
    },
    #[error("Size '{size}' is still {found} during {stage}.")]
    InvalidSizeState {
        size: SizeId,
        stage: &'static str,
        found: &'static str,
    },
}

pub mod builder;
pub mod config;
pub(crate) mod engine;
pub mod perf;
pub mod registry;
pub mod size;
pub(crate) mod solver;
pub mod tree;

pub use self::builder::Builder;
pub use self::config::SolverConfig;
pub use self::engine::LayoutEngine;
pub use self::perf::{DebugProfiler, NoOpProfiler, Profiler};
pub use self::registry::IdRegistry;
pub use self::size::{SizeReference, SizeSpec, SizeTable};
pub use self::tree::{Item, LayoutTree, Node, NodeId};

// Re-export the geometry and identifier types so callers need a single import.
pub use trellis_types::{Direction, ItemId, Padding, Rect, SizeId};

#[cfg(test)]
mod test_utils;
