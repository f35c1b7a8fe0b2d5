use crate::builder::{Builder, Prefix};
use crate::config::SolverConfig;
use crate::perf::Profiler;
use crate::registry::IdRegistry;
use crate::size::{SizeReference, SizeSpec, SizeTable};
use crate::solver::Solver;
use crate::tree::{Item, LayoutTree, NodeId};
use crate::LayoutError;
use std::fmt;
use std::time::Instant;
use trellis_types::{Direction, ItemId, Padding, Rect, SizeId};

/// Owns a layout tree together with its size table and identifier registry.
///
/// The engine acts as the builder for the root container; [`LayoutEngine::nest`]
/// hands out builders for nested containers. Build the tree first, then call
/// [`LayoutEngine::solve`] whenever the available rectangle changes.
///
/// Solving mutates the size table in place and is not reentrant. Every solve
/// recomputes percentages and flex weights from their declared specs, so solving
/// again after a resize yields fresh lengths.
pub struct LayoutEngine {
    pub(crate) config: SolverConfig,
    pub(crate) registry: IdRegistry,
    pub(crate) sizes: SizeTable,
    pub(crate) tree: LayoutTree,
    profiler: Box<dyn Profiler>,
}

impl fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("sizes", &self.sizes.len())
            .field("items", &self.tree.item_count())
            .finish_non_exhaustive()
    }
}

impl LayoutEngine {
    pub fn new(direction: Direction, padding: Padding) -> Self {
        Self::with_config(direction, padding, SolverConfig::default())
    }

    pub fn with_config(direction: Direction, padding: Padding, config: SolverConfig) -> Self {
        Self {
            config,
            registry: IdRegistry::new(),
            sizes: SizeTable::new(),
            tree: LayoutTree::new(direction, padding),
            profiler: default_profiler(),
        }
    }

    pub fn with_profiler(mut self, profiler: Box<dyn Profiler>) -> Self {
        self.profiler = profiler;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn profiler(&self) -> &dyn Profiler {
        self.profiler.as_ref()
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn sizes(&self) -> &SizeTable {
        &self.sizes
    }

    /// Replaces the declared spec of an existing size entry.
    pub fn set_size(&mut self, id: &SizeId, spec: SizeSpec) -> Result<(), LayoutError> {
        self.sizes.set(id, spec)
    }

    /// A builder for the root container.
    pub fn root(&mut self) -> Builder<'_> {
        Builder::new(self, NodeId::ROOT)
    }

    /// Reopens a builder for a container created earlier by `nest`.
    pub fn builder(&mut self, node: NodeId) -> Option<Builder<'_>> {
        self.tree.node(node)?;
        Some(Builder::new(self, node))
    }

    pub fn add_item(&mut self, size: impl Into<SizeReference>) -> Result<Item, LayoutError> {
        self.root().add_item(size)
    }

    pub fn add_item_with_id(
        &mut self,
        id: impl Into<ItemId>,
        size: impl Into<SizeReference>,
    ) -> Result<Item, LayoutError> {
        self.root().add_item_with_id(id, size)
    }

    pub fn add_spacer(&mut self, size: impl Into<SizeReference>) -> Result<(), LayoutError> {
        self.root().add_spacer(size)
    }

    pub fn register_size(&mut self, spec: SizeSpec) -> Result<SizeId, LayoutError> {
        self.root().register_size(spec)
    }

    pub fn nest(
        &mut self,
        item: &ItemId,
        direction: Direction,
        padding: Padding,
    ) -> Result<Builder<'_>, LayoutError> {
        let node = self.tree.attach_node(item, direction, padding)?;
        log::debug!(
            "Nested {} container (node {}) under item '{}'",
            direction.name(),
            node.index(),
            item
        );
        Ok(Builder::new(self, node))
    }

    /// Computes a rectangle for every item reachable from the root.
    ///
    /// On error no rectangles are kept: the layout is either complete or empty.
    pub fn solve(&mut self, available: Rect) -> Result<(), LayoutError> {
        let start = Instant::now();
        self.sizes.clear_resolved();
        self.tree.clear_rects();

        let result = Solver::new(
            &self.config,
            &mut self.sizes,
            &mut self.tree,
            self.profiler.as_ref(),
        )
        .solve(available, NodeId::ROOT);

        if let Err(e) = &result {
            log::warn!("Layout solve failed: {}", e);
            self.sizes.clear_resolved();
            self.tree.clear_rects();
        }

        self.profiler.record("LayoutEngine::solve", start.elapsed());
        result
    }

    pub fn rect(&self, item: &ItemId) -> Option<Rect> {
        self.tree.rect(item)
    }

    pub fn is_container(&self, item: &ItemId) -> bool {
        self.tree.child_node(item).is_some()
    }

    pub fn item_count(&self) -> usize {
        self.tree.item_count()
    }

    /// Every item in build order with its rectangle from the last solve.
    pub fn items(&self) -> impl Iterator<Item = (&ItemId, Option<Rect>)> {
        self.tree
            .build_order()
            .iter()
            .map(|id| (id, self.tree.rect(id)))
    }

    /// Generates an item identifier that no existing item uses.
    pub(crate) fn next_item_id(&mut self, prefix: Prefix) -> ItemId {
        let prefix = match prefix {
            Prefix::Item => &self.config.item_prefix,
            Prefix::Spacer => &self.config.spacer_prefix,
        };
        loop {
            let id = ItemId::from(self.registry.generate(prefix));
            if !self.tree.contains_item(&id) {
                return id;
            }
        }
    }
}

#[cfg(feature = "profiling")]
fn default_profiler() -> Box<dyn Profiler> {
    Box::new(crate::perf::DebugProfiler::new())
}

#[cfg(not(feature = "profiling"))]
fn default_profiler() -> Box<dyn Profiler> {
    Box::new(crate::perf::NoOpProfiler)
}
