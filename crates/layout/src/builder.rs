use crate::LayoutError;
use crate::engine::LayoutEngine;
use crate::size::{SizeReference, SizeSpec};
use crate::tree::{Item, NodeId};
use trellis_types::{Direction, ItemId, Padding, SizeId};

/// Populates one container of a [`LayoutEngine`].
///
/// A builder borrows the engine mutably for as long as it lives, so it can never
/// outlive the engine that owns the size table and item maps. Nested builders
/// returned by [`Builder::nest`] reborrow from their parent.
#[derive(Debug)]
pub struct Builder<'e> {
    engine: &'e mut LayoutEngine,
    node: NodeId,
}

impl<'e> Builder<'e> {
    pub(crate) fn new(engine: &'e mut LayoutEngine, node: NodeId) -> Self {
        Self { engine, node }
    }

    /// The container this builder appends to.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Appends an item with a generated identifier.
    pub fn add_item(&mut self, size: impl Into<SizeReference>) -> Result<Item, LayoutError> {
        let id = self.engine.next_item_id(Prefix::Item);
        self.push(id, size.into())
    }

    /// Appends an item with a caller-chosen identifier.
    pub fn add_item_with_id(
        &mut self,
        id: impl Into<ItemId>,
        size: impl Into<SizeReference>,
    ) -> Result<Item, LayoutError> {
        let id = id.into();
        if self.engine.tree.contains_item(&id) {
            return Err(LayoutError::DuplicateItem(id));
        }
        self.push(id, size.into())
    }

    /// Appends an anonymous item that only occupies main-axis space.
    pub fn add_spacer(&mut self, size: impl Into<SizeReference>) -> Result<(), LayoutError> {
        let id = self.engine.next_item_id(Prefix::Spacer);
        self.push(id, size.into()).map(|_| ())
    }

    /// Registers a size without an item, so later items can link to it.
    pub fn register_size(&mut self, spec: SizeSpec) -> Result<SizeId, LayoutError> {
        let engine = &mut *self.engine;
        engine
            .sizes
            .register(&mut engine.registry, &engine.config.size_prefix, spec)
    }

    /// Turns `item` into a container and returns a builder scoped to it.
    pub fn nest(
        &mut self,
        item: &ItemId,
        direction: Direction,
        padding: Padding,
    ) -> Result<Builder<'_>, LayoutError> {
        let node = self.engine.tree.attach_node(item, direction, padding)?;
        log::debug!(
            "Nested {} container (node {}) under item '{}'",
            direction.name(),
            node.index(),
            item
        );
        Ok(Builder::new(&mut *self.engine, node))
    }

    fn push(&mut self, id: ItemId, size: SizeReference) -> Result<Item, LayoutError> {
        let engine = &mut *self.engine;
        let size = engine
            .sizes
            .resolve_reference(&mut engine.registry, &engine.config.size_prefix, size)?;
        let item = Item::new(id, size);
        engine.tree.push_item(self.node, item.clone())?;
        log::trace!(
            "Added item '{}' (size '{}') to node {}",
            item.id(),
            item.size_id(),
            self.node.index()
        );
        Ok(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Prefix {
    Item,
    Spacer,
}
