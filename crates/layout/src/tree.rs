use crate::LayoutError;
use crate::engine::LayoutEngine;
use std::collections::HashMap;
use trellis_types::{Direction, ItemId, Padding, Rect, SizeId};

/// Index of a container in the tree's node arena. The root is always `NodeId::ROOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to an item, returned by the builder.
///
/// The item's rectangle is owned by the engine; read it back with [`Item::rect`]
/// after a solve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    id: ItemId,
    size: SizeId,
}

impl Item {
    pub(crate) fn new(id: ItemId, size: SizeId) -> Self {
        Self { id, size }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn size_id(&self) -> &SizeId {
        &self.size
    }

    pub fn rect(&self, engine: &LayoutEngine) -> Option<Rect> {
        engine.rect(&self.id)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ItemSlot {
    pub(crate) item: Item,
    pub(crate) rect: Option<Rect>,
}

/// A container: items laid out one after another along `direction`.
#[derive(Debug, Clone)]
pub struct Node {
    direction: Direction,
    padding: Padding,
    items: Vec<ItemSlot>,
}

impl Node {
    pub(crate) fn new(direction: Direction, padding: Padding) -> Self {
        Self {
            direction,
            padding,
            items: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in layout order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|slot| &slot.item)
    }

    pub(crate) fn item_at(&self, index: usize) -> &Item {
        &self.items[index].item
    }
}

#[derive(Debug, Clone, Copy)]
struct ItemLocation {
    node: NodeId,
    index: usize,
}

/// Containers, the items they hold, and the item-to-container links.
#[derive(Debug)]
pub struct LayoutTree {
    nodes: Vec<Node>,
    item_map: HashMap<ItemId, ItemLocation>,
    node_map: HashMap<ItemId, NodeId>,
    build_order: Vec<ItemId>,
}

impl LayoutTree {
    pub fn new(direction: Direction, padding: Padding) -> Self {
        Self {
            nodes: vec![Node::new(direction, padding)],
            item_map: HashMap::new(),
            node_map: HashMap::new(),
            build_order: Vec::new(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.item_map.contains_key(id)
    }

    pub fn item_count(&self) -> usize {
        self.build_order.len()
    }

    /// The container nested under `item`, if it was turned into one.
    pub fn child_node(&self, item: &ItemId) -> Option<NodeId> {
        self.node_map.get(item).copied()
    }

    pub fn rect(&self, item: &ItemId) -> Option<Rect> {
        let location = self.item_map.get(item)?;
        self.nodes[location.node.0].items[location.index].rect
    }

    /// Item identifiers in the order they were added, across all containers.
    pub fn build_order(&self) -> &[ItemId] {
        &self.build_order
    }

    /// Appends `item` to `node`. The item map is left untouched on failure.
    pub(crate) fn push_item(&mut self, node: NodeId, item: Item) -> Result<(), LayoutError> {
        if self.item_map.contains_key(&item.id) {
            return Err(LayoutError::DuplicateItem(item.id));
        }
        let items = &mut self.nodes[node.0].items;
        self.item_map.insert(
            item.id.clone(),
            ItemLocation {
                node,
                index: items.len(),
            },
        );
        self.build_order.push(item.id.clone());
        items.push(ItemSlot { item, rect: None });
        Ok(())
    }

    /// Turns an existing item into a container and returns the new node.
    pub(crate) fn attach_node(
        &mut self,
        item: &ItemId,
        direction: Direction,
        padding: Padding,
    ) -> Result<NodeId, LayoutError> {
        if !self.item_map.contains_key(item) {
            return Err(LayoutError::MissingItem(item.clone()));
        }
        if self.node_map.contains_key(item) {
            return Err(LayoutError::AlreadyNested(item.clone()));
        }
        validate_padding(&padding)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(direction, padding));
        self.node_map.insert(item.clone(), id);
        Ok(id)
    }

    pub(crate) fn set_rect(&mut self, node: NodeId, index: usize, rect: Rect) {
        self.nodes[node.0].items[index].rect = Some(rect);
    }

    pub(crate) fn clear_rects(&mut self) {
        for node in &mut self.nodes {
            for slot in &mut node.items {
                slot.rect = None;
            }
        }
    }
}

/// Rejects padding with a negative or non-finite side.
pub(crate) fn validate_padding(padding: &Padding) -> Result<(), LayoutError> {
    let sides = [
        ("start_main", padding.start_main),
        ("end_main", padding.end_main),
        ("start_cross", padding.start_cross),
        ("end_cross", padding.end_cross),
    ];
    match sides
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        Some((side, value)) => Err(LayoutError::InvalidPadding { side, value }),
        None => Ok(()),
    }
}
