//! Snapshot of a solved layout that hosts can serialize or inspect.

use crate::ReportError;
use serde::Serialize;
use trellis_layout::{ItemId, LayoutEngine, Rect};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub id: ItemId,
    /// `None` when the engine has not been solved (or the last solve failed).
    pub rect: Option<Rect>,
    /// Whether the item was turned into a container with `nest`.
    pub container: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutReport {
    pub items: Vec<ItemReport>,
}

impl LayoutReport {
    /// Collects every item of `engine` in build order.
    pub fn capture(engine: &LayoutEngine) -> Self {
        let items = engine
            .items()
            .map(|(id, rect)| ItemReport {
                id: id.clone(),
                rect,
                container: engine.is_container(id),
            })
            .collect();
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&ItemReport> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Items that have a rectangle, i.e. were reached by the last solve.
    pub fn solved(&self) -> impl Iterator<Item = (&ItemId, Rect)> {
        self.items
            .iter()
            .filter_map(|item| item.rect.map(|rect| (&item.id, rect)))
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
