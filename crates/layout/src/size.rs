//! The size table: declared sizing rules keyed by [`SizeId`], plus the lengths
//! they resolve to during a solve.
//!
//! Declared specs are never overwritten by the solver. Each solve starts by
//! discarding the previous resolutions, so percentages and flex weights are
//! recomputed against whatever rectangle the next solve is given.

use crate::LayoutError;
use crate::registry::IdRegistry;
use std::collections::HashMap;
use trellis_types::SizeId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// An absolute main-axis length.
    Fixed(f32),
    /// A percentage (0..=100 typically) of the containing node's main-axis length.
    Percent(f32),
    /// A relative share of the space left after fixed and percentage items.
    FlexWeight(f32),
}

impl SizeSpec {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SizeSpec::Fixed(_) => "fixed",
            SizeSpec::Percent(_) => "percent",
            SizeSpec::FlexWeight(_) => "flex weight",
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            SizeSpec::Fixed(v) | SizeSpec::Percent(v) | SizeSpec::FlexWeight(v) => *v,
        }
    }

    fn validate(self) -> Result<Self, LayoutError> {
        let value = self.value();
        if value.is_finite() && value >= 0.0 {
            Ok(self)
        } else {
            Err(LayoutError::InvalidSizeValue {
                kind: self.kind_name(),
                value,
            })
        }
    }
}

/// How an item asks for its size: a fresh spec, or a link to an existing entry
/// so that several items always share one resolved length.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeReference {
    Spec(SizeSpec),
    Link(SizeId),
}

impl From<SizeSpec> for SizeReference {
    fn from(spec: SizeSpec) -> Self {
        SizeReference::Spec(spec)
    }
}

impl From<SizeId> for SizeReference {
    fn from(id: SizeId) -> Self {
        SizeReference::Link(id)
    }
}

impl From<&SizeId> for SizeReference {
    fn from(id: &SizeId) -> Self {
        SizeReference::Link(id.clone())
    }
}

#[derive(Debug, Clone)]
struct SizeEntry {
    declared: SizeSpec,
    resolved: Option<f32>,
}

#[derive(Debug, Default)]
pub struct SizeTable {
    entries: HashMap<SizeId, SizeEntry>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `spec` under a freshly generated identifier.
    pub fn register(
        &mut self,
        registry: &mut IdRegistry,
        prefix: &str,
        spec: SizeSpec,
    ) -> Result<SizeId, LayoutError> {
        let spec = spec.validate()?;
        let id = SizeId::from(registry.generate(prefix));
        self.entries.insert(
            id.clone(),
            SizeEntry {
                declared: spec,
                resolved: None,
            },
        );
        Ok(id)
    }

    /// Registers inline specs; checks that links point at an existing entry.
    pub fn resolve_reference(
        &mut self,
        registry: &mut IdRegistry,
        prefix: &str,
        reference: SizeReference,
    ) -> Result<SizeId, LayoutError> {
        match reference {
            SizeReference::Spec(spec) => self.register(registry, prefix, spec),
            SizeReference::Link(id) => {
                if self.entries.contains_key(&id) {
                    Ok(id)
                } else {
                    Err(LayoutError::MissingLink(id))
                }
            }
        }
    }

    /// The current view of an entry: `Fixed` once resolved, the declared spec otherwise.
    pub fn get(&self, id: &SizeId) -> Result<SizeSpec, LayoutError> {
        let entry = self.entry(id)?;
        Ok(match entry.resolved {
            Some(length) => SizeSpec::Fixed(length),
            None => entry.declared,
        })
    }

    /// The spec the caller declared, regardless of any resolution.
    pub fn declared(&self, id: &SizeId) -> Result<SizeSpec, LayoutError> {
        Ok(self.entry(id)?.declared)
    }

    pub fn resolved(&self, id: &SizeId) -> Option<f32> {
        self.entries.get(id).and_then(|entry| entry.resolved)
    }

    /// Replaces the declared spec and drops any stale resolution.
    pub fn set(&mut self, id: &SizeId, spec: SizeSpec) -> Result<(), LayoutError> {
        let spec = spec.validate()?;
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| LayoutError::MissingSize(id.clone()))?;
        entry.declared = spec;
        entry.resolved = None;
        Ok(())
    }

    pub(crate) fn resolve(&mut self, id: &SizeId, length: f32) -> Result<(), LayoutError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| LayoutError::MissingSize(id.clone()))?;
        entry.resolved = Some(length);
        Ok(())
    }

    pub(crate) fn clear_resolved(&mut self) {
        for entry in self.entries.values_mut() {
            entry.resolved = None;
        }
    }

    pub fn contains(&self, id: &SizeId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: &SizeId) -> Result<&SizeEntry, LayoutError> {
        self.entries
            .get(id)
            .ok_or_else(|| LayoutError::MissingSize(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(spec: SizeSpec) -> (SizeTable, IdRegistry, SizeId) {
        let mut table = SizeTable::new();
        let mut registry = IdRegistry::new();
        let id = table.register(&mut registry, "size-", spec).unwrap();
        (table, registry, id)
    }

    #[test]
    fn test_register_allocates_unique_ids() {
        let mut table = SizeTable::new();
        let mut registry = IdRegistry::new();
        let a = table.register(&mut registry, "size-", SizeSpec::Fixed(10.0)).unwrap();
        let b = table.register(&mut registry, "size-", SizeSpec::Fixed(10.0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_link_returns_existing_id() {
        let (mut table, mut registry, id) = table_with(SizeSpec::Percent(25.0));
        let linked = table
            .resolve_reference(&mut registry, "size-", SizeReference::from(&id))
            .unwrap();
        assert_eq!(linked, id);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_link_to_unknown_id_fails() {
        let mut table = SizeTable::new();
        let mut registry = IdRegistry::new();
        let err = table
            .resolve_reference(&mut registry, "size-", SizeReference::Link(SizeId::new("nope")))
            .unwrap_err();
        assert_eq!(err, LayoutError::MissingLink(SizeId::new("nope")));
        assert!(table.is_empty());
    }

    #[test]
    fn test_resolution_shadows_declared_until_cleared() {
        let (mut table, _, id) = table_with(SizeSpec::FlexWeight(2.0));
        table.resolve(&id, 80.0).unwrap();
        assert_eq!(table.get(&id).unwrap(), SizeSpec::Fixed(80.0));
        assert_eq!(table.declared(&id).unwrap(), SizeSpec::FlexWeight(2.0));

        table.clear_resolved();
        assert_eq!(table.get(&id).unwrap(), SizeSpec::FlexWeight(2.0));
        assert_eq!(table.resolved(&id), None);
    }

    #[test]
    fn test_set_replaces_declared_spec() {
        let (mut table, _, id) = table_with(SizeSpec::Percent(50.0));
        table.resolve(&id, 150.0).unwrap();
        table.set(&id, SizeSpec::Fixed(20.0)).unwrap();
        assert_eq!(table.get(&id).unwrap(), SizeSpec::Fixed(20.0));
        assert_eq!(table.resolved(&id), None);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_values() {
        let mut table = SizeTable::new();
        let mut registry = IdRegistry::new();
        assert!(matches!(
            table.register(&mut registry, "size-", SizeSpec::Fixed(-1.0)),
            Err(LayoutError::InvalidSizeValue { kind: "fixed", .. })
        ));
        assert!(matches!(
            table.register(&mut registry, "size-", SizeSpec::FlexWeight(f32::NAN)),
            Err(LayoutError::InvalidSizeValue { kind: "flex weight", .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_id_lookups_fail() {
        let mut table = SizeTable::new();
        let id = SizeId::new("size-9");
        assert_eq!(table.get(&id), Err(LayoutError::MissingSize(id.clone())));
        assert_eq!(
            table.set(&id, SizeSpec::Fixed(1.0)),
            Err(LayoutError::MissingSize(id.clone()))
        );
    }
}
