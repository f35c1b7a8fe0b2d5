/// Issues identifiers of the form `{prefix}{counter}`.
///
/// One registry belongs to one engine; the counter is shared by every scope of
/// that engine, so identifiers never repeat for the engine's lifetime.
#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    counter: u64,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.counter);
        self.counter += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_monotonic_across_prefixes() {
        let mut registry = IdRegistry::new();
        assert_eq!(registry.generate("item-"), "item-0");
        assert_eq!(registry.generate("size-"), "size-1");
        assert_eq!(registry.generate("item-"), "item-2");
        assert_eq!(registry.issued(), 3);
    }

    #[test]
    fn test_registries_are_independent() {
        let mut a = IdRegistry::new();
        let mut b = IdRegistry::new();
        a.generate("x");
        a.generate("x");
        assert_eq!(b.generate("x"), "x0");
    }
}
