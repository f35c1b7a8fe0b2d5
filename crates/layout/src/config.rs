#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// How far (in layout units) fixed and percentage items may overrun a container
    /// that has no flex items before the solve fails with a non-flex overrun.
    ///
    /// Percentages that sum to 100 can land a hair past the container length
    /// through float rounding; the tolerance absorbs that.
    ///
    /// Defaults to `1.0`.
    pub overrun_tolerance: f32,
    /// Prefix for identifiers of anonymous items. Defaults to `"item-"`.
    pub item_prefix: String,
    /// Prefix for identifiers of spacer items. Defaults to `"spacer-"`.
    pub spacer_prefix: String,
    /// Prefix for size table identifiers. Defaults to `"size-"`.
    pub size_prefix: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            overrun_tolerance: 1.0,
            item_prefix: "item-".to_string(),
            spacer_prefix: "spacer-".to_string(),
            size_prefix: "size-".to_string(),
        }
    }
}
