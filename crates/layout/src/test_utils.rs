use crate::{ItemId, LayoutEngine, Rect};

/// Installs `env_logger` once for the test binary; later calls are ignored.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Float comparison with the tolerance layout results are held to.
pub fn floats_fuzzy_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        floats_fuzzy_eq(actual, expected),
        "expected {expected}, got {actual}"
    );
}

/// Rectangle of a named item after a successful solve.
pub fn solved_rect(engine: &LayoutEngine, id: &str) -> Rect {
    engine
        .rect(&ItemId::new(id))
        .unwrap_or_else(|| panic!("item '{id}' has no rectangle"))
}
