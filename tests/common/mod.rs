use trellis::{ItemId, LayoutEngine, Rect};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const EPSILON: f32 = 0.01;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rectangle of a named item, or an error naming the item when it was not solved.
pub fn rect_of(engine: &LayoutEngine, id: &str) -> Result<Rect, Box<dyn std::error::Error>> {
    engine
        .rect(&ItemId::new(id))
        .ok_or_else(|| format!("item '{}' has no rectangle", id).into())
}

#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected): (f32, f32) = ($actual, $expected);
        assert!(
            (actual - expected).abs() < common::EPSILON,
            "{} = {}, expected {}",
            stringify!($actual),
            actual,
            expected
        );
    }};
}
