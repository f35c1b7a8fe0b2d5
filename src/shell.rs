//! A sample application shell: header, sidebar plus content, and a footer.
//!
//! Used by the demo binary and the benchmarks, and handy as a reference for how
//! the builder calls compose.

use trellis_layout::{Direction, LayoutEngine, LayoutError, Padding, SizeReference, SizeSpec};

pub const HEADER: &str = "header";
pub const BODY: &str = "body";
pub const SIDEBAR: &str = "sidebar";
pub const CONTENT: &str = "content";
pub const TOOLBAR: &str = "toolbar";
pub const CARDS: &str = "cards";
pub const FOOTER: &str = "footer";
pub const FOOTER_LEFT: &str = "footer-left";
pub const STATUS: &str = "status";

/// Builds the shell with `cards` equally sized cards and a sidebar of `sidebar_width`.
///
/// The footer's left cell links to the sidebar's size entry, so both columns
/// always line up.
pub fn app_shell(sidebar_width: f32, cards: usize) -> Result<LayoutEngine, LayoutError> {
    let mut engine = LayoutEngine::new(Direction::Down, Padding::zero());

    engine.add_item_with_id(HEADER, SizeSpec::Fixed(64.0))?;
    let body = engine.add_item_with_id(BODY, SizeSpec::FlexWeight(1.0))?;
    let footer = engine.add_item_with_id(FOOTER, SizeSpec::Fixed(32.0))?;

    let sidebar_size = {
        let mut row = engine.nest(body.id(), Direction::Right, Padding::cross(8.0, 8.0))?;
        let sidebar = row.add_item_with_id(SIDEBAR, SizeSpec::Fixed(sidebar_width))?;
        row.add_spacer(SizeSpec::Fixed(8.0))?;
        let content = row.add_item_with_id(CONTENT, SizeSpec::FlexWeight(1.0))?;

        let mut column = row.nest(content.id(), Direction::Down, Padding::all(16.0))?;
        column.add_item_with_id(TOOLBAR, SizeSpec::Percent(10.0))?;
        column.add_spacer(SizeSpec::Fixed(8.0))?;
        let deck = column.add_item_with_id(CARDS, SizeSpec::FlexWeight(1.0))?;

        let mut deck = column.nest(deck.id(), Direction::Right, Padding::zero())?;
        let card_size = deck.register_size(SizeSpec::FlexWeight(1.0))?;
        for index in 0..cards {
            if index > 0 {
                deck.add_spacer(SizeSpec::Fixed(12.0))?;
            }
            deck.add_item_with_id(format!("card-{index}"), &card_size)?;
        }
        sidebar.size_id().clone()
    };

    let mut bar = engine.nest(footer.id(), Direction::Right, Padding::zero())?;
    bar.add_item_with_id(FOOTER_LEFT, SizeReference::Link(sidebar_size))?;
    bar.add_item_with_id(STATUS, SizeSpec::FlexWeight(1.0))?;

    Ok(engine)
}
