use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Creates a centered rectangle taking the given percentages of `r`
///
/// Small terminals get at least 30x5 cells when they have room for it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = percent_of(r.width, percent_x).max(30.min(r.width));
    let height = percent_of(r.height, percent_y).max(5.min(r.height));

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
