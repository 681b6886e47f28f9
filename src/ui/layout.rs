use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Slot;

/// Areas of the rooms view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomsLayout {
    pub header: Rect,
    pub carousel: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

/// Splits the screen for the rooms view. Shared by the renderer and mouse hit testing.
#[must_use]
pub fn rooms_layout(area: Rect) -> RoomsLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let (header, body, footer) = match &rows[..] {
        [header, body, footer] => (*header, *body, *footer),
        _ => (Rect::default(), area, Rect::default()),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);

    let (carousel, detail) = match &columns[..] {
        [carousel, detail] => (*carousel, *detail),
        _ => (body, Rect::default()),
    };

    RoomsLayout {
        header,
        carousel,
        detail,
        footer,
    }
}

/// Row of every visible slot inside the bordered carousel pane
///
/// The active slot sits on the middle row; the others are placed by their
/// offset and dropped when they fall outside the pane.
#[must_use]
pub fn slot_rows(pane: Rect, slots: &[Slot]) -> Vec<(usize, Rect)> {
    let inner = Rect {
        x: pane.x.saturating_add(1),
        y: pane.y.saturating_add(1),
        width: pane.width.saturating_sub(2),
        height: pane.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return Vec::new();
    }

    let middle = i64::from(inner.height / 2);
    let height = i64::from(inner.height);

    slots
        .iter()
        .filter_map(|slot| {
            let row = middle.checked_add(i64::try_from(slot.offset).ok()?)?;
            if !(0..height).contains(&row) {
                return None;
            }
            let row = u16::try_from(row).ok()?;
            Some((
                slot.index,
                Rect {
                    x: inner.x,
                    y: inner.y + row,
                    width: inner.width,
                    height: 1,
                },
            ))
        })
        .collect()
}

/// Index of the room drawn at `(column, row)`, if any
#[must_use]
pub fn slot_at(pane: Rect, slots: &[Slot], column: u16, row: u16) -> Option<usize> {
    slot_rows(pane, slots)
        .into_iter()
        .find(|(_, area)| contains(*area, column, row))
        .map(|(index, _)| index)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}
