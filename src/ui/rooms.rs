use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::components;
use super::layout::{rooms_layout, slot_rows};
use super::utils::centered_rect;

use crate::app::{App, Room, Slot};

/// Room picker: carousel on the left, active room details on the right
pub fn render_rooms_view(f: &mut Frame, app: &App) {
    let layout = rooms_layout(f.area());

    components::render_view_header(f, layout.header, "Rooms");
    render_carousel(f, app, layout.carousel);
    render_room_detail(f, app, layout.detail);
    render_rooms_footer(f, app, layout.footer);

    if let Some(message) = app.status_toast_message() {
        let toast_area = Rect {
            x: layout.header.x,
            y: layout.header.y + 1,
            width: layout.header.width.saturating_sub(2),
            height: 1,
        };
        components::render_status_toast(f, toast_area, message);
    }

    if app.rooms.is_empty() {
        let area = f.area();
        render_empty_message(f, area);
    }
}

fn render_carousel(f: &mut Frame, app: &App, area: Rect) {
    let position = match app.rooms.active() {
        Some(active) => format!(" {}/{} ", active + 1, app.rooms.len()),
        None => " 0/0 ".to_string(),
    };
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Rooms ")
            .title_bottom(Line::from(position).alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let slots = app.rooms.presenter().slots();
    for (index, row) in slot_rows(area, slots) {
        let (Some(room), Some(slot)) = (app.rooms.items().get(index), slots.get(index)) else {
            continue;
        };
        f.render_widget(Paragraph::new(slot_line(room, slot, row.width)), row);
    }
}

fn slot_line(room: &Room, slot: &Slot, width: u16) -> Line<'static> {
    let marker = if slot.focusable { "▶ " } else { "  " };
    let offset = if slot.offset == 0 {
        "   ".to_string()
    } else {
        format!("{:+} ", slot.offset)
    };
    let used = marker.chars().count() + offset.chars().count() + 1;
    let name = components::truncate_to_width(&room.name, usize::from(width).saturating_sub(used));

    let name_style = if slot.hidden {
        Style::default().fg(Color::DarkGray)
    } else {
        components::selected_name_style(slot.active)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(offset, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {}", name), name_style),
    ])
}

fn render_room_detail(f: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines = match app.active_room() {
        Some(room) => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                format!("  {}", room.name),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Room     ", label),
                Span::styled(format!("#{}", room.id), value),
            ]),
            Line::from(vec![
                Span::styled("  Route    ", label),
                Span::styled(room.route(), value),
            ]),
            Line::from(vec![
                Span::styled("  Server   ", label),
                Span::styled(app.server_url.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("  Name     ", label),
                Span::styled(app.display_name.clone(), value),
            ]),
        ],
        None => Vec::new(),
    };

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_rooms_footer(f: &mut Frame, app: &App, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "ROOMS",
        &[("↑↓", "move"), ("Enter", "join"), ("?", "help"), ("q", "quit")],
        footer_badge(app),
    );
}

/// Shown while a mouse drag is in progress
fn footer_badge(app: &App) -> Option<&'static str> {
    app.touch.is_active().then_some("DRAG")
}

fn render_empty_message(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No rooms configured",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "Add [[rooms]] entries to config.toml",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        popup,
    );
}
