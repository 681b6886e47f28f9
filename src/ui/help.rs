use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components;

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑ ←", "Previous room"),
    ("↓ →", "Next room"),
    ("Home", "First room"),
    ("End", "Last room"),
    ("Enter", "Join the active room"),
    ("Wheel", "Scroll through rooms"),
    ("Click", "Select a room"),
    ("?", "This help"),
    ("q", "Quit"),
];

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_view_header(f, *header, "Help");
        render_help_body(f, *body);
        components::render_navigation_footer(f, *footer, "HELP", &[("Esc", "back")], None);
    }
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Room picker",
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(""),
    ];
    lines.extend(SHORTCUTS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Ctrl+C", Style::default().fg(Color::Yellow)),
        Span::styled("  Quit from anywhere", Style::default().fg(Color::White)),
    ]));

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shortcuts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
