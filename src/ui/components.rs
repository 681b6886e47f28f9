use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = "  ";

/// Bordered header with the app name and the current view title
pub fn render_view_header(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Lobby",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().fg(Color::DarkGray)),
            Span::styled(title.to_string(), Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

#[must_use]
pub fn selected_name_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Footer line: mode badge, key hints, then an optional live badge such as `DRAG`
#[must_use]
pub fn footer_line(mode: &str, keybindings: &[(&str, &str)], badge: Option<&str>) -> Line<'static> {
    let key_style = Style::default().fg(Color::Black).bg(Color::Yellow);
    let hint_style = Style::default().fg(Color::White);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    spans.extend(keybindings.iter().flat_map(|&(key, hint)| {
        [
            Span::raw(SEPARATOR),
            Span::styled(format!(" {} ", key), key_style),
            Span::styled(format!(" {}", hint), hint_style),
        ]
    }));
    if let Some(badge) = badge {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", badge),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
    badge: Option<&str>,
) {
    f.render_widget(
        Paragraph::new(footer_line(mode, keybindings, badge)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut with `…`
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut result = String::new();
    for character in text.chars() {
        let char_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        width += char_width;
        result.push(character);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        assert_eq!(truncate_to_width("General", 10), "General");
        assert_eq!(truncate_to_width("General", 7), "General");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate_to_width("Off-topic", 5), "Off-…");
        assert_eq!(truncate_to_width("Off-topic", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語チャット", 5), "日本…");
    }

    fn footer_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_footer_lists_keys_after_mode() {
        let text = footer_text(&footer_line("ROOMS", &[("q", "quit")], None));
        assert_eq!(text, "  ROOMS    q   quit");
    }

    #[test]
    fn test_footer_badge_only_when_given() {
        let keys = [("Enter", "join")];
        assert!(!footer_text(&footer_line("ROOMS", &keys, None)).contains("DRAG"));
        assert!(footer_text(&footer_line("ROOMS", &keys, Some("DRAG"))).ends_with(" DRAG "));
    }
}
