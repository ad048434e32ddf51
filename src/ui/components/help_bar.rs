//! Footer help bar component.
//!
//! Displays keyboard shortcut hints on the left and the data timestamp on
//! the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the help bar.
pub fn render_help_bar(frame: &mut Frame, area: Rect, hints: &str, last_updated: &str) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(parse_hints_to_spans(hints))), left);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Last updated: {}", last_updated),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        right,
    );
}

/// Parse hint text into styled spans.
///
/// Keys in brackets are highlighted, descriptions are dimmed.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), text_style));
                }
                in_bracket = true;
                current.push(c);
            }
            ']' if in_bracket => {
                current.push(c);
                spans.push(Span::styled(std::mem::take(&mut current), key_style));
                in_bracket = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, text_style));
    }

    spans
}
