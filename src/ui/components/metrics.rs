//! Headline metric cards.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dashboard::Metrics;
use crate::ui::theme::status_color;

/// Render the four metric cards side by side.
pub fn render_metrics(frame: &mut Frame, area: Rect, metrics: &Metrics) {
    let cards = [
        ("Total issues", metrics.total, Color::White),
        ("In progress", metrics.in_progress, status_color("In Progress")),
        ("Done", metrics.done, status_color("Done")),
        ("Testing", metrics.testing, status_color("Testing")),
    ];

    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let line = Line::from(vec![
            Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);

        let card = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(card, *card_area);
    }
}
