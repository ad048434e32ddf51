//! Project status sidebar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::dashboard::{DashboardData, PhaseState};
use crate::ui::theme::{progress_color, Theme};

/// Render the phase timeline and the overall progress gauge.
pub fn render_sidebar(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let theme = Theme::default();
    let [timeline_area, gauge_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let mut lines = vec![
        Line::from(Span::styled("Source", theme.title())),
        Line::from(Span::styled(data.source.clone(), Style::default().fg(theme.fg))),
        Line::default(),
        Line::from(Span::styled("Timeline", theme.title())),
    ];

    for phase in &data.phases {
        let (icon, color) = match phase.state {
            PhaseState::Complete => ("✓", Color::Green),
            PhaseState::InProgress => ("◐", Color::Yellow),
            PhaseState::Upcoming => ("○", Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(
                phase.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", phase.state.label()),
            Style::default().fg(theme.muted),
        )));
    }

    let timeline = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Project ", theme.title())),
    );
    frame.render_widget(timeline, timeline_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Overall "))
        .gauge_style(Style::default().fg(progress_color(data.overall_progress)))
        .percent(data.overall_progress.min(100));
    frame.render_widget(gauge, gauge_area);
}
