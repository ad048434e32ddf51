//! CI/CD pipeline tab.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::dashboard::{DashboardData, PipelineStage, StageStatus};
use crate::ui::theme::Theme;

/// Render the pipeline tab.
pub fn render_pipeline(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let [stages_area, durations_area] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(8)]).areas(area);

    render_stages(frame, stages_area, data);
    render_durations(frame, durations_area, &data.pipeline);
}

fn stage_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Success => Color::Rgb(0x4E, 0xCD, 0xC4),
        StageStatus::Failed => Color::Red,
        StageStatus::Upcoming => Color::DarkGray,
    }
}

fn stage_lines(stage: &PipelineStage) -> Vec<Line<'static>> {
    let color = stage_color(stage.status);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", stage.status.icon()), Style::default().fg(color)),
        Span::styled(
            stage.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" - {}", stage.status.label()),
            Style::default().fg(color),
        ),
    ])];

    lines.extend(
        stage
            .jobs
            .iter()
            .map(|job| Line::from(format!("    - {}", job))),
    );
    lines
}

fn render_stages(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let theme = Theme::default();

    let mut lines = vec![Line::from(Span::styled(
        "Current stages",
        Style::default().fg(theme.muted),
    ))];
    for stage in &data.pipeline {
        lines.extend(stage_lines(stage));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Next stage",
        Style::default().fg(theme.muted),
    )));
    lines.extend(stage_lines(&data.next_stage));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" GitHub Actions pipeline ", theme.title())),
        );

    frame.render_widget(paragraph, area);
}

fn render_durations(frame: &mut Frame, area: Rect, stages: &[PipelineStage]) {
    let bars: Vec<Bar> = stages
        .iter()
        .filter_map(|stage| {
            stage.duration_secs.map(|secs| {
                Bar::default()
                    .value(secs)
                    .label(Line::from(stage.name.clone()))
                    .text_value(format!("{}s", secs))
                    .style(Style::default().fg(stage_color(stage.status)))
            })
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Stage duration ", Theme::default().title())),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
