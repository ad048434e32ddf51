//! JIRA analysis tab.
//!
//! Status and priority distributions side by side, the type by status
//! breakdown below them, and the raw issue table at the bottom.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::dashboard::DashboardData;
use crate::report::Tally;
use crate::ui::components::IssueTable;
use crate::ui::theme::{priority_color, status_color, Theme};

/// Render the analysis tab.
pub fn render_analysis(frame: &mut Frame, area: Rect, data: &DashboardData, table: &mut IssueTable) {
    let [charts_area, types_area, table_area] = Layout::vertical([
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(5),
    ])
    .areas(area);

    let [status_area, priority_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(charts_area);

    render_distribution(
        frame,
        status_area,
        " By status ",
        &data.status_counts(),
        status_color,
    );
    render_distribution(
        frame,
        priority_area,
        " By priority ",
        &data.priority_counts(),
        priority_color,
    );
    render_type_breakdown(frame, types_area, data);
    table.render(frame, table_area, &data.issues);
}

/// Render one bar per tally entry.
fn render_distribution(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tally: &Tally,
    color_for: fn(&str) -> Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), Theme::default().title()));

    if tally.is_empty() {
        frame.render_widget(Paragraph::new("No issues").block(block), area);
        return;
    }

    let bars: Vec<Bar> = tally
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(label.to_string()))
                .style(Style::default().fg(color_for(label)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(2)
        .max(tally.max() as u64);

    frame.render_widget(chart, area);
}

/// Render a bar group per issue type, one bar per status.
fn render_type_breakdown(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let statuses = data.status_counts();
    let breakdown = breakdown_values(data, &statuses);

    let legend: Vec<Span> = statuses
        .iter()
        .map(|(status, _)| status)
        .flat_map(|status| {
            [
                Span::styled("■ ", Style::default().fg(status_color(status))),
                Span::raw(format!("{}  ", status)),
            ]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Issue types ", Theme::default().title()))
        .title_bottom(Line::from(legend));

    if breakdown.is_empty() {
        frame.render_widget(Paragraph::new("No issues").block(block), area);
        return;
    }

    let groups: Vec<(String, Vec<Bar>)> = breakdown
        .iter()
        .map(|(issue_type, values)| {
            let bars = statuses
                .iter()
                .zip(values)
                .map(|((status, _), value)| {
                    Bar::default()
                        .value(*value)
                        .text_value(String::new())
                        .style(Style::default().fg(status_color(status)))
                })
                .collect();
            (issue_type.clone(), bars)
        })
        .collect();

    let max = breakdown
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .max()
        .unwrap_or(0);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(4)
        .max(max);

    for (label, bars) in &groups {
        chart = chart.data(BarGroup::default().label(Line::from(label.clone())).bars(bars));
    }

    frame.render_widget(chart, area);
}

/// Per-type counts aligned with the statuses present in the dataset, in
/// first-seen order.
fn breakdown_values(data: &DashboardData, statuses: &Tally) -> Vec<(String, Vec<u64>)> {
    data.type_breakdown()
        .into_iter()
        .map(|entry| {
            let values = statuses
                .iter()
                .map(|(status, _)| entry.statuses.get(status) as u64)
                .collect();
            (entry.issue_type, values)
        })
        .collect()
}
