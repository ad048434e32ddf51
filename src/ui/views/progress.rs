//! Project progress tab.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType},
    Frame,
};

use crate::dashboard::{ComponentProgress, DashboardData, WeeklyProgress};
use crate::ui::theme::{progress_color, Theme};

/// Render the progress tab.
pub fn render_progress(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let gauges_height = data.components.len() as u16 * 3 + 2;
    let [chart_area, components_area] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(gauges_height)]).areas(area);

    render_weekly(frame, chart_area, &data.weekly);
    render_components(frame, components_area, &data.components);
}

/// Convert one weekly series into chart points.
fn series(weekly: &[WeeklyProgress], value: fn(&WeeklyProgress) -> u64) -> Vec<(f64, f64)> {
    weekly
        .iter()
        .enumerate()
        .map(|(i, week)| (i as f64, value(week) as f64))
        .collect()
}

fn render_weekly(frame: &mut Frame, area: Rect, weekly: &[WeeklyProgress]) {
    let created = series(weekly, |w| w.created);
    let completed = series(weekly, |w| w.completed);
    let tests = series(weekly, |w| w.tests_added);

    let y_max = weekly
        .iter()
        .map(|w| w.created.max(w.completed).max(w.tests_added))
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let x_max = weekly.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Created")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(0xFF, 0x6B, 0x6B)))
            .data(&created),
        Dataset::default()
            .name("Completed")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(0x4E, 0xCD, 0xC4)))
            .data(&completed),
        Dataset::default()
            .name("Tests added")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&tests),
    ];

    let x_labels: Vec<Span> = weekly.iter().map(|w| Span::raw(w.week.clone())).collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", y_max / 2.0)),
        Span::raw(format!("{}", y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Weekly progress ", Theme::default().title())),
        )
        .x_axis(
            Axis::default()
                .title("Period")
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Issues")
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_components(frame: &mut Frame, area: Rect, components: &[ComponentProgress]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Component progress ", Theme::default().title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(3); components.len()]).split(inner);

    for (component, row) in components.iter().zip(rows.iter()) {
        let percent = component.percent.min(100);
        let gauge = Gauge::default()
            .block(Block::default().title(component.name.clone()))
            .gauge_style(Style::default().fg(progress_color(percent)))
            .percent(percent);
        frame.render_widget(gauge, *row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_issues;

    #[test]
    fn test_series_indexes_weeks() {
        let data = DashboardData::new(mock_issues(), "Demo data");
        let created = series(&data.weekly, |w| w.created);
        assert_eq!(created, vec![(0.0, 3.0), (1.0, 4.0), (2.0, 3.0), (3.0, 2.0)]);
    }

    #[test]
    fn test_series_empty() {
        assert!(series(&[], |w| w.completed).is_empty());
    }
}
