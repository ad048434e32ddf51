//! Raw issue table with row selection.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::api::IssueRecord;
use crate::ui::theme::{priority_color, status_color, Theme};

/// Issue table state.
#[derive(Debug, Default)]
pub struct IssueTable {
    /// Ratatui selection state.
    state: TableState,
    /// Number of rows.
    len: usize,
}

impl IssueTable {
    /// Create a table for `len` rows, selecting the first one if any.
    pub fn new(len: usize) -> Self {
        let mut state = TableState::default();
        if len > 0 {
            state.select(Some(0));
        }
        Self { state, len }
    }

    /// Get the selected row index.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Select the next row, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.state.select(Some(next));
    }

    /// Select the previous row, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let previous = match self.state.selected() {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(previous));
    }

    /// Render the issues.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, issues: &[IssueRecord]) {
        let theme = Theme::default();

        let header = Row::new(["Key", "Type", "Status", "Priority", "Summary"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = issues.iter().map(|issue| {
            Row::new(vec![
                Cell::from(issue.key.clone()),
                Cell::from(issue.issue_type.clone()),
                Cell::from(Span::styled(
                    issue.status.clone(),
                    Style::default().fg(status_color(&issue.status)),
                )),
                Cell::from(Span::styled(
                    issue.priority.clone(),
                    Style::default().fg(priority_color(&issue.priority)),
                )),
                Cell::from(issue.summary.clone()),
            ])
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(10),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Issue details ", theme.title())),
            )
            .highlight_style(theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}
