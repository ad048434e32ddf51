//! Dashboard application state.
//!
//! Follows The Elm Architecture (TEA): events update the [`App`] model and
//! [`App::view`] draws it. Rendering never mutates the dataset.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tracing::{debug, trace};

use crate::dashboard::DashboardData;
use crate::events::{action_for_key, Action, Event, KEY_HINTS};
use crate::ui::{
    render_analysis, render_help_bar, render_metrics, render_pipeline, render_progress,
    render_sidebar, IssueTable, Theme,
};

/// Width of the project sidebar.
const SIDEBAR_WIDTH: u16 = 26;

/// The dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Issue charts and table.
    #[default]
    Analysis,
    /// CI/CD pipeline stages.
    Pipeline,
    /// Weekly and per-component progress.
    Progress,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Analysis, Tab::Pipeline, Tab::Progress];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Analysis => "JIRA Analysis",
            Tab::Pipeline => "CI/CD Pipeline",
            Tab::Progress => "Progress",
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Tab::Analysis => 0,
            Tab::Pipeline => 1,
            Tab::Progress => 2,
        }
    }

    /// The following tab, wrapping around.
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// The preceding tab, wrapping around.
    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// The dashboard model.
pub struct App {
    /// What is being displayed.
    data: DashboardData,
    /// The visible tab.
    tab: Tab,
    /// Issue table selection.
    issue_table: IssueTable,
    /// Whether the event loop should stop.
    should_quit: bool,
}

impl App {
    /// Create the dashboard for a dataset.
    pub fn new(data: DashboardData) -> Self {
        debug!(issues = data.issues.len(), source = %data.source, "Creating dashboard");
        let issue_table = IssueTable::new(data.issues.len());
        Self {
            data,
            tab: Tab::default(),
            issue_table,
            should_quit: false,
        }
    }

    /// The visible tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The dataset being displayed.
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    /// Index of the selected issue row.
    pub fn selected_issue(&self) -> Option<usize> {
        self.issue_table.selected()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Update the model with an event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    self.apply(action);
                }
            }
            Event::Resize(width, height) => trace!(width, height, "Terminal resized"),
            Event::Tick => {}
        }
    }

    /// Apply a dashboard action.
    pub fn apply(&mut self, action: Action) {
        trace!(?action, "Applying action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextTab => self.tab = self.tab.next(),
            Action::PreviousTab => self.tab = self.tab.previous(),
            Action::SelectTab(index) => {
                if let Some(tab) = Tab::ALL.get(index) {
                    self.tab = *tab;
                }
            }
            Action::Down if self.tab == Tab::Analysis => self.issue_table.select_next(),
            Action::Up if self.tab == Tab::Analysis => self.issue_table.select_previous(),
            Action::Down | Action::Up => {}
        }
    }

    /// Draw the whole dashboard.
    pub fn view(&mut self, frame: &mut Frame) {
        let [header_area, metrics_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        render_metrics(frame, metrics_area, &self.data.metrics());

        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area);
        render_sidebar(frame, sidebar_area, &self.data);

        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(main_area);
        self.render_tabs(frame, tabs_area);

        match self.tab {
            Tab::Analysis => {
                render_analysis(frame, content_area, &self.data, &mut self.issue_table)
            }
            Tab::Pipeline => render_pipeline(frame, content_area, &self.data),
            Tab::Progress => render_progress(frame, content_area, &self.data),
        }

        render_help_bar(frame, footer_area, KEY_HINTS, &self.data.last_updated());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let title = Line::from(vec![
            Span::styled("jiradash", theme.title()),
            Span::raw(" - JIRA project dashboard"),
        ]);
        frame.render_widget(
            Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL))
            .select(self.tab.index())
            .style(Style::default().fg(theme.fg))
            .highlight_style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_issues;
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn demo_app() -> App {
        let at = Local.with_ymd_and_hms(2026, 2, 6, 14, 5, 0).unwrap();
        App::new(DashboardData::with_timestamp(mock_issues(), "Demo data", at))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Analysis.next(), Tab::Pipeline);
        assert_eq!(Tab::Progress.next(), Tab::Analysis);
        assert_eq!(Tab::Analysis.previous(), Tab::Progress);
    }

    #[test]
    fn test_new_app_starts_on_analysis() {
        let app = demo_app();
        assert_eq!(app.tab(), Tab::Analysis);
        assert_eq!(app.selected_issue(), Some(0));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_key_events_switch_tabs() {
        let mut app = demo_app();
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.tab(), Tab::Pipeline);
        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.tab(), Tab::Progress);
        app.handle_event(key(KeyCode::Char('h')));
        assert_eq!(app.tab(), Tab::Pipeline);
    }

    #[test]
    fn test_selection_only_moves_on_analysis_tab() {
        let mut app = demo_app();
        app.handle_event(key(KeyCode::Char('j')));
        assert_eq!(app.selected_issue(), Some(1));

        app.apply(Action::NextTab);
        app.handle_event(key(KeyCode::Char('j')));
        assert_eq!(app.selected_issue(), Some(1));
    }

    #[test]
    fn test_quit() {
        let mut app = demo_app();
        app.handle_event(Event::Tick);
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_view_analysis_tab() {
        let mut app = demo_app();
        let screen = draw(&mut app);

        assert!(screen.contains("JIRA project dashboard"));
        assert!(screen.contains("Total issues 6"));
        assert!(screen.contains("1 JIRA Analysis"));
        assert!(screen.contains("DEMO-1"));
        assert!(screen.contains("Update documentation"));
        assert!(screen.contains("Implementation"));
        assert!(screen.contains("Last updated: 06/02/2026 14:05"));
    }

    #[test]
    fn test_view_pipeline_tab() {
        let mut app = demo_app();
        app.apply(Action::SelectTab(1));
        let screen = draw(&mut app);

        assert!(screen.contains("Test - Success"));
        assert!(screen.contains("- Install dependencies"));
        assert!(screen.contains("Deploy - Upcoming"));
        assert!(screen.contains("Stage duration"));
        assert!(!screen.contains("DEMO-1"));
    }

    #[test]
    fn test_view_progress_tab() {
        let mut app = demo_app();
        app.apply(Action::SelectTab(2));
        let screen = draw(&mut app);

        assert!(screen.contains("Weekly progress"));
        assert!(screen.contains("Backend"));
        assert!(screen.contains("70%"));
    }

    #[test]
    fn test_view_empty_dataset() {
        let mut app = App::new(DashboardData::new(Vec::new(), "https://test.atlassian.net"));
        let screen = draw(&mut app);

        assert!(screen.contains("Total issues 0"));
        assert!(screen.contains("No issues"));
    }
}
