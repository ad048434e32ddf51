//! Terminal dashboard session.

use std::io::{self, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::api::JiraConnector;
use crate::app::App;
use crate::config::Settings;
use crate::dashboard::DashboardData;
use crate::error::{AppError, Result};
use crate::events::EventHandler;
use crate::mock::mock_issues;

/// Label shown as the data source for the built-in issues.
const DEMO_SOURCE: &str = "Demo data";

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Load the dataset and run the dashboard until the user quits.
///
/// With a connector the issues come from a JIRA search; a failed search
/// shows an empty dashboard. Without one the demo issues are used.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub async fn run_dashboard(
    connector: Option<JiraConnector>,
    jql: &str,
    settings: &Settings,
) -> Result<()> {
    let data = match connector {
        Some(mut connector) => {
            let issues = connector.search_issues(jql, settings.max_results).await;
            info!(
                issues = issues.len(),
                stats = %connector.get_statistics(),
                "Loaded live issues"
            );
            DashboardData::new(issues, connector.base_url())
        }
        None => DashboardData::new(mock_issues(), DEMO_SOURCE),
    };

    let mut app = App::new(data);
    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;

    info!("Dashboard closed");
    result
}

fn event_loop(terminal: &mut DashboardTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        app.handle_event(events.next()?);
    }
    Ok(())
}

fn setup_terminal() -> Result<DashboardTerminal> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("cannot enable raw mode: {}", e)))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(AppError::terminal(format!(
            "cannot enter alternate screen: {}",
            e
        )));
    }

    let mut terminal = restore_on_error(Terminal::new(CrosstermBackend::new(stdout)))?;
    restore_on_error(terminal.clear())?;
    Ok(terminal)
}

/// Leave raw mode and the alternate screen when a setup step fails.
fn restore_on_error<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        let _ = restore_terminal();
        AppError::terminal(format!("cannot initialize terminal: {}", e))
    })
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Restore the terminal before the default panic output is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);

        error!(%panic_info, "Dashboard panicked");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_on_error_passes_success_through() {
        assert_eq!(restore_on_error(Ok(7)).unwrap(), 7);
    }

    #[test]
    fn test_restore_on_error_reports_terminal_error() {
        let err = restore_on_error::<()>(Err(io::Error::other("no tty"))).unwrap_err();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.user_message().contains("no tty"));
    }
}
