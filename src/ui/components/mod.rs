//! Reusable UI components.

mod help_bar;
mod issue_table;
mod metrics;
mod sidebar;

pub use help_bar::render_help_bar;
pub use issue_table::IssueTable;
pub use metrics::render_metrics;
pub use sidebar::render_sidebar;
