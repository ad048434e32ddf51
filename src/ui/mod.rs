//! User interface components and views.
//!
//! This module contains all terminal rendering: the per-tab views and the
//! reusable pieces they share.

pub mod components;
pub mod theme;
pub mod views;

pub use components::{render_help_bar, render_metrics, render_sidebar, IssueTable};
pub use theme::Theme;
pub use views::{render_analysis, render_pipeline, render_progress};
