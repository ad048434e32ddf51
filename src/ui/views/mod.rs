//! Dashboard tabs.

mod analysis;
mod pipeline;
mod progress;

pub use analysis::render_analysis;
pub use pipeline::render_pipeline;
pub use progress::render_progress;
