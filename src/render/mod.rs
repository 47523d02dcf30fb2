//! Page rendering
//!
//! Both renderers are pure functions from records to Markdown/MDX text: a
//! front-matter block, headings, a table and, for run pages, plot
//! references and an optional JSON code block.

mod format;
mod index;
mod page;

pub use format::{format_metric, format_optional_metric, format_plain, plot_caption, title_case, NOT_AVAILABLE};
pub use index::{leaderboard_row, render_index_page, LEADERBOARD_METRICS, STATUS_MARKER};
pub use page::render_experiment_page;
