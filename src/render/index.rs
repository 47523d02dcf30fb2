//! Leaderboard index page

use super::format::{format_optional_metric, format_plain};
use crate::config::SiteLinks;
use crate::experiment::{sort_by_date_desc, ExperimentRecord};

/// Status marker shown for every processed run.
pub const STATUS_MARKER: &str = "✅";

/// Metric keys shown as leaderboard columns.
pub const LEADERBOARD_METRICS: [&str; 2] = ["auc", "f1"];

const EMPTY_ROW: &str = "| *No experiments yet* | | | | | | |";

/// Render the leaderboard from the records of the current invocation,
/// newest first.
#[must_use]
pub fn render_index_page(records: &[ExperimentRecord], links: &SiteLinks) -> String {
    let rows: Vec<String> = sort_by_date_desc(records)
        .into_iter()
        .map(|record| leaderboard_row(record, links))
        .collect();
    let table = if rows.is_empty() {
        EMPTY_ROW.to_string()
    } else {
        rows.join("\n")
    };

    format!(
        "---\n\
         title: Experiment Registry\n\
         ---\n\
         \n\
         # Experiment Registry\n\
         \n\
         This page provides an overview of all experiment runs. \
         Individual experiment pages are auto-generated from JSON results.\n\
         \n\
         ## Leaderboard\n\
         \n\
         | Date | Run ID | Dataset | Model | AUC | F1 | Status |\n\
         |------|--------|---------|-------|-----|-----|--------|\n\
         {table}\n\
         \n\
         ---\n\
         \n\
         *This table is auto-generated by `{bin}`.*\n\
         \n\
         ## Adding Experiments\n\
         \n\
         To add a new experiment:\n\
         \n\
         1. Ensure your experiment outputs a `metrics.json` with the required fields \
         (`run_id`, `date`, `dataset`, `model`, `metrics`)\n\
         2. Place artifacts (JSON + plots) in one directory per run\n\
         3. Run the generator: `{bin} <source_dir> [<source_dir> ...]`\n\
         4. Commit and push\n\
         \n\
         The generator will:\n\
         - Copy artifacts to `static/artifacts/<run_id>/`\n\
         - Generate a page in `docs/experiments/YYYY/`\n\
         - Regenerate this leaderboard table from the runs it was given\n",
        bin = crate::GENERATOR_NAME,
    )
}

/// One leaderboard table row.
#[must_use]
pub fn leaderboard_row(record: &ExperimentRecord, links: &SiteLinks) -> String {
    let [auc, f1] = LEADERBOARD_METRICS.map(|key| format_optional_metric(record.metric(key)));
    format!(
        "| {date} | [{run_id}]({link}) | {dataset} | {model} | {auc} | {f1} | {STATUS_MARKER} |",
        date = record.date(),
        run_id = record.run_id(),
        link = links.page(record),
        dataset = format_plain(record.dataset()),
        model = format_plain(record.model()),
    )
}
