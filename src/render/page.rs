//! Per-run experiment page

use serde_json::Value;

use super::format::{format_metric, format_plain, plot_caption, NOT_AVAILABLE};
use crate::artifacts::{is_image, METRICS_FILE};
use crate::config::SiteLinks;
use crate::experiment::ExperimentRecord;

/// Render the documentation page of one run.
///
/// The output depends only on the arguments: the same record and artifact
/// list always produce the same text. Metric rows follow the record's
/// metric order and plots follow `artifacts` order.
#[must_use]
pub fn render_experiment_page(
    record: &ExperimentRecord,
    artifacts: &[String],
    links: &SiteLinks,
) -> String {
    let run_id = record.run_id();

    let runtime = record
        .runtime_minutes()
        .map(|minutes| format!("- **Runtime:** {} minutes\n", format_plain(minutes)))
        .unwrap_or_default();

    let mut content = format!(
        "---\n\
         title: Run {run_id}\n\
         ---\n\
         \n\
         # Experiment Run: {run_id}\n\
         \n\
         ## Summary\n\
         \n\
         - **Date:** {date}\n\
         - **Dataset:** {dataset}\n\
         - **Model:** {model}\n\
         - **Git commit:** `{commit}`\n\
         {runtime}\n\
         ## Key Metrics\n\
         \n\
         | Metric | Value |\n\
         |--------|-------|\n\
         {metrics}\n\
         \n\
         {plots}## Artifacts\n\
         \n\
         - [{METRICS_FILE}]({metrics_link})\n",
        date = record.date(),
        dataset = format_plain(record.dataset()),
        model = format_plain(record.model()),
        commit = record
            .git_commit()
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_plain),
        metrics = metrics_rows(record),
        plots = plots_section(run_id, artifacts, links),
        metrics_link = links.artifact(run_id, METRICS_FILE),
    );

    if let Some(config) = record.config().filter(|c| has_content(c)) {
        content.push_str(&config_section(config));
    }

    content
}

fn metrics_rows(record: &ExperimentRecord) -> String {
    if record.metrics().is_empty() {
        return "| *No metrics available* | |".to_string();
    }
    record
        .metrics()
        .iter()
        .map(|(key, value)| format!("| {} | {} |", key.to_uppercase(), format_metric(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn plots_section(run_id: &str, artifacts: &[String], links: &SiteLinks) -> String {
    let plots: Vec<&String> = artifacts.iter().filter(|name| is_image(name)).collect();
    if plots.is_empty() {
        return String::new();
    }

    let mut section = String::from("\n## Plots\n\n");
    for plot in plots {
        section.push_str(&format!(
            "![{}]({})\n\n",
            plot_caption(plot),
            links.artifact(run_id, plot)
        ));
    }
    section
}

fn config_section(config: &Value) -> String {
    // Serializing a Value cannot fail: map keys are always strings
    let pretty = serde_json::to_string_pretty(config).unwrap_or_else(|_| config.to_string());
    format!("\n## Configuration\n\n```json\n{pretty}\n```\n\n")
}

fn has_content(config: &Value) -> bool {
    match config {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(true) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ExperimentRecord {
        ExperimentRecord::builder("abc123", "2024-03-01", "mnist", "resnet18")
            .metric("auc", 0.95)
            .metric("f1", 0.88)
            .build()
    }

    #[test]
    fn test_page_front_matter_and_summary() {
        let page = render_experiment_page(&record(), &[], &SiteLinks::default());
        assert!(page.starts_with("---\ntitle: Run abc123\n---\n\n# Experiment Run: abc123\n"));
        assert!(page.contains("- **Date:** 2024-03-01\n"));
        assert!(page.contains("- **Dataset:** mnist\n"));
        assert!(page.contains("- **Model:** resnet18\n"));
        assert!(page.contains("- **Git commit:** `N/A`\n"));
        assert!(!page.contains("Runtime"));
    }

    #[test]
    fn test_page_metrics_table() {
        let page = render_experiment_page(&record(), &[], &SiteLinks::default());
        assert!(page.contains(
            "| Metric | Value |\n|--------|-------|\n| AUC | 0.9500 |\n| F1 | 0.8800 |\n"
        ));
    }

    #[test]
    fn test_page_without_metrics() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m").build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(page.contains("| *No metrics available* | |"));
    }

    #[test]
    fn test_page_runtime_line() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m")
            .runtime_minutes(42)
            .build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(page.contains("- **Git commit:** `N/A`\n- **Runtime:** 42 minutes\n\n## Key Metrics"));
    }

    #[test]
    fn test_page_plots_skip_non_images() {
        let artifacts = vec!["metrics.json".to_string(), "loss_curve.png".to_string()];
        let page = render_experiment_page(&record(), &artifacts, &SiteLinks::default());
        assert!(page.contains("## Plots\n\n![Loss Curve](/artifacts/abc123/loss_curve.png)\n\n## Artifacts"));
        assert!(!page.contains("![Metrics"));
        assert!(page.contains("- [metrics.json](/artifacts/abc123/metrics.json)\n"));
    }

    #[test]
    fn test_page_config_block() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m")
            .config(json!({"lr": 0.01, "epochs": 10}))
            .build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(page.ends_with(
            "## Configuration\n\n```json\n{\n  \"lr\": 0.01,\n  \"epochs\": 10\n}\n```\n\n"
        ));
    }

    #[test]
    fn test_page_empty_config_omitted() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m")
            .config(json!({}))
            .build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(!page.contains("## Configuration"));
    }

    #[test]
    fn test_page_falsy_config_omitted() {
        for config in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([])] {
            let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m")
                .config(config.clone())
                .build();
            let page = render_experiment_page(&record, &[], &SiteLinks::default());
            assert!(!page.contains("## Configuration"), "config {config} was rendered");
        }
    }

    #[test]
    fn test_page_scalar_config_rendered() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", "m")
            .config(json!("default"))
            .build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(page.ends_with("## Configuration\n\n```json\n\"default\"\n```\n\n"));
    }

    #[test]
    fn test_page_non_string_summary_values() {
        let record = ExperimentRecord::builder("r", "2024-01-01", "d", 18)
            .git_commit(123)
            .runtime_minutes(12.5)
            .build();
        let page = render_experiment_page(&record, &[], &SiteLinks::default());
        assert!(page.contains("- **Model:** 18\n"));
        assert!(page.contains("- **Git commit:** `123`\n"));
        assert!(page.contains("- **Runtime:** 12.5 minutes\n"));
    }
}
