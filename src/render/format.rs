//! Cell and caption formatting shared by the page and index renderers

use std::path::Path;

use serde_json::Value;

/// Placeholder for values a run did not record.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a metric value for a table cell.
///
/// JSON floats are fixed to 4 decimal places. Integers, strings (without
/// quotes), booleans and null are passed through unchanged.
///
/// ```rust
/// use experiment_pages::render::format_metric;
/// use serde_json::json;
///
/// assert_eq!(format_metric(&json!(0.85)), "0.8500");
/// assert_eq!(format_metric(&json!(3)), "3");
/// assert_eq!(format_metric(&json!("high")), "high");
/// ```
#[must_use]
pub fn format_metric(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| format!("{f:.4}")),
        other => format_plain(other),
    }
}

/// Render a summary or table value exactly as recorded: strings without
/// quotes, everything else as JSON text.
///
/// ```rust
/// use experiment_pages::render::format_plain;
/// use serde_json::json;
///
/// assert_eq!(format_plain(&json!("resnet18")), "resnet18");
/// assert_eq!(format_plain(&json!(12.5)), "12.5");
/// assert_eq!(format_plain(&json!(123)), "123");
/// ```
#[must_use]
pub fn format_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Like [`format_metric`], with [`NOT_AVAILABLE`] for an absent value.
#[must_use]
pub fn format_optional_metric(value: Option<&Value>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_metric)
}

/// Human-readable caption for a plot file: extension stripped, underscores
/// turned into spaces, then title-cased.
///
/// `loss_curve.png` becomes `Loss Curve`.
#[must_use]
pub fn plot_caption(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    title_case(&stem.replace('_', " "))
}

/// Upper-case the first letter of every run of letters and lower-case the
/// rest. Non-letters (digits included) end a run.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
