//! Run manifest JSON generation.

use crate::domain::REPORT_SCHEMA_VERSION;
use crate::error::Result;
use crate::pipeline::RunSummary;
use crate::render::html::GENERATOR;
use serde_json::{json, Map, Value};

/// Serialize a run summary. Artifacts are listed by file name.
pub fn render_report(summary: &RunSummary, generated_at: Option<&str>) -> Result<String> {
    let mut outputs: Vec<_> = summary.outputs.iter().collect();
    outputs.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let manifest = outputs
        .iter()
        .map(|o| {
            json!({
                "file": o.file_name,
                "view": o.view.name(),
                "rows": o.rows,
            })
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    report.insert("generator".to_string(), Value::String(GENERATOR.to_string()));
    if let Some(ts) = generated_at {
        report.insert("generated_at".to_string(), Value::String(ts.to_string()));
    }
    report.insert("bookmarks_skipped".to_string(), json!(summary.bookmarks_skipped));
    report.insert("output_files".to_string(), serde_json::to_value(manifest)?);

    let mut text = serde_json::to_string_pretty(&Value::Object(report))?;
    text.push('\n');
    Ok(text)
}
