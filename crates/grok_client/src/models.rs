//! Model listing formatting.

use crate::dto::{ModelEntry, ModelList};
use chrono::DateTime;

const HEADER: &str = "Available Grok Models:";

/// Renders a model listing, one model per line.
pub(crate) fn format_model_list(list: &ModelList) -> String {
    let lines: Vec<String> = list.data.iter().map(format_entry).collect();
    format!("{}\n{}", HEADER, lines.join("\n"))
}

fn format_entry(entry: &ModelEntry) -> String {
    format!(
        "- {} (Owner: {}, Created: {})",
        entry.id,
        entry.owned_by,
        created_date(entry.created)
    )
}

/// Unix timestamp to `YYYY-MM-DD` (UTC); missing or zero gives an empty string.
fn created_date(timestamp: Option<i64>) -> String {
    timestamp
        .filter(|ts| *ts != 0)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
