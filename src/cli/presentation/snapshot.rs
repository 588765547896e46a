//! Snapshot presentation.

use super::shared::{title, to_json};
use crate::error::SyncError;
use crate::snapshot::Snapshot;
use crate::tree::path::display_name;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

pub fn format_snapshot_text(root: &Path, snapshot: &Snapshot) -> String {
    let mut output = title(&format!("Snapshot: {}", root.display()));
    output.push('\n');

    if snapshot.is_empty() {
        output.push_str("No files.");
        return output;
    }

    output.push_str(&format!(
        "  {} files, {} distinct contents\n\n",
        snapshot.file_count(),
        snapshot.len()
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Hash", "Name"]);
    for (hash, name) in snapshot.iter() {
        table.add_row(vec![hash.short().to_string(), display_name(name)]);
    }
    output.push_str(&table.to_string());
    output
}

pub fn format_snapshot_json(root: &Path, snapshot: &Snapshot) -> Result<String, SyncError> {
    let contents: BTreeMap<&str, Vec<String>> = snapshot
        .groups()
        .map(|(hash, names)| {
            let names = names.iter().map(|name| display_name(name)).collect();
            (hash.as_str(), names)
        })
        .collect();

    to_json(&json!({
        "root": root.display().to_string(),
        "files": snapshot.file_count(),
        "contents": contents,
    }))
}
