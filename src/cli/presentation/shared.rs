//! Shared presentation helpers: titles, action tables, json rendering.

use crate::error::SyncError;
use crate::reconcile::Action;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn title(text: &str) -> String {
    format!("{}", text.bold().underline())
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, SyncError> {
    serde_json::to_string_pretty(value).map_err(|e| SyncError::Output(e.to_string()))
}

pub fn actions_table(actions: &[Action]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Action", "From", "To"]);
    for action in actions {
        let row = match action {
            Action::Copy { from, to } | Action::Move { from, to } => vec![
                action.kind().to_string(),
                from.display().to_string(),
                to.display().to_string(),
            ],
            Action::Delete { path } => vec![
                action.kind().to_string(),
                path.display().to_string(),
                "-".to_string(),
            ],
        };
        table.add_row(row);
    }
    table.to_string()
}
