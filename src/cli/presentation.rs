//! CLI presentation: text and json formatters per command family.

mod config;
mod plan;
mod shared;
mod snapshot;

pub use config::{format_config_json, format_config_text};
pub use plan::{format_plan_json, format_plan_text, format_report_json, format_report_text};
pub use snapshot::{format_snapshot_json, format_snapshot_text};
