//! Effective configuration presentation.

use super::shared::{title, to_json};
use crate::config::{ConfigLoader, DirsyncConfig};
use crate::error::SyncError;
use std::path::Path;

/// `config_path` is the explicit `--config` file; without one the global
/// file location is shown.
pub fn format_config_text(config: &DirsyncConfig, config_path: Option<&Path>) -> String {
    let mut output = title("Configuration");
    output.push('\n');

    let source = match config_path {
        Some(path) => format!("  Config file:      {}\n", path.display()),
        None => {
            let global = ConfigLoader::global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(no home directory)".to_string());
            format!("  Global file:      {}\n", global)
        }
    };
    output.push_str(&source);

    let ignore = if config.walker.ignore_patterns.is_empty() {
        "(none)".to_string()
    } else {
        config.walker.ignore_patterns.join(", ")
    };
    output.push_str(&format!("  Ignore patterns:  {}\n", ignore));
    output.push_str(&format!(
        "  Follow symlinks:  {}\n",
        config.walker.follow_symlinks
    ));
    let depth = config
        .walker
        .max_depth
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unlimited".to_string());
    output.push_str(&format!("  Max depth:        {}\n", depth));
    output.push_str(&format!("  Dry run default:  {}\n", config.sync.dry_run));
    output.push_str(&format!(
        "  Logging:          {} ({}, {})",
        config.logging.level, config.logging.format, config.logging.output
    ));
    output
}

pub fn format_config_json(config: &DirsyncConfig) -> Result<String, SyncError> {
    to_json(config)
}
