//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::help::{command_name, output_format};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_config_json, format_config_text, format_plan_json, format_plan_text,
    format_report_json, format_report_text, format_snapshot_json, format_snapshot_text,
};
use crate::config::DirsyncConfig;
use crate::error::SyncError;
use crate::snapshot::SnapshotBuilder;
use crate::sync;
use crate::tree::path;
use std::path::PathBuf;
use tracing::{info_span, warn};

/// Runtime context for CLI execution: the effective configuration and the
/// explicit file it came from, if any.
pub struct RunContext {
    config: DirsyncConfig,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Create run context from an already loaded configuration
    pub fn from_config(config: DirsyncConfig) -> Result<Self, SyncError> {
        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(SyncError::Config(messages.join("; ")));
        }
        Ok(Self {
            config,
            config_path: None,
        })
    }

    /// Record the `--config` file the configuration was loaded from
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SyncError> {
        let span = info_span!("command", name = command_name(command));
        let _enter = span.enter();

        let format = output_format(command);
        if format != "text" && format != "json" {
            return Err(SyncError::Output(format!(
                "Unknown output format '{}' (must be 'text' or 'json')",
                format
            )));
        }
        let json = format == "json";

        match command {
            Commands::Sync {
                source,
                dest,
                dry_run,
                ..
            } => {
                let options = self.config.sync_options(*dry_run);
                let report = sync::sync(source, dest, &options)?;
                if json {
                    format_report_json(&report)
                } else {
                    Ok(format_report_text(&report))
                }
            }
            Commands::Plan { source, dest, .. } => {
                let plan = sync::plan(source, dest, &self.config.walker)?;
                if json {
                    format_plan_json(&plan)
                } else {
                    Ok(format_plan_text(&plan))
                }
            }
            Commands::Snapshot { dir, .. } => {
                let root = path::canonicalize_root(dir)?;
                let snapshot = SnapshotBuilder::new(root.clone())
                    .with_walker_config(self.config.walker.clone())
                    .build()?;
                let duplicates = snapshot.duplicates().count();
                if duplicates > 0 {
                    warn!(duplicates, "Some contents appear under several names");
                }
                if json {
                    format_snapshot_json(&root, &snapshot)
                } else {
                    Ok(format_snapshot_text(&root, &snapshot))
                }
            }
            Commands::Config { .. } => {
                if json {
                    format_config_json(&self.config)
                } else {
                    Ok(format_config_text(
                        &self.config,
                        self.config_path.as_deref(),
                    ))
                }
            }
        }
    }
}
