//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file (or an
//! explicit `--config` file), then `DIRSYNC_*` environment overrides.

use crate::logging::{self, LoggingConfig};
use crate::sync::SyncOptions;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirsyncConfig {
    /// Directory walking (ignore patterns, symlinks, depth)
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Sync behavior
    #[serde(default)]
    pub sync: SyncSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sync behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Plan only unless overridden on the command line
    #[serde(default)]
    pub dry_run: bool,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Walker(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Walker(msg) => write!(f, "Walker: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirsyncConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self
            .walker
            .ignore_patterns
            .iter()
            .any(|p| p.trim().is_empty())
        {
            errors.push(ValidationError::Walker(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }
        if self.walker.max_depth == Some(0) {
            errors.push(ValidationError::Walker(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = logging::parse_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Sync options from this config; `dry_run` on the command line wins when set
    pub fn sync_options(&self, dry_run: bool) -> SyncOptions {
        SyncOptions {
            dry_run: dry_run || self.sync.dry_run,
            walker: self.walker.clone(),
        }
    }
}
