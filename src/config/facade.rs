//! Config loading facade: the single entry point for building `DirsyncConfig`.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::DirsyncConfig;
use crate::error::SyncError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration from defaults, files, and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global config file, then environment overrides
    pub fn load() -> Result<DirsyncConfig, SyncError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);

        let config: DirsyncConfig = builder.build()?.try_deserialize()?;
        debug!("Loaded configuration");
        Ok(config)
    }

    /// Load from defaults, an explicit file (instead of the global one), then environment
    ///
    /// The file must exist.
    pub fn load_from_file(path: &Path) -> Result<DirsyncConfig, SyncError> {
        if !path.exists() {
            return Err(SyncError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: DirsyncConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration from file");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default locations
    pub fn load_or_default(path: Option<&Path>) -> Result<DirsyncConfig, SyncError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Location of the global config file, if a home directory is known
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
