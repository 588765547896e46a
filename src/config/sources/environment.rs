//! Environment source: DIRSYNC_<SECTION>__<KEY> overrides, e.g. DIRSYNC_SYNC__DRY_RUN=true.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment overrides to builder. Lists are comma-separated.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("DIRSYNC")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("walker.ignore_patterns"),
    )
}
