//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "sync", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Sync { .. } => "sync",
        Commands::Plan { .. } => "plan",
        Commands::Snapshot { .. } => "snapshot",
        Commands::Config { .. } => "config",
    }
}

/// Output format requested by a command
pub fn output_format(command: &Commands) -> &str {
    match command {
        Commands::Sync { format, .. }
        | Commands::Plan { format, .. }
        | Commands::Snapshot { format, .. }
        | Commands::Config { format } => format.as_str(),
    }
}
