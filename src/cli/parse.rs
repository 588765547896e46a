//! CLI parse: clap types for dirsync. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirsync - make a destination directory mirror a source directory
#[derive(Parser, Debug)]
#[command(name = "dirsync")]
#[command(about = "Content-addressed directory synchronization: copy, rename and delete to mirror a source")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy, rename and delete files so DEST mirrors SOURCE
    Sync {
        /// Source directory
        source: PathBuf,
        /// Destination directory (created if missing)
        dest: PathBuf,
        /// Show what would be done without changing anything
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the actions a sync would take
    Plan {
        /// Source directory
        source: PathBuf,
        /// Destination directory
        dest: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the content hashes of every file in a directory
    Snapshot {
        /// Directory to snapshot
        dir: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the effective configuration
    Config {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
