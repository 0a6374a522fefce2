//! Command-line interface for violet_play.

use crate::config::PlayConfig;
use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "violet_play")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tracing filter, overrides the config file (RUST_LOG wins over both)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Render empty cells as `.` instead of their number
    #[arg(long)]
    pub hide_indices: bool,

    /// Play these comma-separated cell indices (0-8) and print the result
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<usize>>,
}

/// Tracing filter installed before the config file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupFilter {
    /// Filter directives.
    pub directives: String,
    /// True when `RUST_LOG` or `--log-filter` chose the filter, so the
    /// config file must not replace it.
    pub pinned: bool,
}

impl Cli {
    /// Picks the logging filter: `RUST_LOG`, then `--log-filter`, then the
    /// config default (replaced later by the config file's value).
    pub fn startup_filter(&self, rust_log: Option<String>) -> StartupFilter {
        match (rust_log, &self.log_filter) {
            (Some(directives), _) => StartupFilter {
                directives,
                pinned: true,
            },
            (None, Some(directives)) => StartupFilter {
                directives: directives.clone(),
                pinned: true,
            },
            (None, None) => StartupFilter {
                directives: PlayConfig::default().log_filter().clone(),
                pinned: false,
            },
        }
    }
}
