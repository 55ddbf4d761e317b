//! launch-probe: host-side harness for launch file resolution.
//!
//! Plays the part of the desktop shell: captures launch arguments into a
//! `LaunchContext`, forwards open-file events to the resolver, and prints
//! which file the application would open.
//!
//! ## Subcommands
//!
//! - `resolve`: one-shot resolution of an explicit argv
//! - `watch`: resolution that follows open-file events read from stdin
//! - `current`: resolution of this executable's path plus the arguments after `--`
//!
//! Results go to stdout (one line per resolution, empty when nothing would be
//! opened). Logs go to stderr.

mod logging;
mod resolve;
mod watch;

use clap::{Args, Parser, Subcommand};
use launch_core::{LaunchConfig, LaunchError};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "launch-probe")]
#[command(about = "Resolve which file a desktop app opens at launch")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the file for an explicit argv (given after `--`)
    Resolve {
        #[command(flatten)]
        mode: ModeArgs,

        /// Open-file event to apply before resolving (repeatable, in order)
        #[arg(long = "open-file", value_name = "PATH")]
        open_files: Vec<String>,
    },

    /// Resolve, then re-resolve after each open-file path read from stdin
    Watch {
        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Resolve this executable's path plus the arguments given after `--`
    Current {
        /// Emit a JSON report instead of the bare path
        #[arg(long)]
        json: bool,

        /// Launch arguments that follow this process's executable path
        #[arg(last = true, value_name = "ARGV")]
        forwarded: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Treat the launch as a packaged production build
    #[arg(long, conflicts_with = "development")]
    production: bool,

    /// Treat the launch as a development build
    #[arg(long)]
    development: bool,

    /// Treat the host platform as macOS
    #[arg(long, conflicts_with = "not_mac")]
    mac: bool,

    /// Treat the host platform as something other than macOS
    #[arg(long)]
    not_mac: bool,

    /// Emit a JSON report instead of the bare path
    #[arg(long)]
    json: bool,

    /// Launch arguments as the OS would deliver them, executable path first
    #[arg(last = true, value_name = "ARGV")]
    argv: Vec<String>,
}

impl ModeArgs {
    /// Explicit flags win; anything left unset comes from `base`.
    pub fn config(&self, base: LaunchConfig) -> LaunchConfig {
        let is_production = if self.production {
            true
        } else if self.development {
            false
        } else {
            base.is_production
        };
        let is_platform_mac = if self.mac {
            true
        } else if self.not_mac {
            false
        } else {
            base.is_platform_mac
        };

        LaunchConfig {
            is_production,
            is_platform_mac,
        }
    }
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let _logging_guard = logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { mode, open_files } => resolve::run(&mode, &open_files),
        Commands::Watch { mode } => watch::run(&mode),
        Commands::Current { json, forwarded } => resolve::run_current(&forwarded, json),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "launch-probe failed");
        std::process::exit(1);
    }
}
