//! One-shot resolution for an explicit or process-derived argv.
//!
//! ## Usage
//!
//! ```bash
//! launch-probe resolve --development -- node main.js -- /tmp/song.vvproj
//! launch-probe resolve --production --mac --open-file /tmp/a.vvproj -- /Applications/App
//! launch-probe current -- /tmp/song.vvproj
//! ```

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use launch_core::{LatchState, LaunchConfig, LaunchContext, LaunchFileResolver};
use serde::Serialize;

use crate::{ModeArgs, ProbeError};

/// JSON form of a single resolution.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub context: &'a LaunchContext,
    pub state: LatchState,
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl<'a> Report<'a> {
    pub fn capture(resolver: &'a LaunchFileResolver) -> Self {
        Self {
            context: resolver.context(),
            state: resolver.state(),
            file_path: resolver.resolve_file_path(),
            resolved_at: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.resolved_at = Some(timestamp);
        self
    }

    /// Writes one line: the JSON object, or the bare path (empty when absent).
    pub fn write_line<W: Write>(&self, out: &mut W, json: bool) -> Result<(), ProbeError> {
        if json {
            serde_json::to_writer(&mut *out, self)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", self.file_path.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}

pub fn run(mode: &ModeArgs, open_files: &[String]) -> Result<(), ProbeError> {
    let config = mode.config(LaunchConfig::from_env()?);
    let resolver = LaunchFileResolver::new(config.context(mode.argv.clone()));
    let mut out = io::stdout().lock();
    resolve_with(&resolver, open_files, &mut out, mode.json)
}

/// Resolves as if this executable had been launched with only `forwarded`,
/// leaving out the probe's own subcommand and flags.
pub fn run_current(forwarded: &[String], json: bool) -> Result<(), ProbeError> {
    let config = LaunchConfig::from_env()?;
    let process = LaunchContext::from_process(&config);
    let argv = current_argv(process.argv().first().cloned(), forwarded);
    let resolver = LaunchFileResolver::new(config.context(argv));
    let mut out = io::stdout().lock();
    resolve_with(&resolver, &[], &mut out, json)
}

fn current_argv(executable: Option<String>, forwarded: &[String]) -> Vec<String> {
    executable
        .into_iter()
        .chain(forwarded.iter().cloned())
        .collect()
}

fn resolve_with<W: Write>(
    resolver: &LaunchFileResolver,
    open_files: &[String],
    out: &mut W,
    json: bool,
) -> Result<(), ProbeError> {
    for path in open_files {
        resolver.notify_open_file_path(path.as_str());
    }

    let report = Report::capture(resolver);
    tracing::debug!(
        events = open_files.len(),
        state = ?report.state,
        file = ?report.file_path,
        "Resolution complete"
    );
    report.write_line(out, json)
}
