//! Open-file event forwarding.
//!
//! Stands in for the platform's open-file channel: each non-blank stdin line
//! is one event carrying a path. Every event is forwarded to the resolver and
//! followed by a fresh resolution, so the output shows the latch taking over.
//!
//! ## Usage
//!
//! ```bash
//! printf '/tmp/a.vvproj\n/tmp/b.vvproj\n' | launch-probe watch --json -- app.exe C:\\song.vvproj
//! ```

use std::io::{self, BufRead, Write};

use chrono::Utc;
use launch_core::{LaunchConfig, LaunchFileResolver};

use crate::resolve::Report;
use crate::{ModeArgs, ProbeError};

pub fn run(mode: &ModeArgs) -> Result<(), ProbeError> {
    let config = mode.config(LaunchConfig::from_env()?);
    let resolver = LaunchFileResolver::new(config.context(mode.argv.clone()));
    tracing::info!(
        production = config.is_production,
        mac = config.is_platform_mac,
        "Watching stdin for open-file events"
    );

    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    forward_events(&resolver, stdin, &mut out, mode.json)
}

fn forward_events<R: BufRead, W: Write>(
    resolver: &LaunchFileResolver,
    mut input: R,
    out: &mut W,
    json: bool,
) -> Result<(), ProbeError> {
    emit(resolver, out, json)?;

    let mut events = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Paths are opaque to the resolver; keep events with invalid UTF-8.
        let line = String::from_utf8_lossy(&buf);
        let path = line.trim_end_matches(['\n', '\r']);
        if path.trim().is_empty() {
            continue;
        }

        events += 1;
        resolver.notify_open_file_path(path);
        emit(resolver, out, json)?;
    }

    tracing::info!(events, "Open-file event stream closed");
    Ok(())
}

fn emit<W: Write>(resolver: &LaunchFileResolver, out: &mut W, json: bool) -> Result<(), ProbeError> {
    Report::capture(resolver).at(Utc::now()).write_line(out, json)?;
    out.flush()?;
    Ok(())
}
