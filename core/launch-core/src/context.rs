//! Launch-time snapshot of the process arguments and build/platform flags.

use std::ffi::OsString;

use serde::Serialize;

use crate::config::LaunchConfig;

/// Token a development launcher places between its own arguments and the
/// arguments meant for the application.
pub const ARG_SEPARATOR: &str = "--";

/// Immutable snapshot taken once at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchContext {
    argv: Vec<String>,
    is_production: bool,
    is_platform_mac: bool,
}

impl LaunchContext {
    pub fn new(argv: Vec<String>, is_production: bool, is_platform_mac: bool) -> Self {
        Self {
            argv,
            is_production,
            is_platform_mac,
        }
    }

    /// Captures the current process arguments with flags taken from `config`.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily; the resolver
    /// treats paths as opaque strings.
    pub fn from_process(config: &LaunchConfig) -> Self {
        config.context(lossy_args(std::env::args_os()))
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn is_production(&self) -> bool {
        self.is_production
    }

    pub fn is_platform_mac(&self) -> bool {
        self.is_platform_mac
    }

    /// Arguments that may name a file to open.
    ///
    /// - production on macOS: none (files arrive only through open-file events)
    /// - production elsewhere: everything after the executable path
    /// - development: everything after the first `--`, or none without one
    pub fn effective_args(&self) -> &[String] {
        if self.is_production {
            if self.is_platform_mac {
                return &[];
            }
            return self.argv.get(1..).unwrap_or(&[]);
        }

        match self.argv.iter().position(|arg| arg == ARG_SEPARATOR) {
            Some(index) => &self.argv[index + 1..],
            None => &[],
        }
    }
}

/// Converts OS arguments to strings, replacing invalid UTF-8 sequences.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
