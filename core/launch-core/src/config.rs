//! Build, platform and environment derived launch flags.
//!
//! Defaults come from the build itself:
//! - release builds count as production, debug builds as development
//! - the target OS decides whether open-file events replace argv
//!
//! Either flag can be overridden from the environment, which is how a
//! development launcher or a test harness forces the other code path.

use crate::context::LaunchContext;
use crate::error::{LaunchError, Result};

/// Overrides the production/development mode.
pub const PRODUCTION_ENV: &str = "LAUNCH_PRODUCTION";
/// Overrides macOS platform detection.
pub const PLATFORM_MAC_ENV: &str = "LAUNCH_PLATFORM_MAC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    pub is_production: bool,
    pub is_platform_mac: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            is_production: !cfg!(debug_assertions),
            is_platform_mac: cfg!(target_os = "macos"),
        }
    }
}

impl LaunchConfig {
    /// Build defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build defaults with overrides from `lookup`. Used by tests to avoid
    /// touching the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let is_production = match lookup(PRODUCTION_ENV) {
            Some(value) => parse_flag(PRODUCTION_ENV, &value)?,
            None => defaults.is_production,
        };
        let is_platform_mac = match lookup(PLATFORM_MAC_ENV) {
            Some(value) => parse_flag(PLATFORM_MAC_ENV, &value)?,
            None => defaults.is_platform_mac,
        };

        Ok(Self {
            is_production,
            is_platform_mac,
        })
    }

    pub fn context(&self, argv: Vec<String>) -> LaunchContext {
        LaunchContext::new(argv, self.is_production, self.is_platform_mac)
    }
}

/// Parses a boolean environment flag: 1/0, true/false, yes/no, on/off, in
/// any case, surrounding whitespace ignored.
pub fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LaunchError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
