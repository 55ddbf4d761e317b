//! Error types for launch-core.
//!
//! Resolution itself never fails; only deriving a context from the
//! environment can.

// ═══════════════════════════════════════════════════════════════════════════════
// Launch Error
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors raised while building a launch context from the host environment.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Invalid value for {var}: {value:?} (expected 1/0, true/false, yes/no, on/off)")]
    InvalidFlag { var: String, value: String },
}

/// Convenience type alias for Results using LaunchError.
pub type Result<T> = std::result::Result<T, LaunchError>;
