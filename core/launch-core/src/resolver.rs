//! Resolution of the file to open, combining launch arguments with
//! open-file notifications from the platform.
//!
//! ## State Machine
//!
//! ```text
//! AwaitingNotification --notify_open_file_path--> Notified
//! Notified             --notify_open_file_path--> Notified (last write wins)
//! ```
//!
//! `resolve_file_path` observes either state and never changes it. There is
//! no transition back to `AwaitingNotification`.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::context::LaunchContext;

/// Which of the two latch states the resolver is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LatchState {
    /// No notification yet; the answer comes from launch arguments.
    AwaitingNotification,
    /// A notification arrived; the answer is pinned to the notified path.
    Notified,
}

/// Decides which file, if any, the application should open now.
#[derive(Debug)]
pub struct LaunchFileResolver {
    context: LaunchContext,
    pending_open_file_path: Mutex<Option<String>>,
}

impl LaunchFileResolver {
    pub fn new(context: LaunchContext) -> Self {
        Self {
            context,
            pending_open_file_path: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &LaunchContext {
        &self.context
    }

    /// Records a path delivered by the platform's open-file event.
    ///
    /// Overwrites any earlier notification. Takes precedence over launch
    /// arguments for every later call to [`resolve_file_path`].
    ///
    /// [`resolve_file_path`]: LaunchFileResolver::resolve_file_path
    pub fn notify_open_file_path(&self, path: impl Into<String>) {
        let path = path.into();
        let mut pending = self.pending();
        if let Some(previous) = pending.as_deref() {
            tracing::debug!(previous = %previous, path = %path, "Replacing pending open-file path");
        } else {
            tracing::debug!(path = %path, "Latched open-file path");
        }
        *pending = Some(path);
    }

    /// Returns the file to open, or `None` when there is nothing to open.
    pub fn resolve_file_path(&self) -> Option<String> {
        let pending = self.pending();
        if let Some(path) = pending.as_ref() {
            return Some(path.clone());
        }
        drop(pending);

        let resolved = self.context.effective_args().first().cloned();
        tracing::debug!(
            production = self.context.is_production(),
            mac = self.context.is_platform_mac(),
            argc = self.context.argv().len(),
            file = ?resolved,
            "Resolved file path from launch arguments"
        );
        resolved
    }

    pub fn state(&self) -> LatchState {
        if self.pending().is_some() {
            LatchState::Notified
        } else {
            LatchState::AwaitingNotification
        }
    }

    // A poisoned lock still holds a whole Option<String>; keep using it.
    fn pending(&self) -> MutexGuard<'_, Option<String>> {
        self.pending_open_file_path
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
