//! # launch-core
//!
//! Decides which file a desktop application should open when it starts, or
//! when the platform later asks it to open one.
//!
//! Two sources feed the decision:
//!
//! - **Launch arguments**, captured once into a [`LaunchContext`].
//! - **Open-file notifications**, forwarded by the host from the platform's
//!   event channel (macOS delivers files this way instead of through argv).
//!
//! A notification always wins over launch arguments and stays pinned for the
//! rest of the resolver's life.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime, no I/O during resolution.
//! - **Injected environment**: argv and mode flags are constructor input, never
//!   read ambiently by the resolver.
//! - **Graceful degradation**: Empty or malformed argv resolves to `None`, not
//!   an error.
//! - **Thread-safe**: The pending path sits behind a single mutex, so the
//!   resolver can be shared through `Arc` with a platform event thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use launch_core::{LaunchContext, LaunchFileResolver};
//!
//! let context = LaunchContext::new(
//!     vec!["node".into(), "main.js".into(), "--".into(), "/tmp/song.vvproj".into()],
//!     false,
//!     false,
//! );
//! let resolver = LaunchFileResolver::new(context);
//! assert_eq!(resolver.resolve_file_path().as_deref(), Some("/tmp/song.vvproj"));
//!
//! resolver.notify_open_file_path("/tmp/other.vvproj");
//! assert_eq!(resolver.resolve_file_path().as_deref(), Some("/tmp/other.vvproj"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod resolver;

pub use config::LaunchConfig;
pub use context::{lossy_args, LaunchContext, ARG_SEPARATOR};
pub use error::{LaunchError, Result};
pub use resolver::{LatchState, LaunchFileResolver};
