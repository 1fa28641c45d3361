//! Error types used across the primer workspace.
//!
//! Two very different things share this module:
//!
//! - [`Error`] is a real failure. Writing a transcript can fail, the worker
//!   behind the channel lesson can disappear, and logging setup can reject a
//!   filter. These propagate with `?` and end the program.
//! - [`Failure`] is demonstration data. Lessons build one, print it and move on.
//!   It never changes control flow.
//!
//! # Examples
//!
//! ```rust
//! use primer_core::error::{describe, Failure, Result};
//!
//! let plain = Failure::new("this is an example error");
//! assert_eq!(plain.to_string(), "this is an example error");
//! assert_eq!(describe(None), "<none>");
//!
//! fn fine() -> Result<u8> {
//!     Ok(1)
//! }
//! assert_eq!(fine().ok(), Some(1));
//! ```

use std::fmt;

/// A failure that stops the primer from producing its transcript.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing rendered output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The sending half of a channel went away before delivering a value
    #[error("channel closed before a value was received")]
    ChannelClosed,

    /// The operating system refused to start a worker thread
    #[error("failed to spawn worker '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A spawned worker panicked instead of finishing
    #[error("worker '{name}' panicked")]
    WorkerPanicked { name: String },

    /// The log filter could not be parsed
    #[error("invalid log filter '{directive}': {message}")]
    LogFilter { directive: String, message: String },
}

/// A specialized `Result` type for primer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An opaque error value carrying only a message.
///
/// `Failure` exists to be looked at. It is compared for presence or absence
/// (`Option<Failure>`) and printed, nothing more.
///
/// ```rust
/// use primer_core::Failure;
///
/// let absent: Option<Failure> = None;
/// assert!(absent.is_none());
///
/// let present = Failure::new(format!("invalid password for {}", "user"));
/// assert_eq!(present.msg, "invalid password for user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Human-readable message
    pub msg: String,
}

impl Failure {
    /// Creates a failure with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for Failure {}

/// Renders an optional failure the way lessons print it: the message, or
/// `<none>` when no failure is present.
pub fn describe(failure: Option<&Failure>) -> String {
    match failure {
        Some(f) => f.to_string(),
        None => "<none>".to_string(),
    }
}
