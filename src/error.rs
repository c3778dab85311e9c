//! Error types for fluent-user
//!
//! Only the delegating builder and the demo driver can fail; the value
//! builders are infallible.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fluent-user error types
#[derive(Error, Debug)]
pub enum Error {
    /// A `UserFluentInterface` was used after `build()` handed its user away
    #[error("builder already finalized: cannot call {operation}() after build()\nCreate a new UserFluentInterface for another user")]
    BuilderReused {
        /// Operation that was attempted on the finalized builder
        operation: &'static str,
    },

    /// Demo configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
