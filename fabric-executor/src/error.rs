//! Error types for the executor crate.
//!
//! These never cross [`crate::CommandRunner::run`]; they are folded into the
//! result envelope there.

use std::path::PathBuf;

/// Errors that can occur while running the CLI.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutorError {
    /// The process could not be started (missing binary, permissions).
    #[error("failed to spawn {path}: {source}")]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process did not exit within the configured wait ceiling.
    #[error("Command timed out")]
    TimedOut,

    /// Underlying I/O error while collecting output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
