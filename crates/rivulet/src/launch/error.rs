//! Error taxonomy for the launch host.

use thiserror::Error;

/// Errors a launch call can fail with.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The process-wide guard was already used; no worker was spawned.
    #[error("a stream application was already launched in this process")]
    AlreadyLaunched,

    /// No construction strategy matched the argument list, or the
    /// configuration accessor failed.
    #[error("resolution failed: {0}")]
    Resolution(String),

    /// Failure raised by the application's own `init`/`start` logic after
    /// successful resolution. The original cause is preserved verbatim.
    #[error(transparent)]
    Application(anyhow::Error),

    /// The caller's wait ended before the worker reported an outcome.
    #[error("launch wait interrupted: {0}")]
    Interrupted(String),

    /// The worker failed structurally (e.g. panicked) instead of reporting
    /// a captured failure.
    #[error("launch worker failed: {0}")]
    Worker(String),

    /// The worker thread could not be spawned.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
