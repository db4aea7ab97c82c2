//! Errors raised by the `conway` crate.
//!
//! Cell edits never fail: off-board or out-of-state edits come back as
//! [`crate::Outcome::Ignored`]. Only the row-task evaluator and evaluator
//! selection can produce a [`ConwayError`].

/// Errors from the row-task evaluator and its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConwayError {
    /// The single-threaded runtime backing the row tasks could not be built.
    #[error("failed to build row-task runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// A row task panicked or was cancelled before returning its row.
    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),

    /// An evaluator name that is neither `sequential` nor `row-tasks`.
    #[error("unknown evaluator: {0:?}")]
    UnknownEvaluator(String),
}
