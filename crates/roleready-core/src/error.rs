//! Assessment error types.
//!
//! These represent local precondition violations, not expected runtime
//! conditions. A correctly driven presentation layer never triggers them,
//! so callers treat them as programmer errors and fail fast.

use thiserror::Error;

/// Errors that can occur while driving an assessment.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A navigation operation was invoked from a state that does not
    /// define it (e.g. advancing past the terminal state).
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),

    /// The scorer was invoked with no answers at all.
    #[error("cannot score an empty answer set")]
    EmptyAnswerSet,

    /// An answer references a question id not present in the bank.
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),
}
