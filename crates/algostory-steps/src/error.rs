//! Error types for algostory-steps.

use thiserror::Error;

/// Result type for algostory-steps operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building traces or graphs.
///
/// Empty datasets and missing targets are not errors: they produce a
/// well-formed trace with a `NotFound` or `Unreachable` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A trace must contain at least one step.
    #[error("trace has no steps")]
    EmptyTrace,

    /// The last step of a trace must be a `Done` step.
    #[error("trace does not end with a done step")]
    UnterminatedTrace,

    /// Only the last step of a trace may be a `Done` step.
    #[error("done step at index {index} is not the last step")]
    MisplacedDone { index: usize },

    /// A node id was referenced before being declared.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A node id was declared twice.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),
}
