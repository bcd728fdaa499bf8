//! Error types for algostory-vis.

use thiserror::Error;

use crate::catalog::AlgorithmId;

/// Result type for algostory-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening walkthroughs or driving the demos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The slug does not name a catalog entry.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The entry is an interactive demo and has no precomputed trace.
    #[error("{0} is interactive and has no step trace")]
    Interactive(AlgorithmId),

    /// A demo operation arrived while the previous one was still animating.
    #[error("previous operation is still animating")]
    Busy,

    /// The structure has nothing to remove.
    #[error("structure is empty")]
    Empty,

    /// The item to insert was blank after trimming.
    #[error("item name is blank")]
    BlankItem,

    /// Building a trace failed.
    #[error("step generation failed: {0}")]
    Steps(#[from] algostory_steps::Error),
}
