//! Error types for tree assembly and its collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// A record names a lexical parent that is not in the input.
    #[error("record {index} ({name}) has parent {parent}, but only {len} records were given")]
    UnknownParent {
        index: usize,
        name: String,
        parent: usize,
        len: usize,
    },

    /// The lexical parent chain loops back on itself.
    #[error("record {index} ({name}) is its own lexical ancestor")]
    Cycle { index: usize, name: String },

    /// A node was given a documentation parent twice.
    #[error("node {node} already has documentation parent {existing}, refusing {new}")]
    DocParentReassigned {
        node: usize,
        existing: usize,
        new: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
