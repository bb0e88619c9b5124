use thiserror::Error;

/// errors raised while building, reading or solving a set cover instance
#[derive(Error, Debug)]
pub enum SetCoverError {
    /// unable to read or write a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// unable to (de)serialize a JSON instance or solution
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// malformed instance or solution file
    #[error("parse error: {0}")]
    Parse(String),

    /// generator or solver parameter out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// explicit instance data is inconsistent
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// element covered by no candidate set (no valid solution exists)
    #[error("element {0} is not covered by any set")]
    Infeasible(usize),
}
