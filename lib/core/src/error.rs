use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Matching pool has not been built yet")]
    PoolNotReady,

    #[error("Candidate not found in pool: {0}")]
    CandidateNotFound(String),
}
