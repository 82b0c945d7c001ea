use thiserror::Error;

use crate::config::{MAX_FRAMES, MAX_PAGE, MIN_FRAMES, MIN_PAGE};

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected input. Always names the offending token or value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{token:?} is not a number")]
    InvalidToken { token: String },

    #[error("{token:?} is not within the required range [{} - {}]", MIN_PAGE, MAX_PAGE)]
    PageOutOfRange { token: String },

    #[error("reference string length must not be negative, got {length}")]
    NegativeLength { length: i64 },

    #[error(
        "frame count {frames} is not within the required range [{} - {}]",
        MIN_FRAMES,
        MAX_FRAMES
    )]
    FrameCountOutOfRange { frames: usize },

    #[error("no reference string set")]
    EmptyReferenceString,

    #[error("unrecognized replacement policy: {name:?}")]
    UnknownPolicy { name: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Stepping past the end of the reference string. A driver bug.
    #[error("step requested at position {position} but the reference string has {len} entries")]
    OutOfRange { position: usize, len: usize },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
