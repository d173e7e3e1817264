use crate::{FrameId, PageId};

/// Page replacement simulation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvictError {
    /// Frame count must be a positive integer.
    #[error("Invalid configuration: frame count must be positive, got {0}")]
    InvalidConfiguration(i64),

    /// Page reference is negative or not an integer.
    #[error("Invalid page reference: '{0}'")]
    InvalidReference(String),

    /// Policy bookkeeping refers to a page that is not resident.
    #[error("Page {0} is not resident")]
    PageNotResident(PageId),

    /// Frame index lies outside the frame table.
    #[error("Invalid frame id: {0}")]
    InvalidFrameId(FrameId),

    /// Victim requested while no page is tracked by the policy.
    #[error("No frames available for eviction")]
    NoFramesAvailable,

    /// Logical clock arrived at maximum value.
    #[error("Sequence generator exhausted")]
    SequenceExhausted,

    /// Policy name does not match any known replacement policy.
    #[error("Unknown replacement policy: '{0}'")]
    UnknownPolicy(String),
}

/// Page replacement simulation result type.
pub type EvictResult<T> = Result<T, EvictError>;
