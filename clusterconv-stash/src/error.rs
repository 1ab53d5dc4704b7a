use thiserror::Error;

/// Errors from persisting or recalling a stash.
#[derive(Debug, Error)]
pub enum StashError {
    /// The hub snapshot could not be serialized.
    #[error("failed to encode stash: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stash is present but cannot be trusted.
    #[error("corrupt stash on {kind}: {reason}")]
    Corrupt { kind: &'static str, reason: String },
}

impl StashError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StashError::Corrupt { .. })
    }
}
