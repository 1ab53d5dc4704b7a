use clusterconv_stash::StashError;
use clusterconv_types::copy::CopyError;
use thiserror::Error;

/// Errors surfaced by `convert_to` / `convert_from` and the document entry points.
///
/// A missing stash is not an error.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A field could not be copied between shapes.
    #[error("structural copy failed: {0}")]
    StructuralCopy(#[from] CopyError),

    /// The stash annotation is present but unusable. Nothing was written.
    #[error("{0}")]
    StashCorrupt(StashError),

    /// The hub snapshot could not be encoded.
    #[error("{0}")]
    Encoding(StashError),

    #[error("unsupported kind {kind} in {api_version}")]
    UnsupportedKind { api_version: String, kind: String },

    #[error("{kind} has no version {api_version}")]
    UnsupportedVersion { kind: String, api_version: String },

    /// The input document does not match the declared schema.
    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn is_stash_corrupt(&self) -> bool {
        matches!(self, ConvertError::StashCorrupt(_))
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_errors_convert_with_question_mark() {
        fn narrow() -> ConvertResult<i32> {
            Ok(clusterconv_types::copy::narrow_i32("port", i64::MAX)?)
        }
        let err = narrow().expect_err("overflow");
        assert!(matches!(err, ConvertError::StructuralCopy(_)));
        assert!(!err.is_stash_corrupt());
    }

    #[test]
    fn stash_corruption_is_flagged() {
        let err = ConvertError::StashCorrupt(StashError::Corrupt {
            kind: "Cluster",
            reason: "checksum mismatch".to_string(),
        });
        assert!(err.is_stash_corrupt());
        assert_eq!(err.to_string(), "corrupt stash on Cluster: checksum mismatch");
    }
}
