//! Core error types

use thiserror::Error;

use crate::token::TagError;

/// Errors raised while extracting auxiliaries from one sentence
///
/// Extraction errors are scoped to a single sentence; callers are expected
/// to log and continue with the next sentence rather than abort a batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The tagger failed on this sentence
    #[error("tagging failed: {0}")]
    Tag(#[from] TagError),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_error_wraps_with_context() {
        let err: ExtractError = TagError::Internal("boom".to_string()).into();
        assert_eq!(err.to_string(), "tagging failed: tagger failure: boom");
    }
}
