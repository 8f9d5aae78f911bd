//! Error type shared by the extension contract

use thiserror::Error;

/// Errors surfaced across the extension boundary
///
/// Validation failures reject the submission; the extension additionally
/// reports them through the host's modal message mechanism.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("extension not found: {0}")]
    ExtensionNotFound(String),

    #[error("unknown button: {0}")]
    UnknownButton(String),

    #[error("invalid value for field '{key}': {reason}")]
    InvalidField { key: String, reason: String },

    #[error("please use a number greater than 5, got {got}")]
    CountTooSmall { got: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_message_matches_modal_text() {
        let err = ExtensionError::CountTooSmall { got: 3 };
        assert_eq!(err.to_string(), "please use a number greater than 5, got 3");
    }
}
