use thiserror::Error;

/// Errors raised while loading, checking or installing TLD data.
///
/// Lookups and searches never produce these; a miss is an empty result.
#[derive(Error, Debug)]
pub enum TldError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record {tld}: {reason}")]
    InvalidRecord { tld: String, reason: String },

    #[error("Configuration error")]
    Config(#[from] config::ConfigError),

    #[error("TLD table already initialized")]
    AlreadyInitialized,
}

impl TldError {
    pub(crate) fn invalid(tld: &str, reason: impl Into<String>) -> Self {
        TldError::InvalidRecord {
            tld: tld.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_error_is_the_source_not_the_message() {
        let err = TldError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing tlds.json"));
        assert_eq!(err.to_string(), "IO error");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("missing tlds.json"));
    }

    #[test]
    fn test_invalid_record_message() {
        let err = TldError::invalid("DE", "duplicate key");
        assert_eq!(err.to_string(), "Invalid record DE: duplicate key");
        assert!(err.source().is_none());
    }
}
