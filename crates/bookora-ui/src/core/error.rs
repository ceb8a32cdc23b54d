//! # Design
//!
//! - Constant error messages with structured context fields.
//! - Component operations absorb these errors and log them; only start-up
//!   paths (configuration, telemetry) hand them back to callers.

use thiserror::Error;

/// Result alias for UI operations.
pub type UiResult<T> = Result<T, UiError>;

/// Errors raised while configuring or driving the page enhancements.
#[derive(Debug, Error)]
pub enum UiError {
    /// The page configuration payload could not be parsed.
    #[error("ui config parse failure")]
    Config {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Reading or writing the preference store failed.
    #[error("ui storage failure")]
    Storage {
        /// Storage operation that failed.
        operation: &'static str,
        /// Key involved in the operation.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
    /// A DOM mutation was rejected by the host document.
    #[error("ui dom failure")]
    Dom {
        /// DOM operation that failed.
        operation: &'static str,
        /// Host-provided detail.
        detail: String,
    },
    /// Installing the tracing subscriber failed.
    #[error("ui telemetry failure")]
    Telemetry {
        /// Subscriber installation detail.
        detail: String,
    },
}

impl UiError {
    /// Build a storage error for `operation` on `key`.
    #[must_use]
    pub fn storage(operation: &'static str, key: &str, detail: impl Into<String>) -> Self {
        Self::Storage {
            operation,
            key: key.to_string(),
            detail: detail.into(),
        }
    }

    /// Build a DOM error for `operation`.
    #[must_use]
    pub fn dom(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Dom {
            operation,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_keeps_context_out_of_message() {
        let err = UiError::storage("set", "bookora_theme", "quota exceeded");
        assert_eq!(err.to_string(), "ui storage failure");
        match err {
            UiError::Storage {
                operation,
                key,
                detail,
            } => {
                assert_eq!(operation, "set");
                assert_eq!(key, "bookora_theme");
                assert_eq!(detail, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn config_error_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UiError::Config { source };
        assert!(std::error::Error::source(&err).is_some());
    }
}
