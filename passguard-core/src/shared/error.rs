//! Error handling for the password core
//!
//! This module defines the error types used throughout the password core.

use thiserror::Error;

/// Security error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    #[error("`{name}` is out of range (got {value}): {message}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        message: String,
    },

    #[error("Malformed computed result: {0}")]
    Format(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl SecurityError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(name: &'static str, value: i64, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            name,
            value,
            message: message.into(),
        }
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create a not supported error
    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::NotSupported(message.into())
    }

    /// Name of the rejected parameter, for errors that carry one
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name, .. } | Self::OutOfRange { name, .. } => Some(name),
            _ => None,
        }
    }
}

// Encoding error conversions
impl From<base64::DecodeError> for SecurityError {
    fn from(err: base64::DecodeError) -> Self {
        Self::format(format!("Base64 decoding error: {}", err))
    }
}

/// Result type used throughout the password core
pub type SecurityResult<T> = Result<T, SecurityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_error_creation() {
        let invalid = SecurityError::invalid_argument("symbols", "cannot be empty");
        let range = SecurityError::out_of_range("salt_length", -1, "cannot be less than 0");
        let format = SecurityError::format("truncated buffer");
        let unsupported = SecurityError::not_supported("hash function id 99");

        assert!(matches!(invalid, SecurityError::InvalidArgument { .. }));
        assert!(matches!(range, SecurityError::OutOfRange { .. }));
        assert!(matches!(format, SecurityError::Format(_)));
        assert!(matches!(unsupported, SecurityError::NotSupported(_)));
    }

    #[test]
    fn test_param_name() {
        assert_eq!(
            SecurityError::out_of_range("hash_iterations", -5, "cannot be less than 0").param_name(),
            Some("hash_iterations")
        );
        assert_eq!(
            SecurityError::invalid_argument("symbols", "cannot be empty").param_name(),
            Some("symbols")
        );
        assert_eq!(SecurityError::format("bad").param_name(), None);
    }

    #[test]
    fn test_error_display() {
        let error = SecurityError::out_of_range("salt_length", -1, "cannot be less than 0");
        let display = format!("{}", error);

        assert!(display.contains("salt_length"));
        assert!(display.contains("-1"));
    }

    #[test]
    fn test_base64_error_conversion() {
        use base64::Engine;

        let err = base64::engine::general_purpose::STANDARD
            .decode("not base64!!!")
            .unwrap_err();
        let converted: SecurityError = err.into();

        assert!(matches!(converted, SecurityError::Format(_)));
    }
}
