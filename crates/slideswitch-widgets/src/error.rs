//! Error types for widget configuration.

use thiserror::Error;

/// Errors raised synchronously by constructors and setters.
///
/// A setter that returns an error leaves the widget unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// A configuration value was rejected.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SwitchError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for switch operations.
pub type Result<T> = std::result::Result<T, SwitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SwitchError::invalid("color_palette", "must be null or a palette object");
        assert_eq!(
            err.to_string(),
            "invalid argument `color_palette`: must be null or a palette object"
        );
    }

    #[test]
    fn test_config_display() {
        let err = SwitchError::Config("expected a mapping".to_string());
        assert_eq!(err.to_string(), "invalid configuration: expected a mapping");
    }
}
