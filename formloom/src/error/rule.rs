//! Rule configuration error types

/// Errors that can occur while resolving a rule token.
///
/// Only surfaced in strict mode; the lenient validator skips or degrades
/// instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// No built-in or registered rule has this name.
    #[error("Unknown rule '{name}'")]
    Unknown { name: String },

    /// A parameter was missing or could not be parsed.
    #[error("Invalid parameter for rule '{rule}': {message}")]
    InvalidParameter { rule: String, message: String },

    /// The regex pattern does not compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RuleError {
    /// Creates a new unknown rule error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }

    /// Creates a new invalid parameter error.
    pub fn invalid_parameter(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
