//! Error types

mod rule;

pub use rule::*;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by formloom.
///
/// Failing validation rules are not errors; they are reported through
/// [`Validator::errors`](crate::validation::Validator::errors). These variants
/// cover configuration faults and malformed input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule token could not be turned into an executable rule.
    #[error("Rule configuration error on field '{field}': {source}")]
    Rule {
        /// The field whose rule list contains the token.
        field: String,
        /// What was wrong with the token.
        #[source]
        source: RuleError,
    },

    /// A node projection carried no usable field name.
    #[error("Field projection is missing a name")]
    MissingName,

    /// A node projection had the wrong shape.
    #[error("Invalid node projection: {0}")]
    InvalidProjection(String),

    /// A condition operator was not recognised.
    #[error("Unknown operator '{0}'")]
    InvalidOperator(String),

    /// A model could not be turned into form values.
    #[error("Model must serialize to an object, got {0}")]
    InvalidModel(&'static str),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new rule error for the given field.
    pub fn rule(field: impl Into<String>, source: RuleError) -> Self {
        Self::Rule {
            field: field.into(),
            source,
        }
    }

    /// Creates a new invalid projection error.
    pub fn invalid_projection(message: impl Into<String>) -> Self {
        Self::InvalidProjection(message.into())
    }

    /// Returns the rule error if this is a rule configuration fault.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::Rule { source, .. } => Some(source),
            _ => None,
        }
    }
}
