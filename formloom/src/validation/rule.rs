//! Rule trait and rule tokens.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::value::DataBag;
use crate::value::Value;

/// An executable validation rule.
///
/// Implement this for rules that need more than a `name:params` string can
/// express, then attach them with [`RuleToken::structured`].
///
/// # Example
///
/// ```
/// use formloom::validation::Rule;
/// use formloom::{DataBag, Value};
///
/// struct Confirmed;
///
/// impl Rule for Confirmed {
///     fn passes(&self, value: &Value, data: &DataBag) -> bool {
///         data.get("password") == Some(value)
///     }
///
///     fn message(&self) -> String {
///         "The confirmation does not match.".to_string()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Check the value. `data` is the whole submission, for cross-field rules.
    fn passes(&self, value: &Value, data: &DataBag) -> bool;

    /// Message recorded when the rule fails.
    fn message(&self) -> String;

    /// Name used when the rule is serialized.
    fn name(&self) -> &str {
        "custom"
    }
}

/// A `name` or `name:param1,param2` rule reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedRule {
    name: String,
    params: Vec<String>,
}

impl EncodedRule {
    /// Creates a rule reference from a name and parameters.
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses the string form: the name ends at the first `:`, parameters are
    /// comma separated.
    pub fn parse(rule: &str) -> Self {
        match rule.split_once(':') {
            Some((name, params)) => Self {
                name: name.to_string(),
                params: params.split(',').map(str::to_string).collect(),
            },
            None => Self {
                name: rule.to_string(),
                params: Vec::new(),
            },
        }
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for EncodedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

/// One entry of a field's rule list.
#[derive(Clone)]
pub enum RuleToken {
    /// A ready-made rule object, used as is.
    Structured(Arc<dyn Rule>),
    /// A named rule resolved by the [`RuleEngine`](super::RuleEngine).
    Encoded(EncodedRule),
}

impl RuleToken {
    /// Wraps a rule object.
    pub fn structured(rule: impl Rule + 'static) -> Self {
        Self::Structured(Arc::new(rule))
    }

    /// Parses a `name:params` string.
    pub fn parse(rule: &str) -> Self {
        Self::Encoded(EncodedRule::parse(rule))
    }

    /// Returns the rule name (`custom` unless a structured rule names itself).
    pub fn name(&self) -> &str {
        match self {
            Self::Structured(rule) => rule.name(),
            Self::Encoded(encoded) => encoded.name(),
        }
    }

    /// Returns `true` if this is the encoded rule `name`.
    pub fn is_encoded(&self, name: &str) -> bool {
        matches!(self, Self::Encoded(encoded) if encoded.name == name)
    }
}

impl fmt::Debug for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(rule) => f.debug_tuple("Structured").field(&rule.name()).finish(),
            Self::Encoded(encoded) => f.debug_tuple("Encoded").field(encoded).finish(),
        }
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(rule) => f.write_str(rule.name()),
            Self::Encoded(encoded) => encoded.fmt(f),
        }
    }
}

impl PartialEq for RuleToken {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Structured(a), Self::Structured(b)) => Arc::ptr_eq(a, b),
            (Self::Encoded(a), Self::Encoded(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for RuleToken {
    fn from(rule: &str) -> Self {
        Self::parse(rule)
    }
}

impl From<String> for RuleToken {
    fn from(rule: String) -> Self {
        Self::parse(&rule)
    }
}

impl From<EncodedRule> for RuleToken {
    fn from(rule: EncodedRule) -> Self {
        Self::Encoded(rule)
    }
}

impl Serialize for RuleToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RuleToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(RuleToken::from)
    }
}

/// The rules declared for one field: either a token list or a single
/// pipe-delimited string such as `"required|email"`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRules {
    Tokens(Vec<RuleToken>),
    Piped(String),
}

impl FieldRules {
    /// Returns the tokens in declared order, splitting a piped string first.
    pub fn tokens(&self) -> Vec<RuleToken> {
        match self {
            Self::Tokens(tokens) => tokens.clone(),
            Self::Piped(rules) => split_piped(rules),
        }
    }
}

/// Splits `"required|min:3"` into tokens; empty segments are dropped.
pub(crate) fn split_piped(rules: &str) -> Vec<RuleToken> {
    rules
        .split('|')
        .filter(|segment| !segment.is_empty())
        .map(RuleToken::parse)
        .collect()
}

impl From<&str> for FieldRules {
    fn from(rules: &str) -> Self {
        Self::Piped(rules.to_string())
    }
}

impl From<String> for FieldRules {
    fn from(rules: String) -> Self {
        Self::Piped(rules)
    }
}

impl From<RuleToken> for FieldRules {
    fn from(token: RuleToken) -> Self {
        Self::Tokens(vec![token])
    }
}

impl From<Vec<RuleToken>> for FieldRules {
    fn from(tokens: Vec<RuleToken>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<Vec<&str>> for FieldRules {
    fn from(rules: Vec<&str>) -> Self {
        Self::Tokens(rules.into_iter().map(RuleToken::parse).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldRules {
    fn from(rules: [&str; N]) -> Self {
        Self::Tokens(rules.into_iter().map(RuleToken::parse).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_colon() {
        let rule = EncodedRule::parse("regex:^a:b$");
        assert_eq!(rule.name(), "regex");
        assert_eq!(rule.params(), ["^a:b$"]);

        let rule = EncodedRule::parse("in:draft,published");
        assert_eq!(rule.params(), ["draft", "published"]);

        let rule = EncodedRule::parse("required");
        assert!(rule.params().is_empty());
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["required", "min:3", "in:a,b,c"] {
            assert_eq!(RuleToken::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_piped_rules_split() {
        let rules = FieldRules::from("required||email");
        let names: Vec<_> = rules.tokens().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, ["required", "email"]);
    }
}
