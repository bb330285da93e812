//! Resolution of rule tokens into executable rules.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RuleError;

use super::EncodedRule;
use super::Rule;
use super::RuleToken;
use super::rules;

/// Builds a rule from the parameters of an encoded token.
pub type RuleFactory = Arc<dyn Fn(&[String]) -> Result<Arc<dyn Rule>, RuleError> + Send + Sync>;

/// Maps rule tokens to executable rules.
///
/// Built-in names are `required`, `email`, `numeric`, `integer`, `min`,
/// `max`, `min_length`, `max_length`, `in` and `regex`. Further names can be
/// registered; a registered name shadows a built-in one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use formloom::validation::{Rule, RuleEngine, rules::In};
///
/// let engine = RuleEngine::new().register("status", |_params| {
///     Ok(Arc::new(In(vec!["draft".into(), "published".into()])) as Arc<dyn Rule>)
/// });
/// assert!(engine.knows("status"));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    custom: HashMap<String, RuleFactory>,
}

impl RuleEngine {
    /// Create an engine with only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named rule factory.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&[String]) -> Result<Arc<dyn Rule>, RuleError> + Send + Sync + 'static,
    {
        self.custom.insert(name.into(), Arc::new(factory));
        self
    }

    /// Returns `true` if `name` resolves to a rule.
    pub fn knows(&self, name: &str) -> bool {
        self.custom.contains_key(name) || is_builtin(name)
    }

    /// Resolve a token.
    ///
    /// Structured rules pass through untouched. An unknown name resolves to
    /// `Ok(None)` unless `strict`, in which case it is an error. Malformed
    /// numeric parameters fall back to permissive defaults (`min` → 0,
    /// `max` → unbounded) unless `strict`.
    pub fn resolve(&self, token: &RuleToken, strict: bool) -> Result<Option<Arc<dyn Rule>>, RuleError> {
        match token {
            RuleToken::Structured(rule) => Ok(Some(Arc::clone(rule))),
            RuleToken::Encoded(encoded) => self.resolve_encoded(encoded, strict),
        }
    }

    fn resolve_encoded(&self, encoded: &EncodedRule, strict: bool) -> Result<Option<Arc<dyn Rule>>, RuleError> {
        let name = encoded.name();
        let params = encoded.params();

        if let Some(factory) = self.custom.get(name) {
            return factory(params).map(Some);
        }

        let rule: Arc<dyn Rule> = match name {
            "required" => Arc::new(rules::Required),
            "email" => Arc::new(rules::Email),
            "numeric" => Arc::new(rules::Numeric),
            "integer" => Arc::new(rules::Integer),
            "min" => Arc::new(rules::Min(number_param(name, params, 0.0, strict)?)),
            "max" => Arc::new(rules::Max(number_param(name, params, f64::MAX, strict)?)),
            "min_length" => Arc::new(rules::MinLength(length_param(name, params, 0, strict)?)),
            "max_length" => Arc::new(rules::MaxLength(length_param(name, params, usize::MAX, strict)?)),
            "in" => Arc::new(rules::In(params.to_vec())),
            "regex" => {
                // The pattern may itself contain commas.
                let pattern = params.join(",");
                if strict {
                    Arc::new(rules::Regex::new(&pattern)?)
                } else {
                    Arc::new(rules::Regex::lenient(&pattern))
                }
            }
            _ if strict => return Err(RuleError::unknown(name)),
            _ => {
                log::trace!("[validation] skipping unknown rule '{encoded}'");
                return Ok(None);
            }
        };
        Ok(Some(rule))
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn is_builtin(name: &str) -> bool {
    matches!(
        name,
        "required" | "email" | "numeric" | "integer" | "min" | "max" | "min_length" | "max_length" | "in" | "regex"
    )
}

fn number_param(rule: &str, params: &[String], fallback: f64, strict: bool) -> Result<f64, RuleError> {
    match params.first().map(|p| p.trim().parse::<f64>()) {
        Some(Ok(n)) if n.is_finite() => Ok(n),
        _ if strict => Err(RuleError::invalid_parameter(rule, "expected a number")),
        _ => Ok(fallback),
    }
}

fn length_param(rule: &str, params: &[String], fallback: usize, strict: bool) -> Result<usize, RuleError> {
    match params.first().map(|p| p.trim().parse::<usize>()) {
        Some(Ok(n)) => Ok(n),
        _ if strict => Err(RuleError::invalid_parameter(rule, "expected a non-negative integer")),
        _ => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DataBag;
    use crate::value::Value;

    #[test]
    fn test_unknown_rule_is_skipped_when_lenient() {
        let engine = RuleEngine::new();
        let token = RuleToken::parse("unique:users,email");
        assert!(engine.resolve(&token, false).unwrap().is_none());
        assert_eq!(
            engine.resolve(&token, true).err(),
            Some(RuleError::unknown("unique"))
        );
    }

    #[test]
    fn test_bad_numeric_param() {
        let engine = RuleEngine::new();
        let token = RuleToken::parse("min:abc");
        let rule = engine.resolve(&token, false).unwrap().unwrap();
        assert_eq!(rule.message(), "This field must be at least 0.");
        assert!(matches!(
            engine.resolve(&token, true),
            Err(RuleError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_regex_keeps_commas() {
        let engine = RuleEngine::new();
        let token = RuleToken::parse("regex:[0-9]{2,4}");
        let rule = engine.resolve(&token, true).unwrap().unwrap();
        assert!(rule.passes(&Value::from("123"), &DataBag::new()));
        assert!(!rule.passes(&Value::from("12345"), &DataBag::new()));
    }

    #[test]
    fn test_registered_rule_shadows_builtin() {
        let engine = RuleEngine::new().register("email", |_| Ok(Arc::new(rules::Required) as Arc<dyn Rule>));
        let rule = engine
            .resolve(&RuleToken::parse("email"), false)
            .unwrap()
            .unwrap();
        assert_eq!(rule.name(), "required");
    }
}
