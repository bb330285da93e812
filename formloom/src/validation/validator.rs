//! Rule-based validator for submitted data.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::Error;
use crate::error::RuleError;
use crate::error::Result;
use crate::value::DataBag;
use crate::value::Value;

use super::FieldRules;
use super::Rule;
use super::RuleEngine;

/// Failed fields mapped to their messages. Each failed field carries exactly
/// one message, the one of the first rule that failed.
pub type ErrorBag = IndexMap<String, Vec<String>>;

/// Validates a data bag against per-field rules.
///
/// Rules run in declared order and stop at the first failure for a field.
/// A validator is single use: the first call to [`validate`](Self::validate)
/// (or any accessor) computes the outcome, later calls return it unchanged.
///
/// # Example
///
/// ```
/// use formloom::validation::Validator;
/// use formloom::DataBag;
///
/// let mut data = DataBag::new();
/// data.insert("email".into(), "".into());
///
/// let validator = Validator::new(data)
///     .rule("email", "required|email")
///     .message("email", "We need your email");
///
/// assert!(validator.fails());
/// assert_eq!(validator.first_error("email"), Some("We need your email"));
/// ```
pub struct Validator {
    data: DataBag,
    rules: IndexMap<String, FieldRules>,
    messages: HashMap<String, String>,
    engine: RuleEngine,
    strict: bool,
    outcome: OnceCell<ErrorBag>,
}

impl Validator {
    /// Create a validator over the given data with no rules.
    pub fn new<I, K, V>(data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            data: data.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            rules: IndexMap::new(),
            messages: HashMap::new(),
            engine: RuleEngine::new(),
            strict: false,
            outcome: OnceCell::new(),
        }
    }

    /// Create a validator from data, a rules map and custom messages.
    pub fn make<D, DK, DV, R, RK, RV, M, MK, MV>(data: D, rules: R, messages: M) -> Self
    where
        D: IntoIterator<Item = (DK, DV)>,
        DK: Into<String>,
        DV: Into<Value>,
        R: IntoIterator<Item = (RK, RV)>,
        RK: Into<String>,
        RV: Into<FieldRules>,
        M: IntoIterator<Item = (MK, MV)>,
        MK: Into<String>,
        MV: Into<String>,
    {
        Self::new(data).rules(rules).messages(messages)
    }

    /// Declare the rules of one field, replacing any earlier declaration.
    pub fn rule(mut self, field: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.rules.insert(field.into(), rules.into());
        self
    }

    /// Declare rules for several fields.
    pub fn rules<R, K, V>(mut self, rules: R) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldRules>,
    {
        for (field, field_rules) in rules {
            self.rules.insert(field.into(), field_rules.into());
        }
        self
    }

    /// Override the message reported for a field, whichever rule fails.
    pub fn message(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(field.into(), message.into());
        self
    }

    /// Override messages for several fields.
    pub fn messages<M, K, V>(mut self, messages: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (field, message) in messages {
            self.messages.insert(field.into(), message.into());
        }
        self
    }

    /// Use a custom rule engine.
    pub fn engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Reject unknown names, bad parameters and invalid patterns instead of
    /// skipping them.
    ///
    /// Rules declared so far are checked now. Rules declared afterwards are
    /// checked when validation runs; a field whose rules cannot be resolved
    /// then fails with the resolution error as its message.
    pub fn strict(mut self) -> Result<Self> {
        for (field, field_rules) in &self.rules {
            self.resolve(field_rules, true)
                .map_err(|source| Error::rule(field.clone(), source))?;
        }
        self.strict = true;
        Ok(self)
    }

    /// Run validation. Returns `true` when every field passed.
    pub fn validate(&self) -> bool {
        self.outcome().is_empty()
    }

    /// Alias for [`validate`](Self::validate).
    pub fn passes(&self) -> bool {
        self.validate()
    }

    /// Returns `true` when at least one field failed.
    pub fn fails(&self) -> bool {
        !self.validate()
    }

    /// Failed fields and their messages.
    pub fn errors(&self) -> &ErrorBag {
        self.outcome()
    }

    /// First message of a field, if it failed.
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.outcome()
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// One message per failed field, the shape a [`Form`](crate::Form) takes.
    pub fn first_errors(&self) -> IndexMap<String, String> {
        self.outcome()
            .iter()
            .filter_map(|(field, messages)| messages.first().map(|m| (field.clone(), m.clone())))
            .collect()
    }

    /// Values of the declared fields that passed. Fields without a rules entry
    /// are never included; absent values come back as null.
    pub fn validated(&self) -> DataBag {
        let errors = self.outcome();
        self.rules
            .keys()
            .filter(|field| !errors.contains_key(*field))
            .map(|field| {
                let value = self.data.get(field).cloned().unwrap_or_default();
                (field.clone(), value)
            })
            .collect()
    }

    /// The data under validation.
    pub fn data(&self) -> &DataBag {
        &self.data
    }

    fn outcome(&self) -> &ErrorBag {
        self.outcome.get_or_init(|| self.run())
    }

    fn resolve(&self, field_rules: &FieldRules, strict: bool) -> std::result::Result<Vec<Arc<dyn Rule>>, RuleError> {
        let mut executable = Vec::new();
        for token in field_rules.tokens() {
            if let Some(rule) = self.engine.resolve(&token, strict)? {
                executable.push(rule);
            }
        }
        Ok(executable)
    }

    fn run(&self) -> ErrorBag {
        let null = Value::Null;
        let mut errors = ErrorBag::new();
        for (field, field_rules) in &self.rules {
            let rules = match self.resolve(field_rules, self.strict) {
                Ok(rules) => rules,
                Err(source) => {
                    log::warn!("[validation] '{field}': {source}");
                    errors.insert(field.clone(), vec![source.to_string()]);
                    continue;
                }
            };
            let value = self.data.get(field).unwrap_or(&null);
            if let Some(failed) = rules.iter().find(|rule| !rule.passes(value, &self.data)) {
                let message = self
                    .messages
                    .get(field)
                    .cloned()
                    .unwrap_or_else(|| failed.message());
                log::trace!("[validation] '{field}' failed rule '{}'", failed.name());
                errors.insert(field.clone(), vec![message]);
            }
        }

        log::debug!(
            "[validation] {} field(s) checked, {} failed",
            self.rules.len(),
            errors.len()
        );
        errors
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("data", &self.data)
            .field("rules", &self.rules)
            .field("messages", &self.messages)
            .field("strict", &self.strict)
            .field("outcome", &self.outcome.get())
            .finish()
    }
}
