//! Built-in rules.
//!
//! Every rule except [`Required`] passes vacuously on an empty value so that
//! emptiness is reported once, by `required`.

use email_address::EmailAddress;
use email_address::Options;

use crate::error::RuleError;
use crate::value::DataBag;
use crate::value::Value;
use crate::value::format_float;

use super::Rule;

/// Empty, but not the literal `0` / `"0"` which numeric rules still check.
fn is_vacuous(value: &Value) -> bool {
    value.is_empty() && !value.is_literal_zero()
}

/// Size used by the min/max rules: characters for strings, element count for
/// collections, magnitude otherwise.
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        Value::List(items) => Some(items.len() as f64),
        Value::Map(map) => Some(map.len() as f64),
        other => other.as_f64(),
    }
}

/// Fails on null, whitespace-only strings and empty collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        !value.is_blank()
    }

    fn message(&self) -> String {
        "This field is required.".to_string()
    }

    fn name(&self) -> &str {
        "required"
    }
}

/// Requires a syntactically valid email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Rule for Email {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if value.is_empty() {
            return true;
        }
        let options = Options::default().without_display_text().with_required_tld();
        EmailAddress::parse_with_options(&value.to_text(), options).is_ok()
    }

    fn message(&self) -> String {
        "Please enter a valid email address.".to_string()
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Requires a number or numeric string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Rule for Numeric {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        is_vacuous(value) || value.is_numeric()
    }

    fn message(&self) -> String {
        "This field must be a number.".to_string()
    }

    fn name(&self) -> &str {
        "numeric"
    }
}

/// Requires a whole number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Rule for Integer {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if is_vacuous(value) {
            return true;
        }
        match value {
            Value::Int(_) => true,
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        }
    }

    fn message(&self) -> String {
        "This field must be an integer.".to_string()
    }

    fn name(&self) -> &str {
        "integer"
    }
}

/// Lower bound on length, count or magnitude.
#[derive(Debug, Clone, Copy)]
pub struct Min(pub f64);

impl Rule for Min {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if is_vacuous(value) {
            return true;
        }
        measure(value).is_some_and(|size| size >= self.0)
    }

    fn message(&self) -> String {
        format!("This field must be at least {}.", format_float(self.0))
    }

    fn name(&self) -> &str {
        "min"
    }
}

/// Upper bound on length, count or magnitude.
#[derive(Debug, Clone, Copy)]
pub struct Max(pub f64);

impl Rule for Max {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if is_vacuous(value) {
            return true;
        }
        measure(value).is_some_and(|size| size <= self.0)
    }

    fn message(&self) -> String {
        format!("This field must not exceed {}.", format_float(self.0))
    }

    fn name(&self) -> &str {
        "max"
    }
}

/// Minimum number of characters of the textual value.
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Rule for MinLength {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        is_vacuous(value) || value.to_text().chars().count() >= self.0
    }

    fn message(&self) -> String {
        format!("This field must be at least {} characters.", self.0)
    }

    fn name(&self) -> &str {
        "min_length"
    }
}

/// Maximum number of characters of the textual value.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Rule for MaxLength {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        is_vacuous(value) || value.to_text().chars().count() <= self.0
    }

    fn message(&self) -> String {
        format!("This field must not exceed {} characters.", self.0)
    }

    fn name(&self) -> &str {
        "max_length"
    }
}

/// Type-strict membership: only a string equal to one of the allowed values
/// passes.
#[derive(Debug, Clone, Default)]
pub struct In(pub Vec<String>);

impl Rule for In {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if value.is_empty() {
            return true;
        }
        value
            .as_str()
            .is_some_and(|s| self.0.iter().any(|allowed| allowed == s))
    }

    fn message(&self) -> String {
        "The selected value is invalid.".to_string()
    }

    fn name(&self) -> &str {
        "in"
    }
}

/// Full match of the textual value against a pattern.
///
/// Accepts plain patterns and `/pattern/flags` with flags `i`, `m`, `s`,
/// `x` (`u` is accepted and ignored).
#[derive(Debug, Clone)]
pub struct Regex {
    source: String,
    compiled: Option<regex::Regex>,
}

impl Regex {
    /// Compiles the pattern, failing on invalid syntax.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let compiled = compile_pattern(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            compiled: Some(compiled),
        })
    }

    /// Like [`Regex::new`], but an invalid pattern yields a rule that never
    /// passes.
    pub fn lenient(pattern: &str) -> Self {
        match Self::new(pattern) {
            Ok(rule) => rule,
            Err(err) => {
                log::warn!("[validation] {err}; the rule will always fail");
                Self {
                    source: pattern.to_string(),
                    compiled: None,
                }
            }
        }
    }

    /// Returns the pattern as written.
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl Rule for Regex {
    fn passes(&self, value: &Value, _data: &DataBag) -> bool {
        if value.is_empty() {
            return true;
        }
        self.compiled
            .as_ref()
            .is_some_and(|re| re.is_match(&value.to_text()))
    }

    fn message(&self) -> String {
        "The format is invalid.".to_string()
    }

    fn name(&self) -> &str {
        "regex"
    }
}

/// Anchors the pattern at both ends and translates `/…/flags` delimiters.
fn compile_pattern(pattern: &str) -> Result<regex::Regex, RuleError> {
    let (body, flags) = match pattern.strip_prefix('/').and_then(|rest| {
        rest.rfind('/').map(|end| (&rest[..end], &rest[end + 1..]))
    }) {
        Some((body, raw_flags)) => {
            let mut flags = String::new();
            for flag in raw_flags.chars() {
                match flag {
                    'i' | 'm' | 's' | 'x' => flags.push(flag),
                    'u' => {}
                    other => {
                        return Err(RuleError::invalid_pattern(
                            pattern,
                            format!("unsupported flag '{other}'"),
                        ));
                    }
                }
            }
            (body, flags)
        }
        None => (pattern, String::new()),
    };

    let anchored = if flags.is_empty() {
        format!(r"\A(?:{body})\z")
    } else {
        format!(r"(?{flags})\A(?:{body})\z")
    };

    regex::Regex::new(&anchored).map_err(|e| RuleError::invalid_pattern(pattern, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &dyn Rule, value: impl Into<Value>) -> bool {
        rule.passes(&value.into(), &DataBag::new())
    }

    #[test]
    fn test_required_accepts_falsy_present_values() {
        assert!(check(&Required, 0));
        assert!(check(&Required, false));
        assert!(!check(&Required, Value::Null));
        assert!(!check(&Required, "  "));
        assert!(!check(&Required, Vec::<Value>::new()));
    }

    #[test]
    fn test_email() {
        assert!(check(&Email, ""));
        assert!(check(&Email, "jane@example.com"));
        assert!(!check(&Email, "not-an-email"));
        assert!(!check(&Email, "Jane <jane@example.com>"));
        assert!(!check(&Email, "jane@localhost"));
        assert!(!check(&Email, "a@b"));
    }

    #[test]
    fn test_numeric_checks_literal_zero() {
        assert!(check(&Numeric, 0));
        assert!(check(&Numeric, "0"));
        assert!(check(&Numeric, "12.5"));
        assert!(!check(&Numeric, "twelve"));
    }

    #[test]
    fn test_min_measures_by_type() {
        let min = Min(3.0);
        assert!(check(&min, "abc"));
        assert!(!check(&min, "ab"));
        assert!(check(&min, 5));
        assert!(!check(&min, 2));
        assert!(!check(&min, vec![1, 2]));
        // "0" is not vacuous: it is one character long
        assert!(!check(&min, "0"));
        assert!(check(&min, ""));
    }

    #[test]
    fn test_max_message_uses_literal_threshold() {
        assert_eq!(Max(10.0).message(), "This field must not exceed 10.");
        assert_eq!(Min(0.5).message(), "This field must be at least 0.5.");
    }

    #[test]
    fn test_in_is_type_strict() {
        let rule = In(vec!["1".to_string(), "2".to_string()]);
        assert!(check(&rule, "1"));
        assert!(!check(&rule, 1));
        assert!(!check(&rule, "3"));
    }

    #[test]
    fn test_regex_full_match_and_delimiters() {
        let rule = Regex::new("[a-z]+").unwrap();
        assert!(check(&rule, "abc"));
        assert!(!check(&rule, "abc1"));

        let rule = Regex::new("/^[A-Z]{3}$/i").unwrap();
        assert!(check(&rule, "usd"));

        assert!(Regex::new("/x/Q").is_err());
        assert!(Regex::new("(unclosed").is_err());
        assert!(!check(&Regex::lenient("(unclosed"), "anything"));
    }

    #[test]
    fn test_length_rules() {
        assert!(check(&MaxLength(3), "abc"));
        assert!(!check(&MaxLength(3), "abcd"));
        assert!(!check(&MinLength(2), "a"));
        assert!(check(&MinLength(2), ""));
    }

    #[test]
    fn test_integer() {
        assert!(check(&Integer, 4));
        assert!(check(&Integer, "42"));
        assert!(!check(&Integer, "4.2"));
        assert!(!check(&Integer, 4.5));
    }
}
