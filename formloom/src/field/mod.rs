//! Field nodes: the leaves of a form tree.
//!
//! A [`Field`] is built through a kind-narrowed builder such as
//! [`MoneyField`], configured with the shared [`FieldBuilder`] methods plus
//! the methods of its kind, then converted into a `Field` (or directly into a
//! [`Node`](crate::Node)).
//!
//! # Example
//!
//! ```
//! use formloom::field::{Field, FieldBuilder};
//!
//! let price: Field = Field::money("price")
//!     .label("Price")
//!     .currency("RWF")
//!     .required(true)
//!     .min(0)
//!     .into();
//!
//! assert_eq!(price.type_name(), "money");
//! assert_eq!(price.rule_names(), ["numeric", "required", "min"]);
//! ```

mod builders;
mod condition;
mod kind;

pub use builders::*;
pub use condition::Condition;
pub use condition::Operator;
pub use kind::*;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::Error;
use crate::error::Result;
use crate::validation::FieldRules;
use crate::validation::Rule;
use crate::validation::RuleToken;
use crate::value::Value;
use crate::value::format_float;

/// Attributes shared by every kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldCore {
    pub name: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub default: Value,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub rules: Vec<RuleToken>,
    pub class: Vec<String>,
    pub wrapper_class: Vec<String>,
    pub label_class: Vec<String>,
    pub style: Vec<String>,
    /// Extra control attributes, rendered in insertion order.
    pub attrs: IndexMap<String, Value>,
    /// Client directives such as `x-model` or `@change`.
    pub directives: IndexMap<String, String>,
    pub show_in_table: bool,
    pub sortable: bool,
    pub searchable: bool,
    pub table_width: Option<String>,
    pub table_align: String,
    pub show_when: Option<Condition>,
}

impl Default for FieldCore {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: None,
            placeholder: None,
            hint: None,
            default: Value::Null,
            required: false,
            disabled: false,
            readonly: false,
            rules: Vec::new(),
            class: Vec::new(),
            wrapper_class: Vec::new(),
            label_class: Vec::new(),
            style: Vec::new(),
            attrs: IndexMap::new(),
            directives: IndexMap::new(),
            show_in_table: false,
            sortable: false,
            searchable: false,
            table_width: None,
            table_align: "left".to_string(),
            show_when: None,
        }
    }
}

impl FieldCore {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A leaf input node. The kind is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    core: FieldCore,
    kind: FieldKind,
}

#[derive(Serialize)]
struct FieldRef<'a> {
    #[serde(flatten)]
    core: &'a FieldCore,
    #[serde(flatten)]
    kind: &'a FieldKind,
}

#[derive(Deserialize)]
struct FieldRepr {
    #[serde(flatten)]
    core: FieldCore,
    #[serde(flatten)]
    kind: FieldKind,
}

impl Field {
    pub(crate) fn from_parts(core: FieldCore, kind: FieldKind) -> Self {
        Self { core, kind }
    }

    /// Build a field from a kind tag. Unknown tags fall back to `text`.
    pub fn make(type_name: &str, name: impl Into<String>) -> Field {
        match type_name {
            "text" => Self::text(name).into(),
            "email" => Self::email(name).into(),
            "password" => Self::password(name).into(),
            "number" => Self::number(name).into(),
            "money" => Self::money(name).into(),
            "select" => Self::select(name).into(),
            "textarea" => Self::textarea(name).into(),
            "checkbox" => Self::checkbox(name).into(),
            "toggle" => Self::toggle(name).into(),
            "date" => Self::date(name).into(),
            "datetime" | "datetime-local" => Self::date_time(name).into(),
            "hidden" => Self::hidden(name).into(),
            "radio" => Self::radio(name).into(),
            other => {
                log::debug!("[field] unknown type '{other}', using text");
                Self::text(name).into()
            }
        }
    }

    pub fn text(name: impl Into<String>) -> TextField {
        TextField::new(name)
    }

    pub fn email(name: impl Into<String>) -> EmailField {
        EmailField::new(name)
    }

    pub fn password(name: impl Into<String>) -> PasswordField {
        PasswordField::new(name)
    }

    pub fn number(name: impl Into<String>) -> NumberField {
        NumberField::new(name)
    }

    pub fn money(name: impl Into<String>) -> MoneyField {
        MoneyField::new(name)
    }

    pub fn select(name: impl Into<String>) -> SelectField {
        SelectField::new(name)
    }

    pub fn textarea(name: impl Into<String>) -> TextareaField {
        TextareaField::new(name)
    }

    pub fn checkbox(name: impl Into<String>) -> CheckboxField {
        CheckboxField::new(name)
    }

    pub fn toggle(name: impl Into<String>) -> ToggleField {
        ToggleField::new(name)
    }

    pub fn date(name: impl Into<String>) -> DateField {
        DateField::new(name)
    }

    pub fn date_time(name: impl Into<String>) -> DateTimeField {
        DateTimeField::new(name)
    }

    pub fn hidden(name: impl Into<String>) -> HiddenField {
        HiddenField::new(name)
    }

    pub fn radio(name: impl Into<String>) -> RadioField {
        RadioField::new(name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.core.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns the kind tag, e.g. `"money"`.
    pub fn type_name(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn core(&self) -> &FieldCore {
        &self.core
    }

    pub fn label(&self) -> Option<&str> {
        self.core.label.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.core.hint.as_deref()
    }

    pub fn default_value(&self) -> &Value {
        &self.core.default
    }

    pub fn is_required(&self) -> bool {
        self.core.required
    }

    pub fn rules(&self) -> &[RuleToken] {
        &self.core.rules
    }

    /// Rule names in declared order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.core.rules.iter().map(RuleToken::name).collect()
    }

    pub fn attrs(&self) -> &IndexMap<String, Value> {
        &self.core.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.core.attrs.get(name)
    }

    pub fn show_when(&self) -> Option<&Condition> {
        self.core.show_when.as_ref()
    }

    pub fn is_visible_in_table(&self) -> bool {
        self.core.show_in_table
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Structural projection: every base attribute plus the kind's own.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a field from its projection.
    ///
    /// A missing or unknown `type` falls back to `text`; a missing or empty
    /// `name` is an error.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(mut map) = value else {
            return Err(Error::invalid_projection("field projection must be an object"));
        };

        match map.get("name") {
            Some(serde_json::Value::String(name)) if !name.is_empty() => {}
            _ => return Err(Error::MissingName),
        }

        let tag = match map.get("type").and_then(serde_json::Value::as_str) {
            Some("datetime-local") => "datetime",
            Some(tag) if KIND_TAGS.contains(&tag) => tag,
            other => {
                log::debug!("[field] unknown type {other:?}, using text");
                "text"
            }
        };
        map.insert("type".to_string(), serde_json::Value::from(tag));

        let repr: FieldRepr = serde_json::from_value(serde_json::Value::Object(map))?;
        Ok(Self::from_parts(repr.core, repr.kind))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        FieldRef {
            core: &self.core,
            kind: &self.kind,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Field::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Chained configuration shared by every field builder.
///
/// Each method consumes and returns the builder, so kind-specific and shared
/// calls compose in any order.
pub trait FieldBuilder: Sized {
    fn core(&self) -> &FieldCore;

    fn core_mut(&mut self) -> &mut FieldCore;

    fn label(mut self, label: impl Into<String>) -> Self {
        self.core_mut().label = Some(label.into());
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.core_mut().placeholder = Some(placeholder.into());
        self
    }

    fn hint(mut self, hint: impl Into<String>) -> Self {
        self.core_mut().hint = Some(hint.into());
        self
    }

    /// Inserts the `required` rule once, or removes every occurrence.
    fn required(mut self, required: bool) -> Self {
        let core = self.core_mut();
        core.required = required;
        if required {
            if !core.rules.iter().any(|rule| rule.is_encoded("required")) {
                core.rules.push(RuleToken::parse("required"));
            }
        } else {
            core.rules.retain(|rule| !rule.is_encoded("required"));
        }
        self
    }

    /// Append rules, either a pipe-delimited string or a token list.
    fn rules(mut self, rules: impl Into<FieldRules>) -> Self {
        let tokens = rules.into().tokens();
        self.core_mut().rules.extend(tokens);
        self
    }

    /// Append a rule object.
    fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.core_mut().rules.push(RuleToken::structured(rule));
        self
    }

    fn min(mut self, min: impl Into<f64>) -> Self {
        let min = min.into();
        let core = self.core_mut();
        core.rules.push(RuleToken::parse(&format!("min:{}", format_float(min))));
        core.attrs.insert("min".to_string(), Value::number(min));
        self
    }

    fn max(mut self, max: impl Into<f64>) -> Self {
        let max = max.into();
        let core = self.core_mut();
        core.rules.push(RuleToken::parse(&format!("max:{}", format_float(max))));
        core.attrs.insert("max".to_string(), Value::number(max));
        self
    }

    fn min_length(mut self, length: usize) -> Self {
        let core = self.core_mut();
        core.rules.push(RuleToken::parse(&format!("min_length:{length}")));
        core.attrs.insert("minlength".to_string(), Value::from(length));
        self
    }

    fn max_length(mut self, length: usize) -> Self {
        let core = self.core_mut();
        core.rules.push(RuleToken::parse(&format!("max_length:{length}")));
        core.attrs.insert("maxlength".to_string(), Value::from(length));
        self
    }

    /// Append a `unique:table[,column[,ignore_id]]` rule. It is resolved only
    /// by an engine that registers `unique`.
    fn unique(mut self, table: &str, column: Option<&str>, ignore_id: Option<i64>) -> Self {
        let mut rule = format!("unique:{table}");
        if let Some(column) = column {
            rule.push(',');
            rule.push_str(column);
        }
        if let Some(id) = ignore_id {
            rule.push_str(&format!(",{id}"));
        }
        self.core_mut().rules.push(RuleToken::parse(&rule));
        self
    }

    fn default(mut self, value: impl Into<Value>) -> Self {
        self.core_mut().default = value.into();
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.core_mut().disabled = disabled;
        self
    }

    fn readonly(mut self, readonly: bool) -> Self {
        self.core_mut().readonly = readonly;
        self
    }

    fn autofocus(mut self, autofocus: bool) -> Self {
        if autofocus {
            self.core_mut().attrs.insert("autofocus".to_string(), Value::Bool(true));
        }
        self
    }

    /// Replace the control classes (whitespace separated).
    fn class(mut self, classes: &str) -> Self {
        self.core_mut().class = split_classes(classes);
        self
    }

    fn wrapper_class(mut self, classes: &str) -> Self {
        self.core_mut().wrapper_class = split_classes(classes);
        self
    }

    fn label_class(mut self, classes: &str) -> Self {
        self.core_mut().label_class = split_classes(classes);
        self
    }

    fn style(mut self, style: impl Into<String>) -> Self {
        self.core_mut().style = vec![style.into()];
        self
    }

    fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.core_mut().attrs.insert(name.into(), value.into());
        self
    }

    /// Merge extra control attributes; later keys win.
    fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let core = self.core_mut();
        for (name, value) in attrs {
            core.attrs.insert(name.into(), value.into());
        }
        self
    }

    fn prefix(self, prefix: impl Into<String>) -> Self {
        self.attr("data-prefix", prefix.into())
    }

    fn suffix(self, suffix: impl Into<String>) -> Self {
        self.attr("data-suffix", suffix.into())
    }

    fn column_span(mut self, span: u32) -> Self {
        self.core_mut().wrapper_class.push(format!("col-span-{span}"));
        self
    }

    fn directive(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.core_mut().directives.insert(name.into(), expression.into());
        self
    }

    fn directives<I, K, V>(mut self, directives: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let core = self.core_mut();
        for (name, expression) in directives {
            core.directives.insert(name.into(), expression.into());
        }
        self
    }

    fn x_model(self, expression: impl Into<String>) -> Self {
        self.directive("x-model", expression)
    }

    fn x_show(self, condition: impl Into<String>) -> Self {
        self.directive("x-show", condition)
    }

    fn x_on(self, event: &str, handler: impl Into<String>) -> Self {
        self.directive(format!("@{event}"), handler)
    }

    /// Show the field only while `field` compares true against `value`.
    fn show_when(mut self, field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        let condition = Condition::new(field, operator, value);
        let core = self.core_mut();
        core.directives.insert("x-show".to_string(), condition.expression("form"));
        core.show_when = Some(condition);
        self
    }

    /// Hide the field while `field` compares true against `value`.
    fn hide_when(mut self, field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        let condition = Condition {
            negated: true,
            ..Condition::new(field, operator, value)
        };
        let core = self.core_mut();
        core.directives.insert("x-show".to_string(), condition.expression("form"));
        core.show_when = Some(condition);
        self
    }

    fn show_in_table(mut self, show: bool) -> Self {
        self.core_mut().show_in_table = show;
        self
    }

    fn sortable(mut self, sortable: bool) -> Self {
        self.core_mut().sortable = sortable;
        self
    }

    fn searchable(mut self, searchable: bool) -> Self {
        self.core_mut().searchable = searchable;
        self
    }

    fn table_width(mut self, width: impl Into<String>) -> Self {
        self.core_mut().table_width = Some(width.into());
        self
    }

    fn table_align(mut self, align: impl Into<String>) -> Self {
        self.core_mut().table_align = align.into();
        self
    }
}

fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_is_idempotent() {
        let builder = Field::text("name")
            .required(true)
            .required(true)
            .rules("max:10")
            .required(true);
        assert_eq!(builder.clone().build().rule_names(), ["required", "max"]);

        let builder = builder.required(false);
        let field = builder.clone().build();
        assert_eq!(field.rule_names(), ["max"]);
        assert!(!field.is_required());

        let field = builder.required(true).required(true).build();
        assert_eq!(field.rule_names(), ["max", "required"]);
    }

    #[test]
    fn test_constraints_append_rule_and_attr() {
        let builder = Field::text("code").min(2).max(2.5).max_length(8);
        let field = builder.clone().build();
        let rules: Vec<String> = field.rules().iter().map(ToString::to_string).collect();
        assert_eq!(rules, ["min:2", "max:2.5", "max_length:8"]);
        assert_eq!(field.attr("min"), Some(&Value::Int(2)));
        assert_eq!(field.attr("max"), Some(&Value::Float(2.5)));
        assert_eq!(field.attr("maxlength"), Some(&Value::Int(8)));

        // Repeated calls append again.
        let field = builder.min(3).build();
        assert_eq!(field.rule_names(), ["min", "max", "max_length", "min"]);
        assert_eq!(field.attr("min"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_make_falls_back_to_text() {
        assert_eq!(Field::make("colour", "c").type_name(), "text");
        assert_eq!(Field::make("datetime-local", "at").type_name(), "datetime");
        assert_eq!(Field::make("email", "e").rule_names(), ["email"]);
    }

    #[test]
    fn test_from_value_requires_name() {
        let err = Field::from_value(serde_json::json!({"type": "text"})).unwrap_err();
        assert!(matches!(err, Error::MissingName));
    }

    #[test]
    fn test_hide_when_sets_directive() {
        let field: Field = Field::text("company")
            .hide_when("type", Operator::StrictEq, "personal")
            .into();
        assert_eq!(
            field.core().directives.get("x-show").map(String::as_str),
            Some(r#"!(form.type === "personal")"#)
        );
        assert!(field.show_when().is_some_and(|c| c.negated));
    }

    #[test]
    fn test_unique_rule() {
        let field: Field = Field::email("email").unique("users", Some("email"), Some(7)).into();
        assert_eq!(field.rules()[1].to_string(), "unique:users,email,7");
    }
}
