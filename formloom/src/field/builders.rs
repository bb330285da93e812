//! Kind-narrowed field builders.

use super::CheckboxAttrs;
use super::DateAttrs;
use super::DateTimeAttrs;
use super::Field;
use super::FieldBuilder;
use super::FieldCore;
use super::FieldKind;
use super::MoneyAttrs;
use super::NumberAttrs;
use super::Options;
use super::PasswordAttrs;
use super::RadioAttrs;
use super::SelectAttrs;
use super::TextareaAttrs;
use super::ToggleAttrs;
use crate::node::Node;
use crate::validation::RuleToken;
use crate::value::Value;

/// Attribute set that knows which kind it belongs to.
pub trait KindAttrs: Default {
    fn into_kind(self) -> FieldKind;
}

/// Marker attributes of the text kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextAttrs;

/// Marker attributes of the email kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailAttrs;

/// Marker attributes of the hidden kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HiddenAttrs;

impl KindAttrs for TextAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Text
    }
}

impl KindAttrs for EmailAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Email
    }
}

impl KindAttrs for HiddenAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Hidden
    }
}

impl KindAttrs for PasswordAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Password(self)
    }
}

impl KindAttrs for NumberAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Number(self)
    }
}

impl KindAttrs for MoneyAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Money(self)
    }
}

impl KindAttrs for SelectAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Select(self)
    }
}

impl KindAttrs for TextareaAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Textarea(self)
    }
}

impl KindAttrs for CheckboxAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Checkbox(self)
    }
}

impl KindAttrs for ToggleAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Toggle(self)
    }
}

impl KindAttrs for DateAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Date(self)
    }
}

impl KindAttrs for DateTimeAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::DateTime(self)
    }
}

impl KindAttrs for RadioAttrs {
    fn into_kind(self) -> FieldKind {
        FieldKind::Radio(self)
    }
}

/// Builder narrowed to one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct KindBuilder<A> {
    core: FieldCore,
    attrs: A,
}

pub type TextField = KindBuilder<TextAttrs>;
pub type EmailField = KindBuilder<EmailAttrs>;
pub type PasswordField = KindBuilder<PasswordAttrs>;
pub type NumberField = KindBuilder<NumberAttrs>;
pub type MoneyField = KindBuilder<MoneyAttrs>;
pub type SelectField = KindBuilder<SelectAttrs>;
pub type TextareaField = KindBuilder<TextareaAttrs>;
pub type CheckboxField = KindBuilder<CheckboxAttrs>;
pub type ToggleField = KindBuilder<ToggleAttrs>;
pub type DateField = KindBuilder<DateAttrs>;
pub type DateTimeField = KindBuilder<DateTimeAttrs>;
pub type HiddenField = KindBuilder<HiddenAttrs>;
pub type RadioField = KindBuilder<RadioAttrs>;

impl<A: KindAttrs> KindBuilder<A> {
    /// Names are not checked here; an empty name only surfaces as
    /// [`Error::MissingName`](crate::Error::MissingName) when a projection is
    /// read back through [`Field::from_value`].
    fn blank(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "field name must not be empty");
        Self {
            core: FieldCore::named(name),
            attrs: A::default(),
        }
    }

    /// Returns the kind-specific attributes.
    pub fn kind_attrs(&self) -> &A {
        &self.attrs
    }

    pub fn build(self) -> Field {
        Field::from_parts(self.core, self.attrs.into_kind())
    }
}

impl<A: KindAttrs> FieldBuilder for KindBuilder<A> {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }
}

impl<A: KindAttrs> From<KindBuilder<A>> for Field {
    fn from(builder: KindBuilder<A>) -> Self {
        builder.build()
    }
}

impl<A: KindAttrs> From<KindBuilder<A>> for Node {
    fn from(builder: KindBuilder<A>) -> Self {
        Node::Field(builder.build())
    }
}

fn collect_options<I, K, V>(options: I) -> Options
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    options
        .into_iter()
        .map(|(key, label)| (key.into(), label.into()))
        .collect()
}

// =============================================================================
// Simple kinds
// =============================================================================

impl TextField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }
}

impl EmailField {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank(name);
        builder.core.rules.push(RuleToken::parse("email"));
        builder
    }
}

impl HiddenField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }
}

impl PasswordField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    /// Offer a show/hide control.
    pub fn toggleable(mut self, toggleable: bool) -> Self {
        self.attrs.toggleable = toggleable;
        self
    }

    /// Expect a matching confirmation field.
    pub fn confirmable(mut self, confirmable: bool) -> Self {
        self.attrs.confirmable = confirmable;
        self
    }
}

// =============================================================================
// Numeric kinds
// =============================================================================

impl NumberField {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank(name);
        builder.core.rules.push(RuleToken::parse("numeric"));
        builder
    }

    pub fn step(mut self, step: impl Into<Value>) -> Self {
        let step = step.into();
        self.core.attrs.insert("step".to_string(), step.clone());
        self.attrs.step = Some(step);
        self
    }

    /// Whole numbers only: adds the `integer` rule and a step of 1.
    pub fn integer(mut self) -> Self {
        self.core.rules.push(RuleToken::parse("integer"));
        self.core.attrs.insert("step".to_string(), Value::Int(1));
        self
    }

    pub fn positive(self) -> Self {
        self.min(0)
    }
}

impl MoneyField {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank(name);
        builder.core.rules.push(RuleToken::parse("numeric"));
        builder.core.attrs.insert("step".to_string(), Value::from("0.01"));
        builder
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        self.core
            .attrs
            .insert("data-currency".to_string(), Value::from(currency.as_str()));
        self.attrs.currency = currency;
        self
    }

    /// Number of fraction digits; also sets the control's step.
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.attrs.decimals = decimals;
        self.core
            .attrs
            .insert("step".to_string(), Value::from(money_step(decimals)));
        self
    }
}

/// Smallest increment with the given number of fraction digits.
fn money_step(decimals: u32) -> String {
    match decimals {
        0 => "1".to_string(),
        n => format!("0.{}1", "0".repeat(n as usize - 1)),
    }
}

// =============================================================================
// Choice kinds
// =============================================================================

impl SelectField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    /// Replace the options.
    pub fn options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.options = collect_options(options);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.attrs.multiple = multiple;
        self
    }

    pub fn select_searchable(mut self, searchable: bool) -> Self {
        self.attrs.select_searchable = searchable;
        self
    }

    pub fn empty_option(mut self, label: impl Into<String>) -> Self {
        self.attrs.empty_option = Some(label.into());
        self
    }

    pub fn without_empty_option(mut self) -> Self {
        self.attrs.empty_option = None;
        self
    }

    /// Load options on the client from `variable`, reading each entry's
    /// value and label under the given keys.
    pub fn options_from(mut self, variable: impl Into<String>, value_key: &str, label_key: &str) -> Self {
        let variable = variable.into();
        let attrs = &mut self.core.attrs;
        attrs.insert("data-options-from".to_string(), Value::from(variable.as_str()));
        attrs.insert("data-value-key".to_string(), Value::from(value_key));
        attrs.insert("data-label-key".to_string(), Value::from(label_key));
        self.attrs.options_from = Some(variable);
        self
    }
}

impl RadioField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    pub fn options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.options = collect_options(options);
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.attrs.inline = inline;
        self
    }

    /// Lay the options out in a grid of `cols` columns.
    pub fn grid(mut self, cols: u32) -> Self {
        self.attrs.show_as_grid = true;
        self.attrs.grid_cols = cols;
        self
    }
}

impl CheckboxField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    pub fn checked_value(mut self, value: impl Into<Value>) -> Self {
        self.attrs.checked_value = value.into();
        self
    }

    pub fn unchecked_value(mut self, value: impl Into<Value>) -> Self {
        self.attrs.unchecked_value = value.into();
        self
    }

    /// Default to the checked (or unchecked) value.
    pub fn checked(mut self, checked: bool) -> Self {
        if checked {
            self.core.default = self.attrs.checked_value.clone();
            self.core
                .attrs
                .insert("checked".to_string(), Value::from("checked"));
        } else {
            self.core.default = self.attrs.unchecked_value.clone();
        }
        self
    }
}

impl ToggleField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    pub fn on_value(mut self, value: impl Into<Value>) -> Self {
        self.attrs.on_value = value.into();
        self
    }

    pub fn off_value(mut self, value: impl Into<Value>) -> Self {
        self.attrs.off_value = value.into();
        self
    }

    pub fn on_label(mut self, label: impl Into<String>) -> Self {
        self.attrs.on_label = Some(label.into());
        self
    }

    pub fn off_label(mut self, label: impl Into<String>) -> Self {
        self.attrs.off_label = Some(label.into());
        self
    }
}

impl TextareaField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.attrs.rows = rows;
        self.core.attrs.insert("rows".to_string(), Value::from(rows));
        self
    }

    pub fn cols(mut self, cols: u32) -> Self {
        self.attrs.cols = Some(cols);
        self.core.attrs.insert("cols".to_string(), Value::from(cols));
        self
    }
}

// =============================================================================
// Temporal kinds
// =============================================================================

impl DateField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    /// Display format in strftime syntax, exposed as `data-format`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        self.core
            .attrs
            .insert("data-format".to_string(), Value::from(format.as_str()));
        self.attrs.format = format;
        self
    }

    pub fn min_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.core.attrs.insert("min".to_string(), Value::from(date.as_str()));
        self.attrs.min_date = Some(date);
        self
    }

    pub fn max_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.core.attrs.insert("max".to_string(), Value::from(date.as_str()));
        self.attrs.max_date = Some(date);
        self
    }

    /// Default to the current local date.
    pub fn today(mut self) -> Self {
        self.core.default = Value::from(chrono::Local::now().format("%Y-%m-%d").to_string());
        self
    }
}

impl DateTimeField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::blank(name)
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        self.core
            .attrs
            .insert("data-format".to_string(), Value::from(format.as_str()));
        self.attrs.format = format;
        self
    }

    pub fn min_date_time(mut self, datetime: impl Into<String>) -> Self {
        let datetime = datetime.into();
        self.core.attrs.insert("min".to_string(), Value::from(datetime.as_str()));
        self.attrs.min_date_time = Some(datetime);
        self
    }

    pub fn max_date_time(mut self, datetime: impl Into<String>) -> Self {
        let datetime = datetime.into();
        self.core.attrs.insert("max".to_string(), Value::from(datetime.as_str()));
        self.attrs.max_date_time = Some(datetime);
        self
    }

    /// Default to the current local time, to the minute.
    pub fn now(mut self) -> Self {
        self.core.default = Value::from(chrono::Local::now().format("%Y-%m-%dT%H:%M").to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_money_defaults_and_step() {
        let field = Field::money("price").decimals(3).currency("EUR").build();
        let FieldKind::Money(attrs) = field.kind() else {
            panic!("expected money kind");
        };
        assert_eq!(attrs.currency, "EUR");
        assert_eq!(attrs.decimals, 3);
        assert_eq!(field.attr("step"), Some(&Value::from("0.001")));
        assert_eq!(field.attr("data-currency"), Some(&Value::from("EUR")));
        assert_eq!(field.rule_names(), ["numeric"]);
    }

    #[test]
    fn test_money_step() {
        assert_eq!(money_step(0), "1");
        assert_eq!(money_step(1), "0.1");
        assert_eq!(money_step(2), "0.01");
    }

    #[test]
    fn test_integer_number() {
        let field = Field::number("qty").integer().positive().build();
        assert_eq!(field.rule_names(), ["numeric", "integer", "min"]);
        assert_eq!(field.attr("step"), Some(&Value::Int(1)));
        assert_eq!(field.attr("min"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_checkbox_checked() {
        let field = Field::checkbox("terms").checked_value("yes").checked(true).build();
        assert_eq!(field.default_value(), &Value::from("yes"));
        assert_eq!(field.attr("checked"), Some(&Value::from("checked")));
    }

    #[test]
    fn test_select_options_from() {
        let field = Field::select("country")
            .options_from("countries", "code", "title")
            .build();
        assert_eq!(field.attr("data-value-key"), Some(&Value::from("code")));
        let FieldKind::Select(attrs) = field.kind() else {
            panic!("expected select kind");
        };
        assert_eq!(attrs.options_from.as_deref(), Some("countries"));
        assert_eq!(attrs.empty_option.as_deref(), Some("-- Select --"));
    }

    #[test]
    fn test_shared_and_kind_calls_compose() {
        let field = Field::radio("plan")
            .label("Plan")
            .grid(3)
            .required(true)
            .options([("basic", "Basic"), ("pro", "Pro")])
            .build();
        let FieldKind::Radio(attrs) = field.kind() else {
            panic!("expected radio kind");
        };
        assert!(attrs.show_as_grid);
        assert_eq!(attrs.grid_cols, 3);
        assert_eq!(attrs.options.len(), 2);
        assert_eq!(field.label(), Some("Plan"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "field name must not be empty")]
    fn test_empty_name_is_rejected_in_debug() {
        let _ = Field::text("");
    }
}
