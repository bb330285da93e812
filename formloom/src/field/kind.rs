//! Field kinds and their kind-specific attributes.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::value::Value;

/// Ordered option key → label pairs of select and radio fields.
pub type Options = IndexMap<String, String>;

/// The closed set of input kinds, each carrying its own attributes.
///
/// Serialized internally tagged under `type`, so a field projection reads
/// `{"name": "price", "type": "money", "currency": "USD", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password(PasswordAttrs),
    Number(NumberAttrs),
    Money(MoneyAttrs),
    Select(SelectAttrs),
    Textarea(TextareaAttrs),
    Checkbox(CheckboxAttrs),
    Toggle(ToggleAttrs),
    Date(DateAttrs),
    #[serde(rename = "datetime")]
    DateTime(DateTimeAttrs),
    Hidden,
    Radio(RadioAttrs),
}

/// Every kind tag, in declaration order.
pub const KIND_TAGS: [&str; 13] = [
    "text", "email", "password", "number", "money", "select", "textarea", "checkbox", "toggle",
    "date", "datetime", "hidden", "radio",
];

impl FieldKind {
    /// Returns the kind tag used in projections.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password(_) => "password",
            Self::Number(_) => "number",
            Self::Money(_) => "money",
            Self::Select(_) => "select",
            Self::Textarea(_) => "textarea",
            Self::Checkbox(_) => "checkbox",
            Self::Toggle(_) => "toggle",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Hidden => "hidden",
            Self::Radio(_) => "radio",
        }
    }

    /// Returns the HTML `type` of the control rendered for this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Money(_) => "number",
            Self::DateTime(_) => "datetime-local",
            other => other.tag(),
        }
    }

    /// Kinds rendered with an inline label or none at all.
    pub fn has_inline_label(&self) -> bool {
        matches!(
            self,
            Self::Checkbox(_) | Self::Toggle(_) | Self::Radio(_) | Self::Hidden
        )
    }

    /// Returns the options of select and radio fields.
    pub fn options(&self) -> Option<&Options> {
        match self {
            Self::Select(attrs) => Some(&attrs.options),
            Self::Radio(attrs) => Some(&attrs.options),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordAttrs {
    pub toggleable: bool,
    pub confirmable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberAttrs {
    pub step: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyAttrs {
    /// ISO 4217 code.
    pub currency: String,
    pub decimals: u32,
}

impl Default for MoneyAttrs {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectAttrs {
    pub options: Options,
    pub select_searchable: bool,
    pub multiple: bool,
    /// Client-side variable the options are loaded from.
    pub options_from: Option<String>,
    /// Label of the leading empty option; `None` renders no empty option.
    pub empty_option: Option<String>,
}

impl Default for SelectAttrs {
    fn default() -> Self {
        Self {
            options: Options::new(),
            select_searchable: false,
            multiple: false,
            options_from: None,
            empty_option: Some("-- Select --".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioAttrs {
    pub options: Options,
    pub inline: bool,
    pub show_as_grid: bool,
    pub grid_cols: u32,
}

impl Default for RadioAttrs {
    fn default() -> Self {
        Self {
            options: Options::new(),
            inline: false,
            show_as_grid: false,
            grid_cols: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextareaAttrs {
    pub rows: u32,
    pub cols: Option<u32>,
}

impl Default for TextareaAttrs {
    fn default() -> Self {
        Self { rows: 3, cols: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxAttrs {
    pub checked_value: Value,
    pub unchecked_value: Value,
}

impl Default for CheckboxAttrs {
    fn default() -> Self {
        Self {
            checked_value: Value::from("1"),
            unchecked_value: Value::from("0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleAttrs {
    pub on_value: Value,
    pub off_value: Value,
    pub on_label: Option<String>,
    pub off_label: Option<String>,
}

impl Default for ToggleAttrs {
    fn default() -> Self {
        Self {
            on_value: Value::Bool(true),
            off_value: Value::Bool(false),
            on_label: None,
            off_label: None,
        }
    }
}

/// Date attributes. `format` uses chrono's strftime syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateAttrs {
    pub format: String,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

impl Default for DateAttrs {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%d".to_string(),
            min_date: None,
            max_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeAttrs {
    pub format: String,
    pub min_date_time: Option<String>,
    pub max_date_time: Option<String>,
}

impl Default for DateTimeAttrs {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%dT%H:%M".to_string(),
            min_date_time: None,
            max_date_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_money_serializes_with_tag() {
        let kind = FieldKind::Money(MoneyAttrs::default());
        assert_eq!(
            serde_json::to_value(&kind).unwrap(),
            serde_json::json!({"type": "money", "currency": "USD", "decimals": 2})
        );
    }

    #[test]
    fn test_unit_kind_ignores_extra_keys() {
        let kind: FieldKind =
            serde_json::from_value(serde_json::json!({"type": "hidden", "name": "id"})).unwrap();
        assert_eq!(kind, FieldKind::Hidden);
    }

    #[test]
    fn test_input_type() {
        assert_eq!(FieldKind::DateTime(DateTimeAttrs::default()).input_type(), "datetime-local");
        assert_eq!(FieldKind::Money(MoneyAttrs::default()).input_type(), "number");
        assert_eq!(FieldKind::Email.input_type(), "email");
    }
}
