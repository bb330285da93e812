//! Markup primitives.

use std::fmt;

use indexmap::IndexMap;

use crate::value::Value;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Quote text as a single-quoted JavaScript string literal.
pub fn js_string(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Ordered element attributes. Setting a name twice keeps its first position
/// with the last value; values are escaped when written out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: IndexMap<String, Option<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name="value"`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), Some(value.into()));
        self
    }

    /// Set a bare boolean attribute such as `required`.
    pub fn flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Set a bare attribute when `on`.
    pub fn flag_if(&mut self, name: impl Into<String>, on: bool) -> &mut Self {
        if on {
            self.flag(name);
        }
        self
    }

    /// Set from a dynamic value: `true` is a bare flag, `false` and null
    /// drop the attribute, anything else is written as text.
    pub fn set_value(&mut self, name: impl Into<String>, value: &Value) -> &mut Self {
        let name = name.into();
        match value {
            Value::Bool(true) => {
                self.flag(name);
            }
            Value::Bool(false) | Value::Null => {
                self.entries.shift_remove(&name);
            }
            other => {
                self.set(name, other.to_text());
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match value {
                Some(value) => write!(f, "{name}=\"{}\"", escape_html(value))?,
                None => f.write_str(name)?,
            }
        }
        Ok(())
    }
}

/// Join non-empty class fragments with single spaces.
pub fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    classes
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_attributes_keep_first_position() {
        let mut attrs = Attributes::new();
        attrs.set("type", "text").set("name", "q").flag("required");
        attrs.set("type", "search");
        attrs.set_value("disabled", &Value::Bool(false));
        attrs.set_value("data-x", &Value::from("a\"b"));
        assert_eq!(attrs.to_string(), r#"type="search" name="q" required data-x="a&quot;b""#);
    }

    #[test]
    fn test_set_value_false_removes() {
        let mut attrs = Attributes::new();
        attrs.flag("autofocus");
        attrs.set_value("autofocus", &Value::Bool(false));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_join_classes() {
        assert_eq!(join_classes(["input w-full", "", " pl-8 "]), "input w-full pl-8");
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("it's"), r"'it\'s'");
    }
}
