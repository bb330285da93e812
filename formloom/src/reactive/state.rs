//! The client-side state descriptor.

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::Result;
use crate::value::DataBag;
use crate::value::Value;

/// Executable client code, kept apart from plain data.
///
/// Serializes as `{"kind": "expression", "source": "..."}`; the object
/// literal written by [`ReactiveState::to_x_data`] emits `source` bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "expression")]
pub struct Expression {
    pub source: String,
}

impl Expression {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// One entry of a client component.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEntry {
    Data(Value),
    Expression(Expression),
}

impl Serialize for StateEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Data(value) => value.serialize(serializer),
            Self::Expression(expression) => expression.serialize(serializer),
        }
    }
}

/// Initial state of a client-side form component.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactiveState {
    /// Field name → default value, for every leaf field.
    pub form: DataBag,
    /// Field name → `null`, for every leaf field.
    pub errors: DataBag,
    pub loading: bool,
    pub submitted: bool,
    /// `show_<name>` → visibility predicate.
    pub visibility: IndexMap<String, Expression>,
    /// Caller-supplied methods.
    pub handlers: IndexMap<String, Expression>,
    /// Registers watchers; absent when nothing is watched.
    pub init: Option<Expression>,
}

impl ReactiveState {
    /// Every entry in output order: data first, then visibility predicates,
    /// handlers and `init`. Later keys replace earlier ones in place.
    pub fn entries(&self) -> IndexMap<String, StateEntry> {
        let mut entries = IndexMap::new();
        entries.insert("form".to_string(), StateEntry::Data(Value::Map(self.form.clone())));
        entries.insert("errors".to_string(), StateEntry::Data(Value::Map(self.errors.clone())));
        entries.insert("loading".to_string(), StateEntry::Data(Value::Bool(self.loading)));
        entries.insert("submitted".to_string(), StateEntry::Data(Value::Bool(self.submitted)));
        for (name, expression) in self.visibility.iter().chain(&self.handlers) {
            entries.insert(name.clone(), StateEntry::Expression(expression.clone()));
        }
        if let Some(init) = &self.init {
            entries.insert("init".to_string(), StateEntry::Expression(init.clone()));
        }
        entries
    }

    /// Structured projection with expressions as tagged objects.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// JavaScript object literal: data as JSON, expressions verbatim.
    pub fn to_x_data(&self) -> Result<String> {
        let entries = self.entries();
        let mut out = String::from("{");
        for (i, (name, entry)) in entries.iter().enumerate() {
            let rendered = match entry {
                StateEntry::Data(value) => indent(&pretty_json(value)?),
                StateEntry::Expression(expression) => expression.source.clone(),
            };
            let separator = if i + 1 < entries.len() { "," } else { "" };
            let key = serde_json::to_string(name)?;
            out.push_str(&format!("\n    {key}: {rendered}{separator}"));
        }
        out.push_str("\n}");
        Ok(out)
    }
}

impl Serialize for ReactiveState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, entry) in &entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

/// JSON with four-space indentation.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n    ")
}
