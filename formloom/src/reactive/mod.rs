//! Client-side reactive state for forms.
//!
//! [`ReactiveAdapter`] derives the initial state of an Alpine.js component
//! from a [`Form`]: field defaults, an error slot per field, visibility
//! predicates for conditional fields, caller handlers and watchers.
//!
//! # Example
//!
//! ```
//! use formloom::field::{Field, FieldBuilder, Operator};
//! use formloom::reactive::ReactiveAdapter;
//! use formloom::Form;
//!
//! let form = Form::make().schema([
//!     Field::select("type").options([("personal", "Personal"), ("business", "Business")]).build(),
//!     Field::text("company").show_when("type", Operator::StrictEq, "business").build(),
//! ]);
//!
//! let state = ReactiveAdapter::make(&form).state();
//! assert_eq!(
//!     state.visibility["show_company"].source,
//!     r#"function() { return this.form.type === "business"; }"#
//! );
//! ```

mod state;

pub use state::Expression;
pub use state::ReactiveState;
pub use state::StateEntry;

use indexmap::IndexMap;

use crate::error::Result;
use crate::field::Operator;
use crate::form::Form;
use crate::render::escape_html;
use crate::render::js_string;
use crate::schema;
use crate::value::Value;

/// Builds client state for one form.
#[derive(Debug, Clone)]
pub struct ReactiveAdapter<'a> {
    form: &'a Form,
    handlers: IndexMap<String, String>,
    watchers: IndexMap<String, String>,
    component: String,
}

impl<'a> ReactiveAdapter<'a> {
    pub fn make(form: &'a Form) -> Self {
        Self {
            form,
            handlers: IndexMap::new(),
            watchers: IndexMap::new(),
            component: "formloom".to_string(),
        }
    }

    /// Add a method; `code` is emitted as is, e.g. `function() { ... }`.
    pub fn handler(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.handlers.insert(name.into(), code.into());
        self
    }

    /// Run `callback` whenever `form.<field>` changes.
    pub fn watch(mut self, field: impl Into<String>, callback: impl Into<String>) -> Self {
        self.watchers.insert(field.into(), callback.into());
        self
    }

    /// Name of the component function written by [`to_script`](Self::to_script).
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component = name.into();
        self
    }

    pub fn state(&self) -> ReactiveState {
        let fields = self.form.fields();

        let form = fields
            .iter()
            .map(|field| (field.name().to_string(), field.default_value().clone()))
            .collect();
        let errors = fields
            .iter()
            .map(|field| (field.name().to_string(), Value::Null))
            .collect();
        let visibility = fields
            .iter()
            .filter_map(|field| {
                field.show_when().map(|condition| {
                    let source = format!(
                        "function() {{ return {}; }}",
                        condition.expression("this.form")
                    );
                    (format!("show_{}", field.name()), Expression::new(source))
                })
            })
            .collect();
        let handlers = self
            .handlers
            .iter()
            .map(|(name, code)| (name.clone(), Expression::new(code.as_str())))
            .collect();

        ReactiveState {
            form,
            errors,
            loading: false,
            submitted: false,
            visibility,
            handlers,
            init: self.init(),
        }
    }

    fn init(&self) -> Option<Expression> {
        if self.watchers.is_empty() {
            return None;
        }
        let watches: Vec<String> = self
            .watchers
            .iter()
            .map(|(field, callback)| {
                format!("$watch({}, {callback});", js_string(&format!("form.{field}")))
            })
            .collect();
        Some(Expression::new(format!("function() {{ {} }}", watches.join(" "))))
    }

    /// The state as a JavaScript object literal.
    pub fn to_x_data(&self) -> Result<String> {
        self.state().to_x_data()
    }

    /// `const validationRules = {...};` with the declared rule strings.
    pub fn to_validation(&self) -> Result<String> {
        let rules: IndexMap<String, Vec<String>> = schema::rules(self.form.nodes())
            .into_iter()
            .map(|(name, tokens)| (name, tokens.iter().map(ToString::to_string).collect()))
            .collect();
        Ok(format!("const validationRules = {};", state::pretty_json(&rules)?))
    }

    /// A `<script>` block defining the validation rules and the component.
    pub fn to_script(&self) -> Result<String> {
        let validation = self.to_validation()?;
        let x_data = self.to_x_data()?.replace('\n', "\n    ");
        log::debug!("[reactive] script for component '{}'", self.component);
        Ok(format!(
            "<script>\n{validation}\n\nfunction {}() {{\n    return {x_data};\n}}\n</script>",
            self.component
        ))
    }
}

/// `x-model="form.<field>"`.
pub fn x_model(field: &str) -> String {
    format!(r#"x-model="form.{}""#, escape_html(field))
}

/// `x-show` bound to a comparison on `form.<field>`. Strings are quoted
/// JavaScript literals, anything else is JSON.
pub fn x_show(field: &str, operator: Operator, value: impl Into<Value>) -> String {
    let literal = match value.into() {
        Value::String(text) => js_string(&text),
        other => serde_json::Value::from(other).to_string(),
    };
    let expression = format!("form.{field} {operator} {literal}");
    format!(r#"x-show="{}""#, escape_html(&expression))
}

/// Shows and fills an element with the field's client error.
pub fn x_error(field: &str) -> String {
    let field = escape_html(field);
    format!(r#"x-show="errors.{field}" x-text="errors.{field}""#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::field::FieldBuilder;
    use crate::layout::Section;
    use crate::node::Node;
    use pretty_assertions::assert_eq;

    fn form() -> Form {
        Form::make().schema([
            Node::from(Field::text("name").required(true).default("Ada")),
            Section::make("Business")
                .children([Node::from(
                    Field::text("company").hide_when("kind", Operator::Eq, "personal"),
                )])
                .into(),
        ])
    }

    #[test]
    fn test_state_covers_nested_fields() {
        let form = form();
        let state = ReactiveAdapter::make(&form).state();
        assert_eq!(state.form.keys().collect::<Vec<_>>(), ["name", "company"]);
        assert_eq!(state.form["name"], Value::from("Ada"));
        assert_eq!(state.form["company"], Value::Null);
        assert!(state.errors.values().all(Value::is_null));
        assert_eq!(
            state.visibility["show_company"].source,
            r#"function() { return !(this.form.kind == "personal"); }"#
        );
        assert!(state.init.is_none());
    }

    #[test]
    fn test_watchers_build_init() {
        let form = form();
        let state = ReactiveAdapter::make(&form)
            .watch("name", "(value) => console.log(value)")
            .handler("save", "function() { this.loading = true; }")
            .state();
        assert_eq!(
            state.init.map(|init| init.source),
            Some("function() { $watch('form.name', (value) => console.log(value)); }".to_string())
        );
        assert_eq!(state.handlers["save"].source, "function() { this.loading = true; }");
    }

    #[test]
    fn test_validation_script() {
        let form = form();
        assert_eq!(
            ReactiveAdapter::make(&form).to_validation().unwrap(),
            "const validationRules = {\n    \"name\": [\n        \"required\"\n    ]\n};"
        );
    }

    #[test]
    fn test_script_wraps_component() {
        let form = form();
        let script = ReactiveAdapter::make(&form).component("productForm").to_script().unwrap();
        assert!(script.starts_with("<script>\nconst validationRules = "));
        assert!(script.contains("function productForm() {\n    return {\n        \"form\": {"));
        assert!(script.ends_with("}\n</script>"));
    }

    #[test]
    fn test_binding_helpers() {
        assert_eq!(x_model("email"), r#"x-model="form.email""#);
        assert_eq!(
            x_show("type", Operator::StrictEq, "business"),
            r#"x-show="form.type === &#039;business&#039;""#
        );
        assert_eq!(x_show("age", Operator::Ge, 18), r#"x-show="form.age &gt;= 18""#);
        assert_eq!(x_error("email"), r#"x-show="errors.email" x-text="errors.email""#);
    }
}
