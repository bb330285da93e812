//! Forms: a node tree bound to values, errors and a renderer.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::field::Field;
use crate::node::Node;
use crate::node::leaf_fields;
use crate::render::Attributes;
use crate::render::FieldErrors;
use crate::render::RenderContext;
use crate::render::RendererRef;
use crate::render::default_renderer;
use crate::schema;
use crate::schema::Schema;
use crate::validation::Validator;
use crate::value::DataBag;
use crate::value::Value;

/// A form definition with its current state.
///
/// Rendering is a pure function of the nodes, values, errors and renderer,
/// so a form can be rendered any number of times.
///
/// # Example
///
/// ```
/// use formloom::field::{Field, FieldBuilder};
/// use formloom::Form;
///
/// let form = Form::make()
///     .action("/products")
///     .schema([Field::text("name").label("Name")])
///     .values([("name", "Lamp")]);
///
/// let html = form.render_with_form();
/// assert!(html.starts_with(r#"<form action="/products" method="POST">"#));
/// assert!(html.contains(r#"value="Lamp""#));
/// ```
#[derive(Clone)]
pub struct Form {
    nodes: Vec<Node>,
    values: DataBag,
    errors: FieldErrors,
    renderer: Option<RendererRef>,
    action: String,
    method: String,
    attrs: IndexMap<String, String>,
    model: Option<DataBag>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            values: DataBag::new(),
            errors: FieldErrors::new(),
            renderer: None,
            action: String::new(),
            method: "POST".to_string(),
            attrs: IndexMap::new(),
            model: None,
        }
    }
}

impl Form {
    pub fn make() -> Self {
        Self::default()
    }

    /// A form over the nodes of a schema.
    pub fn from_schema<S: Schema>() -> Self {
        Self {
            nodes: S::fields(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the node list. A model bound earlier populates the new fields.
    pub fn schema<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.nodes = nodes.into_iter().map(Into::into).collect();
        self.populate_from_model();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the method, upper-cased.
    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_uppercase();
        self
    }

    /// Bind a model and copy its non-null values for every known field.
    ///
    /// The model must serialize to an object.
    pub fn model(mut self, model: &impl Serialize) -> Result<Self> {
        let value = Value::from(serde_json::to_value(model)?);
        let type_name = value.type_name();
        let Value::Map(map) = value else {
            return Err(Error::InvalidModel(type_name));
        };
        self.model = Some(map);
        self.populate_from_model();
        Ok(self)
    }

    /// Merge values in; later keys win and earlier keys are kept.
    pub fn values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in values {
            self.values.insert(name.into(), value.into());
        }
        self
    }

    /// Replace all errors.
    pub fn errors<I, K, V>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.errors = errors
            .into_iter()
            .map(|(name, error)| (name.into(), error.into()))
            .collect();
        self
    }

    /// Merge extra `<form>` attributes.
    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.attrs.insert(name.into(), value.into());
        }
        self
    }

    pub fn renderer(mut self, renderer: RendererRef) -> Self {
        self.renderer = Some(renderer);
        self
    }

    fn populate_from_model(&mut self) {
        let Some(model) = &self.model else {
            return;
        };
        for field in leaf_fields(&self.nodes) {
            if let Some(value) = model.get(field.name()).filter(|value| !value.is_null()) {
                self.values.insert(field.name().to_string(), value.clone());
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The bound renderer, or the standard one.
    pub fn current_renderer(&self) -> RendererRef {
        self.renderer.clone().unwrap_or_else(default_renderer)
    }

    /// Render every node, without the `<form>` envelope.
    pub fn render(&self) -> String {
        let ctx = RenderContext::new(&self.values, &self.errors);
        log::debug!("[form] rendering {} node(s)", self.nodes.len());
        self.current_renderer().render_form(self, &ctx)
    }

    /// Render inside a `<form>` element carrying the action, method and
    /// extra attributes.
    pub fn render_with_form(&self) -> String {
        let mut attrs = Attributes::new();
        attrs.set("action", self.action.as_str());
        attrs.set("method", self.method.as_str());
        for (name, value) in &self.attrs {
            attrs.set(name.as_str(), value.as_str());
        }
        format!("<form {attrs}>{}</form>", self.render())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Find a leaf field by name anywhere in the tree.
    pub fn field(&self, name: &str) -> Option<&Field> {
        leaf_fields(&self.nodes)
            .into_iter()
            .find(|field| field.name() == name)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every leaf field, depth first.
    pub fn fields(&self) -> Vec<&Field> {
        leaf_fields(&self.nodes)
    }

    pub fn table_fields(&self) -> Vec<&Field> {
        schema::table_fields(&self.nodes)
    }

    pub fn get_action(&self) -> &str {
        &self.action
    }

    pub fn get_method(&self) -> &str {
        &self.method
    }

    pub fn get_values(&self) -> &DataBag {
        &self.values
    }

    pub fn get_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Projection: action, method, node projections, values and errors.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        let fields = self
            .nodes
            .iter()
            .map(Node::to_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::json!({
            "action": self.action,
            "method": self.method,
            "fields": fields,
            "values": serde_json::to_value(&self.values)?,
            "errors": self.errors,
        }))
    }

    /// A validator over `data` with the rules declared by this form's fields.
    pub fn validator<I, K, V>(&self, data: I) -> Validator
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Validator::new(data).rules(schema::rules(&self.nodes))
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("nodes", &self.nodes.len())
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("renderer", &self.renderer.as_ref().map(|_| "custom"))
            .field("action", &self.action)
            .field("method", &self.method)
            .field("attrs", &self.attrs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldBuilder;
    use crate::layout::Section;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    struct Product {
        name: String,
        price: f64,
        sku: Option<String>,
        internal: bool,
    }

    fn nodes() -> Vec<Node> {
        vec![
            Section::make("Basics")
                .children([
                    Node::from(Field::text("name").required(true)),
                    Node::from(Field::money("price")),
                ])
                .into(),
            Field::text("sku").default("N/A").into(),
        ]
    }

    #[test]
    fn test_values_merge() {
        let form = Form::make()
            .values([("a", 1)])
            .values([("b", 2)])
            .values([("a", 3)]);
        let values: Vec<(&str, &Value)> = form
            .get_values()
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        assert_eq!(values, [("a", &Value::Int(3)), ("b", &Value::Int(2))]);
    }

    #[test]
    fn test_errors_replace() {
        let form = Form::make()
            .errors([("a", "bad")])
            .errors([("b", "worse")]);
        assert_eq!(form.get_errors().len(), 1);
        assert_eq!(form.get_errors()["b"], "worse");
    }

    #[test]
    fn test_model_populates_nested_fields() {
        let product = Product {
            name: "Lamp".into(),
            price: 12.5,
            sku: None,
            internal: true,
        };

        // Model before schema.
        let form = Form::make().model(&product).unwrap().schema(nodes());
        assert_eq!(form.get_values().get("name"), Some(&Value::from("Lamp")));
        assert_eq!(form.get_values().get("price"), Some(&Value::Float(12.5)));
        assert!(!form.get_values().contains_key("sku"));
        assert!(!form.get_values().contains_key("internal"));

        // Model after schema.
        let form = Form::make().schema(nodes()).model(&product).unwrap();
        assert_eq!(form.get_values().len(), 2);
    }

    #[test]
    fn test_model_must_be_object() {
        let err = Form::make().model(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidModel("list")));
    }

    #[test]
    fn test_method_is_uppercased() {
        let form = Form::make().method("patch").attrs([("id", "edit")]);
        assert_eq!(form.get_method(), "PATCH");
        assert_eq!(
            form.render_with_form(),
            r#"<form action="" method="PATCH" id="edit"></form>"#
        );
    }

    #[test]
    fn test_field_lookup_is_transitive() {
        let form = Form::make().schema(nodes());
        assert!(form.field("price").is_some());
        assert!(form.field("missing").is_none());
        assert_eq!(form.fields().len(), 3);
    }

    #[test]
    fn test_validator_uses_declared_rules() {
        let form = Form::make().schema(nodes());
        let validator = form.validator([("name", ""), ("price", "abc")]);
        assert!(validator.fails());
        assert_eq!(validator.errors().keys().collect::<Vec<_>>(), ["name", "price"]);
    }
}
