//! Reusable node lists and their projections.
//!
//! A [`Schema`] names a node list once so a form, a table and a validator
//! can all be derived from it. The projections are also available as free
//! functions over any node slice. Every projection walks into layouts and
//! looks at leaf fields only.

use indexmap::IndexMap;

use crate::field::Field;
use crate::form::Form;
use crate::node::Node;
use crate::node::leaf_fields;
use crate::validation::RuleToken;
use crate::value::DataBag;

/// Rule tokens per field name.
pub type RuleMap = IndexMap<String, Vec<RuleToken>>;

/// A static node-list factory.
///
/// # Example
///
/// ```
/// use formloom::field::{Field, FieldBuilder};
/// use formloom::schema::Schema;
/// use formloom::Node;
///
/// struct Signup;
///
/// impl Schema for Signup {
///     fn fields() -> Vec<Node> {
///         vec![
///             Field::email("email").label("Email").required(true).into(),
///             Field::password("password").min_length(8).into(),
///         ]
///     }
/// }
///
/// assert_eq!(Signup::labels()["email"], "Email");
/// assert_eq!(Signup::rules()["password"].len(), 1);
/// ```
pub trait Schema {
    /// The nodes of this schema, freshly built.
    fn fields() -> Vec<Node>;

    /// A form bound to this schema's nodes.
    fn form() -> Form
    where
        Self: Sized,
    {
        Form::from_schema::<Self>()
    }

    /// Leaf fields flagged for table display.
    fn table_fields() -> Vec<Field>
    where
        Self: Sized,
    {
        table_fields(&Self::fields()).into_iter().cloned().collect()
    }

    fn rules() -> RuleMap
    where
        Self: Sized,
    {
        rules(&Self::fields())
    }

    fn labels() -> IndexMap<String, String>
    where
        Self: Sized,
    {
        labels(&Self::fields())
    }

    fn defaults() -> DataBag
    where
        Self: Sized,
    {
        defaults(&Self::fields())
    }
}

/// Leaf fields flagged with `show_in_table`, in tree order.
pub fn table_fields(nodes: &[Node]) -> Vec<&Field> {
    leaf_fields(nodes)
        .into_iter()
        .filter(|field| field.is_visible_in_table())
        .collect()
}

/// Rule tokens of every leaf field that declares at least one.
pub fn rules(nodes: &[Node]) -> RuleMap {
    leaf_fields(nodes)
        .into_iter()
        .filter(|field| !field.rules().is_empty())
        .map(|field| (field.name().to_string(), field.rules().to_vec()))
        .collect()
}

/// Labels of every leaf field that has a non-empty one.
pub fn labels(nodes: &[Node]) -> IndexMap<String, String> {
    leaf_fields(nodes)
        .into_iter()
        .filter_map(|field| {
            field
                .label()
                .filter(|label| !label.is_empty())
                .map(|label| (field.name().to_string(), label.to_string()))
        })
        .collect()
}

/// Defaults of every leaf field whose default is not null.
pub fn defaults(nodes: &[Node]) -> DataBag {
    leaf_fields(nodes)
        .into_iter()
        .filter(|field| !field.default_value().is_null())
        .map(|field| (field.name().to_string(), field.default_value().clone()))
        .collect()
}
