//! Ambient value and error lookup threaded through a render walk.

use indexmap::IndexMap;

use crate::field::Field;
use crate::value::DataBag;
use crate::value::Value;

/// One error message per field name.
pub type FieldErrors = IndexMap<String, String>;

/// Values and errors for a whole tree, looked up by field name as the walk
/// reaches each leaf.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub values: &'a DataBag,
    pub errors: &'a FieldErrors,
}

impl<'a> RenderContext<'a> {
    pub fn new(values: &'a DataBag, errors: &'a FieldErrors) -> Self {
        Self { values, errors }
    }

    /// Context of a single field: the bound value, or the field's default
    /// when nothing (or null) is bound, plus its error.
    pub fn for_field<'f>(&self, field: &'f Field) -> FieldContext<'f>
    where
        'a: 'f,
    {
        let bound: Option<&'f Value> = self.values.get(field.name());
        let value = bound
            .filter(|value| !value.is_null())
            .unwrap_or_else(|| field.default_value());
        let error = self.errors.get(field.name()).map(String::as_str);
        FieldContext { value, error }
    }
}

/// The value and error a single field is rendered with.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub value: &'a Value,
    pub error: Option<&'a str>,
}

impl<'a> FieldContext<'a> {
    pub fn new(value: &'a Value, error: Option<&'a str>) -> Self {
        Self { value, error }
    }

    /// The field's default value and no error.
    pub fn of(field: &'a Field) -> Self {
        Self {
            value: field.default_value(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldBuilder;

    #[test]
    fn test_bound_value_wins_over_default() {
        let field = Field::text("city").default("Kigali").build();
        let mut values = DataBag::new();
        let errors = FieldErrors::new();

        let ctx = RenderContext::new(&values, &errors);
        assert_eq!(ctx.for_field(&field).value, &Value::from("Kigali"));

        values.insert("city".into(), Value::Null);
        let ctx = RenderContext::new(&values, &errors);
        assert_eq!(ctx.for_field(&field).value, &Value::from("Kigali"));

        values.insert("city".into(), Value::from("Nairobi"));
        let ctx = RenderContext::new(&values, &errors);
        assert_eq!(ctx.for_field(&field).value, &Value::from("Nairobi"));
    }
}
