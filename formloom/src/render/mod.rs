//! Rendering of node trees to markup.
//!
//! A [`Renderer`] turns nodes into markup. Fields are rendered by
//! [`Renderer::render_field`]; layouts recurse into their children with the
//! same ambient [`RenderContext`]. A renderer that does not specialise
//! layouts gets a plain `<div>` wrapper for free.
//!
//! # Example
//!
//! ```
//! use formloom::field::{Field, FieldBuilder};
//! use formloom::render::{FieldContext, Renderer};
//!
//! struct Plain;
//!
//! impl Renderer for Plain {
//!     fn render_field(&self, field: &formloom::Field, ctx: FieldContext<'_>) -> String {
//!         format!("<input name=\"{}\" value=\"{}\">", field.name(), ctx.value)
//!     }
//! }
//!
//! let field = Field::text("city").default("Kigali").build();
//! assert_eq!(
//!     Plain.render_field(&field, FieldContext::of(&field)),
//!     r#"<input name="city" value="Kigali">"#
//! );
//! ```

mod context;
mod currency;
mod html;
mod tailwind;

pub use context::FieldContext;
pub use context::FieldErrors;
pub use context::RenderContext;
pub use currency::currency_symbol;
pub use html::Attributes;
pub use html::escape_html;
pub use html::join_classes;
pub use html::js_string;
pub use tailwind::TailwindConfig;
pub use tailwind::TailwindRenderer;

use std::sync::Arc;

use crate::Form;
use crate::field::Field;
use crate::layout::Layout;
use crate::node::Node;

/// Turns nodes into markup.
///
/// Only [`render_field`](Renderer::render_field) is required. Field
/// rendering is expected to dispatch on [`Field::kind`] with a closed `match`.
pub trait Renderer: Send + Sync {
    /// Render one field with its value and error.
    fn render_field(&self, field: &Field, ctx: FieldContext<'_>) -> String;

    /// Render a layout and, recursively, its children.
    ///
    /// The default wraps children in a plain `<div>`; raw markup is emitted
    /// verbatim.
    fn render_layout(&self, layout: &Layout, ctx: &RenderContext<'_>) -> String {
        match layout {
            Layout::Html(html) => html.content.clone(),
            other => {
                let mut out = String::from("<div>");
                for child in other.children() {
                    out.push_str(&self.render_node(child, ctx));
                }
                out.push_str("</div>");
                out
            }
        }
    }

    /// Dispatch on the node variant.
    fn render_node(&self, node: &Node, ctx: &RenderContext<'_>) -> String {
        match node {
            Node::Field(field) => self.render_field(field, ctx.for_field(field)),
            Node::Layout(layout) => self.render_layout(layout, ctx),
        }
    }

    /// Render a node sequence in order.
    fn render_nodes(&self, nodes: &[Node], ctx: &RenderContext<'_>) -> String {
        nodes.iter().map(|node| self.render_node(node, ctx)).collect()
    }

    /// Render every node of a form, without the `<form>` envelope.
    fn render_form(&self, form: &Form, ctx: &RenderContext<'_>) -> String {
        self.render_nodes(form.nodes(), ctx)
    }
}

/// A shared reference to a renderer.
pub type RendererRef = Arc<dyn Renderer>;

/// The renderer used when a form has none bound.
pub fn default_renderer() -> RendererRef {
    Arc::new(TailwindRenderer::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldBuilder;
    use crate::layout::Html;
    use crate::layout::Row;
    use crate::layout::Section;
    use crate::value::DataBag;
    use crate::value::Value;

    struct Bare;

    impl Renderer for Bare {
        fn render_field(&self, field: &Field, ctx: FieldContext<'_>) -> String {
            let error = ctx.error.map(|e| format!("!{e}")).unwrap_or_default();
            format!("[{}={}{error}]", field.name(), ctx.value)
        }
    }

    #[test]
    fn test_default_layout_wrapper_recurses() {
        let nodes = vec![
            Node::from(Section::make("Who").children([
                Node::from(Row::make([Field::text("first"), Field::text("last")])),
                Html::make("<hr>").into(),
            ])),
            Field::number("age").default(30).into(),
        ];

        let mut values = DataBag::new();
        values.insert("first".into(), Value::from("Ada"));
        let mut errors = FieldErrors::new();
        errors.insert("last".into(), "required".into());

        let html = Bare.render_nodes(&nodes, &RenderContext::new(&values, &errors));
        assert_eq!(html, "<div><div>[first=Ada][last=!required]</div><hr></div>[age=30]");
    }
}
