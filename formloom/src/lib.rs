//! Declarative forms: typed field and layout trees, rendered to markup,
//! projected to client-side state and validated against declared rules.
//!
//! ```
//! use formloom::prelude::*;
//!
//! let form = Form::make().schema([
//!     Node::from(Field::text("name").label("Name").required(true)),
//!     Row::make([
//!         Node::from(Field::money("price").currency("RWF")),
//!         Node::from(Field::number("stock").integer()),
//!     ])
//!     .into(),
//! ]);
//!
//! let validator = form.validator([("name", Value::from("")), ("price", Value::from(1500))]);
//! assert_eq!(validator.first_error("name"), Some("This field is required."));
//!
//! let html = form.errors(validator.first_errors()).render();
//! assert!(html.contains("FRw"));
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod layout;
pub mod node;
pub mod reactive;
pub mod render;
pub mod schema;
pub mod validation;
pub mod value;

pub use error::Error;
pub use error::Result;
pub use field::Field;
pub use form::Form;
pub use node::Node;
pub use value::DataBag;
pub use value::Value;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{Field, FieldBuilder, Operator};
    pub use crate::form::Form;
    pub use crate::layout::{Column, Grid, Html, Layout, Row, Section, Tab, Tabs};
    pub use crate::node::Node;
    pub use crate::reactive::ReactiveAdapter;
    pub use crate::render::{Renderer, RendererRef, TailwindConfig, TailwindRenderer};
    pub use crate::schema::Schema;
    pub use crate::validation::{Rule, RuleEngine, Validator};
    pub use crate::value::{DataBag, Value};
}
