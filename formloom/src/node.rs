//! Node type for the form tree.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::field::Field;
use crate::layout::LAYOUT_TAGS;
use crate::layout::Layout;

/// A node in the form tree: a leaf field or a layout container.
///
/// Containers only hold nodes built before them, so a tree never has cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Field(Field),
    Layout(Layout),
}

impl Node {
    /// Returns the field name, or `None` for layouts.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(field) => Some(field.name()),
            Self::Layout(_) => None,
        }
    }

    /// Returns the field or layout tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Field(field) => field.type_name(),
            Self::Layout(layout) => layout.type_name(),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Layout(_) => None,
        }
    }

    pub fn as_layout(&self) -> Option<&Layout> {
        match self {
            Self::Layout(layout) => Some(layout),
            Self::Field(_) => None,
        }
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Self::Layout(_))
    }

    /// The leaf fields of this node: itself, or everything below a layout.
    pub fn fields(&self) -> Vec<&Field> {
        match self {
            Self::Field(field) => vec![field],
            Self::Layout(layout) => layout.fields(),
        }
    }

    /// Structural projection of the node and all of its children.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a node tree from its projection.
    ///
    /// Layout tags produce layouts; anything else is read as a field, with
    /// unknown field types falling back to `text`.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let is_layout = match &value {
            serde_json::Value::Object(map) => map
                .get("type")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|tag| LAYOUT_TAGS.contains(&tag)),
            other => {
                return Err(Error::invalid_projection(format!(
                    "expected an object, got {other}"
                )));
            }
        };

        if is_layout {
            Ok(Node::Layout(serde_json::from_value(value)?))
        } else {
            Field::from_value(value).map(Node::Field)
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Node::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Node::Field(field)
    }
}

/// Every leaf field of a node list, depth first.
pub fn leaf_fields(nodes: &[Node]) -> Vec<&Field> {
    nodes.iter().flat_map(Node::fields).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldBuilder;
    use crate::field::FieldKind;
    use crate::layout::Section;
    use crate::layout::Tab;
    use crate::layout::Tabs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_keeps_kind_attributes() {
        let node: Node = Field::money("price")
            .label("Price")
            .currency("RWF")
            .decimals(0)
            .required(true)
            .into();

        let projection = node.to_value().unwrap();
        assert_eq!(projection["type"], "money");
        assert_eq!(projection["currency"], "RWF");
        assert_eq!(projection["decimals"], 0);
        assert_eq!(projection["rules"], serde_json::json!(["numeric", "required"]));

        let rebuilt = Node::from_value(projection).unwrap();
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn test_round_trip_nested_layouts() {
        let node: Node = Tabs::make()
            .tab(
                "main",
                Tab::new(
                    "Main",
                    [Node::from(Section::make("Who").children([Field::text("name")]))],
                )
                .icon("fa-user"),
            )
            .into();

        let rebuilt = Node::from_value(node.to_value().unwrap()).unwrap();
        assert_eq!(rebuilt, node);
        assert_eq!(rebuilt.fields()[0].name(), "name");
    }

    #[test]
    fn test_unknown_field_type_reads_as_text() {
        let node = Node::from_value(serde_json::json!({
            "type": "colour",
            "name": "accent",
            "label": "Accent"
        }))
        .unwrap();
        let field = node.as_field().unwrap();
        assert_eq!(field.kind(), &FieldKind::Text);
        assert_eq!(field.label(), Some("Accent"));
    }

    #[test]
    fn test_serde_matches_projection() {
        let node: Node = Field::select("status")
            .options([("draft", "Draft"), ("live", "Live")])
            .into();
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
