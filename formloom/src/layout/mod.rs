//! Layout containers.
//!
//! Layouts arrange child nodes (fields or further layouts) without carrying
//! values of their own. Every layout projects to `{"type": <tag>, ...}` with
//! its children under `fields`.

mod containers;
mod tabs;

pub use containers::Column;
pub use containers::Grid;
pub use containers::Html;
pub use containers::Row;
pub use containers::Section;
pub use tabs::Tab;
pub use tabs::Tabs;

use serde::Deserialize;
use serde::Serialize;

use crate::field::Field;
use crate::node::Node;

/// Every layout tag.
pub const LAYOUT_TAGS: [&str; 6] = ["row", "column", "grid", "section", "tabs", "html"];

/// A container node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layout {
    Row(Row),
    Column(Column),
    Grid(Grid),
    Section(Section),
    Tabs(Tabs),
    Html(Html),
}

impl Layout {
    /// Returns the layout tag, e.g. `"section"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Row(_) => "row",
            Self::Column(_) => "column",
            Self::Grid(_) => "grid",
            Self::Section(_) => "section",
            Self::Tabs(_) => "tabs",
            Self::Html(_) => "html",
        }
    }

    /// Direct children. Tabs yield the children of every tab in insertion
    /// order; raw markup has none.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Row(row) => row.children.iter().collect(),
            Self::Column(column) => column.children.iter().collect(),
            Self::Grid(grid) => grid.children.iter().collect(),
            Self::Section(section) => section.children.iter().collect(),
            Self::Tabs(tabs) => tabs
                .tabs
                .values()
                .flat_map(|tab| tab.children.iter())
                .collect(),
            Self::Html(_) => Vec::new(),
        }
    }

    /// Every leaf field below this layout, depth first.
    pub fn fields(&self) -> Vec<&Field> {
        self.children()
            .into_iter()
            .flat_map(Node::fields)
            .collect()
    }
}

impl From<Layout> for Node {
    fn from(layout: Layout) -> Self {
        Node::Layout(layout)
    }
}

/// Collects anything convertible into nodes.
pub(crate) fn collect_nodes<I>(children: I) -> Vec<Node>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    children.into_iter().map(Into::into).collect()
}
