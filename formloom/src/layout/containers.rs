//! Row, column, grid, section and raw markup containers.

use serde::Deserialize;
use serde::Serialize;

use super::Layout;
use super::collect_nodes;
use crate::node::Node;

/// Children side by side on a responsive grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    #[serde(rename = "fields")]
    pub children: Vec<Node>,
    pub gap: String,
    /// Column count; defaults to the number of children.
    pub columns: Option<u32>,
    pub classes: Vec<String>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            gap: "gap-4".to_string(),
            columns: None,
            classes: Vec::new(),
        }
    }
}

impl Row {
    pub fn make<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            children: collect_nodes(children),
            ..Default::default()
        }
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Effective column count, clamped to `1..=12`.
    pub fn column_count(&self) -> u32 {
        let count = self
            .columns
            .unwrap_or_else(|| u32::try_from(self.children.len()).unwrap_or(u32::MAX));
        count.clamp(1, 12)
    }
}

/// Children stacked vertically, optionally spanning several grid columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    #[serde(rename = "fields")]
    pub children: Vec<Node>,
    pub span: u32,
    pub classes: Vec<String>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            span: 1,
            classes: Vec::new(),
        }
    }
}

impl Column {
    pub fn make<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            children: collect_nodes(children),
            ..Default::default()
        }
    }

    pub fn span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// Fixed-column grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub columns: u32,
    /// Gap size, the suffix of the `gap-*` class.
    pub gap: String,
    #[serde(rename = "fields")]
    pub children: Vec<Node>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: 2,
            gap: "6".to_string(),
            children: Vec::new(),
        }
    }
}

impl Grid {
    pub fn make() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Replace the children.
    pub fn schema<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children = collect_nodes(children);
        self
    }
}

/// Titled group of children, optionally collapsible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub collapsible: bool,
    pub collapsed: bool,
    #[serde(rename = "fields")]
    pub children: Vec<Node>,
    pub classes: Vec<String>,
}

impl Section {
    pub fn make(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// A section without a heading.
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Replace the children.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children = collect_nodes(children);
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Start collapsed. Also makes the section collapsible.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self.collapsible = true;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// Raw markup emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Html {
    pub content: String,
}

impl Html {
    pub fn make(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl From<Row> for Layout {
    fn from(row: Row) -> Self {
        Layout::Row(row)
    }
}

impl From<Column> for Layout {
    fn from(column: Column) -> Self {
        Layout::Column(column)
    }
}

impl From<Grid> for Layout {
    fn from(grid: Grid) -> Self {
        Layout::Grid(grid)
    }
}

impl From<Section> for Layout {
    fn from(section: Section) -> Self {
        Layout::Section(section)
    }
}

impl From<Html> for Layout {
    fn from(html: Html) -> Self {
        Layout::Html(html)
    }
}

impl From<Row> for Node {
    fn from(row: Row) -> Self {
        Node::Layout(Layout::Row(row))
    }
}

impl From<Column> for Node {
    fn from(column: Column) -> Self {
        Node::Layout(Layout::Column(column))
    }
}

impl From<Grid> for Node {
    fn from(grid: Grid) -> Self {
        Node::Layout(Layout::Grid(grid))
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Layout(Layout::Section(section))
    }
}

impl From<Html> for Node {
    fn from(html: Html) -> Self {
        Node::Layout(Layout::Html(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_row_column_count() {
        let row = Row::make([Field::text("a"), Field::text("b"), Field::text("c")]);
        assert_eq!(row.column_count(), 3);
        assert_eq!(row.clone().columns(20).column_count(), 12);
        assert_eq!(Row::make(Vec::<Node>::new()).column_count(), 1);
    }

    #[test]
    fn test_collapsed_implies_collapsible() {
        let section = Section::make("Advanced").collapsed(true);
        assert!(section.collapsible);
        assert!(section.collapsed);
    }
}
