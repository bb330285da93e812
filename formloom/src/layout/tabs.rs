//! Tabbed container.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::Layout;
use super::collect_nodes;
use crate::node::Node;

/// One tab: a label, an optional icon and the tab's children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tab {
    pub label: String,
    pub icon: Option<String>,
    #[serde(rename = "fields")]
    pub children: Vec<Node>,
}

impl Tab {
    pub fn new<I>(label: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            label: label.into(),
            icon: None,
            children: collect_nodes(children),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Tabs keyed by a stable identifier. The first tab added is active unless
/// [`Tabs::default_tab`] says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tabs {
    pub tabs: IndexMap<String, Tab>,
    pub default_tab: String,
    pub classes: Vec<String>,
}

impl Tabs {
    pub fn make() -> Self {
        Self::default()
    }

    /// Add a tab. Re-adding a key replaces that tab in place.
    pub fn tab(mut self, key: impl Into<String>, tab: Tab) -> Self {
        let key = key.into();
        if self.default_tab.is_empty() {
            self.default_tab = key.clone();
        }
        self.tabs.insert(key, tab);
        self
    }

    pub fn default_tab(mut self, key: impl Into<String>) -> Self {
        self.default_tab = key.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

impl From<Tabs> for Layout {
    fn from(tabs: Tabs) -> Self {
        Layout::Tabs(tabs)
    }
}

impl From<Tabs> for Node {
    fn from(tabs: Tabs) -> Self {
        Node::Layout(Layout::Tabs(tabs))
    }
}
