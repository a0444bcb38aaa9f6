use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Color used when neither the config nor the user has set one
pub const DEFAULT_COLOR: &str = "#42f595";

/// Per-category filter applied while navigating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Done items are skipped
    Incomplete,
    /// Items are hidden; navigation moves between categories
    Compacted,
    /// Nothing is skipped
    #[default]
    All,
}

impl ViewMode {
    /// Next mode in the cycle: incomplete → compacted → all → incomplete
    pub fn cycled(self) -> ViewMode {
        match self {
            ViewMode::Incomplete => ViewMode::Compacted,
            ViewMode::Compacted => ViewMode::All,
            ViewMode::All => ViewMode::Incomplete,
        }
    }

    /// The marker shown after the item count in a category header
    pub fn indicator(self) -> &'static str {
        match self {
            ViewMode::Incomplete => "⌃",
            ViewMode::Compacted => "⌄",
            ViewMode::All => "⌅",
        }
    }
}

/// A category color as entered by the user.
///
/// Either an 8-bit ANSI index in its raw form (`"042"`) or a hex triple
/// with a leading `#` (`"#336699"`). The renderer decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColor(pub String);

impl CategoryColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryColor {
    fn default() -> Self {
        CategoryColor(DEFAULT_COLOR.to_string())
    }
}

/// Category header payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub color: CategoryColor,
    pub view: ViewMode,
    /// Items in this category's run, boundary included
    pub item_count: usize,
    /// The last item of the run
    pub boundary: NodeId,
    /// Previous category in the category-only chain
    pub prev_cat: Option<NodeId>,
    /// Next category in the category-only chain
    pub next_cat: Option<NodeId>,
}

impl Category {
    pub fn new(title: String, color: CategoryColor, boundary: NodeId) -> Self {
        Category {
            title,
            color,
            view: ViewMode::default(),
            item_count: 1,
            boundary,
            prev_cat: None,
            next_cat: None,
        }
    }
}
