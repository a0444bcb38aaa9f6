use std::fmt;

use super::category::Category;
use super::item::Item;

/// Index of a node in the chain's arena. Nodes are never removed, so an id
/// stays valid for the lifetime of the chain that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of a chain member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Item(Item),
    Category(Category),
}

/// A member of the flat chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_category(&self) -> bool {
        matches!(self.kind, NodeKind::Category(_))
    }

    pub fn as_item(&self) -> Option<&Item> {
        match &self.kind {
            NodeKind::Item(item) => Some(item),
            NodeKind::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match &self.kind {
            NodeKind::Category(cat) => Some(cat),
            NodeKind::Item(_) => None,
        }
    }
}
