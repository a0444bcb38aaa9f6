use std::iter;

use crate::model::{Category, CategoryColor, Item, Node, NodeId, NodeKind, ViewMode};

/// The navigation structure: one arena holding every category and item,
/// threaded by a flat chain (display order) and a category-only chain.
///
/// Nodes are only ever appended to the arena and spliced into the chains,
/// never removed.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    first: NodeId,
    last: NodeId,
    /// Color given to categories created by `new_after`
    default_color: CategoryColor,
}

impl Chain {
    /// Bootstrap a chain holding one category and its boundary item
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_color(title, CategoryColor::default())
    }

    /// Like `new`, with the color new categories start with
    pub fn with_color(title: impl Into<String>, default_color: CategoryColor) -> Self {
        let mut chain = Chain {
            nodes: Vec::new(),
            first: NodeId(0),
            last: NodeId(0),
            default_color,
        };
        let (cat, boundary) = chain.alloc_category(title.into());
        chain.first = cat;
        chain.last = boundary;
        chain
    }

    // -----------------------------------------------------------------------
    // Arena access
    // -----------------------------------------------------------------------

    /// Panics if `id` was not issued by this chain.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn item(&self, id: NodeId) -> Option<&Item> {
        self.node(id).as_item()
    }

    pub(crate) fn item_mut(&mut self, id: NodeId) -> Option<&mut Item> {
        match &mut self.node_mut(id).kind {
            NodeKind::Item(item) => Some(item),
            NodeKind::Category(_) => None,
        }
    }

    pub fn category(&self, id: NodeId) -> Option<&Category> {
        self.node(id).as_category()
    }

    pub(crate) fn category_mut(&mut self, id: NodeId) -> Option<&mut Category> {
        match &mut self.node_mut(id).kind {
            NodeKind::Category(cat) => Some(cat),
            NodeKind::Item(_) => None,
        }
    }

    /// Owning category of a node. A category owns itself.
    pub fn owner(&self, id: NodeId) -> NodeId {
        match &self.node(id).kind {
            NodeKind::Item(item) => item.owner,
            NodeKind::Category(_) => id,
        }
    }

    /// The view mode that governs navigation from `id`
    pub fn mode_of(&self, id: NodeId) -> ViewMode {
        self.category(self.owner(id))
            .map_or(ViewMode::All, |cat| cat.view)
    }

    pub fn first(&self) -> NodeId {
        self.first
    }

    pub fn last(&self) -> NodeId {
        self.last
    }

    /// The head of the category-only chain. Always the first node overall.
    pub fn first_category(&self) -> NodeId {
        self.first
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn default_color(&self) -> &CategoryColor {
        &self.default_color
    }

    /// Every node in flat-chain order, ignoring view modes
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(self.first), move |&id| self.node(id).next)
    }

    /// Every category in category-chain order
    pub fn categories(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(self.first_category()), move |&id| {
            self.category(id).and_then(|cat| cat.next_cat)
        })
    }

    /// Items of one category's run, boundary last
    pub fn items_of(&self, category: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.node(category).next, move |&id| {
            let node = self.node(id);
            match node.as_item() {
                Some(item) if self.category(item.owner).map(|c| c.boundary) == Some(id) => None,
                _ => node.next,
            }
        })
        .filter(move |&id| self.item(id).is_some_and(|item| item.owner == category))
    }

    // -----------------------------------------------------------------------
    // Allocation and raw splicing (insertion only)
    // -----------------------------------------------------------------------

    /// Allocate a category and its boundary item, linked to each other only
    pub(crate) fn alloc_category(&mut self, title: String) -> (NodeId, NodeId) {
        let cat = NodeId(self.nodes.len());
        let boundary = NodeId(self.nodes.len() + 1);
        self.nodes.push(Node {
            prev: None,
            next: Some(boundary),
            kind: NodeKind::Category(Category::new(title, self.default_color.clone(), boundary)),
        });
        self.nodes.push(Node {
            prev: Some(cat),
            next: None,
            kind: NodeKind::Item(Item::new(cat)),
        });
        (cat, boundary)
    }

    /// Allocate an unlinked item owned by `owner`
    pub(crate) fn alloc_item(&mut self, owner: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            prev: None,
            next: None,
            kind: NodeKind::Item(Item::new(owner)),
        });
        id
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    pub(crate) fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        self.node_mut(id).prev = prev;
    }

    pub(crate) fn set_last(&mut self, id: NodeId) {
        self.last = id;
    }

    // -----------------------------------------------------------------------
    // Capability contract
    // -----------------------------------------------------------------------

    /// Plain display text for a node. Styling is left to the renderer.
    pub fn display_text(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Category(cat) => format!(
                "{}\t({} items) {}",
                cat.title,
                cat.item_count,
                cat.view.indicator()
            ),
            NodeKind::Item(item) => {
                format!("{} -- {}\t({})", item.title, item.note, item.due_text())
            }
        }
    }

    /// Items flip completion; categories cycle their view mode
    pub fn toggle(&mut self, id: NodeId) {
        match &mut self.node_mut(id).kind {
            NodeKind::Item(item) => item.done = !item.done,
            NodeKind::Category(cat) => cat.view = cat.view.cycled(),
        }
    }

    /// Whether a node counts as done for filtering. Categories never do.
    pub fn is_done(&self, id: NodeId) -> bool {
        self.item(id).is_some_and(|item| item.done)
    }

    /// Whether a node is shown when the whole chain is laid out
    pub fn is_visible(&self, id: NodeId) -> bool {
        match &self.node(id).kind {
            NodeKind::Category(_) => true,
            NodeKind::Item(item) => match self.mode_of(id) {
                ViewMode::All => true,
                ViewMode::Incomplete => !item.done,
                ViewMode::Compacted => false,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Next visible node, or `None` at the end of the chain
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        match self.mode_of(id) {
            ViewMode::Compacted => self.next_cat(id),
            ViewMode::All => self.node(id).next,
            ViewMode::Incomplete => self.skip_done(self.node(id).next, |node| node.next),
        }
    }

    /// Previous visible node, or `None` at the start of the chain
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let mode = self.mode_of(id);

        // Stepping back out of a category header lands in the previous
        // category's run, resolved with that category's mode.
        if node.is_category() && mode != ViewMode::Compacted {
            let before = node.prev?;
            let before_owner = self.owner(before);
            return match self.mode_of(before_owner) {
                ViewMode::Compacted => Some(before_owner),
                ViewMode::All => Some(before),
                ViewMode::Incomplete => self.skip_done(Some(before), |node| node.prev),
            };
        }

        match mode {
            ViewMode::Compacted => self.prev_cat(id),
            ViewMode::All => node.prev,
            ViewMode::Incomplete => self.skip_done(node.prev, |node| node.prev),
        }
    }

    /// Category after the owner of `id` in the category-only chain
    pub fn next_cat(&self, id: NodeId) -> Option<NodeId> {
        self.category(self.owner(id)).and_then(|cat| cat.next_cat)
    }

    /// Category before the owner of `id` in the category-only chain
    pub fn prev_cat(&self, id: NodeId) -> Option<NodeId> {
        self.category(self.owner(id)).and_then(|cat| cat.prev_cat)
    }

    /// Walk from `start` along `step`, returning the first node not done
    fn skip_done(
        &self,
        start: Option<NodeId>,
        step: impl Fn(&Node) -> Option<NodeId>,
    ) -> Option<NodeId> {
        let mut cursor = start;
        while let Some(id) = cursor {
            if !self.is_done(id) {
                return Some(id);
            }
            cursor = step(self.node(id));
        }
        None
    }
}
