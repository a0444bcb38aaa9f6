use tracing::debug;

use crate::model::NodeId;

use super::chain::Chain;

/// Default title for categories created through `new_after`
pub const UNTITLED_CATEGORY: &str = "(untitled)";

impl Chain {
    /// Create a node of the same kind as `id`, splice it in right after it,
    /// and return it.
    ///
    /// On an item: a new item follows it in the same category. On a category:
    /// a new category (with its own boundary item) follows the whole run of
    /// the current one.
    pub fn new_after(&mut self, id: NodeId) -> NodeId {
        match self.category(id).map(|cat| (cat.boundary, cat.next_cat)) {
            Some((boundary, next_cat)) => self.insert_category_after(id, boundary, next_cat),
            None => self.insert_item_after(id),
        }
    }

    fn insert_item_after(&mut self, current: NodeId) -> NodeId {
        let owner = self.owner(current);
        let following = self.node(current).next;
        let new = self.alloc_item(owner);

        self.set_prev(new, Some(current));
        self.set_next(new, following);
        self.set_next(current, Some(new));
        match following {
            Some(following) => self.set_prev(following, Some(new)),
            None => self.set_last(new),
        }

        if let Some(cat) = self.category_mut(owner) {
            cat.item_count += 1;
            // Keep the boundary at the end of the run
            if cat.boundary == current {
                cat.boundary = new;
            }
        }

        debug!(%current, %new, %owner, "inserted item");
        new
    }

    fn insert_category_after(
        &mut self,
        current: NodeId,
        current_boundary: NodeId,
        following_cat: Option<NodeId>,
    ) -> NodeId {
        let (new, new_boundary) = self.alloc_category(UNTITLED_CATEGORY.to_string());

        // Category-only chain
        if let Some(cat) = self.category_mut(new) {
            cat.prev_cat = Some(current);
            cat.next_cat = following_cat;
        }
        if let Some(cat) = self.category_mut(current) {
            cat.next_cat = Some(new);
        }
        if let Some(following_cat) = following_cat
            && let Some(cat) = self.category_mut(following_cat)
        {
            cat.prev_cat = Some(new);
        }

        // Flat chain: current boundary → new header … new boundary → whatever followed
        let following = self.node(current_boundary).next;
        self.set_next(current_boundary, Some(new));
        self.set_prev(new, Some(current_boundary));
        self.set_next(new_boundary, following);
        match following {
            Some(following) => self.set_prev(following, Some(new_boundary)),
            None => self.set_last(new_boundary),
        }

        debug!(%current, %new, "inserted category");
        new
    }
}
