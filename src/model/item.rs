use chrono::NaiveDate;

use super::node::NodeId;

/// Note text given to freshly created items
pub const EMPTY_NOTE: &str = "(empty note)";

/// A single task in a category's run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    /// Free-text note
    pub note: String,
    pub due: Option<NaiveDate>,
    pub done: bool,
    /// The category whose run this item belongs to
    pub owner: NodeId,
}

impl Item {
    pub fn new(owner: NodeId) -> Self {
        Item {
            title: String::new(),
            note: EMPTY_NOTE.to_string(),
            due: None,
            done: false,
            owner,
        }
    }

    /// Due date as `dd/mm/yyyy`, or the placeholder when unset
    pub fn due_text(&self) -> String {
        match self.due {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => " no  date ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new(NodeId(0));
        assert_eq!(item.title, "");
        assert_eq!(item.note, "(empty note)");
        assert!(item.due.is_none());
        assert!(!item.done);
    }

    #[test]
    fn test_due_text() {
        let mut item = Item::new(NodeId(0));
        assert_eq!(item.due_text(), " no  date ");
        item.due = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(item.due_text(), "15/06/2024");
    }
}
