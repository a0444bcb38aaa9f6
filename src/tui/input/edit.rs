use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::EditState;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

/// Apply a text-entry key to the single-line input buffer.
/// Keys that are not text entry are ignored.
pub(super) fn handle_text_key(edit: &mut EditState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            edit.buffer.insert(edit.cursor, c);
            edit.cursor += c.len_utf8();
        }
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let start = word_boundary_left(&edit.buffer, edit.cursor);
            edit.buffer.drain(start..edit.cursor);
            edit.cursor = start;
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.drain(prev..edit.cursor);
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.drain(edit.cursor..next);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = next;
            }
        }
        (_, KeyCode::Home) => edit.cursor = 0,
        (_, KeyCode::End) => edit.cursor = edit.buffer.len(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fields::ITEM_FIELDS;

    fn press(edit: &mut EditState, code: KeyCode) {
        handle_text_key(edit, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(edit: &mut EditState, s: &str) {
        for c in s.chars() {
            press(edit, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut edit = EditState::new(ITEM_FIELDS);
        type_str(&mut edit, "+5x");
        press(&mut edit, KeyCode::Backspace);
        assert_eq!(edit.buffer, "+5");
        assert_eq!(edit.cursor, 2);
    }

    #[test]
    fn test_cursor_movement_is_grapheme_aware() {
        let mut edit = EditState::new(ITEM_FIELDS);
        type_str(&mut edit, "café");
        press(&mut edit, KeyCode::Left);
        assert_eq!(edit.cursor, 3);
        type_str(&mut edit, "!");
        assert_eq!(edit.buffer, "caf!é");
        press(&mut edit, KeyCode::Home);
        press(&mut edit, KeyCode::Delete);
        assert_eq!(edit.buffer, "af!é");
        press(&mut edit, KeyCode::End);
        assert_eq!(edit.cursor, edit.buffer.len());
        press(&mut edit, KeyCode::Right);
        assert_eq!(edit.cursor, edit.buffer.len());
    }

    #[test]
    fn test_word_delete() {
        let mut edit = EditState::new(ITEM_FIELDS);
        type_str(&mut edit, "buy oat milk");
        handle_text_key(
            &mut edit,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL),
        );
        assert_eq!(edit.buffer, "buy oat ");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut edit = EditState::new(ITEM_FIELDS);
        handle_text_key(
            &mut edit,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
        );
        assert!(edit.buffer.is_empty());
    }
}
