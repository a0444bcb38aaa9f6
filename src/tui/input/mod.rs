mod edit;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, today: NaiveDate) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if let Some(action) = app.keymap.action(&key) {
        app.perform(action, today);
        return;
    }

    // Unbound keys feed the input widget while editing
    if let Mode::Edit(state) = &mut app.mode {
        edit::handle_text_key(state, key);
    }
}
