use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical actions the key table maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Items: flip completion. Categories: cycle view mode.
    Toggle,
    /// Browse: next visible node. Editing: next field.
    Next,
    /// Browse: previous visible node. Editing: previous field.
    Prev,
    NextCategory,
    PrevCategory,
    Edit,
    Confirm,
    New,
    /// Editing: leave edit mode. Browse: quit.
    Exit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Toggle,
        Action::Next,
        Action::Prev,
        Action::NextCategory,
        Action::PrevCategory,
        Action::Edit,
        Action::Confirm,
        Action::New,
        Action::Exit,
    ];

    /// Name used for this action in the `[keys]` config table
    pub fn config_name(self) -> &'static str {
        match self {
            Action::Toggle => "toggle",
            Action::Next => "next",
            Action::Prev => "prev",
            Action::NextCategory => "next_category",
            Action::PrevCategory => "prev_category",
            Action::Edit => "edit",
            Action::Confirm => "confirm",
            Action::New => "new",
            Action::Exit => "exit",
        }
    }

    fn from_config_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.config_name() == name)
    }

    fn default_key(self) -> &'static str {
        match self {
            Action::Toggle => "ctrl+d",
            Action::Next => "down",
            Action::Prev => "up",
            Action::NextCategory => "ctrl+down",
            Action::PrevCategory => "ctrl+up",
            Action::Edit => "ctrl+e",
            Action::Confirm => "enter",
            Action::New => "ctrl+n",
            Action::Exit => "ctrl+c",
        }
    }
}

/// Error type for key table parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown action in [keys]: {0}")]
    UnknownAction(String),
    #[error("could not parse key binding: {0}")]
    InvalidKey(String),
}

/// A single key with its modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    /// Parse strings like `ctrl+d`, `up`, `ctrl+shift+n`, `enter`
    pub fn parse(s: &str) -> Result<KeyBinding, KeyError> {
        let invalid = || KeyError::InvalidKey(s.to_string());
        let lower = s.trim().to_ascii_lowercase();
        let mut parts: Vec<&str> = lower.split('+').collect();
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
        }

        let code = match key {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        let n = key
                            .strip_prefix('f')
                            .and_then(|n| n.parse::<u8>().ok())
                            .ok_or_else(invalid)?;
                        KeyCode::F(n)
                    }
                }
            }
        };

        Ok(KeyBinding { modifiers, code })
    }

    fn from_event(key: &KeyEvent) -> KeyBinding {
        // Terminals report shifted letters as uppercase; compare lowercase
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        KeyBinding {
            modifiers: key.modifiers,
            code,
        }
    }
}

/// Physical key → logical action table
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = Action::ALL
            .into_iter()
            .filter_map(|action| {
                KeyBinding::parse(action.default_key())
                    .ok()
                    .map(|binding| (binding, action))
            })
            .collect();
        KeyMap { bindings }
    }
}

impl KeyMap {
    /// Start from the default table and apply `[keys]` overrides.
    /// An override replaces the action's default key.
    pub fn from_config(keys: &HashMap<String, String>) -> Result<KeyMap, KeyError> {
        let mut map = KeyMap::default();
        for (name, key) in keys {
            let action = Action::from_config_name(name)
                .ok_or_else(|| KeyError::UnknownAction(name.clone()))?;
            let binding = KeyBinding::parse(key)?;
            map.bindings.retain(|_, a| *a != action);
            map.bindings.insert(binding, action);
        }
        Ok(map)
    }

    /// Look up the action bound to a key event
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(key)).copied()
    }

    /// Display string for the key bound to an action (for hints)
    pub fn key_for(&self, action: Action) -> Option<String> {
        let (binding, _) = self.bindings.iter().find(|(_, a)| **a == action)?;
        Some(describe(binding))
    }
}

fn describe(binding: &KeyBinding) -> String {
    let mut out = String::new();
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        out.push_str("ctrl+");
    }
    if binding.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("alt+");
    }
    if binding.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("shift+");
    }
    match binding.code {
        KeyCode::Up => out.push('↑'),
        KeyCode::Down => out.push('↓'),
        KeyCode::Left => out.push('←'),
        KeyCode::Right => out.push('→'),
        KeyCode::Enter => out.push_str("enter"),
        KeyCode::Esc => out.push_str("esc"),
        KeyCode::Char(' ') => out.push_str("space"),
        KeyCode::Char(c) => out.push(c),
        KeyCode::F(n) => out.push_str(&format!("f{}", n)),
        other => out.push_str(&format!("{:?}", other).to_lowercase()),
    }
    out
}
