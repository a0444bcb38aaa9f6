use ratatui::style::Color;

use crate::model::{CategoryColor, UiConfig};

/// Colors for each role on screen. Category headers use their own color.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Item text
    pub text: Color,
    /// The input line while editing, and the selected field name
    pub input: Color,
    /// Cursor marker and input prompt
    pub marker: Color,
    /// Done items, key hints, unselected field names
    pub muted: Color,
    pub status_ok: Color,
    pub status_error: Color,
    /// Background of the row under the cursor
    pub cursor_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xD8, 0xDE, 0xE9),
            input: Color::Rgb(0xFF, 0xFF, 0xFF),
            marker: Color::Rgb(0x42, 0xF5, 0x95),
            muted: Color::Rgb(0x6C, 0x76, 0x86),
            status_ok: Color::Rgb(0x42, 0xF5, 0x95),
            status_error: Color::Rgb(0xF5, 0x5F, 0x42),
            cursor_bg: Color::Rgb(0x2E, 0x34, 0x40),
        }
    }
}

/// `#rrggbb` to an RGB color
fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

impl Theme {
    /// Defaults with `[ui.colors]` overrides applied. Unknown roles and
    /// unparseable colors are skipped.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (role, raw) in &ui.colors {
            let Some(color) = parse_hex_color(raw) else {
                continue;
            };
            let slot = match role.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "input" => &mut theme.input,
                "marker" => &mut theme.marker,
                "muted" => &mut theme.muted,
                "status_ok" => &mut theme.status_ok,
                "status_error" => &mut theme.status_error,
                "cursor_bg" => &mut theme.cursor_bg,
                _ => continue,
            };
            *slot = color;
        }
        theme
    }

    /// Terminal color for a category. Hex triples become RGB, raw ANSI
    /// indexes become indexed colors; anything else uses the text color.
    pub fn category_color(&self, color: &CategoryColor) -> Color {
        let raw = color.as_str();
        if let Some(rgb) = parse_hex_color(raw) {
            return rgb;
        }
        raw.parse::<u8>().map_or(self.text, Color::Indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#42f595"),
            Some(Color::Rgb(0x42, 0xF5, 0x95))
        );
        assert_eq!(parse_hex_color("42f595"), None);
        assert_eq!(parse_hex_color("#42f5"), None);
        assert_eq!(parse_hex_color("#+2f595"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("nonsense".into(), "#112233".into());
        ui.colors.insert("muted".into(), "grey".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.muted, Theme::default().muted);
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_category_color() {
        let theme = Theme::default();
        assert_eq!(
            theme.category_color(&CategoryColor("#336699".into())),
            Color::Rgb(0x33, 0x66, 0x99)
        );
        assert_eq!(
            theme.category_color(&CategoryColor("042".into())),
            Color::Indexed(42)
        );
        // Out of the 8-bit range
        assert_eq!(
            theme.category_color(&CategoryColor("300".into())),
            theme.text
        );
        assert_eq!(
            theme.category_color(&CategoryColor::default()),
            Color::Rgb(0x42, 0xF5, 0x95)
        );
    }
}
