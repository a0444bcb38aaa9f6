use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::keymap::Action;
use crate::util::unicode::{byte_offset_to_display_col, display_width};

/// Render the two status rows (bottom of screen): the field selector or
/// key hints, then the input line with the last edit result.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let top = match &app.mode {
        Mode::Browse => {
            let hints: Vec<String> = [
                (Action::Toggle, "toggle"),
                (Action::Edit, "edit"),
                (Action::New, "new"),
                (Action::Exit, "quit"),
            ]
            .into_iter()
            .filter_map(|(action, label)| {
                app.keymap
                    .key_for(action)
                    .map(|key| format!("{} {}", key, label))
            })
            .collect();
            Line::from(Span::styled(
                hints.join("  "),
                Style::default().fg(app.theme.muted).bg(bg),
            ))
        }
        Mode::Edit(edit) => {
            let mut spans = vec![Span::styled(
                "editing: ",
                Style::default().fg(app.theme.text).bg(bg),
            )];
            for (i, spec) in edit.fields.iter().enumerate() {
                let style = if i == edit.selected {
                    Style::default()
                        .fg(app.theme.input)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.muted).bg(bg)
                };
                spans.push(Span::styled(spec.name, style));
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            Line::from(spans)
        }
    };

    let mut spans = Vec::new();
    if let Mode::Edit(edit) = &app.mode {
        spans.push(Span::styled(
            ">",
            Style::default().fg(app.theme.marker).bg(bg),
        ));
        spans.push(Span::styled(
            edit.buffer.clone(),
            Style::default().fg(app.theme.input).bg(bg),
        ));
    }
    let status = if app.status.is_empty() {
        String::new()
    } else {
        format!("status: {}", app.status)
    };
    if !status.is_empty() {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let status_width = display_width(&status);
        let padding = width.saturating_sub(content_width + status_width).max(1);
        let status_color = if app.status == crate::tui::app::STATUS_OK {
            app.theme.status_ok
        } else {
            app.theme.status_error
        };
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            status,
            Style::default().fg(status_color).bg(bg),
        ));
    }
    let bottom = Line::from(spans);

    let paragraph = Paragraph::new(vec![top, bottom]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    // Terminal cursor sits in the input line while editing
    if let Mode::Edit(edit) = &app.mode
        && area.height >= 2
    {
        let col = 1 + byte_offset_to_display_col(&edit.buffer, edit.cursor);
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &App, width: u16) -> String {
        render_to_string(width, 2, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn test_browse_shows_key_hints() {
        let app = sample_app();
        assert_eq!(
            render(&app, 60),
            "ctrl+d toggle  ctrl+e edit  ctrl+n new  ctrl+c quit"
        );
    }

    #[test]
    fn test_edit_shows_fields_input_and_status() {
        let mut app = sample_app();
        app.mode = Mode::Edit(crate::tui::app::EditState::new(
            app.chain.fields(app.cursor),
        ));
        if let Mode::Edit(edit) = &mut app.mode {
            edit.buffer = "336699".into();
            edit.cursor = 6;
            edit.selected = 1;
        }
        app.status = "invalid input".into();

        let expected = [
            "editing: title:  colour:",
            ">336699                      status: invalid input",
        ];
        assert_eq!(render(&app, 50), expected.join("\n"));
    }
}
