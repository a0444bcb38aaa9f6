use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{NodeId, NodeKind};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

const CURSOR_MARKER: &str = "> ";
const NO_MARKER: &str = "  ";
const ITEM_INDENT: &str = "    ";

/// Render the chain, first node to last, skipping nodes hidden by their view mode
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.rows();
    let height = area.height as usize;
    let cursor_row = rows.iter().position(|&id| id == app.cursor).unwrap_or(0);
    let scroll = cursor_row.saturating_sub(height.saturating_sub(1));

    let lines: Vec<Line> = rows
        .iter()
        .skip(scroll)
        .take(height)
        .map(|&id| row_line(app, id, area.width as usize))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One row: cursor marker, left text, and the right-hand column flush right
fn row_line(app: &App, id: NodeId, width: usize) -> Line<'static> {
    let is_cursor = id == app.cursor;
    let text = app.chain.display_text(id);
    let (left, right) = text.split_once('\t').unwrap_or((text.as_str(), ""));

    let (indent, left_style, right_style) = match &app.chain.node(id).kind {
        NodeKind::Category(cat) => {
            let color = app.theme.category_color(&cat.color);
            (
                "",
                Style::default().fg(color).add_modifier(Modifier::ITALIC),
                Style::default().fg(color),
            )
        }
        NodeKind::Item(item) => {
            let base = if item.done {
                Style::default()
                    .fg(app.theme.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text)
            };
            let date_style = match item.due {
                Some(_) => base,
                None => base.add_modifier(Modifier::ITALIC),
            };
            (ITEM_INDENT, base, date_style)
        }
    };

    let bg = if is_cursor {
        app.theme.cursor_bg
    } else {
        app.theme.background
    };
    let marker = if is_cursor { CURSOR_MARKER } else { NO_MARKER };

    let lead = format!("{}{}", marker, indent);
    let right = if right.is_empty() {
        String::new()
    } else {
        format!(" {}", right)
    };
    let lead_w = display_width(&lead);
    let right_w = display_width(&right);
    let left_budget = width.saturating_sub(lead_w + right_w);
    let left = truncate_to_width(left, left_budget);
    let gap = left_budget.saturating_sub(display_width(&left));

    let marker_style = Style::default().fg(app.theme.marker).bg(bg);
    Line::from(vec![
        Span::styled(lead, marker_style),
        Span::styled(left, left_style.bg(bg)),
        Span::styled(" ".repeat(gap), Style::default().bg(bg)),
        Span::styled(right, right_style.bg(bg)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &App, h: u16) -> String {
        render_to_string(60, h, |frame, area| {
            render_list_view(frame, app, area);
        })
    }

    #[test]
    fn test_renders_category_and_items() {
        let app = sample_app();
        assert_eq!(
            render(&app, 8),
            "\
> chores                                         (3 items) ⌅
      dishes -- (empty note)                    ( no  date )
      laundry -- sort first                     (15/06/2024)
       -- (empty note)                          ( no  date )
  (untitled)                                     (1 items) ⌅
       -- (empty note)                          ( no  date )"
        );
    }

    #[test]
    fn test_incomplete_view_hides_done_items() {
        let mut app = sample_app();
        let cat = app.chain.first();
        let dishes = app.chain.next(cat).unwrap();
        app.chain.toggle(dishes);
        app.chain.toggle(cat);
        let out = render(&app, 8);
        assert!(!out.contains("dishes"));
        assert!(out.contains("laundry"));
        assert!(out.starts_with("> chores"));
    }

    #[test]
    fn test_compacted_view_shows_only_header() {
        let mut app = sample_app();
        let cat = app.chain.first();
        app.chain.toggle(cat);
        app.chain.toggle(cat);
        assert_eq!(
            render(&app, 8),
            "\
> chores                                         (3 items) ⌄
  (untitled)                                     (1 items) ⌅
       -- (empty note)                          ( no  date )"
        );
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let mut app = sample_app();
        app.cursor = app.chain.last();
        let expected = [
            "  (untitled)                                     (1 items) ⌅",
            ">      -- (empty note)                          ( no  date )",
        ];
        assert_eq!(render(&app, 2), expected.join("\n"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let mut app = sample_app();
        let cat = app.chain.first();
        app.chain.category_mut(cat).unwrap().title = "x".repeat(80);
        let out = render(&app, 1);
        assert_eq!(out, format!("> {}… (3 items) ⌅", "x".repeat(45)));
    }
}
