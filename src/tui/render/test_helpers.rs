use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::ops::{Chain, Field};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Two categories:
///
/// - `chores`: "dishes", "laundry" (note "sort first", due 15/06/2024), an untitled boundary
/// - `(untitled)`: its boundary only
///
/// Cursor on `chores`.
pub fn sample_app() -> App {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut chain = Chain::new("chores");
    let cat = chain.first();
    let dishes = chain.category(cat).unwrap().boundary;
    let laundry = chain.new_after(dishes);
    chain.new_after(laundry);
    chain.new_after(cat);

    chain.set_field(dishes, Field::Title, "dishes", today).unwrap();
    chain.set_field(laundry, Field::Title, "laundry", today).unwrap();
    chain.set_field(laundry, Field::Note, "sort first", today).unwrap();
    chain.set_field(laundry, Field::DueDate, "+5", today).unwrap();

    App::with_chain(chain)
}
