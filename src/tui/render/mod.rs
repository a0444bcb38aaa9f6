pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen: the chain, then the status rows
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: list | blank | status rows (2 rows)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // chain
            Constraint::Length(1), // spacer
            Constraint::Length(2), // fields / hints + input / status
        ])
        .split(area);

    list_view::render_list_view(frame, app, chunks[0]);
    status_row::render_status_row(frame, app, chunks[2]);
}
