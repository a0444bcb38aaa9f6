use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{AppConfig, CategoryColor, NodeId};
use crate::ops::{Chain, FieldSpec};

use super::input;
use super::keymap::{Action, KeyError, KeyMap};
use super::render;
use super::theme::Theme;

pub const STATUS_OK: &str = "ok";
pub const STATUS_INVALID: &str = "invalid input";

/// Single-line input state while a node's fields are being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Fields of the node being edited
    pub fields: &'static [FieldSpec],
    /// Index into `fields`
    pub selected: usize,
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
}

impl EditState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        EditState {
            fields,
            selected: 0,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn current(&self) -> Option<&FieldSpec> {
        self.fields.get(self.selected)
    }
}

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Edit(EditState),
}

/// Main application state: the chain plus an explicit cursor into it
pub struct App {
    pub chain: Chain,
    /// The node the user is on
    pub cursor: NodeId,
    pub mode: Mode,
    /// Result of the last confirmed edit
    pub status: String,
    pub should_quit: bool,
    pub theme: Theme,
    pub keymap: KeyMap,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, KeyError> {
        let chain = Chain::with_color(
            config.ui.default_category.clone(),
            CategoryColor(config.ui.default_color.clone()),
        );
        let mut app = App::with_chain(chain);
        app.theme = Theme::from_config(&config.ui);
        app.keymap = KeyMap::from_config(&config.keys)?;
        Ok(app)
    }

    /// An app over an existing chain, cursor on its first node
    pub fn with_chain(chain: Chain) -> Self {
        let cursor = chain.first();
        App {
            chain,
            cursor,
            mode: Mode::Browse,
            status: String::new(),
            should_quit: false,
            theme: Theme::default(),
            keymap: KeyMap::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Edit(_))
    }

    /// Apply a logical action. `today` anchors relative due dates.
    pub fn perform(&mut self, action: Action, today: NaiveDate) {
        match &mut self.mode {
            Mode::Browse => self.perform_browse(action),
            Mode::Edit(edit) => match action {
                Action::Next => {
                    if edit.selected + 1 < edit.fields.len() {
                        edit.selected += 1;
                    }
                }
                Action::Prev => edit.selected = edit.selected.saturating_sub(1),
                Action::Confirm => self.confirm_edit(today),
                Action::Exit => self.mode = Mode::Browse,
                Action::Toggle => self.chain.toggle(self.cursor),
                // Moving or inserting would leave the field list stale
                Action::NextCategory | Action::PrevCategory | Action::Edit | Action::New => {}
            },
        }
    }

    fn perform_browse(&mut self, action: Action) {
        let target = match action {
            Action::Toggle => {
                self.chain.toggle(self.cursor);
                None
            }
            Action::Next => self.chain.next(self.cursor),
            Action::Prev => self.chain.prev(self.cursor),
            Action::NextCategory => self.chain.next_cat(self.cursor),
            Action::PrevCategory => self.chain.prev_cat(self.cursor),
            Action::Edit => {
                self.mode = Mode::Edit(EditState::new(self.chain.fields(self.cursor)));
                None
            }
            Action::Confirm => None,
            Action::New => Some(self.chain.new_after(self.cursor)),
            Action::Exit => {
                self.should_quit = true;
                None
            }
        };
        // Nothing found at a chain end: hold position
        if let Some(target) = target {
            self.cursor = target;
        }
    }

    fn confirm_edit(&mut self, today: NaiveDate) {
        let Mode::Edit(edit) = &self.mode else {
            return;
        };
        let Some(spec) = edit.current() else {
            return;
        };
        let result = self
            .chain
            .set_field(self.cursor, spec.field, &edit.buffer, today);
        self.status = match result {
            Ok(()) => STATUS_OK.to_string(),
            Err(e) => {
                debug!(error = %e, "edit rejected");
                STATUS_INVALID.to_string()
            }
        };
    }

    /// Nodes to draw, in order: everything visible plus the cursor
    pub fn rows(&self) -> Vec<NodeId> {
        self.chain
            .iter()
            .filter(|&id| id == self.cursor || self.chain.is_visible(id))
            .collect()
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config)?;
    info!(category = %config.ui.default_category, "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(nodes = app.chain.len(), "session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Local::now().date_naive());
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewMode;
    use crate::ops::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn app() -> App {
        App::with_chain(Chain::new("uncategorised"))
    }

    #[test]
    fn test_starts_on_first_category() {
        let app = app();
        assert_eq!(app.cursor, app.chain.first());
        assert!(!app.is_editing());
    }

    #[test]
    fn test_next_and_prev_hold_position_at_ends() {
        let mut app = app();
        let cat = app.cursor;
        app.perform(Action::Prev, today());
        assert_eq!(app.cursor, cat);

        app.perform(Action::Next, today());
        let boundary = app.chain.category(cat).unwrap().boundary;
        assert_eq!(app.cursor, boundary);
        app.perform(Action::Next, today());
        assert_eq!(app.cursor, boundary);
    }

    #[test]
    fn test_new_moves_cursor_onto_new_node() {
        let mut app = app();
        let cat = app.cursor;
        app.perform(Action::New, today());
        assert!(app.chain.node(app.cursor).is_category());
        assert_eq!(app.chain.prev_cat(app.cursor), Some(cat));

        app.perform(Action::Next, today());
        let before = app.cursor;
        app.perform(Action::New, today());
        assert_eq!(app.chain.node(before).next, Some(app.cursor));
    }

    #[test]
    fn test_category_jumps() {
        let mut app = app();
        let first = app.cursor;
        app.perform(Action::New, today());
        let second = app.cursor;

        app.perform(Action::PrevCategory, today());
        assert_eq!(app.cursor, first);
        app.perform(Action::Next, today());
        app.perform(Action::NextCategory, today());
        assert_eq!(app.cursor, second);
        app.perform(Action::NextCategory, today());
        assert_eq!(app.cursor, second);
    }

    #[test]
    fn test_toggle_category_cycles_view() {
        let mut app = app();
        app.perform(Action::Toggle, today());
        assert_eq!(
            app.chain.category(app.cursor).unwrap().view,
            ViewMode::Incomplete
        );
    }

    #[test]
    fn test_edit_flow() {
        let mut app = app();
        app.perform(Action::Next, today());
        let item = app.cursor;
        app.perform(Action::Edit, today());
        assert!(app.is_editing());

        if let Mode::Edit(edit) = &mut app.mode {
            edit.buffer = "groceries".into();
        }
        app.perform(Action::Confirm, today());
        assert_eq!(app.status, STATUS_OK);
        assert_eq!(app.chain.item(item).unwrap().title, "groceries");

        app.perform(Action::Next, today());
        app.perform(Action::Next, today());
        app.perform(Action::Next, today());
        match &app.mode {
            Mode::Edit(edit) => assert_eq!(edit.current().unwrap().field, Field::DueDate),
            Mode::Browse => panic!("left edit mode"),
        }
        if let Mode::Edit(edit) = &mut app.mode {
            edit.buffer = "05".into();
        }
        app.perform(Action::Confirm, today());
        assert_eq!(app.status, STATUS_INVALID);
        assert!(app.chain.item(item).unwrap().due.is_none());

        app.perform(Action::Exit, today());
        assert!(!app.is_editing());
        assert!(!app.should_quit);
        assert_eq!(app.cursor, item);
    }

    #[test]
    fn test_exit_in_browse_quits() {
        let mut app = app();
        app.perform(Action::Exit, today());
        assert!(app.should_quit);
    }

    #[test]
    fn test_rows_include_hidden_cursor() {
        let mut app = app();
        app.perform(Action::Next, today());
        let item = app.cursor;
        app.chain.toggle(item);
        let cat = app.chain.first();
        app.chain.toggle(cat); // incomplete only
        assert_eq!(app.rows(), vec![cat, item]);
        app.cursor = cat;
        assert_eq!(app.rows(), vec![cat]);
    }

    #[test]
    fn test_new_from_config() {
        let mut config = AppConfig::default();
        config.ui.default_category = "inbox".into();
        config
            .keys
            .insert("toggle".into(), "ctrl+t".into());
        let app = App::new(&config).unwrap();
        assert_eq!(app.chain.category(app.cursor).unwrap().title, "inbox");
        assert_eq!(app.keymap.key_for(Action::Toggle).as_deref(), Some("ctrl+t"));

        config.keys.insert("fly".into(), "f1".into());
        assert!(App::new(&config).is_err());
    }
}
