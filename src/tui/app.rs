use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::io::store::{SqliteStore, StoreError, TodoStore};
use crate::model::{Config, TodoId};
use crate::ops::move_session::MoveState;
use crate::ops::projection::DisplaySequence;
use crate::util::calendar;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// A move session is armed
    Move,
    /// Text entry popup (add/update)
    Edit,
    /// Delete confirmation popup
    Confirm,
}

/// What a submitted text entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Add,
    /// Replace the text of `id`, which sat at slot `index` when editing began
    Update { id: TodoId, index: usize },
}

/// Draft text of the add/update popup
#[derive(Debug, Clone)]
pub struct EditState {
    pub target: EditTarget,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

impl EditState {
    pub fn new(target: EditTarget, initial: &str) -> Self {
        EditState {
            target,
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            EditTarget::Add => " Enter new todo ",
            EditTarget::Update { .. } => " Update todo ",
        }
    }
}

/// Pending delete awaiting y/n
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub id: TodoId,
    pub index: usize,
}

/// Main application state
pub struct App {
    pub store: Box<dyn TodoStore>,
    pub today: NaiveDate,
    /// Day being viewed
    pub current_date: NaiveDate,
    pub sequence: DisplaySequence,
    /// Selected slot index
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub mode: Mode,
    pub move_state: MoveState,
    pub edit: Option<EditState>,
    pub confirm: Option<ConfirmState>,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Transient message for the status row (cleared on next key)
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn TodoStore>, today: NaiveDate, config: &Config) -> Self {
        App {
            store,
            today,
            current_date: today,
            sequence: DisplaySequence::default(),
            cursor: 0,
            scroll_offset: 0,
            mode: Mode::Navigate,
            move_state: MoveState::Idle,
            edit: None,
            confirm: None,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            status_is_error: false,
            should_quit: false,
        }
    }

    /// Build the app and load today's todos
    pub fn load(
        store: Box<dyn TodoStore>,
        today: NaiveDate,
        config: &Config,
    ) -> Result<Self, StoreError> {
        let mut app = App::new(store, today, config);
        app.reload(None)?;
        Ok(app)
    }

    /// Re-query the viewed day and rebuild the display sequence.
    ///
    /// Any move session is dropped. The cursor goes to `selected` when it is
    /// still in range, otherwise to the top. On error nothing is replaced.
    pub fn reload(&mut self, selected: Option<usize>) -> Result<(), StoreError> {
        let records = self.store.query_by_date(self.current_date)?;
        self.sequence = DisplaySequence::project(records);
        self.move_state.abort();
        if self.mode == Mode::Move {
            self.mode = Mode::Navigate;
        }
        self.cursor = match selected {
            Some(i) if i < self.sequence.len() => i,
            _ => 0,
        };
        debug!(
            date = %self.current_date,
            slots = self.sequence.len(),
            "loaded day"
        );
        Ok(())
    }

    /// Step the viewed day by `days` and load it. On error the previous day
    /// stays in view.
    pub fn change_day(&mut self, days: i64) -> Result<(), StoreError> {
        let previous = self.current_date;
        self.current_date = calendar::add_days(previous, days);
        if let Err(e) = self.reload(None) {
            self.current_date = previous;
            return Err(e);
        }
        info!(date = %self.current_date, "viewing day");
        Ok(())
    }

    /// Move the cursor by `delta`, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.sequence.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Put the cursor on the slot holding `id`, if it is loaded
    pub fn select_todo(&mut self, id: TodoId) {
        if let Some(index) = self.sequence.position_of(id) {
            self.cursor = index;
        }
    }

    /// `Current Date: 2024-01-01 (+3)`
    pub fn date_label(&self) -> String {
        format!(
            "Current Date: {} {}",
            calendar::format(self.current_date),
            calendar::delta_label(self.current_date, self.today)
        )
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(&config.store.path)?;
    info!(db = %config.store.path.display(), "opened todo store");
    let mut app = App::load(Box::new(store), calendar::today(), config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
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

    info!("session ended");
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
            // Store failures end the session; the user sees the error on exit
            input::handle_key(app, key)?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
