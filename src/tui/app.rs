use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{FocusTimer, NoteStore, Task, TaskFilter, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Errors from the terminal session
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Which panel currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Tasks,
    Timer,
    Notes,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Tasks => "Today's Tasks",
            Panel::Timer => "Focus Timer",
            Panel::Notes => "Quick Notes",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Tasks => Panel::Timer,
            Panel::Timer => Panel::Notes,
            Panel::Notes => Panel::Tasks,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Tasks => Panel::Notes,
            Panel::Timer => Panel::Tasks,
            Panel::Notes => Panel::Timer,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// What the shared edit buffer is feeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    TaskTitle,
    NoteText,
}

/// Cancellable one-second tick source for the focus timer.
///
/// Each deadline is carried forward from the previous one, not from "now",
/// so a slow frame doesn't stretch the second that follows it.
#[derive(Debug)]
pub struct Ticker {
    next: Instant,
}

impl Ticker {
    pub fn new() -> Self {
        Ticker {
            next: Instant::now() + Duration::from_secs(1),
        }
    }

    /// How long the event loop may sleep before the next tick is due
    pub fn timeout(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Count the whole seconds elapsed past the deadline and re-arm
    pub fn take_due(&mut self) -> u32 {
        let now = Instant::now();
        let mut due = 0;
        while self.next <= now {
            self.next += Duration::from_secs(1);
            due += 1;
        }
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Ticker::new()
    }
}

/// Main application state: the three widget stores plus UI wiring
pub struct App {
    pub tasks: TaskStore,
    pub notes: NoteStore,
    pub timer: FocusTimer,
    /// Current task view filter
    pub filter: TaskFilter,
    pub panel: Panel,
    pub mode: Mode,
    /// Set while `mode == Mode::Edit`
    pub edit_target: Option<EditTarget>,
    pub edit_buffer: String,
    /// Byte offset of the cursor within `edit_buffer`
    pub edit_cursor: usize,
    /// Cursor into the filtered task list
    pub task_cursor: usize,
    pub note_cursor: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    /// Present exactly while the timer is in its running phase
    pub ticker: Option<Ticker>,
}

impl App {
    pub fn new() -> Self {
        App {
            tasks: TaskStore::new(),
            notes: NoteStore::new(),
            timer: FocusTimer::new(),
            filter: TaskFilter::All,
            panel: Panel::Tasks,
            mode: Mode::Navigate,
            edit_target: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            task_cursor: 0,
            note_cursor: 0,
            show_help: false,
            should_quit: false,
            theme: Theme::default(),
            ticker: None,
        }
    }

    /// Tasks visible under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.filtered(self.filter)
    }

    /// Keep the list cursors inside the lists they index.
    /// Call after any mutation that can shrink a visible list.
    pub fn clamp_cursors(&mut self) {
        let visible = self.visible_tasks().len();
        self.task_cursor = self.task_cursor.min(visible.saturating_sub(1));
        let notes = self.notes.notes().len();
        self.note_cursor = self.note_cursor.min(notes.saturating_sub(1));
    }

    // --- Timer wiring ---
    // The tick source is acquired exactly once per entry into the running
    // phase and released on every exit path: pause, reset, natural expiry.

    pub fn timer_start(&mut self) {
        if self.timer.start() {
            self.ticker = Some(Ticker::new());
        }
    }

    pub fn timer_pause(&mut self) {
        if self.timer.pause() {
            self.ticker = None;
        }
    }

    pub fn timer_reset(&mut self) {
        self.timer.reset();
        self.ticker = None;
    }

    /// One elapsed second from the tick source
    pub fn on_tick(&mut self) {
        self.timer.tick();
        if !self.timer.is_running() {
            self.ticker = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Run the TUI application
pub fn run() -> Result<(), TuiError> {
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Sleep until input arrives or the next timer tick is due
        let timeout = app
            .ticker
            .as_ref()
            .map_or(Duration::from_millis(250), |t| {
                t.timeout().min(Duration::from_millis(250))
            });

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        // Drain every due tick, catching up after stalled frames
        let due = app.ticker.as_mut().map_or(0, Ticker::take_due);
        for _ in 0..due {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
