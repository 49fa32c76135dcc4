use std::time::Duration;

use crate::checker::StatusChecker;
use crate::event::Key;

/// Time between two passes over the URL list.
pub const TICK_INTERVAL: Duration = Duration::from_secs(5);

/// One URL being watched, with the result of its latest check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredUrl {
    pub address: String,
    /// 0 until the first response arrives, or after a transport failure.
    pub last_status_code: u16,
    pub is_up: bool,
}

impl MonitoredUrl {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            last_status_code: 0,
            is_up: false,
        }
    }
}

/// Whether keystrokes are commands or edit the draft URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Monitor,
    Insert,
}

/// Something the event loop must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arm the ticker for the next pass.
    ScheduleTick,
    /// Leave the event loop.
    Quit,
}

/// What the state machine consumes. Resizes never reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Tick,
}

/// Central application state — owned exclusively by the main thread.
#[derive(Debug)]
pub struct App {
    /// Watched URLs in insertion order.
    pub urls: Vec<MonitoredUrl>,
    pub input_mode: InputMode,
    /// URL being typed in insert mode.
    pub draft: String,
    /// Set once ctrl+c was pressed; nothing is processed after that.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            urls: Vec::new(),
            input_mode: InputMode::Monitor,
            draft: String::new(),
            should_quit: false,
        }
    }

    /// Command to run when the program starts: arm the first tick.
    pub fn init(&self) -> Command {
        Command::ScheduleTick
    }

    /// Handle exactly one input and tell the caller what to do next.
    pub fn update(&mut self, input: Input, checker: &dyn StatusChecker) -> Option<Command> {
        if self.should_quit {
            return Some(Command::Quit);
        }
        match input {
            Input::Key(key) => self.handle_key(key),
            Input::Tick => Some(self.handle_tick(checker)),
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Command> {
        if key == Key::Interrupt {
            self.should_quit = true;
            return Some(Command::Quit);
        }
        match self.input_mode {
            InputMode::Monitor => self.handle_monitor_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
        None
    }

    // ── Monitor mode ────────────────────────────────────────────

    fn handle_monitor_key(&mut self, key: Key) {
        if key == Key::Char('/') {
            self.input_mode = InputMode::Insert;
        }
    }

    // ── Insert mode ─────────────────────────────────────────────

    // `/` has no special meaning here; it is part of most URLs.
    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::Enter => self.submit_draft(),
            Key::Esc => self.cancel_draft(),
            Key::Backspace => {
                self.draft.pop();
            }
            Key::Char(c) => self.draft.push(c),
            Key::Interrupt | Key::Ignored => {}
        }
    }

    /// Append the draft as a new URL, unvalidated, and go back to monitoring.
    fn submit_draft(&mut self) {
        let address = std::mem::take(&mut self.draft);
        log::info!("monitoring {address:?}");
        self.urls.push(MonitoredUrl::new(address));
        self.input_mode = InputMode::Monitor;
    }

    fn cancel_draft(&mut self) {
        self.draft.clear();
        self.input_mode = InputMode::Monitor;
    }

    // ── Tick ────────────────────────────────────────────────────

    /// Check every URL in list order, one after the other, then re-arm.
    pub fn handle_tick(&mut self, checker: &dyn StatusChecker) -> Command {
        for url in &mut self.urls {
            let outcome = checker.check(&url.address);
            url.last_status_code = outcome.status_code;
            url.is_up = outcome.is_up;
        }
        Command::ScheduleTick
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
