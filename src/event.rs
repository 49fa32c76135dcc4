use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// All events funnelled through the main loop's mpsc channel.
pub enum AppEvent {
    /// A keypress from the keyboard-reading thread.
    Key(KeyEvent),
    /// The ticker fired — time to check every URL.
    Tick,
    /// The terminal was resized — triggers a re-render.
    Resize,
}

/// The keys the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// ctrl+c
    Interrupt,
    Enter,
    Esc,
    Backspace,
    /// Any printable character, `/` included.
    Char(char),
    Ignored,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        // Some terminals report releases and repeats too; only presses count.
        if key.kind == KeyEventKind::Release {
            return Key::Ignored;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Key::Interrupt,
            (KeyCode::Enter, _) => Key::Enter,
            (KeyCode::Esc, _) => Key::Esc,
            (KeyCode::Backspace, _) => Key::Backspace,
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Key::Char(c)
            }
            _ => Key::Ignored,
        }
    }
}
