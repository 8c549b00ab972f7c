//! Platform-agnostic input event types.
//!
//! Every front end maps its native keyboard input to these enums. The
//! emulator core never sees raw platform input.

/// A key the emulator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    /// A printable character.
    Char(char),
}

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed, with the Control modifier state.
    KeyPress { key: Key, ctrl: bool },
    /// Text pasted as a single chunk.
    Paste(String),
    /// The terminal gained focus.
    FocusGained,
    /// The terminal lost focus.
    FocusLost,
    /// User requested quit (window close, Escape, etc.).
    Quit,
}

impl InputEvent {
    /// A plain key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyPress { key, ctrl: false }
    }

    /// A Control chord on a character key (`ctrl('l')` is Ctrl+L).
    pub fn ctrl(ch: char) -> Self {
        Self::KeyPress {
            key: Key::Char(ch.to_ascii_lowercase()),
            ctrl: true,
        }
    }
}
