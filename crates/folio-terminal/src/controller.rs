//! Keyboard bindings for a terminal session.

use folio_types::input::{InputEvent, Key};

use crate::session::{Session, Submission};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Only the input line may have changed.
    Continue,
    /// Scrollback changed; the view must show the newest entry.
    ScrollToBottom,
    Quit,
}

/// Apply one input event to the session.
pub fn handle_input(event: &InputEvent, session: &mut Session) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::KeyPress { key, ctrl: true } => match key {
            Key::Char('l') => {
                session.clear_screen();
                return InputResult::ScrollToBottom;
            },
            Key::Char('c') => session.cancel_input(),
            _ => {},
        },
        InputEvent::KeyPress { key, ctrl: false } => match key {
            Key::Enter => {
                let line = session.input().to_string();
                let submitted = session.submit(&line);
                session.cancel_input();
                session.end_recall();
                if submitted != Submission::Ignored {
                    return InputResult::ScrollToBottom;
                }
            },
            Key::Up => session.recall_previous(),
            Key::Down => session.recall_next(),
            Key::Left => session.input_line_mut().move_left(),
            Key::Right => session.input_line_mut().move_right(),
            Key::Home => session.input_line_mut().move_home(),
            Key::End => session.input_line_mut().move_end(),
            Key::Backspace => session.input_line_mut().backspace(),
            Key::Delete => session.input_line_mut().delete(),
            Key::Char(ch) => session.input_line_mut().insert(*ch),
        },
        InputEvent::Paste(text) => session.input_line_mut().insert_str(text),
        InputEvent::FocusGained | InputEvent::FocusLost => {},
    }
    InputResult::Continue
}
