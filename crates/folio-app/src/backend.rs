//! Crossterm terminal backend: raw mode, alternate screen, event mapping.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::{cursor, execute, terminal};
use folio_types::input::{InputEvent, Key};

/// An event as seen by the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Routed to the session controller.
    Input(InputEvent),
    /// Scroll the viewport one page toward older lines.
    PageUp,
    /// Scroll the viewport one page toward newer lines.
    PageDown,
    /// Terminal size changed.
    Resize,
}

/// Owns the terminal while the UI runs. Restores it on drop.
pub struct TermBackend {
    out: Stdout,
}

impl TermBackend {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            EnableBracketedPaste,
            EnableFocusChange,
            cursor::Show
        )?;
        log::info!("Terminal backend initialized");
        Ok(Self { out })
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }

    /// Block until the next event the app cares about.
    pub fn next_event(&mut self) -> Result<AppEvent> {
        loop {
            if let Some(ev) = map_event(event::read()?) {
                return Ok(ev);
            }
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            DisableFocusChange,
            DisableBracketedPaste,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
        self.out.flush()
    }
}

impl Drop for TermBackend {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {e}");
        }
    }
}

fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Paste(text) => Some(AppEvent::Input(InputEvent::Paste(text))),
        Event::FocusGained => Some(AppEvent::Input(InputEvent::FocusGained)),
        Event::FocusLost => Some(AppEvent::Input(InputEvent::FocusLost)),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let mapped = match key.code {
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('d') | KeyCode::Char('D') if ctrl => InputEvent::Quit,
        KeyCode::PageUp => return Some(AppEvent::PageUp),
        KeyCode::PageDown => return Some(AppEvent::PageDown),
        KeyCode::Char(ch) if ctrl => InputEvent::ctrl(ch),
        KeyCode::Char(ch) => InputEvent::key(Key::Char(ch)),
        KeyCode::Enter => InputEvent::key(Key::Enter),
        KeyCode::Up => InputEvent::key(Key::Up),
        KeyCode::Down => InputEvent::key(Key::Down),
        KeyCode::Left => InputEvent::key(Key::Left),
        KeyCode::Right => InputEvent::key(Key::Right),
        KeyCode::Home => InputEvent::key(Key::Home),
        KeyCode::End => InputEvent::key(Key::End),
        KeyCode::Backspace => InputEvent::key(Key::Backspace),
        KeyCode::Delete => InputEvent::key(Key::Delete),
        _ => return None,
    };
    Some(AppEvent::Input(mapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
        map_event(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn plain_keys() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppEvent::Input(InputEvent::key(Key::Enter)))
        );
        assert_eq!(
            press(KeyCode::Char('x'), KeyModifiers::SHIFT),
            Some(AppEvent::Input(InputEvent::key(Key::Char('x'))))
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            press(KeyCode::Char('l'), KeyModifiers::CONTROL),
            Some(AppEvent::Input(InputEvent::ctrl('l')))
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::Input(InputEvent::ctrl('c')))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            press(KeyCode::Esc, KeyModifiers::NONE),
            Some(AppEvent::Input(InputEvent::Quit))
        );
        assert_eq!(
            press(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(AppEvent::Input(InputEvent::Quit))
        );
    }

    #[test]
    fn paging_and_resize() {
        assert_eq!(
            press(KeyCode::PageUp, KeyModifiers::NONE),
            Some(AppEvent::PageUp)
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(AppEvent::Resize));
    }

    #[test]
    fn unmapped_keys_dropped() {
        assert_eq!(press(KeyCode::F(5), KeyModifiers::NONE), None);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn paste_forwarded() {
        assert_eq!(
            map_event(Event::Paste("ls".to_string())),
            Some(AppEvent::Input(InputEvent::Paste("ls".to_string())))
        );
    }
}
