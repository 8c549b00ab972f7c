//! Draws a session onto the terminal.
//!
//! Layout, top to bottom: title bar, scrollback viewport, prompt line.

use std::io::Write;

use anyhow::Result;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use folio_terminal::{EntryKind, ScrollbackEntry, Session};
use folio_types::config::TerminalConfig;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PROMPT_COLOR: Color = Color::Blue;
const PATH_COLOR: Color = Color::Magenta;
const COMMAND_COLOR: Color = Color::Green;
const OUTPUT_COLOR: Color = Color::Grey;

/// Scroll position of the scrollback viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Lines scrolled up from the newest entry. Zero follows the tail.
    pub from_bottom: usize,
}

impl Viewport {
    /// Jump back to the newest entry.
    pub fn scroll_to_bottom(&mut self) {
        self.from_bottom = 0;
    }

    pub fn page_up(&mut self, page: usize, total: usize) {
        let max = total.saturating_sub(page);
        self.from_bottom = (self.from_bottom + page).min(max);
    }

    pub fn page_down(&mut self, page: usize) {
        self.from_bottom = self.from_bottom.saturating_sub(page);
    }
}

/// The slice of scrollback that fits in `height` rows.
pub fn visible_entries(
    entries: &[ScrollbackEntry],
    height: usize,
    viewport: Viewport,
) -> &[ScrollbackEntry] {
    let end = entries.len().saturating_sub(viewport.from_bottom);
    let start = end.saturating_sub(height);
    &entries[start..end]
}

/// Longest prefix of `text` that fits in `width` terminal columns.
fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Terminal column of the caret, counted from the start of the input text.
fn caret_column(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

fn queue_prompt(out: &mut impl Write, config: &TerminalConfig) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(PROMPT_COLOR),
        Print(format!("{}@{}", config.user, config.host)),
        SetForegroundColor(OUTPUT_COLOR),
        Print(":"),
        SetForegroundColor(PATH_COLOR),
        Print(&config.path),
        SetForegroundColor(OUTPUT_COLOR),
        Print("$ "),
    )?;
    Ok(())
}

/// Redraw the whole screen.
pub fn draw(
    out: &mut impl Write,
    session: &Session,
    config: &TerminalConfig,
    viewport: Viewport,
    (cols, rows): (u16, u16),
) -> Result<()> {
    let width = cols as usize;
    let body_rows = (rows as usize).saturating_sub(2);
    let prompt_width = config.prompt().width();

    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let pad = width.saturating_sub(config.title.width()) / 2;
    queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(clip(
            &format!("{:pad$}{}{:pad$}", "", config.title, ""),
            width
        )),
        SetAttribute(Attribute::Reset),
    )?;

    let visible = visible_entries(session.scrollback(), body_rows, viewport);
    for (row, entry) in visible.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16 + 1))?;
        match entry.kind {
            EntryKind::Command => {
                queue_prompt(out, config)?;
                queue!(
                    out,
                    SetForegroundColor(COMMAND_COLOR),
                    Print(clip(&entry.text, width.saturating_sub(prompt_width))),
                )?;
            },
            EntryKind::Output => {
                queue!(
                    out,
                    SetForegroundColor(OUTPUT_COLOR),
                    Print(clip(&entry.text, width)),
                )?;
            },
        }
    }

    let input_row = rows.saturating_sub(1);
    let input = session.input_line();
    queue!(out, cursor::MoveTo(0, input_row))?;
    queue_prompt(out, config)?;
    queue!(
        out,
        SetForegroundColor(COMMAND_COLOR),
        Print(clip(input.text(), width.saturating_sub(prompt_width))),
        ResetColor,
    )?;
    let cursor_col = (prompt_width + caret_column(input.text(), input.cursor()))
        .min(width.saturating_sub(1));
    queue!(out, cursor::MoveTo(cursor_col as u16, input_row))?;
    out.flush()?;
    Ok(())
}
