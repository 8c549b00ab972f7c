//! Terminal session state: scrollback, input line, and recall history.

use folio_types::config::TerminalConfig;

use crate::input_line::InputLine;
use crate::interpreter::{CommandOutput, CommandRegistry};
use crate::parser;

/// What a scrollback line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Echo of a submitted command line.
    Command,
    /// A line of command output.
    Output,
}

/// One line of scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl ScrollbackEntry {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Command,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Output,
            text: text.into(),
        }
    }
}

/// Outcome of [`Session::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing changed.
    Ignored,
    /// The command cleared the scrollback.
    Cleared,
    /// This many output lines were appended (spacer excluded).
    Appended(usize),
}

/// Callback fired with the trimmed command line after each submission.
pub type CommandHook = Box<dyn FnMut(&str)>;

/// A single terminal instance.
///
/// Sessions share nothing; a host may run several side by side.
pub struct Session {
    registry: CommandRegistry,
    scrollback: Vec<ScrollbackEntry>,
    input: InputLine,
    history: Vec<String>,
    /// Index into `history` while navigating, `None` otherwise.
    recall: Option<usize>,
    on_command: Option<CommandHook>,
}

impl Session {
    /// Create a session with the default welcome banner.
    pub fn new() -> Self {
        Self::with_config(&TerminalConfig::default())
    }

    /// Create a session seeded with the configured welcome lines.
    pub fn with_config(config: &TerminalConfig) -> Self {
        let mut scrollback: Vec<ScrollbackEntry> = config
            .welcome
            .iter()
            .map(ScrollbackEntry::output)
            .collect();
        scrollback.push(ScrollbackEntry::output(""));
        Self {
            registry: CommandRegistry::new(),
            scrollback,
            input: InputLine::new(),
            history: Vec::new(),
            recall: None,
            on_command: None,
        }
    }

    /// Install the "command submitted" notification.
    pub fn set_on_command(&mut self, hook: impl FnMut(&str) + 'static) {
        self.on_command = Some(Box::new(hook));
    }

    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    /// Current input buffer contents.
    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn input_line(&self) -> &InputLine {
        &self.input
    }

    pub fn input_line_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    /// Submitted command lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History index being shown, or `None` when not navigating.
    pub fn recall_cursor(&self) -> Option<usize> {
        self.recall
    }

    /// Run a command line and record it.
    ///
    /// Blank input is ignored entirely: no echo, no history entry, no
    /// notification. Text with line breaks runs as one submission per line,
    /// so every scrollback entry stays a single line.
    pub fn submit(&mut self, raw: &str) -> Submission {
        if !raw.contains(['\n', '\r']) {
            return self.submit_line(raw);
        }
        let mut last = Submission::Ignored;
        for line in raw.split(['\n', '\r']) {
            let result = self.submit_line(line);
            if result != Submission::Ignored {
                last = result;
            }
        }
        last
    }

    fn submit_line(&mut self, raw: &str) -> Submission {
        let parsed = parser::parse(raw);
        if parsed.is_empty() {
            return Submission::Ignored;
        }
        let line = raw.trim();

        self.scrollback.push(ScrollbackEntry::command(line));
        self.history.push(line.to_string());

        let result = match self.registry.execute_parsed(&parsed) {
            CommandOutput::Clear => {
                self.scrollback.clear();
                Submission::Cleared
            },
            CommandOutput::Lines(lines) => {
                let count = lines.len();
                self.scrollback
                    .extend(lines.into_iter().map(ScrollbackEntry::output));
                self.scrollback.push(ScrollbackEntry::output(""));
                Submission::Appended(count)
            },
            CommandOutput::None => Submission::Appended(0),
        };
        self.recall = None;

        if let Some(hook) = self.on_command.as_mut() {
            hook(line);
        }
        result
    }

    /// Stop navigating history; the next recall starts from the newest entry.
    pub fn end_recall(&mut self) {
        self.recall = None;
    }

    /// Step back through the recall history into the input buffer.
    ///
    /// The first call shows the newest entry; later calls stop at the oldest.
    pub fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.recall {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall = Some(idx);
        self.input.set(&self.history[idx]);
    }

    /// Step forward through the recall history, stopping at the newest entry.
    pub fn recall_next(&mut self) {
        let Some(i) = self.recall else {
            return;
        };
        let idx = (i + 1).min(self.history.len() - 1);
        self.recall = Some(idx);
        self.input.set(&self.history[idx]);
    }

    /// Discard the whole scrollback.
    pub fn clear_screen(&mut self) {
        self.scrollback.clear();
    }

    /// Throw away the text being typed.
    pub fn cancel_input(&mut self) {
        self.input.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
