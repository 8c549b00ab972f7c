//! Command emulator for the folio portfolio terminal.
//!
//! Input lines are tokenized by the parser, resolved against a closed set
//! of built-in commands, and the results are appended to a session's
//! scrollback. The controller maps keyboard events onto session
//! operations.

pub mod content;
mod controller;
mod input_line;
mod interpreter;
pub mod parser;
mod session;

/// Apply one input event to a session.
pub use controller::{InputResult, handle_input};
/// Single-line input buffer with a cursor.
pub use input_line::InputLine;
/// Command set, output, and registry with dispatch.
pub use interpreter::{Builtin, Command, CommandOutput, CommandRegistry};
/// Tokenize a raw input line.
pub use parser::{ParsedCommand, parse};
/// Scrollback and recall-history state.
pub use session::{CommandHook, EntryKind, ScrollbackEntry, Session, Submission};
