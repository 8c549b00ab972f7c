//! Command set, registry, and dispatch logic.
//!
//! The command set is closed: every name resolves to a [`Command`] variant,
//! and anything unrecognised falls through to [`Command::Unknown`].

use crate::content;
use crate::parser::{self, ParsedCommand};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Lines to append to the scrollback.
    Lines(Vec<String>),
    /// Signal to discard the scrollback.
    Clear,
    /// Command produced no visible output.
    None,
}

impl CommandOutput {
    fn from_static(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// A built-in portfolio command, in `help` listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Experience,
    Clear,
    Whoami,
    Ls,
    Cat,
}

impl Builtin {
    /// Every built-in, in `help` listing order.
    pub const ALL: [Builtin; 10] = [
        Builtin::Help,
        Builtin::About,
        Builtin::Skills,
        Builtin::Projects,
        Builtin::Contact,
        Builtin::Experience,
        Builtin::Clear,
        Builtin::Whoami,
        Builtin::Ls,
        Builtin::Cat,
    ];

    /// Look up a built-in by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::About => "about",
            Builtin::Skills => "skills",
            Builtin::Projects => "projects",
            Builtin::Contact => "contact",
            Builtin::Experience => "experience",
            Builtin::Clear => "clear",
            Builtin::Whoami => "whoami",
            Builtin::Ls => "ls",
            Builtin::Cat => "cat",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Builtin::Help => "Show this help message",
            Builtin::About => "Learn more about me",
            Builtin::Skills => "View my technical skills",
            Builtin::Projects => "See my projects",
            Builtin::Contact => "Get contact information",
            Builtin::Experience => "View work experience",
            Builtin::Clear => "Clear terminal",
            Builtin::Whoami => "Display current user",
            Builtin::Ls => "List available sections",
            Builtin::Cat => "Read file content (e.g., cat resume.txt)",
        }
    }

    /// Usage string (e.g. "cat \[file\]").
    pub fn usage(self) -> &'static str {
        match self {
            Builtin::Cat => "cat [file]",
            other => other.name(),
        }
    }
}

/// A resolved command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Builtin(Builtin),
    /// Name that matches no built-in.
    Unknown(String),
    /// Blank input.
    Empty,
}

impl Command {
    /// Resolve a command name. Matching is case-insensitive.
    pub fn resolve(name: &str) -> Self {
        if name.is_empty() {
            return Command::Empty;
        }
        let lower = name.to_lowercase();
        match Builtin::from_name(&lower) {
            Some(b) => Command::Builtin(b),
            None => Command::Unknown(lower),
        }
    }
}

/// Registry of available commands with dispatch.
///
/// Built once; the `help` listing is rendered at construction from the
/// built-in metadata.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    help: Vec<String>,
}

impl CommandRegistry {
    /// Create the registry with the full built-in command set.
    pub fn new() -> Self {
        let mut help = vec!["Available commands:".to_string()];
        for b in Builtin::ALL {
            help.push(format!("  {:<10} - {}", b.usage(), b.description()));
        }
        Self { help }
    }

    /// Resolve a command name to its handler.
    pub fn resolve(&self, name: &str) -> Command {
        Command::resolve(name)
    }

    /// Run a resolved command with its arguments.
    pub fn dispatch(&self, command: &Command, args: &[String]) -> CommandOutput {
        match command {
            Command::Empty => CommandOutput::None,
            Command::Unknown(name) => CommandOutput::Lines(vec![
                format!("Command not found: {name}"),
                "Type \"help\" for available commands".to_string(),
            ]),
            Command::Builtin(b) => match b {
                Builtin::Help => CommandOutput::Lines(self.help.clone()),
                Builtin::About => CommandOutput::from_static(content::ABOUT),
                Builtin::Skills => CommandOutput::from_static(content::SKILLS),
                Builtin::Projects => CommandOutput::from_static(content::PROJECTS),
                Builtin::Contact => CommandOutput::from_static(content::CONTACT),
                Builtin::Experience => CommandOutput::from_static(content::EXPERIENCE),
                Builtin::Clear => CommandOutput::Clear,
                Builtin::Whoami => CommandOutput::from_static(content::WHOAMI),
                Builtin::Ls => CommandOutput::from_static(content::LS),
                Builtin::Cat => execute_cat(args),
            },
        }
    }

    /// Resolve and run an already parsed command.
    pub fn execute_parsed(&self, parsed: &ParsedCommand) -> CommandOutput {
        let command = self.resolve(&parsed.command);
        log::debug!("dispatch {:?} args={:?}", command, parsed.args);
        self.dispatch(&command, &parsed.args)
    }

    /// Parse and execute a raw input line.
    pub fn execute(&self, line: &str) -> CommandOutput {
        self.execute_parsed(&parser::parse(line))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn execute_cat(args: &[String]) -> CommandOutput {
    match args.first().map(String::as_str) {
        None => CommandOutput::from_static(content::CAT_USAGE),
        Some("resume.txt") => CommandOutput::from_static(content::RESUME),
        Some(file) => {
            CommandOutput::Lines(vec![format!("cat: {file}: No such file or directory")])
        },
    }
}
