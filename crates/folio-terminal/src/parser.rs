//! Input line tokenizer.
//!
//! Splits on whitespace only. Quotes are ordinary characters, so
//! `"Initial commit"` becomes the two tokens `"Initial` and `commit"`.

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// Lowercased first token, empty for blank input.
    pub command: String,
    /// Remaining tokens in order, case preserved.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// True when the input was blank.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Parse a raw input line into a command name and arguments.
pub fn parse(raw: &str) -> ParsedCommand {
    let mut tokens = raw.split_whitespace();
    let Some(first) = tokens.next() else {
        return ParsedCommand::default();
    };
    ParsedCommand {
        command: first.to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(command: &str, args: &[&str]) -> ParsedCommand {
        ParsedCommand {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn simple_command() {
        assert_eq!(parse("help"), parsed("help", &[]));
    }

    #[test]
    fn command_with_argument() {
        assert_eq!(parse("cat resume.txt"), parsed("cat", &["resume.txt"]));
    }

    #[test]
    fn quotes_are_not_grouped() {
        assert_eq!(
            parse("git commit -m \"Initial commit\""),
            parsed("git", &["commit", "-m", "\"Initial", "commit\""])
        );
    }

    #[test]
    fn blank_inputs() {
        for raw in ["", "   ", "\t", " \t \n "] {
            let p = parse(raw);
            assert!(p.is_empty(), "{raw:?}");
            assert!(p.args.is_empty());
        }
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        assert_eq!(parse("   help"), parsed("help", &[]));
        assert_eq!(parse("help   "), parsed("help", &[]));
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(parse("cat     resume.txt"), parsed("cat", &["resume.txt"]));
        assert_eq!(parse("echo   hello    world"), parsed("echo", &["hello", "world"]));
        assert_eq!(parse("cat\tresume.txt"), parsed("cat", &["resume.txt"]));
        assert_eq!(
            parse("  cat  \t  resume.txt  \t  "),
            parsed("cat", &["resume.txt"])
        );
    }

    #[test]
    fn command_is_lowercased() {
        assert_eq!(parse("HELP").command, "help");
        assert_eq!(parse("HeLp").command, "help");
    }

    #[test]
    fn argument_case_preserved() {
        assert_eq!(parse("cat RESUME.TXT"), parsed("cat", &["RESUME.TXT"]));
    }

    #[test]
    fn special_characters_kept() {
        assert_eq!(parse("ls -la ./src"), parsed("ls", &["-la", "./src"]));
        assert_eq!(parse("cat file@2x.txt"), parsed("cat", &["file@2x.txt"]));
    }

    proptest! {
        #[test]
        fn trimming_is_idempotent(s in "[ \ta-zA-Z0-9.\"-]{0,40}") {
            prop_assert_eq!(parse(s.trim()), parse(&s));
        }

        #[test]
        fn parse_is_pure(s in ".{0,40}") {
            prop_assert_eq!(parse(&s), parse(&s));
        }

        #[test]
        fn tokens_have_no_whitespace(s in "[ \ta-zA-Z]{0,40}") {
            let p = parse(&s);
            prop_assert!(!p.command.contains(char::is_whitespace));
            for arg in &p.args {
                prop_assert!(!arg.is_empty());
                prop_assert!(!arg.contains(char::is_whitespace));
            }
        }
    }
}
