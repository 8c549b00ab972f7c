//! Terminal configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Presentation settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// User name shown in the prompt.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Working directory shown in the prompt.
    pub path: String,
    /// Title bar text.
    pub title: String,
    /// Lines seeded into the scrollback before any interaction.
    pub welcome: Vec<String>,
    /// Log every executed command at info level.
    pub log_commands: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "agustin".to_string(),
            host: "portfolio".to_string(),
            path: "~".to_string(),
            title: "agustin@portfolio: ~/portfolio".to_string(),
            welcome: vec![
                "Welcome to Agustin Yaskuloski's Portfolio Terminal v1.0.0".to_string(),
                "Type \"help\" for available commands".to_string(),
            ],
            log_commands: true,
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.user.is_empty() || config.host.is_empty() {
            return Err(FolioError::Config(
                "user and host must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// The shell prompt, e.g. `agustin@portfolio:~$ `.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_prompt() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.prompt(), "agustin@portfolio:~$ ");
    }

    #[test]
    fn default_welcome_has_banner_and_hint() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.welcome.len(), 2);
        assert!(cfg.welcome[0].starts_with("Welcome to"));
        assert!(cfg.welcome[1].contains("help"));
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, TerminalConfig::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let cfg = TerminalConfig::from_toml_str(
            r#"
            user = "guest"
            path = "~/projects"
            log_commands = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.user, "guest");
        assert_eq!(cfg.host, "portfolio");
        assert_eq!(cfg.prompt(), "guest@portfolio:~/projects$ ");
        assert!(!cfg.log_commands);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = TerminalConfig::from_toml_str("colour = \"green\"").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn empty_user_rejected() {
        let err = TerminalConfig::from_toml_str("user = \"\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"retro\"").unwrap();
        writeln!(file, "welcome = [\"hi\"]").unwrap();
        let cfg = TerminalConfig::load(file.path()).unwrap();
        assert_eq!(cfg.host, "retro");
        assert_eq!(cfg.welcome, vec!["hi".to_string()]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TerminalConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
