//! Optional user configuration, read from
//! `$XDG_CONFIG_HOME/transcript-export/config.toml` (or the platform equivalent).
//!
//! ```toml
//! agent_name = "Claude"
//! history_dir = ".claude/history"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::export::DEFAULT_AGENT_NAME;

/// Hook-mode output root, relative to the session's working directory.
pub const DEFAULT_HISTORY_DIR: &str = ".claude/history";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    /// Heading for assistant sections
    pub agent_name: Option<String>,
    pub history_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn agent_name(&self) -> &str {
        self.agent_name.as_deref().unwrap_or(DEFAULT_AGENT_NAME)
    }

    pub fn history_dir(&self) -> &Path {
        self.history_dir.as_deref().unwrap_or(Path::new(DEFAULT_HISTORY_DIR))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("transcript-export/config.toml"))
}

/// Load the configuration file.
///
/// An explicit path must exist. Without one, the default location is used when
/// present and an empty configuration otherwise.
pub fn load_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            bail!("Config file not found: {}", p.display());
        }
        Some(p.to_path_buf())
    } else {
        default_config_path().filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .with_context(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.agent_name(), "Claude");
        assert_eq!(config.history_dir(), Path::new(".claude/history"));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "agent_name = \"Assistant\"\nhistory_dir = \"docs/chats\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.agent_name(), "Assistant");
        assert_eq!(config.history_dir(), Path::new("docs/chats"));
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "agent_name = \"Assistant\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.history_dir(), Path::new(DEFAULT_HISTORY_DIR));
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let err = load_config(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "agent_name = [").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
