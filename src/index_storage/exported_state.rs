//! The `.exported_state` marker: session ids already handled in hook mode, one per
//! line.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const STATE_FILENAME: &str = ".exported_state";

#[derive(Debug, Clone)]
pub struct ExportedState {
    path: PathBuf,
}

impl ExportedState {
    pub fn new(output_dir: &Path) -> Self {
        Self { path: output_dir.join(STATE_FILENAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `session_id` is listed on a line of its own.
    pub fn contains(&self, session_id: &str) -> Result<bool> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().any(|line| line.trim() == session_id)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read export state: {}", self.path.display())),
        }
    }

    pub fn record(&self, session_id: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open export state: {}", self.path.display()))?;
        writeln!(file, "{}", session_id)
            .with_context(|| format!("Failed to write export state: {}", self.path.display()))
    }
}
