//! The `index.md` conversation list.
//!
//! Entries are inserted directly under the `## Conversations` heading, so the list
//! is newest-first by export order. Entry dates are not used for ordering.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::export::frontmatter::DATE_FORMAT;
use crate::models::ConversationMetadata;
use crate::utils::{FileLock, relative_document_path};

pub const INDEX_FILENAME: &str = "index.md";
const LOCK_FILENAME: &str = ".index.lock";
const SECTION_MARKER: &str = "## Conversations";

const INDEX_HEADER: &[&str] = &[
    "# Conversation Index",
    "",
    "This index contains all exported Claude Code conversations.",
    "",
    SECTION_MARKER,
    "",
];

/// One line of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub date: NaiveDate,
    pub title: String,
    pub session_id: String,
    pub tags: Vec<String>,
}

impl IndexEntry {
    pub fn relative_path(&self) -> String {
        relative_document_path(self.date, &self.session_id)
    }
}

impl From<&ConversationMetadata> for IndexEntry {
    fn from(metadata: &ConversationMetadata) -> Self {
        Self {
            date: metadata.date,
            title: metadata.title.clone(),
            session_id: metadata.session_id.clone(),
            tags: metadata.tags.clone(),
        }
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- [{}] [{}]({})",
            self.date.format(DATE_FORMAT),
            self.title,
            self.relative_path()
        )?;
        if !self.tags.is_empty() {
            write!(f, " - {}", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Lines of a freshly created index.
pub fn index_header() -> Vec<String> {
    INDEX_HEADER.iter().map(|line| line.to_string()).collect()
}

/// Insert `entry` two lines below the section marker, or at the end when the
/// marker is missing.
pub fn insert_entry(lines: &mut Vec<String>, entry: &IndexEntry) {
    let position = entry_position(lines.as_slice());
    lines.insert(position, entry.to_string());
}

fn entry_position<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .position(|line| line.as_ref().contains(SECTION_MARKER))
        .map(|i| (i + 2).min(lines.len()))
        .unwrap_or(lines.len())
}

/// Insert `entry` into existing index content. Existing lines are kept byte for
/// byte; the new line uses CRLF when the file already does.
fn insert_into_content(content: &str, entry: &IndexEntry) -> String {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };

    let mut lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();
    if let Some(last) = lines.last_mut().filter(|line| !line.ends_with('\n')) {
        last.push_str(newline);
    }

    let position = entry_position(lines.as_slice());
    lines.insert(position, format!("{}{}", entry, newline));
    lines.concat()
}

/// Add `entry` to `<output_dir>/index.md`, creating the index when missing.
///
/// The read-modify-write runs under an exclusive lock on `.index.lock`, and the new
/// content replaces the index through a temporary file and rename.
pub fn update_index(output_dir: &Path, entry: &IndexEntry) -> Result<PathBuf> {
    let _lock = FileLock::acquire(&output_dir.join(LOCK_FILENAME))?;

    let index_path = output_dir.join(INDEX_FILENAME);
    let content = if index_path.exists() {
        let existing = fs::read_to_string(&index_path)
            .with_context(|| format!("Failed to read index: {}", index_path.display()))?;
        insert_into_content(&existing, entry)
    } else {
        debug!("Creating index at {}", index_path.display());
        let mut lines = index_header();
        insert_entry(&mut lines, entry);
        let mut content = lines.join("\n");
        content.push('\n');
        content
    };

    let temp_path = output_dir.join(format!("{}.tmp", INDEX_FILENAME));
    fs::write(&temp_path, content).context("Failed to write index temp file")?;
    fs::rename(&temp_path, &index_path).context("Failed to rename index temp file")?;

    Ok(index_path)
}
