//! Transcript to Markdown conversion.
//!
//! [`export_transcript`] runs the whole pipeline: parse the transcript, extract
//! each record's content, infer title and tags, render the document, write it under
//! the output root and add it to `index.md`.

pub mod extract;
pub mod frontmatter;
pub mod infer;
pub mod render;
pub mod save;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub use extract::extract_content;
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use infer::{build_metadata, infer_tags, infer_title};
pub use render::{DEFAULT_AGENT_NAME, render_document};
pub use save::save_conversation;

use crate::parsers::parse_transcript;

/// Parameters of a single export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub session_id: String,
    pub output_dir: PathBuf,
    pub cwd: Option<PathBuf>,
    pub agent_name: String,
    /// Date the document is filed under
    pub date: NaiveDate,
}

impl ExportOptions {
    /// Options dated today, with the default agent name and no working directory.
    pub fn new(session_id: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            session_id: session_id.into(),
            output_dir: output_dir.into(),
            cwd: None,
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            date: Local::now().date_naive(),
        }
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn with_agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = agent_name.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to this path.
    Exported(PathBuf),
    /// The transcript held no records; nothing was written.
    Empty,
}

/// Convert one transcript into a Markdown document and index entry.
pub fn export_transcript(transcript: &Path, options: &ExportOptions) -> Result<ExportOutcome> {
    let records = parse_transcript(transcript);
    if records.is_empty() {
        return Ok(ExportOutcome::Empty);
    }
    debug!("Parsed {} records from {}", records.len(), transcript.display());

    let metadata = build_metadata(&records, &options.session_id, options.date, options.cwd.clone());
    let markdown = render_document(&records, &metadata, &options.agent_name);
    let path = save_conversation(&markdown, &options.output_dir, &metadata)?;

    Ok(ExportOutcome::Exported(path))
}
