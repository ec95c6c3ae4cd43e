use std::path::PathBuf;

use chrono::NaiveDate;

/// Metadata derived once per transcript and shared by the document renderer and
/// the index updater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMetadata {
    pub session_id: String,
    pub date: NaiveDate,
    /// Number of parsed records, including ones that render no content.
    pub message_count: usize,
    /// Working directory the conversation originated from
    pub cwd: Option<PathBuf>,
    pub title: String,
    /// At most five tags, in keyword table order
    pub tags: Vec<String>,
}
