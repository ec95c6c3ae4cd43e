//! Title and tag inference from conversation content.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::extract::extract_content;
use crate::models::{ConversationMetadata, Record};

/// Prefixes of user content that is not a real prompt (tool output, interruptions,
/// pasted images).
const SKIP_PREFIXES: &[&str] = &["[Tool Result:", "[Tool Use:", "[Request interrupted", "[Image:"];

/// User messages shorter than this are not used as a title.
const MIN_TITLE_CHARS: usize = 20;
const MAX_TITLE_CHARS: usize = 50;
const TRUNCATED_TITLE_CHARS: usize = 47;

pub const MAX_TAGS: usize = 5;

/// Keyword to tag table. Scan order is tag order.
const TAG_KEYWORDS: &[(&str, &str)] = &[
    ("bug", "bug-fix"),
    ("fix", "bug-fix"),
    ("feature", "feature-development"),
    ("implement", "feature-development"),
    ("refactor", "refactoring"),
    ("test", "testing"),
    ("review", "code-review"),
    ("deploy", "deployment"),
    ("debug", "debugging"),
    ("api", "api"),
    ("documentation", "documentation"),
    ("help", "help"),
    ("explain", "explanation"),
];

/// Title from the first meaningful user message, falling back to
/// `Conversation <first 8 chars of the session id>`.
pub fn infer_title(records: &[Record], session_id: &str) -> String {
    for record in records {
        if !matches!(record, Record::User(_)) {
            continue;
        }
        let Some(content) = extract_content(record) else {
            continue;
        };
        let content = content.trim();

        if content.is_empty() || SKIP_PREFIXES.iter().any(|p| content.starts_with(p)) {
            continue;
        }
        if content.chars().count() < MIN_TITLE_CHARS {
            continue;
        }

        let first_line = content.lines().next().unwrap_or_default().trim();
        if first_line.chars().count() > MAX_TITLE_CHARS {
            let truncated: String = first_line.chars().take(TRUNCATED_TITLE_CHARS).collect();
            return format!("{}...", truncated);
        }
        if !first_line.is_empty() {
            return first_line.to_string();
        }
    }

    let prefix: String = session_id.chars().take(8).collect();
    format!("Conversation {}", prefix)
}

/// Topic tags from keywords found anywhere in the conversation.
pub fn infer_tags(records: &[Record]) -> Vec<String> {
    let mut all_text = String::new();
    for content in records.iter().filter_map(extract_content) {
        all_text.push_str(&content.to_lowercase());
        all_text.push(' ');
    }

    let mut tags: Vec<String> = Vec::new();
    for (keyword, tag) in TAG_KEYWORDS {
        if all_text.contains(keyword) && !tags.iter().any(|t| t == tag) {
            tags.push((*tag).to_string());
        }
    }

    tags.truncate(MAX_TAGS);
    tags
}

/// Build the metadata for one conversation.
pub fn build_metadata(
    records: &[Record],
    session_id: &str,
    date: NaiveDate,
    cwd: Option<PathBuf>,
) -> ConversationMetadata {
    ConversationMetadata {
        session_id: session_id.to_string(),
        date,
        message_count: records.len(),
        cwd,
        title: infer_title(records, session_id),
        tags: infer_tags(records),
    }
}
