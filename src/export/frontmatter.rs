//! YAML frontmatter for exported conversations.
//!
//! Values are written in a form that is both valid YAML and trivially parsed back:
//! the title is a JSON string literal and the tags a JSON array.

use chrono::NaiveDate;

use crate::models::ConversationMetadata;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header fields read back from an exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub session_id: String,
    pub project: Option<String>,
}

/// Frontmatter block lines, delimiters included.
pub fn frontmatter_lines(metadata: &ConversationMetadata) -> Vec<String> {
    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", json_string(&metadata.title)),
        format!("date: {}", metadata.date.format(DATE_FORMAT)),
        format!("tags: {}", json_list(&metadata.tags)),
        format!("session_id: {}", metadata.session_id),
    ];
    if let Some(cwd) = &metadata.cwd {
        let cwd = cwd.to_string_lossy();
        if !cwd.is_empty() {
            lines.push(format!("project: {}", cwd));
        }
    }
    lines.push("---".to_string());
    lines
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// JSON array with `", "` between items: `["a", "b"]`
fn json_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| json_string(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Read the frontmatter at the top of an exported document.
///
/// Returns `None` when the document does not start with a frontmatter block or a
/// required field (date, session id) is missing.
pub fn parse_frontmatter(document: &str) -> Option<Frontmatter> {
    let mut lines = document.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }

    let mut title = String::new();
    let mut date: Option<NaiveDate> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut session_id: Option<String> = None;
    let mut project: Option<String> = None;

    for line in lines {
        if line.trim() == "---" {
            break;
        }
        if let Some(rest) = line.strip_prefix("title:") {
            let raw = rest.trim();
            title = serde_json::from_str::<String>(raw)
                .unwrap_or_else(|_| raw.trim_matches('"').to_string());
        } else if let Some(rest) = line.strip_prefix("date:") {
            date = NaiveDate::parse_from_str(rest.trim(), DATE_FORMAT).ok();
        } else if let Some(rest) = line.strip_prefix("tags:") {
            tags = serde_json::from_str(rest.trim()).unwrap_or_default();
        } else if let Some(rest) = line.strip_prefix("session_id:") {
            session_id = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("project:") {
            project = Some(rest.trim().to_string());
        }
    }

    Some(Frontmatter { title, date: date?, tags, session_id: session_id?, project })
}
