use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{MessagePayload, Record, ToolResultPayload, ToolUsePayload};

/// Raw transcript line, dispatched on its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawLine {
    User {
        #[serde(default)]
        message: Option<MessagePayload>,
    },
    Assistant {
        #[serde(default)]
        message: Option<MessagePayload>,
    },
    ToolUse(ToolUsePayload),
    ToolResult(ToolResultPayload),
    // summary, system, file-history-snapshot, progress, ...
    #[serde(other)]
    Other,
}

impl RawLine {
    fn into_record(self) -> Option<Record> {
        match self {
            RawLine::User { message } => message.map(Record::User),
            RawLine::Assistant { message } => message.map(Record::Assistant),
            RawLine::ToolUse(payload) => Some(Record::ToolUse(payload)),
            RawLine::ToolResult(payload) => Some(Record::ToolResult(payload)),
            RawLine::Other => None,
        }
    }
}

/// Parse a Claude Code JSONL transcript into records.
///
/// Never fails: malformed lines are skipped, and a missing or unreadable file is
/// reported and yields no records so the export can still proceed.
pub fn parse_transcript(path: &Path) -> Vec<Record> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Transcript file not found: {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Error reading transcript {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match read_records(BufReader::new(file)) {
        Ok(records) => records,
        Err(e) => {
            warn!("Error reading transcript {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Decode records from any line-oriented reader.
///
/// Lines are decoded as raw bytes, so a line that is not valid UTF-8 is skipped
/// like any other malformed line. Lines that are not valid JSON, or that do not
/// match a known record shape, are skipped. Only an I/O error while reading aborts.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut skipped_count = 0;

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line?;

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match serde_json::from_slice::<RawLine>(&line) {
            Ok(raw) => {
                if let Some(record) = raw.into_record() {
                    records.push(record);
                }
            }
            Err(e) => {
                debug!("Skipping malformed line {}: {}", line_num + 1, e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        debug!("Parsed transcript: {} records ({} skipped)", records.len(), skipped_count);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::MessageContent;

    /// Helper to create a temporary transcript file with given content
    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_unwraps_message_envelope() {
        let content = r#"{"type":"user","message":{"role":"user","content":"Hello"},"sessionId":"abc"}
{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"Hi there"}]}}"#;

        let file = create_test_file(content);
        let records = parse_transcript(file.path());

        assert_eq!(records.len(), 2);
        match &records[0] {
            Record::User(payload) => {
                assert_eq!(payload.role.as_deref(), Some("user"));
                assert_eq!(payload.content, Some(MessageContent::Text("Hello".to_string())));
            }
            other => panic!("expected user record, got {:?}", other),
        }
        assert!(matches!(records[1], Record::Assistant(_)));
    }

    #[test]
    fn test_parse_keeps_top_level_tool_records() {
        let content = r#"{"type":"tool_use","name":"Read","input":{"file_path":"/tmp/a"}}
{"type":"tool_result","tool_use_id":"toolu_1","content":"file body"}"#;

        let file = create_test_file(content);
        let records = parse_transcript(file.path());

        assert_eq!(records.len(), 2);
        match &records[0] {
            Record::ToolUse(payload) => assert_eq!(payload.name.as_deref(), Some("Read")),
            other => panic!("expected tool_use record, got {:?}", other),
        }
        match &records[1] {
            Record::ToolResult(payload) => {
                assert_eq!(payload.tool_use_id.as_deref(), Some("toolu_1"))
            }
            other => panic!("expected tool_result record, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_only_malformed_lines_yields_nothing() {
        let content = "not json\n{broken\n[1, 2\n";
        let file = create_test_file(content);

        assert!(parse_transcript(file.path()).is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_lines_between_valid_ones() {
        let content = r#"{"type":"user","message":{"role":"user","content":"Valid 1"}}
invalid json line
{"type":"user","message":{"role":"user","content":"Valid 2"}}"#;

        let file = create_test_file(content);
        assert_eq!(parse_transcript(file.path()).len(), 2);
    }

    #[test]
    fn test_parse_drops_other_entry_types() {
        let content = r#"{"type":"summary","summary":"Fix things","leafUuid":"e030aae0"}
{"type":"system","subtype":"local_command","content":"<command-name>/usage</command-name>"}
{"type":"file-history-snapshot","messageId":"61b36c7f","snapshot":{}}
{"type":"user","message":{"role":"user","content":"kept"}}
{"no_type":true}"#;

        let file = create_test_file(content);
        let records = parse_transcript(file.path());

        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], Record::User(_)));
    }

    #[test]
    fn test_parse_drops_user_line_without_message() {
        let content = r#"{"type":"user","uuid":"u1"}"#;
        let file = create_test_file(content);

        assert!(parse_transcript(file.path()).is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = "\n   \n{\"type\":\"user\",\"message\":{\"content\":\"x\"}}\n\n";
        let file = create_test_file(content);

        assert_eq!(parse_transcript(file.path()).len(), 1);
    }

    #[test]
    fn test_parse_nonexistent_file_yields_nothing() {
        let records = parse_transcript(Path::new("/nonexistent/transcript.jsonl"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_directory_yields_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(parse_transcript(dir.path()).is_empty());
    }

    #[test]
    fn test_read_records_skips_invalid_utf8_lines() {
        let bytes: &[u8] = b"{\"type\":\"user\",\"message\":{\"content\":\"first\"}}\n\xff\xfe\n{\"type\":\"user\",\"message\":{\"content\":\"bad \xc3\x28\"}}\n{\"type\":\"user\",\"message\":{\"content\":\"last\"}}\n";
        let records = read_records(bytes).unwrap();

        assert_eq!(records.len(), 2);
        match &records[1] {
            Record::User(payload) => {
                assert_eq!(payload.content, Some(MessageContent::Text("last".to_string())));
            }
            other => panic!("expected user record, got {:?}", other),
        }
    }

    #[test]
    fn test_read_records_accepts_crlf_lines() {
        let bytes: &[u8] = b"{\"type\":\"user\",\"message\":{\"content\":\"a\"}}\r\n\r\n{\"type\":\"user\",\"message\":{\"content\":\"b\"}}\r\n";
        assert_eq!(read_records(bytes).unwrap().len(), 2);
    }
}
