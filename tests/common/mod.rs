//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a workspace holding a transcript file and an output directory
pub struct TranscriptBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    /// Create a new builder with an empty transcript
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Add a record line
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line, verbatim
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the transcript and return the finished workspace
    pub fn build(self) -> TranscriptWorkspace {
        let transcript = self.temp_dir.path().join("transcript.jsonl");
        fs::write(&transcript, self.lines.join("\n")).expect("Failed to write transcript");
        TranscriptWorkspace { temp_dir: self.temp_dir, transcript }
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A written transcript inside a temporary directory
pub struct TranscriptWorkspace {
    temp_dir: TempDir,
    transcript: PathBuf,
}

impl TranscriptWorkspace {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn transcript(&self) -> &Path {
        &self.transcript
    }

    /// Output directory for exports (not created)
    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("history")
    }
}

/// Builder for single transcript lines
pub struct RecordBuilder {
    value: Value,
}

impl RecordBuilder {
    /// A user message with plain string content
    pub fn user(text: &str) -> Self {
        Self {
            value: json!({
                "type": "user",
                "message": {"role": "user", "content": text},
                "sessionId": "550e8400-e29b-41d4-a716-446655440000",
                "timestamp": "2025-01-15T10:30:00Z"
            }),
        }
    }

    /// A user message with content blocks
    pub fn user_blocks(blocks: Vec<Value>) -> Self {
        Self {
            value: json!({
                "type": "user",
                "message": {"role": "user", "content": blocks}
            }),
        }
    }

    /// An assistant message with a single text block
    pub fn assistant(text: &str) -> Self {
        Self::assistant_blocks(vec![Self::text_block(text)])
    }

    /// An assistant message with content blocks
    pub fn assistant_blocks(blocks: Vec<Value>) -> Self {
        Self {
            value: json!({
                "type": "assistant",
                "message": {"role": "assistant", "model": "claude-sonnet-4", "content": blocks}
            }),
        }
    }

    /// A top-level tool_use line
    pub fn tool_use(name: &str, input: Value) -> Self {
        Self { value: json!({"type": "tool_use", "name": name, "input": input}) }
    }

    /// A top-level tool_result line
    pub fn tool_result(tool_use_id: &str, content: Value) -> Self {
        Self { value: json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content}) }
    }

    /// A non-exported line type (summary, system, ...)
    pub fn other(entry_type: &str) -> Self {
        Self { value: json!({"type": entry_type, "summary": "ignored"}) }
    }

    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    pub fn tool_use_block(id: &str, name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": id, "name": name, "input": input})
    }

    pub fn tool_result_block(tool_use_id: &str, content: Value) -> Value {
        json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content})
    }

    pub fn image_block(media_type: &str) -> Value {
        json!({"type": "image", "source": {"type": "base64", "media_type": media_type, "data": "iVBORw0KGgo="}})
    }

    pub fn to_json(&self) -> String {
        self.value.to_string()
    }
}

/// Hook payload JSON as sent on stdin
pub fn hook_payload(session_id: &str, transcript: &Path, cwd: &Path) -> String {
    json!({
        "session_id": session_id,
        "transcript_path": transcript,
        "cwd": cwd,
        "hook_event_name": "Stop"
    })
    .to_string()
}

/// A short but realistic conversation
pub fn realistic_transcript() -> TranscriptWorkspace {
    TranscriptBuilder::new()
        .with_record(RecordBuilder::other("summary"))
        .with_record(RecordBuilder::user("hi"))
        .with_record(RecordBuilder::user("Please refactor the login flow to use middleware"))
        .with_record(RecordBuilder::assistant_blocks(vec![
            RecordBuilder::text_block("I'll start by reading the current handler."),
            RecordBuilder::tool_use_block(
                "toolu_01",
                "Read",
                json!({"file_path": "/srv/app/src/login.rs"}),
            ),
        ]))
        .with_record(RecordBuilder::user_blocks(vec![RecordBuilder::tool_result_block(
            "toolu_01",
            json!("pub fn login() {}"),
        )]))
        .with_record(RecordBuilder::assistant("Done. I also added a test for the new middleware."))
        .build()
}
