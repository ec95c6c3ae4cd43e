//! Parsers for Claude Code transcripts and hook payloads
//!
//! # Error Handling Strategy
//!
//! Transcript parsing is **best effort**:
//!
//! - **Individual line failures**: Malformed JSON lines, lines that are not valid
//!   UTF-8, and lines whose shape does not match a known record, are skipped and logged at debug level. One bad line never
//!   blocks export of the rest of the conversation.
//!
//! - **File failures**: A missing or unreadable transcript is reported as a warning and
//!   treated as an empty conversation.
//!
//! Hook payload parsing is the exception: without a session id and working directory
//! there is no output location, so decode failures propagate as `anyhow` errors.

pub mod deserializers;
pub mod hook;
pub mod transcript;

pub use hook::{HookPayload, parse_hook_payload};
pub use transcript::{parse_transcript, read_records};
