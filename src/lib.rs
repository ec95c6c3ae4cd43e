//! Transcript Export - Archive Claude Code conversations as Markdown
//!
//! This library converts Claude Code JSONL transcripts into Markdown documents and
//! keeps an index of everything exported. It supports:
//!
//! - Lenient transcript parsing: malformed lines and unknown entry types are skipped
//! - Per-record content extraction for user, assistant, tool use and tool result events
//! - Title and topic tag inference from the conversation text
//! - Documents with YAML frontmatter, filed as `YYYY/MM-DD/<session-id>.md`
//! - A newest-first `index.md` listing every exported conversation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use transcript_export::{ExportOptions, export_transcript};
//!
//! let options = ExportOptions::new("550e8400-e29b-41d4-a716-446655440000", "/home/alice/chats")
//!     .with_cwd(Some("/home/alice/project".into()));
//! let outcome = export_transcript(Path::new("/home/alice/session.jsonl"), &options)?;
//! println!("{:?}", outcome);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod index_storage;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use export::{ExportOptions, ExportOutcome, export_transcript};
pub use models::{ConversationMetadata, Record, Role};
pub use parsers::parse_transcript;
