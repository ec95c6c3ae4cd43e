//! Data models for Claude Code transcripts and exported conversations.
//!
//! - [`Record`] - One transcript line, as a sum type over the four exported kinds
//! - [`MessageContent`] / [`ContentBlock`] - The content shapes carried by records
//! - [`ConversationMetadata`] - Title, tags and identity of one exported conversation
//!
//! Records are decoded with serde; unexpected shapes fall into catch-all variants
//! rather than failing the line.

pub mod metadata;
pub mod record;

pub use metadata::ConversationMetadata;
pub use record::{
    ContentBlock, ContentItem, ImageSource, MessageContent, MessagePayload, Record, Role,
    ToolResultPayload, ToolUsePayload,
};
