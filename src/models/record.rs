use serde::Deserialize;
use serde_json::Value;

/// Role a record is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    ToolUse,
    ToolResult,
}

impl Role {
    /// Section heading for this role. Assistant sections are titled with the agent name.
    pub fn heading<'a>(self, agent_name: &'a str) -> &'a str {
        match self {
            Role::User => "User",
            Role::Assistant => agent_name,
            Role::ToolUse => "Tool Use",
            Role::ToolResult => "Tool Result",
        }
    }
}

/// One decoded transcript line, after unwrapping the `message` envelope of
/// user/assistant lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    User(MessagePayload),
    Assistant(MessagePayload),
    ToolUse(ToolUsePayload),
    ToolResult(ToolResultPayload),
}

impl Record {
    pub fn role(&self) -> Role {
        match self {
            Record::User(_) => Role::User,
            Record::Assistant(_) => Role::Assistant,
            Record::ToolUse(_) => Role::ToolUse,
            Record::ToolResult(_) => Role::ToolResult,
        }
    }
}

/// The `message` object nested inside user and assistant lines.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// A top-level `tool_use` line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolUsePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub input: Option<Value>,
}

/// A top-level `tool_result` line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolResultPayload {
    #[serde(default)]
    pub tool_use_id: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message and tool result content: a plain string or a list of blocks.
///
/// Any other JSON shape lands in `Other` so a single odd field never rejects the
/// whole line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentItem>),
    Other(Value),
}

/// One element of a content list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Bare(String),
    Block(ContentBlock),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    Image {
        #[serde(default)]
        source: Option<ImageSource>,
    },
    ToolUse {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        input: Option<Value>,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: Option<String>,
        #[serde(default)]
        content: Option<MessageContent>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageSource {
    #[serde(default)]
    pub media_type: Option<String>,
}
