//! Content extraction: turns one record into the Markdown fragment shown in the
//! exported document.

use serde_json::Value;

use crate::models::{
    ContentBlock, ContentItem, MessageContent, MessagePayload, Record, ToolResultPayload,
    ToolUsePayload,
};

const UNKNOWN: &str = "unknown";

/// Extract the renderable text of a record, or `None` when it has nothing to show.
pub fn extract_content(record: &Record) -> Option<String> {
    let text = match record {
        Record::User(payload) => extract_user(payload),
        Record::Assistant(payload) => extract_assistant(payload),
        Record::ToolUse(payload) => Some(extract_tool_use(payload)),
        Record::ToolResult(payload) => Some(extract_tool_result(payload)),
    }?;

    if text.is_empty() { None } else { Some(text) }
}

fn extract_user(payload: &MessagePayload) -> Option<String> {
    match payload.content.as_ref()? {
        MessageContent::Text(text) => Some(text.clone()),
        MessageContent::Blocks(items) => {
            let mut texts: Vec<String> = Vec::new();
            for item in items {
                match item {
                    ContentItem::Bare(text) => texts.push(text.clone()),
                    ContentItem::Block(ContentBlock::Text { text }) => texts.push(text.clone()),
                    ContentItem::Block(ContentBlock::Image { source }) => {
                        let media_type = source
                            .as_ref()
                            .and_then(|s| s.media_type.as_deref())
                            .unwrap_or(UNKNOWN);
                        texts.push(format!("[Image: {}]", media_type));
                    }
                    ContentItem::Block(ContentBlock::ToolResult { tool_use_id, content }) => {
                        texts.push(format!(
                            "[Tool Result: {}]",
                            tool_use_id.as_deref().unwrap_or(UNKNOWN)
                        ));
                        match content {
                            Some(MessageContent::Text(text)) => texts.push(text.clone()),
                            Some(MessageContent::Blocks(parts)) => texts.extend(text_parts(parts)),
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
            Some(join_trimmed(&texts))
        }
        MessageContent::Other(_) => None,
    }
}

fn extract_assistant(payload: &MessagePayload) -> Option<String> {
    match payload.content.as_ref()? {
        MessageContent::Text(text) => Some(text.clone()),
        MessageContent::Blocks(items) => {
            let mut texts: Vec<String> = Vec::new();
            for item in items {
                match item {
                    ContentItem::Bare(text) => texts.push(text.clone()),
                    ContentItem::Block(ContentBlock::Text { text }) => texts.push(text.clone()),
                    ContentItem::Block(ContentBlock::ToolUse { name, input }) => {
                        texts.push(format!(
                            "\n**Tool Use**: `{}`\n",
                            name.as_deref().unwrap_or(UNKNOWN)
                        ));
                        if let Some(block) = render_tool_input(input.as_ref()) {
                            texts.push(block);
                        }
                    }
                    _ => {}
                }
            }
            Some(join_trimmed(&texts))
        }
        MessageContent::Other(_) => None,
    }
}

fn extract_tool_use(payload: &ToolUsePayload) -> String {
    let mut result = format!("**Tool Use**: `{}`\n", payload.name.as_deref().unwrap_or(UNKNOWN));
    if let Some(block) = render_tool_input(payload.input.as_ref()) {
        result.push_str(&block);
    }
    result
}

fn extract_tool_result(payload: &ToolResultPayload) -> String {
    let mut result =
        format!("**Tool Result**: `{}`\n", payload.tool_use_id.as_deref().unwrap_or(UNKNOWN));
    match &payload.content {
        Some(MessageContent::Text(text)) => result.push_str(&fenced(text)),
        Some(MessageContent::Blocks(parts)) => {
            for text in text_parts(parts) {
                result.push_str(&fenced(&text));
            }
        }
        _ => {}
    }
    result
}

/// Pretty-printed JSON block for a tool input, only when it is a non-empty object.
fn render_tool_input(input: Option<&Value>) -> Option<String> {
    let object = input?.as_object()?;
    if object.is_empty() {
        return None;
    }
    let pretty = serde_json::to_string_pretty(object).ok()?;
    Some(format!("```json\n{}\n```\n", pretty))
}

/// Text of the `text` sub-blocks of a tool result; other sub-blocks are ignored.
fn text_parts(items: &[ContentItem]) -> impl Iterator<Item = String> + '_ {
    items.iter().filter_map(|item| match item {
        ContentItem::Block(ContentBlock::Text { text }) => Some(text.clone()),
        _ => None,
    })
}

fn fenced(text: &str) -> String {
    format!("```\n{}\n```\n", text)
}

fn join_trimmed(texts: &[String]) -> String {
    texts.join("\n").trim().to_string()
}
