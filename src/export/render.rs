//! Markdown rendering of a whole conversation.

use super::extract::extract_content;
use super::frontmatter::{DATE_FORMAT, frontmatter_lines};
use crate::models::{ConversationMetadata, Record, Role};

pub const DEFAULT_AGENT_NAME: &str = "Claude";

/// Sectioning state: consecutive records with the same role share one section.
enum SectionState {
    Idle,
    Open { role: Role, fragments: Vec<String> },
}

/// Accumulates rendered sections into the output lines.
struct SectionWriter<'a> {
    agent_name: &'a str,
    output: Vec<String>,
    state: SectionState,
}

impl<'a> SectionWriter<'a> {
    fn new(agent_name: &'a str, output: Vec<String>) -> Self {
        Self { agent_name, output, state: SectionState::Idle }
    }

    fn push(&mut self, role: Role, fragment: String) {
        if let SectionState::Open { role: open_role, fragments } = &mut self.state {
            if *open_role == role {
                fragments.push(fragment);
                return;
            }
        }

        if let SectionState::Open { role: closed_role, fragments } =
            std::mem::replace(&mut self.state, SectionState::Idle)
        {
            self.write_section(closed_role, &fragments);
            self.output.push(String::new());
            self.output.push("---".to_string());
            self.output.push(String::new());
        }
        self.state = SectionState::Open { role, fragments: vec![fragment] };
    }

    /// Flush the last open section, without a trailing rule.
    fn finish(mut self) -> Vec<String> {
        if let SectionState::Open { role, fragments } =
            std::mem::replace(&mut self.state, SectionState::Idle)
        {
            self.write_section(role, &fragments);
        }
        self.output
    }

    fn write_section(&mut self, role: Role, fragments: &[String]) {
        self.output.push(format!("## {}\n\n{}", role.heading(self.agent_name), fragments.join("\n")));
    }
}

/// Render a conversation as Markdown with a frontmatter header.
pub fn render_document(
    records: &[Record],
    metadata: &ConversationMetadata,
    agent_name: &str,
) -> String {
    let date = metadata.date.format(DATE_FORMAT).to_string();

    let mut output = frontmatter_lines(metadata);
    output.push(String::new());
    output.push(format!("# {}", metadata.title));
    output.push(String::new());
    output.push(format!("**Session ID**: `{}`", metadata.session_id));
    output.push(format!("**Date**: {}", date));
    output.push(format!("**Messages**: {}", metadata.message_count));
    if !metadata.tags.is_empty() {
        output.push(format!("**Tags**: {}", metadata.tags.join(", ")));
    }
    output.push(String::new());
    output.push("---".to_string());
    output.push(String::new());

    let mut sections = SectionWriter::new(agent_name, output);
    for record in records {
        if let Some(content) = extract_content(record) {
            sections.push(record.role(), content);
        }
    }

    let mut document = sections.finish().join("\n");
    if !document.ends_with('\n') {
        document.push('\n');
    }
    document
}
