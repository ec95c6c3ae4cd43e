use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::index_storage::{IndexEntry, update_index};
use crate::models::ConversationMetadata;
use crate::utils::{document_path, validate_session_id};

/// Write a rendered document under `output_dir/YYYY/MM-DD/` and record it in the
/// index. Returns the document path.
pub fn save_conversation(
    markdown: &str,
    output_dir: &Path,
    metadata: &ConversationMetadata,
) -> Result<PathBuf> {
    validate_session_id(&metadata.session_id)?;

    let path = document_path(output_dir, metadata.date, &metadata.session_id);
    if let Some(date_dir) = path.parent() {
        fs::create_dir_all(date_dir)
            .with_context(|| format!("Failed to create directory: {}", date_dir.display()))?;
    }

    fs::write(&path, markdown)
        .with_context(|| format!("Failed to write conversation: {}", path.display()))?;
    info!("Exported: {}", path.display());

    update_index(output_dir, &IndexEntry::from(metadata))?;

    Ok(path)
}
