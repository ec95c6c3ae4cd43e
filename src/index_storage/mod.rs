//! Persistent state under the output root
//!
//! - `index.md`: Markdown list of every exported conversation, newest export first
//! - `.exported_state`: Session ids already handled by hook mode
//! - `.index.lock`: Lock file serializing index updates

pub mod exported_state;
pub mod index_file;

pub use exported_state::ExportedState;
pub use index_file::{IndexEntry, insert_entry, update_index};
