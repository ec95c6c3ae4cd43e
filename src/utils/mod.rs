pub mod lock;
pub mod paths;

pub use lock::FileLock;
pub use paths::{document_path, relative_document_path, validate_session_id};
