//! Tool library documents
//!
//! This module contains the exported tool-library types:
//! - ToolLibraryDocument: the top-level `{"data": [...]}` container
//! - ToolRecord: one cutting-tool definition, kept as an ordered JSON object

pub mod document;
pub mod record;

pub use document::ToolLibraryDocument;
pub use record::ToolRecord;
