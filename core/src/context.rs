//! Context types for parsing.
use std::path::PathBuf;

/// Parsing context for a single rust source file.
pub struct ParseFileContext {
    /// Source code content
    pub source_code: String,
    /// Full path to the source file.
    pub file_path: PathBuf,
}
