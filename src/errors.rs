//! Error types for repodump.

use std::path::PathBuf;

/// Errors raised while walking the filesystem.
///
/// Per-file read failures during content extraction are *not* errors;
/// they are downgraded to an inline line in the output. Only failures
/// to list or stat the tree itself surface here.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for repodump operations.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("failed to write output to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map an error to its exit code.
pub fn exit_code(error: &DumpError) -> i32 {
    match error {
        DumpError::PathNotFound(_) => 3,
        DumpError::Walk(_) => 2,
        DumpError::WriteOutput { .. } => 4,
        DumpError::Serialization(_) => 1,
        DumpError::Io(_) => 1,
    }
}
