//! Error types for the story rewriter.

use std::fmt;
use std::path::PathBuf;

/// Filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Reading the story file.
    Read,
    /// Writing the rewritten story file back.
    Write,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors raised while rewriting story files.
#[derive(Debug, thiserror::Error)]
pub enum StoryFixError {
    /// A story file could not be read or written.
    #[error("Failed to {op} {}: {source}", path.display())]
    FileAccess {
        /// Which operation failed.
        op: FileOp,
        /// Full path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A target name resolves to a location outside the stories directory.
    #[error("Path traversal detected: {} is outside of {}", path.display(), root.display())]
    OutsideRoot {
        /// Offending target path.
        path: PathBuf,
        /// Stories directory it must stay within.
        root: PathBuf,
    },
    /// The configuration file exists but could not be loaded.
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Parser or I/O message.
        message: String,
    },
}

impl StoryFixError {
    /// Whether this error means the file is missing on disk.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
