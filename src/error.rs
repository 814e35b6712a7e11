//! Error types for the ISAAC32 tools.
//!
//! The generator itself cannot fail. Errors only come from the tools built
//! on top of it: malformed size tokens, refused file pairs, and I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced by the command-line tools.
#[derive(Debug)]
pub enum ToolError {
    /// The size token does not follow `<digits>[K|M|G|T][i][B]` or `max`.
    InvalidSize(String),

    /// The size token is well formed but does not fit in a `u64`.
    SizeOverflow(String),

    /// Source and destination name the same file.
    SamePath(PathBuf),

    /// Reading or writing `path` failed.
    Io {
        /// File (or stream name) the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ToolError {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a write to a pipe whose reader went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ToolError::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::InvalidSize(token) => write!(f, "Invalid output size: {token:?}"),
            ToolError::SizeOverflow(token) => {
                write!(f, "Output size is too large: {token:?}")
            }
            ToolError::SamePath(path) => write!(
                f,
                "Source file is same as destination: {}",
                path.display()
            ),
            ToolError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
