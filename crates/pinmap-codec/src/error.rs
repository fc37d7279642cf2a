//! Error types for arrangement I/O.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use pinmap_core::ConfigError;

/// Errors from reading or writing an arrangement file.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file is empty: the parameter line is mandatory.
    MissingParameterLine,
    /// A line could not be parsed.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What went wrong on that line.
        detail: String,
    },
    /// The header parsed but the parameters fail the validity predicate.
    InvalidParameters(ConfigError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingParameterLine => write!(f, "missing parameter line"),
            Self::MalformedLine { line, detail } => {
                write!(f, "malformed line {line}: {detail}")
            }
            Self::InvalidParameters(e) => write!(f, "invalid parameters: {e}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidParameters(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for CodecError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidParameters(e)
    }
}

/// Errors from the coordinate export.
///
/// Export succeeds or fails as a whole; there is no per-file reporting.
#[derive(Debug)]
pub enum ExportError {
    /// An I/O error while recreating the directory or writing a file.
    Io(io::Error),
    /// The arrangement path has no file stem to name the directory after.
    InvalidPath {
        /// The offending path.
        path: PathBuf,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidPath { path } => {
                write!(f, "path {} has no file stem", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidPath { .. } => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
