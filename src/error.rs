//! Crate-level error types.
//!
//! The camera itself never fails: degenerate input is clamped or ignored.
//! Errors only come from the edges of the crate (option files, mesh
//! uploads).

use std::fmt;

/// Errors produced by the orbview crate.
#[derive(Debug)]
pub enum OrbviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Mesh data rejected before upload.
    InvalidMesh(String),
}

impl fmt::Display for OrbviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidMesh(msg) => write!(f, "invalid mesh: {msg}"),
        }
    }
}

impl std::error::Error for OrbviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::InvalidMesh(_) => None,
        }
    }
}

impl From<std::io::Error> for OrbviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_context() {
        let err = OrbviewError::InvalidMesh("index 9 out of range".into());
        assert_eq!(err.to_string(), "invalid mesh: index 9 out of range");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = OrbviewError::from(io);
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
