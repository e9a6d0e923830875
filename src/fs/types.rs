//! File System Types
//!
//! Error type for the virtual file system.

use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("File not found: {name}")]
    NotFound { name: String },

    #[error("File already exists: {name}")]
    AlreadyExists { name: String },
}

impl FsError {
    pub fn not_found(name: impl Into<String>) -> Self {
        FsError::NotFound { name: name.into() }
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        FsError::AlreadyExists { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FsError::not_found("nope.txt").to_string(),
            "File not found: nope.txt"
        );
        assert_eq!(
            FsError::already_exists("a.txt").to_string(),
            "File already exists: a.txt"
        );
    }
}
