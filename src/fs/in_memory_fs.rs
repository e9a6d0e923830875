//! In-Memory File System Implementation
//!
//! A flat, insertion-ordered collection of named text files. Nothing
//! survives the process: there is no delete and no persistence.

use indexmap::IndexMap;

use super::types::FsError;

/// In-memory virtual file system.
///
/// File names are unique; `create_file` rejects duplicates and
/// `write_file` has upsert semantics. Listing preserves insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemFs {
    files: IndexMap<String, String>,
}

impl MemFs {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial files, in the given order.
    pub fn with_files<'a, I>(files: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fs = Self::new();
        for (name, content) in files {
            fs.files.insert(name.to_string(), content.to_string());
        }
        fs
    }

    /// Create a new file. Fails if a file with the same name exists.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<(), FsError> {
        if self.files.contains_key(name) {
            return Err(FsError::already_exists(name));
        }
        self.files.insert(name.to_string(), content.to_string());
        Ok(())
    }

    /// Check whether a file with the given name exists.
    pub fn file_exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Read the contents of a file.
    pub fn read_file(&self, name: &str) -> Result<&str, FsError> {
        self.files
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| FsError::not_found(name))
    }

    /// Write content to a file, creating it if it does not exist.
    pub fn write_file(&mut self, name: &str, content: &str) {
        self.files.insert(name.to_string(), content.to_string());
    }

    /// List all file names in insertion order.
    pub fn list_files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files exist.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
