//! Virtual File System
//!
//! In-memory, non-persistent name -> content store for the session.

pub mod in_memory_fs;
pub mod types;

pub use in_memory_fs::MemFs;
pub use types::FsError;
