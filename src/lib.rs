//! shitos - an in-memory toy operating system shell
//!
//! This library provides the session core: an insertion-ordered virtual
//! filesystem, a calculator, a session clock, and the shell dispatch
//! state machine. The binary in `main.rs` wires it to stdin/stdout.

pub mod calc;
pub mod config;
pub mod fs;
pub mod session;
pub mod shell;

pub use fs::{FsError, MemFs};
pub use shell::{Shell, ShellOptions, ShellState};
