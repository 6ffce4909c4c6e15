//! Infrastructure adapters for relay-maker.
//!
//! This crate implements the ports defined in
//! `relay-maker-core::application::ports`. It contains all process and
//! filesystem I/O.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{Invocation, RecordingCommandRunner, SystemCommandRunner};
