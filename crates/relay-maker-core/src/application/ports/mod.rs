//! Application ports (traits) for external dependencies.
//!
//! Ports define what the pipeline needs from the outside world. Adapters in
//! `relay-maker-adapters` and the CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `CommandRunner`: external processes (git, composer, rename script)
//!   - `Filesystem`: directory checks and removal
//!   - `Prompt`: operator confirmation
//!   - `ScaffoldReporter`: preview and progress display

pub mod output;

pub use output::{CommandOutput, CommandRunner, Filesystem, Prompt, ScaffoldReporter};
