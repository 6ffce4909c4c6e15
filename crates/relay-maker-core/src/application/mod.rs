//! Application layer for the bundle maker.
//!
//! This layer contains:
//! - **Services**: the bundle pipeline (`BundleService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Settings**: where the pipeline runs and which tools it calls
//! - **Errors**: application-specific error types
//!
//! Naming rules live in `crate::domain`; this layer only sequences effects.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

pub use services::{BundleOutcome, BundleService, BundleSummary, PipelineStep};

pub use ports::{CommandOutput, CommandRunner, Filesystem, Prompt, ScaffoldReporter};

pub use error::ApplicationError;
pub use settings::PipelineSettings;
