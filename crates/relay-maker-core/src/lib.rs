//! Relay Maker Core - naming rules and the bundle pipeline.
//!
//! This crate provides the domain and application layers of the bundle
//! maker, following a ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         relay-maker-cli (CLI)           │
//! │  (prompt, progress bar, config, output) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (BundleService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (CommandRunner, Filesystem, Prompt, ...)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   relay-maker-adapters (Infrastructure) │
//! │ (SystemCommandRunner, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//!
//!        Domain Layer (pure): naming, BundleRequest, BundleNames
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use relay_maker_core::domain::BundleRequest;
//!
//! let request = BundleRequest::builder()
//!     .vendor("dbp".to_string())
//!     .unique_name("greeting".to_string())
//!     .friendly_name("Greeting Bundle".to_string())
//!     .example_entity("greeting".to_string())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.names().composer_package_name(), "dbp/relay-greeting-bundle");
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BundleOutcome, BundleService, BundleSummary, PipelineSettings, PipelineStep,
        ports::{CommandOutput, CommandRunner, Filesystem, Prompt, ScaffoldReporter},
    };
    pub use crate::domain::{BundleNames, BundleRequest, PreviewRow};
    pub use crate::error::{MakerError, MakerResult};
}
