//! Application services - orchestrate use cases.

pub mod bundle_service;

pub use bundle_service::{BundleOutcome, BundleService, BundleSummary, PipelineStep};
