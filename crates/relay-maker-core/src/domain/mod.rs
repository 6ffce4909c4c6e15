//! Core domain layer for the bundle maker.
//!
//! Pure logic only: no filesystem, no processes, no terminal. The
//! application layer drives these types through ports.
//!
//! - [`naming`]: the five case transforms
//! - [`request`]: the validated [`BundleRequest`]
//! - [`names`]: every identifier derived from a request

pub mod error;
pub mod names;
pub mod naming;
pub mod request;

pub use error::{DomainError, ErrorCategory};
pub use names::{BundleNames, NAMESPACE_SEPARATOR, PreviewRow};
pub use request::{BundleRequest, BundleRequestBuilder, DEFAULT_CATEGORY};
