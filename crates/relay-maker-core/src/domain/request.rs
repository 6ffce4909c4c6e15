//! The bundle request: the one value object constructed per run.

use crate::domain::{error::DomainError, names::BundleNames};

/// Category used when the caller does not supply one.
pub const DEFAULT_CATEGORY: &str = "relay";

/// Validated input for creating a bundle.
///
/// Construct with [`BundleRequest::builder`]; [`BundleRequestBuilder::build`]
/// refuses to produce a request while any required field is missing or
/// empty. Once built, the request is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    vendor: String,
    category: String,
    unique_name: String,
    friendly_name: String,
    example_entity: String,
    dry_run: bool,
    no_confirm: bool,
}

impl BundleRequest {
    pub fn builder() -> BundleRequestBuilder {
        BundleRequestBuilder::default()
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unique_name(&self) -> &str {
        &self.unique_name
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn example_entity(&self) -> &str {
        &self.example_entity
    }

    /// Compute and display names only; touch nothing.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Skip the interactive confirmation.
    pub fn skips_confirmation(&self) -> bool {
        self.no_confirm
    }

    /// Derived identifiers for this request.
    pub fn names(&self) -> BundleNames<'_> {
        BundleNames::new(self)
    }
}

/// Builder for [`BundleRequest`].
///
/// Setters take `Option`s where the CLI may not have a value, so the
/// presence check lives in one place ([`Self::build`]) instead of in every
/// caller.
#[derive(Debug, Clone, Default)]
pub struct BundleRequestBuilder {
    vendor: Option<String>,
    category: Option<String>,
    unique_name: Option<String>,
    friendly_name: Option<String>,
    example_entity: Option<String>,
    dry_run: bool,
    no_confirm: bool,
}

impl BundleRequestBuilder {
    pub fn vendor(mut self, vendor: impl Into<Option<String>>) -> Self {
        self.vendor = vendor.into();
        self
    }

    /// Falls back to [`DEFAULT_CATEGORY`] when `None`.
    pub fn category(mut self, category: impl Into<Option<String>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn unique_name(mut self, unique_name: impl Into<Option<String>>) -> Self {
        self.unique_name = unique_name.into();
        self
    }

    pub fn friendly_name(mut self, friendly_name: impl Into<Option<String>>) -> Self {
        self.friendly_name = friendly_name.into();
        self
    }

    pub fn example_entity(mut self, example_entity: impl Into<Option<String>>) -> Self {
        self.example_entity = example_entity.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn no_confirm(mut self, no_confirm: bool) -> Self {
        self.no_confirm = no_confirm;
        self
    }

    /// Validate presence of every required option and build the request.
    ///
    /// Options are checked in CLI order, so the first missing one is named.
    pub fn build(self) -> Result<BundleRequest, DomainError> {
        let vendor = required(self.vendor, "vendor")?;
        let unique_name = required(self.unique_name, "unique-name")?;
        let friendly_name = required(self.friendly_name, "friendly-name")?;
        let example_entity = required(self.example_entity, "example-entity")?;

        Ok(BundleRequest {
            vendor,
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            unique_name,
            friendly_name,
            example_entity,
            dry_run: self.dry_run,
            no_confirm: self.no_confirm,
        })
    }
}

fn required(value: Option<String>, option: &'static str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::MissingRequiredOption { option }),
    }
}
