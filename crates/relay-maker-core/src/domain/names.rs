//! Derived identifiers of a bundle.
//!
//! [`BundleNames`] is a view over a [`BundleRequest`]: each accessor
//! recomputes its identifier from the request fields with the transforms in
//! [`crate::domain::naming`]. Nothing is cached.

use serde::Serialize;

use crate::domain::{
    naming::{kebab, pascal, plural, snake},
    request::BundleRequest,
};

/// PHP namespace delimiter.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Suffix shared by the namespace leaf, bundle class, and package name.
pub const BUNDLE_SUFFIX: &str = "Bundle";

/// Fixed tail of every serialization group.
pub const SERIALIZATION_GROUP_SUFFIX: &str = ":some-group";

/// Borrowed view computing every derived identifier of a request.
#[derive(Debug, Clone, Copy)]
pub struct BundleNames<'a> {
    request: &'a BundleRequest,
}

impl<'a> BundleNames<'a> {
    pub fn new(request: &'a BundleRequest) -> Self {
        Self { request }
    }

    /// `dbp/relay-greeting-bundle`
    pub fn composer_package_name(&self) -> String {
        format!(
            "{}/{}-{}-bundle",
            kebab(self.request.vendor()),
            kebab(self.request.category()),
            kebab(self.request.unique_name()),
        )
    }

    /// `["Dbp", "Relay", "Greeting"]`; the last segment is suffixed with
    /// [`BUNDLE_SUFFIX`] in [`Self::namespace`].
    pub fn namespace_segments(&self) -> [String; 3] {
        [
            pascal(self.request.vendor()),
            pascal(self.request.category()),
            pascal(self.request.unique_name()),
        ]
    }

    /// `Dbp\Relay\GreetingBundle`
    pub fn namespace(&self) -> String {
        format!(
            "{}{BUNDLE_SUFFIX}",
            self.namespace_segments().join(NAMESPACE_SEPARATOR)
        )
    }

    /// `DbpRelayGreetingBundle`
    pub fn bundle_name(&self) -> String {
        format!("{}{BUNDLE_SUFFIX}", self.namespace_segments().concat())
    }

    /// `dbp_relay_greeting`
    pub fn config_key(&self) -> String {
        snake(&format!(
            "{} {} {}",
            self.request.vendor(),
            self.request.category(),
            self.request.unique_name(),
        ))
    }

    /// `Greeting`
    pub fn class_name(&self) -> String {
        pascal(self.request.example_entity())
    }

    /// `GreetingGreeting`
    pub fn short_name(&self) -> String {
        format!(
            "{}{}",
            pascal(self.request.unique_name()),
            pascal(self.request.example_entity()),
        )
    }

    /// `/greeting/greetings`
    pub fn resource_path(&self) -> String {
        format!(
            "/{}/{}",
            kebab(self.request.unique_name()),
            kebab(&plural(self.request.example_entity())),
        )
    }

    /// `GreetingGreeting:some-group`
    pub fn serialization_group(&self) -> String {
        format!("{}{SERIALIZATION_GROUP_SUFFIX}", self.short_name())
    }

    /// The friendly name, verbatim.
    pub fn display_tag(&self) -> &'a str {
        self.request.friendly_name()
    }

    /// `dbp-relay-greeting-bundle`
    pub fn repository_name(&self) -> String {
        format!(
            "{}-{}-{}-bundle",
            kebab(self.request.vendor()),
            kebab(self.request.category()),
            kebab(self.request.unique_name()),
        )
    }

    /// Directory the template is cloned into. Same as the repository name.
    pub fn directory_name(&self) -> String {
        self.repository_name()
    }

    /// Every identifier in display order, paired with its label.
    pub fn preview(&self) -> Vec<PreviewRow> {
        vec![
            PreviewRow::new("Composer Package Name", self.composer_package_name()),
            PreviewRow::new("PHP Namespace", self.namespace()),
            PreviewRow::new("Symfony Bundle Name", self.bundle_name()),
            PreviewRow::new("Bundle Config Key", self.config_key()),
            PreviewRow::new("PHP Class Name", self.class_name()),
            PreviewRow::new("API-Platform Short Name", self.short_name()),
            PreviewRow::new("Resource Path", self.resource_path()),
            PreviewRow::new("Serialization Group", self.serialization_group()),
            PreviewRow::new("Open API Tag", self.display_tag()),
            PreviewRow::new("GIT Repository Name", self.repository_name()),
        ]
    }
}

/// One labelled line of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub label: &'static str,
    pub value: String,
}

impl PreviewRow {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}
