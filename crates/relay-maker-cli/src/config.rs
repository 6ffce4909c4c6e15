//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! [`PipelineSettings`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `RELAY_MAKER_<SECTION>__<KEY>`, e.g.
//!    `RELAY_MAKER_TOOLS__COMPOSER=/opt/composer.phar`
//! 3. Config file (TOML)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use relay_maker_core::application::{
    PipelineSettings,
    settings::{
        DEFAULT_BUNDLES_DIR, DEFAULT_DEV_CONSTRAINT, DEFAULT_RENAME_SCRIPT, DEFAULT_TEMPLATE_URL,
    },
};
use relay_maker_core::domain::DEFAULT_CATEGORY;

const ENV_PREFIX: &str = "RELAY_MAKER";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fallbacks for `bundle` options.
    pub defaults: Defaults,
    /// Where the bundle template comes from.
    pub template: TemplateConfig,
    /// External tool executables.
    pub tools: ToolsConfig,
    /// Host project layout.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub vendor: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub url: String,
    pub rename_script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub git: String,
    pub composer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub root: Option<PathBuf>,
    pub bundles_dir: String,
    pub dev_constraint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                vendor: None,
                category: DEFAULT_CATEGORY.into(),
            },
            template: TemplateConfig {
                url: DEFAULT_TEMPLATE_URL.into(),
                rename_script: DEFAULT_RENAME_SCRIPT.into(),
            },
            tools: ToolsConfig {
                git: "git".into(),
                composer: "composer".into(),
            },
            project: ProjectConfig {
                root: None,
                bundles_dir: DEFAULT_BUNDLES_DIR.into(),
                dev_constraint: DEFAULT_DEV_CONSTRAINT.into(),
            },
            output: OutputConfig {
                no_color: false,
                progress: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::load_from(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from<F>(file: F, env: Environment) -> anyhow::Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(
                Config::try_from(&Self::default())
                    .context("Failed to encode default configuration")?,
            )
            .add_source(file)
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.relay-maker.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("at", "digital-blueprint", "relay-maker")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".relay-maker.toml"))
    }

    /// Pipeline settings for a run rooted at `project_root`.
    pub fn pipeline_settings(&self, project_root: &Path) -> PipelineSettings {
        PipelineSettings {
            bundles_dir: self.project.bundles_dir.clone(),
            template_url: self.template.url.clone(),
            rename_script: self.template.rename_script.clone(),
            git: self.tools.git.clone(),
            composer: self.tools.composer.clone(),
            dev_constraint: self.project.dev_constraint.clone(),
            ..PipelineSettings::new(project_root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_toml(toml: &str) -> anyhow::Result<AppConfig> {
        AppConfig::load_from(
            File::from_str(toml, FileFormat::Toml),
            Environment::with_prefix("RELAY_MAKER_TEST_UNSET"),
        )
    }

    #[test]
    fn default_category_is_relay() {
        assert_eq!(AppConfig::default().defaults.category, "relay");
    }

    #[test]
    fn default_progress_is_on() {
        assert!(AppConfig::default().output.progress);
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(load_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let cfg = load_toml(
            r#"
            [defaults]
            vendor = "acme"

            [tools]
            composer = "/opt/composer.phar"

            [project]
            bundles_dir = "packages"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.defaults.vendor.as_deref(), Some("acme"));
        assert_eq!(cfg.defaults.category, "relay");
        assert_eq!(cfg.tools.composer, "/opt/composer.phar");
        assert_eq!(cfg.tools.git, "git");
        assert_eq!(cfg.project.bundles_dir, "packages");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(load_toml("[tools\ngit = ").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/relay-maker.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn pipeline_settings_carry_config() {
        let mut cfg = AppConfig::default();
        cfg.tools.git = "/usr/bin/git".into();
        cfg.project.dev_constraint = "dev-main".into();

        let settings = cfg.pipeline_settings(Path::new("/srv/app"));
        assert_eq!(settings.project_root, PathBuf::from("/srv/app"));
        assert_eq!(settings.git, "/usr/bin/git");
        assert_eq!(settings.dev_constraint, "dev-main");
        assert_eq!(settings.template_url, DEFAULT_TEMPLATE_URL);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
