//! Implementation of the `relay-maker bundle` command.
//!
//! Responsibility: translate CLI arguments and config into a
//! `BundleRequest`, wire the production adapters into `BundleService`, and
//! display the outcome. Naming and sequencing live in the core.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use relay_maker_adapters::{LocalFilesystem, SystemCommandRunner};
use relay_maker_core::{
    application::{BundleOutcome, BundleService},
    domain::{BundleRequest, PreviewRow},
    error::MakerError,
};

use crate::{
    cli::{BundleArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::TerminalReporter,
    prompt::TerminalPrompt,
};

/// Execute the `relay-maker bundle` command.
///
/// Dispatch sequence:
/// 1. Merge arguments with config defaults and validate them
/// 2. Resolve the host project root
/// 3. Run the pipeline (preview, confirmation, steps)
/// 4. Report the outcome
#[instrument(skip_all)]
pub fn execute(args: BundleArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Build the request; the first missing option is reported.
    let request = build_request(&args, &config)?;

    // 2. Where the bundle goes.
    let project_root = resolve_project_root(&args, &config)?;
    debug!(root = %project_root.display(), "Project root resolved");

    let service = BundleService::new(
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
        config.pipeline_settings(&project_root),
    );

    // 3. Preview, confirm, run.
    let show_progress = config.output.progress && !args.no_progress;
    let reporter = TerminalReporter::new(&output, show_progress)
        .echo_preview_to_stderr(!request.skips_confirmation());
    let outcome = match service.run(&request, &TerminalPrompt, &reporter) {
        Ok(outcome) => outcome,
        Err(e) => {
            reporter.abandon();
            return Err(e.into());
        }
    };

    // 4. Report.
    if output.format() == OutputFormat::Json {
        let report = JsonReport::new(&outcome, reporter.captured_preview());
        output.json(&report)?;
        return Ok(());
    }

    match outcome {
        BundleOutcome::Declined => {
            output.print("aborting")?;
        }
        BundleOutcome::DryRun => {
            output.info("Dry run: no changes were made")?;
        }
        BundleOutcome::Created(summary) => {
            info!(package = %summary.package_name, "Bundle created");
            output.print("")?;
            for line in summary.lines() {
                output.print(&line)?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// CLI values win; `defaults.*` from config fill the gaps.
fn build_request(args: &BundleArgs, config: &AppConfig) -> CliResult<BundleRequest> {
    BundleRequest::builder()
        .vendor(args.vendor.clone().or(config.defaults.vendor.clone()))
        .category(
            args.category
                .clone()
                .unwrap_or_else(|| config.defaults.category.clone()),
        )
        .unique_name(args.unique_name.clone())
        .friendly_name(args.friendly_name.clone())
        .example_entity(args.example_entity.clone())
        .dry_run(args.dry_run)
        .no_confirm(args.no_confirm)
        .build()
        .map_err(|e| CliError::Core(MakerError::from(e)))
}

/// `--project-root`, then `project.root` from config, then the current
/// directory. Always absolute: git runs inside the root and receives the
/// clone target as an argument.
fn resolve_project_root(args: &BundleArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let root = match args.project_root.as_ref().or(config.project.root.as_ref()) {
        Some(root) => std::path::absolute(root),
        None => std::env::current_dir(),
    };
    root.map_err(|e| CliError::IoError {
        message: "Failed to resolve the project root".into(),
        source: e,
    })
}

/// Machine-readable result for `--output-format json`.
#[derive(Debug, Serialize)]
struct JsonReport {
    outcome: &'static str,
    names: Vec<PreviewRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<PathBuf>,
}

impl JsonReport {
    fn new(outcome: &BundleOutcome, names: Vec<PreviewRow>) -> Self {
        let (label, location) = match outcome {
            BundleOutcome::Created(summary) => ("created", Some(summary.location.clone())),
            BundleOutcome::DryRun => ("dry-run", None),
            BundleOutcome::Declined => ("declined", None),
        };
        Self {
            outcome: label,
            names,
            location,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use relay_maker_core::application::BundleSummary;

    use super::*;

    fn args() -> BundleArgs {
        BundleArgs {
            vendor: Some("dbp".into()),
            category: None,
            unique_name: Some("greeting".into()),
            friendly_name: Some("Greeting Bundle".into()),
            example_entity: Some("greeting".into()),
            dry_run: false,
            no_confirm: false,
            project_root: None,
            no_progress: false,
        }
    }

    #[test]
    fn request_uses_default_category() {
        let request = build_request(&args(), &AppConfig::default()).unwrap();
        assert_eq!(request.category(), "relay");
        assert_eq!(
            request.names().composer_package_name(),
            "dbp/relay-greeting-bundle"
        );
    }

    #[test]
    fn config_vendor_fills_missing_flag() {
        let mut config = AppConfig::default();
        config.defaults.vendor = Some("acme".into());
        config.defaults.category = "core".into();

        let mut a = args();
        a.vendor = None;
        let request = build_request(&a, &config).unwrap();
        assert_eq!(request.vendor(), "acme");
        assert_eq!(request.category(), "core");
    }

    #[test]
    fn flag_beats_config_vendor() {
        let mut config = AppConfig::default();
        config.defaults.vendor = Some("acme".into());
        let request = build_request(&args(), &config).unwrap();
        assert_eq!(request.vendor(), "dbp");
    }

    #[test]
    fn missing_option_is_a_user_error() {
        let mut a = args();
        a.friendly_name = None;
        let err = build_request(&a, &AppConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "--friendly-name must be provided");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn project_root_precedence() {
        let mut config = AppConfig::default();
        config.project.root = Some(PathBuf::from("/from/config"));

        let mut a = args();
        assert_eq!(
            resolve_project_root(&a, &config).unwrap(),
            Path::new("/from/config")
        );

        a.project_root = Some(PathBuf::from("/from/flag"));
        assert_eq!(
            resolve_project_root(&a, &config).unwrap(),
            Path::new("/from/flag")
        );
    }

    #[test]
    fn relative_project_root_is_made_absolute() {
        let mut a = args();
        a.project_root = Some(PathBuf::from("app"));

        let root = resolve_project_root(&a, &AppConfig::default()).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap().join("app"));
    }

    #[test]
    fn relative_config_root_is_made_absolute() {
        let mut config = AppConfig::default();
        config.project.root = Some(PathBuf::from("srv/app"));

        let root = resolve_project_root(&args(), &config).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("srv/app"));
    }

    #[test]
    fn json_report_for_created_bundle() {
        let outcome = BundleOutcome::Created(BundleSummary {
            package_name: "dbp/relay-greeting-bundle".into(),
            location: PathBuf::from("/srv/app/bundles/dbp-relay-greeting-bundle"),
        });
        let row = PreviewRow::new("Composer Package Name", "dbp/relay-greeting-bundle");
        let report = JsonReport::new(&outcome, vec![row]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["outcome"], "created");
        assert_eq!(value["names"][0]["label"], "Composer Package Name");
        assert_eq!(
            value["location"],
            "/srv/app/bundles/dbp-relay-greeting-bundle"
        );
    }

    #[test]
    fn json_report_for_dry_run_has_no_location() {
        let value = serde_json::to_value(JsonReport::new(&BundleOutcome::DryRun, vec![])).unwrap();
        assert_eq!(value["outcome"], "dry-run");
        assert!(value.get("location").is_none());
    }
}
