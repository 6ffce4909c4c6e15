//! Integration tests for `relay-maker bundle`.
//!
//! The full pipeline runs against fake `git` and `composer` scripts (unix
//! only) selected through `RELAY_MAKER_TOOLS__*` overrides.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const GREETING: [&str; 4] = [
    "--vendor=dbp",
    "--unique-name=greeting",
    "--friendly-name=Greeting Bundle",
    "--example-entity=greeting",
];

fn relay_maker(project: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("relay-maker");
    cmd.current_dir(project.path())
        .env("XDG_CONFIG_HOME", project.path())
        .env("HOME", project.path())
        .env_remove("RUST_LOG")
        .env_remove("RELAY_MAKER_DEFAULTS__VENDOR");
    cmd
}

fn clone_dir(project: &TempDir) -> std::path::PathBuf {
    project.path().join("bundles/dbp-relay-greeting-bundle")
}

#[test]
fn dry_run_prints_names_and_touches_nothing() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args(["bundle", "--dry-run", "--no-confirm"])
        .args(GREETING)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    Composer Package Name: dbp/relay-greeting-bundle",
        ))
        .stdout(predicate::str::contains("Dbp\\Relay\\GreetingBundle"))
        .stdout(predicate::str::contains("DbpRelayGreetingBundle"))
        .stdout(predicate::str::contains("dbp_relay_greeting"))
        .stdout(predicate::str::contains("/greeting/greetings"))
        .stdout(predicate::str::contains("GreetingGreeting:some-group"))
        .stdout(predicate::str::contains("Dry run: no changes were made"));

    assert!(!project.path().join("bundles").exists());
}

#[test]
fn dry_run_as_json() {
    let project = TempDir::new().unwrap();

    let assert = relay_maker(&project)
        .args(["--output-format=json", "bundle"])
        .args(["--dry-run", "--no-confirm"])
        .args(GREETING)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["outcome"], "dry-run");
    assert_eq!(report["names"][0]["label"], "Composer Package Name");
    assert_eq!(report["names"][0]["value"], "dbp/relay-greeting-bundle");
    assert_eq!(report["names"][9]["value"], "dbp-relay-greeting-bundle");
}

#[test]
fn json_mode_shows_preview_before_asking() {
    let project = TempDir::new().unwrap();

    let assert = relay_maker(&project)
        .args(["--output-format", "json", "bundle"])
        .args(GREETING)
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "    Composer Package Name: dbp/relay-greeting-bundle",
        ))
        .stderr(predicate::str::contains("Continue?"));

    // The names precede the question.
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    let names_at = stderr.find("Composer Package Name").unwrap();
    assert!(names_at < stderr.find("Continue?").unwrap());

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["outcome"], "declined");
    assert!(!project.path().join("bundles").exists());
}

#[test]
fn json_mode_without_prompt_keeps_stderr_quiet() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args(["--output-format=json", "bundle"])
        .args(["--dry-run", "--no-confirm"])
        .args(GREETING)
        .assert()
        .success()
        .stderr(predicate::str::contains("Composer Package Name").not());
}

#[test]
fn missing_vendor_is_reported() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args([
            "bundle",
            "--unique-name=greeting",
            "--friendly-name=Greeting Bundle",
            "--example-entity=greeting",
            "--no-confirm",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--vendor must be provided"));

    assert!(!project.path().join("bundles").exists());
}

#[test]
fn vendor_from_config_default() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .env("RELAY_MAKER_DEFAULTS__VENDOR", "acme")
        .args([
            "bundle",
            "--unique-name=greeting",
            "--friendly-name=Greeting Bundle",
            "--example-entity=greeting",
            "--dry-run",
            "--no-confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/relay-greeting-bundle"));
}

#[test]
fn existing_target_aborts_before_any_command() {
    let project = TempDir::new().unwrap();
    let target = clone_dir(&project);
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("keep.txt"), "mine").unwrap();

    relay_maker(&project)
        // git must never be reached; a missing binary would fail with 5.
        .env("RELAY_MAKER_TOOLS__GIT", "/nonexistent/git")
        .args(["bundle", "--no-confirm", "--no-progress"])
        .args(GREETING)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists. aborting."));

    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "mine");
}

#[test]
fn declining_the_prompt_aborts_cleanly() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args(["bundle"])
        .args(GREETING)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("dbp/relay-greeting-bundle"))
        .stdout(predicate::str::contains("aborting"))
        .stderr(predicate::str::contains("Continue?"));

    assert!(!project.path().join("bundles").exists());
}

#[test]
fn closed_stdin_declines() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args(["bundle"])
        .args(GREETING)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("aborting"));

    assert!(!project.path().join("bundles").exists());
}

#[test]
fn dry_run_still_asks_for_confirmation() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .args(["bundle", "--dry-run"])
        .args(GREETING)
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Continue?"))
        .stdout(predicate::str::contains("Dry run: no changes were made"));
}

#[test]
fn missing_git_is_an_external_failure() {
    let project = TempDir::new().unwrap();

    relay_maker(&project)
        .env("RELAY_MAKER_TOOLS__GIT", "/nonexistent/git")
        .args(["bundle", "--no-confirm", "--no-progress"])
        .args(GREETING)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("could not be started"));

    // Step one ran: the container exists, the clone does not.
    assert!(project.path().join("bundles").is_dir());
    assert!(!clone_dir(&project).exists());
}

#[cfg(unix)]
mod fake_tools {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    const FAKE_GIT: &str = r#"#!/bin/sh
[ "$1" = "clone" ] || exit 64
mkdir -p "$3/.git"
cat > "$3/.bundle-rename" <<'EOF'
#!/bin/sh
printf '%s\n' "$@" > rename.log
EOF
chmod +x "$3/.bundle-rename"
"#;

    const FAKE_COMPOSER: &str = r#"#!/bin/sh
echo "$*" >> composer.log
"#;

    const FAILING_COMPOSER: &str = r#"#!/bin/sh
echo "could not resolve package" >&2
exit 3
"#;

    fn script(dir: &Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn full_pipeline_creates_and_installs_bundle() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let git = script(tools.path(), "git", FAKE_GIT);
        let composer = script(tools.path(), "composer", FAKE_COMPOSER);

        relay_maker(&project)
            .env("RELAY_MAKER_TOOLS__GIT", &git)
            .env("RELAY_MAKER_TOOLS__COMPOSER", &composer)
            .args(["bundle", "--no-confirm", "--no-progress"])
            .args(GREETING)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "* The package 'dbp/relay-greeting-bundle' was created under '",
            ))
            .stdout(predicate::str::contains(
                "* The package was added to your composer.json and installed",
            ))
            .stdout(predicate::str::contains(
                "* The containing bundle was registered with your application",
            ));

        let clone = clone_dir(&project);
        assert!(clone.is_dir());
        assert!(!clone.join(".git").exists());

        let rename = fs::read_to_string(clone.join("rename.log")).unwrap();
        assert_eq!(
            rename.lines().collect::<Vec<_>>(),
            [
                "--vendor=dbp",
                "--category=relay",
                "--unique-name=greeting",
                "--friendly-name=Greeting Bundle",
                "--example-entity=greeting",
            ]
        );

        let composer_log = fs::read_to_string(project.path().join("composer.log")).unwrap();
        assert_eq!(
            composer_log.lines().collect::<Vec<_>>(),
            [
                "config repositories.dbp-relay-greeting-bundle path ./bundles/dbp-relay-greeting-bundle",
                "require dbp/relay-greeting-bundle=@dev",
            ]
        );
    }

    #[test]
    fn relative_project_root_is_resolved_against_cwd() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let git = script(tools.path(), "git", FAKE_GIT);
        let composer = script(tools.path(), "composer", FAKE_COMPOSER);

        relay_maker(&project)
            .env("RELAY_MAKER_TOOLS__GIT", &git)
            .env("RELAY_MAKER_TOOLS__COMPOSER", &composer)
            .args(["bundle", "--project-root=app"])
            .args(["--no-confirm", "--no-progress"])
            .args(GREETING)
            .assert()
            .success();

        let app = project.path().join("app");
        let clone = app.join("bundles").join("dbp-relay-greeting-bundle");
        assert!(clone.join("rename.log").is_file());
        assert!(!clone.join(".git").exists());
        assert!(!app.join("app").exists());
        assert!(app.join("composer.log").is_file());
    }

    #[test]
    fn failing_composer_stops_the_pipeline() {
        let project = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let git = script(tools.path(), "git", FAKE_GIT);
        let composer = script(tools.path(), "composer", FAILING_COMPOSER);

        relay_maker(&project)
            .env("RELAY_MAKER_TOOLS__GIT", &git)
            .env("RELAY_MAKER_TOOLS__COMPOSER", &composer)
            .args(["bundle", "--no-confirm", "--no-progress"])
            .args(GREETING)
            .assert()
            .code(5)
            .stderr(predicate::str::contains("exit code 3"))
            .stderr(predicate::str::contains("could not resolve package"))
            .stdout(predicate::str::contains("was created under").not());

        // Earlier steps are not rolled back.
        assert!(clone_dir(&project).join("rename.log").is_file());
    }
}
