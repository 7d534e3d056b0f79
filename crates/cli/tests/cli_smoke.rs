//! CLI smoke tests for stbuild.
//!
//! These tests verify that all CLI commands run without panicking and
//! return appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the stbuild binary.
fn stbuild_cmd() -> Command {
    cargo_bin_cmd!("stbuild")
}

/// Create a temp directory with a descriptor file.
fn temp_descriptor(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("descriptor.json"), content).unwrap();
    temp
}

/// A valid descriptor file for --file tests.
const SAMPLE_DESCRIPTOR: &str = r#"
{
    "name": "sampleLib",
    "revision": 1,
    "tools": ["aLib", "bLib"]
}
"#;

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
    stbuild_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
    stbuild_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stbuild"));
}

#[test]
fn subcommand_help_works() {
    for cmd in &["show", "plan", "diff", "check"] {
        stbuild_cmd()
            .arg(cmd)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_defaults_to_latest_revision() {
    stbuild_cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataSubselector"))
        .stdout(predicate::str::contains("irfLoaderLib"));
}

#[test]
fn show_first_revision_omits_irf_loader() {
    stbuild_cmd()
        .arg("show")
        .arg("--revision")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("tipLib"))
        .stdout(predicate::str::contains("irfLoaderLib").not());
}

#[test]
fn show_json_output() {
    stbuild_cmd()
        .arg("show")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"dataSubselector\""));
}

#[test]
fn show_unknown_revision_fails() {
    stbuild_cmd()
        .arg("show")
        .arg("--revision")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recorded revision"));
}

#[test]
fn show_descriptor_file() {
    let temp = temp_descriptor(SAMPLE_DESCRIPTOR);

    stbuild_cmd()
        .arg("show")
        .arg("--file")
        .arg(temp.path().join("descriptor.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("sampleLib"));
}

#[test]
fn show_nonexistent_file_fails() {
    stbuild_cmd()
        .arg("show")
        .arg("--file")
        .arg("/nonexistent/descriptor.json")
        .assert()
        .failure();
}

#[test]
fn show_invalid_descriptor_file_fails() {
    let temp = temp_descriptor(r#"{ "name": "", "revision": 1, "tools": [] }"#);

    stbuild_cmd()
        .arg("show")
        .arg("--file")
        .arg(temp.path().join("descriptor.json"))
        .assert()
        .failure();
}

// =============================================================================
// plan
// =============================================================================

#[test]
fn plan_registers_library() {
    stbuild_cmd()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("add library dataSubselector"))
        .stdout(predicate::str::contains("use tool evtbinLib"));
}

#[test]
fn plan_deps_only_skips_registration() {
    stbuild_cmd()
        .arg("plan")
        .arg("--deps-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("add library").not())
        .stdout(predicate::str::contains("use tool tipLib"));
}

#[test]
fn plan_reports_environment_summary() {
    stbuild_cmd()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 libraries, 6 tools"));
}

#[test]
fn plan_json_output() {
    stbuild_cmd()
        .arg("plan")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"use_tool\""));
}

// =============================================================================
// diff
// =============================================================================

#[test]
fn diff_defaults_to_recorded_history() {
    stbuild_cmd()
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("irfLoaderLib added"));
}

#[test]
fn diff_same_revision_reports_no_changes() {
    stbuild_cmd()
        .arg("diff")
        .arg("--from")
        .arg("1")
        .arg("--to")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes."));
}

#[test]
fn diff_unknown_revision_fails() {
    stbuild_cmd()
        .arg("diff")
        .arg("--from")
        .arg("1")
        .arg("--to")
        .arg("7")
        .assert()
        .failure();
}

#[test]
fn diff_json_output() {
    stbuild_cmd()
        .arg("diff")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"added\""));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_reports_available() {
    stbuild_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("descriptor available"));
}

#[test]
fn check_json_output() {
    stbuild_cmd()
        .arg("check")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"available\": true"));
}
