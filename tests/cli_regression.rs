// Regression tests for the matrix-preview binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn matrix_preview() -> Command {
    let mut cmd = Command::cargo_bin("matrix-preview").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_selection_prints_full_matrix() {
    let output = matrix_preview().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let pairs: Vec<&str> = stdout.lines().filter(|l| l.starts_with("- ")).collect();

    assert!(stdout.starts_with("Selected providers: [\"aws\", \"gcp\", \"azure\"]\n"));
    assert!(stdout.contains("Selected environments: [\"dev\", \"prod\"]\n"));
    assert_eq!(
        pairs,
        [
            "- aws / dev",
            "- aws / prod",
            "- gcp / dev",
            "- gcp / prod",
            "- azure / dev",
            "- azure / prod",
        ]
    );
}

#[test]
fn explicit_selection_overrides_defaults() {
    matrix_preview()
        .args(["--providers", "aws, azure", "--environments", "prod"])
        .assert()
        .success()
        .stdout(
            contains("- aws / prod\n- azure / prod\n")
                .and(contains("gcp").not())
                .and(contains("dev").not()),
        );
}

#[test]
fn json_output_is_parseable() {
    let output = matrix_preview()
        .args(["--providers", "gcp", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["providers"], serde_json::json!(["gcp"]));
    assert_eq!(value["combinations"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["combinations"][1]["environment"], "prod");
}

#[test]
fn defaults_file_replaces_builtin_defaults() {
    matrix_preview()
        .args(["--defaults", "demos/defaults.yaml"])
        .assert()
        .success()
        .stdout(contains("- gcp / staging").and(contains("azure").not()));
}

#[test]
fn bad_defaults_file_reports_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.yaml");
    std::fs::write(&path, "providers: [aws\n").unwrap();

    matrix_preview()
        .arg("--defaults")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("matrix_preview::config"));
}

#[test]
fn missing_option_value_is_a_usage_error() {
    matrix_preview()
        .arg("--providers")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn pack_command_checks_demo_pack() {
    matrix_preview()
        .args(["pack", "demos/index.json"])
        .assert()
        .success()
        .stdout(
            contains("demo.deploy.generic 0.1.0 (deployment)")
                .and(contains("deploy_generic_iac"))
                .and(contains("write_templates=true")),
        );
}

#[test]
fn pack_command_rejects_unknown_entry() {
    matrix_preview()
        .args(["pack", "demos/index.json", "--entry", "messaging-demo"])
        .assert()
        .failure()
        .stderr(contains("matrix_preview::pack::unknown_entry").or(contains("messaging-demo")));
}
