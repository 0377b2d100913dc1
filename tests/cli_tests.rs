#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixture_path;
use common::temp_models::create_temp_yaml;
use serde_json::Value;
use std::process::{Command, Output};

const PARAMETER_VARS: [&str; 5] = [
    "JDL_CONFIG",
    "JDL_APPLICATION_NAME",
    "JDL_APPLICATION_TYPE",
    "JDL_DATABASE_TYPE",
    "JDL_CREATION_TIMESTAMP",
];

fn command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_jdl-json"));
    command.env("JDL_LOG_LEVEL", "warn");
    for var in PARAMETER_VARS {
        command.env_remove(var);
    }
    command
}

fn run(args: &[&str]) -> Output {
    command().args(args).output().expect("run jdl-json")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_convert_legacy_model_uses_sibling_config() {
    let model = fixture_path("library.yaml");
    let output = run(&["convert", "--model", model.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    let names: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Author", "Book"]);
    assert_eq!(json["Author"]["changelogDate"], "20190101093000");
    assert_eq!(json["Book"]["changelogDate"], "20190101093001");
    assert_eq!(json["Book"]["applications"], "*");
}

#[test]
fn test_cli_flags_override_config() {
    let model = fixture_path("library.yaml");
    let output = run(&[
        "convert",
        "--model",
        model.to_str().unwrap(),
        "--application-type",
        "microservice",
        "--creation-timestamp",
        "2020-06-30T23:59:59Z",
        "--compact",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let json = stdout_json(&output);
    assert_eq!(json["Author"]["changelogDate"], "20200630235959");
    assert_eq!(json["Book"]["changelogDate"], "20200701000000");
    // microservice name falls back to the configured application name
    assert_eq!(json["Book"]["microserviceName"], "bookshop");
}

#[test]
fn test_cli_convert_applications() {
    let model = fixture_path("microservices.yaml");
    let output = run(&["convert", "--model", model.to_str().unwrap()]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["tata"]["A"]["pagination"], "pagination");
    assert_eq!(json["tutu"]["C"]["skipClient"], true);
    assert!(json["tata"]["A"].get("changelogDate").is_none());
}

#[test]
fn test_cli_convert_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("entities.json");
    let model = fixture_path("microservices.yaml");

    let output = run(&[
        "convert",
        "--model",
        model.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["tutu"]["E"]["microserviceName"], "tutu");
}

#[test]
fn test_cli_legacy_model_without_parameters_fails() {
    let model = create_temp_yaml("entities:\n  - name: Book\n");
    let output = run(&["convert", "--model", model.path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--database-type"));
}

#[test]
fn test_cli_reads_config_next_to_temp_model() {
    let model = create_temp_yaml("entities:\n  - name: Book\n").with_config(
        "application_name = \"shelf\"\ndatabase_type = \"mongodb\"\ncreation_timestamp = \"2021-03-04T05:06:07Z\"\n",
    );
    let output = run(&["convert", "--model", model.path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["Book"]["changelogDate"], "20210304050607");
}

#[test]
fn test_cli_reads_parameters_from_environment() {
    let model = create_temp_yaml("entities:\n  - name: Book\n");
    let output = command()
        .env("JDL_APPLICATION_NAME", "shelf")
        .env("JDL_APPLICATION_TYPE", "microservice")
        .env("JDL_DATABASE_TYPE", "sql")
        .env("JDL_CREATION_TIMESTAMP", "2022-02-02T02:02:02Z")
        .args(["convert", "--model", model.path.to_str().unwrap()])
        .output()
        .expect("run jdl-json");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["Book"]["changelogDate"], "20220202020202");
    assert_eq!(json["Book"]["microserviceName"], "shelf");
}

#[test]
fn test_cli_flags_win_over_environment() {
    let model = create_temp_yaml("entities:\n  - name: Book\n");
    let output = command()
        .env("JDL_APPLICATION_NAME", "shelf")
        .env("JDL_DATABASE_TYPE", "sql")
        .env("JDL_CREATION_TIMESTAMP", "2022-02-02T02:02:02Z")
        .args([
            "convert",
            "--model",
            model.path.to_str().unwrap(),
            "--creation-timestamp",
            "2023-03-03T03:03:03Z",
        ])
        .output()
        .expect("run jdl-json");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["Book"]["changelogDate"], "20230303030303");
}

#[test]
fn test_cli_missing_explicit_config_fails() {
    let model = fixture_path("library.yaml");
    let output = run(&[
        "convert",
        "--model",
        model.to_str().unwrap(),
        "--config",
        "/nonexistent/jdl-json.toml",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Conversion config not found"));
}

#[test]
fn test_cli_check_exit_codes() {
    let broken = fixture_path("broken.json");

    let lenient = run(&["check", "--model", broken.to_str().unwrap()]);
    assert!(lenient.status.success());
    let report = String::from_utf8_lossy(&lenient.stdout);
    assert!(report.contains("duplicate_entity"));
    assert!(report.contains("pagination_with_cassandra"));

    let strict = run(&["check", "--model", broken.to_str().unwrap(), "--fail-on-error"]);
    assert!(!strict.status.success());

    let clean = run(&["check", "--model", fixture_path("microservices.yaml").to_str().unwrap(), "--fail-on-error"]);
    assert!(clean.status.success());
    assert!(String::from_utf8_lossy(&clean.stdout).contains("No issues found"));
}

#[test]
fn test_cli_check_errors_only_hides_warnings() {
    let broken = fixture_path("broken.json");
    let output = run(&["check", "--model", broken.to_str().unwrap(), "--errors-only"]);
    assert!(output.status.success());

    let report = String::from_utf8_lossy(&output.stdout);
    assert!(report.contains("unknown_field_type"));
    assert!(!report.contains("unknown_option_entity"));
}
