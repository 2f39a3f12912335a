//! Integration tests for the templet CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn templet() -> Command {
    Command::cargo_bin("templet").unwrap()
}

const MODAL_VARS: [&str; 7] = [
    "component_name=ReportSwarmModal",
    "modal_type=reportSwarm",
    "title=Report a swarm",
    "description=Tell local beekeepers about a swarm",
    "api_endpoint=/api/swarm-alerts",
    "update_event=swarm:updated",
    "submit_text=Send alert",
];

fn with_modal_vars(cmd: &mut Command) -> &mut Command {
    for var in MODAL_VARS {
        cmd.arg("--var").arg(var);
    }
    cmd
}

#[test]
fn test_list_command() {
    templet()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available templates"))
        .stdout(predicate::str::contains("swarm/report-modal"))
        .stdout(predicate::str::contains("common/license-mit"));
}

#[test]
fn test_list_json_command() {
    let output = templet().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"swarm/ticker-config"));
}

#[test]
fn test_info_command() {
    templet()
        .args(["info", "swarm/ticker-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: swarm/ticker-config"))
        .stdout(predicate::str::contains("Source: embedded"))
        .stdout(predicate::str::contains("  - refresh_ms"))
        .stdout(predicate::str::contains("  - update_event"))
        .stdout(predicate::str::contains("  - speed"));
}

#[test]
fn test_rust_log_sets_level() {
    templet()
        .env("RUST_LOG", "debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("Loaded embedded templates"));
}

#[test]
fn test_quiet_by_default() {
    templet()
        .env_remove("RUST_LOG")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_error_line_names_the_kind() {
    templet()
        .args(["render", "nonexistent/template"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "error[unknown_template]: Unknown template: nonexistent/template",
        ));
}

#[test]
fn test_vars_file_numbers_are_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let vars_file = temp_dir.path().join("vars.yml");
    fs::write(&vars_file, "refresh_ms: 1.10\nspeed: 1e3\nupdate_event: swarm:updated\n").unwrap();

    templet()
        .args(["render", "swarm/ticker-config", "--vars-file"])
        .arg(&vars_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("REFRESH_INTERVAL = 1.10;"))
        .stdout(predicate::str::contains("SPEED_PX_PER_SECOND = 1e3;"));
}

#[test]
fn test_info_unknown_template() {
    templet()
        .args(["info", "nonexistent/template"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown template: nonexistent/template"));
}

#[test]
fn test_emit_report_modal_into_new_directories() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("components/swarm/ReportSwarmModal.tsx");

    let mut cmd = templet();
    cmd.arg("emit").arg("swarm/report-modal").arg(&destination);
    with_modal_vars(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("ReportSwarmModal.tsx"));

    let content = fs::read_to_string(&destination).unwrap();
    assert!(content.starts_with("// components/swarm/ReportSwarmModal.tsx\n"));
    assert!(content.contains("modalType: \"reportSwarm\""));
    assert!(content.contains("apiEndpoint: \"/api/swarm-alerts\""));
    assert!(content.contains("export default function ReportSwarmModal()"));
    assert!(content.contains("<BaseReportModal config={swarmConfig} />"));
    assert!(!content.contains("{{"));
}

#[test]
fn test_emit_missing_variable_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("out/LICENSE");

    templet()
        .arg("emit")
        .arg("common/license-mit")
        .arg(&destination)
        .args(["--var", "year=2026"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Missing variable: holder"));

    assert!(!destination.exists());
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_emit_unknown_template_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("file.txt");

    templet()
        .arg("emit")
        .arg("does/not-exist")
        .arg(&destination)
        .assert()
        .code(3);

    assert!(!destination.exists());
}

#[test]
fn test_emit_empty_destination() {
    templet()
        .args(["emit", "common/license-mit", "", "--var", "year=1", "--var", "holder=x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Invalid destination"));
}

#[test]
fn test_emit_into_directory_path_is_write_failure() {
    let temp_dir = TempDir::new().unwrap();

    templet()
        .arg("emit")
        .arg("common/license-mit")
        .arg(temp_dir.path())
        .args(["--var", "year=2026", "--var", "holder=Bee Co"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_emit_parent_is_a_file_is_directory_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    templet()
        .arg("emit")
        .arg("common/license-mit")
        .arg(blocker.join("nested/LICENSE"))
        .args(["--var", "year=2026", "--var", "holder=Bee Co"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Failed to create directory"));

    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn test_emit_overwrites_and_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("tickerConfig.ts");
    fs::write(&destination, "completely unrelated previous content\n".repeat(10)).unwrap();

    let run = || {
        templet()
            .arg("emit")
            .arg("swarm/ticker-config")
            .arg(&destination)
            .args([
                "--var",
                "refresh_ms=60000",
                "--var",
                "update_event=swarm:updated",
                "--var",
                "speed=80",
            ])
            .assert()
            .success();
        fs::read_to_string(&destination).unwrap()
    };

    let first = run();
    let second = run();

    assert_eq!(first, second);
    assert!(!first.contains("unrelated"));
    assert!(first.contains("export const REFRESH_INTERVAL = 60000;"));
    assert!(first.contains("export const SPEED_PX_PER_SECOND = 80;"));
}

#[test]
fn test_emit_relative_destination_uses_root() {
    let temp_dir = TempDir::new().unwrap();

    templet()
        .arg("--root")
        .arg(temp_dir.path())
        .args([
            "emit",
            "common/license-mit",
            "legal/LICENSE",
            "--var",
            "year=2026",
            "--var",
            "holder=Bee Co",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("legal/LICENSE")).unwrap();
    assert!(content.contains("Copyright (c) 2026 Bee Co"));
}

#[test]
fn test_vars_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let vars_file = temp_dir.path().join("vars.yml");
    fs::write(&vars_file, "year: 2020\nholder: From File\n").unwrap();

    templet()
        .args(["render", "common/license-mit", "--var", "year=2026"])
        .arg("--vars-file")
        .arg(&vars_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright (c) 2026 From File"));
}

#[test]
fn test_render_does_not_create_files() {
    let temp_dir = TempDir::new().unwrap();

    templet()
        .current_dir(temp_dir.path())
        .args([
            "render",
            "swarm/ticker-config",
            "--var",
            "refresh_ms=1000",
            "--var",
            "update_event=e",
            "--var",
            "speed=5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("REFRESH_INTERVAL = 1000;"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_malformed_var_is_general_error() {
    templet()
        .args(["render", "common/license-mit", "--var", "missing-equals"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_custom_template_dir() {
    let template_dir = TempDir::new().unwrap();
    fs::write(
        template_dir.path().join("manifest.yml"),
        "templates:\n  - id: hive/readme\n    source: README.md.tmpl\n    description: Hive readme\n",
    )
    .unwrap();
    fs::write(
        template_dir.path().join("README.md.tmpl"),
        "# {{hive}}\n\nEscaped: \\{{hive}}\nJSX: style={{ color: red }}\n",
    )
    .unwrap();

    templet()
        .arg("--template-dir")
        .arg(template_dir.path())
        .args(["render", "hive/readme", "--var", "hive=Apiary"])
        .assert()
        .success()
        .stdout("# Apiary\n\nEscaped: {{hive}}\nJSX: style={{ color: red }}\n");
}

#[test]
fn test_bad_template_dir_fails() {
    let temp_dir = TempDir::new().unwrap();

    templet()
        .arg("--template-dir")
        .arg(temp_dir.path().join("missing"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load templates"));
}
