use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn tool() -> Command {
    Command::cargo_bin("control_panel_tool").unwrap()
}

fn write_datasource(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("birth_names.json");
    fs::write(
        &path,
        r#"{
            "id": "3",
            "name": "birth_names",
            "columns": [
                {"column_name": "gender"},
                {"column_name": "ds", "is_dttm": true}
            ],
            "metrics": [{"metric_name": "sum__num"}, {"metric_name": "count"}]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn cli_without_command_prints_usage() {
    tool()
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: control_panel_tool"));
}

#[test]
fn cli_lists_standard_and_extension_types() {
    tool()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("line"))
        .stdout(predicate::str::contains("echarts_bar"))
        .stdout(predicate::str::contains("filter_box_tree"));
}

#[test]
fn cli_checks_the_builtin_registry() {
    tool()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: 45 visualization types"));
}

#[test]
fn cli_check_reports_dangling_references() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vis.json");
    fs::write(
        &path,
        r#"{"pie": {"label": "Pie", "controlPanelSections": [
            {"label": "Query", "expanded": true, "controlSetRows": [["metric", "no_such_control"]]}
        ]}}"#,
    )
    .unwrap();

    tool()
        .args(["check", "--visualizations"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dangling control reference"))
        .stderr(predicate::str::contains("no_such_control"));
}

#[test]
fn cli_dumps_a_text_outline() {
    tool()
        .args(["dump", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pie Chart (pie)"))
        .stdout(predicate::str::contains("[-] Datasource & Chart Type"));
}

#[test]
fn cli_dumps_a_json_snapshot() {
    let dir = TempDir::new().unwrap();
    let datasource = write_datasource(&dir);

    tool()
        .args(["dump", "ag_grid", "--format", "json", "--datasource"])
        .arg(&datasource)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": 1"))
        .stdout(predicate::str::contains("col_style"));
}

#[test]
fn cli_builds_a_chart_request_with_overrides() {
    let dir = TempDir::new().unwrap();
    let datasource = write_datasource(&dir);

    tool()
        .args(["request", "table", "--set", "row_limit=100", "--datasource"])
        .arg(&datasource)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"datasource\": \"3__table\""))
        .stdout(predicate::str::contains("\"row_limit\": 100"));
}

#[test]
fn cli_request_lists_invalid_controls() {
    tool()
        .args(["request", "line"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed validation"))
        .stderr(predicate::str::contains("metrics"));
}
