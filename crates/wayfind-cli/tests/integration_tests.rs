//! Integration tests for the `wayfind` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `wayfind` run inside `dir` with user config and colours out of the way.
fn wayfind(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("wayfind");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("wayfind");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch code formatter"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("wayfind");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_format_mixed_project() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.js", "const a = 'x'\n");
    write(root, "b.json", "{\n  \"name\": \"demo\"\n}\n");
    write(root, "c.bin", "\u{1}\u{2}");

    wayfind(root)
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains("formatted: a.js"))
        .stdout(predicate::str::contains("unchanged: b.json"))
        .stdout(predicate::str::contains("c.bin").not())
        .stdout(predicate::str::contains("Format complete."))
        .stdout(predicate::str::contains(
            "Formatted: 2 (1 changed, 1 unchanged), Skipped: 0, Errors: 0",
        ));

    assert_eq!(
        fs::read_to_string(root.join("a.js")).unwrap(),
        "const a = \"x\";\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("b.json")).unwrap(),
        "{\n  \"name\": \"demo\"\n}\n"
    );
    assert_eq!(fs::read(root.join("c.bin")).unwrap(), b"\x01\x02");
}

#[test]
fn test_second_run_reports_unchanged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.js", "const a = 'x'\n");

    wayfind(root).arg("format").assert().success();
    wayfind(root)
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged: a.js"))
        .stdout(predicate::str::contains("(0 changed, 1 unchanged)"));
}

#[test]
fn test_only_ignored_directories_is_a_success() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "node_modules/lib/index.js", "var x='y'");
    write(root, "dist/bundle.js", "var x='y'");

    wayfind(root)
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Formatted: 0 (0 changed, 0 unchanged), Skipped: 0, Errors: 0",
        ));

    assert_eq!(
        fs::read_to_string(root.join("dist/bundle.js")).unwrap(),
        "var x='y'"
    );
}

#[test]
fn test_broken_file_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "bad.json", "{\"name\": ");
    write(root, "good.js", "let a = 'b'\n");

    wayfind(root)
        .arg("format")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error in: bad.json"))
        .stdout(predicate::str::contains("formatted: good.js"))
        .stderr(predicate::str::contains("1 file(s) could not be formatted"));

    assert_eq!(
        fs::read_to_string(root.join("bad.json")).unwrap(),
        "{\"name\": "
    );
    assert_eq!(
        fs::read_to_string(root.join("good.js")).unwrap(),
        "let a = \"b\";\n"
    );
}

#[test]
fn test_check_does_not_write() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.js", "const a = 'x'\n");

    wayfind(root)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would format: a.js"))
        .stderr(predicate::str::contains("1 file(s) are not formatted"));

    assert_eq!(
        fs::read_to_string(root.join("a.js")).unwrap(),
        "const a = 'x'\n"
    );
}

#[test]
fn test_check_passes_on_formatted_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.js", "const a = \"x\";\n");

    wayfind(root).arg("lint").assert().success();
}

#[test]
fn test_explicit_target_without_parser_is_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "c.bin", "data");

    wayfind(root)
        .args(["format", "c.bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped: c.bin (no parser)"));
}

#[test]
fn test_ignore_file_is_respected() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, ".prettierignore", "legacy/\n");
    write(root, "legacy/old.js", "var a='b'");

    wayfind(root).arg("format").assert().success();

    assert_eq!(
        fs::read_to_string(root.join("legacy/old.js")).unwrap(),
        "var a='b'"
    );
}

#[test]
fn test_root_flag_and_json_output() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("web");
    write(&project, "b.json", "{\n\"a\":1}");

    let assert = wayfind(temp.path())
        .args(["--output-format", "json", "check", "--root", "web"])
        .assert()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["mode"], "check");
    assert_eq!(report["succeeded"], false);
    assert_eq!(report["summary"]["formatted"], 1);
    assert_eq!(report["files"][0]["path"], "b.json");
    assert_eq!(report["files"][0]["status"], "formatted");
    assert!(report["generatedAt"].is_string());
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    wayfind(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfind"));
}

#[test]
fn test_config_get_reads_local_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "wayfind.toml", "[format]\nignore_path = \".formatignore\"\n");

    wayfind(root)
        .args(["config", "get", "format.ignore_path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".formatignore"));
}

#[test]
fn test_config_env_override() {
    let temp = TempDir::new().unwrap();
    wayfind(temp.path())
        .env("WAYFIND__FORMAT__IGNORE_PATH", ".envignore")
        .args(["config", "get", "format.ignore_path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".envignore"));
}
