//! End-to-end runs of `FormatService` over real directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wayfind_adapters::{LocalFilesystem, MemoryFilesystem, PluginEngine};
use wayfind_core::prelude::*;

fn service() -> FormatService {
    FormatService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(PluginEngine::with_builtin_plugins()),
    )
}

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn status_of<'a>(report: &'a RunReport, rel: &str) -> &'a FileStatus {
    &report
        .files
        .iter()
        .find(|f| f.path == Path::new(rel))
        .unwrap_or_else(|| panic!("{} not in report", rel))
        .status
}

#[test]
fn formats_a_mixed_project() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.js", "const a = 'x'\n");
    write(root, "b.json", "{\n  \"name\": \"demo\"\n}\n");
    write(root, "c.bin", "\u{1}\u{2}");

    let report = service()
        .run(&FormatRequest::new(root), &NoopObserver)
        .unwrap();

    assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "const a = \"x\";\n");
    assert_eq!(
        fs::read_to_string(root.join("b.json")).unwrap(),
        "{\n  \"name\": \"demo\"\n}\n"
    );
    assert_eq!(status_of(&report, "a.js"), &FileStatus::Formatted);
    assert_eq!(status_of(&report, "b.json"), &FileStatus::Unchanged);
    // Not a candidate, so never touched or reported.
    assert!(report.files.iter().all(|f| f.path != Path::new("c.bin")));
    assert_eq!(report.summary.failed, 0);
    assert!(report.succeeded());
}

#[test]
fn explicit_unknown_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let bin = write(root, "c.bin", "data");

    let report = service()
        .run(
            &FormatRequest::new(root).with_targets(vec![bin]),
            &NoopObserver,
        )
        .unwrap();

    assert_eq!(
        status_of(&report, "c.bin"),
        &FileStatus::Skipped {
            reason: SkipReason::NoParser
        }
    );
    assert_eq!(fs::read_to_string(root.join("c.bin")).unwrap(), "data");
}

#[test]
fn skipped_files_are_not_read_as_text() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".prettierignore", "legacy/\n");
    let bin = root.join("c.bin");
    fs::write(&bin, [0xff, 0xfe, 0x00, 0x81]).unwrap();
    let legacy = root.join("legacy/old.js");
    fs::create_dir_all(legacy.parent().unwrap()).unwrap();
    fs::write(&legacy, b"var\xe9").unwrap();

    let report = service()
        .run(
            &FormatRequest::new(root).with_targets(vec![bin, legacy]),
            &NoopObserver,
        )
        .unwrap();

    assert_eq!(
        status_of(&report, "c.bin"),
        &FileStatus::Skipped {
            reason: SkipReason::NoParser
        }
    );
    assert_eq!(
        status_of(&report, "legacy/old.js"),
        &FileStatus::Skipped {
            reason: SkipReason::Ignored
        }
    );
    assert_eq!(report.summary.failed, 0);
    assert!(report.succeeded());
}

#[test]
fn second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/app.js", "function f(){return 1}\n");
    write(root, "style.css", "a{color:red}");
    write(root, "README.md", "# Hi\n\n* item\n");

    let first = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();
    assert_eq!(first.summary.formatted, 3);

    let second = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();
    assert_eq!(second.summary.formatted, 0);
    assert_eq!(second.summary.unchanged, 3);
}

#[test]
fn dependency_only_tree_has_no_candidates() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "node_modules/lib/index.js", "var x='y'");
    write(root, "dist/bundle.js", "var x='y'");
    write(root, "coverage/lcov.json", "{}");

    let report = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();
    assert!(report.files.is_empty());
    assert_eq!(
        fs::read_to_string(root.join("node_modules/lib/index.js")).unwrap(),
        "var x='y'"
    );
}

#[test]
fn broken_file_does_not_stop_its_siblings() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "bad.json", "{\"name\": ");
    write(root, "good.js", "let a = 'b'\n");

    let report = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();

    assert!(status_of(&report, "bad.json").is_failed());
    assert_eq!(status_of(&report, "good.js"), &FileStatus::Formatted);
    assert_eq!(fs::read_to_string(root.join("bad.json")).unwrap(), "{\"name\": ");
    assert_eq!(fs::read_to_string(root.join("good.js")).unwrap(), "let a = \"b\";\n");
    assert!(!report.succeeded());
}

#[test]
fn ignore_file_and_gitignore_are_respected() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".prettierignore", "legacy/\n");
    write(root, ".gitignore", "tmp/\n");
    write(root, "legacy/old.js", "var a='b'");
    write(root, "tmp/scratch.js", "var a='b'");

    let report = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();

    assert_eq!(
        status_of(&report, "legacy/old.js"),
        &FileStatus::Skipped {
            reason: SkipReason::Ignored
        }
    );
    assert!(report.files.iter().all(|f| !f.path.starts_with("tmp")));
    assert_eq!(fs::read_to_string(root.join("legacy/old.js")).unwrap(), "var a='b'");
}

#[test]
fn check_mode_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.js", "const a = 'x'\n");

    let report = service()
        .run(
            &FormatRequest::new(root).with_mode(RunMode::Check),
            &NoopObserver,
        )
        .unwrap();

    assert_eq!(report.summary.formatted, 1);
    assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "const a = 'x'\n");
}

#[test]
fn prettierrc_options_reach_the_formatter() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".prettierrc.json", r#"{ "singleQuote": true, "semi": false }"#);
    write(root, "a.js", "const a = \"x\";\n");

    service().run(&FormatRequest::new(root), &NoopObserver).unwrap();
    assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "const a = 'x'\n");
}

#[test]
fn malformed_config_fails_every_file_it_covers() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".prettierrc.json", "{ not json");
    write(root, "a.js", "let a\n");
    write(root, "b.css", "a{}");

    let report = service().run(&FormatRequest::new(root), &NoopObserver).unwrap();
    assert_eq!(report.summary.failed, 2);
    assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "let a\n");
}

#[test]
fn failed_write_leaves_original_content() {
    let root = Path::new("/project");
    let path = root.join("a.js");

    let memory = MemoryFilesystem::new();
    memory.insert(&path, "const a = 'x'\n");
    memory.fail_writes_to(&path);

    let service = FormatService::new(
        Box::new(memory.clone()),
        Box::new(PluginEngine::with_builtin_plugins()),
    );
    let report = service.run(&FormatRequest::new(root), &NoopObserver).unwrap();

    assert!(status_of(&report, "a.js").is_failed());
    assert_eq!(memory.read_file(&path).as_deref(), Some("const a = 'x'\n"));
}
