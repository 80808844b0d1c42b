use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("{i}\n")).collect()
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loc_scan"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn sample_tree(root: &Path) {
    write_file(&root.join("a.go"), &numbered(3));
    write_file(&root.join("b.txt"), &numbered(5));
    write_file(&root.join("vendor/c.go"), &numbered(100));
}

#[test]
fn cli_reports_total_in_default_mode() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let output = run(&[dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "Total lines: 8");
}

#[test]
fn cli_codeonly_counts_code_extensions() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    write_file(&dir.path().join("UPPER.GO"), &numbered(2));

    let output = run(&[dir.path().to_str().unwrap(), "--codeonly"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "Total lines: 5");
}

#[test]
fn cli_all_counts_binaries_and_skip_listed_files() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("region_database.json"), &numbered(4));
    fs::write(dir.path().join("blob.bin"), b"\0\n\0\n").unwrap();

    let default_run = run(&[dir.path().to_str().unwrap()]);
    let all_run = run(&[dir.path().to_str().unwrap(), "--all"]);

    assert_eq!(
        String::from_utf8(default_run.stdout).unwrap().trim_end(),
        "Total lines: 0"
    );
    assert_eq!(
        String::from_utf8(all_run.stdout).unwrap().trim_end(),
        "Total lines: 6"
    );
}

#[test]
fn cli_extra_skip_dirs_and_extensions() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("src/main.zig"), &numbered(6));
    write_file(&dir.path().join("target/gen.zig"), &numbered(50));

    let output = run(&[
        dir.path().to_str().unwrap(),
        "--codeonly",
        "--skip-dir",
        "target",
        "--ext",
        "zig",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "Total lines: 6");
}

#[test]
fn cli_verbose_prints_breakdown() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let output = run(&[dir.path().to_str().unwrap(), "--codeonly", "--verbose"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Total lines: 3"));
    assert_eq!(lines.next(), Some("Counted 1 files, skipped 1, failed 0"));
}

#[test]
fn cli_without_path_prints_usage() {
    let output = run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage"));
    assert!(!stdout.contains("Total lines"));
}

#[test]
fn cli_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = run(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("path not found"));
}
