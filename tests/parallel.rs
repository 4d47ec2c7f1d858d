//! Tests for parallel CLI processing of multiple files.

use std::{fs::File, io::Write};

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

#[rstest]
fn test_cli_parallel_multiple_files_keep_argument_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = String::new();
    for i in 0..6 {
        let path = dir.path().join(format!("file{i}.rst"));
        let mut f = File::create(&path).expect("failed to create temporary file");
        writeln!(f, "Paragraph {i}.").expect("failed to write line");
        writeln!(f).expect("failed to write line");
        writeln!(f, ".. [{i}] Footnote {i}.").expect("failed to write line");
        f.flush().expect("failed to flush file");
        drop(f);
        expected.push_str(&format!("{}:3-3 footnote {i}\n", path.display()));
        files.push(path);
    }

    let mut cmd = Command::cargo_bin("rstscan").expect("failed to create command");
    for path in &files {
        cmd.arg(path);
    }
    let output = cmd.output().expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[rstest]
fn test_cli_parallel_missing_file_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.rst");
    let mut f = File::create(&good).expect("failed to create file");
    writeln!(f, ".. note:: fine").expect("failed to write line");
    f.flush().expect("failed to flush file");
    drop(f);
    let missing = dir.path().join("missing.rst");

    Command::cargo_bin("rstscan")
        .expect("failed to create command")
        .arg(&good)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.rst"));
}
