//! Integration tests for the crown binary
//!
//! Each test runs the compiled CLI inside its own temp directory so default
//! output files land there.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Three matched pairs, four independent vertices on the odd side and an
/// extra edge `0 2` that survives the reduction.
const CROWN_GRAPH: &str = "\
0 1
0 2
2 3
4 5
1 6
3 6
5 6
1 7
3 7
5 7
1 8
3 8
5 8
1 9
3 9
5 9
";

fn crown(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crown"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute crown")
}

fn setup(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

#[test]
fn test_reduce_writes_both_outputs() {
    let dir = setup(&[("graph.txt", CROWN_GRAPH)]);
    let output = crown(dir.path(), &["graph.txt"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let head = fs::read_to_string(dir.path().join("crownOutput.txt")).unwrap();
    let reduced = fs::read_to_string(dir.path().join("reductionOutput.txt")).unwrap();
    assert_eq!(head, "1\n3\n5\n");
    assert_eq!(reduced, "0 2\n");
}

#[test]
fn test_reduce_honours_output_flags_and_report() {
    let dir = setup(&[("graph.txt", CROWN_GRAPH)]);
    let output = crown(
        dir.path(),
        &[
            "graph.txt",
            "--crown-out",
            "head.txt",
            "--reduced-out",
            "rest.txt",
            "--report",
            "report.json",
        ],
    );
    assert!(output.status.success());

    assert_eq!(fs::read_to_string(dir.path().join("head.txt")).unwrap(), "1\n3\n5\n");
    assert_eq!(fs::read_to_string(dir.path().join("rest.txt")).unwrap(), "0 2\n");
    assert!(!dir.path().join("crownOutput.txt").exists());

    let report = fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(report.contains("\"residual_edges\": 1"));
}

#[test]
fn test_reduce_reads_config_file() {
    let config = "[output]\ncrown_path = \"from-config.txt\"\n";
    let dir = setup(&[("graph.txt", CROWN_GRAPH), ("crown.toml", config)]);
    let output = crown(dir.path(), &["graph.txt"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("from-config.txt")).unwrap(),
        "1\n3\n5\n"
    );
}

#[test]
fn test_missing_input_file_fails() {
    let dir = setup(&[]);
    let output = crown(dir.path(), &["nope.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
    assert!(!dir.path().join("crownOutput.txt").exists());
}

#[test]
fn test_missing_argument_fails() {
    let dir = setup(&[]);
    let output = crown(dir.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = setup(&[("graph.txt", "0 1\n1 x\n")]);
    let output = crown(dir.path(), &["graph.txt"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("crownOutput.txt").exists());
    assert!(!dir.path().join("reductionOutput.txt").exists());
}

#[test]
fn test_approx_command() {
    let dir = setup(&[("star.txt", "0 1\n0 2\n0 3\n")]);
    let output = crown(dir.path(), &["approx", "star.txt"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("approxOutput.txt")).unwrap(), "0\n");

    let output = crown(dir.path(), &["approx", "star.txt", "--strategy", "edge-pick", "-o", "pick.txt"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("pick.txt")).unwrap(), "0\n1\n");
}

#[test]
fn test_complement_command() {
    let dir = setup(&[("path.txt", "0 1\n1 2\n")]);
    let output = crown(dir.path(), &["complement", "path.txt", "-k", "1"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("edgeListFilename.txt")).unwrap(),
        "0 2\n"
    );
}

#[test]
fn test_verify_command() {
    let dir = setup(&[("path.txt", "0 1\n1 2\n"), ("candidates.txt", "1\n0 2\n0\n")]);
    let output = crown(dir.path(), &["verify", "path.txt", "candidates.txt", "1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "yes\nno\nno\n");
}

#[test]
fn test_version_command() {
    let dir = setup(&[]);
    let output = crown(dir.path(), &["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Crown v"));
}

#[test]
fn test_input_named_like_a_subcommand() {
    let dir = setup(&[("approx", CROWN_GRAPH)]);
    let output = crown(dir.path(), &["./approx"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(dir.path().join("crownOutput.txt")).unwrap(),
        "1\n3\n5\n"
    );
}
