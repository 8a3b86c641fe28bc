//! End-to-end tests driving the `dig-turtle` binary.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn dig_turtle() -> Command {
    Command::cargo_bin("dig-turtle").unwrap()
}

fn plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to execute dig-turtle");
    assert!(output.status.success(), "exit status: {:?}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_translates_file() {
    let file = plan_file("U 10 (comment)\nX 3 foo\n");
    let out = stdout_of(dig_turtle().arg(file.path()));
    assert_eq!(
        out,
        "t.setheading(90)\nt.forward(10)\n### invalid heading ###\nt.forward(3)\n"
    );
}

#[test]
fn test_reads_default_input_txt() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("input.txt"), "L 4 x\n").unwrap();
    let out = stdout_of(dig_turtle().current_dir(dir.path()));
    assert_eq!(out, "t.setheading(180)\nt.forward(4)\n");
}

#[test]
fn test_reads_stdin() {
    let out = stdout_of(dig_turtle().arg("-").write_stdin("R 5 ignored\n"));
    assert_eq!(out, "t.setheading(0)\nt.forward(5)\n");
}

#[test]
fn test_empty_input() {
    let file = plan_file("");
    assert_eq!(stdout_of(dig_turtle().arg(file.path())), "");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dig_turtle()
        .arg(dir.path().join("nope.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_line_rejected() {
    let file = plan_file("U 1 a\nD 2\n");
    let output = dig_turtle().arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "t.setheading(90)\nt.forward(1)\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn test_skip_malformed() {
    let file = plan_file("U 1 a\nD 2\nR 3 c\n");
    let out = stdout_of(dig_turtle().arg("--skip-malformed").arg(file.path()));
    assert_eq!(out, "t.setheading(90)\nt.forward(1)\nt.setheading(0)\nt.forward(3)\n");
}

#[test]
fn test_custom_turtle_and_json() {
    let file = plan_file("D 7 x\n");
    let out = stdout_of(dig_turtle().args(["--turtle", "pen"]).arg(file.path()));
    assert_eq!(out, "pen.setheading(270)\npen.forward(7)\n");

    let out = stdout_of(dig_turtle().args(["--format", "json"]).arg(file.path()));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["command"], "set_heading");
    assert_eq!(value[0]["degrees"], 270);
    assert_eq!(value[1]["distance"], "7");
}
