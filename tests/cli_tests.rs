use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linescript"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run linescript")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("output is valid UTF-8")
}

#[test]
fn runs_script_and_prints_lines() {
    let path = fixture_path("counter.script");
    let output = run_cli(&[path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_of(&output), include_str!("../fixtures/counter.expected"));
}

#[test]
fn missing_file_exits_with_status_one() {
    let path = fixture_path("does_not_exist.script");
    let output = run_cli(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read script file"), "stderr: {stderr}");
}

#[test]
fn malformed_script_fails_before_any_output() {
    let path = fixture_path("error_missing_operand.script");
    let output = run_cli(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INCREMENT"), "stderr: {stderr}");
}

#[test]
fn flat_branch_mode_flag() {
    let path = fixture_path("nested.script");
    let output = run_cli(&["--branches", "flat", path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_of(&output),
        include_str!("../fixtures/nested.flat.expected")
    );
}

#[test]
fn strict_flag_reports_line() {
    let path = fixture_path("strict_coercion.script");
    let output = run_cli(&["--strict", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("line 2: 'abc' is not an integer"),
        "stderr: {stderr}"
    );
}

#[test]
fn dump_tokens() {
    let path = fixture_path("no_trailing_newline.script");
    let output = run_cli(&["--dump-tokens", path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"'SET' @0"));
    assert_eq!(lines.last(), Some(&"'x' @37"));
    assert_eq!(lines.len(), 10);
}

#[test]
fn dump_ops_sexp() {
    let path = fixture_path("hello.script");
    let output = run_cli(&["--dump-ops", path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_of(&output),
        "(declare greeting)\n(print greeting)\n(set greeting hello)\n(print greeting)\n(print missing)\n"
    );
}

#[test]
fn dump_ops_json() {
    let path = fixture_path("branches.script");
    let output = run_cli(&["--dump-ops", "--ops-format", "json", path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("valid JSON");
    let ops = value["operations"].as_array().expect("operations array");
    assert_eq!(ops[2]["type"], "BranchStart");
    assert_eq!(ops[2]["operator"], "Less");
}

#[test]
fn invalid_utf8_script_still_runs() {
    let dir = std::env::temp_dir().join(format!("linescript-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("latin1.script");
    std::fs::write(&path, b"SET x caf\xe9\nPRINT x\nSET y 1\nPRINT y\n").expect("write script");

    let output = run_cli(&[path.to_str().unwrap()]);
    let _ = std::fs::remove_dir_all(&dir);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_of(&output), "caf\u{FFFD}\n1\n");
}
