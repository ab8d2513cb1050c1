//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_brdoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_brdoc"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn test_validate_command() {
    let (success, stdout, _) = run_cli(&["validate", "cnpj", "02.558.157/0001-62"]);
    assert!(success);
    assert_eq!(stdout.trim(), "valid");

    let (success, stdout, _) = run_cli(&["validate", "cnpj", "02.558.157/0001-55"]);
    assert!(!success);
    assert_eq!(stdout.trim(), "invalid");
}

#[test]
fn test_validate_json_output() {
    let (success, stdout, _) = run_cli(&["validate", "cpf", "968.811.342-58", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Invalid JSON");
    assert_eq!(value["class"], "cpf");
    assert_eq!(value["canonical"], "96881134258");
    assert_eq!(value["valid"], true);
}

#[test]
fn test_unknown_class_is_rejected() {
    let (success, _, stderr) = run_cli(&["validate", "rg", "123"]);
    assert!(!success);
    assert!(stderr.contains("unknown identifier class"));
}

#[test]
fn test_format_and_clean() {
    let (success, stdout, _) = run_cli(&["format", "pis", "12561241310"]);
    assert!(success);
    assert_eq!(stdout.trim(), "125.6124.131-0");

    let (success, stdout, _) = run_cli(&["clean", "cnpj", "02.558.157/0001-62"]);
    assert!(success);
    assert_eq!(stdout.trim(), "02558157000162");
}

#[test]
fn test_format_wrong_width_fails() {
    let (success, _, stderr) = run_cli(&["format", "cpf", "1234"]);
    assert!(!success);
    assert!(stderr.contains("must have 11 digits"));
}

#[test]
fn test_pad_command() {
    let (success, _, stderr) = run_cli(&["pad", "cnpj", "2558157000155"]);
    assert!(!success);
    assert!(stderr.contains("invalid check digits"));

    let (success, stdout, _) = run_cli(&["pad", "cnpj", "2558157000155", "--no-validate"]);
    assert!(success);
    assert_eq!(stdout.trim(), "02558157000155");
}

#[test]
fn test_pad_without_digits_fails() {
    let (success, stdout, stderr) = run_cli(&["pad", "cpf", "abc", "--no-validate"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("must have 11 digits, found 0"));
}

#[test]
fn test_check_digits_command() {
    let (success, stdout, _) = run_cli(&["check-digits", "cnpj", "025581570001"]);
    assert!(success);
    assert_eq!(stdout.trim(), "6 2");

    let (success, stdout, _) = run_cli(&["check-digits", "pis", "1256124131"]);
    assert!(success);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_random_is_valid_and_seedable() {
    let (success, stdout, _) = run_cli(&["random", "cpf", "--count", "5", "--raw", "--seed", "42"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert_eq!(line.len(), 11);
        assert!(brdoc_core::validate_cpf(line));
    }

    let (_, again, _) = run_cli(&["random", "cpf", "--count", "5", "--raw", "--seed", "42"]);
    assert_eq!(stdout, again);
}

#[test]
fn test_parse_command() {
    let (success, stdout, _) = run_cli(&["parse", "cnpj", "02558157000162", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(value["firm"], "02.558.157");
    assert_eq!(value["establishment"], "0001");
    assert_eq!(value["check"], "62");
    assert_eq!(value["valid"], true);

    let (success, stdout, _) = run_cli(&["parse", "cpf", "04193675866", "--raw", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(value["base"], 41936758);
    assert_eq!(value["check"], 66);
}

#[test]
fn test_compose_command() {
    let (success, stdout, _) = run_cli(&["compose", "02558157", "--formatted"]);
    assert!(success);
    assert_eq!(stdout.trim(), "02.558.157/0001-62");

    let (success, stdout, _) = run_cli(&["compose", "11222333", "--establishment", "0002"]);
    assert!(success);
    assert_eq!(stdout.trim(), "11222333000262");
}

#[test]
fn test_check_file_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "968.811.342-58").unwrap();
    writeln!(file, "968.811.342-59").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "123").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["check", "cpf", &path]);
    assert!(success);
    assert!(stdout.contains("VERDICT"));
    assert!(stdout.contains("Valid"));
    assert!(stdout.contains("Invalid"));
    assert!(stdout.contains("Malformed"));

    let (success, _, _) = run_cli(&["check", "cpf", &path, "--strict"]);
    assert!(!success);
}

#[test]
fn test_check_stdin_json() {
    let (success, stdout) = run_cli_with_stdin(
        &["check", "pis", "--json", "--strict"],
        "12561241310\n125.6124.131-0\n",
    );
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["verdict"] == "Valid"));
}
