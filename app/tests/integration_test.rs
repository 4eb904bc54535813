use assert_cmd::Command;

/// The name of the CLI binary
const BINARY: &str = "vtc";

fn vtc_cmd() -> Command {
    Command::cargo_bin(BINARY).unwrap()
}

/// Check that "vtc --version" works correctly
#[test]
fn version_command() {
    let assert = vtc_cmd().arg("--version").assert();
    assert.success().stdout("vtc 0.1.0\n");
}

/// Check that "vtc check" works correctly
#[test]
fn check_command() {
    let assert = vtc_cmd().args(vec!["check", "../demos/shape.vt"]).assert();
    assert.success().stdout("../demos/shape.vt checked successfully!\n");
}

/// Check that "vtc check" works correctly
#[test]
fn check_command_2() {
    let assert = vtc_cmd().args(vec!["check", "../demos/levels.vt"]).assert();
    assert.success().stdout("../demos/levels.vt checked successfully!\n");
}

/// An inexhaustive match must fail the build and name the missing case
#[test]
fn check_missing_case() {
    let output = vtc_cmd()
        .env("NO_COLOR", "1")
        .args(vec!["check", "../demos/invalid/missing_case.vt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Rty/2"), "stderr was: {stderr}");
}

/// An unknown case in a static constructor call must fail the build
#[test]
fn check_unknown_case() {
    let output = vtc_cmd()
        .env("NO_COLOR", "1")
        .args(vec!["check", "../demos/invalid/unknown_case.vt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("undefined union case: Qqq"), "stderr was: {stderr}");
}

/// Check that "vtc compile" emits the generated module
#[test]
fn compile_command() {
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("shape.js");
    let assert = vtc_cmd()
        .args(vec![
            "compile",
            "../demos/shape.vt",
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert();
    assert.success();
    let js = std::fs::read_to_string(&out_path).unwrap();
    assert!(js.contains("export const Shape = {"));
    assert!(js.contains("export function area(s)"));
}

/// Check that "vtc fmt" prints the canonical declaration form
#[test]
fn fmt_command() {
    let output = vtc_cmd().args(vec!["fmt", "../demos/shape.vt"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("union Shape"));
    assert!(stdout.contains("Rect in Float * Float"));
}
