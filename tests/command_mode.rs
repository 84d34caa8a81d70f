//! Integration tests for command mode (-c/--command flag)

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_calcbook"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_basic_arithmetic() {
    let (stdout, _, code) = run_command(&["-c", "5 + 3"]);
    assert_eq!(stdout.trim(), "8");
    assert_eq!(code, 0);
}

#[test]
fn test_operator_glyphs() {
    let (stdout, _, code) = run_command(&["-c", "2^10 ÷ 4"]);
    assert_eq!(stdout.trim(), "256");
    assert_eq!(code, 0);
}

#[test]
fn test_implicit_multiplication() {
    let (stdout, _, code) = run_command(&["-c", "2(3+4)"]);
    assert_eq!(stdout.trim(), "14");
    assert_eq!(code, 0);
}

#[test]
fn test_solve_command() {
    let (stdout, _, code) = run_command(&["-c", "solve(x^2 - 5*x + 6, x)"]);
    assert_eq!(stdout.trim(), "x[0] = 2, x[1] = 3");
    assert_eq!(code, 0);
}

#[test]
fn test_equation_system_command() {
    let (stdout, _, code) = run_command(&["-c", "x,y:x+y=5,x-y=1"]);
    assert_eq!(stdout.trim(), "x = 3; y = 2");
    assert_eq!(code, 0);
}

#[test]
fn test_no_solver_flag() {
    let (_, stderr, code) = run_command(&["--no-solver", "-c", "x + 1 = 5"]);
    assert!(stderr.contains("algebra backend"));
    assert_eq!(code, 1);
}

#[test]
fn test_error_exit_code() {
    let (_, stderr, code) = run_command(&["-c", "undefined_function()"]);
    assert!(stderr.starts_with("Error: "));
    assert_eq!(code, 1);
}

#[test]
fn test_division_by_zero() {
    let (_, stderr, code) = run_command(&["-c", "1/0"]);
    assert!(stderr.contains("division by zero"));
    assert_eq!(code, 1);
}

#[test]
fn test_comment_only_command_prints_nothing() {
    let (stdout, _, code) = run_command(&["-c", "# nothing here"]);
    assert_eq!(stdout, "");
    assert_eq!(code, 0);
}

#[test]
fn test_file_evaluation_and_save() {
    let dir = std::env::temp_dir().join("calcbook-cli-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("doc.txt");
    let saved = dir.join("doc.qalc");
    std::fs::write(&input, "2 + 3\n@1 * 2\n").unwrap();

    let (stdout, _, code) = run_command(&[
        input.to_str().unwrap(),
        "--save",
        saved.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("2 + 3  = 5"));
    assert!(stdout.contains("@1 * 2  = 10"));

    // Evaluating the saved .qalc reproduces the same output.
    let (stdout2, _, code2) = run_command(&[saved.to_str().unwrap()]);
    assert_eq!(code2, 0);
    assert!(stdout2.contains("@1 * 2  = 10"));

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&saved).ok();
}

#[test]
fn test_output_file() {
    let dir = std::env::temp_dir().join("calcbook-cli-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("export-in.txt");
    let output = dir.join("export-out.txt");
    std::fs::write(&input, "1 + 1\n").unwrap();

    let (stdout, _, code) = run_command(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Exported to"));
    let exported = std::fs::read_to_string(&output).unwrap();
    assert_eq!(exported, "1 + 1  = 2\n");

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run_command(&["--frobnicate"]);
    assert!(stderr.contains("Unknown option"));
    assert_eq!(code, 1);
}
