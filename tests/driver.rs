use std::process::{Command, Output};

fn factorial(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_factorial"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run the factorial binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn reference_invocation_prints_recursive_then_iterative() {
    let output = factorial(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "120\n120\n");
}

#[test]
fn zero_and_negative_inputs_keep_their_divergence() {
    let output = factorial(&["--input", "0"]);
    assert_eq!(stdout(&output), "1\n0\n");

    let output = factorial(&["--input", "-3"]);
    assert_eq!(stdout(&output), "1\n-3\n");
}

#[test]
fn overflow_policies_at_thirteen() {
    let output = factorial(&["--input", "13"]);
    assert_eq!(stdout(&output), "1932053504\n1932053504\n");

    let output = factorial(&["--input", "13", "--overflow", "saturating"]);
    assert_eq!(stdout(&output), "2147483647\n2147483647\n");

    let output = factorial(&["--input", "13", "--overflow", "checked"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("fatal error: 13! does not fit in a 32-bit integer"));

    let output = factorial(&["--input", "13", "--overflow", "checked", "--width", "64"]);
    assert_eq!(stdout(&output), "6227020800\n6227020800\n");
}

#[test]
fn input_out_of_range_under_checked_narrowing() {
    let output = factorial(&["--input", "200", "--width", "8", "--overflow", "checked"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Input 200 is out of range for a 8-bit integer"));
}

#[test]
fn unknown_argument_fails() {
    let output = factorial(&["--fast"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown argument: --fast"));
}

#[test]
fn check_mode_reports_diagnostics() {
    let output = factorial(&["--check", "--check_from", "11", "--check_to", "13"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "input\trecursive\titerative\texact\n\
         11\t39916800\t39916800\t39916800\n\
         12\t479001600\t479001600\t479001600\n\
         13\t1932053504\t1932053504\t6227020800\n"
    );
    assert_eq!(
        stderr(&output),
        "warning: input 13: 13! does not fit in a 32-bit integer\n"
    );
}

#[test]
fn check_mode_with_denied_warnings_fails() {
    let output = factorial(&["--check", "--deny_warnings", "--suppress_warnings", "o"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: input 0: iterative gives 0 but 0! is 1"));
    assert!(!err.contains("does not fit"));
}

#[test]
fn version() {
    let output = factorial(&["--version"]);
    assert_eq!(
        stdout(&output),
        format!("factorial {}\n", env!("CARGO_PKG_VERSION"))
    );
}
