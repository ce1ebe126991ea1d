//! Smoke tests for the quizgen binary's argument surface. The server is
//! never started; both flags exit before binding a socket.

use std::process::Command;

#[test]
fn help_flag_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_quizgen"))
        .arg("--help")
        .output()
        .expect("failed to execute quizgen");

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
}

#[test]
fn version_flag_reports_the_crate_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_quizgen"))
        .arg("--version")
        .output()
        .expect("failed to execute quizgen");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
