//! Tests that spawn real child processes through SystemRunner

use devboot_exec::{CommandRunner, Error, Invocation, OutputMode, SystemRunner};

#[test]
fn test_missing_program_is_not_found() {
    let runner = SystemRunner::new();
    let inv = Invocation::new("devboot-this-program-does-not-exist").arg("--version");

    let err = runner.run(&inv).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("devboot-this-program-does-not-exist"));
}

#[cfg(unix)]
#[test]
fn test_checked_failure_propagates_exit_code() {
    let runner = SystemRunner::new();
    let inv = Invocation::new("sh")
        .args(["-c", "exit 3"])
        .output(OutputMode::Quiet);

    let err = runner.run(&inv).unwrap_err();

    assert!(matches!(err, Error::Failed { code: 3, .. }), "got {err:?}");
    assert_eq!(err.exit_code(), 3);
}

#[cfg(unix)]
#[test]
fn test_unchecked_failure_returns_outcome() {
    let runner = SystemRunner::new();
    let inv = Invocation::new("sh")
        .args(["-c", "exit 4"])
        .output(OutputMode::Quiet)
        .unchecked();

    let outcome = runner.run(&inv).unwrap();

    assert_eq!(outcome.code, Some(4));
    assert!(!outcome.is_success());
}

#[cfg(unix)]
#[test]
fn test_capture_collects_both_streams() {
    let runner = SystemRunner::new();
    let inv = Invocation::new("sh")
        .args(["-c", "echo out; echo err >&2"])
        .output(OutputMode::Capture);

    let outcome = runner.run(&inv).unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.stdout.trim(), "out");
    assert_eq!(outcome.stderr.trim(), "err");
}

#[cfg(unix)]
#[test]
fn test_current_dir_is_applied() {
    let temp = tempfile::TempDir::new().unwrap();
    let expected = dunce::canonicalize(temp.path()).unwrap();
    let runner = SystemRunner::new();
    let inv = Invocation::new("sh")
        .args(["-c", "pwd -P"])
        .current_dir(&expected)
        .output(OutputMode::Capture);

    let outcome = runner.run(&inv).unwrap();

    assert_eq!(std::path::PathBuf::from(outcome.stdout.trim()), expected);
}
