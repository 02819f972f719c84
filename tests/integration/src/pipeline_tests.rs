//! Integration tests for the bootstrap pipeline
//!
//! These tests drive locator -> config -> builder -> installer across crate
//! boundaries with a recording runner in place of real processes.

use devboot_env::{
    EnvStatus, EnvironmentBuilder, HostPython, Platform, ToolInstaller, Transcript, VenvLayout,
};
use devboot_exec::{Invocation, Outcome, SystemRunner};
use devboot_git::RepoLocator;
use devboot_meta::BootstrapConfig;
use devboot_test_utils::{RecordingRunner, TestRepo, args_contain, program_is};
use pretty_assertions::assert_eq;

/// Runner answering git with `repo`'s root and creating venv directories.
fn scripted_host(repo: &TestRepo) -> RecordingRunner {
    let root = repo.canonical_root();
    RecordingRunner::new()
        .respond(
            program_is("python3"),
            Outcome::success().with_stdout("Python 3.11.9\n"),
        )
        .respond(
            program_is("git"),
            Outcome::success().with_stdout(format!("{}\n", root.display())),
        )
        .effect(args_contain(&["-m", "venv"]), |inv: &Invocation| {
            let dir = inv.arg_strings().pop().unwrap();
            std::fs::create_dir_all(dir).unwrap();
            Outcome::success()
        })
}

/// Run the pipeline once and return the environment status.
fn bootstrap_once(runner: &RecordingRunner, repo: &TestRepo, transcript: &Transcript) -> EnvStatus {
    let host = HostPython::probe(runner, "python3").unwrap();
    let locator = RepoLocator::new(runner, repo.canonical_root());
    let root = locator.root().unwrap();

    let config = BootstrapConfig::load(root).unwrap();
    let layout = VenvLayout::in_root(root, Platform::Posix);
    let status = EnvironmentBuilder::new(runner, host.program(), transcript)
        .ensure(&layout)
        .unwrap();
    ToolInstaller::new(runner, layout.python(), transcript)
        .install(&config.tools)
        .unwrap();
    status
}

#[test]
fn test_default_pipeline_command_sequence() {
    let repo = TestRepo::new();
    repo.fake_git();
    let runner = scripted_host(&repo);
    let transcript = Transcript::new();

    let status = bootstrap_once(&runner, &repo, &transcript);
    assert_eq!(status, EnvStatus::Created);

    let venv_python = repo.canonical_root().join(".venv/bin/python");
    let py = venv_python.display();
    let venv = repo.canonical_root().join(".venv");
    assert_eq!(
        runner.command_lines(),
        vec![
            "python3 --version".to_string(),
            "git rev-parse --show-toplevel".to_string(),
            format!("python3 -m venv {}", venv.display()),
            format!("{py} -m ensurepip --upgrade"),
            format!("{py} -m pip --version"),
            format!("{py} -m pip install --upgrade pip --require-virtualenv"),
            format!("{py} -m pip --require-virtualenv install -U uv>=0.9.18"),
            format!("{py} -m uv pip install -U tox>=4.32.0 tox-uv>=1.29.0"),
        ]
    );

    assert_eq!(
        transcript.lines().last().map(String::as_str),
        Some("--> Installing remaining modules using 'uv pip'")
    );
}

#[test]
fn test_rerun_only_reinstalls_tools() {
    let repo = TestRepo::new();
    repo.fake_git();
    let runner = scripted_host(&repo);

    bootstrap_once(&runner, &repo, &Transcript::new());
    let first = runner.call_count();

    let transcript = Transcript::new();
    let status = bootstrap_once(&runner, &repo, &transcript);

    assert_eq!(status, EnvStatus::AlreadyPresent);
    assert!(transcript.contains("already exists"));
    // version check, root lookup and two installer batches
    assert_eq!(runner.call_count() - first, 4);
    assert_eq!(runner.count_matching(args_contain(&["ensurepip"])), 1);
}

#[test]
fn test_config_from_checkout_root_drives_installer() {
    let repo = TestRepo::new();
    repo.fake_git();
    repo.write_config(
        r#"
[[tools]]
name = "uv"

[[tools]]
name = "nox"
version = "==2024.10.9"
"#,
    );
    let runner = scripted_host(&repo);
    let transcript = Transcript::new();

    bootstrap_once(&runner, &repo, &transcript);

    assert!(transcript.contains("--> Bootstrapping 'uv' using 'pip': uv (latest), latest"));
    assert_eq!(
        runner.count_matching(args_contain(&["-m", "uv", "pip", "install", "-U", "nox==2024.10.9"])),
        1
    );
}

#[test]
fn test_locator_with_real_repository() {
    let repo = TestRepo::new();
    repo.init_git();
    repo.mkdir("a/b/c");

    let runner = SystemRunner::new();
    let locator = RepoLocator::new(&runner, repo.canonical_root().join("a/b/c"));
    let root = locator.root().unwrap();

    assert_eq!(root, repo.canonical_root().as_path());
    assert_eq!(
        BootstrapConfig::load(root).unwrap(),
        BootstrapConfig::default()
    );
}
