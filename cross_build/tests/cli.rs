//! Black-box tests for the `cross-build` binary.
//!
//! Each test runs the compiled binary inside a scratch project directory so
//! the host defaults are predictable.

use std::process::Output;

use anyhow::{Context, Result, ensure};
use assert_cmd::Command;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Project {
    _scratch: TempDir,
    root: std::path::PathBuf,
}

#[fixture]
fn project() -> Project {
    #[expect(clippy::expect_used, reason = "test panics are acceptable")]
    let scratch = TempDir::new().expect("create scratch directory");
    let root = scratch.path().join("calculator");
    #[expect(clippy::expect_used, reason = "test panics are acceptable")]
    std::fs::create_dir(&root).expect("create project directory");
    Project {
        _scratch: scratch,
        root,
    }
}

fn run(project: &Project, args: &[&str]) -> Output {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("cross-build").expect("binary should exist");
    cmd.current_dir(&project.root)
        .env("XDG_CACHE_HOME", project.root.join("cache"))
        .env("RUST_BACKTRACE", "0")
        .args(args);
    #[expect(clippy::expect_used, reason = "test panics are acceptable")]
    cmd.output().expect("command should execute")
}

#[rstest]
fn prints_resolved_flags_as_json(project: Project) -> Result<()> {
    let output = run(
        &project,
        &["-env", "CGO_ENABLED=1,GOFLAGS=", "-tags", " release , netgo ", "-silent", "darwin"],
    );
    ensure!(output.status.success(), "status {:?}", output.status);
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("stdout should be JSON")?;
    ensure!(json.get("output") == Some(&serde_json::json!("calculator")), "got {json}");
    ensure!(json.get("app_id") == Some(&serde_json::json!("calculator")), "got {json}");
    ensure!(
        json.get("env") == Some(&serde_json::json!(["CGO_ENABLED=1", "GOFLAGS="])),
        "got {json}"
    );
    ensure!(
        json.get("tags") == Some(&serde_json::json!(["release", "netgo"])),
        "got {json}"
    );
    ensure!(json.get("silent") == Some(&serde_json::json!(true)), "got {json}");
    ensure!(json.get("args") == Some(&serde_json::json!(["darwin"])), "got {json}");
    Ok(())
}

#[rstest]
#[case(&["-env", "a=1,b"], "env var must be defined as KEY=VALUE or KEY=")]
#[case(&["-tags", "a,b", "-tags", "c"], "flag already set")]
#[case(&["-debug=maybe"], "invalid boolean value")]
fn rejected_command_lines_exit_with_status_two(
    project: Project,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<()> {
    let output = run(&project, args);
    ensure!(output.status.code() == Some(2), "status {:?}", output.status);
    ensure!(output.stdout.is_empty(), "unexpected stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(stderr.contains(message), "stderr: {stderr}");
    Ok(())
}

#[rstest]
#[case("-help")]
#[case("--help")]
#[case("-h")]
fn help_lists_options_and_exits_zero(project: Project, #[case] flag: &str) -> Result<()> {
    let output = run(&project, &[flag]);
    ensure!(output.status.success(), "status {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(stdout.contains("--tags <LIST>"), "stdout: {stdout}");
    ensure!(stdout.contains("--no-strip-debug"), "stdout: {stdout}");
    ensure!(stdout.contains("[default: calculator]"), "stdout: {stdout}");
    Ok(())
}
