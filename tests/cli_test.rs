//! Integration tests driving the rant binary over arguments and stdin

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// A command isolated from any user config file
fn rant_command(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rant"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn rant");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for rant")
}

#[test]
fn rants_positional_text() {
    let home = tempfile::tempdir().unwrap();
    let output = rant_command(&home)
        .args(["-e", "X", "this", "is", "fine"])
        .output()
        .expect("Failed to execute rant");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "THIS IS FINE!!! X \n");
}

#[test]
fn same_seed_same_rant() {
    let home = tempfile::tempdir().unwrap();
    let text = "one! two! three! four! five! six!";

    let first = rant_command(&home)
        .args(["--seed", "17", text])
        .output()
        .expect("Failed to execute rant");
    let second = rant_command(&home)
        .args(["--seed", "17", text])
        .output()
        .expect("Failed to execute rant");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("ONE!!! "));
}

#[test]
fn rants_stdin_lines() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = rant_command(&home);
    cmd.args(["--emojis", "X"]);

    let output = run_with_stdin(cmd, "hi\nwhy?\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "HI!!! X \nWHY?! X \n");
}

#[test]
fn json_mode_over_stdin() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = rant_command(&home);
    cmd.args(["--json", "-e", "X"]);

    let output = run_with_stdin(cmd, "{\"t\":\"no\"}\nnot json\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"r\":\"NO!!! X \"}\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be decoded"));
}

#[test]
fn announces_as_user() {
    let home = tempfile::tempdir().unwrap();
    let output = rant_command(&home)
        .args(["--as", "U7", "-e", "X", "ugh"])
        .output()
        .expect("Failed to execute rant");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("<@U7> "));
    assert!(stdout.ends_with(":\n UGH!!! X \n"));
}

#[test]
fn reads_config_file() {
    let home = tempfile::tempdir().unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "emojis = [\"Z\"]").unwrap();

    let output = rant_command(&home)
        .arg("--config")
        .arg(config.path())
        .arg("ok")
        .output()
        .expect("Failed to execute rant");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "OK!!! Z \n");
}

#[test]
fn empty_emoji_pool_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "emojis = []").unwrap();

    let output = rant_command(&home)
        .arg("--config")
        .arg(config.path())
        .arg("ok")
        .output()
        .expect("Failed to execute rant");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
