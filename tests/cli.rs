use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("committerm_cli_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn committerm() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_committerm"));
    command
        .env_remove("COMMITTERM_LOGS")
        .env_remove("COMMITTERM_LOG_CONTENT")
        .env("COMMITTERM_NO_LOGS", "true");
    command
}

#[test]
fn help_lists_options() {
    let output = committerm().arg("--help").output().expect("run committerm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--lang", "--model", "--temperature", "--prompt-file", "--print-prompt"] {
        assert!(stdout.contains(flag), "missing {flag}");
    }
}

#[test]
fn print_prompt_outside_repository_has_empty_diff() {
    let dir = scratch_dir("print");
    let output = committerm()
        .current_dir(&dir)
        .args(["--print-prompt", "--lang", "en", "--context", "closes #4"])
        .output()
        .expect("run committerm");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Conventional Commits"));
    assert!(stdout.contains("closes #4"));
    assert!(stdout.ends_with("Here is the Git diff:\n"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn print_prompt_uses_prompt_file() {
    let dir = scratch_dir("template");
    let template = dir.join("template.txt");
    fs::write(&template, "Write a haiku about this diff.").expect("write template");
    let output = committerm()
        .current_dir(&dir)
        .arg("--print-prompt")
        .arg("--prompt-file")
        .arg(&template)
        .output()
        .expect("run committerm");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Write a haiku about this diff."));
    assert!(stdout.contains("Aquí está el Git diff:"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_timeout_is_rejected() {
    let output = committerm()
        .args(["--timeout-secs", "0", "--print-prompt"])
        .output()
        .expect("run committerm");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout"), "{stderr}");
}
