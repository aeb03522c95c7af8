use super::backend::DiffSource;
use crate::log_debug;
use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

/// Staged changes of a repository, as printed by `git diff --cached`.
pub struct GitDiff {
    repo: PathBuf,
}

impl GitDiff {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }
}

impl DiffSource for GitDiff {
    fn staged_diff(&self) -> String {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(["diff", "--cached"])
            .stdin(Stdio::null())
            .output();
        match output {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Ok(output) => {
                log_debug(&format!(
                    "git diff --cached exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ));
                String::new()
            }
            Err(err) => {
                log_debug(&format!("failed to run git: {err}"));
                String::new()
            }
        }
    }
}
