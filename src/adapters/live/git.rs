//! Live git adapter using `git` CLI commands.

use std::process::Command;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI in the current directory.
pub struct LiveGitRepo;

impl LiveGitRepo {
    fn run(args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("git").args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitRepo for LiveGitRepo {
    fn rev_parse_head(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Self::run(&["rev-parse", "HEAD"])
    }

    fn list_remotes(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Self::run(&["remote", "-v"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_command_reports_its_arguments() {
        let err = LiveGitRepo::run(&["definitely-not-a-git-subcommand"]).unwrap_err();
        let msg = err.to_string();
        // Either git is missing (spawn error) or it rejected the subcommand.
        assert!(!msg.is_empty());
    }
}
