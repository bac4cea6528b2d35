//! Git access through the `git` executable

use crate::error::{Error, Result};
use crate::repo::GitRepository;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, warn};

/// Captured output of one git invocation
struct GitOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

/// [`GitRepository`] backed by the `git` CLI in a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a git runner rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn git(&self, args: &[&str]) -> Result<GitOutput> {
        debug!(?args, workdir = %self.workdir.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git {}: {e}", args.join(" "))))?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Split git output into trimmed, non-empty lines
fn split_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|l| !l.is_empty())
}

#[async_trait]
impl GitRepository for GitCli {
    async fn fetch_remote(&self) -> Result<()> {
        let out = self.git(&["fetch", "--all"]).await?;
        if !out.success {
            return Err(Error::Git(format!("fetch failed: {}", out.stderr.trim())));
        }
        debug!("fetched all remotes");
        Ok(())
    }

    async fn current_branch(&self) -> Result<String> {
        let out = self.git(&["symbolic-ref", "--short", "HEAD"]).await?;
        let branch = out.stdout.trim();
        if !out.success || branch.is_empty() {
            return Err(Error::NoCurrentBranch);
        }
        Ok(branch.to_string())
    }

    async fn list_remote_branches(&self, pattern: &str) -> Vec<String> {
        let out = match self.git(&["branch", "-r", "--list"]).await {
            Ok(out) if out.success => out,
            Ok(out) => {
                warn!(stderr = %out.stderr.trim(), "listing remote branches failed");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "listing remote branches failed");
                return Vec::new();
            }
        };

        // `origin/HEAD -> origin/main` is a symbolic ref, not a branch
        let branches: Vec<String> = split_lines(&out.stdout)
            .filter(|b| !b.contains(" -> ") && b.contains(pattern))
            .map(String::from)
            .collect();
        debug!(pattern, count = branches.len(), "listed remote branches");
        branches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_drops_blank() {
        let out = "  origin/develop\n\n  origin/release/1.0.0  \n";
        let lines: Vec<&str> = split_lines(out).collect();
        assert_eq!(lines, vec!["origin/develop", "origin/release/1.0.0"]);
    }
}
