use crate::error::{PdcaError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The three git queries the metrics pipeline needs.
///
/// `GitRepo` answers them by running the git CLI; tests substitute canned output.
pub trait CommitSource {
    /// Commit SHAs, most recent first.
    fn list_commits(&self, since: Option<&str>, count: Option<u32>) -> Result<Vec<String>>;

    /// Output of `git show --stat --format= <sha>`, with paths at full length.
    fn file_stat(&self, sha: &str) -> Result<String>;

    /// Output of `git show --shortstat --format= <sha>`.
    fn short_stat(&self, sha: &str) -> Result<String>;
}

const STAT_WIDTH: &str = "--stat=10000";

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`, which must contain a `.git` entry.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(PdcaError::RepoNotFound(path));
        }
        if !path.join(".git").exists() {
            return Err(PdcaError::NotAGitRepo(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(repo = %self.path.display(), "git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| PdcaError::git(args, format!("failed to spawn git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdcaError::git(
                args,
                format!("{} ({})", stderr.trim(), output.status),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CommitSource for GitRepo {
    fn list_commits(&self, since: Option<&str>, count: Option<u32>) -> Result<Vec<String>> {
        let count = count.map(|n| n.to_string());
        let mut args = vec!["log", "--format=%H"];
        if let Some(s) = since {
            args.extend(["--since", s]);
        }
        if let Some(n) = count.as_deref() {
            args.extend(["-n", n]);
        }

        let stdout = self.run(&args)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn file_stat(&self, sha: &str) -> Result<String> {
        // git shortens paths to `.../tail` past 80 columns when not on a tty
        self.run(&["show", STAT_WIDTH, "--format=", sha])
    }

    fn short_stat(&self, sha: &str) -> Result<String> {
        self.run(&["show", "--shortstat", "--format=", sha])
    }
}
