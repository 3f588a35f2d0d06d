use crate::error::{GcontribError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

const PRETTY_FORMAT: &str = "--pretty=format:%H%x09%an%x09%ae%x09%aI%x09%P%x09%s%x09%b";

pub const NUMSTAT_ARGS: &[&str] = &["log", "--no-color", "--date=iso-strict", "--numstat", PRETTY_FORMAT];
pub const NAME_STATUS_ARGS: &[&str] = &["log", "--no-color", "--date=iso-strict", "--name-status", PRETTY_FORMAT];

/// Produces raw history text for a repository. Failures are reported as
/// an empty export, never as an error.
pub trait HistorySource {
    fn log(&self, repo: &Path, args: &[&str]) -> String;
}

#[derive(Debug, Clone)]
pub struct GitCli {
    binary: PathBuf,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_binary("git")
    }

    pub fn with_binary<P: Into<PathBuf>>(binary: P) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn try_log(&self, repo: &Path, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GcontribError::Git(format!(
                "exit {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(repo = %repo.display(), bytes = text.len(), "captured git log");
        Ok(text)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for GitCli {
    fn log(&self, repo: &Path, args: &[&str]) -> String {
        self.try_log(repo, args).unwrap_or_else(|e| {
            warn!(repo = %repo.display(), error = %e, "git log failed, treating history as empty");
            String::new()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryExports {
    pub numstat: String,
    pub name_status: String,
}

pub fn capture(source: &dyn HistorySource, repo: &Path) -> HistoryExports {
    HistoryExports {
        numstat: source.log(repo, NUMSTAT_ARGS),
        name_status: source.log(repo, NAME_STATUS_ARGS),
    }
}
