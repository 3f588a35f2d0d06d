use crate::cli::CommonArgs;
use crate::error::{GcontribError, Result};
use crate::git::{capture, GitCli, HistoryExports};
use crate::model::CommitRecord;
use crate::parser::LogParser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

pub enum HistoryInput {
    Split(HistoryExports),
    Combined(String),
}

impl HistoryInput {
    pub fn parse(&self, parser: &LogParser) -> Vec<CommitRecord> {
        match self {
            HistoryInput::Split(exports) => parser.parse(&exports.numstat, &exports.name_status),
            HistoryInput::Combined(log) => parser.parse_combined(log),
        }
    }
}

/// Load history from export files when given, otherwise run `git log` in
/// the repository (current directory by default).
pub fn fetch_history(common: &CommonArgs, show_progress: bool) -> Result<HistoryInput> {
    if let Some(path) = &common.combined {
        return Ok(HistoryInput::Combined(read_export(path)?));
    }

    match (&common.numstat, &common.name_status) {
        (Some(numstat), Some(name_status)) => Ok(HistoryInput::Split(HistoryExports {
            numstat: read_export(numstat)?,
            name_status: read_export(name_status)?,
        })),
        (None, None) => {
            let repo = match &common.repo {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };
            Ok(HistoryInput::Split(capture_with_progress(&repo, show_progress)))
        }
        _ => Err(GcontribError::InvalidInput(
            "--numstat and --name-status must be given together".to_string(),
        )),
    }
}

fn read_export(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn capture_with_progress(repo: &Path, show_progress: bool) -> HistoryExports {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading commit history...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let exports = capture(&GitCli::new(), repo);
    pb.finish_and_clear();
    exports
}
