use crate::cli::CommonArgs;
use crate::fetch::fetch_history;
use crate::model::{CommitRecord, LogOutput, SCHEMA_VERSION};
use crate::parser::LogParser;
use anyhow::Context;
use chrono::Utc;
use std::collections::HashSet;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let history = fetch_history(&common, !(json || ndjson)).context("Failed to read commit history")?;
    let commits = history.parse(&LogParser::new(common.verbose));

    if json {
        output_json(commits, &common)?;
    } else if ndjson {
        output_ndjson(&commits)?;
    } else {
        output_summary(&commits);
    }

    Ok(())
}

fn output_json(commits: Vec<CommitRecord>, common: &CommonArgs) -> anyhow::Result<()> {
    let output = LogOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: common.repo.as_ref().map(|p| p.to_string_lossy().to_string()),
        commits,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(commits: &[CommitRecord]) -> anyhow::Result<()> {
    for commit in commits {
        println!("{}", serde_json::to_string(commit)?);
    }
    Ok(())
}

fn output_summary(commits: &[CommitRecord]) {
    use console::style;

    println!("{}", style("History Summary").bold());
    println!("{}", "─".repeat(50));

    let total_files: usize = commits.iter().map(|c| c.file_changes.len()).sum();
    let total_added: u64 = commits
        .iter()
        .flat_map(|c| &c.file_changes)
        .map(|f| f.additions)
        .sum();
    let total_deleted: u64 = commits
        .iter()
        .flat_map(|c| &c.file_changes)
        .map(|f| f.deletions)
        .sum();
    let merges = commits.iter().filter(|c| c.is_merge()).count();
    let undated = commits.iter().filter(|c| c.authored_at.is_none()).count();

    let unique_authors: HashSet<String> = commits
        .iter()
        .map(|c| c.author_email.to_lowercase())
        .collect();

    println!("Total commits: {}", style(commits.len()).cyan());
    println!("Merge commits: {}", style(merges).cyan());
    println!("Total files changed: {}", style(total_files).cyan());
    println!("Total lines added: {}", style(total_added).green());
    println!("Total lines deleted: {}", style(total_deleted).red());
    println!("Unique authors: {}", style(unique_authors.len()).yellow());
    if undated > 0 {
        println!("Commits without a readable date: {}", style(undated).dim());
    }

    let first = commits.iter().filter_map(|c| c.authored_at).min();
    let last = commits.iter().filter_map(|c| c.authored_at).max();
    if let (Some(first), Some(last)) = (first, last) {
        println!(
            "Date range: {} to {}",
            style(first.format("%Y-%m-%d")).dim(),
            style(last.format("%Y-%m-%d")).dim()
        );
    }

    println!("\nUse --json or --ndjson flags to export the parsed commits.");
}
