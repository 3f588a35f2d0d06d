use crate::cli::CommonArgs;
use crate::engine::{ContributionEngine, EngineConfig};
use crate::error::GcontribError;
use crate::fetch::fetch_history;
use crate::model::{AliasSet, ContributionMetrics, Share, StatsOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::{DateTime, Utc};
use console::style;

pub fn exec(
    common: CommonArgs,
    emails: Vec<String>,
    names: Vec<String>,
    json: bool,
    now: Option<String>,
) -> anyhow::Result<()> {
    let aliases = AliasSet::new(&emails, &names);
    if aliases.is_empty() {
        return Err(GcontribError::InvalidInput(
            "at least one --email or --name is required".to_string(),
        )
        .into());
    }

    let now = now
        .as_deref()
        .map(DateTime::parse_from_rfc3339)
        .transpose()
        .map_err(GcontribError::from)
        .context("Failed to parse --now")?;

    let engine = ContributionEngine::new(EngineConfig {
        verbose: common.verbose,
        now,
        ..EngineConfig::default()
    });

    let history = fetch_history(&common, !json).context("Failed to read commit history")?;
    let commits = history.parse(&engine.parser());
    let metrics = engine.aggregate(&commits, &aliases);

    if json {
        output_json(metrics, aliases, &common)?;
    } else {
        output_summary(&metrics);
    }
    Ok(())
}

fn output_json(metrics: ContributionMetrics, aliases: AliasSet, common: &CommonArgs) -> anyhow::Result<()> {
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: common.repo.as_ref().map(|p| p.to_string_lossy().to_string()),
        aliases,
        metrics,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_summary(metrics: &ContributionMetrics) {
    let ContributionMetrics { totals, loc, history, focus } = metrics;

    println!("{}", style("Contribution Summary").bold());
    println!("{}", "─".repeat(50));
    println!(
        "Commits: {} of {} ({} co-authored, {} merges in history)",
        style(totals.commits_yours).cyan(),
        totals.commits_all,
        style(totals.commits_coauth).cyan(),
        totals.merges
    );
    println!(
        "Lines: {} {} (net {:+})",
        style(format!("+{}", loc.added)).green(),
        style(format!("-{}", loc.deleted)).red(),
        loc.net
    );
    println!(
        "Files touched: {}, new: {}, renamed: {}",
        loc.files_touched, loc.new_files, loc.renames
    );

    if let (Some(first), Some(last)) = (history.first, history.last) {
        println!(
            "History: {} to {}",
            style(first.format("%Y-%m-%d")).dim(),
            style(last.format("%Y-%m-%d")).dim()
        );
        let idle = (Utc::now() - last.with_timezone(&Utc)).num_days().max(0) as u64;
        let idle = std::time::Duration::from_secs(idle * 86_400);
        println!("Last activity: {} ago", humantime::format_duration(idle));
    }
    println!(
        "Recent commits: {} (30d) {} (90d) {} (365d)",
        history.l30, history.l90, history.l365
    );
    println!(
        "Streaks: longest {} days, current {} days",
        style(history.longest_streak).yellow(),
        style(history.current_streak).yellow()
    );
    if !history.top_days.is_empty() {
        println!("Busiest days: {}", history.top_days.join(", "));
        println!("Busiest hours: {}", history.top_hours.join(", "));
    }

    print_shares("Languages", &focus.languages);
    print_shares("Folders", &focus.folders);
    if !focus.top_files.is_empty() {
        println!("\n{}", style("Top files").bold());
        for path in &focus.top_files {
            println!("  {path}");
        }
    }
}

fn print_shares(title: &str, shares: &[Share]) {
    if shares.is_empty() {
        return;
    }
    println!("\n{}", style(title).bold());
    for share in shares {
        println!("  {:<30} {:>3}%", share.name, share.percent);
    }
}
