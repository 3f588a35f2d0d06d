pub mod focus;
pub mod history;

pub use focus::FocusLimits;

use crate::identity::{resolve, Verdict};
use crate::language::LanguageLookup;
use crate::model::{AliasSet, CommitRecord, ContributionMetrics, Loc, Totals};
use chrono::{DateTime, FixedOffset};

/// Build the full metrics record for one alias set. `now` anchors every
/// relative window and the current streak.
pub fn aggregate(
    commits: &[CommitRecord],
    aliases: &AliasSet,
    now: DateTime<FixedOffset>,
    languages: &dyn LanguageLookup,
    limits: &FocusLimits,
) -> ContributionMetrics {
    let verdicts: Vec<Verdict> = commits.iter().map(|c| resolve(c, aliases)).collect();
    let yours: Vec<&CommitRecord> = commits
        .iter()
        .zip(&verdicts)
        .filter(|(_, v)| v.authored)
        .map(|(c, _)| c)
        .collect();

    ContributionMetrics {
        totals: totals(commits, &verdicts),
        loc: loc(&yours),
        history: history::compute(commits, &yours, now),
        focus: focus::compute(&yours, languages, limits),
    }
}

pub fn totals(commits: &[CommitRecord], verdicts: &[Verdict]) -> Totals {
    Totals {
        commits_all: commits.len() as u64,
        commits_yours: verdicts.iter().filter(|v| v.authored).count() as u64,
        commits_coauth: verdicts.iter().filter(|v| v.coauthored).count() as u64,
        merges: commits.iter().filter(|c| c.is_merge()).count() as u64,
    }
}

/// Sums stop at `i64::MAX` so `net` is always exactly `added - deleted`.
const LOC_CEILING: u64 = i64::MAX as u64;

pub fn loc(yours: &[&CommitRecord]) -> Loc {
    let mut loc = Loc::default();
    for commit in yours {
        for change in &commit.file_changes {
            loc.added = loc.added.saturating_add(change.additions).min(LOC_CEILING);
            loc.deleted = loc.deleted.saturating_add(change.deletions).min(LOC_CEILING);
        }
        loc.files_touched += commit.file_changes.len() as u64;
        loc.new_files += commit.status_counts.get('A');
        loc.renames += commit.status_counts.get('R');
    }
    loc.net = loc.added as i64 - loc.deleted as i64;
    loc
}
