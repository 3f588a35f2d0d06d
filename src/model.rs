use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub additions: u64,
    pub deletions: u64,
    pub is_binary: bool,
}

impl FileChange {
    pub fn new(path: String, additions: u64, deletions: u64) -> Self {
        Self {
            path,
            additions,
            deletions,
            is_binary: false,
        }
    }

    pub fn binary(path: String) -> Self {
        Self {
            path,
            additions: 0,
            deletions: 0,
            is_binary: true,
        }
    }

    /// Lines touched by this change, the weight used for focus shares.
    pub fn lines(&self) -> u64 {
        self.additions.saturating_add(self.deletions)
    }
}

/// Tally of name-status letters for one commit. Only `A`, `M`, `D` and `R`
/// are tracked; rename similarity scores are folded into `R`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(rename = "A")]
    pub added: u64,
    #[serde(rename = "M")]
    pub modified: u64,
    #[serde(rename = "D")]
    pub deleted: u64,
    #[serde(rename = "R")]
    pub renamed: u64,
}

impl StatusCounts {
    pub fn record(&mut self, status: &str) {
        match status.chars().next() {
            Some('A') => self.added += 1,
            Some('M') => self.modified += 1,
            Some('D') => self.deleted += 1,
            Some('R') => self.renamed += 1,
            _ => {}
        }
    }

    pub fn get(&self, letter: char) -> u64 {
        match letter {
            'A' => self.added,
            'M' => self.modified,
            'D' => self.deleted,
            'R' => self.renamed,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub authored_at: Option<DateTime<FixedOffset>>,
    pub parent_hashes: Vec<String>,
    pub subject: String,
    pub body: String,
    pub file_changes: Vec<FileChange>,
    pub status_counts: StatusCounts,
}

impl CommitRecord {
    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }
}

/// Emails and name fragments identifying one person. Entries are stored
/// trimmed and lower-cased; blank entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSet {
    pub emails: BTreeSet<String>,
    pub names: BTreeSet<String>,
}

impl AliasSet {
    pub fn new<E, N, S, T>(emails: E, names: N) -> Self
    where
        E: IntoIterator<Item = S>,
        N: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            emails: normalize_all(emails),
            names: normalize_all(names),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.names.is_empty()
    }
}

fn normalize_all<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub commits_all: u64,
    pub commits_yours: u64,
    pub commits_coauth: u64,
    pub merges: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loc {
    pub added: u64,
    pub deleted: u64,
    pub net: i64,
    pub files_touched: u64,
    pub new_files: u64,
    pub renames: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub first: Option<DateTime<FixedOffset>>,
    pub last: Option<DateTime<FixedOffset>>,
    #[serde(rename = "L30")]
    pub l30: u64,
    #[serde(rename = "L90")]
    pub l90: u64,
    #[serde(rename = "L365")]
    pub l365: u64,
    pub longest_streak: u32,
    pub current_streak: u32,
    pub top_days: Vec<String>,
    pub top_hours: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub name: String,
    pub percent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub languages: Vec<Share>,
    pub folders: Vec<Share>,
    pub top_files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionMetrics {
    pub totals: Totals,
    pub loc: Loc,
    pub history: History,
    pub focus: Focus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: Option<String>,
    pub aliases: AliasSet,
    pub metrics: ContributionMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: Option<String>,
    pub commits: Vec<CommitRecord>,
}
