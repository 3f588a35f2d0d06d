#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use gcontrib::{AliasSet, CommitRecord, FileChange, StatusCounts};

pub fn header(hash: &str, name: &str, email: &str, date: &str, parents: &str, subject: &str, body: &str) -> String {
    [hash, name, email, date, parents, subject, body].join("\t")
}

pub fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

pub fn alice() -> AliasSet {
    AliasSet::new(["alice@example.com"], ["Alice Liddell"])
}

pub fn commit(hash: &str, name: &str, email: &str, date: Option<&str>) -> CommitRecord {
    CommitRecord {
        hash: hash.to_string(),
        author_name: name.to_string(),
        author_email: email.to_string(),
        authored_at: date.map(ts),
        parent_hashes: Vec::new(),
        subject: format!("commit {hash}"),
        body: String::new(),
        file_changes: Vec::new(),
        status_counts: StatusCounts::default(),
    }
}

pub fn with_files(mut commit: CommitRecord, files: &[(&str, u64, u64)]) -> CommitRecord {
    commit.file_changes = files
        .iter()
        .map(|(path, a, d)| FileChange::new(path.to_string(), *a, *d))
        .collect();
    commit
}

/// Three commits: two by alice, one merge by bob co-authored with alice.
pub fn three_commit_numstat() -> String {
    [
        header("a1b2c3d4e5", "Alice", "alice@example.com", "2024-03-01T10:00:00+00:00", "", "first", ""),
        "100\t20\tsrc/main.rs".to_string(),
        String::new(),
        header("b2c3d4e5f6", "Alice", "alice@example.com", "2024-03-02T11:00:00+00:00", "a1b2c3d4e5", "second", ""),
        "40\t10\tsrc/lib.rs".to_string(),
        String::new(),
        header(
            "c3d4e5f6a7",
            "Bob",
            "bob@example.com",
            "2024-03-03T12:00:00+00:00",
            "b2c3d4e5f6 d4e5f6a7b8",
            "Merge branch 'feature'",
            "Pulls in the feature branch.",
        ),
        String::new(),
        "Co-authored-by: Alice <alice@example.com>".to_string(),
    ]
    .join("\n")
}
