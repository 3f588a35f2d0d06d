//! Parser for the tab-separated `git log` exports.
//!
//! Both exports start every commit with the same seven-field header
//! (`hash, name, email, date, parents, subject, body`). The numstat export
//! follows it with `added<TAB>deleted<TAB>path` rows, the name-status export
//! with `status<TAB>path` rows. The two are joined by hash.

use crate::model::{CommitRecord, FileChange, StatusCounts};
use crate::util::{is_commit_hash, is_count_field, is_status_token};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use std::collections::HashMap;
use tracing::debug;

const HEADER_FIELDS: usize = 7;

struct Header<'a> {
    hash: &'a str,
    author_name: &'a str,
    author_email: &'a str,
    date: &'a str,
    parents: &'a str,
    subject: &'a str,
    body: &'a str,
}

enum Row<'a> {
    Status(&'a str),
    Numstat(&'a str),
    Text(&'a str),
}

struct PendingCommit<'a> {
    header: Header<'a>,
    body: String,
    files: Vec<FileChange>,
    inline_status: StatusCounts,
    rows_seen: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogParser {
    verbose: bool,
}

impl LogParser {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Parse the numstat export and join name-status counts onto it by hash.
    ///
    /// Malformed input never fails: bad dates become `None`, bad counts
    /// become zero, stray lines are dropped.
    pub fn parse(&self, numstat: &str, name_status: &str) -> Vec<CommitRecord> {
        let status_index = self.index_status_rows(name_status);

        let mut commits: Vec<CommitRecord> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut pending: Option<PendingCommit> = None;

        for line in numstat.lines() {
            if let Some(header) = parse_header(line) {
                if let Some(done) = pending.take() {
                    self.flush(done, &status_index, &mut commits, &mut positions);
                }
                pending = Some(PendingCommit {
                    body: header.body.to_string(),
                    header,
                    files: Vec::new(),
                    inline_status: StatusCounts::default(),
                    rows_seen: false,
                });
                continue;
            }

            let Some(current) = pending.as_mut() else {
                continue;
            };

            match classify(line, current.rows_seen) {
                Row::Status(token) => {
                    current.inline_status.record(token);
                    current.rows_seen = true;
                }
                Row::Numstat(row) => {
                    current.files.push(self.parse_numstat_row(row, current.header.hash));
                    current.rows_seen = true;
                }
                Row::Text(text) => {
                    if !current.rows_seen {
                        current.body.push('\n');
                        current.body.push_str(text);
                    }
                }
            }
        }

        if let Some(done) = pending.take() {
            self.flush(done, &status_index, &mut commits, &mut positions);
        }

        if self.verbose {
            debug!(
                commits = commits.len(),
                indexed = status_index.len(),
                "parsed commit history"
            );
        }
        commits
    }

    /// Parse a single export that carries numstat and name-status rows
    /// under the same header.
    pub fn parse_combined(&self, log: &str) -> Vec<CommitRecord> {
        self.parse(log, "")
    }

    fn index_status_rows<'a>(&self, name_status: &'a str) -> HashMap<&'a str, Vec<&'a str>> {
        let mut index: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut current: Option<&str> = None;

        for line in name_status.lines() {
            if let Some(header) = parse_header(line) {
                index.entry(header.hash).or_default();
                current = Some(header.hash);
            } else if let Some(hash) = current {
                if !line.trim().is_empty() {
                    index.entry(hash).or_default().push(line);
                }
            }
        }
        index
    }

    fn flush<'a>(
        &self,
        pending: PendingCommit<'a>,
        status_index: &HashMap<&'a str, Vec<&'a str>>,
        commits: &mut Vec<CommitRecord>,
        positions: &mut HashMap<String, usize>,
    ) {
        let PendingCommit {
            header,
            body,
            files,
            inline_status,
            ..
        } = pending;

        let status_counts = match status_index.get(header.hash) {
            Some(rows) => tally_status_rows(rows),
            None => inline_status,
        };

        if let Some(&idx) = positions.get(header.hash) {
            if self.verbose {
                debug!(hash = header.hash, "merging repeated commit header");
            }
            commits[idx].file_changes.extend(files);
            return;
        }

        let authored_at = parse_date(header.date);
        if authored_at.is_none() && self.verbose {
            debug!(hash = header.hash, date = header.date, "unparseable author date");
        }

        positions.insert(header.hash.to_string(), commits.len());
        commits.push(CommitRecord {
            hash: header.hash.to_string(),
            author_name: header.author_name.to_string(),
            author_email: header.author_email.to_string(),
            authored_at,
            parent_hashes: header.parents.split_whitespace().map(str::to_string).collect(),
            subject: header.subject.to_string(),
            body: body.trim_end().to_string(),
            file_changes: files,
            status_counts,
        });
    }

    fn parse_numstat_row(&self, row: &str, hash: &str) -> FileChange {
        let mut parts = row.splitn(3, '\t');
        let added = parts.next().unwrap_or("").trim();
        let deleted = parts.next().unwrap_or("").trim();
        let path = normalize_rename_path(parts.next().unwrap_or(""));

        if added == "-" && deleted == "-" {
            return FileChange::binary(path);
        }

        match (added.parse::<u64>(), deleted.parse::<u64>()) {
            (Ok(a), Ok(d)) => FileChange::new(path, a, d),
            _ => {
                if self.verbose {
                    debug!(hash, row, "unparseable numstat counts, using 0/0");
                }
                FileChange::new(path, 0, 0)
            }
        }
    }
}

pub fn parse(numstat: &str, name_status: &str) -> Vec<CommitRecord> {
    LogParser::default().parse(numstat, name_status)
}

pub fn parse_combined(log: &str) -> Vec<CommitRecord> {
    LogParser::default().parse_combined(log)
}

fn parse_header(line: &str) -> Option<Header<'_>> {
    let fields: Vec<&str> = line.splitn(HEADER_FIELDS, '\t').collect();
    if fields.len() < HEADER_FIELDS || !is_commit_hash(fields[0]) {
        return None;
    }
    Some(Header {
        hash: fields[0],
        author_name: fields[1],
        author_email: fields[2],
        date: fields[3],
        parents: fields[4],
        subject: fields[5],
        body: fields[6],
    })
}

/// Sort a continuation line into a status row, a numstat row or body text.
///
/// Until the first row of a commit, a numstat row needs count-shaped
/// leading fields, so body lines that happen to contain tabs stay in the
/// body. After that any three-field line is a numstat row and garbled
/// counts degrade to 0/0.
fn classify(line: &str, rows_seen: bool) -> Row<'_> {
    if line.trim().is_empty() {
        return Row::Text("");
    }
    let fields: Vec<&str> = line.split('\t').collect();
    let first = fields[0];

    // `M<TAB>path`, or `R087<TAB>old<TAB>new` when a score is present.
    let status_fields = if first.len() > 1 { 3 } else { 2 };
    if is_status_token(first) && fields.len() == status_fields {
        return Row::Status(first);
    }

    if fields.len() >= 3 && (rows_seen || (is_count_field(first.trim()) && is_count_field(fields[1].trim()))) {
        return Row::Numstat(line);
    }
    Row::Text(line)
}

fn tally_status_rows(rows: &[&str]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for row in rows {
        if let Row::Status(token) = classify(row, false) {
            counts.record(token);
        }
    }
    counts
}

/// Reduce numstat rename notation (`old => new`, `dir/{old => new}/f`) to
/// the destination path.
fn normalize_rename_path(path: &str) -> String {
    if !path.contains(" => ") {
        return path.to_string();
    }

    if let (Some(open), Some(close)) = (path.find('{'), path.rfind('}')) {
        if open < close {
            let inner = &path[open + 1..close];
            if let Some((_, new)) = inner.split_once(" => ") {
                let joined = format!("{}{}{}", &path[..open], new, &path[close + 1..]);
                return joined.replace("//", "/");
            }
        }
    }

    path.split_once(" => ")
        .map(|(_, new)| new.to_string())
        .unwrap_or_else(|| path.to_string())
}

fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt);
    }
    // Offset-less timestamps are read as UTC.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}
