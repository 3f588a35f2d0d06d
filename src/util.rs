use std::collections::HashMap;
use std::hash::Hash;

pub const ROOT_FOLDER: &str = "(root)";

const STATUS_LETTERS: &[char] = &['A', 'B', 'C', 'D', 'M', 'R', 'T', 'U', 'X'];

/// True when the first seven characters look like an abbreviated object id.
pub fn is_commit_hash(field: &str) -> bool {
    field.len() >= 7 && field.as_bytes()[..7].iter().all(u8::is_ascii_hexdigit)
}

/// A name-status token: a git status letter, optionally followed by a
/// similarity score (`M`, `R100`, `C075`).
pub fn is_status_token(field: &str) -> bool {
    let mut chars = field.chars();
    matches!(chars.next(), Some(c) if STATUS_LETTERS.contains(&c)) && chars.all(|c| c.is_ascii_digit())
}

/// A numstat count column: decimal digits, or `-` for binary files.
pub fn is_count_field(field: &str) -> bool {
    field == "-" || (!field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()))
}

pub fn top_level_folder(path: &str) -> &str {
    match path.split_once('/') {
        Some((head, _)) if !head.is_empty() => head,
        _ => ROOT_FOLDER,
    }
}

/// Sort a tally by descending weight, ties by ascending key, and keep the
/// first `limit` entries.
pub fn rank<K: Ord + Hash>(tally: HashMap<K, u64>, limit: usize) -> Vec<(K, u64)> {
    let mut ranked: Vec<(K, u64)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

pub fn percent_of(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
