use crate::model::{AliasSet, CommitRecord};

const CO_AUTHOR_TRAILER: &str = "co-authored-by:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub authored: bool,
    pub coauthored: bool,
}

pub fn resolve(commit: &CommitRecord, aliases: &AliasSet) -> Verdict {
    Verdict {
        authored: is_authored_by(commit, aliases),
        coauthored: is_coauthored_by(commit, aliases),
    }
}

/// Exact email or name match, or any alias name contained in the author
/// name. Short fragments can over-match ("al" matches "albert smith").
pub fn is_authored_by(commit: &CommitRecord, aliases: &AliasSet) -> bool {
    let email = commit.author_email.to_lowercase();
    if aliases.emails.contains(&email) {
        return true;
    }

    let name = commit.author_name.to_lowercase();
    if aliases.names.contains(&name) {
        return true;
    }
    aliases.names.iter().any(|alias| name.contains(alias.as_str()))
}

pub fn is_coauthored_by(commit: &CommitRecord, aliases: &AliasSet) -> bool {
    commit
        .body
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| line.starts_with(CO_AUTHOR_TRAILER))
        .any(|trailer| {
            aliases
                .emails
                .iter()
                .chain(aliases.names.iter())
                .any(|alias| trailer.contains(alias.as_str()))
        })
}
