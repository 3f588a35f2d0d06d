use crate::language::{language_label, LanguageLookup};
use crate::model::{CommitRecord, Focus, Share};
use crate::util::{percent_of, rank, top_level_folder};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusLimits {
    pub languages: usize,
    pub folders: usize,
    pub files: usize,
}

impl Default for FocusLimits {
    fn default() -> Self {
        Self {
            languages: 5,
            folders: 3,
            files: 5,
        }
    }
}

/// LOC-weighted focus over text changes that touched at least one line.
pub fn compute(
    yours: &[&CommitRecord],
    lookup: &dyn LanguageLookup,
    limits: &FocusLimits,
) -> Focus {
    let mut by_language: HashMap<String, u64> = HashMap::new();
    let mut by_folder: HashMap<String, u64> = HashMap::new();
    let mut by_file: HashMap<String, u64> = HashMap::new();

    let changes = yours
        .iter()
        .flat_map(|c| &c.file_changes)
        .filter(|f| !f.is_binary && f.lines() > 0);

    for change in changes {
        let weight = change.lines();
        add_weight(&mut by_language, language_label(&change.path, lookup), weight);
        add_weight(&mut by_folder, top_level_folder(&change.path).to_string(), weight);
        add_weight(&mut by_file, change.path.clone(), weight);
    }

    Focus {
        languages: shares(by_language, limits.languages),
        folders: shares(by_folder, limits.folders),
        top_files: rank(by_file, limits.files)
            .into_iter()
            .map(|(path, _)| path)
            .collect(),
    }
}

fn add_weight(tally: &mut HashMap<String, u64>, key: String, weight: u64) {
    let slot = tally.entry(key).or_insert(0);
    *slot = slot.saturating_add(weight);
}

fn shares(tally: HashMap<String, u64>, limit: usize) -> Vec<Share> {
    let total = tally.values().fold(0u64, |sum, w| sum.saturating_add(*w));
    rank(tally, limit)
        .into_iter()
        .map(|(name, weight)| Share {
            name,
            percent: percent_of(weight, total),
        })
        .collect()
}
