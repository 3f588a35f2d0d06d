use crate::language::{BuiltinLanguages, LanguageLookup};
use crate::metrics::{aggregate, FocusLimits};
use crate::model::{AliasSet, CommitRecord, ContributionMetrics};
use crate::parser::LogParser;
use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Emit per-stage diagnostics through `tracing`.
    pub verbose: bool,
    /// Fixed clock for reproducible output; the local clock when `None`.
    pub now: Option<DateTime<FixedOffset>>,
    pub limits: FocusLimits,
}

/// Parses history exports and aggregates them for one alias set. Holds no
/// per-call state, so one engine can serve concurrent callers.
pub struct ContributionEngine {
    config: EngineConfig,
    languages: Box<dyn LanguageLookup + Send + Sync>,
}

impl ContributionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_languages(config, BuiltinLanguages)
    }

    pub fn with_languages<L>(config: EngineConfig, languages: L) -> Self
    where
        L: LanguageLookup + Send + Sync + 'static,
    {
        Self {
            config,
            languages: Box::new(languages),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parser(&self) -> LogParser {
        LogParser::new(self.config.verbose)
    }

    pub fn analyze(&self, numstat: &str, name_status: &str, aliases: &AliasSet) -> ContributionMetrics {
        let commits = self.parser().parse(numstat, name_status);
        self.aggregate(&commits, aliases)
    }

    pub fn analyze_combined(&self, log: &str, aliases: &AliasSet) -> ContributionMetrics {
        let commits = self.parser().parse_combined(log);
        self.aggregate(&commits, aliases)
    }

    pub fn aggregate(&self, commits: &[CommitRecord], aliases: &AliasSet) -> ContributionMetrics {
        let now = self.now();
        let metrics = aggregate(commits, aliases, now, &*self.languages, &self.config.limits);

        if self.config.verbose {
            debug!(
                now = %now,
                commits = metrics.totals.commits_all,
                yours = metrics.totals.commits_yours,
                coauthored = metrics.totals.commits_coauth,
                "aggregated contributions"
            );
        }
        metrics
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.config.now.unwrap_or_else(|| Local::now().fixed_offset())
    }
}

impl Default for ContributionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
