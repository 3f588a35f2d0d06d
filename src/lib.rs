pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod fetch;
pub mod git;
pub mod identity;
pub mod language;
pub mod metrics;
pub mod model;
pub mod parser;
pub mod stats;
pub mod util;

pub use engine::{ContributionEngine, EngineConfig};
pub use model::{AliasSet, CommitRecord, ContributionMetrics, FileChange, StatusCounts};
pub use parser::{parse, parse_combined, LogParser};
