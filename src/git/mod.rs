pub mod log;

pub use log::{capture, GitCli, HistoryExports, HistorySource, NAME_STATUS_ARGS, NUMSTAT_ARGS};
