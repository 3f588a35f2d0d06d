use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gcontrib")]
#[command(about = "Per-author contribution analytics from git commit history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, global = true, help = "Read the numstat export from a file instead of running git")]
    pub numstat: Option<PathBuf>,

    #[arg(long, global = true, help = "Read the name-status export from a file instead of running git")]
    pub name_status: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        conflicts_with_all = ["numstat", "name_status"],
        help = "Read a single export carrying both numstat and name-status rows"
    )]
    pub combined: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Emit parser and aggregation diagnostics on stderr")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Stats {
        #[arg(long = "email", help = "Email address identifying you (repeatable)")]
        emails: Vec<String>,

        #[arg(long = "name", help = "Name or name fragment identifying you (repeatable)")]
        names: Vec<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Fixed current time (RFC3339) for reproducible output")]
        now: Option<String>,
    },
    Log {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        init_tracing(self.common.verbose);

        match self.command {
            Commands::Stats { emails, names, json, now } => {
                crate::stats::exec(self.common, emails, names, json, now)
            }
            Commands::Log { json, ndjson } => crate::export::exec(self.common, json, ndjson),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gcontrib=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
