use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extended help shown after `spendlens query --help`.
pub const QUERY_AFTER_HELP: &str = "\
Actions:
  getRecentTransactions   Newest transactions first; requires --n
  aggregateByCategory     Totals, counts and share of spend per category
  aggregateByMonth        Totals per UTC calendar month, split by category

Data file:
  Either {\"transactions\": [...]} or a bare JSON array of records shaped
  {\"id\", \"date\", \"amount\", \"category\", \"merchant\"}.
  Categories: Food, Transport, Housing, Entertainment, Subscriptions, Health.
  Resolved from --data, then SPENDLENS_DATA, then data/sample_transactions.json.

Examples:
  spendlens query --action getRecentTransactions --n 5
  spendlens query --action aggregateByMonth --json
";

#[derive(Debug, Parser)]
#[command(
    name = "spendlens",
    version,
    about = "read-only spending reports over a transaction file",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one report query and print the result
    #[command(after_help = QUERY_AFTER_HELP)]
    Query {
        /// getRecentTransactions, aggregateByCategory or aggregateByMonth
        #[arg(long)]
        action: Option<String>,
        /// Number of transactions for getRecentTransactions
        #[arg(short = 'n', long = "n", allow_hyphen_values = true)]
        n: Option<String>,
        /// Transaction data file
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Serve the report queries over HTTP at GET /api
    Serve {
        /// Listen address, e.g. 127.0.0.1:8787
        #[arg(long)]
        addr: Option<String>,
        /// Transaction data file
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
