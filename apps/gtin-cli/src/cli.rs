use clap::Parser;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "gtin",
    version,
    about = "Validate GTIN-8, GTIN-12, GTIN-13 and GTIN-14 product identifiers"
)]
pub struct Args {
    /// GTINs to validate. Reads one per line from stdin when none are given.
    pub gtins: Vec<String>,

    /// Output format [env: GTIN_FORMAT]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print nothing; report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter written to stderr, e.g. `debug` [env: GTIN_LOG]
    #[arg(long)]
    pub log_level: Option<String>,
}
