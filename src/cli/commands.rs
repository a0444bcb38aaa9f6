use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "todochain",
    about = concat!(
        "todochain v",
        env!("CARGO_PKG_VERSION"),
        " - categories and items, one chain"
    ),
    version
)]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (overrides TODOCHAIN_LOG and the config file)
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Title of the initial category
    #[arg(long)]
    pub category: Option<String>,
}
