use clap::Parser;

use crate::utils::logger::LogFormat;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "book-catalog")]
#[command(about = "An interactive in-memory book catalog")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format (compact or json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}
