use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "codeguard")]
#[clap(about = "AI-powered code review: security and well-architected recommendations", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/codeguard/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
