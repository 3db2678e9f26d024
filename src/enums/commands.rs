use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::repository_provider::RepositoryProvider;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Run the general and well-architected analyses on a snippet
    Analyze {
        /// Read the code from this file
        #[clap(short, long, conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline code; stdin is read when neither this nor --file is given
        #[clap(short, long)]
        code: Option<String>,
    },
    /// Connect a repository and wait for its scan
    Connect {
        #[clap(short, long, value_enum)]
        provider: RepositoryProvider,
        #[clap(short, long)]
        url: String,
        /// Personal access token (required for GitHub)
        #[clap(short, long)]
        token: Option<String>,
    },
    /// Serve the dashboard JSON API
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
}
