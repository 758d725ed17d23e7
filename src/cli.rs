//! CLI argument parsing for the two binaries

use crate::manifest::REQUIREMENTS_FILENAME;
use crate::readme::README_FILENAME;
use crate::server::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Regenerate the technology section of README.md from requirements.txt
#[derive(Parser, Debug, Clone)]
#[command(
    name = "update-readme-info",
    version,
    about = "Regenerate the README technology section from requirements.txt"
)]
pub struct ReadmeArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dependency manifest, relative to the project directory
    #[arg(long, default_value = REQUIREMENTS_FILENAME)]
    pub requirements: PathBuf,

    /// README file, relative to the project directory
    #[arg(long, default_value = README_FILENAME)]
    pub readme: PathBuf,

    /// Dry run mode - show what would change without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output the result in JSON format
    #[arg(long, conflicts_with = "diff")]
    pub json: bool,

    /// Show the rewritten region in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl ReadmeArgs {
    /// Manifest path resolved against the project directory
    pub fn requirements_path(&self) -> PathBuf {
        self.path.join(&self.requirements)
    }

    /// README path resolved against the project directory
    pub fn readme_path(&self) -> PathBuf {
        self.path.join(&self.readme)
    }
}

/// Run the Fitness WebApp API development server
#[derive(Parser, Debug, Clone)]
#[command(name = "fitness-api", version, about = "Fitness WebApp API server")]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
        }
    }
}
