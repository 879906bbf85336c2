//! CLI argument definitions using clap
//!
//! Commands:
//! - pagestore init --config <path>
//! - pagestore serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagestore - paged array store
#[derive(Parser, Debug)]
#[command(name = "pagestore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./pagestore.json")]
        config: PathBuf,
    },

    /// Serve JSON requests from stdin until EOF
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./pagestore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_config() {
        let cli = Cli::try_parse_from(["pagestore", "serve", "--config", "/etc/ps.json"]).unwrap();
        match cli.command {
            Command::Serve { config } => assert_eq!(config, PathBuf::from("/etc/ps.json")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_init_default_path() {
        let cli = Cli::try_parse_from(["pagestore", "init"]).unwrap();
        match cli.command {
            Command::Init { config } => assert_eq!(config, PathBuf::from("./pagestore.json")),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
