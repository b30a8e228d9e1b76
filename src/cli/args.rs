//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Web Service Basics - users, greetings and third-party API pages
#[derive(Parser, Debug)]
#[command(name = "webservice-basics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["webservice-basics", "serve"]).unwrap();
        assert!(!cli.verbose);
        // SERVER_HOST may be set in the environment
        let Commands::Serve(args) = cli.command;
        assert!(!args.host.is_empty());
    }

    #[test]
    fn test_serve_explicit_flags() {
        let cli = Cli::try_parse_from([
            "webservice-basics",
            "-v",
            "serve",
            "-H",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 9000);
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["webservice-basics"]).is_err());
    }
}
