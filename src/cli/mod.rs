//! CLI command definitions and handlers

mod analyze;
mod check_model;
mod config;
mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mindcare::config::{AppConfig, PROJECT_CONFIG_FILE};

/// MindCare - text wellness analysis service
#[derive(Parser, Debug)]
#[command(name = "mindcare")]
#[command(
    version,
    about = "Emotion, sentiment and wellness analysis for short texts, served over HTTP",
    after_help = "\
Examples:
  mindcare                                  Start the API on 0.0.0.0:8000
  mindcare serve --port 9000 --no-preload   Custom port, load the model lazily
  mindcare analyze \"I feel great today\"     Analyze text locally
  mindcare check-model models/emotion       Inspect a model directory
  mindcare config init                      Write an example mindcare.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./mindcare.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API (default)
    Serve {
        /// Bind host
        #[arg(long, env = "MINDCARE_HOST")]
        host: Option<String>,

        /// Bind port
        #[arg(long, short = 'p', env = "MINDCARE_PORT")]
        port: Option<u16>,

        /// Model directory
        #[arg(long, env = "MINDCARE_MODEL_PATH")]
        model: Option<PathBuf>,

        /// Load the model on first request instead of at startup
        #[arg(long)]
        no_preload: bool,
    },

    /// Analyze texts locally and print the results
    Analyze {
        /// Texts to analyze
        #[arg(required = true)]
        texts: Vec<String>,

        /// Model directory
        #[arg(long, env = "MINDCARE_MODEL_PATH")]
        model: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Inspect a model directory without loading it
    CheckModel {
        /// Model directory (default: configured model path)
        path: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example config file
    Init {
        /// Destination
        #[arg(default_value = PROJECT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    let load = || AppConfig::load(config_path.as_deref());

    match cli.command {
        None => serve::run(load()?, None, None, None, false),

        Some(Commands::Serve {
            host,
            port,
            model,
            no_preload,
        }) => serve::run(load()?, host, port, model, no_preload),

        Some(Commands::Analyze { texts, model, json }) => {
            let config = load()?;
            let model_path = model.unwrap_or_else(|| config.model.path.clone());
            analyze::run(&config, &model_path, &texts, json)
        }

        Some(Commands::CheckModel { path }) => {
            let path = match path {
                Some(path) => path,
                None => load()?.model.path,
            };
            check_model::run(&path)
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { path, force } => config::init(&path, force),
            ConfigAction::Show => config::show(&load()?),
        },

        Some(Commands::Version) => {
            println!("mindcare {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["mindcare"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(Cli::try_parse_from(["mindcare", "analyze"]).is_err());
        let cli = Cli::try_parse_from(["mindcare", "analyze", "one", "two", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Analyze { texts, json, .. }) => {
                assert_eq!(texts, vec!["one", "two"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_init_default_path() {
        let cli = Cli::try_parse_from(["mindcare", "config", "init"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::Init { path, force },
            }) => {
                assert_eq!(path, PathBuf::from("mindcare.toml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
