use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timefield::OutputFormat;
use timefield::commands;
use timefield::config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timefield")]
#[command(about = "Parse and normalize free-form duration input")]
#[command(version)]
struct Cli {
    #[arg(long = "config", global = true, help = "Config file path")]
    config_path: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t, help = "Output format")]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse durations and print suggestion and canonical value
    Parse {
        #[arg(required = true, help = "Duration text, e.g. 3h15, 15m, 3:15, 01:30:00")]
        inputs: Vec<String>,
    },
    /// Classify one field value as valid, empty or invalid
    Check {
        #[arg(help = "Field value")]
        input: String,
        #[arg(long, help = "Treat the field as required")]
        required: bool,
    },
    /// Read edits from stdin and print the bound field after each one
    Watch {
        #[arg(long, help = "Treat the field as required")]
        required: bool,
    },
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    /// Write the default config file
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let load_config = || config::load(cli.config_path.as_deref());

    match &cli.command {
        Commands::Parse { inputs } => {
            commands::parse::parse(inputs, cli.format)?;
        }
        Commands::Check { input, required } => {
            commands::check::check(&load_config()?, input, *required, cli.format)?;
        }
        Commands::Watch { required } => {
            commands::watch::watch(&load_config()?, *required, cli.format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&load_config()?)?,
            ConfigAction::Get { key } => commands::config::get(key, &load_config()?)?,
            ConfigAction::Init => {
                commands::config::init(cli.config_path.as_deref())?;
            }
        },
    }

    Ok(())
}
