use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use act_cli::commands::{status, summary, track, types};
use act_cli::{Cli, Commands, Config, TypesAction};

/// Load config and open the store, creating the data directory if needed.
fn open_store(config_path: Option<&Path>) -> Result<(act_store::Store, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = act_store::Store::open(&config.data_dir).context("failed to open store")?;
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Types { action }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            match action {
                TypesAction::List { json } => types::list(&mut stdout, &store, *json)?,
                TypesAction::Add {
                    category,
                    name,
                    json,
                } => types::add(&mut stdout, &store, category, name, *json)?,
                TypesAction::Update {
                    id,
                    category,
                    name,
                    json,
                } => types::update(&mut stdout, &store, id, category, name, *json)?,
                TypesAction::Remove { id } => types::remove(&mut stdout, &store, id)?,
            }
        }
        Some(Commands::Start {
            category,
            name,
            json,
        }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            track::start(&mut stdout, &store, category, name, *json)?;
        }
        Some(Commands::End { id, json }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            track::end(&mut stdout, &store, id, *json)?;
        }
        Some(Commands::Active { json }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            track::active(&mut stdout, &store, *json)?;
        }
        Some(Commands::List { json }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            track::list(&mut stdout, &store, *json)?;
        }
        Some(Commands::Summary { json }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            summary::run(&mut stdout, &store, *json)?;
        }
        Some(Commands::Status) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            status::run(&mut stdout, &store)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
