//! Wordbank CLI - Command-line interface for the vocabulary word bank.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbank_cli::commands;
use wordbank_cli::{Cli, Command, Config, Formatter};
use wordbank_store::SqliteStore;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` raises the default level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> wordbank_cli::Result<()> {
    // Load or create config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &formatter)?;
        }
        cmd => {
            // Commands that require the database
            let path = config.database_path(cli.database.as_deref())?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut store = SqliteStore::new(&path)?;

            match cmd {
                Command::Link(args) => {
                    commands::execute_link(args, &config.linker, &mut store, &formatter)?;
                }
                Command::Import(args) => {
                    commands::execute_import(args, &mut store, &formatter)?;
                }
                Command::Add(args) => {
                    commands::execute_add(args, &mut store, &formatter)?;
                }
                Command::Edit(args) => {
                    commands::execute_edit(args, &mut store, &formatter)?;
                }
                Command::Show { term } => {
                    commands::execute_show(&term, &store, &formatter)?;
                }
                Command::Search(args) => {
                    commands::execute_search(args, &store, &formatter)?;
                }
                Command::Relate(args) => {
                    commands::execute_relate(args, &mut store, &formatter)?;
                }
                Command::Relationships { kind } => {
                    commands::execute_relationships(kind, &store, &formatter)?;
                }
                Command::Profile(_) => unreachable!(),
            }
        }
    }

    Ok(())
}
