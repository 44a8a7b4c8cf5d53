mod cli;
mod commands;
mod console;
mod menu;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use gameshelf_core::{add_once, Config, Storage};

use crate::cli::{list_kind, Cli, Command};
use crate::console::TerminalConsole;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli.overrides()).context("Failed to load configuration")?;
    debug!(
        "Collection file: {:?}, wishlist file: {:?}",
        config.collection_file, config.wishlist_file
    );

    let mut console = TerminalConsole::new();

    match &cli.command {
        None => {
            debug!("No subcommand given, starting interactive menu");
            menu::run(&config, &mut console)?;
        }
        Some(Command::List { wishlist }) => {
            commands::list_items(&mut console, &config, list_kind(*wishlist))?;
        }
        Some(Command::Add {
            title,
            genre,
            wishlist,
            interactive,
        }) => {
            let kind = list_kind(*wishlist);
            // Default to interactive mode if no specific arguments are provided
            let should_be_interactive = *interactive || (title.is_none() && genre.is_none());

            if should_be_interactive {
                let storage = Storage::new(config.path_for(kind));
                add_once(&mut console, &storage, kind)?;
            } else {
                commands::add_item_cli(&mut console, &config, kind, title.as_deref(), genre.as_deref())?;
            }
        }
        Some(Command::Remove {
            position,
            wishlist,
            yes,
        }) => {
            commands::remove_item_cli(&mut console, &config, list_kind(*wishlist), *position, *yes)?;
        }
        Some(Command::Export {
            format,
            output,
            wishlist,
        }) => {
            commands::handle_export_command(
                &mut console,
                &config,
                list_kind(*wishlist),
                format,
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}
