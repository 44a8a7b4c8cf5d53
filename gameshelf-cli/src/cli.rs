use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gameshelf_core::{ListKind, Overrides};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Manage a game collection and a wishlist from the terminal")]
pub struct Cli {
    /// Path to the collection file (overrides config and GAMESHELF_COLLECTION)
    #[clap(long, global = true)]
    pub collection_file: Option<PathBuf>,

    /// Path to the wishlist file (overrides config and GAMESHELF_WISHLIST)
    #[clap(long, global = true)]
    pub wishlist_file: Option<PathBuf>,

    /// Path to a YAML config file (defaults to ~/.gameshelf.yaml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Run a single action instead of the interactive menu
    #[clap(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            collection_file: self.collection_file.clone(),
            wishlist_file: self.wishlist_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all games
    List {
        /// Use the wishlist instead of the collection
        #[clap(long, short = 'w')]
        wishlist: bool,
    },

    /// Add a game
    Add {
        /// Title of the game
        #[clap(long)]
        title: Option<String>,

        /// Genre of the game
        #[clap(long)]
        genre: Option<String>,

        /// Use the wishlist instead of the collection
        #[clap(long, short = 'w')]
        wishlist: bool,

        /// Use interactive mode (prompts)
        #[clap(long)]
        interactive: bool,
    },

    /// Remove a game by its position in `list` output
    Remove {
        /// 1-based position of the game
        position: usize,

        /// Use the wishlist instead of the collection
        #[clap(long, short = 'w')]
        wishlist: bool,

        /// Skip confirmation prompt
        #[clap(long, short = 'y')]
        yes: bool,
    },

    /// Export a list to JSON or YAML
    Export {
        /// Output format (json, yaml)
        #[clap(long, short = 'f', default_value = "json")]
        format: String,

        /// Output file path (prints to stdout when omitted)
        #[clap(long, short = 'o')]
        output: Option<PathBuf>,

        /// Use the wishlist instead of the collection
        #[clap(long, short = 'w')]
        wishlist: bool,
    },
}

/// Maps the `--wishlist` switch onto a list
pub fn list_kind(wishlist: bool) -> ListKind {
    if wishlist {
        ListKind::Wishlist
    } else {
        ListKind::Collection
    }
}
