use anyhow::Result;

use gameshelf_core::{add_once, Config, Console, ListKind, Session, Storage};

pub const PROGRAM_NAME: &str = "Game Collection Manager";
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Entries of the top-level menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    ViewCollection,
    AddToCollection,
    About,
    Help,
    Quit,
    ViewWishlist,
    Unknown(String),
}

impl MenuChoice {
    /// Accepts the entry number, its name or a short alias
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "1" | "view" | "manage" => MenuChoice::ViewCollection,
            "2" | "add" | "a" => MenuChoice::AddToCollection,
            "3" | "about" => MenuChoice::About,
            "4" | "help" => MenuChoice::Help,
            "5" | "quit" | "exit" => MenuChoice::Quit,
            "6" | "wishlist" | "wish" | "w" => MenuChoice::ViewWishlist,
            _ => MenuChoice::Unknown(input),
        }
    }
}

pub fn about_text(config: &Config) -> String {
    format!(
        "\n{PROGRAM_NAME} {VERSION}\n\n\
         Keeps track of the games you own and the games you want.\n\
         Each list is a plain text file with one `title|genre` entry per line:\n\
         \x20 collection: {}\n\
         \x20 wishlist:   {}\n\
         The files are re-read before every screen, so edits made elsewhere show up\n\
         after a refresh. There is no web interface or database.\n",
        config.collection_file.display(),
        config.wishlist_file.display(),
    )
}

pub fn help_text() -> String {
    format!(
        "\nHow to use {PROGRAM_NAME}:\n\n\
         - Run: gameshelf (or `gameshelf --help` for one-shot commands)\n\
         - At the main menu, type a command or its number (e.g. 'view' or '1', 'add' or '2').\n\
         - To view or remove games, select 'view'/'1' (collection) or 'wishlist'/'6'.\n\
         - At the list prompt, type:\n\
         \x20   add     - to add a new game\n\
         \x20   remove  - to remove a game (you'll be asked for the number)\n\
         \x20   refresh - to reload the list\n\
         \x20   quit    - to go back to the main menu\n\
         - Type 'quit' or '5' at the main menu to exit.\n"
    )
}

/// Runs the top-level menu until the user quits or input closes
pub fn run<C: Console + ?Sized>(config: &Config, console: &mut C) -> Result<()> {
    let collection = Storage::new(config.path_for(ListKind::Collection));
    let wishlist = Storage::new(config.path_for(ListKind::Wishlist));

    let rule = "=".repeat(40);
    console.heading(&format!("\n{rule}\n{PROGRAM_NAME} {VERSION}\n{rule}"));

    loop {
        console.println("\nMain Menu - enter a command or number:");
        console.println("  1. view     - View/manage collection");
        console.println("  2. add      - Add a new game");
        console.println("  3. about    - About this program");
        console.println("  4. help     - How to use");
        console.println("  5. quit     - Exit program");
        console.println("  6. wishlist - View/manage wishlist");

        let Some(input) = console.prompt("Command: ")? else {
            console.println("Goodbye!");
            return Ok(());
        };

        match MenuChoice::parse(&input) {
            MenuChoice::ViewCollection => Session::new(&collection, ListKind::Collection).run(console)?,
            MenuChoice::ViewWishlist => Session::new(&wishlist, ListKind::Wishlist).run(console)?,
            MenuChoice::AddToCollection => {
                if let Err(err) = add_once(console, &collection, ListKind::Collection) {
                    console.warning(&format!("Could not add game: {:#}", err));
                }
            }
            MenuChoice::About => console.println(&about_text(config)),
            MenuChoice::Help => console.println(&help_text()),
            MenuChoice::Quit => {
                console.println("Goodbye!");
                return Ok(());
            }
            MenuChoice::Unknown(_) => console.warning(
                "Invalid command. Please type 'view', 'add', 'about', 'help', 'quit', 'wishlist' or the corresponding number.",
            ),
        }
    }
}
