//! List management: pure operations on an [`ItemList`] plus the interactive
//! session that drives them through a [`Console`].
//!
//! The session never caches a list between iterations. Every pass reloads
//! the file so edits made outside the program show up, and every mutating
//! action writes the whole list straight back.

use anyhow::Result;
use log::warn;

use crate::error::ItemError;
use crate::models::{Item, ItemList, ListKind};
use crate::storage::Storage;

/// Terminal abstraction used by the interactive layer
pub trait Console {
    /// Asks for one line of input. `None` means input was closed or
    /// interrupted and the caller should back out.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Plain output line
    fn println(&mut self, text: &str);

    /// Section heading
    fn heading(&mut self, text: &str) {
        self.println(text);
    }

    /// Confirmation of a completed change
    fn success(&mut self, text: &str) {
        self.println(text);
    }

    /// Rejected input or a recoverable problem
    fn warning(&mut self, text: &str) {
        self.println(text);
    }

    /// Yes/no question, defaulting to no
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} [y/N]: ", message))?;
        Ok(answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }
}

/// Result of a removal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Item),
    /// A number that is `0`, negative or past the end
    Cancelled,
    /// Input was not a number
    Invalid(String),
}

/// Validates and appends a new item, returning a copy of what was stored
pub fn add_item(list: &mut ItemList, title: &str, genre: &str) -> Result<Item, ItemError> {
    let item = Item::new(title, genre)?;
    list.push(item.clone());
    Ok(item)
}

/// Removes the item at the 1-based position typed by the user
pub fn remove_item(list: &mut ItemList, choice: &str) -> RemoveOutcome {
    let choice = choice.trim();
    let digits = choice.strip_prefix(['+', '-']).unwrap_or(choice);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return RemoveOutcome::Invalid(choice.to_string());
    }

    // Negative and overflowing numbers are out of range, not invalid
    let position = match digits.parse::<usize>() {
        Ok(position) if !choice.starts_with('-') => position,
        _ => return RemoveOutcome::Cancelled,
    };

    match list.remove_at(position) {
        Some(item) => RemoveOutcome::Removed(item),
        None => RemoveOutcome::Cancelled,
    }
}

/// Commands accepted inside a list session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Refresh,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "add" | "a" => Command::Add,
            "remove" | "r" => Command::Remove,
            "refresh" | "" => Command::Refresh,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(input),
        }
    }
}

/// Prints the list as `n. title (genre)` or the empty message
pub fn show_list<C: Console + ?Sized>(console: &mut C, kind: ListKind, list: &ItemList) {
    if list.is_empty() {
        console.println(kind.empty_message());
        return;
    }
    for (idx, item) in list.iter().enumerate() {
        console.println(&format!("{}. {}", idx + 1, item));
    }
}

/// Prompts for a title and genre and appends the item.
/// Returns whether the list changed; persisting is up to the caller.
pub fn prompt_add<C: Console + ?Sized>(console: &mut C, kind: ListKind, list: &mut ItemList) -> Result<bool> {
    console.heading(&format!("\n{}", kind.add_heading()));

    let Some(title) = console.prompt("Enter game title: ")? else {
        return Ok(false);
    };
    let Some(genre) = console.prompt("Enter game genre: ")? else {
        return Ok(false);
    };

    match add_item(list, &title, &genre) {
        Ok(item) => {
            let message = format!("Added \"{}\" ({}) to {}.", item.title, item.genre, kind.noun());
            console.success(&message);
            Ok(true)
        }
        Err(err @ ItemError::ContainsDelimiter { .. }) => {
            warn!("Rejected add to {}: {}", kind.noun(), err);
            console.warning(&format!("{}.", err));
            Ok(false)
        }
        Err(_) => {
            console.warning("Title and genre cannot be empty.");
            Ok(false)
        }
    }
}

/// Shows the list and removes the entry the user picks.
/// Returns whether the list changed.
pub fn prompt_remove<C: Console + ?Sized>(console: &mut C, kind: ListKind, list: &mut ItemList) -> Result<bool> {
    show_list(console, kind, list);
    if list.is_empty() {
        return Ok(false);
    }

    let message = format!("Enter number of game to remove from {} (0 to cancel): ", kind.noun());
    let Some(choice) = console.prompt(&message)? else {
        return Ok(false);
    };

    match remove_item(list, &choice) {
        RemoveOutcome::Removed(item) => {
            console.success(&format!("Removed \"{}\" ({}).", item.title, item.genre));
            Ok(true)
        }
        RemoveOutcome::Cancelled => Ok(false),
        RemoveOutcome::Invalid(_) => {
            console.warning("Invalid input.");
            Ok(false)
        }
    }
}

/// One-shot add against a store: load, prompt, persist if added
pub fn add_once<C: Console + ?Sized>(console: &mut C, storage: &Storage, kind: ListKind) -> Result<bool> {
    let mut list = storage.load()?;
    let added = prompt_add(console, kind, &mut list)?;
    if added {
        storage.save(&list)?;
    }
    Ok(added)
}

/// Interactive management loop for a single list
pub struct Session<'a> {
    storage: &'a Storage,
    kind: ListKind,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a Storage, kind: ListKind) -> Self {
        Self { storage, kind }
    }

    /// Runs until the user quits or input closes.
    ///
    /// Storage failures are reported through the console and end the
    /// session; only console failures are returned as errors.
    pub fn run<C: Console + ?Sized>(&self, console: &mut C) -> Result<()> {
        loop {
            let mut list = match self.storage.load() {
                Ok(list) => list,
                Err(err) => {
                    console.warning(&format!("Could not load {}: {}", self.kind.noun(), err));
                    return Ok(());
                }
            };

            console.heading(&format!("\nCurrent {}:", self.kind.noun()));
            show_list(console, self.kind, &list);
            console.println(&format!("\n{} Commands: add | remove | refresh | quit", self.kind));

            let Some(input) = console.prompt("Command: ")? else {
                return Ok(());
            };

            let changed = match Command::parse(&input) {
                Command::Quit => return Ok(()),
                Command::Refresh => false,
                Command::Add => prompt_add(console, self.kind, &mut list)?,
                Command::Remove => prompt_remove(console, self.kind, &mut list)?,
                Command::Unknown(_) => {
                    console.warning("Invalid command. Type 'add', 'remove', 'refresh', or 'quit'.");
                    false
                }
            };

            if changed {
                if let Err(err) = self.storage.save(&list) {
                    console.warning(&format!("Could not save {}: {}", self.kind.noun(), err));
                    return Ok(());
                }
            }
        }
    }
}
