use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ItemError, FIELD_DELIMITER};

/// Which of the two lists an operation applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListKind {
    Collection,
    Wishlist,
}

impl ListKind {
    /// Message shown when the list has no items
    pub fn empty_message(&self) -> &'static str {
        match self {
            ListKind::Collection => "Collection is empty.",
            ListKind::Wishlist => "Wishlist is empty.",
        }
    }

    /// Heading printed by the add prompt
    pub fn add_heading(&self) -> &'static str {
        match self {
            ListKind::Collection => "[Add Game]",
            ListKind::Wishlist => "[Add to Wishlist]",
        }
    }

    /// Lowercase noun used in confirmation messages
    pub fn noun(&self) -> &'static str {
        match self {
            ListKind::Collection => "collection",
            ListKind::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Collection => write!(f, "Collection"),
            ListKind::Wishlist => write!(f, "Wishlist"),
        }
    }
}

/// A single game entry: the unit of storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub genre: String,
}

impl Item {
    /// Creates an item from raw input, trimming both fields.
    ///
    /// Fields must be non-empty after trimming and must not contain the
    /// field delimiter or a line break, otherwise the file could not be
    /// read back one item per line.
    pub fn new(title: impl AsRef<str>, genre: impl AsRef<str>) -> Result<Self, ItemError> {
        let title = title.as_ref().trim();
        let genre = genre.as_ref().trim();

        if title.is_empty() {
            return Err(ItemError::EmptyTitle);
        }
        if genre.is_empty() {
            return Err(ItemError::EmptyGenre);
        }
        if !is_storable(title) {
            return Err(ItemError::ContainsDelimiter { field: "Title" });
        }
        if !is_storable(genre) {
            return Err(ItemError::ContainsDelimiter { field: "Genre" });
        }

        Ok(Self {
            title: title.to_string(),
            genre: genre.to_string(),
        })
    }
}

fn is_storable(field: &str) -> bool {
    !field.contains(FIELD_DELIMITER) && !field.contains(['\n', '\r'])
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.genre)
    }
}

/// Ordered list of items; insertion order is kept and duplicates are allowed.
///
/// Items have no persistent id. Positions handed out to users are 1-based
/// and only valid for the snapshot they were displayed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns the item at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Item> {
        position.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// Removes the item at a 1-based position.
    /// Position 0 or past the end leaves the list untouched.
    pub fn remove_at(&mut self, position: usize) -> Option<Item> {
        if position == 0 || position > self.items.len() {
            return None;
        }
        Some(self.items.remove(position - 1))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
