use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, FIELD_DELIMITER};
use crate::models::{Item, ItemList};

/// Handles saving and loading one list from its delimited text file.
///
/// Each line holds `title|genre`. The whole file is read on load and
/// rewritten on save; there is no locking and the last writer wins.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the storage file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the list from disk. A missing file is an empty list.
    pub fn load(&self) -> Result<ItemList, StorageError> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:?} does not exist yet, starting empty", self.file_path);
                return Ok(ItemList::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.file_path.clone(),
                    source,
                })
            }
        };

        let list = parse_lines(&content).map_err(|(line, content)| {
            warn!("Malformed line {} in {:?}: {:?}", line, self.file_path, content);
            StorageError::Malformed {
                path: self.file_path.clone(),
                line,
                content,
            }
        })?;

        debug!("Loaded {} item(s) from {:?}", list.len(), self.file_path);
        Ok(list)
    }

    /// Overwrites the file with one line per item
    pub fn save(&self, list: &ItemList) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.file_path.clone(),
            source,
        };

        // Create parent directories if they don't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        fs::write(&self.file_path, format_lines(list)).map_err(io_err)?;

        debug!("Saved {} item(s) to {:?}", list.len(), self.file_path);
        Ok(())
    }
}

/// Parses file content; on failure returns the 1-based line number and text
fn parse_lines(content: &str) -> Result<ItemList, (usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_line(line).ok_or_else(|| (line_no, line.to_string())))
        .collect()
}

fn parse_line(line: &str) -> Option<Item> {
    let mut fields = line.split(FIELD_DELIMITER);
    let (title, genre) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    Item::new(title, genre).ok()
}

fn format_lines(list: &ItemList) -> String {
    list.iter()
        .map(|item| format!("{}{}{}\n", item.title, FIELD_DELIMITER, item.genre))
        .collect()
}
