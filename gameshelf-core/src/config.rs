use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::ListKind;

pub const DEFAULT_COLLECTION_FILE: &str = "game_collection.txt";
pub const DEFAULT_WISHLIST_FILE: &str = "wishlist.txt";

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "GAMESHELF_CONFIG";
pub const COLLECTION_ENV: &str = "GAMESHELF_COLLECTION";
pub const WISHLIST_ENV: &str = "GAMESHELF_WISHLIST";

/// Where each list lives on disk. Built once at startup and handed to
/// every store and session explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub collection_file: PathBuf,
    pub wishlist_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_file: PathBuf::from(DEFAULT_COLLECTION_FILE),
            wishlist_file: PathBuf::from(DEFAULT_WISHLIST_FILE),
        }
    }
}

/// Explicit per-invocation overrides, typically from command line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub collection_file: Option<PathBuf>,
    pub wishlist_file: Option<PathBuf>,
}

impl Config {
    /// Returns the file backing the given list
    pub fn path_for(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::Collection => &self.collection_file,
            ListKind::Wishlist => &self.wishlist_file,
        }
    }

    /// Loads a config file. Missing keys fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file deserializes to null, which serde(default) doesn't cover
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the effective configuration.
    ///
    /// Precedence, lowest first: built-in defaults, the config file,
    /// `GAMESHELF_COLLECTION` / `GAMESHELF_WISHLIST`, then `overrides`.
    /// An explicitly named config file must exist; the default one is
    /// only read when present.
    pub fn resolve(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |key| env::var_os(key))
    }

    /// Same as [`Config::resolve`] with environment lookups going through `var`
    pub fn resolve_with<F>(overrides: &Overrides, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let explicit = overrides
            .config_file
            .clone()
            .or_else(|| var(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match get_config_path() {
                Some(path) if path.exists() => Self::load(path)?,
                _ => Self::default(),
            },
        };

        if let Some(path) = var(COLLECTION_ENV) {
            config.collection_file = PathBuf::from(path);
        }
        if let Some(path) = var(WISHLIST_ENV) {
            config.wishlist_file = PathBuf::from(path);
        }

        if let Some(path) = &overrides.collection_file {
            config.collection_file = path.clone();
        }
        if let Some(path) = &overrides.wishlist_file {
            config.wishlist_file = path.clone();
        }

        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// Gets the default path of the config file (`~/.gameshelf.yaml`)
pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gameshelf.yaml"))
}
