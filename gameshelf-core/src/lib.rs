pub mod config;
pub mod error;
pub mod export;
pub mod manager;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use config::{get_config_path, Config, Overrides};
pub use error::{ConfigError, ItemError, StorageError, FIELD_DELIMITER};
pub use export::ExportFormat;
pub use manager::{
    add_item, add_once, prompt_add, prompt_remove, remove_item, show_list, Command, Console,
    RemoveOutcome, Session,
};
pub use models::{Item, ItemList, ListKind};
pub use storage::Storage;
