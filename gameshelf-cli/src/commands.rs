use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::path::Path;

use gameshelf_core::{add_item, export, Config, Console, ExportFormat, ListKind, Storage};

pub fn list_items<C: Console + ?Sized>(console: &mut C, config: &Config, kind: ListKind) -> Result<()> {
    let storage = Storage::new(config.path_for(kind));
    let list = storage.load()?;

    if list.is_empty() {
        console.warning(kind.empty_message());
        return Ok(());
    }

    console.println(&format!("{:<4} | {:<40} | {}", "#", "Title", "Genre"));
    console.println(&"-".repeat(70));

    for (idx, item) in list.iter().enumerate() {
        console.println(&format!("{:<4} | {:<40} | {}", idx + 1, item.title, item.genre.blue()));
    }

    Ok(())
}

/// Adds from command line values, prompting only for a field that was left out
pub fn add_item_cli<C: Console + ?Sized>(
    console: &mut C,
    config: &Config,
    kind: ListKind,
    title: Option<&str>,
    genre: Option<&str>,
) -> Result<()> {
    let title = match title {
        Some(t) => t.to_string(),
        None => match console.prompt("Enter game title: ")? {
            Some(t) => t,
            None => anyhow::bail!("Title is required. Use --title to specify a title."),
        },
    };
    let genre = match genre {
        Some(g) => g.to_string(),
        None => match console.prompt("Enter game genre: ")? {
            Some(g) => g,
            None => anyhow::bail!("Genre is required. Use --genre to specify a genre."),
        },
    };

    let storage = Storage::new(config.path_for(kind));
    let mut list = storage.load()?;

    let item = add_item(&mut list, &title, &genre)?;
    storage.save(&list)?;

    console.success(&format!(
        "✓ Added \"{}\" ({}) to {}.",
        item.title,
        item.genre,
        kind.noun()
    ));
    Ok(())
}

pub fn remove_item_cli<C: Console + ?Sized>(
    console: &mut C,
    config: &Config,
    kind: ListKind,
    position: usize,
    skip_confirm: bool,
) -> Result<()> {
    let storage = Storage::new(config.path_for(kind));
    let mut list = storage.load()?;

    let item = match list.get(position) {
        Some(item) => item.clone(),
        None => {
            console.warning(&format!(
                "! Nothing removed: {} has no entry {}.",
                kind.noun(),
                position
            ));
            return Ok(());
        }
    };

    // Confirm removal unless --yes flag is used
    if !skip_confirm && !console.confirm(&format!("Remove \"{}\" ({})?", item.title, item.genre))? {
        console.warning("Removal cancelled.");
        return Ok(());
    }

    list.remove_at(position);
    storage.save(&list)?;

    console.success(&format!("✓ Removed \"{}\" ({}).", item.title, item.genre));
    Ok(())
}

pub fn handle_export_command<C: Console + ?Sized>(
    console: &mut C,
    config: &Config,
    kind: ListKind,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let storage = Storage::new(config.path_for(kind));
    let list = storage.load()?;
    debug!("Exporting {} item(s) from {} as {:?}", list.len(), kind.noun(), format);

    match output {
        Some(path) => {
            export::write(&list, format, path)?;
            console.success(&format!(
                "✓ Exported {} item(s) to {}.",
                list.len(),
                path.display()
            ));
        }
        None => console.println(&export::render(&list, format)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;
    use std::fs;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        Config {
            collection_file: dir.path().join("game_collection.txt"),
            wishlist_file: dir.path().join("wishlist.txt"),
        }
    }

    #[test]
    fn test_list_items_empty_and_filled() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.wishlist_file, "Okami|Action\n").unwrap();

        let mut console = ScriptedConsole::default();
        list_items(&mut console, &config, ListKind::Collection).unwrap();
        assert!(console.printed("Collection is empty."));

        let mut console = ScriptedConsole::default();
        list_items(&mut console, &config, ListKind::Wishlist).unwrap();
        assert!(console.printed("Okami"));
        assert!(console.output.iter().any(|l| l.starts_with("1 ")));
    }

    #[test]
    fn test_add_item_cli_with_both_fields() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let mut console = ScriptedConsole::default();

        add_item_cli(&mut console, &config, ListKind::Collection, Some("Doom"), Some("FPS")).unwrap();

        assert_eq!(fs::read_to_string(&config.collection_file).unwrap(), "Doom|FPS\n");
        assert!(console.printed("Added \"Doom\" (FPS) to collection."));
    }

    #[test]
    fn test_add_item_cli_prompts_for_missing_genre() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let mut console = ScriptedConsole::new(&["FPS"]);

        add_item_cli(&mut console, &config, ListKind::Wishlist, Some("Doom"), None).unwrap();

        assert_eq!(fs::read_to_string(&config.wishlist_file).unwrap(), "Doom|FPS\n");
    }

    #[test]
    fn test_add_item_cli_missing_field_and_closed_input_fails() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let mut console = ScriptedConsole::new(&[]);

        let result = add_item_cli(&mut console, &config, ListKind::Collection, None, Some("FPS"));

        assert!(result.is_err());
        assert!(!config.collection_file.exists());
    }

    #[test]
    fn test_add_item_cli_rejects_empty_genre() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let mut console = ScriptedConsole::default();

        let result = add_item_cli(&mut console, &config, ListKind::Collection, Some("Doom"), Some(" "));

        assert!(result.is_err());
        assert!(!config.collection_file.exists());
    }

    #[test]
    fn test_remove_item_cli_with_yes_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.collection_file, "A|X\nB|Y\n").unwrap();
        // No scripted answers: a confirmation prompt would read as "no"
        let mut console = ScriptedConsole::default();

        remove_item_cli(&mut console, &config, ListKind::Collection, 1, true).unwrap();

        assert_eq!(fs::read_to_string(&config.collection_file).unwrap(), "B|Y\n");
        assert!(console.printed("Removed \"A\" (X)."));
    }

    #[test]
    fn test_remove_item_cli_declined_keeps_file() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.collection_file, "A|X\nB|Y\n").unwrap();
        let mut console = ScriptedConsole::new(&["n"]);

        remove_item_cli(&mut console, &config, ListKind::Collection, 2, false).unwrap();

        assert_eq!(fs::read_to_string(&config.collection_file).unwrap(), "A|X\nB|Y\n");
        assert!(console.printed("Removal cancelled."));
    }

    #[test]
    fn test_remove_item_cli_confirmed() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.wishlist_file, "A|X\nB|Y\n").unwrap();
        let mut console = ScriptedConsole::new(&["y"]);

        remove_item_cli(&mut console, &config, ListKind::Wishlist, 2, false).unwrap();

        assert_eq!(fs::read_to_string(&config.wishlist_file).unwrap(), "A|X\n");
    }

    #[test]
    fn test_remove_item_cli_out_of_range_is_noop() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.collection_file, "A|X\n").unwrap();
        let mut console = ScriptedConsole::default();

        remove_item_cli(&mut console, &config, ListKind::Collection, 5, true).unwrap();

        assert_eq!(fs::read_to_string(&config.collection_file).unwrap(), "A|X\n");
        assert!(console.printed("Nothing removed"));
    }

    #[test]
    fn test_export_to_stdout_and_file() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        fs::write(&config.collection_file, "Doom|FPS\n").unwrap();

        let mut console = ScriptedConsole::default();
        handle_export_command(&mut console, &config, ListKind::Collection, "json", None).unwrap();
        assert!(console.printed("\"title\": \"Doom\""));

        let output = dir.path().join("out.yaml");
        let mut console = ScriptedConsole::default();
        handle_export_command(&mut console, &config, ListKind::Collection, "yaml", Some(&output))
            .unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("title: Doom"));
        assert!(console.printed("Exported 1 item(s)"));
    }

    #[test]
    fn test_export_unknown_format_fails() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let mut console = ScriptedConsole::default();

        assert!(handle_export_command(&mut console, &config, ListKind::Collection, "csv", None).is_err());
    }
}
