use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::ItemList;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            _ => anyhow::bail!("Unknown export format: {}. Supported formats: json, yaml", s),
        }
    }
}

/// Serializes the list as a JSON array of `{title, genre}` objects
pub fn to_json(list: &ItemList) -> Result<String> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Serializes the list as a YAML sequence
pub fn to_yaml(list: &ItemList) -> Result<String> {
    Ok(serde_yaml::to_string(list)?)
}

pub fn render(list: &ItemList, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(list),
        ExportFormat::Yaml => to_yaml(list),
    }
}

/// Export the list to a file
pub fn write(list: &ItemList, format: ExportFormat, output_path: &Path) -> Result<()> {
    let content = render(list, format)?;
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write export to {:?}", output_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use tempfile::tempdir;

    fn sample() -> ItemList {
        ItemList::from(vec![
            Item::new("Chrono Trigger", "RPG").unwrap(),
            Item::new("Doom", "FPS").unwrap(),
        ])
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_to_json_is_array_of_objects() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["title"], "Chrono Trigger");
        assert_eq!(value[0]["genre"], "RPG");
        assert_eq!(value[1]["title"], "Doom");
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_to_yaml_reads_back() {
        let yaml = to_yaml(&sample()).unwrap();
        let loaded: ItemList = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("collection.json");

        write(&sample(), ExportFormat::Json, &output_path).unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"Chrono Trigger\""));
    }

    #[test]
    fn test_empty_list_exports_empty_array() {
        assert_eq!(to_json(&ItemList::new()).unwrap(), "[]");
    }
}
