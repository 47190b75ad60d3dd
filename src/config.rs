// src/config.rs
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Process configuration, read from a JSON file with camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root of the catalog; images are expected under `<picturePath>/images/`.
    pub picture_path: String,
}

const TEMPLATE: &str = "{\n\"picturePath\": \"\"\n}\n";

impl Config {
    /// Loads the config file. A missing file gets a blank template written in
    /// its place and yields `Ok(None)`, as does a template nobody filled out;
    /// the caller is expected to tell the user to edit it.
    pub fn load_or_init(path: &Path) -> Result<Option<Config>, EngineError> {
        if !path.exists() {
            fs::write(path, TEMPLATE)?;
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        if config.picture_path.is_empty() {
            return Ok(None);
        }
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_a_template_and_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::load_or_init(&path).unwrap().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
        // The fresh template is itself an unfilled config.
        assert!(Config::load_or_init(&path).unwrap().is_none());
    }

    #[test]
    fn filled_config_parses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"picturePath\": \"famous/\"}").unwrap();
        let config = Config::load_or_init(&path).unwrap().unwrap();
        assert_eq!(config.picture_path, "famous/");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Config::load_or_init(&path),
            Err(EngineError::Config(_))
        ));
    }
}
