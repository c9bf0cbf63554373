use std::path::PathBuf;

use common::config::{load_config, Validate};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub log_bot_scores: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

pub fn get_config() -> Result<Config, String> {
    load_config(&get_config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrips_through_yaml() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_yaml_ng::from_str("log_prefix: Game\n").unwrap();

        assert_eq!(config.log_prefix.as_deref(), Some("Game"));
        assert!(!config.log_bot_scores);
    }

    #[test]
    fn test_empty_prefix_fails_validation() {
        let config = Config {
            log_prefix: Some(String::new()),
            log_bot_scores: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
