use std::path::Path;

use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config file. A missing file is not an error: defaults
/// apply, so a binary runs without any config present.
pub fn load_config<TConfig>(path: &Path) -> Result<TConfig, String>
where
    TConfig: DeserializeOwned + Default + Validate,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TConfig::default()),
        Err(e) => return Err(format!("Failed to read config file {}: {}", path.display(), e)),
    };

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
