mod schema;

pub use schema::{Config, DatasetConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/framcalc/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("framcalc")
}

/// Get the default config file path (~/.config/framcalc/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// With no explicit path, a missing file at the default location is fine and
/// yields the built-in defaults. An explicitly passed path must exist.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_expected_suffix() {
        let path = get_config_path();
        assert!(path.ends_with(".config/framcalc/config.yaml"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let result = load_config(Some(PathBuf::from("/nonexistent/framcalc-config.yaml")));
        assert!(result.is_err());
    }
}
