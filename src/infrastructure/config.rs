//! Configuration management

use crate::error::{KahawatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "kahawat.toml";

/// Environment variable overriding the proverb file location
pub const FILE_ENV: &str = "KAHAWAT_FILE";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("proverbs.json"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from kahawat.toml in the given directory, or defaults if absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(KahawatError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| KahawatError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        validate_log_level(&config.log_level)?;
        Ok(config)
    }

    /// Save config to kahawat.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Resolve the proverb file: explicit flag, then KAHAWAT_FILE, then config.
    ///
    /// Relative paths are taken against `dir`.
    pub fn resolve_data_file(&self, dir: &Path, flag: Option<&Path>) -> PathBuf {
        let chosen = match flag {
            Some(path) => path.to_path_buf(),
            None => std::env::var_os(FILE_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| self.data_file.clone()),
        };

        if chosen.is_absolute() {
            chosen
        } else {
            dir.join(chosen)
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data_file" => Ok(self.data_file.display().to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data_file" => {
                if value.trim().is_empty() {
                    return Err(KahawatError::Config(
                        "data_file cannot be empty".to_string(),
                    ));
                }
                self.data_file = PathBuf::from(value);
            }
            "log_level" => {
                let level = value.to_lowercase();
                validate_log_level(&level)?;
                self.log_level = level;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> KahawatError {
    KahawatError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: data_file, log_level",
        key
    ))
}

fn validate_log_level(level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(KahawatError::Config(format!("Invalid log level: {}", level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("proverbs.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("data_file", "collection.json").unwrap();
        config.set("log_level", "DEBUG").unwrap();

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("collection.json"));
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "log_level = \"info\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.data_file, PathBuf::from("proverbs.json"));
    }

    #[test]
    fn test_invalid_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(KahawatError::Config(_))
        ));

        fs::write(temp.path().join(CONFIG_FILE), "data_file = [").unwrap();
        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(KahawatError::Config(_))
        ));
    }

    #[test]
    fn test_get_and_set_reject_unknown_keys() {
        let mut config = Config::default();
        assert!(config.get("editor").is_err());
        assert!(config.set("editor", "vim").is_err());
        assert!(config.set("log_level", "loud").is_err());
        assert!(config.set("data_file", "  ").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_data_file_prefers_flag() {
        let config = Config::default();
        let dir = Path::new("/work");

        let resolved = config.resolve_data_file(dir, Some(Path::new("other.json")));
        assert_eq!(resolved, PathBuf::from("/work/other.json"));

        let resolved = config.resolve_data_file(dir, Some(Path::new("/abs/p.json")));
        assert_eq!(resolved, PathBuf::from("/abs/p.json"));
    }
}
