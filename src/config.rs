use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub show_welcome: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            show_welcome: true,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config, letting the environment point at a
        // non-local tracker deployment
        let mut config = Config::default();
        if let Ok(url) = env::var("TEAMCHAT_BASE_URL") {
            config.base_url = url;
        }

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("teamchat").join("config.json"))
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if config.base_url.is_empty() {
        return Err(ChatError::config_error("base_url is required"));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ChatError::config_error(
            "base_url must start with http:// or https://",
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ChatError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    match config.log_level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => {}
        other => {
            return Err(ChatError::config_error(format!(
                "unknown log_level: {}",
                other
            )))
        }
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_base_url() {
        let mut config = Config::default();
        config.base_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_non_http_base_url() {
        let mut config = Config::default();
        config.base_url = "ftp://tracker.local".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_timeout() {
        let mut config = Config::default();
        config.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_bad_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.base_url = "https://tracker.example.com".to_string();
        config.show_welcome = false;

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded.base_url, "https://tracker.example.com");
        assert!(!loaded.show_welcome);
        assert_eq!(loaded.request_timeout_secs, config.request_timeout_secs);
    }
}
