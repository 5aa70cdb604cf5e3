use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::letter_catch::{DEFAULT_MAX_ATTEMPTS, DEFAULT_ROUND_COUNT};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "letter_catch_server.yaml";

const MAX_ROUND_COUNT: usize = 20;
const MAX_ATTEMPTS_LIMIT: u32 = 50;

pub type ServerConfigManager =
    ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<PathBuf>) -> ServerConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: Option<PathBuf>,
    pub enable_debug_endpoint: bool,
    pub game: GameSettings,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.trim().is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if let Some(path) = &self.static_files_path
            && path.as_os_str().is_empty()
        {
            return Err("static_files_path must not be empty if provided".to_string());
        }
        self.game.validate()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: None,
            enable_debug_endpoint: false,
            game: GameSettings::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct GameSettings {
    pub round_count: usize,
    pub max_attempts: u32,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.round_count == 0 {
            return Err("round_count must be greater than 0".to_string());
        }
        if self.round_count > MAX_ROUND_COUNT {
            return Err(format!("round_count must not exceed {}", MAX_ROUND_COUNT));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(format!("max_attempts must not exceed {}", MAX_ATTEMPTS_LIMIT));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_count: DEFAULT_ROUND_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigSerializer;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let serializer = YamlConfigSerializer::new();
        let config = ServerConfig::default();

        let yaml = serializer.serialize(&config).unwrap();
        let parsed: ServerConfig = serializer.deserialize(&yaml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();

        let parsed: ServerConfig = serializer
            .deserialize("enable_debug_endpoint: true\ngame:\n  max_attempts: 8\n")
            .unwrap();

        assert!(parsed.enable_debug_endpoint);
        assert_eq!(parsed.game.max_attempts, 8);
        assert_eq!(parsed.game.round_count, DEFAULT_ROUND_COUNT);
        assert_eq!(parsed.bind_address, "0.0.0.0:5000");
    }

    #[test]
    fn test_game_settings_bounds() {
        let too_many_rounds = GameSettings {
            round_count: MAX_ROUND_COUNT + 1,
            max_attempts: 5,
        };
        let no_attempts = GameSettings {
            round_count: 5,
            max_attempts: 0,
        };

        assert!(too_many_rounds.validate().is_err());
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn test_empty_bind_address_rejected() {
        let config = ServerConfig {
            bind_address: " ".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
