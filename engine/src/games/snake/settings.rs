use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::FieldSize;

const MAX_FIELD_SIDE: i32 = 1000;
const MIN_TICK_INTERVAL_MS: u64 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub field_width: i32,
    pub field_height: i32,
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SnakeSettings {
    pub fn field_size(&self) -> Result<FieldSize, String> {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        self.field_size()?;
        if self.field_width > MAX_FIELD_SIDE || self.field_height > MAX_FIELD_SIDE {
            return Err(format!(
                "Field dimensions must not exceed {}x{}",
                MAX_FIELD_SIDE, MAX_FIELD_SIDE
            ));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 30,
            field_height: 20,
            tick_interval_ms: 100,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("torus_snake_settings_{}.yaml", random_number))
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = SnakeSettings {
            field_width: 0,
            ..SnakeSettings::default()
        };
        assert_eq!(
            settings.validate().unwrap_err(),
            "Field width must be positive"
        );

        let settings = SnakeSettings {
            field_height: 5000,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SnakeSettings {
            tick_interval_ms: 1,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_without_seed_uses_none() {
        let serializer = YamlConfigSerializer::new();
        let settings: SnakeSettings = serializer
            .deserialize("field_width: 12\nfield_height: 8\ntick_interval_ms: 50\n")
            .unwrap();
        assert_eq!(settings.field_width, 12);
        assert_eq!(settings.field_height, 8);
        assert_eq!(settings.tick_interval(), Duration::from_millis(50));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), SnakeSettings::default());
    }

    #[test]
    fn test_settings_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let settings = SnakeSettings {
            field_width: 10,
            field_height: 7,
            tick_interval_ms: 250,
            seed: Some(5),
        };

        let writer: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&settings).unwrap();

        let reader: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reader.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content("field_width: -3\nfield_height: 8\ntick_interval_ms: 50\n")
            .unwrap();

        let manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&file_path);
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Invalid settings"), "{}", err);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_set_config_refuses_invalid_settings() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&file_path);
        let settings = SnakeSettings {
            field_width: 1,
            ..SnakeSettings::default()
        };
        assert!(manager.set_config(&settings).is_err());
        assert!(!file_path.exists());
    }
}
