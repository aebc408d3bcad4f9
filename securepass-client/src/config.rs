// securepass-client/src/config.rs
use anyhow::{anyhow, Result};
use directories::BaseDirs;
use mailgen::CharacterClasses;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub inbox: InboxConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Default password length. The CLI keeps this to the 6..=32 range.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    /// Character classes drawn from when generating passwords.
    #[serde(default)]
    pub classes: CharacterClasses,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            classes: CharacterClasses::default(),
        }
    }
}

fn default_password_length() -> usize {
    12
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InboxConfig {
    /// Messages synthesized per inbox refresh.
    #[serde(default = "default_message_count")]
    pub message_count: usize,
    /// Artificial delay before refresh results are shown. Display-side
    /// only; generation itself never sleeps.
    #[serde(default = "default_simulate_latency_ms")]
    pub simulate_latency_ms: u64,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            message_count: default_message_count(),
            simulate_latency_ms: default_simulate_latency_ms(),
        }
    }
}

fn default_message_count() -> usize {
    5
}

fn default_simulate_latency_ms() -> u64 {
    800
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            let default = Self::default();
            default.save()?;
            default
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(length) = std::env::var("SECUREPASS_PASSWORD_LENGTH") {
            self.generator.password_length = length
                .parse()
                .map_err(|_| anyhow!("SECUREPASS_PASSWORD_LENGTH is not a number: {}", length))?;
        }
        if let Ok(classes) = std::env::var("SECUREPASS_CLASSES") {
            self.generator.classes = classes.parse()?;
        }
        if let Ok(count) = std::env::var("SECUREPASS_MESSAGE_COUNT") {
            self.inbox.message_count = count
                .parse()
                .map_err(|_| anyhow!("SECUREPASS_MESSAGE_COUNT is not a number: {}", count))?;
        }
        if std::env::var_os("SECUREPASS_NO_DELAY").is_some() {
            self.inbox.simulate_latency_ms = 0;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_dir.join("config.toml"), content)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    fn config_dir() -> Result<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("Cannot determine config directory"))?;
        Ok(base_dirs.config_dir().join("securepass"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generator.password_length, 12);
        assert_eq!(config.generator.classes, CharacterClasses::default());
        assert_eq!(config.inbox.message_count, 5);
        assert_eq!(config.inbox.simulate_latency_ms, 800);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [generator]
            password_length = 20

            [generator.classes]
            symbols = true

            [inbox]
            simulate_latency_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.password_length, 20);
        assert!(config.generator.classes.symbols);
        assert!(config.generator.classes.lower);
        assert_eq!(config.inbox.message_count, 5);
        assert_eq!(config.inbox.simulate_latency_ms, 0);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&content).unwrap();
        assert_eq!(back.generator.password_length, config.generator.password_length);
        assert_eq!(back.inbox.message_count, config.inbox.message_count);
    }
}
