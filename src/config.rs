use color_eyre::Result;
use color_eyre::eyre::eyre;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::{Room, WheelSettings};
use crate::protocol::DEFAULT_DISPLAY_NAME;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
}

/// Wheel debounce tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub threshold: f64,
    pub cooldown_ms: u64,
    /// Delta contributed by one terminal scroll event
    pub wheel_notch_delta: f64,
}

/// Chat server connection details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub server_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub default_name: String,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let settings = WheelSettings::default();
        Self {
            threshold: settings.threshold,
            cooldown_ms: u64::try_from(settings.cooldown.as_millis()).unwrap_or(u64::MAX),
            wheel_notch_delta: 10.0,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn wheel_settings(&self) -> WheelSettings {
        WheelSettings {
            threshold: self.threshold,
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            server_url: "wss://chat.def1de.com/ws".to_string(),
            name: None,
            default_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lobby=info".to_string(),
        }
    }
}

fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(1, "General"),
        Room::new(2, "Random"),
        Room::new(3, "Rust"),
        Room::new(4, "Off-topic"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            chat: ChatConfig::default(),
            logging: LoggingConfig::default(),
            rooms: default_rooms(),
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found.
    /// The flag is `true` when the default file was just written.
    pub fn load() -> Result<(Self, bool)> {
        Self::load_or_create(&Self::config_path()?)
    }

    pub fn load_or_create(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            return Ok((Self::load_from(path)?, false));
        }
        let config = Config::default();
        config.save_to(path)?;
        Ok((config, true))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses and validates a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Name announced to the chat server
    #[must_use]
    pub fn display_name(&self) -> String {
        crate::protocol::display_name(self.chat.name.as_deref(), &self.chat.default_name)
    }

    fn validate(&self) -> Result<()> {
        if !self.carousel.threshold.is_finite() || self.carousel.threshold <= 0.0 {
            return Err(eyre!(
                "carousel.threshold must be a positive number, got {}",
                self.carousel.threshold
            ));
        }
        if !self.carousel.wheel_notch_delta.is_finite() || self.carousel.wheel_notch_delta <= 0.0 {
            return Err(eyre!(
                "carousel.wheel_notch_delta must be a positive number, got {}",
                self.carousel.wheel_notch_delta
            ));
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.id) {
                return Err(eyre!("duplicate room id {} ({})", room.id, room.name));
            }
        }
        Ok(())
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "lobby")
        .ok_or_else(|| eyre!("Could not determine config directory"))
}
