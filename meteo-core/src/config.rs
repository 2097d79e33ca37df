use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{model::Coordinates, provider::openmeteo::DEFAULT_ENDPOINT};

/// Location used when neither the command line nor the config file names one.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates { latitude: 43.2833, longitude: -2.1667 };

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://api.open-meteo.com/v1/forecast"
///
/// [location]
/// latitude = 43.2833
/// longitude = -2.1667
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default location for `meteo show`.
    pub location: Option<Coordinates>,

    /// Optional forecast endpoint override.
    pub endpoint: Option<String>,
}

impl Config {
    /// Configured location, or [`DEFAULT_COORDINATES`].
    pub fn coordinates(&self) -> Coordinates {
        self.location.unwrap_or(DEFAULT_COORDINATES)
    }

    pub fn set_location(&mut self, coordinates: Coordinates) {
        self.location = Some(coordinates);
    }

    /// Configured endpoint, or the public Open-Meteo forecast endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Coordinates for one run: explicit values win over the stored location,
    /// which wins over the defaults. Each component falls back independently.
    pub fn resolve_coordinates(&self, latitude: Option<f64>, longitude: Option<f64>) -> Coordinates {
        let base = self.coordinates();
        Coordinates {
            latitude: latitude.unwrap_or(base.latitude),
            longitude: longitude.unwrap_or(base.longitude),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
