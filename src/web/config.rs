use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::geo::GeoPoint;
use crate::tracker::{TrackingConfig, DEFAULT_POLL_INTERVAL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub satellite: SatelliteConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    /// NORAD id of the tracked object.
    #[serde(default = "default_satellite_id")]
    pub id: u32,
    #[serde(default = "default_satellite_name")]
    pub name: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(
        default = "default_poll_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub poll_interval: Duration,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            id: default_satellite_id(),
            name: default_satellite_name(),
            api_base: default_api_base(),
            poll_interval: default_poll_interval(),
        }
    }
}

fn default_satellite_id() -> u32 {
    25544
}

fn default_satellite_name() -> String {
    "ISS".to_string()
}

fn default_api_base() -> String {
    "https://api.wheretheiss.at/v1/satellites".to_string()
}

fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

/// Optional preset viewer coordinates, "lat, lon". When unset, the page
/// resolves the viewer through browser geolocation instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub coordinates: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn tracking(&self) -> TrackingConfig {
        TrackingConfig {
            satellite_id: self.satellite.id,
            poll_interval: self.satellite.poll_interval,
        }
    }

    pub fn preset_viewer(&self) -> Option<GeoPoint> {
        let coordinates = self.viewer.coordinates.as_deref()?;
        let point = GeoPoint::from_coordinates(coordinates);
        if point.is_none() {
            log::warn!("ignoring invalid viewer coordinates: {coordinates}");
        }
        point
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(&s).map_err(serde::de::Error::custom)
}
