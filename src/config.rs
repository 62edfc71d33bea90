use crate::error::ConfigError;
use crate::geo::{BoundingBox, Center, SEARCH_RADIUS_MILES};
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const CENTER_LAT: &str = "CENTER_LAT";
pub const CENTER_LON: &str = "CENTER_LON";
pub const FR24_API_KEY: &str = "FR24_API_KEY";
/// Overrides the location of the optional TOML file.
pub const CONFIG_PATH_VAR: &str = "OVERHEAD_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "overhead.toml";
pub const DEFAULT_BASE_URL: &str = "https://fr24api.flightradar24.com";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Everything the pipeline needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub center: Center,
    /// Always derived from `center`; selection and the query must agree.
    pub bounds: BoundingBox,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    /// Bearer token. `None` sends no `Authorization` header.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub directory: PathBuf,
}

/// Optional settings read from `overhead.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub api: ApiFileConfig,
    pub logging: LoggingFileConfig,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiFileConfig {
    pub base_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LoggingFileConfig {
    pub directory: Option<PathBuf>,
}

impl FileConfig {
    /// Reads the TOML file at `path`. A missing or unreadable file yields defaults.
    pub fn read(path: &str) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::File {
            path: path.to_string(),
            message: e.message().to_string(),
        })
    }
}

impl Config {
    /// Loads configuration from the process environment and the optional TOML file.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = FileConfig::read(&path)?;
        Self::from_lookup(|key| std::env::var(key).ok(), file)
    }

    /// Builds a config from a variable lookup and already-parsed file settings.
    pub fn from_lookup<F>(lookup: F, file: FileConfig) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lat = parse_coordinate(&lookup, CENTER_LAT, 90.0)?;
        let lon = parse_coordinate(&lookup, CENTER_LON, 180.0)?;
        let center = Center::new(lat, lon);
        let bounds = BoundingBox::around(center, SEARCH_RADIUS_MILES)?;

        let raw_url = file
            .api
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|_| ConfigError::BaseUrl(raw_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrl(raw_url));
        }

        let api_key = lookup(FR24_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            center,
            bounds,
            api: ApiConfig { base_url, api_key },
            logging: LoggingConfig {
                directory: file
                    .logging
                    .directory
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            },
        })
    }
}

fn parse_coordinate<F>(lookup: &F, key: &'static str, limit: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or(ConfigError::Missing(key))?;
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::Invalid {
            key,
            value: raw.clone(),
        })?;
    if !(-limit..=limit).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(value)
}
