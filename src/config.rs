//! Service configuration read from the environment.

use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::category::model::DisplayMode;
use crate::event::model::TimeFrame;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an integer, got '{value}'")]
    InvalidInteger { key: &'static str, value: String },
    #[error("{key} must be true or false, got '{value}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} is not a known time frame: '{value}'")]
    InvalidTimeFrame { key: &'static str, value: String },
    #[error("{key} must be between 0 and {max} seconds, got '{value}'", max = MAX_CACHE_TTL_SECS)]
    InvalidDuration { key: &'static str, value: String },
}

/// Upper bound for the cache TTL: one year.
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub bind_address: String,
    pub locale: String,
    /// Base URL of the host site's page links.
    pub base_url: String,
    /// Prefix for category icon file names.
    pub icon_base_url: String,
    pub category_display: DisplayMode,
    /// Page that lists events; category links point here when it is set.
    pub list_page_id: Option<i64>,
    /// Storage folders to take events from. Empty means all folders.
    pub pages: Vec<i64>,
    pub recursive: bool,
    pub time_frame: TimeFrame,
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_address: "0.0.0.0:8080".to_string(),
            locale: "en".to_string(),
            base_url: "/index.php".to_string(),
            icon_base_url: "/uploads/tx_seminars/".to_string(),
            category_display: DisplayMode::Text,
            list_page_id: None,
            pages: Vec::new(),
            recursive: false,
            time_frame: TimeFrame::CurrentAndUpcoming,
            cache_ttl: Duration::from_secs(600),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let list_page_id = match get("SEMINARS_LIST_PAGE_ID") {
            Some(value) => Some(parse_integer("SEMINARS_LIST_PAGE_ID", &value)?),
            None => None,
        };

        let pages = match get("SEMINARS_PAGES") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|uid| !uid.is_empty())
                .map(|uid| parse_integer("SEMINARS_PAGES", uid))
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.pages,
        };

        let recursive = match get("SEMINARS_RECURSIVE") {
            Some(value) => parse_bool("SEMINARS_RECURSIVE", &value)?,
            None => defaults.recursive,
        };

        let time_frame = match get("SEMINARS_TIME_FRAME") {
            Some(value) => {
                TimeFrame::parse(&value).ok_or(ConfigError::InvalidTimeFrame {
                    key: "SEMINARS_TIME_FRAME",
                    value,
                })?
            }
            None => defaults.time_frame,
        };

        let cache_ttl = match get("SEMINARS_CACHE_TTL_SECS") {
            Some(value) => parse_duration_secs("SEMINARS_CACHE_TTL_SECS", &value)?,
            None => defaults.cache_ttl,
        };

        Ok(Self {
            database_url: get("SEMINARS_DATABASE_URL"),
            bind_address: get("SEMINARS_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            locale: get("SEMINARS_LOCALE").unwrap_or(defaults.locale),
            base_url: get("SEMINARS_BASE_URL").unwrap_or(defaults.base_url),
            icon_base_url: get("SEMINARS_ICON_BASE_URL").unwrap_or(defaults.icon_base_url),
            category_display: get("SEMINARS_CATEGORY_DISPLAY")
                .map(|value| DisplayMode::from_setting(&value))
                .unwrap_or(defaults.category_display),
            list_page_id,
            pages,
            recursive,
            time_frame,
            cache_ttl,
        })
    }
}

fn parse_integer(key: &'static str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidInteger {
            key,
            value: value.to_string(),
        })
}

fn parse_duration_secs(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let secs = parse_integer(key, value)?;
    u64::try_from(secs)
        .ok()
        .filter(|secs| *secs <= MAX_CACHE_TTL_SECS)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidDuration {
            key,
            value: value.to_string(),
        })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
