// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Configuration file handling.

use crate::sensor::{AirQualityThresholds, TOTAL_FILTER_LIFE};
use config::Config;
use log::{info, warn};
use serde_with::{DurationSeconds, serde_as};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

/// Default configuration file.
pub const DEF_CONFIG_FILE: &str = "configuration.yaml";

/// Prefix of environment variables overriding configuration values.
///
/// Nested keys are separated with `__`, e.g. `WINIX_WINIX__TOTAL_FILTER_LIFE=4320`.
pub const ENV_PREFIX: &str = "WINIX";

#[derive(Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub winix: WinixSettings,
    pub device: DeviceSettings,
    pub polling: PollingSettings,
}

/// Device model specific normalization settings.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct WinixSettings {
    /// Rated filter life in hours.
    pub total_filter_life: u32,
    #[serde(default)]
    pub air_quality: AirQualityThresholds,
}

impl Default for WinixSettings {
    fn default() -> Self {
        Self {
            total_filter_life: TOTAL_FILTER_LIFE,
            air_quality: Default::default(),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct DeviceSettings {
    /// Device id, only used for log context if the status response doesn't contain one.
    pub id: Option<String>,
    /// Device name used in the sensor entity ids.
    pub alias: String,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            id: None,
            alias: "winix".to_string(),
        }
    }
}

#[serde_as]
#[derive(Clone, Copy, serde::Deserialize, serde::Serialize)]
pub struct PollingSettings {
    /// How often the device status is refreshed in watch mode.
    #[serde_as(as = "DurationSeconds")]
    #[serde(rename = "interval_sec")]
    pub interval: Duration,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
        }
    }
}

impl Display for PollingSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polling interval={:?}", self.interval)
    }
}

/// Load the configuration settings.
///
/// The application provides default values which can be overriden in the following order:
/// 1. Configuration settings in the yaml configuration file specified in `filename`
/// 2. Environment variables with prefix `WINIX_`
///
/// Without a `filename`, the default configuration file is used if it exists.
pub fn get_configuration(filename: Option<&str>) -> Result<Settings, config::ConfigError> {
    let filename = match filename {
        Some(f) => Some(f),
        None if Path::new(DEF_CONFIG_FILE).is_file() => {
            info!("Loading default configuration file: {DEF_CONFIG_FILE}");
            Some(DEF_CONFIG_FILE)
        }
        None => None,
    };

    // default configuration
    let mut config = Config::builder().add_source(Config::try_from(&Settings::default())?);
    // read optional configuration file to override defaults
    if let Some(filename) = filename {
        config = config.add_source(config::File::with_name(filename));
    }

    let config = config
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings: Settings = config.try_deserialize()?;

    check_cfg_values(settings)
}

fn check_cfg_values(mut settings: Settings) -> Result<Settings, config::ConfigError> {
    if settings.winix.total_filter_life == 0 {
        return Err(config::ConfigError::Message(
            "invalid winix.total_filter_life: must be greater than 0".into(),
        ));
    }

    if !settings.winix.air_quality.is_valid() {
        warn!("Invalid air quality thresholds, using defaults.");
        settings.winix.air_quality = Default::default();
    }

    if settings.polling.interval.as_secs() < 5 {
        warn!("Invalid polling settings, using defaults.");
        settings.polling = Default::default();
    }

    if settings.device.alias.trim().is_empty() {
        warn!("Empty device alias, using default.");
        settings.device.alias = DeviceSettings::default().alias;
    }

    Ok(settings)
}
