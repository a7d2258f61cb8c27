// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Raw Winix device attributes and their decoding into typed values.
//!
//! The device reports every attribute as a string keyed by an attribute code, e.g.
//! `{"A21": "1257", "S08": "71"}`. Numeric attributes are decimal-digit strings, enumerated
//! attributes use fixed codes like `"01"`.

use crate::errors::ServiceError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use strum::{Display, EnumString};

pub const ATTR_POWER: &str = "A02";
pub const ATTR_MODE: &str = "A03";
pub const ATTR_AIRFLOW: &str = "A04";
pub const ATTR_AQI: &str = "A05";
pub const ATTR_PLASMA: &str = "A07";
pub const ATTR_FILTER_HOUR: &str = "A21";
pub const ATTR_AIR_QUALITY: &str = "S07";
pub const ATTR_AIR_QVALUE: &str = "S08";
pub const ATTR_AMBIENT_LIGHT: &str = "S14";

/// Attribute snapshot of a single polling cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTelemetry(HashMap<String, String>);

/// Result of decoding a single numeric attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Value(u32),
    Absent,
    /// Attribute is present, but not a decimal-digit string. Holds the raw value.
    Malformed(String),
}

impl RawTelemetry {
    pub fn new(attributes: HashMap<String, String>) -> Self {
        Self(attributes)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Decode a numeric attribute.
    ///
    /// Leading zeros are accepted (`"01"` is 1). Signs, whitespace, decimal points and values not
    /// fitting into an `u32` are malformed. A missing key is never an error.
    pub fn decode(&self, key: &str) -> AttributeValue {
        match self.get(key) {
            None => AttributeValue::Absent,
            Some(raw) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
                match raw.parse() {
                    Ok(v) => AttributeValue::Value(v),
                    Err(_) => AttributeValue::Malformed(raw.to_string()),
                }
            }
            Some(raw) => AttributeValue::Malformed(raw.to_string()),
        }
    }

    /// Decode an enumerated attribute code. Unknown codes are logged and treated as absent.
    fn decode_code<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr<Err = strum::ParseError>,
    {
        let raw = self.get(key)?;
        match parse_code(raw) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("Ignoring unknown code '{raw}' of attribute {key}: {e}");
                None
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawTelemetry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn parse_code<T>(raw: &str) -> Result<T, ServiceError>
where
    T: FromStr<Err = strum::ParseError>,
{
    Ok(T::from_str(raw)?)
}

impl AttributeValue {
    /// Convert into a `Result`, keeping absent values apart from malformed ones.
    pub fn into_result(self, key: &str) -> Result<Option<u32>, ServiceError> {
        match self {
            AttributeValue::Value(v) => Ok(Some(v)),
            AttributeValue::Absent => Ok(None),
            AttributeValue::Malformed(value) => Err(ServiceError::MalformedAttribute {
                key: key.to_string(),
                value,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    #[strum(serialize = "0", to_string = "off")]
    Off,
    #[strum(serialize = "1", to_string = "on")]
    On,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[strum(serialize = "01", to_string = "auto")]
    Auto,
    #[strum(serialize = "02", to_string = "manual")]
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Airflow {
    #[strum(serialize = "01", to_string = "low")]
    Low,
    #[strum(serialize = "02", to_string = "medium")]
    Medium,
    #[strum(serialize = "03", to_string = "high")]
    High,
    #[strum(serialize = "05", to_string = "turbo")]
    Turbo,
    #[strum(serialize = "06", to_string = "sleep")]
    Sleep,
}

/// Air quality as classified by the device itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportedAirQuality {
    #[strum(serialize = "01", to_string = "good")]
    Good,
    #[strum(serialize = "02", to_string = "fair")]
    Fair,
    #[strum(serialize = "03", to_string = "poor")]
    Poor,
}

/// Operational state of the purifier decoded from a telemetry snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub power: Option<Power>,
    pub mode: Option<Mode>,
    pub airflow: Option<Airflow>,
    pub plasma: Option<Power>,
    pub air_quality: Option<ReportedAirQuality>,
    pub ambient_light: Option<u32>,
}

impl From<&RawTelemetry> for DeviceState {
    fn from(telemetry: &RawTelemetry) -> Self {
        Self {
            power: telemetry.decode_code(ATTR_POWER),
            mode: telemetry.decode_code(ATTR_MODE),
            airflow: telemetry.decode_code(ATTR_AIRFLOW),
            plasma: telemetry.decode_code(ATTR_PLASMA),
            air_quality: telemetry.decode_code(ATTR_AIR_QUALITY),
            ambient_light: telemetry
                .decode(ATTR_AMBIENT_LIGHT)
                .into_result(ATTR_AMBIENT_LIGHT)
                .unwrap_or_else(|e| {
                    debug!("{e}");
                    None
                }),
        }
    }
}
