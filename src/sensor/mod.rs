// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Winix sensor values and their mapping into sensor entity states.
//!
//! Every sensor is computed independently from the same telemetry snapshot: a missing or
//! invalid attribute only turns its own sensor into the `unknown` state.

mod air_quality;
mod filter_life;

pub use air_quality::*;
pub use filter_life::*;

use crate::configuration::WinixSettings;
use crate::device::WinixDevice;
use crate::errors::ServiceError;
use crate::telemetry::{ATTR_AIR_QVALUE, ATTR_AQI, ATTR_FILTER_HOUR, RawTelemetry};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Entity state of a sensor without a value.
pub const STATE_UNKNOWN: &str = "unknown";

/// Attribute holding the air quality category of the air quality value sensor.
pub const ATTR_AIR_QUALITY_CATEGORY: &str = "air_quality";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SensorKind {
    #[strum(serialize = "air_qvalue")]
    AirQValue,
    FilterLife,
    Aqi,
}

impl SensorKind {
    /// Device attribute the sensor value is decoded from.
    pub fn attribute(&self) -> &'static str {
        match self {
            SensorKind::AirQValue => ATTR_AIR_QVALUE,
            SensorKind::FilterLife => ATTR_FILTER_HOUR,
            SensorKind::Aqi => ATTR_AQI,
        }
    }

    pub fn unit_of_measurement(&self) -> Option<&'static str> {
        match self {
            SensorKind::AirQValue => Some("qv"),
            SensorKind::FilterLife => Some("%"),
            SensorKind::Aqi => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::AirQValue => "Air QValue",
            SensorKind::FilterLife => "Filter Life",
            SensorKind::Aqi => "AQI",
        }
    }
}

/// Sensor entity state ready for publication.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorState {
    pub entity_id: String,
    pub state: String,
    pub attributes: Map<String, Value>,
}

impl SensorState {
    pub fn is_unknown(&self) -> bool {
        self.state == STATE_UNKNOWN
    }
}

/// Converts telemetry snapshots into sensor values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    filter_life: FilterLife,
    air_quality: AirQualityThresholds,
}

impl Normalizer {
    pub fn new(filter_life: FilterLife, air_quality: AirQualityThresholds) -> Self {
        Self {
            filter_life,
            air_quality,
        }
    }

    pub fn from_settings(settings: &WinixSettings) -> Result<Self, ServiceError> {
        if !settings.air_quality.is_valid() {
            return Err(ServiceError::ConfigError(format!(
                "invalid air quality thresholds: {:?}",
                settings.air_quality
            )));
        }
        Ok(Self::new(
            FilterLife::new(settings.total_filter_life)?,
            settings.air_quality,
        ))
    }

    pub fn filter_life(&self) -> &FilterLife {
        &self.filter_life
    }

    /// Normalized value of a single sensor, `None` if unknown.
    pub fn sensor_value(
        &self,
        kind: SensorKind,
        device: &WinixDevice,
        telemetry: &RawTelemetry,
    ) -> Option<u32> {
        let key = kind.attribute();
        let value = match telemetry.decode(key).into_result(key) {
            Ok(v) => v,
            Err(e) => {
                warn!("[{}] {} sensor: {e}", device.id, kind.as_ref());
                return None;
            }
        };

        match kind {
            SensorKind::FilterLife => self.filter_life.percentage(value).map(u32::from),
            SensorKind::AirQValue | SensorKind::Aqi => value,
        }
    }

    /// Entity state of a single sensor.
    pub fn sensor_state(
        &self,
        kind: SensorKind,
        device: &WinixDevice,
        telemetry: &RawTelemetry,
    ) -> SensorState {
        let value = self.sensor_value(kind, device, telemetry);

        let mut attributes = Map::with_capacity(4);
        attributes.insert(
            "friendly_name".into(),
            format!("{} {}", device.alias, kind.name()).into(),
        );
        attributes.insert("state_class".into(), "measurement".into());
        if let Some(uom) = kind.unit_of_measurement() {
            attributes.insert("unit_of_measurement".into(), uom.into());
        }
        if kind == SensorKind::AirQValue
            && let Some(value) = value
        {
            attributes.insert(
                ATTR_AIR_QUALITY_CATEGORY.into(),
                self.air_quality.classify(value).as_ref().into(),
            );
        }

        SensorState {
            entity_id: device.entity_id(kind),
            state: value
                .map(|v| v.to_string())
                .unwrap_or_else(|| STATE_UNKNOWN.into()),
            attributes,
        }
    }

    /// Entity states of all sensors of a device.
    pub fn sensor_states(&self, device: &WinixDevice, telemetry: &RawTelemetry) -> Vec<SensorState> {
        SensorKind::iter()
            .map(|kind| self.sensor_state(kind, device, telemetry))
            .collect()
    }
}
