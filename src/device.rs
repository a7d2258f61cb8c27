// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Winix cloud device status data structure definitions for JSON deserialization.

use crate::errors::ServiceError;
use crate::sensor::SensorKind;
use crate::telemetry::RawTelemetry;
use crate::util::slugify;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

/// Identification of a purifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinixDevice {
    /// Device id as reported by the cloud service, e.g. `847207352CE0_364yr8i989`.
    pub id: String,
    /// User defined device name.
    pub alias: String,
    /// Model id as reported in the device status, e.g. `C545`.
    pub model: Option<String>,
}

impl WinixDevice {
    pub fn new(id: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alias: alias.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Sensor entity id, e.g. `sensor.winix_living_room_filter_life`.
    pub fn entity_id(&self, kind: SensorKind) -> String {
        format!("sensor.winix_{}_{}", slugify(&self.alias), kind.as_ref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    pub body: DeviceStatusBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusBody {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub data: Vec<DeviceStatusData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusData {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub attributes: RawTelemetry,
}

impl DeviceStatusResponse {
    pub fn device_id(&self) -> Option<&str> {
        self.body.device_id.as_deref()
    }

    /// Model id of the first status entry.
    pub fn model_id(&self) -> Option<&str> {
        self.body.data.first().and_then(|d| d.model_id.as_deref())
    }

    /// Attributes of the first status entry.
    pub fn into_telemetry(self) -> Result<RawTelemetry, ServiceError> {
        let Some(data) = self.body.data.into_iter().next() else {
            return Err(ServiceError::BadRequest(
                "Missing data in device status response".into(),
            ));
        };
        Ok(data.attributes)
    }
}

/// Load a device status response from a file, or from stdin if `input` is `-`.
pub fn load_status(input: &str) -> Result<DeviceStatusResponse, ServiceError> {
    let json = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::ATTR_FILTER_HOUR;

    #[test]
    fn parse_device_status_response() {
        let response: DeviceStatusResponse =
            serde_json::from_str(include_str!("../resources/test/device_data.json")).unwrap();

        assert_eq!(Some(200), response.status_code);
        assert_eq!(Some("847207352CE0_364yr8i989"), response.device_id());
        assert_eq!(Some("C545"), response.model_id());

        let telemetry = response.into_telemetry().unwrap();
        assert_eq!(Some("1257"), telemetry.get(ATTR_FILTER_HOUR));
    }

    #[test]
    fn empty_device_status_response_is_an_error() {
        let response: DeviceStatusResponse =
            serde_json::from_str(r#"{"body": {"totalCnt": 0, "data": []}}"#).unwrap();

        assert!(matches!(
            response.into_telemetry(),
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn non_string_attribute_is_a_serialization_error() {
        let result: Result<DeviceStatusResponse, ServiceError> =
            serde_json::from_str(r#"{"body": {"data": [{"attributes": {"A21": 1257}}]}}"#)
                .map_err(ServiceError::from);

        assert!(matches!(result, Err(ServiceError::SerializationError(_))));
    }

    #[test]
    fn load_status_from_missing_file() {
        assert!(matches!(
            load_status("/nonexistent/device_data.json"),
            Err(ServiceError::InternalServerError(_))
        ));
    }

    #[test]
    fn device_model_from_status_response() {
        let response: DeviceStatusResponse =
            serde_json::from_str(include_str!("../resources/test/device_data.json")).unwrap();
        let device = WinixDevice::new("847207352CE0_364yr8i989", "DeviceAlias")
            .with_model(response.model_id().map(str::to_string));

        assert_eq!(Some("C545"), device.model.as_deref());
        assert_eq!(None, WinixDevice::new("id", "alias").model);
    }

    #[test]
    fn missing_model_id_is_none() {
        let response: DeviceStatusResponse =
            serde_json::from_str(r#"{"body": {"data": [{"attributes": {}}]}}"#).unwrap();

        assert_eq!(None, response.model_id());
    }

    #[test]
    fn entity_id_from_alias() {
        let device = WinixDevice::new("id", "Living Room");

        assert_eq!(
            "sensor.winix_living_room_filter_life",
            device.entity_id(SensorKind::FilterLife)
        );
        assert_eq!(
            "sensor.winix_living_room_air_qvalue",
            device.entity_id(SensorKind::AirQValue)
        );
    }
}
