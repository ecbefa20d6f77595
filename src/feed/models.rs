use crate::map::models::LatLng;
use serde::Deserialize;
use thiserror::Error;

/// One record as it arrives from the feed. Every field is optional on the
/// wire; nothing downstream of [`DeviceUpdate::try_from`] sees that.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocationRecord {
    pub device_id: Option<String>,
    pub device_location: Option<RawDeviceLocation>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeviceLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Non-empty by construction; the registry key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecord> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidRecord::EmptyDeviceId);
        }
        Ok(DeviceId(raw))
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceUpdate {
    pub device_id: DeviceId,
    pub position: LatLng,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidRecord {
    #[error("the record carries no device id")]
    MissingDeviceId,
    #[error("the record carries an empty device id")]
    EmptyDeviceId,
    #[error("device {0} reported no location")]
    MissingLocation(String),
    #[error("device {device_id} reported no {coordinate}")]
    MissingCoordinate {
        device_id: String,
        coordinate: &'static str,
    },
    #[error("device {device_id} reported a non-finite {coordinate}")]
    NonFiniteCoordinate {
        device_id: String,
        coordinate: &'static str,
    },
}

impl TryFrom<RawLocationRecord> for DeviceUpdate {
    type Error = InvalidRecord;

    fn try_from(record: RawLocationRecord) -> Result<Self, Self::Error> {
        let device_id = DeviceId::new(record.device_id.ok_or(InvalidRecord::MissingDeviceId)?)?;
        let location = record
            .device_location
            .ok_or_else(|| InvalidRecord::MissingLocation(device_id.to_string()))?;
        let lat = coordinate(&device_id, "latitude", location.latitude)?;
        let lng = coordinate(&device_id, "longitude", location.longitude)?;
        Ok(DeviceUpdate {
            device_id,
            position: LatLng { lat, lng },
        })
    }
}

fn coordinate(
    device_id: &DeviceId,
    name: &'static str,
    value: Option<f64>,
) -> Result<f64, InvalidRecord> {
    let value = value.ok_or_else(|| InvalidRecord::MissingCoordinate {
        device_id: device_id.to_string(),
        coordinate: name,
    })?;
    if !value.is_finite() {
        return Err(InvalidRecord::NonFiniteCoordinate {
            device_id: device_id.to_string(),
            coordinate: name,
        });
    }
    Ok(value)
}
