use crate::map::consts::DEVICE_FOCUS_ZOOM;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPosition {
    pub center: LatLng,
    pub zoom: f64,
}

impl CameraPosition {
    pub fn focused_on(center: LatLng) -> Self {
        CameraPosition {
            center,
            zoom: DEVICE_FOCUS_ZOOM,
        }
    }
}

/// How a pin is drawn. Devices all use the stock pin for now; per-device
/// icons would slot in here.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerIcon {
    #[default]
    Default,
}

/// Reference to a pin rendered by a map canvas. Not `Clone`: the registry
/// owns the handle until `take` hands it back, so a pin cannot be released
/// twice.
#[derive(Debug, PartialEq, Eq)]
pub struct MarkerHandle {
    id: usize,
}

impl MarkerHandle {
    pub fn new(id: usize) -> Self {
        MarkerHandle { id }
    }

    pub fn id(&self) -> usize {
        self.id
    }
}
