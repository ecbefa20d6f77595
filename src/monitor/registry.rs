use crate::feed::models::DeviceId;
use crate::map::models::MarkerHandle;
use std::collections::HashMap;

/// Which marker currently represents which device. Owned exclusively by the
/// reconciler; holds at most one handle per device at any time.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: HashMap<DeviceId, MarkerHandle>,
}

impl MarkerRegistry {
    /// Stores the marker for a device, returning the displaced handle if the
    /// device already had one.
    pub fn insert(&mut self, device_id: DeviceId, handle: MarkerHandle) -> Option<MarkerHandle> {
        self.markers.insert(device_id, handle)
    }

    /// Removes and returns the device's marker in one step, so a marker can
    /// never be released twice.
    pub fn take(&mut self, device_id: &DeviceId) -> Option<MarkerHandle> {
        self.markers.remove(device_id)
    }

    pub fn contains(&self, device_id: &DeviceId) -> bool {
        self.markers.contains_key(device_id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
