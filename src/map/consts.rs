/// Zoom level the camera snaps to when focusing on a device.
pub const DEVICE_FOCUS_ZOOM: f64 = 16.0;
