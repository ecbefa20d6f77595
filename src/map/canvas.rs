use crate::map::models::{CameraPosition, LatLng, MarkerHandle, MarkerIcon};

/// Rendering side of the monitor. The reconciler drives a canvas through
/// these calls and never touches rendering state directly.
pub trait MapCanvas {
    async fn add_marker(&self, position: LatLng, icon: MarkerIcon) -> MarkerHandle;

    async fn remove_marker(&self, handle: MarkerHandle);

    async fn move_camera(&self, camera: CameraPosition);

    async fn set_traffic_enabled(&self, enabled: bool);

    async fn set_my_location_enabled(&self, enabled: bool);
}
