use crate::map::models::{CameraPosition, LatLng, MarkerIcon};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pin {
    pub position: LatLng,
    pub icon: MarkerIcon,
}

/// Rendering state owned by the dashboard canvas: every live pin, the last
/// camera move, and the layer toggles.
#[derive(Clone, Debug, Default)]
pub struct MapScene {
    pub pins: HashMap<usize, Pin>,
    pub camera: Option<CameraPosition>,
    pub traffic_enabled: bool,
    pub my_location_enabled: bool,
    pub feed_ready: bool,
}

#[derive(Clone, Default)]
pub struct SharedMapScene {
    storage: Arc<RwLock<MapScene>>,
}

impl SharedMapScene {
    pub async fn put_pin(&self, marker_id: usize, pin: Pin) {
        self.storage.write().await.pins.insert(marker_id, pin);
    }

    pub async fn take_pin(&self, marker_id: usize) -> Option<Pin> {
        self.storage.write().await.pins.remove(&marker_id)
    }

    pub async fn set_camera(&self, camera: CameraPosition) {
        self.storage.write().await.camera = Some(camera);
    }

    pub async fn set_traffic_enabled(&self, enabled: bool) {
        self.storage.write().await.traffic_enabled = enabled;
    }

    pub async fn set_my_location_enabled(&self, enabled: bool) {
        self.storage.write().await.my_location_enabled = enabled;
    }

    pub async fn mark_feed_ready(&self) {
        self.storage.write().await.feed_ready = true;
    }

    pub async fn snapshot(&self) -> MapScene {
        self.storage.read().await.clone()
    }
}
