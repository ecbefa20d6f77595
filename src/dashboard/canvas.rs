use crate::dashboard::message_types::{
    self, MarkerIdPayload, PinPayload, ServerSentSocketMessage,
};
use crate::map::canvas::MapCanvas;
use crate::map::models::{CameraPosition, LatLng, MarkerHandle, MarkerIcon};
use crate::storage::scene::{Pin, SharedMapScene};
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::sync::atomic::{AtomicUsize, Ordering};

pub static NEXT_MARKER_ID: AtomicUsize = AtomicUsize::new(1);

/// The production rendering collaborator: keeps the scene and mirrors every
/// mutation to all connected dashboards.
#[derive(Clone)]
pub struct WsBroadcastCanvas {
    scene: SharedMapScene,
    sockets: HashMapClientSocketsStorage,
}

impl WsBroadcastCanvas {
    pub fn new(scene: SharedMapScene, sockets: HashMapClientSocketsStorage) -> Self {
        WsBroadcastCanvas { scene, sockets }
    }

    async fn broadcast(&self, message: &ServerSentSocketMessage) {
        let raw_message = serde_json::to_string(message).unwrap();
        self.sockets.broadcast_msg(&raw_message).await;
    }
}

impl MapCanvas for WsBroadcastCanvas {
    async fn add_marker(&self, position: LatLng, icon: MarkerIcon) -> MarkerHandle {
        let marker_id = NEXT_MARKER_ID.fetch_add(1, Ordering::Relaxed);
        self.scene.put_pin(marker_id, Pin { position, icon }).await;
        self.broadcast(&ServerSentSocketMessage::MarkerAdded {
            r#type: message_types::MarkerAdded,
            payload: PinPayload {
                marker_id,
                position,
                icon,
            },
        })
        .await;
        MarkerHandle::new(marker_id)
    }

    async fn remove_marker(&self, handle: MarkerHandle) {
        let marker_id = handle.id();
        if self.scene.take_pin(marker_id).await.is_none() {
            tracing::warn!(
                task = "dashboard_canvas",
                marker_id,
                "Removed a marker the scene never had.",
            );
        }
        self.broadcast(&ServerSentSocketMessage::MarkerRemoved {
            r#type: message_types::MarkerRemoved,
            payload: MarkerIdPayload { marker_id },
        })
        .await;
    }

    async fn move_camera(&self, camera: CameraPosition) {
        self.scene.set_camera(camera).await;
        self.broadcast(&ServerSentSocketMessage::CameraMoved {
            r#type: message_types::CameraMoved,
            payload: camera,
        })
        .await;
    }

    async fn set_traffic_enabled(&self, enabled: bool) {
        self.scene.set_traffic_enabled(enabled).await;
    }

    async fn set_my_location_enabled(&self, enabled: bool) {
        self.scene.set_my_location_enabled(enabled).await;
    }
}
