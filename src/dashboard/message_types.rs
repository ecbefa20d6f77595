use crate::map::models::{CameraPosition, LatLng, MarkerIcon};
use crate::storage::scene::MapScene;
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    Ping {
        #[allow(dead_code)]
        // This field is actually being pattern-matched on.
        r#type: Ping,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    MapSnapshot {
        r#type: MapSnapshot,
        payload: MapSnapshotPayload,
    },
    MarkerAdded {
        r#type: MarkerAdded,
        payload: PinPayload,
    },
    MarkerRemoved {
        r#type: MarkerRemoved,
        payload: MarkerIdPayload,
    },
    CameraMoved {
        r#type: CameraMoved,
        payload: CameraPosition,
    },
    FeedReady {
        r#type: FeedReady,
    },
    TransientNotice {
        r#type: TransientNotice,
        payload: TransientNoticePayload,
    },
    Pong {
        r#type: Pong,
    },
}

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct MapSnapshot;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct MarkerAdded;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct MarkerRemoved;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct CameraMoved;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct FeedReady;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct TransientNotice;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Pong;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSnapshotPayload {
    pub pins: Vec<PinPayload>,
    pub camera: Option<CameraPosition>,
    pub traffic_enabled: bool,
    pub my_location_enabled: bool,
    pub feed_ready: bool,
}

impl From<MapScene> for MapSnapshotPayload {
    fn from(scene: MapScene) -> Self {
        let mut pins: Vec<PinPayload> = scene
            .pins
            .into_iter()
            .map(|(marker_id, pin)| PinPayload {
                marker_id,
                position: pin.position,
                icon: pin.icon,
            })
            .collect();
        pins.sort_by_key(|pin| pin.marker_id);
        MapSnapshotPayload {
            pins,
            camera: scene.camera,
            traffic_enabled: scene.traffic_enabled,
            my_location_enabled: scene.my_location_enabled,
            feed_ready: scene.feed_ready,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinPayload {
    pub marker_id: usize,
    pub position: LatLng,
    pub icon: MarkerIcon,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIdPayload {
    pub marker_id: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransientNoticePayload {
    pub message: String,
}
