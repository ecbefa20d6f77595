use crate::dashboard::message_types::MapSnapshotPayload;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkersResponse {
    pub error: bool,
    pub map: MapSnapshotPayload,
}
