use crate::feed::events::{FeedError, FeedEvent};
use crate::feed::models::{DeviceId, DeviceUpdate, RawLocationRecord};
use crate::feed::sse::SseFrame;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct ChangePayload {
    path: String,
    data: Value,
}

/// Maps the feed's wire frames onto typed [`FeedEvent`]s. Remembers which
/// device each child key produced so a removal (a `null` put at the child
/// path) can name the device it retires.
#[derive(Default)]
pub struct FeedDecoder {
    devices_by_key: HashMap<String, DeviceId>,
}

impl FeedDecoder {
    pub fn decode(&mut self, frame: &SseFrame) -> Vec<FeedEvent> {
        match frame.event.as_str() {
            "put" => self.on_change(&frame.data, true),
            "patch" => self.on_change(&frame.data, false),
            "keep-alive" => Vec::new(),
            "cancel" => vec![FeedEvent::Cancelled(FeedError::SubscriptionCancelled)],
            "auth_revoked" => vec![FeedEvent::Cancelled(FeedError::CredentialsRevoked)],
            other => {
                tracing::debug!(task = "feed_event", "Ignoring unknown feed event `{other}`.");
                Vec::new()
            }
        }
    }

    fn on_change(&mut self, data: &str, is_put: bool) -> Vec<FeedEvent> {
        let payload: ChangePayload = match serde_json::from_str(data) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(
                    task = "feed_event",
                    "Failed to deserialize a feed frame: {error}.",
                );
                return Vec::new();
            }
        };
        match parse_path(&payload.path) {
            PathKind::Root => {
                let mut events = self.root_upserts(payload.data);
                // A put at the root is the value snapshot the feed opens with.
                if is_put {
                    events.push(FeedEvent::Ready);
                }
                events
            }
            PathKind::Child(key) => self.child_change(key, payload.data).into_iter().collect(),
            PathKind::Nested => {
                tracing::debug!(
                    task = "feed_event",
                    "Skipping a partial update below the record level.",
                );
                Vec::new()
            }
        }
    }

    fn root_upserts(&mut self, data: Value) -> Vec<FeedEvent> {
        match data {
            Value::Null => Vec::new(),
            Value::Object(children) => children
                .into_iter()
                .filter_map(|(key, value)| self.upsert(key, value))
                .collect(),
            _ => {
                tracing::warn!(
                    task = "feed_event",
                    "The feed root holds something other than location records.",
                );
                Vec::new()
            }
        }
    }

    fn child_change(&mut self, key: &str, data: Value) -> Option<FeedEvent> {
        if data.is_null() {
            return self.devices_by_key.remove(key).map(FeedEvent::Removed);
        }
        self.upsert(key.to_string(), data)
    }

    fn upsert(&mut self, key: String, value: Value) -> Option<FeedEvent> {
        let record: RawLocationRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(
                    task = "feed_event",
                    "Failed to deserialize the record at `{key}`: {error}.",
                );
                return None;
            }
        };
        match DeviceUpdate::try_from(record) {
            Ok(update) => {
                self.devices_by_key.insert(key, update.device_id.clone());
                Some(FeedEvent::Upserted(update))
            }
            Err(error) => {
                tracing::warn!(task = "feed_event", "Rejected the record at `{key}`: {error}.");
                None
            }
        }
    }
}

enum PathKind<'a> {
    Root,
    Child(&'a str),
    Nested,
}

fn parse_path(path: &str) -> PathKind<'_> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (None, _) => PathKind::Root,
        (Some(key), None) => PathKind::Child(key),
        (Some(_), Some(_)) => PathKind::Nested,
    }
}
