use crate::feed::decoder::FeedDecoder;
use crate::feed::events::{FeedError, FeedEvent};
use crate::feed::models::{
    DeviceId, DeviceUpdate, InvalidRecord, RawDeviceLocation, RawLocationRecord,
};
use crate::feed::sse::{SseFrame, SseFrameParser};
use crate::map::models::LatLng;

fn raw_record(
    device_id: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> RawLocationRecord {
    RawLocationRecord {
        device_id: device_id.map(String::from),
        device_location: Some(RawDeviceLocation {
            latitude,
            longitude,
        }),
    }
}

fn device_id(raw: &str) -> DeviceId {
    DeviceId::new(raw).expect("Expected a valid device id.")
}

fn frame(event: &str, data: &str) -> SseFrame {
    SseFrame {
        event: event.to_string(),
        data: data.to_string(),
    }
}

#[test]
fn test_valid_record_parses_into_an_update() {
    let update = DeviceUpdate::try_from(raw_record(Some("d1"), Some(13.7), Some(100.5)))
        .expect("Expected the record to validate.");

    assert_eq!(
        update,
        DeviceUpdate {
            device_id: device_id("d1"),
            position: LatLng {
                lat: 13.7,
                lng: 100.5,
            },
        },
    );
}

#[test]
fn test_record_without_device_id_is_rejected() {
    let result = DeviceUpdate::try_from(raw_record(None, Some(13.7), Some(100.5)));

    assert_eq!(result, Err(InvalidRecord::MissingDeviceId));
}

#[test]
fn test_record_with_empty_device_id_is_rejected() {
    let result = DeviceUpdate::try_from(raw_record(Some(""), Some(13.7), Some(100.5)));

    assert_eq!(result, Err(InvalidRecord::EmptyDeviceId));
}

#[test]
fn test_record_without_location_is_rejected() {
    let record = RawLocationRecord {
        device_id: Some(String::from("d1")),
        device_location: None,
    };

    let result = DeviceUpdate::try_from(record);

    assert_eq!(result, Err(InvalidRecord::MissingLocation(String::from("d1"))));
}

#[test]
fn test_record_without_a_coordinate_is_rejected() {
    let result = DeviceUpdate::try_from(raw_record(Some("d1"), Some(13.7), None));

    assert_eq!(
        result,
        Err(InvalidRecord::MissingCoordinate {
            device_id: String::from("d1"),
            coordinate: "longitude",
        }),
    );
}

#[test]
fn test_record_with_a_non_finite_coordinate_is_rejected() {
    let result = DeviceUpdate::try_from(raw_record(Some("d1"), Some(f64::NAN), Some(100.5)));

    assert_eq!(
        result,
        Err(InvalidRecord::NonFiniteCoordinate {
            device_id: String::from("d1"),
            coordinate: "latitude",
        }),
    );
}

#[test]
fn test_frame_parser_reassembles_split_chunks() {
    let mut parser = SseFrameParser::default();

    assert!(parser.feed(b"event: put\ndata: {\"pa").is_empty());
    let frames = parser.feed(b"th\":\"/\"}\n\n");

    assert_eq!(frames, vec![frame("put", "{\"path\":\"/\"}")]);
}

#[test]
fn test_frame_parser_handles_several_frames_in_one_chunk() {
    let mut parser = SseFrameParser::default();

    let frames =
        parser.feed(b"event: keep-alive\ndata: null\n\nevent: cancel\ndata: null\n\n");

    assert_eq!(
        frames,
        vec![frame("keep-alive", "null"), frame("cancel", "null")],
    );
}

#[test]
fn test_frame_parser_joins_multiple_data_lines() {
    let mut parser = SseFrameParser::default();

    let frames = parser.feed(b"event: put\ndata: {\ndata: }\n\n");

    assert_eq!(frames, vec![frame("put", "{\n}")]);
}

#[test]
fn test_frame_parser_ignores_blank_lines_between_frames() {
    let mut parser = SseFrameParser::default();

    let frames = parser.feed(b"\n\nevent: keep-alive\ndata: null\n\n");

    assert_eq!(frames, vec![frame("keep-alive", "null")]);
}

#[test]
fn test_decoder_turns_the_root_snapshot_into_upserts_and_ready() {
    let mut decoder = FeedDecoder::default();
    let data = r#"{
        "path": "/",
        "data": {
            "a": {"deviceId": "d1", "deviceLocation": {"latitude": 13.7, "longitude": 100.5}},
            "b": {"deviceId": "d2", "deviceLocation": {"latitude": 52.5, "longitude": 13.4}}
        }
    }"#;

    let events = decoder.decode(&frame("put", data));

    assert_eq!(
        events,
        vec![
            FeedEvent::Upserted(DeviceUpdate {
                device_id: device_id("d1"),
                position: LatLng {
                    lat: 13.7,
                    lng: 100.5,
                },
            }),
            FeedEvent::Upserted(DeviceUpdate {
                device_id: device_id("d2"),
                position: LatLng {
                    lat: 52.5,
                    lng: 13.4,
                },
            }),
            FeedEvent::Ready,
        ],
    );
}

#[test]
fn test_decoder_reports_an_empty_snapshot_as_ready() {
    let mut decoder = FeedDecoder::default();

    let events = decoder.decode(&frame("put", r#"{"path": "/", "data": null}"#));

    assert_eq!(events, vec![FeedEvent::Ready]);
}

#[test]
fn test_decoder_upserts_a_child_record() {
    let mut decoder = FeedDecoder::default();
    let data =
        r#"{"path": "/a", "data": {"deviceId": "d1", "deviceLocation": {"latitude": 13.7, "longitude": 100.5}}}"#;

    let events = decoder.decode(&frame("put", data));

    assert_eq!(
        events,
        vec![FeedEvent::Upserted(DeviceUpdate {
            device_id: device_id("d1"),
            position: LatLng {
                lat: 13.7,
                lng: 100.5,
            },
        })],
    );
}

#[test]
fn test_decoder_maps_a_null_child_put_to_a_removal() {
    let mut decoder = FeedDecoder::default();
    let data =
        r#"{"path": "/a", "data": {"deviceId": "d1", "deviceLocation": {"latitude": 13.7, "longitude": 100.5}}}"#;
    decoder.decode(&frame("put", data));

    let events = decoder.decode(&frame("put", r#"{"path": "/a", "data": null}"#));

    assert_eq!(events, vec![FeedEvent::Removed(device_id("d1"))]);
}

#[test]
fn test_decoder_ignores_a_removal_of_an_unknown_child() {
    let mut decoder = FeedDecoder::default();

    let events = decoder.decode(&frame("put", r#"{"path": "/a", "data": null}"#));

    assert!(events.is_empty());
}

#[test]
fn test_decoder_applies_a_root_patch_without_ready() {
    let mut decoder = FeedDecoder::default();
    let data = r#"{
        "path": "/",
        "data": {
            "a": {"deviceId": "d1", "deviceLocation": {"latitude": 13.7, "longitude": 100.5}}
        }
    }"#;

    let events = decoder.decode(&frame("patch", data));

    assert_eq!(
        events,
        vec![FeedEvent::Upserted(DeviceUpdate {
            device_id: device_id("d1"),
            position: LatLng {
                lat: 13.7,
                lng: 100.5,
            },
        })],
    );
}

#[test]
fn test_decoder_rejects_a_record_without_location() {
    let mut decoder = FeedDecoder::default();
    let data = r#"{"path": "/a", "data": {"deviceId": "d1"}}"#;

    let events = decoder.decode(&frame("put", data));

    assert!(events.is_empty());
}

#[test]
fn test_decoder_skips_partial_updates_below_the_record_level() {
    let mut decoder = FeedDecoder::default();
    let data = r#"{"path": "/a/deviceLocation", "data": {"latitude": 13.8, "longitude": 100.6}}"#;

    let events = decoder.decode(&frame("put", data));

    assert!(events.is_empty());
}

#[test]
fn test_decoder_maps_cancellation_frames_to_cancelled_events() {
    let mut decoder = FeedDecoder::default();

    assert_eq!(
        decoder.decode(&frame("cancel", "null")),
        vec![FeedEvent::Cancelled(FeedError::SubscriptionCancelled)],
    );
    assert_eq!(
        decoder.decode(&frame("auth_revoked", "null")),
        vec![FeedEvent::Cancelled(FeedError::CredentialsRevoked)],
    );
}

#[test]
fn test_decoder_swallows_keep_alives() {
    let mut decoder = FeedDecoder::default();

    assert!(decoder.decode(&frame("keep-alive", "null")).is_empty());
}
