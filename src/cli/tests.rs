use crate::cli::Args;
use std::{net::SocketAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        feed_url: Url::from_str("http://127.0.0.1:9000/devices.json")
            .expect("Failed to construct fake feed URL."),
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        allowed_origins: vec![String::from("http://localhost:3000")],
        traffic_layer: true,
        my_location_layer: false,
    }
}
