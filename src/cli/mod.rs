use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    /// Streaming endpoint of the realtime database holding the device locations.
    #[arg(long)]
    pub feed_url: Url,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// May be passed multiple times, once per origin.
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = [
        String::from("http://127.0.0.1:3000"),
        String::from("http://localhost:3000"),
    ])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(action = clap::ArgAction::Set, default_value_t = true)]
    pub traffic_layer: bool,
    #[arg(long)]
    #[arg(action = clap::ArgAction::Set, default_value_t = false)]
    pub my_location_layer: bool,
}
