use crate::feed::decoder::FeedDecoder;
use crate::feed::events::FeedEvent;
use crate::feed::sse::SseFrameParser;
use futures_util::StreamExt;
use rand::Rng;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Streaming client for the realtime database's `text/event-stream`
/// interface. Reconnects with exponential backoff; decoder state is
/// per-connection, so a reconnect replays the snapshot as fresh upserts.
pub struct RealtimeDbFeed {
    url: Url,
    http_client: reqwest::Client,
}

impl RealtimeDbFeed {
    pub fn new(url: Url) -> Self {
        RealtimeDbFeed {
            url,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn run(self, events: UnboundedSender<FeedEvent>) {
        let mut failed_attempts = 0u32;
        loop {
            match self.subscribe(&events).await {
                Ok(()) => failed_attempts = 0,
                Err(error) => {
                    failed_attempts += 1;
                    tracing::warn!(
                        task = "feed_connection",
                        failed_attempts,
                        "Lost the feed connection: {error}.",
                    );
                }
            }
            if events.is_closed() {
                return;
            }
            tokio::time::sleep(retry_delay(failed_attempts)).await;
        }
    }

    async fn subscribe(&self, events: &UnboundedSender<FeedEvent>) -> Result<(), reqwest::Error> {
        let response = self
            .http_client
            .get(self.url.clone())
            .header(ACCEPT, "text/event-stream")
            .send()
            .await?
            .error_for_status()?;
        tracing::info!(task = "feed_connection", "Subscribed to {}.", self.url);
        let mut frames = SseFrameParser::default();
        let mut decoder = FeedDecoder::default();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            for frame in frames.feed(&chunk?) {
                for event in decoder.decode(&frame) {
                    if events.send(event).is_err() {
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }
}

fn retry_delay(failed_attempts: u32) -> Duration {
    let exponential = INITIAL_RETRY_DELAY
        .saturating_mul(2u32.saturating_pow(failed_attempts.min(8)))
        .min(MAX_RETRY_DELAY);
    let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..500));
    exponential + jitter
}
