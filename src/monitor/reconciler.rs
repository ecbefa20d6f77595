use crate::feed::events::FeedEvent;
use crate::feed::models::{DeviceId, DeviceUpdate};
use crate::map::canvas::MapCanvas;
use crate::map::models::{CameraPosition, MarkerIcon};
use crate::monitor::interface::StatusSink;
use crate::monitor::registry::MarkerRegistry;
use tokio::sync::mpsc::UnboundedReceiver;

/// Reduces the feed's event stream into marker mutations on the canvas,
/// keeping at most one marker per device.
pub struct MarkerReconciler<C, S> {
    canvas: C,
    status: S,
    registry: MarkerRegistry,
}

impl<C, S> MarkerReconciler<C, S>
where
    C: MapCanvas,
    S: StatusSink,
{
    pub fn new(canvas: C, status: S) -> Self {
        MarkerReconciler {
            canvas,
            status,
            registry: MarkerRegistry::default(),
        }
    }

    /// Applies events in arrival order until the feed closes the channel.
    /// The single consumer is what makes the registry safe without locks.
    pub async fn run(mut self, mut events: UnboundedReceiver<FeedEvent>) {
        while let Some(event) = events.recv().await {
            self.apply(event).await;
        }
        tracing::info!(task = "monitor", "The feed channel closed; monitoring stopped.");
    }

    pub async fn apply(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Upserted(update) => self.on_device_upserted(update).await,
            FeedEvent::Removed(device_id) => self.on_device_removed(device_id).await,
            FeedEvent::Ready => self.status.feed_ready().await,
            FeedEvent::Cancelled(error) => {
                tracing::warn!(task = "monitor", "The feed ended the subscription: {error}.");
                self.status.transient_message(&error.to_string()).await;
            }
        }
    }

    /// One path for both first sightings and position changes: retire the
    /// previous marker, pin the new position, follow it with the camera.
    async fn on_device_upserted(&mut self, update: DeviceUpdate) {
        if let Some(stale) = self.registry.take(&update.device_id) {
            self.canvas.remove_marker(stale).await;
        }
        let handle = self
            .canvas
            .add_marker(update.position, MarkerIcon::default())
            .await;
        self.registry.insert(update.device_id, handle);
        self.canvas
            .move_camera(CameraPosition::focused_on(update.position))
            .await;
    }

    async fn on_device_removed(&mut self, device_id: DeviceId) {
        match self.registry.take(&device_id) {
            Some(handle) => self.canvas.remove_marker(handle).await,
            None => {
                tracing::debug!(task = "monitor", "No marker to remove for device {device_id}.")
            }
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }
}
