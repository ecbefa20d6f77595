use crate::dashboard::message_types::{self, ServerSentSocketMessage, TransientNoticePayload};
use crate::monitor::interface::StatusSink;
use crate::storage::scene::SharedMapScene;
use crate::storage::sockets::HashMapClientSocketsStorage;

/// Surfaces monitor status to every connected dashboard.
#[derive(Clone)]
pub struct DashboardStatusSink {
    scene: SharedMapScene,
    sockets: HashMapClientSocketsStorage,
}

impl DashboardStatusSink {
    pub fn new(scene: SharedMapScene, sockets: HashMapClientSocketsStorage) -> Self {
        DashboardStatusSink { scene, sockets }
    }
}

impl StatusSink for DashboardStatusSink {
    async fn feed_ready(&self) {
        // Remembered in the scene so late-connecting dashboards skip their
        // loading indicator too.
        self.scene.mark_feed_ready().await;
        let message = ServerSentSocketMessage::FeedReady {
            r#type: message_types::FeedReady,
        };
        self.sockets
            .broadcast_msg(&serde_json::to_string(&message).unwrap())
            .await;
    }

    async fn transient_message(&self, message: &str) {
        tracing::info!(task = "monitor_status", "Transient notice: {message}.");
        let message = ServerSentSocketMessage::TransientNotice {
            r#type: message_types::TransientNotice,
            payload: TransientNoticePayload {
                message: message.to_string(),
            },
        };
        self.sockets
            .broadcast_msg(&serde_json::to_string(&message).unwrap())
            .await;
    }
}
