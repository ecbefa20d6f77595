use axum::extract::ws::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

pub static NEXT_SOCKET_ID: AtomicUsize = AtomicUsize::new(1);

/// Live dashboard connections. Each entry forwards into the pump task that
/// owns the actual websocket sink.
#[derive(Clone, Default)]
pub struct HashMapClientSocketsStorage {
    storage: Arc<RwLock<HashMap<usize, mpsc::UnboundedSender<Message>>>>,
}

impl HashMapClientSocketsStorage {
    pub async fn add(&self, socket: mpsc::UnboundedSender<Message>) -> usize {
        let socket_id = NEXT_SOCKET_ID.fetch_add(1, Ordering::Relaxed);
        self.storage.write().await.insert(socket_id, socket);
        socket_id
    }

    pub async fn remove(&self, socket_id: usize) {
        self.storage.write().await.remove(&socket_id);
    }

    pub async fn send_msg(&self, msg: &str, socket_id: usize) {
        if let Some(tx) = self.storage.read().await.get(&socket_id) {
            if tx.send(Message::Text(msg.to_string())).is_err() {
                // The pump task is gone; disconnect cleanup happens there.
                tracing::debug!(
                    task = "dashboard_socket",
                    socket_id,
                    "Dropped a message to a closing socket.",
                );
            }
        }
    }

    pub async fn broadcast_msg(&self, msg: &str) {
        for (socket_id, tx) in self.storage.read().await.iter() {
            if tx.send(Message::Text(msg.to_string())).is_err() {
                tracing::debug!(
                    task = "dashboard_socket",
                    socket_id = *socket_id,
                    "Dropped a broadcast to a closing socket.",
                );
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}
