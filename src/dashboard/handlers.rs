use crate::app_context::AppContext;
use crate::dashboard::message_types::{
    self, ClientSentSocketMessage, MapSnapshotPayload, ServerSentSocketMessage,
};
use crate::dashboard::responses::MarkersResponse;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::{Json, Response};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt, TryFutureExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

#[axum::debug_handler]
pub async fn markers(State(app_context): State<AppContext>) -> Json<MarkersResponse> {
    let scene = app_context.scene.snapshot().await;
    Json(MarkersResponse {
        error: false,
        map: MapSnapshotPayload::from(scene),
    })
}

pub async fn ws(State(app_context): State<AppContext>, upgrade: WebSocketUpgrade) -> Response {
    upgrade.on_upgrade(move |socket| async move {
        let mut handler = DashboardWsHandler::new(app_context, socket).await;
        handler.on_client_connected().await;
    })
}

pub struct DashboardWsHandler {
    app_context: AppContext,
    socket_id: usize,
    client_ws_tx: Option<SplitSink<WebSocket, Message>>,
    client_ws_rx: SplitStream<WebSocket>,
    rx: Option<UnboundedReceiverStream<Message>>,
}

impl DashboardWsHandler {
    pub async fn new(app_context: AppContext, websocket: WebSocket) -> Self {
        // Split the socket into a sender and receiver of messages. An
        // unbounded channel buffers broadcasts until the pump task flushes
        // them to the websocket.
        let (client_ws_tx, client_ws_rx) = websocket.split();
        let (tx, rx) = mpsc::unbounded_channel();
        let rx = UnboundedReceiverStream::new(rx);
        let socket_id = app_context.sockets.add(tx).await;
        Self {
            app_context,
            socket_id,
            client_ws_tx: Some(client_ws_tx),
            client_ws_rx,
            rx: Some(rx),
        }
    }

    pub async fn on_client_connected(&mut self) {
        let mut client_ws_tx = self.client_ws_tx.take().unwrap();
        let mut rx = self.rx.take().unwrap();
        let socket_id = self.socket_id;
        tokio::task::spawn(async move {
            while let Some(message) = rx.next().await {
                client_ws_tx
                    .send(message)
                    .unwrap_or_else(|error| {
                        tracing::debug!(
                            task = "dashboard_socket",
                            socket_id,
                            "Websocket send error: {error}.",
                        )
                    })
                    .await;
            }
        });
        let count = self.app_context.sockets.count().await;
        tracing::info!(
            task = "sockets_count",
            count,
            "Dashboard client connected.",
        );
        self.send_snapshot().await;
        while let Some(result) = self.client_ws_rx.next().await {
            let message = match result {
                Ok(message) => message,
                Err(error) => {
                    tracing::debug!(
                        task = "dashboard_socket",
                        socket_id = self.socket_id,
                        "Websocket error: {error}.",
                    );
                    break;
                }
            };
            self.on_client_message(message).await;
        }
        self.on_client_disconnected().await;
    }

    /// Every client starts from the full scene and applies live mutations on
    /// top of it.
    async fn send_snapshot(&self) {
        let scene = self.app_context.scene.snapshot().await;
        let message = ServerSentSocketMessage::MapSnapshot {
            r#type: message_types::MapSnapshot,
            payload: MapSnapshotPayload::from(scene),
        };
        self.app_context
            .sockets
            .send_msg(&serde_json::to_string(&message).unwrap(), self.socket_id)
            .await;
    }

    async fn on_client_message(&self, message: Message) {
        let raw_message = match message.to_text() {
            Ok(raw_message) => raw_message,
            Err(_) => {
                tracing::debug!(
                    task = "dashboard_socket",
                    socket_id = self.socket_id,
                    "Dropping a non-text message.",
                );
                return;
            }
        };
        match serde_json::from_str(raw_message) {
            Ok(ClientSentSocketMessage::Ping { .. }) => {
                let pong = ServerSentSocketMessage::Pong {
                    r#type: message_types::Pong,
                };
                self.app_context
                    .sockets
                    .send_msg(&serde_json::to_string(&pong).unwrap(), self.socket_id)
                    .await;
            }
            Err(error) => {
                tracing::debug!(
                    task = "dashboard_socket",
                    socket_id = self.socket_id,
                    "Unrecognized client message: {error}.",
                );
            }
        }
    }

    async fn on_client_disconnected(&self) {
        self.app_context.sockets.remove(self.socket_id).await;
        let count = self.app_context.sockets.count().await;
        tracing::info!(
            task = "sockets_count",
            count,
            "Dashboard client disconnected.",
        );
    }
}
