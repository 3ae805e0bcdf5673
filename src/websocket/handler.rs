//! WebSocket Handler
//!
//! Upgrades `/ws` requests and runs one push session per socket.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::server::AppState;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

async fn send_direct(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    let text = serde_json::to_string(message).map_err(axum::Error::new)?;
    sender.send(Message::Text(text)).await
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>) {
    let (mut sender, mut receiver) = socket.split();

    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected push session");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            let _ = send_direct(&mut sender, &error_msg).await;
            return;
        }
    };

    let connected_msg = ServerMessage::Connected {
        connection_id: connection_id.clone(),
    };
    if send_direct(&mut sender, &connected_msg).await.is_err() {
        tracing::error!(connection_id = %connection_id, "Failed to send connected message");
        hub.unregister(&connection_id).await;
        return;
    }

    let conn_id_for_send = connection_id.clone();

    // Forward hub messages to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if send_direct(&mut sender, &msg).await.is_err() {
                tracing::debug!(
                    connection_id = %conn_id_for_send,
                    "WebSocket send failed, closing connection"
                );
                break;
            }
        }
    });

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&hub_for_recv, &conn_id_for_recv, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}

/// Handle a received WebSocket frame.
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(hub: &ConnectionHub, connection_id: &str, message: Message) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    handle_client_message(hub, connection_id, client_msg).await;
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        "Invalid client message"
                    );
                    let error_msg = ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    };
                    let _ = hub.send_to(connection_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            };
            let _ = hub.send_to(connection_id, error_msg).await;
            true
        }
        // axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Apply a parsed client message and queue the reply
async fn handle_client_message(hub: &ConnectionHub, connection_id: &str, message: ClientMessage) {
    let reply = match message {
        ClientMessage::Subscribe { topics } => hub
            .subscribe(connection_id, topics)
            .await
            .map(|topics| ServerMessage::Subscribed { topics }),
        ClientMessage::Unsubscribe { topics } => hub
            .unsubscribe(connection_id, topics)
            .await
            .map(|topics| ServerMessage::Unsubscribed { topics }),
        ClientMessage::Ping => Ok(ServerMessage::Pong),
    };

    let reply = reply.unwrap_or_else(|e| {
        tracing::error!(connection_id = %connection_id, error = %e, "Subscription change failed");
        ServerMessage::Error {
            message: e.to_string(),
        }
    });

    let _ = hub.send_to(connection_id, reply).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websocket::{HubConfig, ANNOUNCEMENTS_TOPIC};

    async fn session(hub: &ConnectionHub) -> (String, mpsc::UnboundedReceiver<ServerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();
        (id, rx)
    }

    #[tokio::test]
    async fn test_subscribe_frame_replies_with_topics() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (id, mut rx) = session(&hub).await;

        let frame = Message::Text(r#"{"type":"subscribe","topics":["announcements"]}"#.into());
        assert!(handle_ws_message(&hub, &id, frame).await);

        match rx.try_recv().unwrap() {
            ServerMessage::Subscribed { topics } => assert_eq!(topics, vec![ANNOUNCEMENTS_TOPIC]),
            other => panic!("Expected Subscribed, got {:?}", other),
        }
        assert_eq!(hub.subscription_count(ANNOUNCEMENTS_TOPIC).await, 1);
    }

    #[tokio::test]
    async fn test_ping_frame_gets_pong() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (id, mut rx) = session(&hub).await;

        assert!(handle_ws_message(&hub, &id, Message::Text(r#"{"type":"ping"}"#.into())).await);
        assert!(matches!(rx.try_recv().unwrap(), ServerMessage::Pong));
    }

    #[tokio::test]
    async fn test_garbage_frame_keeps_session_open() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (id, mut rx) = session(&hub).await;

        assert!(handle_ws_message(&hub, &id, Message::Text("not json".into())).await);
        assert!(matches!(rx.try_recv().unwrap(), ServerMessage::Error { .. }));
    }

    #[tokio::test]
    async fn test_close_frame_ends_session() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (id, _rx) = session(&hub).await;

        assert!(!handle_ws_message(&hub, &id, Message::Close(None)).await);
    }
}
