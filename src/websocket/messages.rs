//! WebSocket Message Types
//!
//! Defines all message types for the push channel between browser sessions
//! and the HackPortal server.

use hackportal_core::{PushData, PushPayload};
use serde::{Deserialize, Serialize};

pub use hackportal_core::ANNOUNCEMENTS_TOPIC;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Subscribe to topics for real-time updates
    Subscribe {
        /// List of topics to subscribe to (e.g., "announcements")
        topics: Vec<String>,
    },
    /// Unsubscribe from topics
    Unsubscribe {
        /// List of topics to unsubscribe from
        topics: Vec<String>,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A push-delivered message; `data.notification` holds an encoded announcement
    Push { data: PushData },
    /// Subscription confirmed
    Subscribed {
        /// Topics successfully subscribed to
        topics: Vec<String>,
    },
    /// Unsubscription confirmed
    Unsubscribed {
        /// Topics successfully unsubscribed from
        topics: Vec<String>,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
}

/// Internal event for broadcasting through the hub
#[derive(Debug, Clone)]
pub struct WsEvent {
    /// Topic this event belongs to
    pub topic: String,
    /// The message to send to subscribers
    pub message: ServerMessage,
}

impl WsEvent {
    /// Create an announcement push event
    pub fn announcement(payload: PushPayload) -> Self {
        Self {
            topic: ANNOUNCEMENTS_TOPIC.to_string(),
            message: ServerMessage::Push { data: payload.data },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_subscribe() {
        let json = r#"{"type": "subscribe", "topics": ["announcements"]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Subscribe { topics } => {
                assert_eq!(topics, vec!["announcements"]);
            }
            _ => panic!("Expected Subscribe"),
        }
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_push_message_keeps_payload_shape() {
        let payload = PushPayload {
            data: PushData {
                notification: r#"{"announcement":"X","timestamp":1700000000000}"#.to_string(),
            },
        };
        let event = WsEvent::announcement(payload);
        assert_eq!(event.topic, ANNOUNCEMENTS_TOPIC);

        let json = serde_json::to_value(&event.message).unwrap();
        assert_eq!(json["type"], "push");
        assert_eq!(
            json["data"]["notification"],
            r#"{"announcement":"X","timestamp":1700000000000}"#
        );
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            connection_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"connection_id\":\"abc-123\""));
    }
}
