//! WebSocket Connection Hub
//!
//! Tracks every open push session and its topic subscriptions, and fans
//! published events out to the subscribers of each topic.

use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::{ServerMessage, WsEvent, ANNOUNCEMENTS_TOPIC};

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Manages all WebSocket connections and subscriptions.
///
/// Methods that need both maps lock `connections` before `subscriptions`.
pub struct ConnectionHub {
    /// Active connections: ConnectionId → ConnectionHandle
    connections: RwLock<HashMap<ConnectionId, ConnectionHandle>>,
    /// Topic subscriptions: Topic → Set of ConnectionIds
    subscriptions: RwLock<HashMap<String, HashSet<ConnectionId>>>,
    config: HubConfig,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 1000,
        }
    }
}

/// Handle for sending messages to a specific connection
pub struct ConnectionHandle {
    /// Channel sender for this connection
    pub sender: mpsc::UnboundedSender<ServerMessage>,
    /// Topics this connection is subscribed to
    pub subscriptions: HashSet<String>,
}

impl ConnectionHub {
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            subscriptions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// Returns the connection ID on success, or an error if the connection
    /// limit has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(
            id.clone(),
            ConnectionHandle {
                sender,
                subscriptions: HashSet::new(),
            },
        );

        tracing::info!(connection_id = %id, "Push session connected");
        Ok(id)
    }

    /// Unregister a connection and clean up its subscriptions
    pub async fn unregister(&self, id: &str) {
        let handle = self.connections.write().await.remove(id);

        if let Some(handle) = handle {
            let mut subs = self.subscriptions.write().await;
            for topic in handle.subscriptions {
                if let Some(subscribers) = subs.get_mut(&topic) {
                    subscribers.remove(id);
                    if subscribers.is_empty() {
                        subs.remove(&topic);
                    }
                }
            }
        }

        tracing::info!(connection_id = %id, "Push session disconnected");
    }

    /// Subscribe a connection to topics, returning the ones accepted
    pub async fn subscribe(&self, id: &str, topics: Vec<String>) -> Result<Vec<String>, HubError> {
        let mut connections = self.connections.write().await;
        let handle = connections
            .get_mut(id)
            .ok_or(HubError::ConnectionNotFound)?;

        let mut subs = self.subscriptions.write().await;
        let mut subscribed = Vec::new();

        for topic in topics {
            if !is_valid_topic(&topic) {
                tracing::warn!(topic = %topic, "Invalid topic ignored");
                continue;
            }

            handle.subscriptions.insert(topic.clone());
            subs.entry(topic.clone())
                .or_default()
                .insert(id.to_string());

            subscribed.push(topic);
        }

        tracing::debug!(
            connection_id = %id,
            topics = ?subscribed,
            "Subscribed to topics"
        );

        Ok(subscribed)
    }

    /// Unsubscribe a connection from topics
    pub async fn unsubscribe(
        &self,
        id: &str,
        topics: Vec<String>,
    ) -> Result<Vec<String>, HubError> {
        let mut connections = self.connections.write().await;
        let handle = connections
            .get_mut(id)
            .ok_or(HubError::ConnectionNotFound)?;

        let mut subs = self.subscriptions.write().await;
        let mut unsubscribed = Vec::new();

        for topic in topics {
            if handle.subscriptions.remove(&topic) {
                if let Some(subscribers) = subs.get_mut(&topic) {
                    subscribers.remove(id);
                    if subscribers.is_empty() {
                        subs.remove(&topic);
                    }
                }
                unsubscribed.push(topic);
            }
        }

        tracing::debug!(
            connection_id = %id,
            topics = ?unsubscribed,
            "Unsubscribed from topics"
        );

        Ok(unsubscribed)
    }

    /// Send an event to every subscriber of its topic.
    ///
    /// Returns how many sessions the event was handed to.
    pub async fn broadcast(&self, event: &WsEvent) -> usize {
        // Lock order: connections, then subscriptions
        let connections = self.connections.read().await;
        let subs = self.subscriptions.read().await;

        let Some(subscriber_ids) = subs.get(&event.topic) else {
            return 0;
        };

        let sent_count = subscriber_ids
            .iter()
            .filter_map(|id| connections.get(id))
            .filter(|handle| handle.sender.send(event.message.clone()).is_ok())
            .count();

        tracing::debug!(
            topic = %event.topic,
            subscribers = sent_count,
            "Broadcast event"
        );

        sent_count
    }

    /// Send a message directly to a specific connection
    pub async fn send_to(&self, id: &str, message: ServerMessage) -> Result<(), HubError> {
        let connections = self.connections.read().await;
        let handle = connections.get(id).ok_or(HubError::ConnectionNotFound)?;

        handle
            .sender
            .send(message)
            .map_err(|_| HubError::SendFailed)
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Get subscription count for a topic
    pub async fn subscription_count(&self, topic: &str) -> usize {
        self.subscriptions
            .read()
            .await
            .get(topic)
            .map(|s| s.len())
            .unwrap_or(0)
    }
}

fn is_valid_topic(topic: &str) -> bool {
    topic == ANNOUNCEMENTS_TOPIC
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {0})")]
    TooManyConnections(usize),

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackportal_core::{PushData, PushPayload};

    fn announcement_event(text: &str) -> WsEvent {
        WsEvent::announcement(PushPayload {
            data: PushData {
                notification: format!(r#"{{"announcement":"{}"}}"#, text),
            },
        })
    }

    #[test]
    fn test_valid_topics() {
        assert!(is_valid_topic("announcements"));
        assert!(!is_valid_topic("metrics.mood"));
        assert!(!is_valid_topic(""));
    }

    #[tokio::test]
    async fn test_register_unregister() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = hub.register(tx).await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(hub.connection_count().await, 1);

        hub.unregister(&id).await;
        assert_eq!(hub.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_subscribe_unsubscribe() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        let subscribed = hub
            .subscribe(&id, vec!["announcements".to_string(), "bogus".to_string()])
            .await
            .unwrap();
        assert_eq!(subscribed, vec!["announcements"]);
        assert_eq!(hub.subscription_count(ANNOUNCEMENTS_TOPIC).await, 1);

        let unsubscribed = hub
            .unsubscribe(&id, vec!["announcements".to_string()])
            .await
            .unwrap();
        assert_eq!(unsubscribed, vec!["announcements"]);
        assert_eq!(hub.subscription_count(ANNOUNCEMENTS_TOPIC).await, 0);

        hub.unregister(&id).await;
    }

    #[tokio::test]
    async fn test_unregister_drops_subscriptions() {
        let hub = ConnectionHub::new(HubConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();
        hub.subscribe(&id, vec![ANNOUNCEMENTS_TOPIC.to_string()])
            .await
            .unwrap();

        hub.unregister(&id).await;
        assert_eq!(hub.subscription_count(ANNOUNCEMENTS_TOPIC).await, 0);
        assert_eq!(hub.broadcast(&announcement_event("late")).await, 0);
    }

    #[tokio::test]
    async fn test_connection_limit() {
        let hub = ConnectionHub::new(HubConfig { max_connections: 2 });

        let (tx1, _) = mpsc::unbounded_channel();
        let (tx2, _) = mpsc::unbounded_channel();
        let (tx3, _) = mpsc::unbounded_channel();

        let id1 = hub.register(tx1).await.unwrap();
        let id2 = hub.register(tx2).await.unwrap();
        let result = hub.register(tx3).await;

        assert!(matches!(result, Err(HubError::TooManyConnections(2))));

        hub.unregister(&id1).await;
        hub.unregister(&id2).await;
    }

    #[tokio::test]
    async fn test_broadcast_to_subscribers() {
        let hub = ConnectionHub::new(HubConfig::default());

        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();

        let id1 = hub.register(tx1).await.unwrap();
        let id2 = hub.register(tx2).await.unwrap();

        // Only id1 subscribes
        hub.subscribe(&id1, vec![ANNOUNCEMENTS_TOPIC.to_string()])
            .await
            .unwrap();

        let delivered = hub.broadcast(&announcement_event("Dinner")).await;
        assert_eq!(delivered, 1);

        match rx1.try_recv().unwrap() {
            ServerMessage::Push { data } => assert!(data.notification.contains("Dinner")),
            other => panic!("Expected Push, got {:?}", other),
        }
        assert!(rx2.try_recv().is_err());

        hub.unregister(&id1).await;
        hub.unregister(&id2).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_subscribe_and_broadcast() {
        use std::sync::Arc;
        use std::time::Duration;

        let hub = Arc::new(ConnectionHub::new(HubConfig::default()));
        let mut receivers = Vec::new();
        let mut ids = Vec::new();
        for _ in 0..20 {
            let (tx, rx) = mpsc::unbounded_channel();
            ids.push(hub.register(tx).await.unwrap());
            receivers.push(rx);
        }
        let ids = Arc::new(ids);

        let mut tasks = Vec::new();
        for worker in 0..4 {
            let hub = Arc::clone(&hub);
            let ids = Arc::clone(&ids);
            tasks.push(tokio::spawn(async move {
                for i in 0..2000 {
                    let id = &ids[(worker + i) % ids.len()];
                    let topics = vec![ANNOUNCEMENTS_TOPIC.to_string()];
                    hub.subscribe(id, topics.clone()).await.unwrap();
                    hub.unsubscribe(id, topics).await.unwrap();
                }
            }));
        }
        for _ in 0..4 {
            let hub = Arc::clone(&hub);
            tasks.push(tokio::spawn(async move {
                for _ in 0..2000 {
                    hub.broadcast(&announcement_event("tick")).await;
                }
            }));
        }

        let all = futures_util::future::join_all(tasks);
        let finished = tokio::time::timeout(Duration::from_secs(20), all)
            .await
            .expect("hub locked up under concurrent subscribe and broadcast");
        assert!(finished.iter().all(|r| r.is_ok()));
        assert_eq!(hub.connection_count().await, 20);
    }

    #[tokio::test]
    async fn test_send_to_unknown_connection() {
        let hub = ConnectionHub::new(HubConfig::default());
        let result = hub.send_to("missing", ServerMessage::Pong).await;
        assert!(matches!(result, Err(HubError::ConnectionNotFound)));
    }
}
