//! Announcement Push Relay
//!
//! Browser sessions on the dashboard hold a WebSocket to `/ws` while the page
//! is mounted. Announcements published through `POST /push/announcements`
//! are relayed to every session subscribed to the `announcements` topic.
//!
//! ## Protocol
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:3000/ws');
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'connected') {
//!     ws.send(JSON.stringify({type: 'subscribe', topics: ['announcements']}));
//!   }
//!   if (msg.type === 'push') {
//!     const announcement = JSON.parse(msg.data.notification);
//!   }
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage, WsEvent, ANNOUNCEMENTS_TOPIC};
