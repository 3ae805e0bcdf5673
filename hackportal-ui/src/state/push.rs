//! Push Subscription
//!
//! Scoped connection to the server's push channel. A page opens one when it
//! mounts and closes it from `on_cleanup`, so no listener outlives the page.

use hackportal_core::{PushData, PushPayload, ANNOUNCEMENTS_TOPIC};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// WebSocket message types from server
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    Connected { connection_id: String },
    Push { data: PushData },
    Subscribed { topics: Vec<String> },
    Unsubscribed { topics: Vec<String> },
    Pong,
    Error { message: String },
}

/// WebSocket client message types
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Subscribe { topics: Vec<String> },
}

/// Live subscription to announcement pushes
pub struct PushSubscription {
    inner: Rc<Inner>,
}

struct Inner {
    url: String,
    connection: RefCell<Option<Connection>>,
    reconnect_attempts: Cell<u32>,
    closed: Cell<bool>,
    connected: RwSignal<bool>,
    on_push: Box<dyn Fn(PushPayload)>,
}

/// An open socket and the handlers attached to it
struct Connection {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut(JsValue)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}

impl PushSubscription {
    /// Connect and subscribe to announcements.
    ///
    /// `connected` tracks whether the socket is currently open; `on_push`
    /// receives every payload delivered on the announcements topic.
    pub fn open(
        url: impl Into<String>,
        connected: RwSignal<bool>,
        on_push: impl Fn(PushPayload) + 'static,
    ) -> Self {
        let inner = Rc::new(Inner {
            url: url.into(),
            connection: RefCell::new(None),
            reconnect_attempts: Cell::new(0),
            closed: Cell::new(false),
            connected,
            on_push: Box::new(on_push),
        });
        Inner::connect(&inner);
        Self { inner }
    }

    /// Stop listening and close the socket
    pub fn close(&self) {
        self.inner.closed.set(true);
        self.inner.connection.borrow_mut().take();
        let _ = self.inner.connected.try_set(false);
    }
}

impl Inner {
    fn connect(this: &Rc<Self>) {
        match WebSocket::new(&this.url) {
            Ok(ws) => {
                let connection = Connection::attach(ws, Rc::downgrade(this));
                *this.connection.borrow_mut() = Some(connection);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                Self::schedule_reconnect(this);
            }
        }
    }

    fn schedule_reconnect(this: &Rc<Self>) {
        if this.closed.get() {
            return;
        }

        let attempts = this.reconnect_attempts.get();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            return;
        }

        let delay = (2_u32.pow(attempts) * 1000).min(30000);
        this.reconnect_attempts.set(attempts + 1);

        let weak = Rc::downgrade(this);
        gloo_timers::callback::Timeout::new(delay, move || {
            if let Some(inner) = weak.upgrade() {
                if !inner.closed.get() {
                    web_sys::console::log_1(
                        &format!("Attempting reconnect (attempt {})", attempts + 1).into(),
                    );
                    Self::connect(&inner);
                }
            }
        })
        .forget();
    }

    fn handle_message(&self, ws: &WebSocket, text: &str) {
        match serde_json::from_str::<WsMessage>(text) {
            Ok(WsMessage::Connected { connection_id }) => {
                web_sys::console::log_1(&format!("Connected with ID: {}", connection_id).into());
                let subscribe = ClientMessage::Subscribe {
                    topics: vec![ANNOUNCEMENTS_TOPIC.to_string()],
                };
                if let Err(e) = send(ws, &subscribe) {
                    web_sys::console::error_1(&format!("Failed to subscribe: {}", e).into());
                }
            }
            Ok(WsMessage::Push { data }) => (self.on_push)(PushPayload { data }),
            Ok(WsMessage::Subscribed { topics }) => {
                web_sys::console::log_1(&format!("Subscribed to: {:?}", topics).into());
            }
            Ok(WsMessage::Unsubscribed { .. }) | Ok(WsMessage::Pong) => {}
            Ok(WsMessage::Error { message }) => {
                web_sys::console::error_1(&format!("Server error: {}", message).into());
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to parse WebSocket message: {}", e).into(),
                );
            }
        }
    }
}

impl Connection {
    fn attach(ws: WebSocket, inner: Weak<Inner>) -> Self {
        let weak = inner.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            if let Some(inner) = weak.upgrade() {
                inner.reconnect_attempts.set(0);
                let _ = inner.connected.try_set(true);
            }
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let weak = inner.clone();
        let ws_for_reply = ws.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                inner.handle_message(&ws_for_reply, &text);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let weak = inner;
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "WebSocket closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            if let Some(inner) = weak.upgrade() {
                let _ = inner.connected.try_set(false);
                Inner::schedule_reconnect(&inner);
            }
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Self {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
        }
    }
}

fn send(ws: &WebSocket, message: &ClientMessage) -> Result<(), String> {
    let json = serde_json::to_string(message).map_err(|e| e.to_string())?;
    ws.send_with_str(&json).map_err(|e| format!("{:?}", e))
}

/// Push channel URL on the host that served the page
pub fn push_url() -> Option<String> {
    let location = web_sys::window()?.location();
    let scheme = match location.protocol().ok()?.as_str() {
        "https:" => "wss",
        _ => "ws",
    };
    Some(format!("{}://{}/ws", scheme, location.host().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_message_decodes() {
        let json = r#"{"type":"push","data":{"notification":"{\"announcement\":\"X\"}"}}"#;
        match serde_json::from_str::<WsMessage>(json).unwrap() {
            WsMessage::Push { data } => {
                let announcement = PushPayload { data }.decode().unwrap();
                assert_eq!(announcement.announcement, "X");
            }
            other => panic!("Expected Push, got {:?}", other),
        }
    }

    #[test]
    fn test_subscribe_message_shape() {
        let msg = ClientMessage::Subscribe {
            topics: vec![ANNOUNCEMENTS_TOPIC.to_string()],
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"subscribe","topics":["announcements"]}"#
        );
    }
}
