//! Notification Permission
//!
//! Feature detection and permission requests against the browser's
//! `Notification` API.

use hackportal_core::{NotificationPermission, PlatformCapabilities};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Detect the features push delivery needs
pub fn capabilities() -> PlatformCapabilities {
    let Some(window) = web_sys::window() else {
        return PlatformCapabilities::default();
    };
    let navigator = window.navigator();

    PlatformCapabilities {
        notification: has_property(&window, "Notification"),
        service_worker: has_property(&navigator, "serviceWorker"),
        push_manager: has_property(&window, "PushManager"),
    }
}

fn from_web(permission: web_sys::NotificationPermission) -> NotificationPermission {
    match permission {
        web_sys::NotificationPermission::Granted => NotificationPermission::Granted,
        web_sys::NotificationPermission::Denied => NotificationPermission::Denied,
        _ => NotificationPermission::Default,
    }
}

/// Current permission. Browsers without the API report `Default`.
pub fn permission() -> NotificationPermission {
    if capabilities().notification {
        from_web(web_sys::Notification::permission())
    } else {
        NotificationPermission::Default
    }
}

/// Ask the visitor for permission and wait for their answer
pub async fn request_permission() -> NotificationPermission {
    if !capabilities().notification {
        return NotificationPermission::Default;
    }

    let promise = match web_sys::Notification::request_permission() {
        Ok(promise) => promise,
        Err(e) => {
            web_sys::console::error_1(
                &format!("Notification permission request failed: {:?}", e).into(),
            );
            return NotificationPermission::Default;
        }
    };

    match JsFuture::from(promise).await {
        Ok(value) => match value.as_string().as_deref() {
            Some("granted") => NotificationPermission::Granted,
            Some("denied") => NotificationPermission::Denied,
            _ => NotificationPermission::Default,
        },
        Err(e) => {
            web_sys::console::error_1(
                &format!("Notification permission request failed: {:?}", e).into(),
            );
            NotificationPermission::Default
        }
    }
}
