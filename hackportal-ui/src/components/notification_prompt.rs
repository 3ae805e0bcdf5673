//! Notification Prompt Components
//!
//! Banner inviting visitors to turn on push notifications, plus a button
//! that asks for permission on click.

use gloo_timers::callback::Timeout;
use hackportal_core::notifications::{FADE_INTERVAL_MS, PROMPT_HOLD_MS};
use hackportal_core::{NotificationPermission, OptInPrompt};
use leptos::*;

use crate::state::notifications;

/// Opt-in banner.
///
/// Evaluated once after mount: when push delivery is supported and not yet
/// granted, the banner shows, permission is requested, and after a short
/// hold the banner fades out.
#[component]
pub fn NotificationPrompt() -> impl IntoView {
    let prompt = create_rw_signal(OptInPrompt::new());

    create_effect(move |_| {
        let capabilities = notifications::capabilities();
        let permission = notifications::permission();

        let offered = prompt
            .try_update(|p| p.on_ready(capabilities, permission))
            .unwrap_or(false);
        if !offered {
            return;
        }

        spawn_local(async {
            let answer = notifications::request_permission().await;
            web_sys::console::log_1(&format!("Notification permission: {:?}", answer).into());
        });

        Timeout::new(PROMPT_HOLD_MS, move || fade_out(prompt)).forget();
    });

    view! {
        <Show when=move || prompt.with(|p| p.is_visible())>
            <div
                id="popup"
                class="fixed z-50 w-[22rem] rounded-md px-4 py-2 top-16 right-6 bg-red-200"
                style=move || format!("opacity: {}", prompt.with(|p| p.opacity()))
            >
                "Turn on push notifications to stay up to date with events and announcements!"
            </div>
        </Show>
    }
}

/// Step the fade until the banner is gone or the page has been torn down
fn fade_out(prompt: RwSignal<OptInPrompt>) {
    Timeout::new(FADE_INTERVAL_MS, move || {
        if let Some(false) = prompt.try_update(|p| p.fade_step()) {
            fade_out(prompt);
        }
    })
    .forget();
}

/// Explicit opt-in for visitors who missed or dismissed the banner
#[component]
pub fn EnableNotificationsButton() -> impl IntoView {
    let permission = create_rw_signal(notifications::permission());
    let supported = notifications::capabilities().is_supported();

    let request = move |_| {
        spawn_local(async move {
            let answer = notifications::request_permission().await;
            let _ = permission.try_set(answer);
        });
    };

    view! {
        <Show when=move || supported && permission.get() != NotificationPermission::Granted>
            <button
                class="px-4 py-2 bg-indigo-300 rounded"
                disabled=move || permission.get() == NotificationPermission::Denied
                on:click=request
            >
                "Enable notifications"
            </button>
        </Show>
    }
}
