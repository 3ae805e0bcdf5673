//! Announcement Card Component

use leptos::*;

/// One entry in the announcement feed
#[component]
pub fn AnnouncementCard(
    #[prop(into)]
    text: String,
    /// Local `HH:MM`, empty when the announcement has no timestamp
    #[prop(into)]
    time: String,
) -> impl IntoView {
    view! {
        <div class="announcement-card border-2 rounded-lg p-3 my-2">
            <p>{text}</p>
            <p class="text-right text-sm text-gray-500">{time}</p>
        </div>
    }
}
