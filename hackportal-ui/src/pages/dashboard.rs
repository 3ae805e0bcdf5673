//! Dashboard Page
//!
//! Attendee hub: spotlight carousel, live announcement feed and team panel.

use chrono::Local;
use hackportal_core::{AnnouncementFeed, DashboardProps};
use leptos::*;

use crate::components::{AnnouncementCard, SpotlightCarousel};
use crate::state::push::{push_url, PushSubscription};

#[component]
pub fn DashboardPage(props: DashboardProps) -> impl IntoView {
    let DashboardProps {
        announcements,
        spotlight,
    } = props;

    let feed = create_rw_signal(AnnouncementFeed::new(announcements));
    let live = create_rw_signal(false);

    // Push listener lives exactly as long as the page
    if let Some(url) = push_url() {
        let subscription = PushSubscription::open(url, live, move |payload| {
            feed.update(|f| {
                if let Err(e) = f.apply_push(&payload) {
                    web_sys::console::error_1(&format!("Dropped push message: {}", e).into());
                }
            });
        });
        on_cleanup(move || subscription.close());
    }

    view! {
        <section id="mainContent" class="px-6 py-3 w-full bg-white">
            <div class="flex flex-wrap my-16">
                <div class="md:w-3/5 w-full h-96">
                    <h1 class="md:text-3xl text-xl font-black">"Spotlight"</h1>
                    <SpotlightCarousel events=spotlight />
                </div>

                <div class="md:w-2/5 w-full h-96">
                    <h1 class="md:text-3xl text-xl font-black">
                        "Announcements"
                        <span
                            class="ml-2 inline-block w-2 h-2 rounded-full bg-gray-400"
                            class=("bg-green-400", move || live.get())
                            title=move || if live.get() { "Live" } else { "Offline" }
                        />
                    </h1>
                    <div id="announcement-items" class="overflow-y-scroll h-[90%]">
                        {move || {
                            feed.with(|f| {
                                if f.is_empty() {
                                    view! {
                                        <p class="text-gray-400 text-sm">"No announcements yet"</p>
                                    }.into_view()
                                } else {
                                    f.iter().map(|announcement| view! {
                                        <AnnouncementCard
                                            text=announcement.announcement.clone()
                                            time=announcement.clock_time(&Local)
                                        />
                                    }).collect_view()
                                }
                            })
                        }}
                    </div>
                </div>
            </div>

            <div class="flex flex-wrap h-96 my-16">
                <div class="md:w-2/5 w-full">
                    <h1 class="md:text-3xl text-xl font-black">"Your Team"</h1>
                    <div class="h-4/5 p-5 md:text-xl text-lg bg-purple-200 rounded-lg">
                        "Hackergang"
                    </div>
                </div>
            </div>
        </section>
    }
}
