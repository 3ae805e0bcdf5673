//! Spotlight Carousel Component
//!
//! One event card at a time with previous/next controls and pagination
//! bullets. The event count comes straight from the event list.

use hackportal_core::{SpotlightDeck, SpotlightEvent};
use leptos::*;

#[component]
pub fn SpotlightCarousel(events: Vec<SpotlightEvent>) -> impl IntoView {
    let deck = create_rw_signal(SpotlightDeck::new(events));
    let event_count = move || deck.with(|d| d.event_count());

    view! {
        <div class="spotlight">
            <div class="text-sm text-gray-500">"Event Count: " {event_count}</div>

            {move || match deck.with(|d| d.current().cloned()) {
                Some(event) => view! { <SpotlightCard event=event /> }.into_view(),
                None => view! {
                    <p class="text-gray-400 text-sm">"No spotlight events yet"</p>
                }.into_view(),
            }}

            <div class="flex items-center justify-center space-x-4 mt-2">
                <button class="px-2" on:click=move |_| deck.update(|d| d.prev())>"‹"</button>
                {move || (0..event_count()).map(|idx| {
                    let active = move || deck.with(|d| d.position() == idx);
                    view! {
                        <button
                            class="w-2 h-2 rounded-full"
                            class=("bg-indigo-600", active)
                            on:click=move |_| deck.update(|d| d.go_to(idx))
                        />
                    }
                }).collect_view()}
                <button class="px-2" on:click=move |_| deck.update(|d| d.next())>"›"</button>
            </div>
        </div>
    }
}

#[component]
fn SpotlightCard(event: SpotlightEvent) -> impl IntoView {
    view! {
        <div class="h-[19rem] w-full bg-indigo-100 rounded-lg p-6 flex flex-col justify-between">
            <div>
                <h2 class="text-2xl font-bold">{event.title}</h2>
                <p class="text-gray-700">{event.speakers.join(", ")}</p>
            </div>
            <div class="text-sm">
                <p>{event.date}</p>
                <p>{event.location}</p>
                <p>{event.time}</p>
            </div>
            {(!event.page.is_empty()).then(|| view! {
                <p class="text-indigo-700 text-sm">"See " {event.page}</p>
            })}
        </div>
    }
}
