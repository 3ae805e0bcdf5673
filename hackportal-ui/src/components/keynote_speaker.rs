//! Keynote Speaker Component
//!
//! Speaker card tinted with one of the rotating color schemes. The
//! description is revealed while the card is hovered.

use hackportal_core::{ColorScheme, KeynoteSpeaker};
use leptos::*;

#[component]
pub fn KeynoteSpeakerCard(speaker: KeynoteSpeaker, colors: ColorScheme) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let KeynoteSpeaker {
        name,
        description,
        file_name,
    } = speaker;

    view! {
        <div
            class="keynote-speaker w-[16rem] h-[9rem] mx-4 my-2 rounded-lg p-3 flex"
            style=format!("background-color: {}", colors.light)
            on:mouseenter=move |_| expanded.set(true)
            on:mouseleave=move |_| expanded.set(false)
        >
            {file_name.map(|src| view! {
                <img
                    class="w-16 h-16 rounded-full object-cover"
                    style=format!("border: 3px solid {}", colors.dark)
                    src=src
                    alt=name.clone()
                />
            })}
            <div class="ml-3">
                <h3 class="font-bold">{name.clone()}</h3>
                <p class="text-sm" class:hidden=move || !expanded.get()>
                    {description}
                </p>
            </div>
        </div>
    }
}
