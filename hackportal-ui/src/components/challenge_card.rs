//! Challenge Components
//!
//! Organization selector tab and the matching challenge description card.
//! Visibility follows the active index held by the home page.

use hackportal_core::Challenge;
use leptos::*;

/// Organization selector; underlined and arrowed while active
#[component]
pub fn ChallengeTab(
    #[prop(into)]
    organization: String,
    #[prop(into)]
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="relative cursor-pointer text-center md:py-6 py-4 my-4 bg-purple-200 rounded-sm"
            class:underline=move || active.get()
            on:click=move |_| on_select.call(())
        >
            <div class="arrow-right absolute top-1/2 right-0" class:hidden=move || !active.get()></div>
            {organization}
        </div>
    }
}

/// Description card for one challenge; only the active one is shown
#[component]
pub fn ChallengeCard(
    challenge: Challenge,
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    let Challenge {
        organization,
        title,
        description,
        prizes,
        ..
    } = challenge;

    view! {
        <div class="challenge-card min-h-full p-6 bg-purple-100 rounded-lg" class:hidden=move || !active.get()>
            <h3 class="font-bold text-xl">{title}</h3>
            <p class="text-sm text-gray-600">{organization}</p>
            <p class="my-4">{description}</p>
            {(!prizes.is_empty()).then(|| view! {
                <div>
                    <p class="font-semibold">"Prizes"</p>
                    <ol class="list-decimal list-inside">
                        {prizes.into_iter().map(|prize| view! { <li>{prize}</li> }).collect_view()}
                    </ol>
                </div>
            })}
        </div>
    }
}
