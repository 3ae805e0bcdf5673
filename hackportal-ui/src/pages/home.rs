//! Home Page
//!
//! Landing page: opt-in banner, hero, promo video and stats, keynote
//! speakers, challenge tabs and footer.

use hackportal_core::{
    keynote_rows, ChallengeBoard, HomeProps, KeynoteSpeaker, PlacedSpeaker, SiteContent,
};
use leptos::*;

use crate::components::{
    ChallengeCard, ChallengeTab, EnableNotificationsButton, KeynoteSpeakerCard, NotificationPrompt,
};

#[component]
pub fn HomePage(props: HomeProps) -> impl IntoView {
    let HomeProps {
        keynote_speakers,
        challenges,
        site,
    } = props;

    view! {
        <NotificationPrompt />
        <Hero site=site.clone() />
        <VideoAndStats site=site.clone() />
        <KeynoteSpeakers speakers=keynote_speakers />
        <Challenges board=ChallengeBoard::new(challenges) />
        <Footer site=site />
    }
}

#[component]
fn Hero(site: SiteContent) -> impl IntoView {
    view! {
        <section class="min-h-screen p-4 bg-indigo-100">
            <div class="max-w-4xl mx-auto flex flex-col justify-center items-center min-h-[480px]">
                <h1 class="text-center md:text-6xl text-3xl font-black">{site.title}</h1>
                <p class="text-center my-4 md:text-3xl text-xl font-bold">{site.tagline}</p>
                <EnableNotificationsButton />
            </div>
            <div class="flex flex-col items-center md:flex-row md:justify-around px-4">
                {site.buttons.into_iter().map(|button| view! {
                    <a href=button.path class="w-[12rem] bg-indigo-300 py-4 text-center">
                        {button.text}
                    </a>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn VideoAndStats(site: SiteContent) -> impl IntoView {
    view! {
        <section class="relative py-12 bg-white">
            <div class="flex flex-col justify-center items-center md:flex-row">
                <iframe
                    class="video"
                    width="700"
                    height="400"
                    src=site.video_url
                    title="YouTube video player"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
                <div>
                    {site.stats.into_iter().enumerate().map(|(idx, stat)| {
                        // Stagger alternate rows
                        let offset = if idx % 2 == 0 { "md:ml-20 ml-14" } else { "md:mr-8 mr-24" };
                        view! {
                            <div class=format!("{} text-center my-4", offset)>
                                <p class="font-bold text-2xl text-indigo-600 lg:text-5xl">{stat.data}</p>
                                <p class="font-medium text-lg lg:text-3xl">{stat.object}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn KeynoteSpeakers(speakers: Vec<KeynoteSpeaker>) -> impl IntoView {
    let (first, second) = keynote_rows(&speakers);

    view! {
        <section class="flex overflow-x-scroll bg-gray-200 min-h-[24rem]">
            <div class="flex items-center justify-center p-6 max-w-[18rem] text-2xl font-bold">
                "Featuring Keynote Speakers"
            </div>
            <div class="flex flex-col justify-center py-6 md:px-6">
                <div class="flex">{speaker_row(first)}</div>
                <div class="flex md:ml-[7rem] ml-[5rem]">{speaker_row(second)}</div>
            </div>
        </section>
    }
}

fn speaker_row(placed: Vec<PlacedSpeaker<'_>>) -> View {
    placed
        .into_iter()
        .map(|p| view! { <KeynoteSpeakerCard speaker=p.speaker.clone() colors=p.colors /> })
        .collect_view()
}

#[component]
fn Challenges(board: ChallengeBoard) -> impl IntoView {
    let challenges = board.challenges().to_vec();
    let tabs = create_rw_signal(board.tabs());

    let select = move |idx: usize| {
        tabs.update(|t| {
            t.select(idx);
        })
    };

    view! {
        <section class="p-6">
            <div class="font-bold text-2xl">"Challenges"</div>
            <div class="flex">
                <div class="md:w-1/4 w-1/5">
                    {challenges.iter().enumerate().map(|(idx, challenge)| view! {
                        <ChallengeTab
                            organization=challenge.organization.clone()
                            active=Signal::derive(move || tabs.with(|t| t.is_active(idx)))
                            on_select=Callback::new(move |_| select(idx))
                        />
                    }).collect_view()}
                </div>
                <div class="md:w-3/4 w-4/5 my-4 pl-6 min-h-full">
                    {challenges.into_iter().enumerate().map(|(idx, challenge)| view! {
                        <ChallengeCard
                            challenge=challenge
                            active=Signal::derive(move || tabs.with(|t| t.is_active(idx)))
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(site: SiteContent) -> impl IntoView {
    view! {
        <section class="bg-gray-200 mt-16">
            <div class="flex flex-wrap justify-evenly p-6">
                <div class="md:w-2/5 w-full md:mb-0 mb-6">
                    <h1 class="font-semibold mb-2">"About Us"</h1>
                    <p class="text-sm">{site.about}</p>
                </div>
                <div class="flex flex-col text-sm">
                    <h1 class="font-semibold text-base mb-2">"Company"</h1>
                    <a
                        href=format!("mailto:{}", site.contact_email)
                        rel="noopener noreferrer"
                        target="_blank"
                        class="hover:underline"
                    >
                        "Contact Us"
                    </a>
                    <a href=site.register_path class="hover:underline">"Register"</a>
                </div>
                <div class="flex flex-col text-sm">
                    <h1 class="font-semibold text-base mb-2">"Follow Us"</h1>
                    {site.socials.into_iter().map(|social| view! {
                        <a href=social.url target="_blank" rel="noreferrer" class="hover:underline">
                            {social.label}
                        </a>
                    }).collect_view()}
                </div>
            </div>
            <div class="md:w-2/5 w-3/5 mx-auto text-center border-t-2 border-gray-500 text-sm mt-8">
                {site.copyright}
            </div>
        </section>
    }
}
