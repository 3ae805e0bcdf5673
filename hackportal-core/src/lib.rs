//! # HackPortal Core
//!
//! Domain model and page state for the HackPortal event site. Everything in
//! this crate is plain data and pure state transitions, so the same code runs
//! on the server (while rendering page shells) and in the browser (while
//! driving the interactive pages).
//!
//! ## Modules
//!
//! - [`types`]: Records served by the internal API
//! - [`challenges`]: Rank ordering and the challenge-tab selector
//! - [`feed`]: Live announcement feed and push payload decoding
//! - [`speakers`]: Keynote speaker row layout and card colors
//! - [`spotlight`]: Spotlight event carousel
//! - [`notifications`]: Push notification opt-in gating
//! - [`site`]: Static landing page content
//! - [`props`]: Page props handed from the server to the browser

pub mod challenges;
pub mod feed;
pub mod notifications;
pub mod props;
pub mod site;
pub mod speakers;
pub mod spotlight;
pub mod types;

pub use challenges::{sort_by_rank, ChallengeBoard, ChallengeTabs, TabChange};
pub use feed::{AnnouncementFeed, FeedError, PushData, PushPayload, ANNOUNCEMENTS_TOPIC};
pub use notifications::{
    should_offer_prompt, NotificationPermission, OptInPrompt, PlatformCapabilities, PromptFade,
};
pub use props::{DashboardProps, HomeProps, PageKind, PROPS_ELEMENT_ID, ROOT_ELEMENT_ID};
pub use site::{HeroButton, SiteContent, SocialLink, Stat};
pub use speakers::{color_scheme_for, keynote_rows, ColorScheme, PlacedSpeaker, COLOR_SCHEMES};
pub use spotlight::{default_spotlight_events, SpotlightDeck, SpotlightEvent};
pub use types::{Announcement, Challenge, KeynoteSpeaker};
