//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod announcement_card;
pub mod challenge_card;
pub mod keynote_speaker;
pub mod notification_prompt;
pub mod spotlight;

pub use announcement_card::AnnouncementCard;
pub use challenge_card::{ChallengeCard, ChallengeTab};
pub use keynote_speaker::KeynoteSpeakerCard;
pub use notification_prompt::{EnableNotificationsButton, NotificationPrompt};
pub use spotlight::SpotlightCarousel;
