//! Landing Page Content
//!
//! Static copy for the landing page: hero, call-to-action buttons, event
//! stats, promo video and footer links. Deployments override it through the
//! `[site]` config section.

use serde::{Deserialize, Serialize};

/// Hero call-to-action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    pub text: String,
    pub path: String,
}

/// Headline figure shown next to the promo video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// The figure itself, e.g. "1000+"
    pub data: String,
    /// What it counts, e.g. "Hackers"
    pub object: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub buttons: Vec<HeroButton>,
    pub stats: Vec<Stat>,
    pub video_url: String,
    pub about: String,
    pub contact_email: String,
    pub register_path: String,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

fn button(text: &str, path: &str) -> HeroButton {
    HeroButton {
        text: text.to_string(),
        path: path.to_string(),
    }
}

fn stat(data: &str, object: &str) -> Stat {
    Stat {
        data: data.to_string(),
        object: object.to_string(),
    }
}

fn social(label: &str, url: &str) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            title: "HackPortal".to_string(),
            tagline: "A Project by ACM Engineering and HackUTD".to_string(),
            description: "A default HackPortal instance".to_string(),
            buttons: vec![
                button("Register", "/register"),
                button("Schedule", "/schedule"),
                button("Hacker Pack", "/hackerpacks"),
                button("Dashboard", "/dashboard"),
            ],
            stats: vec![
                stat("1000+", "Hackers"),
                stat("$10,000", "in Prizes"),
                stat("24", "Hours"),
                stat("40+", "Workshops"),
            ],
            video_url: "https://www.youtube.com/embed/niFBblrblqo".to_string(),
            about: "Here will be a short paragraph providing a general overview of what \
                    the hackathon is. This can be dates, events, contests, and prizes."
                .to_string(),
            contact_email: "email@organization.com".to_string(),
            register_path: "/register".to_string(),
            socials: vec![
                social("Website", "https://acmutd.co"),
                social("Instagram", "https://www.instagram.com/hackutd/?hl=en"),
                social("Twitter", "https://twitter.com/hackutd"),
                social("LinkedIn", "https://www.linkedin.com/company/hackutd"),
            ],
            copyright: "© HackUTD Tech".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let site: SiteContent =
            serde_json::from_str(r#"{"title": "HackTX", "stats": []}"#).unwrap();
        assert_eq!(site.title, "HackTX");
        assert!(site.stats.is_empty());
        assert_eq!(site.buttons.len(), 4);
        assert_eq!(site.contact_email, "email@organization.com");
    }
}
