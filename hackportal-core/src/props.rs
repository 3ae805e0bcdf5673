//! Page Props
//!
//! Data the server fetches while rendering a page shell and embeds in it for
//! the browser to pick up. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::site::SiteContent;
use crate::spotlight::SpotlightEvent;
use crate::types::{Announcement, Challenge, KeynoteSpeaker};

/// Element id of the embedded props script
pub const PROPS_ELEMENT_ID: &str = "portal-props";

/// Element id the browser app mounts into
pub const ROOT_ELEMENT_ID: &str = "portal-root";

/// Which page a shell hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Dashboard,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Dashboard => "dashboard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(PageKind::Home),
            "dashboard" => Some(PageKind::Dashboard),
            _ => None,
        }
    }
}

/// Props for the landing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    #[serde(default)]
    pub keynote_speakers: Vec<KeynoteSpeaker>,
    /// Already ordered by rank
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub site: SiteContent,
}

/// Props for the attendee dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardProps {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub spotlight: Vec<SpotlightEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_props_camel_case() {
        let props = HomeProps::default();
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("\"keynoteSpeakers\":[]"));
        assert!(json.contains("\"challenges\":[]"));
    }

    #[test]
    fn test_dashboard_props_tolerate_missing_fields() {
        let props: DashboardProps = serde_json::from_str("{}").unwrap();
        assert!(props.announcements.is_empty());
        assert!(props.spotlight.is_empty());
    }

    #[test]
    fn test_page_kind_round_trip() {
        for kind in [PageKind::Home, PageKind::Dashboard] {
            assert_eq!(PageKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PageKind::parse("admin"), None);
    }
}
