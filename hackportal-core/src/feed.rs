//! Live Announcement Feed
//!
//! The dashboard seeds its feed with the announcements fetched when the page
//! was rendered, then prepends every announcement delivered over the push
//! channel. There is no deduplication and no reordering of existing items.
//!
//! Push messages carry the announcement JSON-encoded inside
//! `data.notification`:
//!
//! ```json
//! {"data": {"notification": "{\"announcement\":\"X\",\"timestamp\":1700000000000}"}}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

use crate::types::Announcement;

/// Push channel topic carrying live announcements
pub const ANNOUNCEMENTS_TOPIC: &str = "announcements";

/// Ordered announcements, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementFeed {
    items: VecDeque<Announcement>,
}

impl AnnouncementFeed {
    /// Seed the feed with announcements in the order they were fetched
    pub fn new(initial: Vec<Announcement>) -> Self {
        Self {
            items: initial.into(),
        }
    }

    /// Put a newly arrived announcement at the front
    pub fn prepend(&mut self, announcement: Announcement) {
        self.items.push_front(announcement);
    }

    /// Decode a push payload and prepend its announcement.
    ///
    /// A payload that fails to decode leaves the feed untouched.
    pub fn apply_push(&mut self, payload: &PushPayload) -> Result<&Announcement, FeedError> {
        let announcement = payload.decode()?;
        self.prepend(announcement);
        Ok(&self.items[0])
    }

    /// Parse a raw push message and prepend its announcement
    pub fn apply_raw(&mut self, raw: &str) -> Result<&Announcement, FeedError> {
        let payload = PushPayload::parse(raw)?;
        self.apply_push(&payload)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Announcement> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Announcement> {
        self.items.iter().cloned().collect()
    }
}

/// A message delivered over the push channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    pub data: PushData,
}

/// Body of a push message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushData {
    /// JSON-encoded [`Announcement`]
    pub notification: String,
}

impl PushPayload {
    /// Wrap an announcement for delivery
    pub fn from_announcement(announcement: &Announcement) -> Result<Self, FeedError> {
        let notification = serde_json::to_string(announcement).map_err(FeedError::Encode)?;
        Ok(Self {
            data: PushData { notification },
        })
    }

    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        serde_json::from_str(raw).map_err(FeedError::Payload)
    }

    /// Decode the announcement carried in `data.notification`
    pub fn decode(&self) -> Result<Announcement, FeedError> {
        serde_json::from_str(&self.data.notification).map_err(FeedError::Notification)
    }
}

/// Errors decoding push-delivered announcements
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Malformed push payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("Malformed announcement in push payload: {0}")]
    Notification(#[source] serde_json::Error),

    #[error("Failed to encode announcement: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn text(a: &Announcement) -> &str {
        &a.announcement
    }

    #[test]
    fn test_prepend_keeps_existing_order() {
        let mut feed = AnnouncementFeed::new(vec![
            Announcement::new("a0", Utc::now()),
            Announcement::new("a1", Utc::now()),
        ]);
        feed.prepend(Announcement::new("p", Utc::now()));

        let texts: Vec<_> = feed.iter().map(text).collect();
        assert_eq!(texts, vec!["p", "a0", "a1"]);
    }

    #[test]
    fn test_no_deduplication() {
        let a = Announcement::new("same", Utc::now());
        let mut feed = AnnouncementFeed::new(vec![a.clone()]);
        feed.prepend(a);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_apply_raw_push() {
        let mut feed = AnnouncementFeed::default();
        let raw = r#"{"data":{"notification":"{\"announcement\":\"X\",\"timestamp\":1700000000000}"}}"#;

        let added = feed.apply_raw(raw).unwrap();
        assert_eq!(added.announcement, "X");
        assert_eq!(added.clock_time(&Utc), "22:13");
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_malformed_payload_leaves_feed_untouched() {
        let mut feed = AnnouncementFeed::new(vec![Announcement::new("a0", Utc::now())]);

        let err = feed.apply_raw("not json").unwrap_err();
        assert!(matches!(err, FeedError::Payload(_)));

        let err = feed
            .apply_raw(r#"{"data":{"notification":"{broken"}}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::Notification(_)));

        assert_eq!(feed.len(), 1);
        assert_eq!(feed.iter().next().unwrap().announcement, "a0");
    }

    #[test]
    fn test_payload_wraps_announcement() {
        let posted = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let a = Announcement::new("Doors open", posted);
        let payload = PushPayload::from_announcement(&a).unwrap();
        assert_eq!(payload.decode().unwrap(), a);
    }
}
