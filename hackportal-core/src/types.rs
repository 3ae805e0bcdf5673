//! API Record Types
//!
//! Records served by the internal HackPortal API. They are consumed as-is;
//! nothing in this crate creates or persists them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short timestamped message shown to attendees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Message text
    pub announcement: String,
    /// When the announcement was posted (milliseconds since epoch on the wire)
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Announcement {
    /// Create an announcement posted at the given instant
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            announcement: text.into(),
            timestamp: Some(timestamp),
        }
    }

    /// Wall-clock time of the announcement as `HH:MM` in the given zone.
    ///
    /// Empty when the record carries no timestamp.
    pub fn clock_time<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.timestamp
            .map(|ts| ts.with_timezone(tz).format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// A keynote presenter shown on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeynoteSpeaker {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image reference for the speaker's portrait
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A sponsor-defined competition track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub organization: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prizes: Vec<String>,
    /// Display priority, lowest first
    pub rank: i64,
}
