//! Spotlight Events
//!
//! Featured workshops shown in the dashboard carousel. The event count is
//! derived from the dataset itself.

use serde::{Deserialize, Serialize};

/// A featured event shown in the spotlight carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotlightEvent {
    pub title: String,
    #[serde(default)]
    pub speakers: Vec<String>,
    pub date: String,
    pub location: String,
    pub time: String,
    /// Page the card links to
    #[serde(default)]
    pub page: String,
}

impl SpotlightEvent {
    fn workshop(title: &str) -> Self {
        Self {
            title: title.to_string(),
            speakers: vec!["Abdullah Hasani".to_string(), "Nam Truong".to_string()],
            date: "Saturday, Nov 13th".to_string(),
            location: "ECSW 1.154".to_string(),
            time: "12:30 - 1:30 PM".to_string(),
            page: "HackerPack".to_string(),
        }
    }
}

/// Events featured when no spotlight list is configured
pub fn default_spotlight_events() -> Vec<SpotlightEvent> {
    [
        "Tensorflow w/ Google",
        "StateFarm Workshop",
        "Google Workshop",
        "American Airlines Workshop",
    ]
    .into_iter()
    .map(SpotlightEvent::workshop)
    .collect()
}

/// Carousel over the spotlight events, one slide visible at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightDeck {
    events: Vec<SpotlightEvent>,
    current: usize,
}

impl SpotlightDeck {
    pub fn new(events: Vec<SpotlightEvent>) -> Self {
        Self { events, current: 0 }
    }

    pub fn events(&self) -> &[SpotlightEvent] {
        &self.events
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Index of the visible slide
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&SpotlightEvent> {
        self.events.get(self.current)
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&mut self) {
        if !self.events.is_empty() {
            self.current = (self.current + 1) % self.events.len();
        }
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) {
        if !self.events.is_empty() {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.events.len() - 1);
        }
    }

    /// Jump to a slide (pagination bullet). Out-of-range indices are ignored.
    pub fn go_to(&mut self, idx: usize) {
        if idx < self.events.len() {
            self.current = idx;
        }
    }
}
