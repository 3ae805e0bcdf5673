//! Challenge Ordering and Tab Selection
//!
//! Challenges are listed by rank, and the landing page shows one
//! organization's challenge at a time behind a row of selector tabs.

use crate::types::Challenge;

/// Order challenges by ascending rank.
///
/// Challenges sharing a rank keep the order the API returned them in.
pub fn sort_by_rank(mut challenges: Vec<Challenge>) -> Vec<Challenge> {
    challenges.sort_by_key(|c| c.rank);
    challenges
}

/// Selector over a fixed number of tabs with exactly one active tab.
///
/// Starts on the first tab and has no terminal state; the selection only
/// resets when a new selector is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTabs {
    len: usize,
    active: usize,
}

/// Outcome of a tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    /// Tab that lost its active marker
    pub previous: usize,
    /// Tab that is now active
    pub current: usize,
}

impl ChallengeTabs {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Number of tabs
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active tab, `None` when there are no tabs
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    pub fn is_active(&self, idx: usize) -> bool {
        idx < self.len && idx == self.active
    }

    /// Make `idx` the active tab.
    ///
    /// Out-of-range indices leave the selection untouched and return `None`.
    pub fn select(&mut self, idx: usize) -> Option<TabChange> {
        if idx >= self.len {
            return None;
        }
        let previous = std::mem::replace(&mut self.active, idx);
        Some(TabChange {
            previous,
            current: idx,
        })
    }
}

/// Rank-ordered challenges together with their tab selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeBoard {
    challenges: Vec<Challenge>,
    tabs: ChallengeTabs,
}

impl ChallengeBoard {
    /// Build a board, ordering the challenges by rank
    pub fn new(challenges: Vec<Challenge>) -> Self {
        let challenges = sort_by_rank(challenges);
        let tabs = ChallengeTabs::new(challenges.len());
        Self { challenges, tabs }
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Organization names in display order
    pub fn organizations(&self) -> impl Iterator<Item = &str> {
        self.challenges.iter().map(|c| c.organization.as_str())
    }

    pub fn tabs(&self) -> ChallengeTabs {
        self.tabs
    }

    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.tabs.active().and_then(|idx| self.challenges.get(idx))
    }

    pub fn select(&mut self, idx: usize) -> Option<TabChange> {
        self.tabs.select(idx)
    }
}
