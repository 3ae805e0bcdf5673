//! Keynote Speaker Layout
//!
//! The landing page lays speakers out in two staggered rows and cycles
//! through three card color schemes.

use crate::types::KeynoteSpeaker;

/// Light/dark pair used to tint a speaker card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub light: &'static str,
    pub dark: &'static str,
}

pub const COLOR_SCHEMES: [ColorScheme; 3] = [
    ColorScheme {
        light: "#F2F3FF",
        dark: "#C1C8FF",
    },
    ColorScheme {
        light: "#D8F8FF",
        dark: "#B0F1FF",
    },
    ColorScheme {
        light: "#FDECFF",
        dark: "#FCD7FF",
    },
];

/// Color scheme for the speaker at `idx` in API order
pub fn color_scheme_for(idx: usize) -> ColorScheme {
    COLOR_SCHEMES[idx % COLOR_SCHEMES.len()]
}

/// A speaker with its position in API order and its card colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSpeaker<'a> {
    pub index: usize,
    pub speaker: &'a KeynoteSpeaker,
    pub colors: ColorScheme,
}

/// Split speakers into the two display rows.
///
/// Speaker `i` goes to the first row when `i < len / 2` (real division), so
/// an odd count puts the extra speaker on the first row.
pub fn keynote_rows(
    speakers: &[KeynoteSpeaker],
) -> (Vec<PlacedSpeaker<'_>>, Vec<PlacedSpeaker<'_>>) {
    let split = (speakers.len() + 1) / 2;
    speakers
        .iter()
        .enumerate()
        .map(|(index, speaker)| PlacedSpeaker {
            index,
            speaker,
            colors: color_scheme_for(index),
        })
        .partition(|placed| placed.index < split)
}
