//! Browser State
//!
//! Push channel subscription and notification permission handling.

pub mod notifications;
pub mod push;
