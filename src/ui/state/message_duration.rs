// SPDX-License-Identifier: MPL-2.0
//! Display duration domain type for messages.
//!
//! This module provides a type-safe wrapper for how long a message stays
//! visible before hiding itself, in milliseconds.

use crate::config::{DEFAULT_MESSAGE_DURATION_MS, MAX_MESSAGE_DURATION_MS};
use std::time::Duration;

/// Message display duration in milliseconds.
///
/// Zero means the message stays until it is dismissed. Values above the
/// maximum are clamped.
///
/// # Example
///
/// ```
/// use iced_element::ui::state::MessageDuration;
///
/// let duration = MessageDuration::from_millis(1500);
/// assert_eq!(duration.as_millis(), 1500);
/// assert!(MessageDuration::PERSISTENT.auto_dismiss().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDuration(u64);

impl MessageDuration {
    /// Never auto-dismiss.
    pub const PERSISTENT: Self = Self(0);

    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.min(MAX_MESSAGE_DURATION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the auto-dismiss delay, or `None` for persistent messages.
    #[must_use]
    pub fn auto_dismiss(self) -> Option<Duration> {
        (self.0 > 0).then(|| Duration::from_millis(self.0))
    }
}

impl Default for MessageDuration {
    fn default() -> Self {
        Self(DEFAULT_MESSAGE_DURATION_MS)
    }
}
