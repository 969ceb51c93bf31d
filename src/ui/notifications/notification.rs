// SPDX-License-Identifier: MPL-2.0
//! Core message data structures.
//!
//! This module defines the identifiers, presentation options and lifecycle
//! states used throughout the message system.

use crate::config::MessageConfig;
use crate::ui::components::content::Content;
use crate::ui::design_tokens::palette;
use crate::ui::state::MessageDuration;
use iced::Color;
use std::fmt;

/// Unique identifier for a message.
///
/// Issued by a [`Registry`](super::Registry) from a counter starting at 1;
/// values are never reused for the lifetime of that registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) fn new(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message_{}", self.0)
    }
}

/// Message type determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl MessageType {
    /// Returns the accent color for this type.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            MessageType::Success => palette::SUCCESS_500,
            MessageType::Info => palette::INFO_500,
            MessageType::Warning => palette::WARNING_500,
            MessageType::Danger => palette::DANGER_500,
        }
    }

    /// Glyph shown in front of the message text.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            MessageType::Success => "\u{2714}",
            MessageType::Info => "\u{2139}",
            MessageType::Warning => "\u{26A0}",
            MessageType::Danger => "\u{2716}",
        }
    }
}

/// Presentation options accepted by [`Registry::create`](super::Registry::create).
#[derive(Debug, Clone, PartialEq)]
pub struct MessageOptions {
    pub content: Content,
    pub duration: MessageDuration,
    pub kind: MessageType,
    pub show_close: bool,
    /// Gap in pixels between this message and the one above it.
    pub offset: f32,
    pub transition_name: String,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self::from_config(Content::default(), &MessageConfig::default())
    }
}

impl MessageOptions {
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Builds options whose defaults come from the `[message]` settings section.
    pub fn from_config(content: impl Into<Content>, config: &MessageConfig) -> Self {
        Self {
            content: content.into(),
            duration: MessageDuration::from_millis(config.duration_ms()),
            kind: MessageType::default(),
            show_close: config.show_close(),
            offset: config.offset(),
            transition_name: config.transition().to_string(),
        }
    }

    pub fn success(content: impl Into<Content>) -> Self {
        Self::new(content).kind(MessageType::Success)
    }

    pub fn info(content: impl Into<Content>) -> Self {
        Self::new(content).kind(MessageType::Info)
    }

    pub fn warning(content: impl Into<Content>) -> Self {
        Self::new(content).kind(MessageType::Warning)
    }

    pub fn danger(content: impl Into<Content>) -> Self {
        Self::new(content).kind(MessageType::Danger)
    }

    #[must_use]
    pub fn kind(mut self, kind: MessageType) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: MessageDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = show_close;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn transition_name(mut self, name: impl Into<String>) -> Self {
        self.transition_name = name.into();
        self
    }
}

/// Completion signal bound to one message.
///
/// Only a registry can mint one. The surface stores it at mount time and
/// hands it back through [`Registry::complete`](super::Registry::complete)
/// once the exit transition has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    id: NotificationId,
}

impl Completion {
    pub(super) fn new(id: NotificationId) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }
}

/// Everything the surface needs to render one message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageProps {
    pub id: NotificationId,
    pub z_index: u32,
    pub options: MessageOptions,
    pub on_destroy: Completion,
}

/// Per-message lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Visible,
    /// Asked to hide; waiting for the exit transition to complete.
    Hiding,
    Destroyed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MESSAGE_DURATION_MS, DEFAULT_MESSAGE_OFFSET};

    #[test]
    fn id_displays_with_message_prefix() {
        assert_eq!(NotificationId::new(7).to_string(), "message_7");
    }

    #[test]
    fn message_type_colors_are_distinct() {
        let colors = [
            MessageType::Success.color(),
            MessageType::Info.color(),
            MessageType::Warning.color(),
            MessageType::Danger.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_options_match_configured_defaults() {
        let options = MessageOptions::new("saved");
        assert_eq!(options.content, Content::from("saved"));
        assert_eq!(options.kind, MessageType::Info);
        assert_eq!(options.duration.as_millis(), DEFAULT_MESSAGE_DURATION_MS);
        assert_eq!(options.offset, DEFAULT_MESSAGE_OFFSET);
        assert_eq!(options.transition_name, "fade-up");
        assert!(!options.show_close);
    }

    #[test]
    fn builder_pattern_overrides_defaults() {
        let options = MessageOptions::danger("failed")
            .duration(MessageDuration::PERSISTENT)
            .show_close(true)
            .offset(8.0)
            .transition_name("fade");

        assert_eq!(options.kind, MessageType::Danger);
        assert!(options.duration.auto_dismiss().is_none());
        assert!(options.show_close);
        assert_eq!(options.offset, 8.0);
        assert_eq!(options.transition_name, "fade");
    }

    #[test]
    fn from_config_uses_message_section() {
        let config = MessageConfig {
            duration_ms: Some(800),
            offset: Some(4.0),
            show_close: Some(true),
            transition: Some("none".into()),
        };
        let options = MessageOptions::from_config("hi", &config);
        assert_eq!(options.duration.as_millis(), 800);
        assert_eq!(options.offset, 4.0);
        assert!(options.show_close);
        assert_eq!(options.transition_name, "none");
    }
}
