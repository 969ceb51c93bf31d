// SPDX-License-Identifier: MPL-2.0
//! Renderable payload shared by components that accept either plain text or
//! richer, multi-paragraph content (messages, collapse panels, form hints).

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// Paragraphs rendered top to bottom.
    Paragraphs(Vec<String>),
}

impl Content {
    /// Number of rendered lines when at most `chars_per_line` characters fit
    /// on a line, used to estimate the height of a layout before it is
    /// measured. Explicit line breaks start a new line.
    #[must_use]
    pub fn line_count(&self, chars_per_line: usize) -> usize {
        let wrapped = |paragraph: &str| -> usize {
            paragraph
                .split('\n')
                .map(|line| line.chars().count().div_ceil(chars_per_line.max(1)).max(1))
                .sum()
        };
        match self {
            Content::Text(text) => wrapped(text),
            Content::Paragraphs(lines) => lines.iter().map(|line| wrapped(line)).sum::<usize>().max(1),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Paragraphs(lines) => lines.iter().all(String::is_empty),
        }
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        match self {
            Content::Text(text) => Text::new(text.as_str()).size(typography::BODY).into(),
            Content::Paragraphs(lines) => Column::with_children(
                lines
                    .iter()
                    .map(|line| Element::from(Text::new(line.as_str()).size(typography::BODY))),
            )
            .spacing(spacing::XXS)
            .into(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Vec<String>> for Content {
    fn from(value: Vec<String>) -> Self {
        Content::Paragraphs(value)
    }
}
