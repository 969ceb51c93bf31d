// SPDX-License-Identifier: MPL-2.0
//! Collapsible panels, optionally in accordion mode.

use crate::ui::components::content::Content;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::fmt;

/// Identifier of a collapse item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameType {
    Str(String),
    Number(i64),
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameType::Str(name) => write!(f, "{name}"),
            NameType::Number(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for NameType {
    fn from(name: &str) -> Self {
        NameType::Str(name.to_string())
    }
}

impl From<i64> for NameType {
    fn from(name: i64) -> Self {
        NameType::Number(name)
    }
}

#[derive(Debug, Clone)]
pub struct CollapseItem {
    pub name: NameType,
    pub title: String,
    pub disabled: bool,
    pub content: Content,
}

impl CollapseItem {
    #[must_use]
    pub fn new(name: impl Into<NameType>, title: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            disabled: false,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ItemClicked(NameType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UpdateModelValue(Vec<NameType>),
    Change(Vec<NameType>),
}

#[derive(Debug, Clone, Default)]
pub struct Collapse {
    items: Vec<CollapseItem>,
    active_names: Vec<NameType>,
    accordion: bool,
}

impl Collapse {
    /// Accordion mode keeps only the first of several initial names.
    #[must_use]
    pub fn new(items: Vec<CollapseItem>, active_names: Vec<NameType>, accordion: bool) -> Self {
        let mut active_names = active_names;
        if accordion && active_names.len() > 1 {
            tracing::warn!(
                count = active_names.len(),
                "accordion mode allows a single active item, keeping the first"
            );
            active_names.truncate(1);
        }
        Self {
            items,
            active_names,
            accordion,
        }
    }

    #[must_use]
    pub fn active_names(&self) -> &[NameType] {
        &self.active_names
    }

    #[must_use]
    pub fn is_active(&self, name: &NameType) -> bool {
        self.active_names.contains(name)
    }

    /// Replaces the active names from the bound model.
    pub fn set_active_names(&mut self, names: Vec<NameType>) {
        self.active_names = names;
        if self.accordion {
            self.active_names.truncate(1);
        }
    }

    pub fn handle_item_click(&mut self, name: &NameType) -> Vec<Event> {
        let disabled = self
            .items
            .iter()
            .find(|item| &item.name == name)
            .is_some_and(|item| item.disabled);
        if disabled {
            return Vec::new();
        }

        if self.accordion {
            self.active_names = if self.is_active(name) {
                Vec::new()
            } else {
                vec![name.clone()]
            };
        } else if let Some(position) = self.active_names.iter().position(|n| n == name) {
            self.active_names.remove(position);
        } else {
            self.active_names.push(name.clone());
        }

        vec![
            Event::UpdateModelValue(self.active_names.clone()),
            Event::Change(self.active_names.clone()),
        ]
    }

    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::ItemClicked(name) => self.handle_item_click(&name),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let items = self.items.iter().map(|item| {
            let active = self.is_active(&item.name);
            let arrow = if active { "\u{25BE}" } else { "\u{25B8}" };

            let header_row = Row::new()
                .align_y(alignment::Vertical::Center)
                .push(Text::new(item.title.as_str()).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(Text::new(arrow).size(typography::BODY_SM));

            let mut header = button(header_row)
                .width(Length::Fill)
                .padding([spacing::XS, 0.0])
                .style(styles::button::collapse_header(item.disabled));
            if !item.disabled {
                header = header.on_press(Message::ItemClicked(item.name.clone()));
            }

            let mut body = Column::new().push(header);
            if active {
                body = body.push(
                    container(item.content.view())
                        .padding([spacing::XS, 0.0])
                        .width(Length::Fill),
                );
            }

            Element::from(
                container(body)
                    .width(Length::Fill)
                    .style(styles::container::collapse_item),
            )
        });

        Column::with_children(items).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> NameType {
        NameType::from(value)
    }

    fn items() -> Vec<CollapseItem> {
        vec![
            CollapseItem::new("a", "Title A", "body a"),
            CollapseItem::new("b", "Title B", "body b"),
            CollapseItem::new("c", "Title C", "body c").disabled(true),
        ]
    }

    #[test]
    fn click_toggles_membership() {
        let mut collapse = Collapse::new(items(), vec![name("a")], false);
        let events = collapse.handle_item_click(&name("b"));
        assert_eq!(collapse.active_names(), [name("a"), name("b")]);
        assert_eq!(
            events,
            vec![
                Event::UpdateModelValue(vec![name("a"), name("b")]),
                Event::Change(vec![name("a"), name("b")]),
            ]
        );

        collapse.handle_item_click(&name("a"));
        assert_eq!(collapse.active_names(), [name("b")]);
    }

    #[test]
    fn accordion_keeps_a_single_item() {
        let mut collapse = Collapse::new(items(), Vec::new(), true);
        collapse.handle_item_click(&name("a"));
        collapse.handle_item_click(&name("b"));
        assert_eq!(collapse.active_names(), [name("b")]);

        collapse.handle_item_click(&name("b"));
        assert!(collapse.active_names().is_empty());
    }

    #[test]
    fn accordion_truncates_initial_names() {
        let collapse = Collapse::new(items(), vec![name("a"), name("b")], true);
        assert_eq!(collapse.active_names(), [name("a")]);
    }

    #[test]
    fn disabled_item_ignores_clicks() {
        let mut collapse = Collapse::new(items(), Vec::new(), false);
        assert!(collapse.handle_item_click(&name("c")).is_empty());
        assert!(collapse.active_names().is_empty());
    }

    #[test]
    fn numeric_names_are_supported() {
        let items = vec![CollapseItem::new(1_i64, "One", "1")];
        let mut collapse = Collapse::new(items, Vec::new(), false);
        collapse.update(Message::ItemClicked(NameType::Number(1)));
        assert!(collapse.is_active(&NameType::Number(1)));
    }
}
