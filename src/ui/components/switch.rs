// SPDX-License-Identifier: MPL-2.0
//! On/off switch whose model can be a bool, a string or a number.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{toggler, Row, Text};
use iced::{alignment, Element};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchValue {
    Bool(bool),
    Str(String),
    Number(f64),
}

impl fmt::Display for SwitchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchValue::Bool(value) => write!(f, "{value}"),
            SwitchValue::Str(value) => write!(f, "{value}"),
            SwitchValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for SwitchValue {
    fn from(value: bool) -> Self {
        SwitchValue::Bool(value)
    }
}

impl From<&str> for SwitchValue {
    fn from(value: &str) -> Self {
        SwitchValue::Str(value.to_string())
    }
}

impl From<f64> for SwitchValue {
    fn from(value: f64) -> Self {
        SwitchValue::Number(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchSize {
    Large,
    Small,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchProps {
    pub active_value: SwitchValue,
    pub inactive_value: SwitchValue,
    pub active_text: Option<String>,
    pub inactive_text: Option<String>,
    pub size: Option<SwitchSize>,
    pub disabled: bool,
}

impl Default for SwitchProps {
    fn default() -> Self {
        Self {
            active_value: SwitchValue::Bool(true),
            inactive_value: SwitchValue::Bool(false),
            active_text: None,
            inactive_text: None,
            size: None,
            disabled: false,
        }
    }
}

impl SwitchProps {
    #[must_use]
    pub fn values(mut self, active: impl Into<SwitchValue>, inactive: impl Into<SwitchValue>) -> Self {
        self.active_value = active.into();
        self.inactive_value = inactive.into();
        self
    }

    #[must_use]
    pub fn texts(mut self, active: impl Into<String>, inactive: impl Into<String>) -> Self {
        self.active_text = Some(active.into());
        self.inactive_text = Some(inactive.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    UpdateModelValue(SwitchValue),
    Change(SwitchValue),
}

#[derive(Debug, Clone)]
pub struct Switch {
    props: SwitchProps,
    model: SwitchValue,
}

impl Switch {
    /// Starts in the inactive position.
    #[must_use]
    pub fn new(props: SwitchProps) -> Self {
        let model = props.inactive_value.clone();
        Self { props, model }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<SwitchValue>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn model(&self) -> &SwitchValue {
        &self.model
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.model == self.props.active_value
    }

    pub fn toggle(&mut self) -> Vec<Event> {
        if self.props.disabled {
            return Vec::new();
        }
        self.model = if self.is_checked() {
            self.props.inactive_value.clone()
        } else {
            self.props.active_value.clone()
        };
        vec![
            Event::UpdateModelValue(self.model.clone()),
            Event::Change(self.model.clone()),
        ]
    }

    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Toggled => self.toggle(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let size = match self.props.size {
            Some(SwitchSize::Large) => sizing::SWITCH_LARGE,
            Some(SwitchSize::Small) => sizing::SWITCH_SMALL,
            None => sizing::SWITCH_DEFAULT,
        };

        let mut switch = toggler(self.is_checked()).size(size);
        if !self.props.disabled {
            switch = switch.on_toggle(|_| Message::Toggled);
        }

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(text) = &self.props.inactive_text {
            row = row.push(Text::new(text.as_str()).size(typography::BODY));
        }
        row = row.push(switch);
        if let Some(text) = &self.props.active_text {
            row = row.push(Text::new(text.as_str()).size(typography::BODY));
        }
        row.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_switch_is_unchecked_bool() {
        let switch = Switch::new(SwitchProps::default());
        assert!(!switch.is_checked());
        assert_eq!(switch.model(), &SwitchValue::Bool(false));
    }

    #[test]
    fn toggle_flips_and_emits_both_events() {
        let mut switch = Switch::new(SwitchProps::default());
        let events = switch.toggle();
        assert!(switch.is_checked());
        assert_eq!(
            events,
            vec![
                Event::UpdateModelValue(SwitchValue::Bool(true)),
                Event::Change(SwitchValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn custom_values_are_compared_with_model() {
        let props = SwitchProps::default().values("on", "off");
        let switch = Switch::new(props.clone()).with_model("on");
        assert!(switch.is_checked());

        let mut switch = Switch::new(props.values(1.0, 0.0));
        switch.update(Message::Toggled);
        assert_eq!(switch.model(), &SwitchValue::Number(1.0));
    }

    #[test]
    fn disabled_switch_does_not_toggle() {
        let mut switch = Switch::new(SwitchProps::default().disabled(true));
        assert!(switch.toggle().is_empty());
        assert!(!switch.is_checked());
    }

    #[test]
    fn unknown_model_value_counts_as_unchecked() {
        let mut switch = Switch::new(SwitchProps::default()).with_model("maybe");
        assert!(!switch.is_checked());
        switch.toggle();
        assert!(switch.is_checked());
    }
}
