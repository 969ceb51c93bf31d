// SPDX-License-Identifier: MPL-2.0
//! Single-line text input with clear and password-visibility affordances.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSize {
    Large,
    Small,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub input_type: InputType,
    pub size: Option<InputSize>,
    pub disabled: bool,
    pub clearable: bool,
    /// Shows the eye toggle for password inputs.
    pub show_password: bool,
    pub placeholder: String,
    pub readonly: bool,
}

impl InputProps {
    #[must_use]
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    #[must_use]
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn show_password(mut self, show_password: bool) -> Self {
        self.show_password = show_password;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    fn editable(&self) -> bool {
        !self.disabled && !self.readonly
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edited(String),
    Submitted,
    ClearPressed,
    TogglePasswordVisibility,
}

/// Events propagated to the owner of the model value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UpdateModelValue(String),
    Input(String),
    Change(String),
    Clear,
}

#[derive(Debug, Clone, Default)]
pub struct Input {
    props: InputProps,
    value: String,
    committed: String,
    password_visible: bool,
}

impl Input {
    #[must_use]
    pub fn new(props: InputProps) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.committed = self.value.clone();
        self
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn props(&self) -> &InputProps {
        &self.props
    }

    #[must_use]
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// The clear button is shown for a non-empty value of an editable, clearable input.
    #[must_use]
    pub fn show_clear(&self) -> bool {
        self.props.clearable && self.props.editable() && !self.value.is_empty()
    }

    #[must_use]
    pub fn show_password_toggle(&self) -> bool {
        self.props.show_password
            && self.props.input_type == InputType::Password
            && !self.props.disabled
    }

    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Edited(value) => {
                if !self.props.editable() {
                    return Vec::new();
                }
                self.value = value;
                vec![
                    Event::UpdateModelValue(self.value.clone()),
                    Event::Input(self.value.clone()),
                ]
            }
            Message::Submitted => {
                if !self.props.editable() || self.value == self.committed {
                    return Vec::new();
                }
                self.committed = self.value.clone();
                vec![Event::Change(self.value.clone())]
            }
            Message::ClearPressed => {
                if !self.show_clear() {
                    return Vec::new();
                }
                self.value.clear();
                self.committed.clear();
                vec![
                    Event::UpdateModelValue(String::new()),
                    Event::Input(String::new()),
                    Event::Change(String::new()),
                    Event::Clear,
                ]
            }
            Message::TogglePasswordVisibility => {
                if self.show_password_toggle() {
                    self.password_visible = !self.password_visible;
                }
                Vec::new()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.view_with(false)
    }

    /// Renders the input with a danger border when `invalid`.
    pub fn view_with(&self, invalid: bool) -> Element<'_, Message> {
        let (height, text_size) = match self.props.size {
            Some(InputSize::Large) => (sizing::BUTTON_HEIGHT_LARGE, typography::TITLE_SM),
            Some(InputSize::Small) => (sizing::BUTTON_HEIGHT_SMALL, typography::BODY_SM),
            None => (sizing::INPUT_HEIGHT, typography::BODY),
        };

        let secure = self.props.input_type == InputType::Password && !self.password_visible;
        let mut field = text_input(&self.props.placeholder, &self.value)
            .secure(secure)
            .size(text_size)
            .padding([spacing::XXS, spacing::SM])
            .width(Length::Fill)
            .style(styles::input::field(invalid));
        if self.props.editable() {
            field = field
                .on_input(Message::Edited)
                .on_submit(Message::Submitted);
        }

        let mut row = Row::new()
            .spacing(spacing::XXS)
            .height(Length::Fixed(height))
            .align_y(alignment::Vertical::Center)
            .push(field);

        if self.show_clear() {
            row = row.push(
                button(Text::new("\u{2715}").size(typography::BODY_SM))
                    .on_press(Message::ClearPressed)
                    .padding(spacing::XXS)
                    .style(styles::button::close),
            );
        }
        if self.show_password_toggle() {
            let glyph = if self.password_visible { "\u{25C9}" } else { "\u{25CE}" };
            row = row.push(
                button(Text::new(glyph).size(typography::BODY_SM))
                    .on_press(Message::TogglePasswordVisibility)
                    .padding(spacing::XXS)
                    .style(styles::button::close),
            );
        }

        row.into()
    }
}
