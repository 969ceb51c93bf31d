// SPDX-License-Identifier: MPL-2.0
//! Button with type colors, sizes, plain/round/circle shapes and a loading state.
//!
//! # Usage
//!
//! ```ignore
//! use iced_element::ui::components::button::{Button, ButtonProps, ButtonType};
//!
//! Button::new(ButtonProps::default().kind(ButtonType::Primary).round(true))
//!     .view("Save", Message::Save)
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl ButtonType {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ButtonType::Primary => palette::PRIMARY_500,
            ButtonType::Success => palette::SUCCESS_500,
            ButtonType::Warning => palette::WARNING_500,
            ButtonType::Danger => palette::DANGER_500,
            ButtonType::Info => palette::INFO_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Large,
    Small,
}

/// What pressing the button means inside a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NativeType {
    #[default]
    Button,
    Submit,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub kind: Option<ButtonType>,
    pub size: Option<ButtonSize>,
    pub plain: bool,
    pub round: bool,
    pub circle: bool,
    pub disabled: bool,
    pub native_type: NativeType,
    pub autofocus: bool,
    /// Glyph shown before the label.
    pub icon: Option<String>,
    pub loading: bool,
}

impl ButtonProps {
    #[must_use]
    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    #[must_use]
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn native_type(mut self, native_type: NativeType) -> Self {
        self.native_type = native_type;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Disabled and loading buttons ignore presses.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        match self.size {
            Some(ButtonSize::Large) => sizing::BUTTON_HEIGHT_LARGE,
            Some(ButtonSize::Small) => sizing::BUTTON_HEIGHT_SMALL,
            None => sizing::BUTTON_HEIGHT,
        }
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        if self.circle {
            radius::FULL
        } else if self.round {
            radius::ROUND
        } else {
            radius::SM
        }
    }

    fn text_size(&self) -> f32 {
        match self.size {
            Some(ButtonSize::Large) => typography::TITLE_SM,
            Some(ButtonSize::Small) => typography::BODY_SM,
            None => typography::BODY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    props: ButtonProps,
}

impl Button {
    #[must_use]
    pub fn new(props: ButtonProps) -> Self {
        Self { props }
    }

    #[must_use]
    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Renders the button; `on_press` is only wired while it is interactive.
    ///
    /// Circle buttons show only their icon (or the label if they have none).
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        label: &'a str,
        on_press: Message,
    ) -> Element<'a, Message> {
        let props = &self.props;
        let text_size = props.text_size();

        let leading = if props.loading {
            Some("\u{27F3}")
        } else {
            props.icon.as_deref()
        };

        let mut content = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center);
        if let Some(glyph) = leading {
            content = content.push(Text::new(glyph).size(text_size));
        }
        if !props.circle || leading.is_none() {
            content = content.push(Text::new(label).size(text_size));
        }

        let height = props.height();
        let width = if props.circle {
            Length::Fixed(height)
        } else {
            Length::Shrink
        };

        let mut widget = button(content)
            .height(Length::Fixed(height))
            .width(width)
            .padding([0.0, if props.circle { 0.0 } else { spacing::MD }])
            .style(button_styles::typed(
                props.kind,
                props.plain,
                props.corner_radius(),
            ));

        if props.is_interactive() {
            widget = widget.on_press(on_press);
        }

        widget.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props_are_a_plain_button() {
        let props = ButtonProps::default();
        assert_eq!(props.native_type, NativeType::Button);
        assert!(props.kind.is_none());
        assert!(props.is_interactive());
        assert_eq!(props.height(), sizing::BUTTON_HEIGHT);
    }

    #[test]
    fn loading_and_disabled_buttons_are_not_interactive() {
        assert!(!ButtonProps::default().loading(true).is_interactive());
        assert!(!ButtonProps::default().disabled(true).is_interactive());
    }

    #[test]
    fn shape_determines_corner_radius() {
        assert_eq!(ButtonProps::default().corner_radius(), radius::SM);
        assert_eq!(ButtonProps::default().round(true).corner_radius(), radius::ROUND);
        assert_eq!(
            ButtonProps::default().round(true).circle(true).corner_radius(),
            radius::FULL
        );
    }

    #[test]
    fn size_determines_height() {
        assert_eq!(
            ButtonProps::default().size(ButtonSize::Large).height(),
            sizing::BUTTON_HEIGHT_LARGE
        );
        assert_eq!(
            ButtonProps::default().size(ButtonSize::Small).height(),
            sizing::BUTTON_HEIGHT_SMALL
        );
    }

    #[test]
    fn view_builds_for_every_shape() {
        let buttons = [
            Button::new(ButtonProps::default()),
            Button::new(ButtonProps::default().kind(ButtonType::Success).plain(true)),
            Button::new(ButtonProps::default().circle(true).icon("+")),
            Button::new(ButtonProps::default().loading(true)),
        ];
        for button in &buttons {
            let _: Element<'_, ()> = button.view("label", ());
        }
    }
}
