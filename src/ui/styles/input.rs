// SPDX-License-Identifier: MPL-2.0
//! Text input styles shared by Input, Select and form fields.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Standard input; `invalid` switches the border to the danger color.
pub fn field(invalid: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let extended = theme.extended_palette();

        let (border_color, width) = match status {
            _ if invalid => (palette::DANGER_500, border::WIDTH_SM),
            Status::Focused { .. } => (palette::PRIMARY_500, border::WIDTH_MD),
            Status::Hovered => (palette::GRAY_400, border::WIDTH_SM),
            Status::Active | Status::Disabled => {
                (extended.background.strong.color, border::WIDTH_SM)
            }
        };

        let background = if matches!(status, Status::Disabled) {
            extended.background.weak.color
        } else {
            extended.background.base.color
        };

        Style {
            background: background.into(),
            border: Border {
                color: border_color,
                width,
                radius: radius::SM.into(),
            },
            icon: extended.background.weak.text,
            placeholder: extended.background.strong.text,
            value: extended.background.base.text,
            selection: extended.primary.weak.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_has_danger_border() {
        let style = field(true)(&Theme::Light, Status::Active);
        assert_eq!(style.border.color, palette::DANGER_500);
    }

    #[test]
    fn disabled_field_uses_weak_background() {
        let theme = Theme::Light;
        let active = field(false)(&theme, Status::Active);
        let disabled = field(false)(&theme, Status::Disabled);
        assert_ne!(active.background, disabled.background);
        assert_eq!(disabled.border.width, border::WIDTH_SM);
    }
}
