// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Card surface of a single message, tinted with its type color.
///
/// Every color is scaled by `alpha` so the card fades out as a whole.
pub fn message(accent: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        let tint = opacity::TINT;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r + (accent.r - base.r) * tint,
                base.g + (accent.g - base.g) * tint,
                base.b + (accent.b - base.b) * tint,
                alpha,
            ))),
            border: Border {
                color: Color { a: alpha, ..accent },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: shadow::SM.color.a * alpha * opacity::OVERLAY_SUBTLE,
                    ..shadow::SM.color
                },
                ..shadow::SM
            },
            text_color: Some(Color { a: alpha, ..accent }),
            ..Default::default()
        }
    }
}

/// Floating dropdown panel below a select.
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Bottom separator of a collapse item.
pub fn collapse_item(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn message_style_uses_accent_border() {
        let style = message(palette::SUCCESS_500, 1.0)(&Theme::Dark);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn message_style_fades_with_alpha() {
        let style = message(palette::DANGER_500, 0.25)(&Theme::Light);
        assert_eq!(style.border.color.a, 0.25);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.25));
    }
}
