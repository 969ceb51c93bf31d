// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::components::button::ButtonType;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a component button.
///
/// Typed buttons are filled with their type color; plain buttons are tinted
/// and only fill on hover. Untyped buttons follow the theme background.
pub fn typed(
    kind: Option<ButtonType>,
    plain: bool,
    corner: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let Some(kind) = kind else {
            return neutral(theme, status, corner);
        };
        let accent = kind.color();

        let (background, text_color) = match (status, plain) {
            (button::Status::Disabled, _) => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                Color {
                    a: opacity::OVERLAY_STRONG,
                    ..WHITE
                },
            ),
            (button::Status::Active, true) => (
                Color {
                    a: opacity::TINT,
                    ..accent
                },
                accent,
            ),
            (button::Status::Hovered, false) => (lighten(accent), WHITE),
            (button::Status::Pressed, _) => (darken(accent), WHITE),
            _ => (accent, WHITE),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: accent,
                width: 1.0,
                radius: corner.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::SM
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

fn neutral(theme: &Theme, status: button::Status, corner: f32) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::WHITE, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (border_color, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_500)
        }
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        button::Status::Active => (palette::GRAY_400, text_color),
    };

    button::Style {
        background: Some(Background::Color(if matches!(status, button::Status::Hovered) {
            Color {
                a: opacity::TINT,
                ..palette::PRIMARY_500
            }
        } else {
            bg_color
        })),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: corner.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button used for close and clear affordances.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Full-width header row of a collapse item.
pub fn collapse_header(disabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let text_color = if disabled {
            palette::GRAY_400
        } else if matches!(status, button::Status::Hovered) {
            palette::PRIMARY_500
        } else {
            extended.background.base.text
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// One row of a select dropdown.
pub fn select_option(
    selected: bool,
    highlighted: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let hovered = highlighted || matches!(status, button::Status::Hovered);

        let text_color = match status {
            button::Status::Disabled => palette::GRAY_400,
            _ if selected => palette::PRIMARY_500,
            _ => extended.background.base.text,
        };

        button::Style {
            background: hovered.then(|| {
                Background::Color(Color {
                    a: opacity::TINT,
                    ..palette::PRIMARY_500
                })
            }),
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn lighten(color: Color) -> Color {
    Color::from_rgb(
        color.r + (1.0 - color.r) * 0.2,
        color.g + (1.0 - color.g) * 0.2,
        color.b + (1.0 - color.b) * 0.2,
    )
}

fn darken(color: Color) -> Color {
    Color::from_rgb(color.r * 0.85, color.g * 0.85, color.b * 0.85)
}
