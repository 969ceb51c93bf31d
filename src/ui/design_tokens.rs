// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the library's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, one semantic color per component type
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_element::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a hover tint
let hover_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::PRIMARY_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.565, 0.576, 0.6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Plain buttons and message backgrounds tint their type color with this.
    pub const TINT: f32 = 0.12;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 18.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;
    pub const BUTTON_HEIGHT_SMALL: f32 = 24.0;
    pub const INPUT_HEIGHT: f32 = 32.0;

    // Switch track widths
    pub const SWITCH_SMALL: f32 = 16.0;
    pub const SWITCH_DEFAULT: f32 = 20.0;
    pub const SWITCH_LARGE: f32 = 24.0;

    // Component widths
    pub const MESSAGE_WIDTH: f32 = 380.0;
    pub const SELECT_WIDTH: f32 = 240.0;
    pub const FORM_LABEL_WIDTH: f32 = 120.0;

    /// Rendered height of a single-line message.
    pub const MESSAGE_MIN_HEIGHT: f32 = 44.0;
    /// Height added by every extra line of message content.
    pub const MESSAGE_LINE_HEIGHT: f32 = 20.0;
    /// Body-size characters that fit on one message line next to the icon
    /// and close button.
    pub const MESSAGE_CHARS_PER_LINE: usize = 40;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Collapse titles and large controls
    pub const TITLE_SM: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small controls
    pub const BODY_SM: f32 = 12.0;

    /// Form error messages
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focused inputs
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const ROUND: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < 1.0);

    // Sizing validation
    assert!(sizing::BUTTON_HEIGHT_LARGE > sizing::BUTTON_HEIGHT);
    assert!(sizing::BUTTON_HEIGHT > sizing::BUTTON_HEIGHT_SMALL);
    assert!(sizing::SWITCH_LARGE > sizing::SWITCH_DEFAULT);
    assert!(sizing::SWITCH_DEFAULT > sizing::SWITCH_SMALL);
    assert!(sizing::MESSAGE_MIN_HEIGHT > sizing::MESSAGE_LINE_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
