// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, text_input};
    use iced::Theme;
    use iced_element::ui::components::button::ButtonType;
    use iced_element::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
    use iced_element::ui::notifications::MessageType;
    use iced_element::ui::styles::{button, container, input};
    use iced_element::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        for kind in [
            None,
            Some(ButtonType::Primary),
            Some(ButtonType::Success),
            Some(ButtonType::Warning),
            Some(ButtonType::Danger),
            Some(ButtonType::Info),
        ] {
            for plain in [false, true] {
                let _ = button::typed(kind, plain, radius::SM)(&theme, button_widget::Status::Active);
            }
        }
        let _ = button::close(&theme, button_widget::Status::Hovered);
        let _ = button::collapse_header(true)(&theme, button_widget::Status::Active);
        let _ = button::select_option(true, false)(&theme, button_widget::Status::Pressed);
    }

    #[test]
    fn message_types_share_button_palette() {
        assert_eq!(MessageType::Success.color(), ButtonType::Success.color());
        assert_eq!(MessageType::Warning.color(), ButtonType::Warning.color());
        assert_eq!(MessageType::Danger.color(), ButtonType::Danger.color());
        assert_eq!(MessageType::Info.color(), ButtonType::Info.color());
    }

    #[test]
    fn container_and_input_styles_compile() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::message(palette::INFO_500, opacity::OPAQUE)(&theme);
            let _ = container::dropdown(&theme);
            let _ = container::collapse_item(&theme);
            let _ = input::field(false)(&theme, text_input::Status::Hovered);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::MESSAGE_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.color_scheme();
        let dark = ThemeMode::Dark.color_scheme();

        assert_ne!(light.surface_primary, dark.surface_primary);
        assert_eq!(light.danger, ColorScheme::dark().danger);
    }
}
