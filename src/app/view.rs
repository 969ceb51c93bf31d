// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! Every component gets a titled section; the message layer is stacked on
//! top of the scrollable page.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::MessageType;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{pick_list, scrollable, Column, Container, Row, Stack, Text};
use iced::{Background, Element, Length};

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let scheme = app.theme_mode.color_scheme();

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(view_header(app, &scheme))
        .push(section(&scheme, "Message", view_messages(app)))
        .push(section(&scheme, "Button", view_buttons(app)))
        .push(section(&scheme, "Input", view_inputs(app)))
        .push(section(&scheme, "Switch", app.switch.view().map(Message::Switch)))
        .push(section(&scheme, "Select", view_selects(app)))
        .push(section(
            &scheme,
            "Collapse",
            app.collapse.view().map(Message::Collapse),
        ))
        .push(section(&scheme, "Form", view_form(app)));

    let background = scheme.surface_primary;
    let content = Container::new(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(app.notifications.view().map(Message::Toast))
        .into()
}

fn view_header<'a>(app: &'a App, scheme: &ColorScheme) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new("Iced Element")
                .size(typography::TITLE_SM * 1.5)
                .color(scheme.text_primary)
                .width(Length::Fill),
        )
        .push(pick_list(
            THEME_MODES,
            Some(app.theme_mode),
            Message::SetTheme,
        ))
        .into()
}

fn section<'a>(
    scheme: &ColorScheme,
    title: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let surface = scheme.surface_secondary;
    Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(title)
                .size(typography::TITLE_SM)
                .color(scheme.brand_primary),
        )
        .push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(move |_theme: &iced::Theme| iced::widget::container::Style {
                    background: Some(Background::Color(surface)),
                    ..Default::default()
                }),
        )
        .into()
}

fn view_messages(app: &App) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for (kind, button) in &app.type_buttons {
        let label = match kind {
            MessageType::Success => "Success",
            MessageType::Info => "Info",
            MessageType::Warning => "Warning",
            MessageType::Danger => "Danger",
        };
        row = row.push(button.view(label, Message::ShowMessage(*kind)));
    }

    let buttons = &app.action_buttons;
    row = row
        .push(buttons.persistent.view("Persistent", Message::ShowPersistent))
        .push(buttons.paragraphs.view("Paragraphs", Message::ShowParagraphs))
        .push(buttons.close_all.view("Close all", Message::CloseAll));

    Column::new()
        .spacing(spacing::XS)
        .push(row)
        .push(
            Text::new(format!("{} on screen", app.notifications.len()))
                .size(typography::CAPTION),
        )
        .into()
}

fn view_buttons(app: &App) -> Element<'_, Message> {
    let buttons = &app.action_buttons;
    Row::new()
        .spacing(spacing::SM)
        .push(buttons.disabled.view("Disabled", Message::ShowPersistent))
        .push(buttons.loading.view("Loading", Message::ShowPersistent))
        .into()
}

fn view_inputs(app: &App) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(crate::ui::design_tokens::sizing::SELECT_WIDTH * 1.5))
        .push(app.input.view().map(Message::Input))
        .push(app.password.view().map(Message::Password))
        .into()
}

fn view_selects(app: &App) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::LG)
        .push(app.select.view().map(Message::Select))
        .push(app.remote_select.view().map(Message::RemoteSelect))
        .into()
}

fn view_form(app: &App) -> Element<'_, Message> {
    let name_invalid = app.form.item("name").is_some_and(|item| item.is_error());
    let buttons = &app.action_buttons;

    Column::new()
        .spacing(spacing::SM)
        .push(app.form.view_item(
            "name",
            app.form_name.view_with(name_invalid).map(Message::FormName),
        ))
        .push(
            app.form
                .view_item("agree", app.form_agree.view().map(Message::FormAgree)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(buttons.submit.view("Submit", Message::SubmitForm))
                .push(buttons.reset.view("Reset", Message::ResetForm)),
        )
        .into()
}
