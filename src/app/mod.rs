// SPDX-License-Identifier: MPL-2.0
//! Gallery application showing every component and the message manager.
//!
//! The `App` struct owns one instance of each component and the notification
//! registry, and translates component events into notifications so the
//! results of interactions are visible on screen.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::components::button::{Button, ButtonProps, ButtonType, NativeType};
use crate::ui::components::collapse::{self, Collapse, CollapseItem};
use crate::ui::components::form::{Form, FormItem, FormItemRule, FormValue, Trigger};
use crate::ui::components::input::{self, Input, InputProps, InputType};
use crate::ui::components::select::{self, Effect, Select, SelectOption, SelectProps};
use crate::ui::components::switch::{self, Switch, SwitchProps, SwitchValue};
use crate::ui::notifications::{MessageHandle, MessageOptions, MessageType, Registry, ToastLayer};
use crate::ui::state::{MessageDuration, ZIndex};
use crate::ui::theming::ThemeMode;
use iced::{event, keyboard, window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Candidates served by the simulated remote search.
const REMOTE_CATALOG: &[&str] = &[
    "iced", "serde", "tokio", "tracing", "regex", "toml", "criterion", "proptest", "tempfile",
];

/// Root gallery state.
pub struct App {
    config: Config,
    config_path: Option<std::path::PathBuf>,
    theme_mode: ThemeMode,
    notifications: Registry<ToastLayer>,
    persistent: Option<MessageHandle>,
    type_buttons: Vec<(MessageType, Button)>,
    action_buttons: ActionButtons,
    input: Input,
    password: Input,
    switch: Switch,
    select: Select,
    remote_select: Select,
    collapse: Collapse,
    form: Form,
    form_name: Input,
    form_agree: Switch,
}

/// Buttons that are not tied to a message type.
struct ActionButtons {
    persistent: Button,
    paragraphs: Button,
    close_all: Button,
    submit: Button,
    reset: Button,
    disabled: Button,
    loading: Button,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) if path.exists() => config::load_from_path(path),
            Some(_) => Ok(Config::default()),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        let notifications = Registry::with_stack_order(
            ToastLayer::new(),
            ZIndex::new(config.z_index.base()),
        );

        let mut form = Form::new();
        form.set_value("name", "");
        form.set_value("agree", false);
        form.set_rules(
            "name",
            vec![
                FormItemRule::required()
                    .message("Please enter a name")
                    .trigger(Trigger::Blur),
                FormItemRule::length(Some(2.0), Some(16.0)).trigger(Trigger::Change),
            ],
        );
        form.set_rules("agree", vec![FormItemRule::custom(must_agree)]);
        form.add_field(FormItem::new("Name", "name"));
        form.add_field(FormItem::new("Terms", "agree"));

        let app = App {
            theme_mode,
            notifications,
            persistent: None,
            type_buttons: vec![
                (
                    MessageType::Success,
                    Button::new(ButtonProps::default().kind(ButtonType::Success)),
                ),
                (
                    MessageType::Info,
                    Button::new(ButtonProps::default().kind(ButtonType::Info)),
                ),
                (
                    MessageType::Warning,
                    Button::new(ButtonProps::default().kind(ButtonType::Warning)),
                ),
                (
                    MessageType::Danger,
                    Button::new(ButtonProps::default().kind(ButtonType::Danger)),
                ),
            ],
            action_buttons: ActionButtons {
                persistent: Button::new(ButtonProps::default().plain(true).kind(ButtonType::Primary)),
                paragraphs: Button::new(ButtonProps::default().round(true)),
                close_all: Button::new(ButtonProps::default().icon("\u{2715}")),
                submit: Button::new(
                    ButtonProps::default()
                        .kind(ButtonType::Primary)
                        .native_type(NativeType::Submit),
                ),
                reset: Button::new(
                    ButtonProps::default()
                        .native_type(NativeType::Reset),
                ),
                disabled: Button::new(ButtonProps::default().kind(ButtonType::Primary).disabled(true)),
                loading: Button::new(ButtonProps::default().kind(ButtonType::Info).loading(true)),
            },
            input: Input::new(
                InputProps::default()
                    .clearable(true)
                    .placeholder("Type something"),
            ),
            password: Input::new(
                InputProps::default()
                    .input_type(InputType::Password)
                    .show_password(true)
                    .placeholder("Password"),
            ),
            switch: Switch::new(SwitchProps::default().values("on", "off").texts("On", "Off")),
            select: Select::new(
                SelectProps::default()
                    .options(vec![
                        SelectOption::new("Apple", "apple"),
                        SelectOption::new("Banana", "banana").disabled(true),
                        SelectOption::new("Cherry", "cherry"),
                        SelectOption::new("Durian", "durian"),
                    ])
                    .placeholder("Pick a fruit")
                    .filterable(true)
                    .clearable(true),
            ),
            remote_select: Select::new(
                SelectProps::default()
                    .placeholder("Search crates")
                    .remote(true),
            ),
            collapse: Collapse::new(
                vec![
                    CollapseItem::new("consistency", "Consistency", "Consistent with real life."),
                    CollapseItem::new(
                        "feedback",
                        "Feedback",
                        vec![
                            "Operation feedback through interaction effects.".to_string(),
                            "Visual feedback reflecting the current state.".to_string(),
                        ],
                    ),
                    CollapseItem::new("efficiency", "Efficiency", "Simplify the process.")
                        .disabled(true),
                ],
                vec!["consistency".into()],
                true,
            ),
            form,
            form_name: Input::new(InputProps::default().placeholder("Your name")),
            form_agree: Switch::new(SwitchProps::default()),
            config,
            config_path: flags.config_path,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Element")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        let toasts = self.notifications.subscription().map(Message::Toast);
        if self.select.is_open() {
            Subscription::batch([toasts, event::listen_with(select_keys)])
        } else {
            toasts
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowMessage(kind) => {
                let text = format!("This is a {} message", kind_name(kind));
                self.notify(MessageOptions::from_config(text, &self.config.message).kind(kind));
            }
            Message::ShowPersistent => {
                if let Some(handle) = self.persistent.take() {
                    handle.dismiss(&mut self.notifications);
                }
                let options = MessageOptions::from_config(
                    "This message stays until you close it",
                    &self.config.message,
                )
                .duration(MessageDuration::PERSISTENT)
                .show_close(true);
                self.persistent = self.notify(options);
            }
            Message::ShowParagraphs => {
                let content = vec![
                    "Messages accept several paragraphs.".to_string(),
                    "Each one is rendered on its own line.".to_string(),
                ];
                self.notify(
                    MessageOptions::from_config(content, &self.config.message)
                        .kind(MessageType::Info)
                        .transition_name("fade"),
                );
            }
            Message::CloseAll => {
                self.notifications.clear_all();
                self.persistent = None;
            }
            Message::Toast(message) => self.notifications.handle_message(&message),
            Message::Input(message) => {
                let events = self.input.update(message);
                self.report_input("Input", &events);
            }
            Message::Password(message) => {
                let events = self.password.update(message);
                self.report_input("Password", &events);
            }
            Message::Switch(message) => {
                for event in self.switch.update(message) {
                    if let switch::Event::Change(value) = event {
                        self.notify_info(format!("Switch changed to {value}"));
                    }
                }
            }
            Message::Select(message) => {
                let (events, _) = self.select.update(message);
                self.report_select("Select", &events);
            }
            Message::RemoteSelect(message) => {
                let (events, effect) = self.remote_select.update(message);
                self.report_select("Remote select", &events);
                if let Effect::RemoteQuery(query) = effect {
                    return Task::perform(remote_search(query), |(query, options)| {
                        Message::RemoteResults(query, options)
                    });
                }
            }
            Message::RemoteResults(query, options) => {
                self.remote_select
                    .update(select::Message::RemoteResults(query, options));
            }
            Message::Collapse(message) => {
                for event in self.collapse.update(message) {
                    if let collapse::Event::Change(names) = event {
                        let names: Vec<String> = names.iter().map(ToString::to_string).collect();
                        tracing::debug!(active = ?names, "collapse changed");
                    }
                }
            }
            Message::FormName(message) => {
                for event in self.form_name.update(message) {
                    match event {
                        input::Event::UpdateModelValue(value) => {
                            self.form.set_value("name", value);
                        }
                        input::Event::Change(_) => {
                            let _ = self.form.validate_field("name", Some(Trigger::Change));
                        }
                        input::Event::Input(_) | input::Event::Clear => {}
                    }
                }
            }
            Message::FormAgree(message) => {
                for event in self.form_agree.update(message) {
                    if let switch::Event::UpdateModelValue(SwitchValue::Bool(value)) = event {
                        self.form.set_value("agree", value);
                        let _ = self.form.validate_field("agree", Some(Trigger::Change));
                    }
                }
            }
            Message::SubmitForm => {
                let options = match self.form.validate() {
                    Ok(()) => MessageOptions::from_config("Form submitted", &self.config.message)
                        .kind(MessageType::Success),
                    Err(failure) => {
                        let fields: Vec<&str> =
                            failure.fields.keys().map(String::as_str).collect();
                        MessageOptions::from_config(
                            format!("Please fix: {}", fields.join(", ")),
                            &self.config.message,
                        )
                        .kind(MessageType::Danger)
                    }
                };
                self.notify(options);
            }
            Message::ResetForm => {
                self.form.reset_fields(&[]);
                let name = match self.form.value("name") {
                    Some(FormValue::Text(text)) => text.clone(),
                    _ => String::new(),
                };
                self.form_name = Input::new(self.form_name.props().clone()).with_value(name);
                let agreed = matches!(self.form.value("agree"), Some(FormValue::Bool(true)));
                self.form_agree = Switch::new(SwitchProps::default()).with_model(agreed);
            }
            Message::SetTheme(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
                self.persist_config();
            }
        }

        Task::none()
    }

    fn notify(&mut self, options: MessageOptions) -> Option<MessageHandle> {
        match self.notifications.create(options) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%err, "failed to show message");
                None
            }
        }
    }

    fn notify_info(&mut self, text: String) {
        self.notify(MessageOptions::from_config(text, &self.config.message).kind(MessageType::Info));
    }

    fn report_input(&mut self, source: &str, events: &[input::Event]) {
        for event in events {
            match event {
                input::Event::Change(value) => {
                    self.notify_info(format!("{source} changed to \"{value}\""));
                }
                input::Event::Clear => self.notify_info(format!("{source} cleared")),
                input::Event::UpdateModelValue(_) | input::Event::Input(_) => {}
            }
        }
    }

    fn report_select(&mut self, source: &str, events: &[select::Event]) {
        for event in events {
            match event {
                select::Event::Change(value) if !value.is_empty() => {
                    self.notify_info(format!("{source} picked {value}"));
                }
                select::Event::Clear => self.notify_info(format!("{source} cleared")),
                select::Event::VisibleChange(open) => {
                    tracing::trace!(source, open, "select visibility changed");
                }
                _ => {}
            }
        }
    }

    fn persist_config(&self) {
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };
        if let Err(err) = result {
            tracing::warn!(%err, "failed to save settings");
        }
    }
}

fn kind_name(kind: MessageType) -> &'static str {
    match kind {
        MessageType::Success => "success",
        MessageType::Info => "info",
        MessageType::Warning => "warning",
        MessageType::Danger => "danger",
    }
}

fn must_agree(value: &FormValue) -> Result<(), String> {
    match value {
        FormValue::Bool(true) => Ok(()),
        _ => Err("You must accept the terms".to_string()),
    }
}

async fn remote_search(query: String) -> (String, Vec<SelectOption>) {
    let options = search_catalog(&query);
    (query, options)
}

fn search_catalog(query: &str) -> Vec<SelectOption> {
    REMOTE_CATALOG
        .iter()
        .filter(|name| name.contains(query))
        .map(|name| SelectOption::new(*name, *name))
        .collect()
}

/// Arrow keys move the select highlight while its dropdown is open.
fn select_keys(event: iced::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };
    let message = match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowDown) => select::Message::HighlightNext,
        keyboard::Key::Named(keyboard::key::Named::ArrowUp) => select::Message::HighlightPrevious,
        keyboard::Key::Named(keyboard::key::Named::Escape) => select::Message::CloseDropdown,
        _ => return None,
    };
    Some(Message::Select(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let dir = tempfile::tempdir().expect("temp dir");
        let (app, _) = App::new(Flags {
            config_path: Some(dir.path().join("settings.toml")),
            theme: Some(ThemeMode::Light),
        });
        app
    }

    #[test]
    fn flags_override_theme() {
        let app = app();
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn type_buttons_create_messages() {
        let mut app = app();
        let _ = app.update(Message::ShowMessage(MessageType::Success));
        let _ = app.update(Message::ShowMessage(MessageType::Danger));
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn close_all_hides_every_message() {
        let mut app = app();
        let _ = app.update(Message::ShowPersistent);
        let _ = app.update(Message::ShowMessage(MessageType::Info));
        let _ = app.update(Message::CloseAll);
        assert!(app
            .notifications
            .instances()
            .all(|instance| app.notifications.surface().is_hiding(instance.id())));
        assert!(app.persistent.is_none());
    }

    #[test]
    fn submitting_an_empty_form_reports_errors() {
        let mut app = app();
        let _ = app.update(Message::SubmitForm);
        assert!(app.form.item("name").is_some_and(FormItem::is_error));
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn reset_form_restores_inputs() {
        let mut app = app();
        let _ = app.update(Message::FormName(input::Message::Edited("Ada".into())));
        assert_eq!(app.form.value("name"), Some(&FormValue::from("Ada")));
        let _ = app.update(Message::ResetForm);
        assert_eq!(app.form_name.value(), "");
        assert_eq!(app.form.value("name"), Some(&FormValue::from("")));
    }

    #[test]
    fn select_keys_ignore_other_events() {
        let event = iced::Event::Keyboard(keyboard::Event::ModifiersChanged(
            keyboard::Modifiers::default(),
        ));
        assert!(select_keys(event, event::Status::Ignored, window::Id::unique()).is_none());
    }

    #[test]
    fn remote_search_filters_catalog() {
        let results = search_catalog("to");
        let values: Vec<_> = results.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(values, vec!["tokio", "toml"]);
    }
}
