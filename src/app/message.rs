// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::ui::components::{collapse, input, select, switch};
use crate::ui::notifications::{MessageType, ToastMessage};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded unchanged so each component keeps its own update.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a message of the given type with the configured defaults.
    ShowMessage(MessageType),
    /// Show a message that stays until its close button is pressed.
    ShowPersistent,
    /// Paragraph content rendered through `Content::Paragraphs`.
    ShowParagraphs,
    CloseAll,
    Toast(ToastMessage),
    Input(input::Message),
    Password(input::Message),
    Switch(switch::Message),
    Select(select::Message),
    RemoteSelect(select::Message),
    RemoteResults(String, Vec<select::SelectOption>),
    Collapse(collapse::Message),
    FormName(input::Message),
    FormAgree(switch::Message),
    SubmitForm,
    ResetForm,
    SetTheme(ThemeMode),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Settings file to use instead of the platform config directory.
    pub config_path: Option<PathBuf>,
    /// Theme override that takes precedence over the settings file.
    pub theme: Option<ThemeMode>,
}
