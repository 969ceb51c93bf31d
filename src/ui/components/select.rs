// SPDX-License-Identifier: MPL-2.0
//! Dropdown select with local filtering, host-fulfilled remote search and
//! keyboard highlight navigation.
//!
//! Remote mode never performs I/O itself: typing yields
//! [`Effect::RemoteQuery`], the host runs the query and feeds the outcome
//! back through [`Message::RemoteResults`] tagged with the query it answers.
//! Answers to anything but the current query are dropped.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub disabled: bool,
}

impl SelectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Custom local filter: receives the typed text, returns the options to show.
pub type FilterFn = fn(&str) -> Vec<SelectOption>;

/// Custom label renderer for dropdown rows.
pub type RenderLabelFn = fn(&SelectOption) -> String;

#[derive(Debug, Clone, Default)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub disabled: bool,
    pub clearable: bool,
    pub filterable: bool,
    pub filter_method: Option<FilterFn>,
    pub remote: bool,
    pub render_label: Option<RenderLabelFn>,
}

impl SelectProps {
    #[must_use]
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
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
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    #[must_use]
    pub fn filter_method(mut self, filter: FilterFn) -> Self {
        self.filter_method = Some(filter);
        self
    }

    /// Remote search implies a filterable input.
    #[must_use]
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self.filterable |= remote;
        self
    }

    #[must_use]
    pub fn render_label(mut self, render: RenderLabelFn) -> Self {
        self.render_label = Some(render);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStates {
    pub input_value: String,
    pub selected_option: Option<SelectOption>,
    pub mouse_hover: bool,
    pub loading: bool,
    pub highlight_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDropdown,
    CloseDropdown,
    FilterChanged(String),
    Pick(usize),
    HighlightNext,
    HighlightPrevious,
    ConfirmHighlight,
    Clear,
    MouseEntered,
    MouseLeft,
    /// Results of a remote query, with the query they answer.
    RemoteResults(String, Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Change(String),
    UpdateModelValue(String),
    VisibleChange(bool),
    Clear,
}

/// Work the host must perform on behalf of the select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the remote search for this text and answer with `RemoteResults`.
    RemoteQuery(String),
}

#[derive(Debug, Clone, Default)]
pub struct Select {
    props: SelectProps,
    model: String,
    states: SelectStates,
    visible: bool,
    filtered: Vec<SelectOption>,
}

impl Select {
    #[must_use]
    pub fn new(props: SelectProps) -> Self {
        let filtered = props.options.clone();
        Self {
            props,
            filtered,
            ..Self::default()
        }
    }

    /// Sets the bound value; an unknown value leaves nothing selected.
    #[must_use]
    pub fn with_model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self.states.selected_option = self
            .props
            .options
            .iter()
            .find(|option| option.value == self.model)
            .cloned();
        self.states.input_value = self
            .states
            .selected_option
            .as_ref()
            .map(|option| option.label.clone())
            .unwrap_or_default();
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn states(&self) -> &SelectStates {
        &self.states
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Options currently listed in the dropdown.
    #[must_use]
    pub fn filtered_options(&self) -> &[SelectOption] {
        &self.filtered
    }

    #[must_use]
    pub fn show_clear(&self) -> bool {
        self.props.clearable
            && !self.props.disabled
            && self.states.mouse_hover
            && self.states.selected_option.is_some()
            && !self.states.input_value.trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> (Vec<Event>, Effect) {
        match message {
            Message::ToggleDropdown => {
                if self.props.disabled {
                    return (Vec::new(), Effect::None);
                }
                let events = if self.visible {
                    self.close()
                } else {
                    self.open()
                };
                (events, Effect::None)
            }
            Message::CloseDropdown => (self.close(), Effect::None),
            Message::FilterChanged(text) => self.filter(text),
            Message::Pick(index) => (self.pick(index), Effect::None),
            Message::HighlightNext => {
                self.move_highlight(true);
                (Vec::new(), Effect::None)
            }
            Message::HighlightPrevious => {
                self.move_highlight(false);
                (Vec::new(), Effect::None)
            }
            Message::ConfirmHighlight => {
                let events = match self.states.highlight_index {
                    Some(index) if self.visible => self.pick(index),
                    _ if self.props.disabled => Vec::new(),
                    _ if self.visible => self.close(),
                    _ => self.open(),
                };
                (events, Effect::None)
            }
            Message::Clear => (self.clear(), Effect::None),
            Message::MouseEntered => {
                self.states.mouse_hover = true;
                (Vec::new(), Effect::None)
            }
            Message::MouseLeft => {
                self.states.mouse_hover = false;
                (Vec::new(), Effect::None)
            }
            Message::RemoteResults(query, options) => {
                if self.props.remote
                    && self.visible
                    && query == self.states.input_value.trim()
                {
                    self.states.loading = false;
                    self.filtered = options;
                    self.states.highlight_index = None;
                } else {
                    tracing::trace!(query = %query, "stale remote select results dropped");
                }
                (Vec::new(), Effect::None)
            }
        }
    }

    fn open(&mut self) -> Vec<Event> {
        if self.visible {
            return Vec::new();
        }
        self.visible = true;
        if self.props.filterable {
            self.states.input_value.clear();
            if !self.props.remote {
                self.filtered = self.local_filter("");
            }
        } else {
            self.filtered = self.props.options.clone();
        }
        self.states.highlight_index = None;
        vec![Event::VisibleChange(true)]
    }

    fn close(&mut self) -> Vec<Event> {
        if !self.visible {
            return Vec::new();
        }
        self.visible = false;
        self.states.highlight_index = None;
        if self.props.filterable {
            self.states.input_value = self
                .states
                .selected_option
                .as_ref()
                .map(|option| option.label.clone())
                .unwrap_or_default();
        }
        vec![Event::VisibleChange(false)]
    }

    fn filter(&mut self, text: String) -> (Vec<Event>, Effect) {
        if !self.props.filterable || self.props.disabled {
            return (Vec::new(), Effect::None);
        }
        let events = self.open();
        self.states.input_value = text;
        self.states.highlight_index = None;

        if self.props.remote {
            let query = self.states.input_value.trim().to_string();
            if query.is_empty() {
                self.states.loading = false;
                self.filtered.clear();
                return (events, Effect::None);
            }
            self.states.loading = true;
            tracing::trace!(query = %query, "remote select query");
            return (events, Effect::RemoteQuery(query));
        }

        self.filtered = self.local_filter(&self.states.input_value);
        (events, Effect::None)
    }

    fn local_filter(&self, text: &str) -> Vec<SelectOption> {
        match self.props.filter_method {
            Some(filter) => filter(text),
            None => self
                .props
                .options
                .iter()
                .filter(|option| option.label.contains(text))
                .cloned()
                .collect(),
        }
    }

    fn pick(&mut self, index: usize) -> Vec<Event> {
        let Some(option) = self.filtered.get(index).cloned() else {
            return Vec::new();
        };
        if option.disabled || self.props.disabled {
            return Vec::new();
        }

        self.states.input_value = option.label.clone();
        self.model = option.value.clone();
        self.states.selected_option = Some(option);

        let mut events = vec![
            Event::Change(self.model.clone()),
            Event::UpdateModelValue(self.model.clone()),
        ];
        events.extend(self.close());
        events
    }

    fn clear(&mut self) -> Vec<Event> {
        if !self.show_clear() {
            return Vec::new();
        }
        self.states.selected_option = None;
        self.states.input_value.clear();
        self.states.highlight_index = None;
        self.model.clear();
        vec![
            Event::Clear,
            Event::Change(String::new()),
            Event::UpdateModelValue(String::new()),
        ]
    }

    /// Moves the highlight, skipping disabled options and wrapping at both ends.
    fn move_highlight(&mut self, forward: bool) {
        if !self.visible {
            return;
        }
        let len = self.filtered.len();
        if len == 0 {
            self.states.highlight_index = None;
            return;
        }

        let mut index = self.states.highlight_index;
        for _ in 0..len {
            let next = match (index, forward) {
                (None, true) => 0,
                (None, false) => len - 1,
                (Some(current), true) => (current + 1) % len,
                (Some(current), false) => (current + len - 1) % len,
            };
            if !self.filtered[next].disabled {
                self.states.highlight_index = Some(next);
                return;
            }
            index = Some(next);
        }
        self.states.highlight_index = None;
    }

    fn label_for(&self, option: &SelectOption) -> String {
        match self.props.render_label {
            Some(render) => render(option),
            None => option.label.clone(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let placeholder = match (&self.states.selected_option, self.visible) {
            (Some(option), true) if self.props.filterable => option.label.as_str(),
            _ => self.props.placeholder.as_str(),
        };

        let mut field = text_input(placeholder, &self.states.input_value)
            .size(typography::BODY)
            .padding([spacing::XXS, spacing::SM])
            .width(Length::Fill)
            .style(styles::input::field(false));
        if self.props.filterable && !self.props.disabled {
            field = field
                .on_input(Message::FilterChanged)
                .on_submit(Message::ConfirmHighlight);
        }

        let mut trigger = Row::new()
            .spacing(spacing::XXS)
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .push(field);
        if self.show_clear() {
            trigger = trigger.push(
                button(Text::new("\u{2715}").size(typography::BODY_SM))
                    .on_press(Message::Clear)
                    .padding(spacing::XXS)
                    .style(styles::button::close),
            );
        }
        let arrow = if self.visible { "\u{25B4}" } else { "\u{25BE}" };
        let mut arrow_button = button(Text::new(arrow).size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(styles::button::close);
        if !self.props.disabled {
            arrow_button = arrow_button.on_press(Message::ToggleDropdown);
        }
        trigger = trigger.push(arrow_button);

        let mut area = mouse_area(trigger)
            .on_enter(Message::MouseEntered)
            .on_exit(Message::MouseLeft);
        if !self.props.filterable && !self.props.disabled {
            area = area.on_press(Message::ToggleDropdown);
        }

        let mut column = Column::new()
            .width(Length::Fixed(sizing::SELECT_WIDTH))
            .spacing(spacing::XXS)
            .push(area);

        if self.visible {
            column = column.push(
                container(self.view_dropdown())
                    .width(Length::Fill)
                    .padding(spacing::XXS)
                    .style(styles::container::dropdown),
            );
        }

        column.into()
    }

    fn view_dropdown(&self) -> Element<'_, Message> {
        if self.states.loading {
            return Text::new("Loading").size(typography::BODY_SM).into();
        }
        if self.filtered.is_empty() {
            return Text::new("No data").size(typography::BODY_SM).into();
        }

        let selected = self.states.selected_option.as_ref().map(|o| o.value.as_str());
        let rows = self.filtered.iter().enumerate().map(|(index, option)| {
            let mut row = button(Text::new(self.label_for(option)).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::select_option(
                    selected == Some(option.value.as_str()),
                    self.states.highlight_index == Some(index),
                ));
            if !option.disabled {
                row = row.on_press(Message::Pick(index));
            }
            Element::from(row)
        });

        Column::with_children(rows).into()
    }
}
