// SPDX-License-Identifier: MPL-2.0
//! Form model, per-field rules and validation state.
//!
//! The form owns its model and items; controls report edits through
//! [`Form::set_value`] and ask for validation with the matching [`Trigger`].
//!
//! ```
//! use iced_element::ui::components::form::{Form, FormItem, FormItemRule, FormValue};
//!
//! let mut form = Form::new();
//! form.set_value("name", FormValue::from(""));
//! form.set_rules("name", vec![FormItemRule::required()]);
//! form.add_field(FormItem::new("Name", "name"));
//!
//! let failure = form.validate().unwrap_err();
//! assert_eq!(failure.fields["name"][0].message, "name is required");
//! ```

pub mod item;
pub mod rules;

pub use item::{FormItem, ValidateState, ValidateStatus};
pub use rules::{FormItemRule, Trigger, ValidateError, Validator};

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::{alignment, Element, Length};
use std::collections::BTreeMap;
use std::fmt;

/// Value stored in the form model.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    /// Null, empty text and empty lists count as missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Null => true,
            FormValue::Text(text) => text.is_empty(),
            FormValue::List(items) => items.is_empty(),
            FormValue::Bool(_) | FormValue::Number(_) => false,
        }
    }

    /// Quantity the length rules compare against.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn measure(&self) -> Option<f64> {
        match self {
            FormValue::Number(value) => Some(*value),
            FormValue::Text(text) => Some(text.chars().count() as f64),
            FormValue::List(items) => Some(items.len() as f64),
            FormValue::Null | FormValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Null => Ok(()),
            FormValue::Bool(value) => write!(f, "{value}"),
            FormValue::Number(value) => write!(f, "{value}"),
            FormValue::Text(value) => write!(f, "{value}"),
            FormValue::List(values) => write!(f, "{}", values.join(",")),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(value: Vec<String>) -> Self {
        FormValue::List(value)
    }
}

/// Outcome of a failed [`Form::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidateFailure {
    pub errors: Vec<ValidateError>,
    pub fields: BTreeMap<String, Vec<ValidateError>>,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    model: BTreeMap<String, FormValue>,
    rules: BTreeMap<String, Vec<FormItemRule>>,
    items: Vec<FormItem>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rules(&mut self, prop: impl Into<String>, rules: Vec<FormItemRule>) {
        self.rules.insert(prop.into(), rules);
    }

    pub fn set_value(&mut self, prop: impl Into<String>, value: impl Into<FormValue>) {
        self.model.insert(prop.into(), value.into());
    }

    #[must_use]
    pub fn value(&self, prop: &str) -> Option<&FormValue> {
        self.model.get(prop)
    }

    #[must_use]
    pub fn item(&self, prop: &str) -> Option<&FormItem> {
        self.items.iter().find(|item| item.prop.as_deref() == Some(prop))
    }

    #[must_use]
    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    /// Registers an item and snapshots its current model value for resets.
    pub fn add_field(&mut self, mut item: FormItem) {
        if let Some(prop) = &item.prop {
            item.initial_value = self.model.get(prop).cloned().unwrap_or_default();
        }
        self.items.push(item);
    }

    /// Returns `false` when no item is bound to `prop`.
    pub fn remove_field(&mut self, prop: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.prop.as_deref() != Some(prop));
        self.items.len() != before
    }

    /// Runs the rules of `prop` that match `trigger` and records the outcome
    /// on its item. No matching rule leaves the status untouched.
    pub fn validate_field(
        &mut self,
        prop: &str,
        trigger: Option<Trigger>,
    ) -> Result<(), Vec<ValidateError>> {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.prop.as_deref() == Some(prop))
        else {
            return Ok(());
        };

        let triggered: Vec<&FormItemRule> = self
            .rules
            .get(prop)
            .map(|rules| rules.iter().filter(|rule| rule.applies_to(trigger)).collect())
            .unwrap_or_default();
        if triggered.is_empty() {
            return Ok(());
        }

        let status = &mut self.items[index].validate_status;
        status.loading = true;

        let value = self.model.get(prop).cloned().unwrap_or_default();
        let errors: Vec<ValidateError> = triggered
            .iter()
            .filter_map(|rule| rule.validate(prop, &value).err())
            .collect();

        status.loading = false;
        if let Some(first) = errors.first() {
            status.state = ValidateState::Error;
            status.error_msg = first.message.clone();
            tracing::debug!(field = prop, errors = errors.len(), "field validation failed");
            Err(errors)
        } else {
            status.state = ValidateState::Success;
            status.error_msg.clear();
            Ok(())
        }
    }

    /// Validates every bound item.
    pub fn validate(&mut self) -> Result<(), FormValidateFailure> {
        let props: Vec<String> = self.items.iter().filter_map(|item| item.prop.clone()).collect();

        let mut failure = FormValidateFailure::default();
        for prop in props {
            if let Err(errors) = self.validate_field(&prop, None) {
                failure.errors.extend(errors.iter().cloned());
                failure.fields.insert(prop, errors);
            }
        }

        if failure.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = failure.fields.len(), "form validation failed");
            Err(failure)
        }
    }

    /// Restores initial values and clears statuses. An empty `props` means every item.
    pub fn reset_fields(&mut self, props: &[&str]) {
        for item in self.items.iter_mut().filter(|item| selected(item, props)) {
            item.validate_status.reset();
            if let Some(prop) = &item.prop {
                self.model.insert(prop.clone(), item.initial_value.clone());
            }
        }
    }

    /// Returns statuses to `Init`. An empty `props` means every item.
    pub fn clear_validate(&mut self, props: &[&str]) {
        for item in self.items.iter_mut().filter(|item| selected(item, props)) {
            item.validate_status.reset();
        }
    }

    /// Lays out `control` under the label of the item bound to `prop`, with
    /// the error message below it.
    pub fn view_item<'a, Message: 'a>(
        &'a self,
        prop: &'a str,
        control: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let item = self.item(prop);
        let label = item.map_or(prop, |item| item.label.as_str());
        let required = self
            .rules
            .get(prop)
            .is_some_and(|rules| rules.iter().any(|rule| rule.required));

        let mut label_row = Row::new().spacing(spacing::XXS);
        if required {
            label_row = label_row.push(
                Text::new("*")
                    .size(typography::BODY)
                    .color(palette::DANGER_500),
            );
        }
        label_row = label_row.push(Text::new(label).size(typography::BODY));

        let mut field = Column::new().spacing(spacing::XXS).push(control);
        if let Some(item) = item.filter(|item| item.is_error()) {
            field = field.push(
                Text::new(item.validate_status.error_msg.as_str())
                    .size(typography::CAPTION)
                    .color(palette::DANGER_500),
            );
        }

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(
                iced::widget::container(label_row)
                    .width(Length::Fixed(sizing::FORM_LABEL_WIDTH))
                    .padding([spacing::XXS, 0.0]),
            )
            .push(field)
            .into()
    }
}

fn selected(item: &FormItem, props: &[&str]) -> bool {
    props.is_empty()
        || item
            .prop
            .as_deref()
            .is_some_and(|prop| props.contains(&prop))
}
