// SPDX-License-Identifier: MPL-2.0
//! A labelled form field and its validation status.

use super::FormValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidateState {
    #[default]
    Init,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateStatus {
    pub state: ValidateState,
    pub error_msg: String,
    pub loading: bool,
}

impl ValidateStatus {
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormItem {
    pub label: String,
    /// Model key; items without one are never validated.
    pub prop: Option<String>,
    pub validate_status: ValidateStatus,
    /// Model value captured when the item joined its form.
    pub initial_value: FormValue,
}

impl FormItem {
    #[must_use]
    pub fn new(label: impl Into<String>, prop: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prop: Some(prop.into()),
            validate_status: ValidateStatus::default(),
            initial_value: FormValue::Null,
        }
    }

    /// An item that only lays out its control, such as a submit row.
    #[must_use]
    pub fn unbound(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prop: None,
            validate_status: ValidateStatus::default(),
            initial_value: FormValue::Null,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.validate_status.state == ValidateState::Error
    }
}
