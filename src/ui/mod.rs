// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The code follows the Elm-style "state down, messages up" pattern.
//!
//! - [`notifications`] - Message registry and its iced toast layer
//! - [`components`] - Button, Input, Switch, Select, Collapse and Form
//! - [`state`] - Small value types shared by components (z-index, durations)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
