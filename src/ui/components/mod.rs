// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! Every component follows the same Elm-style shape: a state struct, a
//! `Message` enum, an `update` returning the events the owner should react
//! to, and a `view` producing an [`iced::Element`].
//!
//! # Components
//!
//! - [`button`] - Typed, sized and shaped buttons with a loading state
//! - [`input`] - Text input with clear and password-visibility toggles
//! - [`switch`] - On/off switch over bool, string or numeric values
//! - [`select`] - Dropdown with filtering, remote search and keyboard navigation
//! - [`collapse`] - Collapsible panels with accordion mode
//! - [`form`] - Form model, declarative rules and per-field validation state
//! - [`content`] - Text or paragraph content rendered inside other components

pub mod button;
pub mod collapse;
pub mod content;
pub mod form;
pub mod input;
pub mod select;
pub mod switch;
