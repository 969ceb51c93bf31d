// SPDX-License-Identifier: MPL-2.0
//! `iced_element` is a small component library for the Iced GUI framework.
//!
//! Its core is a notification registry that stacks transient messages,
//! assigns them increasing z-indices and removes them in two phases. Around
//! it sit form-oriented components (button, input, switch, select, collapse,
//! form) and a gallery application that exercises all of them.

#![doc(html_root_url = "https://docs.rs/iced_element/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
