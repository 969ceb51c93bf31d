// SPDX-License-Identifier: MPL-2.0
//! Stacked, auto-dismissing messages rendered above the component tree.
//!
//! # Components
//!
//! - [`notification`] - Ids, presentation options and lifecycle states
//! - [`registry`] - `Registry`, the ordered collection of live messages
//! - [`surface`] - The rendering contract the registry drives
//! - [`toast`] - `ToastLayer`, the Iced surface with timers and transitions
//!
//! # Usage
//!
//! ```ignore
//! use iced_element::ui::notifications::{MessageOptions, Registry, ToastLayer};
//!
//! let mut messages = Registry::new(ToastLayer::new());
//! messages.create(MessageOptions::success("Saved"))?;
//!
//! // In update: messages.handle_message(&msg);
//! // In view: stack messages.view().map(Message::Toast) over the page.
//! // In subscription: messages.subscription().map(Message::Toast)
//! ```
//!
//! # Lifecycle
//!
//! `Visible → Hiding → Destroyed`. Dismissing (close button, timer,
//! `clear_all`) only hides; the record is removed once the exit transition
//! hands back the message's completion. Both steps tolerate repeats.

pub mod notification;
pub mod registry;
pub mod surface;
pub mod toast;

pub use notification::{
    Completion, Lifecycle, MessageOptions, MessageProps, MessageType, NotificationId,
};
pub use registry::{Instance, MessageHandle, Registry};
pub use surface::Surface;
pub use toast::{Message as ToastMessage, Tick, ToastLayer, Transition};
