// SPDX-License-Identifier: MPL-2.0
//! Reusable state primitives shared by components.

pub mod message_duration;
pub mod z_index;

pub use message_duration::MessageDuration;
pub use z_index::{StackOrder, ZIndex};
