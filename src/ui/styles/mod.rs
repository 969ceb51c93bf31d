// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every component.

pub mod button;
pub mod container;
pub mod input;
