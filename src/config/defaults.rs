// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Message**: Toast display duration, offset and transition
//! - **Stacking**: Base z-index for floating layers

// ==========================================================================
// Message Defaults
// ==========================================================================

/// Default display duration of a message before it hides itself (in milliseconds).
pub const DEFAULT_MESSAGE_DURATION_MS: u64 = 3000;

/// A duration of zero keeps the message until it is dismissed.
pub const MIN_MESSAGE_DURATION_MS: u64 = 0;

/// Maximum configurable message duration (in milliseconds).
pub const MAX_MESSAGE_DURATION_MS: u64 = 60_000;

/// Default gap between a message and the one stacked above it (in pixels).
pub const DEFAULT_MESSAGE_OFFSET: f32 = 20.0;

/// Default exit transition name.
pub const DEFAULT_TRANSITION_NAME: &str = "fade-up";

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// First z-index handed out is `DEFAULT_Z_INDEX_BASE + 1`.
pub const DEFAULT_Z_INDEX_BASE: u32 = 2000;

/// Largest accepted base; the rest of the `u32` range is left for the counter.
pub const MAX_Z_INDEX_BASE: u32 = u32::MAX / 2;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MESSAGE_DURATION_MS >= MIN_MESSAGE_DURATION_MS);
    assert!(DEFAULT_MESSAGE_DURATION_MS <= MAX_MESSAGE_DURATION_MS);
    assert!(DEFAULT_MESSAGE_OFFSET >= 0.0);
    assert!(DEFAULT_Z_INDEX_BASE <= MAX_Z_INDEX_BASE);
};
