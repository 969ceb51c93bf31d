// SPDX-License-Identifier: MPL-2.0
//! Stacking-order source for floating layers.
//!
//! Every floating element (messages, dropdowns) asks for a fresh z-index when
//! it opens so that whatever opened last renders on top.

use crate::config::{DEFAULT_Z_INDEX_BASE, MAX_Z_INDEX_BASE};

/// Produces stacking-order integers.
///
/// Implementations must return a value strictly greater than every value
/// they returned before, or `None` once no such value is left.
pub trait StackOrder {
    fn next_z_index(&mut self) -> Option<u32>;
}

/// Counter-based stacking order starting just above a configurable base.
///
/// The base is clamped to [`MAX_Z_INDEX_BASE`].
///
/// # Example
///
/// ```
/// use iced_element::ui::state::{StackOrder, ZIndex};
///
/// let mut z = ZIndex::new(2000);
/// assert_eq!(z.current(), 2000);
/// assert_eq!(z.next_z_index(), Some(2001));
/// assert_eq!(z.next_z_index(), Some(2002));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndex {
    initial: u32,
    counter: u32,
}

impl ZIndex {
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self {
            initial: initial.min(MAX_Z_INDEX_BASE),
            counter: 0,
        }
    }

    /// The most recently handed out value, or the base if none was.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.initial + self.counter
    }
}

impl Default for ZIndex {
    fn default() -> Self {
        Self::new(DEFAULT_Z_INDEX_BASE)
    }
}

impl StackOrder for ZIndex {
    fn next_z_index(&mut self) -> Option<u32> {
        let next = self.current().checked_add(1)?;
        self.counter += 1;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_configured_base() {
        let z = ZIndex::default();
        assert_eq!(z.current(), DEFAULT_Z_INDEX_BASE);
    }

    #[test]
    fn next_is_strictly_increasing() {
        let mut z = ZIndex::new(10);
        let values: Vec<u32> = (0..5).filter_map(|_| z.next_z_index()).collect();
        assert_eq!(values, vec![11, 12, 13, 14, 15]);
        assert_eq!(z.current(), 15);
    }

    #[test]
    fn independent_sources_do_not_share_state() {
        let mut a = ZIndex::new(0);
        let mut b = ZIndex::new(0);
        a.next_z_index();
        a.next_z_index();
        assert_eq!(b.next_z_index(), Some(1));
    }

    #[test]
    fn oversized_base_is_clamped() {
        let mut z = ZIndex::new(u32::MAX - 1);
        assert_eq!(z.current(), MAX_Z_INDEX_BASE);
        let values: Vec<u32> = (0..3).filter_map(|_| z.next_z_index()).collect();
        assert_eq!(
            values,
            vec![MAX_Z_INDEX_BASE + 1, MAX_Z_INDEX_BASE + 2, MAX_Z_INDEX_BASE + 3]
        );
    }

    #[test]
    fn exhausted_counter_returns_none_instead_of_repeating() {
        let mut z = ZIndex {
            initial: u32::MAX - 2,
            counter: 0,
        };
        assert_eq!(z.next_z_index(), Some(u32::MAX - 1));
        assert_eq!(z.next_z_index(), Some(u32::MAX));
        assert_eq!(z.next_z_index(), None);
        assert_eq!(z.next_z_index(), None);
        assert_eq!(z.current(), u32::MAX);
    }
}
