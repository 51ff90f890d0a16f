// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 3-slot sliding window handed to the rendering collaborator.

use smallvec::SmallVec;

/// Maximum number of slots in a window: previous, current, next.
pub const WINDOW_SLOTS: usize = 3;

/// Absolute model indices for each slot of a window, in slot order.
pub(crate) type WindowPages = SmallVec<[usize; WINDOW_SLOTS]>;

/// Which slot of the window the rendering collaborator should bring into view.
///
/// Finite carousels pin the current item to the first or last slot when it
/// sits on an edge, so the intent follows the page. Infinite carousels always
/// keep the current item in the middle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollIntent {
    /// Show the first slot.
    ToFirst,
    /// Show the last slot.
    ToLast,
    /// Show the middle slot.
    ToCenter,
}

impl ScrollIntent {
    /// Slot index this intent refers to in a window of `window_len` slots.
    ///
    /// Returns `0` for an empty window.
    #[must_use]
    pub const fn slot(self, window_len: usize) -> usize {
        match self {
            Self::ToFirst => 0,
            Self::ToLast => window_len.saturating_sub(1),
            Self::ToCenter => window_len / 2,
        }
    }
}

/// A derived, read-only window of up to three items around the current page.
///
/// Slots are ordered `[previous, current, next]`; a finite carousel with one
/// or two items yields fewer slots, and a wraparound carousel may repeat
/// items. A `ViewModel` borrows the carousel's model and is recomputed on
/// every request, so it always reflects the latest page.
#[derive(Debug)]
pub struct ViewModel<'a, T> {
    items: &'a [T],
    pages: WindowPages,
}

impl<T> Clone for ViewModel<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            pages: self.pages.clone(),
        }
    }
}

impl<'a, T> ViewModel<'a, T> {
    pub(crate) fn new(items: &'a [T], pages: WindowPages) -> Self {
        debug_assert!(
            pages.iter().all(|&page| page < items.len()),
            "window pages {pages:?} exceed a model of {} items",
            items.len()
        );
        Self { items, pages }
    }

    /// Number of slots in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the window has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Absolute model index shown in each slot.
    #[must_use]
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    /// Absolute model index shown in `slot`.
    #[must_use]
    pub fn page_at(&self, slot: usize) -> Option<usize> {
        self.pages.get(slot).copied()
    }

    /// Item shown in `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&'a T> {
        self.page_at(slot).and_then(|page| self.items.get(page))
    }

    /// Iterates over the items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let items = self.items;
        self.pages.iter().filter_map(move |&page| items.get(page))
    }

    /// Collects the slot items.
    #[must_use]
    pub fn to_items(&self) -> SmallVec<[&'a T; WINDOW_SLOTS]> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{ScrollIntent, ViewModel};

    #[test]
    fn intent_slots_for_full_and_short_windows() {
        assert_eq!(ScrollIntent::ToFirst.slot(3), 0);
        assert_eq!(ScrollIntent::ToCenter.slot(3), 1);
        assert_eq!(ScrollIntent::ToLast.slot(3), 2);

        assert_eq!(ScrollIntent::ToLast.slot(2), 1);
        assert_eq!(ScrollIntent::ToLast.slot(1), 0);
        assert_eq!(ScrollIntent::ToLast.slot(0), 0);
    }

    #[test]
    fn slots_resolve_against_the_model() {
        let items = ["a", "b", "c", "d"];
        let view_model = ViewModel::new(&items, smallvec![3, 0, 1]);

        assert_eq!(view_model.len(), 3);
        assert_eq!(view_model.pages(), &[3, 0, 1]);
        assert_eq!(view_model.get(0), Some(&"d"));
        assert_eq!(view_model.page_at(2), Some(1));
        assert_eq!(view_model.get(3), None);
        assert_eq!(view_model.to_items().as_slice(), &[&"d", &"a", &"b"]);
    }
}
