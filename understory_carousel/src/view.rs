// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator seams: the rendering view, the host observer, and inbound events.

use crate::{ScrollIntent, ViewModel};

/// The rendering collaborator that displays a carousel window.
///
/// The engine calls [`attach`](Self::attach) with the freshly computed window
/// and then [`request_scroll`](Self::request_scroll) with the matching
/// intent, always in that order, so an implementation can lay out the new
/// slots before it is asked to scroll to one of them.
pub trait CarouselView<T> {
    /// Replaces the displayed window.
    fn attach(&mut self, view_model: &ViewModel<'_, T>);

    /// Brings the slot named by `intent` into view.
    fn request_scroll(&mut self, intent: ScrollIntent);
}

impl<T, V: CarouselView<T> + ?Sized> CarouselView<T> for &mut V {
    fn attach(&mut self, view_model: &ViewModel<'_, T>) {
        (**self).attach(view_model);
    }

    fn request_scroll(&mut self, intent: ScrollIntent) {
        (**self).request_scroll(intent);
    }
}

/// Host observer for page changes and item taps.
///
/// Both hooks default to doing nothing, so observers only implement what
/// they care about. Calls are synchronous and happen after the view has been
/// updated.
pub trait CarouselObserver {
    /// The current page changed (or was re-set) to `page`.
    fn page_changed(&mut self, page: usize) {
        let _ = page;
    }

    /// The item at absolute model index `index` was tapped.
    fn item_tapped(&mut self, index: usize) {
        let _ = index;
    }
}

/// Notification delivered by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselEvent {
    /// The user asked for the next page (swipe, arrow button, ...).
    Next,
    /// The user asked for the previous page.
    Previous,
    /// The user tapped the item shown in window slot `slot`.
    Tapped {
        /// Window-relative slot index.
        slot: usize,
    },
    /// The view finished laying out and needs the scroll position re-established.
    LayoutFinished,
}
