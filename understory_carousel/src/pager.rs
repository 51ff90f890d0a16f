// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging contract shared by both carousel variants, and the core that backs it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::{
    CarouselError, CarouselEvent, CarouselObserver, CarouselView, Model, ScrollIntent, ViewModel,
    finite, infinite, window::WindowPages,
};

/// Edge behavior of a carousel. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryPolicy {
    /// Clamp at both ends; paging past an edge does nothing.
    #[default]
    Finite,
    /// Wrap around; paging past the last page returns to the first.
    Infinite,
}

impl BoundaryPolicy {
    /// Returns `true` for the wraparound policy.
    #[must_use]
    pub const fn wraps(self) -> bool {
        matches!(self, Self::Infinite)
    }

    pub(crate) fn window(self, len: usize, page: usize) -> WindowPages {
        match self {
            Self::Finite => finite::window(len, page),
            Self::Infinite => infinite::window(len, page),
        }
    }

    pub(crate) fn scroll_intent(self, len: usize, page: usize) -> ScrollIntent {
        match self {
            Self::Finite => finite::scroll_intent(len, page),
            Self::Infinite => infinite::scroll_intent(len, page),
        }
    }
}

/// Operations common to every carousel paging engine.
///
/// Implementors own a non-empty [`Model`], a current page that is always in
/// range, and a [`CarouselView`] collaborator. Each successful page change
/// pushes the new [`ViewModel`] to the view, then requests the matching
/// [`ScrollIntent`], then notifies the registered [`CarouselObserver`].
pub trait Pager {
    /// Item type displayed by the carousel.
    type Item;

    /// Edge behavior of this engine.
    fn policy(&self) -> BoundaryPolicy;

    /// The items being paged through.
    fn model(&self) -> &Model<Self::Item>;

    /// Index of the current page.
    fn current_page(&self) -> usize;

    /// Window around the current page, recomputed on every call.
    fn view_model(&self) -> ViewModel<'_, Self::Item>;

    /// Slot the view should show for the current page.
    fn scroll_intent(&self) -> ScrollIntent;

    /// Moves to the next page according to the boundary policy.
    fn next_page(&mut self);

    /// Moves to the previous page according to the boundary policy.
    fn previous_page(&mut self);

    /// Moves directly to `page`.
    ///
    /// Returns [`CarouselError::PageOutOfRange`] and leaves the current page
    /// unchanged if `page` does not address an item.
    fn jump_to(&mut self, page: usize) -> Result<(), CarouselError>;

    /// Returns `true` if [`next_page`](Self::next_page) would change the page.
    fn can_go_next(&self) -> bool;

    /// Returns `true` if [`previous_page`](Self::previous_page) would change the page.
    fn can_go_previous(&self) -> bool;

    /// Re-issues the current scroll intent after the view finished layout.
    fn layout_finished(&mut self);

    /// Forwards a tap on window slot `slot` to the observer as an absolute index.
    ///
    /// The tapped slot is the one on screen, which is the current page, so the
    /// observer receives [`current_page`](Self::current_page). Without an
    /// observer the tap is dropped.
    fn tapped(&mut self, slot: usize);

    /// Registers `observer`, replacing any previous one.
    fn set_observer(&mut self, observer: Box<dyn CarouselObserver>);

    /// Removes and returns the registered observer.
    fn clear_observer(&mut self) -> Option<Box<dyn CarouselObserver>>;

    /// Number of pages.
    fn page_count(&self) -> usize {
        self.model().page_count()
    }

    /// Index of the last page.
    fn last_page(&self) -> usize {
        self.model().last_page()
    }

    /// The item on the current page.
    ///
    /// Returns `None` only if an implementation reports a page outside its
    /// model.
    fn current_item(&self) -> Option<&Self::Item> {
        self.model().get(self.current_page())
    }

    /// Slot of the current page within [`view_model`](Self::view_model).
    fn current_slot(&self) -> usize {
        self.scroll_intent().slot(self.view_model().len())
    }

    /// Routes a collaborator notification to the matching operation.
    fn handle_event(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Next => self.next_page(),
            CarouselEvent::Previous => self.previous_page(),
            CarouselEvent::Tapped { slot } => self.tapped(slot),
            CarouselEvent::LayoutFinished => self.layout_finished(),
        }
    }
}

/// State and side-effect ordering shared by the finite and infinite engines.
pub(crate) struct PagerCore<T, V> {
    model: Model<T>,
    page: usize,
    policy: BoundaryPolicy,
    view: V,
    observer: Option<Box<dyn CarouselObserver>>,
}

impl<T, V: CarouselView<T>> PagerCore<T, V> {
    pub(crate) fn new(
        items: Vec<T>,
        initial_page: usize,
        policy: BoundaryPolicy,
        view: V,
    ) -> Result<Self, CarouselError> {
        let model = Model::new(items)?;
        let page = model.check_page(initial_page)?;
        let mut core = Self {
            model,
            page,
            policy,
            view,
            observer: None,
        };
        debug!(
            ?policy,
            page,
            len = core.model.page_count(),
            "carousel created"
        );
        core.publish();
        Ok(core)
    }

    /// The only path that writes `page`.
    pub(crate) fn set_page(&mut self, page: usize) {
        debug_assert!(
            self.model.contains_page(page),
            "page {page} outside 0..{}",
            self.model.page_count()
        );
        let previous = self.page;
        self.page = page;
        debug!(previous, page, policy = ?self.policy, "carousel page changed");
        self.publish();
        if let Some(observer) = self.observer.as_mut() {
            observer.page_changed(page);
        }
    }

    fn publish(&mut self) {
        let len = self.model.page_count();
        let pages = self.policy.window(len, self.page);
        let intent = self.policy.scroll_intent(len, self.page);
        let view_model = ViewModel::new(self.model.as_slice(), pages);
        self.view.attach(&view_model);
        self.view.request_scroll(intent);
    }

    pub(crate) fn jump_to(&mut self, page: usize) -> Result<(), CarouselError> {
        let page = self.model.check_page(page)?;
        self.set_page(page);
        Ok(())
    }

    pub(crate) fn layout_finished(&mut self) {
        let intent = self.scroll_intent();
        trace!(?intent, page = self.page, "re-issuing scroll after layout");
        self.view.request_scroll(intent);
    }

    pub(crate) fn tapped(&mut self, slot: usize) {
        let index = self.page;
        match self.observer.as_mut() {
            Some(observer) => {
                trace!(slot, index, "carousel item tapped");
                observer.item_tapped(index);
            }
            None => trace!(slot, index, "tap dropped, no observer registered"),
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Box<dyn CarouselObserver>) {
        self.observer = Some(observer);
    }

    pub(crate) fn clear_observer(&mut self) -> Option<Box<dyn CarouselObserver>> {
        self.observer.take()
    }
}

impl<T, V> PagerCore<T, V> {
    pub(crate) fn model(&self) -> &Model<T> {
        &self.model
    }

    pub(crate) fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn last_page(&self) -> usize {
        self.model.last_page()
    }

    pub(crate) fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub(crate) fn view_model(&self) -> ViewModel<'_, T> {
        let pages = self.policy.window(self.model.page_count(), self.page);
        ViewModel::new(self.model.as_slice(), pages)
    }

    pub(crate) fn scroll_intent(&self) -> ScrollIntent {
        self.policy
            .scroll_intent(self.model.page_count(), self.page)
    }

    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub(crate) fn into_parts(self) -> (Model<T>, V) {
        (self.model, self.view)
    }
}

impl<T, V> fmt::Debug for PagerCore<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerCore")
            .field("page", &self.page)
            .field("page_count", &self.model.page_count())
            .field("policy", &self.policy)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
