// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped carousel: paging stops at the first and last items.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::smallvec;
use tracing::trace;

use crate::pager::PagerCore;
use crate::window::WindowPages;
use crate::{
    BoundaryPolicy, CarouselError, CarouselObserver, CarouselView, Model, Pager, ScrollIntent,
    ViewModel,
};

/// Window for a clamped carousel of `len` items showing `page`.
///
/// Edge pages keep a full three-slot window by pinning the current item to
/// the first or last slot instead of the middle one.
pub(crate) fn window(len: usize, page: usize) -> WindowPages {
    match len {
        0 => WindowPages::new(),
        1 => smallvec![0],
        2 => smallvec![0, 1],
        _ if page == 0 => smallvec![0, 1, 2],
        _ if page == len - 1 => smallvec![page - 2, page - 1, page],
        _ => smallvec![page - 1, page, page + 1],
    }
}

pub(crate) fn scroll_intent(len: usize, page: usize) -> ScrollIntent {
    if page == 0 {
        ScrollIntent::ToFirst
    } else if page + 1 == len {
        ScrollIntent::ToLast
    } else {
        ScrollIntent::ToCenter
    }
}

/// A carousel that clamps at both ends.
///
/// [`next_page`](Pager::next_page) on the last page and
/// [`previous_page`](Pager::previous_page) on the first page do nothing and
/// publish nothing.
///
/// ```
/// use understory_carousel::{CarouselView, FiniteCarousel, Pager, ScrollIntent, ViewModel};
///
/// struct NullView;
/// impl CarouselView<char> for NullView {
///     fn attach(&mut self, _: &ViewModel<'_, char>) {}
///     fn request_scroll(&mut self, _: ScrollIntent) {}
/// }
///
/// let mut carousel = FiniteCarousel::new(vec!['a', 'b', 'c', 'd'], 3, NullView).unwrap();
/// assert_eq!(carousel.view_model().pages(), &[1, 2, 3]);
/// assert_eq!(carousel.scroll_intent(), ScrollIntent::ToLast);
///
/// carousel.next_page();
/// assert_eq!(carousel.current_page(), 3);
/// ```
pub struct FiniteCarousel<T, V> {
    core: PagerCore<T, V>,
}

impl<T, V: CarouselView<T>> FiniteCarousel<T, V> {
    /// Creates a clamped carousel over `items`, starting at `initial_page`.
    ///
    /// The initial window and scroll intent are pushed to `view` before this
    /// returns.
    pub fn new(items: Vec<T>, initial_page: usize, view: V) -> Result<Self, CarouselError> {
        PagerCore::new(items, initial_page, BoundaryPolicy::Finite, view).map(|core| Self { core })
    }
}

impl<T, V> FiniteCarousel<T, V> {
    /// The rendering collaborator.
    #[must_use]
    pub fn view(&self) -> &V {
        self.core.view()
    }

    /// Mutable access to the rendering collaborator.
    pub fn view_mut(&mut self) -> &mut V {
        self.core.view_mut()
    }

    /// Tears the carousel down, returning its model and view.
    #[must_use]
    pub fn into_parts(self) -> (Model<T>, V) {
        self.core.into_parts()
    }
}

impl<T, V: CarouselView<T>> Pager for FiniteCarousel<T, V> {
    type Item = T;

    fn policy(&self) -> BoundaryPolicy {
        self.core.policy()
    }

    fn model(&self) -> &Model<T> {
        self.core.model()
    }

    fn current_page(&self) -> usize {
        self.core.page()
    }

    fn view_model(&self) -> ViewModel<'_, T> {
        self.core.view_model()
    }

    fn scroll_intent(&self) -> ScrollIntent {
        self.core.scroll_intent()
    }

    fn next_page(&mut self) {
        if self.can_go_next() {
            self.core.set_page(self.core.page() + 1);
        } else {
            trace!(page = self.core.page(), "next_page clamped at last page");
        }
    }

    fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.core.set_page(self.core.page() - 1);
        } else {
            trace!("previous_page clamped at first page");
        }
    }

    fn jump_to(&mut self, page: usize) -> Result<(), CarouselError> {
        self.core.jump_to(page)
    }

    fn can_go_next(&self) -> bool {
        self.core.page() < self.core.last_page()
    }

    fn can_go_previous(&self) -> bool {
        self.core.page() > 0
    }

    fn layout_finished(&mut self) {
        self.core.layout_finished();
    }

    fn tapped(&mut self, slot: usize) {
        self.core.tapped(slot);
    }

    fn set_observer(&mut self, observer: Box<dyn CarouselObserver>) {
        self.core.set_observer(observer);
    }

    fn clear_observer(&mut self) -> Option<Box<dyn CarouselObserver>> {
        self.core.clear_observer()
    }
}

impl<T, V> fmt::Debug for FiniteCarousel<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteCarousel")
            .field("core", &self.core)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{FiniteCarousel, scroll_intent, window};
    use crate::testing::{Call, RecordingObserver, RecordingView, Seen};
    use crate::{CarouselError, CarouselEvent, Pager, ScrollIntent};

    fn five() -> Vec<&'static str> {
        vec!["I0", "I1", "I2", "I3", "I4"]
    }

    #[test]
    fn short_models_use_fixed_windows() {
        assert_eq!(window(1, 0).as_slice(), &[0]);
        assert_eq!(window(2, 0).as_slice(), &[0, 1]);
        assert_eq!(window(2, 1).as_slice(), &[0, 1]);
        assert_eq!(scroll_intent(1, 0), ScrollIntent::ToFirst);
        assert_eq!(scroll_intent(2, 0), ScrollIntent::ToFirst);
        assert_eq!(scroll_intent(2, 1), ScrollIntent::ToLast);
    }

    #[test]
    fn edge_pages_pin_the_window() {
        assert_eq!(window(5, 0).as_slice(), &[0, 1, 2]);
        assert_eq!(window(5, 2).as_slice(), &[1, 2, 3]);
        assert_eq!(window(5, 4).as_slice(), &[2, 3, 4]);
        assert_eq!(window(3, 1).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn first_page_then_next() {
        let mut carousel = FiniteCarousel::new(five(), 0, RecordingView::default()).unwrap();
        assert_eq!(
            carousel.view_model().to_items().as_slice(),
            &[&"I0", &"I1", &"I2"]
        );
        assert_eq!(carousel.scroll_intent(), ScrollIntent::ToFirst);
        assert_eq!(carousel.current_slot(), 0);

        carousel.next_page();
        assert_eq!(carousel.current_page(), 1);
        assert_eq!(
            carousel.view_model().to_items().as_slice(),
            &[&"I0", &"I1", &"I2"]
        );
        assert_eq!(carousel.scroll_intent(), ScrollIntent::ToCenter);
        assert_eq!(carousel.current_slot(), 1);
    }

    #[test]
    fn last_page_is_clamped() {
        let mut carousel = FiniteCarousel::new(five(), 4, RecordingView::default()).unwrap();
        assert_eq!(
            carousel.view_model().to_items().as_slice(),
            &[&"I2", &"I3", &"I4"]
        );
        assert_eq!(carousel.scroll_intent(), ScrollIntent::ToLast);
        assert_eq!(carousel.current_item(), Some(&"I4"));
        assert!(!carousel.can_go_next());

        let published = carousel.view().calls.len();
        carousel.next_page();
        assert_eq!(carousel.current_page(), 4);
        assert_eq!(
            carousel.view().calls.len(),
            published,
            "a clamped next_page must not publish"
        );
    }

    #[test]
    fn previous_page_is_clamped_at_zero() {
        let mut carousel = FiniteCarousel::new(five(), 1, RecordingView::default()).unwrap();
        carousel.previous_page();
        carousel.previous_page();
        assert_eq!(carousel.current_page(), 0);
        assert!(!carousel.can_go_previous());
        assert!(carousel.can_go_next());
    }

    #[test]
    fn construction_publishes_then_each_move_publishes_in_order() {
        let mut carousel = FiniteCarousel::new(five(), 0, RecordingView::default()).unwrap();
        carousel.next_page();

        assert_eq!(
            carousel.view().calls,
            vec![
                Call::Attach(vec![0, 1, 2]),
                Call::Scroll(ScrollIntent::ToFirst),
                Call::Attach(vec![0, 1, 2]),
                Call::Scroll(ScrollIntent::ToCenter),
            ]
        );
    }

    #[test]
    fn construction_errors() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(
            FiniteCarousel::new(empty, 0, RecordingView::default()).err(),
            Some(CarouselError::EmptyModel)
        );
        assert_eq!(
            FiniteCarousel::new(five(), 5, RecordingView::default()).err(),
            Some(CarouselError::PageOutOfRange { page: 5, len: 5 })
        );
    }

    #[test]
    fn failed_jump_keeps_page_and_publishes_nothing() {
        let mut carousel = FiniteCarousel::new(five(), 2, RecordingView::default()).unwrap();
        let published = carousel.view().calls.len();

        assert_eq!(
            carousel.jump_to(10),
            Err(CarouselError::PageOutOfRange { page: 10, len: 5 })
        );
        assert_eq!(carousel.current_page(), 2);
        assert_eq!(carousel.view().calls.len(), published);

        assert_eq!(carousel.jump_to(4), Ok(()));
        assert_eq!(carousel.current_page(), 4);
        assert_eq!(
            carousel.view().calls[published..],
            [
                Call::Attach(vec![2, 3, 4]),
                Call::Scroll(ScrollIntent::ToLast),
            ]
        );
    }

    #[test]
    fn layout_reissues_scroll_only() {
        let mut carousel = FiniteCarousel::new(five(), 4, RecordingView::default()).unwrap();
        carousel.view_mut().calls.clear();

        carousel.handle_event(CarouselEvent::LayoutFinished);
        assert_eq!(
            carousel.view().calls,
            vec![Call::Scroll(ScrollIntent::ToLast)]
        );
    }

    #[test]
    fn observer_sees_page_changes_and_taps() {
        let seen = Seen::default();
        let mut carousel = FiniteCarousel::new(five(), 0, RecordingView::default()).unwrap();

        // No observer yet: dropped silently.
        carousel.tapped(0);

        carousel.set_observer(Box::new(RecordingObserver::new(&seen)));
        carousel.handle_event(CarouselEvent::Next);
        carousel.handle_event(CarouselEvent::Tapped { slot: 1 });
        carousel.handle_event(CarouselEvent::Previous);

        assert_eq!(seen.pages(), vec![1, 0]);
        assert_eq!(seen.taps(), vec![1]);

        assert!(carousel.clear_observer().is_some());
        carousel.tapped(1);
        assert_eq!(seen.taps(), vec![1]);
    }

    #[test]
    fn into_parts_returns_model_and_view() {
        let carousel = FiniteCarousel::new(five(), 0, RecordingView::default()).unwrap();
        let (model, view) = carousel.into_parts();
        assert_eq!(model.page_count(), 5);
        assert_eq!(view.calls.len(), 2);
    }
}
