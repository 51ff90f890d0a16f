// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wraparound carousel with optional auto-advance.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::smallvec;
use tracing::{debug, trace};

use crate::pager::PagerCore;
use crate::window::WindowPages;
use crate::{
    AutoScroll, AutoScrollDirection, AutoScrollScheduler, BoundaryPolicy, CarouselError,
    CarouselObserver, CarouselView, Model, Pager, ScrollIntent, ViewModel,
};

/// Window for a wraparound carousel of `len` items showing `page`.
///
/// Always three slots with the current page in the middle; neighbours wrap
/// across the ends, and a single item fills every slot.
pub(crate) fn window(len: usize, page: usize) -> WindowPages {
    if len == 0 {
        return WindowPages::new();
    }
    let last = len - 1;
    let previous = if page == 0 { last } else { page - 1 };
    let next = if page == last { 0 } else { page + 1 };
    smallvec![previous, page, next]
}

pub(crate) fn scroll_intent(_len: usize, _page: usize) -> ScrollIntent {
    ScrollIntent::ToCenter
}

/// An active auto-scroll; dropping it cancels the scheduler.
struct Registration {
    config: AutoScroll,
    scheduler: Box<dyn AutoScrollScheduler>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.scheduler.cancel();
        debug!("auto-scroll stopped");
    }
}

/// A carousel that wraps around at both ends.
///
/// The current item always sits in the middle slot of a three-slot window,
/// so the scroll intent is always [`ScrollIntent::ToCenter`]. Paging from the
/// last page goes to the first and vice versa; with a single item every move
/// lands back on page `0` and is still published.
///
/// An infinite carousel can also advance on its own: see
/// [`start_auto_scroll`](Self::start_auto_scroll).
///
/// ```
/// use understory_carousel::{CarouselView, InfiniteCarousel, Pager, ViewModel, ScrollIntent};
///
/// struct NullView;
/// impl CarouselView<u32> for NullView {
///     fn attach(&mut self, _: &ViewModel<'_, u32>) {}
///     fn request_scroll(&mut self, _: ScrollIntent) {}
/// }
///
/// let mut carousel = InfiniteCarousel::new(vec![10, 11, 12, 13, 14], 0, NullView).unwrap();
/// assert_eq!(carousel.view_model().pages(), &[4, 0, 1]);
///
/// carousel.previous_page();
/// assert_eq!(carousel.current_page(), 4);
/// assert_eq!(carousel.view_model().pages(), &[3, 4, 0]);
/// ```
pub struct InfiniteCarousel<T, V> {
    core: PagerCore<T, V>,
    auto_scroll: Option<Registration>,
}

impl<T, V: CarouselView<T>> InfiniteCarousel<T, V> {
    /// Creates a wraparound carousel over `items`, starting at `initial_page`.
    ///
    /// The initial window and scroll intent are pushed to `view` before this
    /// returns.
    pub fn new(items: Vec<T>, initial_page: usize, view: V) -> Result<Self, CarouselError> {
        let core = PagerCore::new(items, initial_page, BoundaryPolicy::Infinite, view)?;
        Ok(Self {
            core,
            auto_scroll: None,
        })
    }

    /// Starts advancing automatically according to `config`.
    ///
    /// Any running registration is stopped first. `scheduler` is asked to
    /// fire every [`AutoScroll::interval`]; each firing should end up in
    /// [`auto_scroll_tick`](Self::auto_scroll_tick).
    pub fn start_auto_scroll(
        &mut self,
        config: AutoScroll,
        scheduler: impl AutoScrollScheduler + 'static,
    ) {
        self.stop_auto_scroll();
        let mut scheduler: Box<dyn AutoScrollScheduler> = Box::new(scheduler);
        scheduler.schedule(config.interval);
        debug!(
            direction = ?config.direction,
            interval = ?config.interval,
            "auto-scroll started"
        );
        self.auto_scroll = Some(Registration { config, scheduler });
    }

    /// Advances one page in the registered direction.
    ///
    /// Returns `false` and does nothing if auto-scroll is not running, which
    /// covers ticks that were already queued when it was stopped.
    pub fn auto_scroll_tick(&mut self) -> bool {
        let Some(direction) = self.auto_scroll.as_ref().map(|r| r.config.direction) else {
            trace!("stale auto-scroll tick ignored");
            return false;
        };
        match direction {
            AutoScrollDirection::Forward => self.next_page(),
            AutoScrollDirection::Backward => self.previous_page(),
        }
        true
    }
}

impl<T, V> InfiniteCarousel<T, V> {
    /// Stops auto-advance and cancels the scheduler.
    ///
    /// Safe to call at any time, including when auto-scroll never started.
    pub fn stop_auto_scroll(&mut self) {
        drop(self.auto_scroll.take());
    }

    /// Returns `true` while an auto-scroll registration is active.
    #[must_use]
    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_some()
    }

    /// Settings of the active auto-scroll registration, if any.
    #[must_use]
    pub fn auto_scroll(&self) -> Option<AutoScroll> {
        self.auto_scroll.as_ref().map(|r| r.config)
    }

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
    ///
    /// A running auto-scroll is stopped first.
    #[must_use]
    pub fn into_parts(self) -> (Model<T>, V) {
        let Self { core, auto_scroll } = self;
        drop(auto_scroll);
        core.into_parts()
    }
}

impl<T, V: CarouselView<T>> Pager for InfiniteCarousel<T, V> {
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
        let page = self.core.page();
        let next = if page == self.core.last_page() {
            0
        } else {
            page + 1
        };
        self.core.set_page(next);
    }

    fn previous_page(&mut self) {
        let page = self.core.page();
        let previous = if page == 0 {
            self.core.last_page()
        } else {
            page - 1
        };
        self.core.set_page(previous);
    }

    fn jump_to(&mut self, page: usize) -> Result<(), CarouselError> {
        self.core.jump_to(page)
    }

    fn can_go_next(&self) -> bool {
        true
    }

    fn can_go_previous(&self) -> bool {
        true
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

impl<T, V> fmt::Debug for InfiniteCarousel<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteCarousel")
            .field("core", &self.core)
            .field("auto_scroll", &self.auto_scroll())
            .finish()
    }
}
