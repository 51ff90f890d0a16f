// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative carousel settings and a policy-selected engine.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{
    AutoScroll, AutoScrollScheduler, BoundaryPolicy, CarouselError, CarouselObserver, CarouselView,
    FiniteCarousel, InfiniteCarousel, Model, Pager, ScrollIntent, ViewModel,
};

/// Static settings for one carousel instance.
///
/// With the `serde` feature this can be loaded from a host's own settings
/// file; the engine itself persists nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Edge behavior.
    pub policy: BoundaryPolicy,
    /// Page shown first.
    pub initial_page: usize,
    /// Auto-advance the host should start once it has a scheduler.
    ///
    /// Only infinite carousels can auto-advance.
    pub auto_scroll: Option<AutoScroll>,
}

impl CarouselConfig {
    /// Clamped carousel starting on the first page.
    #[must_use]
    pub const fn finite() -> Self {
        Self {
            policy: BoundaryPolicy::Finite,
            initial_page: 0,
            auto_scroll: None,
        }
    }

    /// Wraparound carousel starting on the first page, without auto-advance.
    #[must_use]
    pub const fn infinite() -> Self {
        Self {
            policy: BoundaryPolicy::Infinite,
            initial_page: 0,
            auto_scroll: None,
        }
    }

    /// Sets the first page shown.
    #[must_use]
    pub const fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    /// Sets the auto-advance settings.
    #[must_use]
    pub const fn with_auto_scroll(mut self, auto_scroll: AutoScroll) -> Self {
        self.auto_scroll = Some(auto_scroll);
        self
    }
}

/// A carousel whose boundary policy was chosen at runtime.
///
/// ```
/// use core::time::Duration;
/// use understory_carousel::{
///     AutoScroll, AutoScrollScheduler, Carousel, CarouselConfig, CarouselView, Pager,
///     ScrollIntent, ViewModel,
/// };
///
/// struct NullView;
/// impl CarouselView<&'static str> for NullView {
///     fn attach(&mut self, _: &ViewModel<'_, &'static str>) {}
///     fn request_scroll(&mut self, _: ScrollIntent) {}
/// }
///
/// struct NoTimer;
/// impl AutoScrollScheduler for NoTimer {
///     fn schedule(&mut self, _: Duration) {}
///     fn cancel(&mut self) {}
/// }
///
/// let config = CarouselConfig::infinite()
///     .with_initial_page(2)
///     .with_auto_scroll(AutoScroll::forward(Duration::from_secs(5)));
/// let mut carousel = Carousel::from_config(vec!["a", "b", "c"], &config, NullView).unwrap();
/// if let Some(auto_scroll) = config.auto_scroll {
///     assert!(carousel.start_auto_scroll(auto_scroll, NoTimer));
/// }
///
/// carousel.next_page();
/// assert_eq!(carousel.current_page(), 0);
/// ```
#[derive(Debug)]
pub enum Carousel<T, V> {
    /// Clamped engine.
    Finite(FiniteCarousel<T, V>),
    /// Wraparound engine.
    Infinite(InfiniteCarousel<T, V>),
}

impl<T, V: CarouselView<T>> Carousel<T, V> {
    /// Creates the engine named by `config.policy`.
    pub fn from_config(
        items: Vec<T>,
        config: &CarouselConfig,
        view: V,
    ) -> Result<Self, CarouselError> {
        match config.policy {
            BoundaryPolicy::Finite => {
                FiniteCarousel::new(items, config.initial_page, view).map(Self::Finite)
            }
            BoundaryPolicy::Infinite => {
                InfiniteCarousel::new(items, config.initial_page, view).map(Self::Infinite)
            }
        }
    }

    /// Starts auto-advance with `config`.
    ///
    /// Returns `false` without touching `scheduler` for a finite carousel.
    pub fn start_auto_scroll(
        &mut self,
        config: AutoScroll,
        scheduler: impl AutoScrollScheduler + 'static,
    ) -> bool {
        match self {
            Self::Finite(_) => false,
            Self::Infinite(carousel) => {
                carousel.start_auto_scroll(config, scheduler);
                true
            }
        }
    }

    /// Forwards an auto-scroll tick. Always `false` for a finite carousel.
    pub fn auto_scroll_tick(&mut self) -> bool {
        match self {
            Self::Finite(_) => false,
            Self::Infinite(carousel) => carousel.auto_scroll_tick(),
        }
    }
}

impl<T, V> Carousel<T, V> {
    /// Stops auto-advance, if running.
    pub fn stop_auto_scroll(&mut self) {
        if let Self::Infinite(carousel) = self {
            carousel.stop_auto_scroll();
        }
    }

    /// Returns `true` while auto-advance is running.
    #[must_use]
    pub fn is_auto_scrolling(&self) -> bool {
        matches!(self, Self::Infinite(carousel) if carousel.is_auto_scrolling())
    }

    /// The rendering collaborator.
    #[must_use]
    pub fn view(&self) -> &V {
        match self {
            Self::Finite(carousel) => carousel.view(),
            Self::Infinite(carousel) => carousel.view(),
        }
    }

    /// Mutable access to the rendering collaborator.
    pub fn view_mut(&mut self) -> &mut V {
        match self {
            Self::Finite(carousel) => carousel.view_mut(),
            Self::Infinite(carousel) => carousel.view_mut(),
        }
    }
}

impl<T, V: CarouselView<T>> Pager for Carousel<T, V> {
    type Item = T;

    fn policy(&self) -> BoundaryPolicy {
        match self {
            Self::Finite(carousel) => carousel.policy(),
            Self::Infinite(carousel) => carousel.policy(),
        }
    }

    fn model(&self) -> &Model<T> {
        match self {
            Self::Finite(carousel) => carousel.model(),
            Self::Infinite(carousel) => carousel.model(),
        }
    }

    fn current_page(&self) -> usize {
        match self {
            Self::Finite(carousel) => carousel.current_page(),
            Self::Infinite(carousel) => carousel.current_page(),
        }
    }

    fn view_model(&self) -> ViewModel<'_, T> {
        match self {
            Self::Finite(carousel) => carousel.view_model(),
            Self::Infinite(carousel) => carousel.view_model(),
        }
    }

    fn scroll_intent(&self) -> ScrollIntent {
        match self {
            Self::Finite(carousel) => carousel.scroll_intent(),
            Self::Infinite(carousel) => carousel.scroll_intent(),
        }
    }

    fn next_page(&mut self) {
        match self {
            Self::Finite(carousel) => carousel.next_page(),
            Self::Infinite(carousel) => carousel.next_page(),
        }
    }

    fn previous_page(&mut self) {
        match self {
            Self::Finite(carousel) => carousel.previous_page(),
            Self::Infinite(carousel) => carousel.previous_page(),
        }
    }

    fn jump_to(&mut self, page: usize) -> Result<(), CarouselError> {
        match self {
            Self::Finite(carousel) => carousel.jump_to(page),
            Self::Infinite(carousel) => carousel.jump_to(page),
        }
    }

    fn can_go_next(&self) -> bool {
        match self {
            Self::Finite(carousel) => carousel.can_go_next(),
            Self::Infinite(carousel) => carousel.can_go_next(),
        }
    }

    fn can_go_previous(&self) -> bool {
        match self {
            Self::Finite(carousel) => carousel.can_go_previous(),
            Self::Infinite(carousel) => carousel.can_go_previous(),
        }
    }

    fn layout_finished(&mut self) {
        match self {
            Self::Finite(carousel) => carousel.layout_finished(),
            Self::Infinite(carousel) => carousel.layout_finished(),
        }
    }

    fn tapped(&mut self, slot: usize) {
        match self {
            Self::Finite(carousel) => carousel.tapped(slot),
            Self::Infinite(carousel) => carousel.tapped(slot),
        }
    }

    fn set_observer(&mut self, observer: Box<dyn CarouselObserver>) {
        match self {
            Self::Finite(carousel) => carousel.set_observer(observer),
            Self::Infinite(carousel) => carousel.set_observer(observer),
        }
    }

    fn clear_observer(&mut self) -> Option<Box<dyn CarouselObserver>> {
        match self {
            Self::Finite(carousel) => carousel.clear_observer(),
            Self::Infinite(carousel) => carousel.clear_observer(),
        }
    }
}
