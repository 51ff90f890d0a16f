// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless paging engine for carousels.
//!
//! This crate owns the part of a carousel that is independent of any UI
//! toolkit: the current page, a three-slot window of items around it, and the
//! decision of which slot the view should scroll to. Rendering, layout,
//! gestures, image loading and timers stay with the host.
//!
//! The core concepts are:
//!
//! - [`Model`]: the fixed, non-empty sequence of items.
//! - [`Pager`]: the contract shared by both engines (advance, retreat, jump,
//!   window and scroll-intent queries, layout and tap hooks).
//! - [`FiniteCarousel`]: clamps at both ends. Edge pages pin the current item
//!   to the first or last slot, reported as [`ScrollIntent::ToFirst`] /
//!   [`ScrollIntent::ToLast`].
//! - [`InfiniteCarousel`]: wraps at both ends and always centers the current
//!   item. It can auto-advance through an injected [`AutoScrollScheduler`].
//! - [`ViewModel`]: the `[previous, current, next]` window handed to the
//!   view, always derived from the current page.
//! - [`CarouselView`] and [`CarouselObserver`]: the collaborator seams.
//! - [`Carousel`] and [`CarouselConfig`]: pick the engine from settings at
//!   runtime.
//!
//! Every page change runs the same sequence: store the page, push the new
//! [`ViewModel`] through [`CarouselView::attach`], ask for the new
//! [`ScrollIntent`] through [`CarouselView::request_scroll`], then notify the
//! observer. The view therefore always holds the window it is asked to
//! scroll within.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{CarouselView, FiniteCarousel, Pager, ScrollIntent, ViewModel};
//!
//! #[derive(Default)]
//! struct LogView {
//!     shown: Vec<Vec<usize>>,
//!     scrolls: Vec<ScrollIntent>,
//! }
//!
//! impl<T> CarouselView<T> for LogView {
//!     fn attach(&mut self, view_model: &ViewModel<'_, T>) {
//!         self.shown.push(view_model.pages().to_vec());
//!     }
//!     fn request_scroll(&mut self, intent: ScrollIntent) {
//!         self.scrolls.push(intent);
//!     }
//! }
//!
//! let photos = vec!["beach.jpg", "forest.jpg", "city.jpg", "desert.jpg", "lake.jpg"];
//! let mut carousel = FiniteCarousel::new(photos, 0, LogView::default()).unwrap();
//!
//! // The first page pins the window to the start.
//! assert_eq!(carousel.view_model().to_items().as_slice(), &[&"beach.jpg", &"forest.jpg", &"city.jpg"]);
//! assert_eq!(carousel.scroll_intent(), ScrollIntent::ToFirst);
//!
//! carousel.next_page();
//! assert_eq!(carousel.current_page(), 1);
//! assert_eq!(carousel.scroll_intent(), ScrollIntent::ToCenter);
//!
//! // The view saw the initial window and the one after paging, each followed
//! // by a scroll request.
//! assert_eq!(carousel.view().shown, vec![vec![0, 1, 2], vec![0, 1, 2]]);
//! assert_eq!(carousel.view().scrolls, vec![ScrollIntent::ToFirst, ScrollIntent::ToCenter]);
//! ```
//!
//! ## Auto-advance
//!
//! The engine does not own a clock. The host implements
//! [`AutoScrollScheduler`] on top of its timer and calls
//! [`InfiniteCarousel::auto_scroll_tick`] whenever it fires:
//!
//! ```rust
//! use core::time::Duration;
//! use understory_carousel::{
//!     AutoScroll, AutoScrollScheduler, CarouselView, InfiniteCarousel, Pager, ScrollIntent,
//!     ViewModel,
//! };
//!
//! struct NullView;
//! impl CarouselView<u8> for NullView {
//!     fn attach(&mut self, _: &ViewModel<'_, u8>) {}
//!     fn request_scroll(&mut self, _: ScrollIntent) {}
//! }
//!
//! struct HostTimer;
//! impl AutoScrollScheduler for HostTimer {
//!     fn schedule(&mut self, _interval: Duration) { /* arm the toolkit timer */ }
//!     fn cancel(&mut self) { /* disarm it */ }
//! }
//!
//! let mut carousel = InfiniteCarousel::new(vec![1, 2, 3], 2, NullView).unwrap();
//! carousel.start_auto_scroll(AutoScroll::forward(Duration::from_secs(4)), HostTimer);
//!
//! // Later, from the timer callback:
//! carousel.auto_scroll_tick();
//! assert_eq!(carousel.current_page(), 0);
//!
//! carousel.stop_auto_scroll();
//! assert!(!carousel.auto_scroll_tick());
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`CarouselConfig`],
//!   [`AutoScroll`], [`AutoScrollDirection`] and [`BoundaryPolicy`].
//!
//! All operations are synchronous and take `&mut self`; hosts that share a
//! carousel across threads must serialize access themselves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod auto_scroll;
mod config;
mod error;
mod finite;
mod infinite;
mod model;
mod pager;
mod view;
mod window;

#[cfg(test)]
mod testing;

pub use auto_scroll::{AutoScroll, AutoScrollDirection, AutoScrollScheduler};
pub use config::{Carousel, CarouselConfig};
pub use error::CarouselError;
pub use finite::FiniteCarousel;
pub use infinite::InfiniteCarousel;
pub use model::Model;
pub use pager::{BoundaryPolicy, Pager};
pub use view::{CarouselEvent, CarouselObserver, CarouselView};
pub use window::{ScrollIntent, ViewModel, WINDOW_SLOTS};
