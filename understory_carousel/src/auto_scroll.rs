// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance settings and the injected timer capability.
//!
//! The engine does not own a clock. A host registers an
//! [`AutoScrollScheduler`] through
//! [`InfiniteCarousel::start_auto_scroll`](crate::InfiniteCarousel::start_auto_scroll);
//! the scheduler arranges for the host to call
//! [`InfiniteCarousel::auto_scroll_tick`](crate::InfiniteCarousel::auto_scroll_tick)
//! every interval on the same context that owns the carousel.

use core::time::Duration;

/// Direction an auto-scrolling carousel advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AutoScrollDirection {
    /// Each tick calls `next_page`.
    #[default]
    Forward,
    /// Each tick calls `previous_page`.
    Backward,
}

/// Auto-advance settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScroll {
    /// Which way each tick pages.
    pub direction: AutoScrollDirection,
    /// Time between ticks.
    pub interval: Duration,
}

impl AutoScroll {
    /// Interval used by [`AutoScroll::default`].
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

    /// Advance forward every `interval`.
    #[must_use]
    pub const fn forward(interval: Duration) -> Self {
        Self {
            direction: AutoScrollDirection::Forward,
            interval,
        }
    }

    /// Advance backward every `interval`.
    #[must_use]
    pub const fn backward(interval: Duration) -> Self {
        Self {
            direction: AutoScrollDirection::Backward,
            interval,
        }
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::forward(Self::DEFAULT_INTERVAL)
    }
}

/// Timer capability supplied by the host.
///
/// Implementations typically wrap a UI toolkit timer or an event-loop
/// deadline. Ticks must be delivered on the context that owns the carousel.
pub trait AutoScrollScheduler {
    /// Starts firing every `interval`, replacing any schedule already running.
    fn schedule(&mut self, interval: Duration);

    /// Stops firing. Called at most once per [`schedule`](Self::schedule).
    fn cancel(&mut self);
}
