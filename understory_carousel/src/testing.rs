// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording collaborators shared by the unit tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use crate::{AutoScrollScheduler, CarouselObserver, CarouselView, ScrollIntent, ViewModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Attach(Vec<usize>),
    Scroll(ScrollIntent),
}

/// Records every call the engine makes on its view.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub(crate) calls: Vec<Call>,
}

impl<T> CarouselView<T> for RecordingView {
    fn attach(&mut self, view_model: &ViewModel<'_, T>) {
        self.calls.push(Call::Attach(view_model.pages().to_vec()));
    }

    fn request_scroll(&mut self, intent: ScrollIntent) {
        self.calls.push(Call::Scroll(intent));
    }
}

/// Shared log an observer writes into while the engine owns it.
#[derive(Debug, Default, Clone)]
pub(crate) struct Seen {
    pages: Rc<RefCell<Vec<usize>>>,
    taps: Rc<RefCell<Vec<usize>>>,
}

impl Seen {
    pub(crate) fn pages(&self) -> Vec<usize> {
        self.pages.borrow().clone()
    }

    pub(crate) fn taps(&self) -> Vec<usize> {
        self.taps.borrow().clone()
    }
}

pub(crate) struct RecordingObserver {
    seen: Seen,
}

impl RecordingObserver {
    pub(crate) fn new(seen: &Seen) -> Self {
        Self { seen: seen.clone() }
    }
}

impl CarouselObserver for RecordingObserver {
    fn page_changed(&mut self, page: usize) {
        self.seen.pages.borrow_mut().push(page);
    }

    fn item_tapped(&mut self, index: usize) {
        self.seen.taps.borrow_mut().push(index);
    }
}

/// Scheduler log: `Some(interval)` for each schedule, `None` for each cancel.
#[derive(Debug, Default, Clone)]
pub(crate) struct SchedulerLog(Rc<RefCell<Vec<Option<Duration>>>>);

impl SchedulerLog {
    pub(crate) fn entries(&self) -> Vec<Option<Duration>> {
        self.0.borrow().clone()
    }
}

pub(crate) struct ManualScheduler {
    log: SchedulerLog,
}

impl ManualScheduler {
    pub(crate) fn new(log: &SchedulerLog) -> Self {
        Self { log: log.clone() }
    }
}

impl AutoScrollScheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.log.0.borrow_mut().push(Some(interval));
    }

    fn cancel(&mut self) {
        self.log.0.borrow_mut().push(None);
    }
}

/// One externally visible effect of a page change, view and observer alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    Attach(Vec<usize>),
    Scroll(ScrollIntent),
    PageChanged(usize),
}

/// Single log written by both [`EffectView`] and [`EffectObserver`].
#[derive(Debug, Default, Clone)]
pub(crate) struct EffectLog(Rc<RefCell<Vec<Effect>>>);

impl EffectLog {
    pub(crate) fn take(&self) -> Vec<Effect> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

#[derive(Debug)]
pub(crate) struct EffectView {
    log: EffectLog,
}

impl EffectView {
    pub(crate) fn new(log: &EffectLog) -> Self {
        Self { log: log.clone() }
    }
}

impl<T> CarouselView<T> for EffectView {
    fn attach(&mut self, view_model: &ViewModel<'_, T>) {
        let pages = view_model.pages().to_vec();
        self.log.0.borrow_mut().push(Effect::Attach(pages));
    }

    fn request_scroll(&mut self, intent: ScrollIntent) {
        self.log.0.borrow_mut().push(Effect::Scroll(intent));
    }
}

pub(crate) struct EffectObserver {
    log: EffectLog,
}

impl EffectObserver {
    pub(crate) fn new(log: &EffectLog) -> Self {
        Self { log: log.clone() }
    }
}

impl CarouselObserver for EffectObserver {
    fn page_changed(&mut self, page: usize) {
        self.log.0.borrow_mut().push(Effect::PageChanged(page));
    }
}
