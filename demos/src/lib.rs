// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console collaborators shared by the carousel demos.

use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;
use std::time::Duration;

use understory_carousel::{
    AutoScrollScheduler, CarouselObserver, CarouselView, ScrollIntent, ViewModel,
};

/// Prints each attached window and marks the slot it is asked to scroll to.
#[derive(Debug, Default)]
pub struct ConsoleView {
    slots: Vec<String>,
}

impl<T: Display> CarouselView<T> for ConsoleView {
    fn attach(&mut self, view_model: &ViewModel<'_, T>) {
        self.slots = view_model.iter().map(ToString::to_string).collect();
    }

    fn request_scroll(&mut self, intent: ScrollIntent) {
        let focused = intent.slot(self.slots.len());
        let line = self
            .slots
            .iter()
            .enumerate()
            .map(|(slot, label)| {
                if slot == focused {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line:<48} ({intent:?})");
    }
}

/// Prints page changes and taps.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl CarouselObserver for ConsoleObserver {
    fn page_changed(&mut self, page: usize) {
        println!("  -> page {page}");
    }

    fn item_tapped(&mut self, index: usize) {
        println!("  -> tapped item {index}");
    }
}

/// A stand-in for a toolkit timer: remembers whether it is armed so the demo
/// loop knows when to deliver ticks.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    armed: Rc<Cell<Option<Duration>>>,
}

impl ManualTimer {
    /// Interval the timer is armed with, if any.
    pub fn armed(&self) -> Option<Duration> {
        self.armed.get()
    }
}

impl AutoScrollScheduler for ManualTimer {
    fn schedule(&mut self, interval: Duration) {
        self.armed.set(Some(interval));
    }

    fn cancel(&mut self) {
        self.armed.set(None);
    }
}
