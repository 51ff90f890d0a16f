// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable, non-empty item sequence a carousel pages through.

use alloc::vec::Vec;
use core::slice;

use crate::CarouselError;

/// An ordered, non-empty sequence of carousel items.
///
/// The engine never inspects items; it only hands references back to the
/// rendering collaborator by position. Items are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model<T> {
    items: Vec<T>,
}

impl<T> Model<T> {
    /// Creates a model from `items`.
    ///
    /// Returns [`CarouselError::EmptyModel`] if `items` is empty.
    pub fn new(items: impl Into<Vec<T>>) -> Result<Self, CarouselError> {
        let items = items.into();
        if items.is_empty() {
            return Err(CarouselError::EmptyModel);
        }
        Ok(Self { items })
    }

    /// Number of items. Always at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the last item.
    #[must_use]
    pub fn last_page(&self) -> usize {
        self.items.len() - 1
    }

    /// Returns `true` if `page` addresses an item.
    #[must_use]
    pub fn contains_page(&self, page: usize) -> bool {
        page < self.items.len()
    }

    /// Checks `page` against the model bounds.
    pub fn check_page(&self, page: usize) -> Result<usize, CarouselError> {
        if self.contains_page(page) {
            Ok(page)
        } else {
            Err(CarouselError::PageOutOfRange {
                page,
                len: self.items.len(),
            })
        }
    }

    /// Returns the item at `page`, if any.
    #[must_use]
    pub fn get(&self, page: usize) -> Option<&T> {
        self.items.get(page)
    }

    /// All items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the model, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a Model<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
