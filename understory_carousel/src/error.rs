// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by carousel construction and jumps.

/// Failure returned by the fallible carousel operations.
///
/// Both variants are local and recoverable: a failed construction yields no
/// engine, and a failed [`jump_to`](crate::Pager::jump_to) leaves the current
/// page untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CarouselError {
    /// The model had no items.
    #[error("carousel model must contain at least one item")]
    EmptyModel,
    /// A page index fell outside `0..len`.
    #[error("page {page} is out of range for a carousel of {len} items")]
    PageOutOfRange {
        /// The rejected page index.
        page: usize,
        /// Number of items in the model.
        len: usize,
    },
}
