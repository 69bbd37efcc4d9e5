// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for quadtree access.

use core::fmt;

/// Errors arising from structural access to a [`Quadtree`](crate::Quadtree).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuadtreeError {
    /// A child index outside `0..4` was requested.
    ChildIndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildIndexOutOfRange { index } => {
                write!(f, "child index {index} out of range: expected 0..4")
            }
        }
    }
}

impl core::error::Error for QuadtreeError {}
