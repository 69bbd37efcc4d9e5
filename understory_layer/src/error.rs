// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layer registries.

use core::fmt;

use crate::types::LayerId;

/// Errors arising from [`Composition`](crate::Composition) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerError {
    /// No layer with this id is registered.
    UnknownLayer {
        /// The id that was looked up.
        id: LayerId,
    },
    /// A layer with this id is already registered.
    DuplicateLayer {
        /// The conflicting id.
        id: LayerId,
    },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLayer { id } => write!(f, "{id} is not registered"),
            Self::DuplicateLayer { id } => write!(f, "{id} is already registered"),
        }
    }
}

impl core::error::Error for LayerError {}
