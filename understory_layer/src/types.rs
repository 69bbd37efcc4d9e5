// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer identifiers and their generator.

use core::fmt;

/// Identifier of a [`Layer`](crate::Layer).
///
/// Issued by a [`LayerIds`] generator and fixed for the layer's lifetime.
/// Two ids from the same generator never compare equal; ids from different
/// generators carry no such guarantee.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u32);

impl LayerId {
    /// The raw id value.
    pub const fn get(self) -> u32 {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer #{}", self.0)
    }
}

/// Monotonically increasing source of [`LayerId`]s.
///
/// Owned by whatever constructs layers (for example a
/// [`Composition`](crate::Composition)), so tests and independent documents do
/// not share hidden global state. The first id issued is `1`.
///
/// After `u32::MAX` the counter wraps to `0`, so a long-lived generator can
/// reissue an id. [`Composition::create_layer`](crate::Composition::create_layer)
/// skips ids it already holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerIds {
    next: u32,
}

impl Default for LayerIds {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerIds {
    /// Create a generator whose first id is `1`.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Make sure ids issued from now on are greater than `id`.
    pub fn skip_past(&mut self, id: LayerId) {
        if id.0 >= self.next {
            self.next = id.0.wrapping_add(1);
        }
    }
}
