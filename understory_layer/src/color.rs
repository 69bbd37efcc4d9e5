// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named palette entries.

use alloc::string::String;

/// A palette entry: a name and an opaque color value.
///
/// Names are lookup keys but are not required to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color<C> {
    name: String,
    color: C,
}

impl<C> Color<C> {
    /// Create a palette entry.
    pub fn new(name: impl Into<String>, color: C) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the entry.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Color value.
    pub fn color(&self) -> &C {
        &self.color
    }

    /// Replace the color value.
    pub fn set_color(&mut self, color: C) {
        self.color = color;
    }
}
