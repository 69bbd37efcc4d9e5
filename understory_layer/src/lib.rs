// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_layer --heading-base-level=0

//! Understory Layer: named layers over [`understory_raster`] quadtrees.
//!
//! A [`Layer`] groups one raster with a name, a color palette, and child layers,
//! forming a drawing or map composition. It is a passive container; rendering
//! and command handling live elsewhere.
//!
//! - [`Layer`]: id, name, palette of [`Color`] entries, child handles, and an optional [`Quadtree`](understory_raster::Quadtree).
//! - [`LayerIds`]: explicit id generator; there is no process-wide counter.
//! - [`Composition`]: optional registry that owns layers and resolves child handles.
//!
//! ## Children form an unchecked graph
//!
//! Children are stored as [`LayerId`] handles. Neither [`Layer::add_child`] nor
//! [`Composition::add_child`] rejects repeats or cycles, so the child lists form a
//! shared-reference graph whose lifetime belongs to the registry, not to any parent.
//!
//! # Example
//!
//! ```rust
//! use understory_layer::{Color, Composition};
//! use understory_raster::Quadtree;
//!
//! let mut doc: Composition<u8, u32> = Composition::new();
//! let map = doc.create_layer("map");
//! let roads = doc.create_layer("roads");
//! doc.add_child(map, roads).unwrap();
//!
//! let layer = doc.layer_mut(roads).unwrap();
//! layer.add_color(Color::new("asphalt", 0x333333));
//! layer.set_quadtree(Quadtree::new(0));
//!
//! assert!(doc.layer(map).unwrap().includes_layer(roads));
//! assert!(doc.layer(roads).unwrap().includes_color("asphalt"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod composition;
pub mod error;
pub mod layer;
pub mod types;

pub use color::Color;
pub use composition::Composition;
pub use error::LayerError;
pub use layer::Layer;
pub use types::{LayerId, LayerIds};
