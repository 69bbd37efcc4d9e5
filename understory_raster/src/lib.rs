// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_raster --heading-base-level=0

//! Understory Raster: a sparse, self-normalizing region quadtree.
//!
//! Understory Raster records one discrete value per spatial cell and merges
//! uniform regions so memory tracks the detail actually painted.
//!
//! - A [`Quadtree`] node is either a leaf holding a value or a divided node owning exactly four children.
//! - Shapes are painted with [`Quadtree::fill_polygon`], [`Quadtree::fill_circle`], and [`Quadtree::draw_line`].
//! - Every fill re-normalizes with [`Quadtree::merge_if_possible`], so equal siblings never linger.
//!
//! ## Coordinates
//!
//! Every node sees itself as the unit square `[0,1]×[0,1]`, with y growing downward.
//! No absolute bounds are stored: descending into a child rescales the shape into that
//! child's own frame (see [`Quadrant::polygon_transform`] and [`Quadrant::circle_transform`]).
//! Children are indexed 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
//!
//! ## Coverage
//!
//! At depth zero a cell is painted when the shape covers its center.
//! Above that, cells are classified by their four corners ([`Coverage`]):
//! all inside paints the cell whole, none inside leaves it untouched, and a mix subdivides.
//! Requested depths are clamped to [`MAX_FILL_DEPTH`].
//!
//! ## Values
//!
//! Merging compares values with [`Eq`], so the value type must have deterministic equality.
//! Float payloads should be wrapped in a type that defines it.
//!
//! ## Rendering
//!
//! This crate does no rendering. Walk the tree with [`Quadtree::children`] and
//! [`Quadtree::value`], or use [`Quadtree::leaves`] to get every leaf with its bounds.
//!
//! # Example
//!
//! ```rust
//! use understory_raster::Quadtree;
//! use kurbo::{Circle, Point};
//!
//! let mut raster = Quadtree::new(0_u8);
//!
//! // A circle centered on the top-left corner: only nearby cells are painted.
//! raster.fill_circle(Circle::new(Point::new(0.0, 0.0), 0.9), 1, 4);
//! assert!(raster.is_divided());
//! assert!(raster.is_normalized());
//!
//! // A polygon that covers every corner paints the whole raster in one leaf.
//! let cover = [
//!     Point::new(-0.1, -0.1),
//!     Point::new(1.1, -0.1),
//!     Point::new(1.1, 1.1),
//!     Point::new(-0.1, 1.1),
//! ];
//! raster.fill_polygon(&cover, 2, 4);
//! assert_eq!(raster, Quadtree::new(2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod fill;
pub mod geometry;
pub mod quadtree;

pub use error::QuadtreeError;
pub use fill::MAX_FILL_DEPTH;
pub use geometry::{Corners, Coverage, point_in_polygon};
pub use quadtree::{Leaves, Quadrant, Quadtree};
