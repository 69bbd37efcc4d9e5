// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape rasterization: polygon, circle, and line fills.
//!
//! Each fill classifies the current cell against the shape, paints it whole,
//! skips it, or subdivides and recurses with the shape mapped into each
//! child's frame. The node is merged after recursing, so a fill never leaves
//! mergeable siblings behind.

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;
use kurbo::{Circle, Line, Point, Vec2};

use crate::geometry::{Coverage, UNIT_CENTER, circle_contains_center, point_in_polygon};
use crate::quadtree::{Quadrant, Quadtree};

/// Deepest subdivision a fill will perform.
///
/// Requested depths above this are clamped. At this depth a cell is 2⁻³² of
/// the root's side, far below `f64` precision for typical coordinates.
pub const MAX_FILL_DEPTH: u32 = 32;

fn clamp_depth(max_depth: u32) -> u32 {
    if max_depth > MAX_FILL_DEPTH {
        log::warn!("fill depth {max_depth} exceeds limit, clamping to {MAX_FILL_DEPTH}");
        MAX_FILL_DEPTH
    } else {
        max_depth
    }
}

impl<V: Clone + Eq> Quadtree<V> {
    /// Paint the cells covered by `polygon` with `value`.
    ///
    /// At depth 0 only the cell center is sampled. Above that, a cell whose four
    /// corners are all inside is painted without subdividing, a cell with no
    /// corner inside is left untouched, and anything else is subdivided.
    pub fn fill_polygon(&mut self, polygon: &[Point], value: V, max_depth: u32) {
        let depth = clamp_depth(max_depth);
        log::trace!("fill_polygon: {} vertices, depth {depth}", polygon.len());
        self.fill_polygon_at(polygon, &value, depth);
    }

    fn fill_polygon_at(&mut self, polygon: &[Point], value: &V, depth: u32) {
        if depth == 0 {
            if point_in_polygon(polygon, UNIT_CENTER) {
                self.set_value(value.clone());
            }
            return;
        }
        match Coverage::of_polygon(polygon) {
            Coverage::Inside => self.set_value(value.clone()),
            Coverage::Outside => {}
            Coverage::Partial => {
                self.subdivide();
                if let Some(children) = self.children_mut() {
                    let mut mapped = Vec::with_capacity(polygon.len());
                    for quadrant in Quadrant::ALL {
                        let tf = quadrant.polygon_transform();
                        mapped.clear();
                        mapped.extend(polygon.iter().map(|&p| tf * p));
                        children[quadrant.index()].fill_polygon_at(&mapped, value, depth - 1);
                    }
                }
                self.merge_if_possible();
            }
        }
    }

    /// Paint the cells covered by `circle` with `value`.
    ///
    /// Same structure as [`Quadtree::fill_polygon`], classifying cells by the
    /// distance from the circle center to their corners.
    pub fn fill_circle(&mut self, circle: Circle, value: V, max_depth: u32) {
        let depth = clamp_depth(max_depth);
        log::trace!(
            "fill_circle: center {:?}, radius {}, depth {depth}",
            circle.center,
            circle.radius
        );
        self.fill_circle_at(circle, &value, depth);
    }

    fn fill_circle_at(&mut self, circle: Circle, value: &V, depth: u32) {
        if depth == 0 {
            if circle_contains_center(circle) {
                self.set_value(value.clone());
            }
            return;
        }
        match Coverage::of_circle(circle) {
            Coverage::Inside => self.set_value(value.clone()),
            Coverage::Outside => {}
            Coverage::Partial => {
                self.subdivide();
                if let Some(children) = self.children_mut() {
                    for quadrant in Quadrant::ALL {
                        let child = Circle::new(
                            quadrant.circle_transform() * circle.center,
                            circle.radius * 2.0,
                        );
                        children[quadrant.index()].fill_circle_at(child, value, depth - 1);
                    }
                }
                self.merge_if_possible();
            }
        }
    }

    /// Paint a capsule: a rectangle of `width` around `line` with round caps.
    ///
    /// The body and both caps are filled separately with the same value, so the
    /// overlap between them is harmless.
    pub fn draw_line(&mut self, line: Line, width: f64, value: V, max_depth: u32) {
        let depth = clamp_depth(max_depth);
        log::trace!("draw_line: {line:?}, width {width}, depth {depth}");
        let half = width / 2.0;
        let theta = (line.p1 - line.p0).atan2();
        let left = Vec2::from_angle(theta + FRAC_PI_2) * half;
        let right = Vec2::from_angle(theta - FRAC_PI_2) * half;
        let body = [
            line.p0 + left,
            line.p0 + right,
            line.p1 + right,
            line.p1 + left,
        ];
        self.fill_polygon_at(&body, &value, depth);
        self.fill_circle_at(Circle::new(line.p0, half), &value, depth);
        self.fill_circle_at(Circle::new(line.p1, half), &value, depth);
    }
}
