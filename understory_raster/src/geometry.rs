// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage predicates against the unit square.
//!
//! Every quadtree node lives in its own `[0,1]×[0,1]` frame (y grows downward),
//! so the fill engine only ever asks two questions about a shape: does it cover
//! the cell center, and how many of the four cell corners does it cover.

use kurbo::{Circle, Point};

bitflags::bitflags! {
    /// Corners of the unit square.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        /// `(0, 0)`
        const TOP_LEFT     = 0b0000_0001;
        /// `(1, 0)`
        const TOP_RIGHT    = 0b0000_0010;
        /// `(0, 1)`
        const BOTTOM_LEFT  = 0b0000_0100;
        /// `(1, 1)`
        const BOTTOM_RIGHT = 0b0000_1000;
    }
}

/// Unit-square corners paired with their flag, in child index order.
pub const UNIT_CORNERS: [(Corners, Point); 4] = [
    (Corners::TOP_LEFT, Point::new(0.0, 0.0)),
    (Corners::TOP_RIGHT, Point::new(1.0, 0.0)),
    (Corners::BOTTOM_LEFT, Point::new(0.0, 1.0)),
    (Corners::BOTTOM_RIGHT, Point::new(1.0, 1.0)),
];

/// Center of the unit square; the only sample taken at depth zero.
pub const UNIT_CENTER: Point = Point::new(0.5, 0.5);

impl Corners {
    /// Corners of the unit square that lie inside `polygon` (even-odd rule).
    pub fn inside_polygon(polygon: &[Point]) -> Self {
        let mut mask = Self::empty();
        for (flag, corner) in UNIT_CORNERS {
            if point_in_polygon(polygon, corner) {
                mask |= flag;
            }
        }
        mask
    }
}

/// How a shape covers a cell, judged by its four corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// Every corner is covered; the cell can be painted whole.
    Inside,
    /// No corner is covered; the cell is left untouched.
    Outside,
    /// Mixed; the cell must be subdivided.
    Partial,
}

impl Coverage {
    /// Classify the unit square against a polygon.
    pub fn of_polygon(polygon: &[Point]) -> Self {
        let inside = Corners::inside_polygon(polygon);
        if inside.is_all() {
            Self::Inside
        } else if inside.is_empty() {
            Self::Outside
        } else {
            Self::Partial
        }
    }

    /// Classify the unit square against a circle.
    ///
    /// A corner at distance exactly `radius` counts as inside.
    pub fn of_circle(circle: Circle) -> Self {
        let mut inside = Corners::empty();
        let mut outside = Corners::empty();
        for (flag, corner) in UNIT_CORNERS {
            let d = corner.distance(circle.center);
            if d <= circle.radius {
                inside |= flag;
            }
            if d > circle.radius {
                outside |= flag;
            }
        }
        if inside.is_all() {
            Self::Inside
        } else if outside.is_all() {
            Self::Outside
        } else {
            Self::Partial
        }
    }
}

/// Even-odd ray casting test.
///
/// Casts a horizontal ray from `point` and counts crossings over every edge,
/// including the closing edge from the last vertex back to the first. Points
/// exactly on an edge get whatever classification the float arithmetic yields.
pub fn point_in_polygon(polygon: &[Point], point: Point) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    let mut inside = false;
    let mut prev = last;
    for &cur in polygon {
        // Horizontal edges never pass the first test, and a NaN intercept compares false.
        let crosses = ((cur.y > point.y) != (prev.y > point.y))
            && (point.x < (prev.x - cur.x) * (point.y - cur.y) / (prev.y - cur.y) + cur.x);
        if crosses {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}

/// Whether the circle covers the center of the unit square.
pub fn circle_contains_center(circle: Circle) -> bool {
    circle.center.distance(UNIT_CENTER) <= circle.radius
}
