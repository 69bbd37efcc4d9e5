// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster basics.
//!
//! Paint a circle, a polygon, and a line into a quadtree and print its shape.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example raster_basics`

use kurbo::{Circle, Line, Point};
use understory_raster::Quadtree;

fn main() {
    env_logger::init();

    let mut raster = Quadtree::new('.');

    // Quarter disc hugging the top-left corner.
    raster.fill_circle(Circle::new(Point::new(0.0, 0.0), 0.6), 'o', 5);
    println!(
        "after circle: depth={}, leaves={}",
        raster.depth(),
        raster.leaf_count()
    );

    // Diagonal stroke with round caps.
    raster.draw_line(
        Line::new(Point::new(0.0, 1.0), Point::new(1.0, 0.0)),
        0.1,
        '#',
        5,
    );
    println!(
        "after line: depth={}, leaves={}",
        raster.depth(),
        raster.leaf_count()
    );
    assert!(raster.is_normalized());

    // A cover polygon collapses everything back into one leaf.
    let cover = [
        Point::new(-1.0, -1.0),
        Point::new(2.0, -1.0),
        Point::new(2.0, 2.0),
        Point::new(-1.0, 2.0),
    ];
    raster.fill_polygon(&cover, ' ', 5);
    println!("after cover: leaf={}", raster.is_leaf());
}
