// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a raster as ASCII by walking its leaves.
//!
//! Shows how a renderer maps each leaf's unit-frame bounds onto a pixel grid.
//!
//! Run:
//! - `cargo run -p understory_demos --example raster_ascii`

use kurbo::{Circle, Point};
use understory_raster::Quadtree;

const SIZE: usize = 32;

fn main() {
    env_logger::init();

    let mut raster = Quadtree::new(false);
    raster.fill_circle(Circle::new(Point::new(1.0, 1.0), 0.8), true, 5);
    raster.fill_circle(Circle::new(Point::new(0.0, 0.0), 0.4), true, 5);

    let mut pixels = [[' '; SIZE]; SIZE];
    for (bounds, &on) in raster.leaves() {
        if !on {
            continue;
        }
        let scale = SIZE as f64;
        let (x0, y0) = ((bounds.x0 * scale) as usize, (bounds.y0 * scale) as usize);
        let (x1, y1) = ((bounds.x1 * scale) as usize, (bounds.y1 * scale) as usize);
        for row in &mut pixels[y0..y1.min(SIZE)] {
            for px in &mut row[x0..x1.min(SIZE)] {
                *px = '#';
            }
        }
    }
    for row in pixels {
        println!("{}", row.iter().collect::<String>());
    }
    println!("{} leaves", raster.leaf_count());
}
