// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer composition.
//!
//! Build a small map document: a root layer with terrain and road children,
//! each carrying a palette and a raster, then walk it depth-first.
//!
//! Run:
//! - `cargo run -p understory_demos --example layer_composition`

use kurbo::{Circle, Line, Point};
use understory_layer::{Color, Composition, LayerId};
use understory_raster::Quadtree;

fn walk(doc: &Composition<&'static str, u32>, id: LayerId, depth: usize) {
    // Child lists are unchecked; bound the walk.
    if depth > 8 {
        return;
    }
    let Some(layer) = doc.layer(id) else {
        return;
    };
    let leaves = layer.quadtree().map_or(0, Quadtree::leaf_count);
    println!(
        "{:indent$}{} ({}): {} colors, {} leaves",
        "",
        layer.name(),
        layer.id(),
        layer.colors().len(),
        leaves,
        indent = depth * 2
    );
    for child in doc.children(id) {
        walk(doc, child.id(), depth + 1);
    }
}

fn main() {
    env_logger::init();

    let mut doc: Composition<&'static str, u32> = Composition::new();
    let map = doc.create_layer("map");
    let terrain = doc.create_layer("terrain");
    let roads = doc.create_layer("roads");
    doc.add_child(map, terrain).unwrap();
    doc.add_child(map, roads).unwrap();

    if let Some(layer) = doc.layer_mut(terrain) {
        layer.add_color(Color::new("grass", 0x3a7d44));
        layer.add_color(Color::new("water", 0x1f4e79));
        let mut raster = Quadtree::new("grass");
        raster.fill_circle(Circle::new(Point::new(1.0, 0.0), 0.7), "water", 6);
        layer.set_quadtree(raster);
    }

    if let Some(layer) = doc.layer_mut(roads) {
        layer.add_color(Color::new("asphalt", 0x333333));
        let mut raster = Quadtree::new("none");
        raster.draw_line(
            Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            0.08,
            "asphalt",
            6,
        );
        layer.set_quadtree(raster);
    }

    walk(&doc, map, 0);
}
