// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer container: a name, a palette, child layers, and one raster.

use alloc::string::String;
use alloc::vec::Vec;
use understory_raster::Quadtree;

use crate::color::Color;
use crate::types::{LayerId, LayerIds};

/// A named layer of a drawing.
///
/// Holds at most one [`Quadtree`] raster with values of type `V`, an ordered
/// palette of [`Color<C>`] entries, and an ordered list of child layers.
///
/// ## Children
///
/// Children are recorded as [`LayerId`] handles, not owned layers. Nothing
/// checks for cycles or repeats: a layer may be added under several parents,
/// several times under one parent, or under itself. Resolving handles and
/// deciding how deep to walk is left to whoever owns the layers, such as a
/// [`Composition`](crate::Composition).
#[derive(Clone, Debug)]
pub struct Layer<V, C> {
    id: LayerId,
    name: String,
    colors: Vec<Color<C>>,
    children: Vec<LayerId>,
    quadtree: Option<Quadtree<V>>,
}

impl<V, C> Layer<V, C> {
    /// Create an empty layer with a fresh id from `ids`.
    pub fn new(ids: &mut LayerIds, name: impl Into<String>) -> Self {
        Self::with_id(ids.next_id(), name)
    }

    pub(crate) fn with_id(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            colors: Vec::new(),
            children: Vec::new(),
            quadtree: None,
        }
    }

    /// Layer id.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the layer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // --- palette ---

    /// Append a palette entry. Duplicate names are kept.
    pub fn add_color(&mut self, color: Color<C>) {
        self.colors.push(color);
    }

    /// Palette entries in insertion order.
    pub fn colors(&self) -> &[Color<C>] {
        &self.colors
    }

    /// First palette entry named `name`.
    pub fn color(&self, name: &str) -> Option<&Color<C>> {
        self.colors.iter().find(|c| c.name() == name)
    }

    /// Whether any palette entry is named `name`.
    pub fn includes_color(&self, name: &str) -> bool {
        self.color(name).is_some()
    }

    // --- children ---

    /// Append `child` to this layer's children.
    pub fn add_child(&mut self, child: &Self) {
        self.add_child_id(child.id);
    }

    /// Append a child handle directly.
    pub fn add_child_id(&mut self, id: LayerId) {
        self.children.push(id);
    }

    /// Child handles in insertion order.
    pub fn children(&self) -> &[LayerId] {
        &self.children
    }

    /// Whether `id` is among the children.
    pub fn includes_layer(&self, id: LayerId) -> bool {
        self.children.contains(&id)
    }

    // --- raster ---

    /// Attach a raster root, returning the one it replaces.
    pub fn set_quadtree(&mut self, root: Quadtree<V>) -> Option<Quadtree<V>> {
        self.quadtree.replace(root)
    }

    /// The attached raster, if any.
    pub fn quadtree(&self) -> Option<&Quadtree<V>> {
        self.quadtree.as_ref()
    }

    /// The attached raster, mutably.
    pub fn quadtree_mut(&mut self) -> Option<&mut Quadtree<V>> {
        self.quadtree.as_mut()
    }

    /// Detach and return the raster.
    pub fn take_quadtree(&mut self) -> Option<Quadtree<V>> {
        self.quadtree.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestLayer = Layer<u8, u32>;

    #[test]
    fn new_layer_is_empty() {
        let mut ids = LayerIds::new();
        let layer = TestLayer::new(&mut ids, "base");
        assert_eq!(layer.id().get(), 1);
        assert_eq!(layer.name(), "base");
        assert!(layer.colors().is_empty());
        assert!(layer.children().is_empty());
        assert!(layer.quadtree().is_none());
    }

    #[test]
    fn ids_are_unique_per_generator() {
        let mut ids = LayerIds::new();
        let a = TestLayer::new(&mut ids, "a");
        let b = TestLayer::new(&mut ids, "b");
        assert_ne!(a.id(), b.id());
        assert!(b.id() > a.id());
    }

    #[test]
    fn rename_keeps_id() {
        let mut ids = LayerIds::new();
        let mut layer = TestLayer::new(&mut ids, "draft");
        let id = layer.id();
        layer.set_name("final");
        assert_eq!(layer.name(), "final");
        assert_eq!(layer.id(), id);
    }

    #[test]
    fn palette_allows_duplicates_and_finds_first() {
        let mut ids = LayerIds::new();
        let mut layer = TestLayer::new(&mut ids, "paint");
        layer.add_color(Color::new("red", 0xff0000));
        layer.add_color(Color::new("red", 0xcc0000));
        layer.add_color(Color::new("blue", 0x0000ff));
        assert_eq!(layer.colors().len(), 3);
        assert!(layer.includes_color("red"));
        assert!(!layer.includes_color("green"));
        assert_eq!(layer.color("red").map(Color::color), Some(&0xff0000));
    }

    #[test]
    fn children_are_unchecked_handles() {
        let mut ids = LayerIds::new();
        let mut parent = TestLayer::new(&mut ids, "parent");
        let child = TestLayer::new(&mut ids, "child");
        let other = TestLayer::new(&mut ids, "other");
        parent.add_child(&child);
        parent.add_child(&child);
        let self_id = parent.id();
        parent.add_child_id(self_id);
        assert_eq!(parent.children(), &[child.id(), child.id(), self_id]);
        assert!(parent.includes_layer(child.id()));
        assert!(parent.includes_layer(self_id));
        assert!(!parent.includes_layer(other.id()));
    }

    #[test]
    fn set_quadtree_releases_previous_root() {
        let mut ids = LayerIds::new();
        let mut layer = TestLayer::new(&mut ids, "raster");
        assert_eq!(layer.set_quadtree(Quadtree::new(1)), None);
        let old = layer.set_quadtree(Quadtree::new(2));
        assert_eq!(old, Some(Quadtree::new(1)));
        assert_eq!(layer.quadtree().and_then(Quadtree::value), Some(&2));

        if let Some(qt) = layer.quadtree_mut() {
            qt.subdivide();
        }
        assert!(layer.quadtree().is_some_and(Quadtree::is_divided));
        assert!(layer.take_quadtree().is_some());
        assert!(layer.quadtree().is_none());
    }
}
