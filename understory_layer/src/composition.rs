// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry owning the layers of one drawing.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::error::LayerError;
use crate::layer::Layer;
use crate::types::{LayerId, LayerIds};

/// Owns a set of layers and resolves their child handles.
///
/// The composition issues ids for the layers it creates and keeps every
/// registered layer alive, so child lists can be followed without any layer
/// owning another. Like [`Layer::add_child`], [`Composition::add_child`] does
/// not look for cycles; callers walking the graph should bound their depth.
pub struct Composition<V, C> {
    ids: LayerIds,
    layers: BTreeMap<LayerId, Layer<V, C>>,
}

impl<V, C> core::fmt::Debug for Composition<V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let edges: usize = self.layers.values().map(|l| l.children().len()).sum();
        f.debug_struct("Composition")
            .field("ids", &self.ids)
            .field("layers", &self.layers.len())
            .field("child_edges", &edges)
            .finish_non_exhaustive()
    }
}

impl<V, C> Default for Composition<V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> Composition<V, C> {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self {
            ids: LayerIds::new(),
            layers: BTreeMap::new(),
        }
    }

    /// Create and register an empty layer.
    ///
    /// Never replaces a registered layer: ids already in use, which can come
    /// back once the generator wraps, are skipped.
    pub fn create_layer(&mut self, name: impl Into<String>) -> LayerId {
        let mut id = self.ids.next_id();
        while self.layers.contains_key(&id) {
            log::debug!("skipping {id}: already registered");
            id = self.ids.next_id();
        }
        self.layers.insert(id, Layer::with_id(id, name));
        id
    }

    /// Register a layer built elsewhere.
    ///
    /// Fails if a layer with the same id is already registered. Ids issued by
    /// this composition afterwards are greater than the inserted one.
    pub fn insert(&mut self, layer: Layer<V, C>) -> Result<LayerId, LayerError> {
        let id = layer.id();
        if self.layers.contains_key(&id) {
            log::debug!("rejecting {id}: already registered");
            return Err(LayerError::DuplicateLayer { id });
        }
        self.ids.skip_past(id);
        self.layers.insert(id, layer);
        Ok(id)
    }

    /// Look up a layer.
    pub fn layer(&self, id: LayerId) -> Option<&Layer<V, C>> {
        self.layers.get(&id)
    }

    /// Look up a layer mutably.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer<V, C>> {
        self.layers.get_mut(&id)
    }

    /// Append `child` to `parent`'s children. Both must be registered.
    pub fn add_child(&mut self, parent: LayerId, child: LayerId) -> Result<(), LayerError> {
        if !self.layers.contains_key(&child) {
            log::debug!("cannot add {child} under {parent}: child unknown");
            return Err(LayerError::UnknownLayer { id: child });
        }
        let Some(layer) = self.layers.get_mut(&parent) else {
            log::debug!("cannot add {child} under {parent}: parent unknown");
            return Err(LayerError::UnknownLayer { id: parent });
        };
        layer.add_child_id(child);
        Ok(())
    }

    /// Registered children of `id`, in order. Unregistered handles are skipped.
    pub fn children(&self, id: LayerId) -> impl Iterator<Item = &Layer<V, C>> + '_ {
        self.layers
            .get(&id)
            .map(|l| l.children())
            .unwrap_or_default()
            .iter()
            .filter_map(move |c| self.layers.get(c))
    }

    /// All registered layers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer<V, C>> + '_ {
        self.layers.values()
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layer is registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_raster::Quadtree;

    type TestComposition = Composition<u8, &'static str>;

    #[test]
    fn create_and_link_layers() {
        let mut comp = TestComposition::new();
        let root = comp.create_layer("root");
        let a = comp.create_layer("a");
        let b = comp.create_layer("b");
        comp.add_child(root, a).unwrap();
        comp.add_child(root, b).unwrap();

        let names: Vec<_> = comp.children(root).map(Layer::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(comp.layer(root).unwrap().includes_layer(b));
        assert_eq!(comp.len(), 3);
    }

    #[test]
    fn add_child_rejects_unknown_ids() {
        let mut comp = TestComposition::new();
        let root = comp.create_layer("root");
        let mut foreign = LayerIds::new();
        let stray = Layer::<u8, &str>::new(&mut foreign, "stray");
        let _ = foreign.next_id();
        let missing = foreign.next_id();
        assert_eq!(
            comp.add_child(root, missing),
            Err(LayerError::UnknownLayer { id: missing })
        );
        assert_eq!(
            comp.add_child(missing, root),
            Err(LayerError::UnknownLayer { id: missing })
        );
        // `stray` shares the root's id, so it cannot be registered.
        assert_eq!(
            comp.insert(stray),
            Err(LayerError::DuplicateLayer { id: root })
        );
        assert!(comp.layer(root).unwrap().children().is_empty());
    }

    #[test]
    fn inserted_layers_do_not_collide_with_new_ones() {
        let mut comp = TestComposition::new();
        let mut foreign = LayerIds::new();
        for _ in 0..4 {
            let _ = foreign.next_id();
        }
        let outside = Layer::new(&mut foreign, "outside");
        let outside_id = comp.insert(outside).unwrap();
        let fresh = comp.create_layer("fresh");
        assert!(fresh > outside_id);
        assert_eq!(comp.iter().count(), 2);
    }

    #[test]
    fn shared_and_cyclic_children_are_allowed() {
        let mut comp = TestComposition::new();
        let a = comp.create_layer("a");
        let b = comp.create_layer("b");
        let shared = comp.create_layer("shared");
        comp.add_child(a, shared).unwrap();
        comp.add_child(b, shared).unwrap();
        comp.add_child(shared, a).unwrap();
        assert_eq!(comp.children(a).count(), 1);
        assert_eq!(comp.children(b).count(), 1);
        assert_eq!(comp.children(shared).next().map(Layer::id), Some(a));
    }

    #[test]
    fn layers_carry_rasters() {
        let mut comp = TestComposition::new();
        let id = comp.create_layer("terrain");
        let layer = comp.layer_mut(id).unwrap();
        layer.set_quadtree(Quadtree::new(0));
        if let Some(qt) = layer.quadtree_mut() {
            qt.subdivide();
            qt.child_mut(0).unwrap().unwrap().set_value(1);
        }
        let qt = comp.layer(id).and_then(Layer::quadtree).unwrap();
        assert_eq!(qt.leaf_count(), 4);
    }

    #[test]
    fn wrapped_ids_never_replace_registered_layers() {
        let mut comp = TestComposition::new();
        let first = comp.create_layer("first");
        comp.ids.skip_past(LayerId::from_raw(u32::MAX - 1));
        let last = comp.create_layer("last");
        let zero = comp.create_layer("zero");
        let after = comp.create_layer("after");
        assert_eq!(last.get(), u32::MAX);
        assert_eq!(zero.get(), 0);
        assert_eq!(after.get(), 2);
        assert_eq!(comp.len(), 4);
        assert_eq!(comp.layer(first).map(Layer::name), Some("first"));
        assert_eq!(comp.layer(after).map(Layer::name), Some("after"));
    }

    #[test]
    fn unknown_parent_has_no_children() {
        let comp = TestComposition::default();
        let mut ids = LayerIds::new();
        assert_eq!(comp.children(ids.next_id()).count(), 0);
        assert!(comp.is_empty());
    }
}
