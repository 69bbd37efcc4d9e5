// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: node state, subdivision, merging, and traversal.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Affine, Rect, Vec2};

use crate::error::QuadtreeError;

/// Position of a child within its parent cell.
///
/// The discriminant is the child index; the order is fixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Index 0, origin `(0, 0)`.
    TopLeft = 0,
    /// Index 1, origin `(0.5, 0)`.
    TopRight = 1,
    /// Index 2, origin `(0, 0.5)`.
    BottomLeft = 2,
    /// Index 3, origin `(0.5, 0.5)`.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child index order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Child index of this quadrant.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quadrant for a child index.
    pub const fn from_index(index: usize) -> Result<Self, QuadtreeError> {
        match index {
            0 => Ok(Self::TopLeft),
            1 => Ok(Self::TopRight),
            2 => Ok(Self::BottomLeft),
            3 => Ok(Self::BottomRight),
            _ => Err(QuadtreeError::ChildIndexOutOfRange { index }),
        }
    }

    /// Origin of this quadrant in the parent's unit frame.
    pub const fn origin(self) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::new(0.0, 0.0),
            Self::TopRight => Vec2::new(0.5, 0.0),
            Self::BottomLeft => Vec2::new(0.0, 0.5),
            Self::BottomRight => Vec2::new(0.5, 0.5),
        }
    }

    /// Map applied to polygon vertices when descending into this quadrant.
    ///
    /// Halves the coordinates and offsets them by the quadrant origin:
    /// `(x, y) ↦ (0.5x + ox, 0.5y + oy)`.
    pub fn polygon_transform(self) -> Affine {
        Affine::translate(self.origin()) * Affine::scale(0.5)
    }

    /// Map applied to a circle center when descending into this quadrant.
    ///
    /// `(x, y) ↦ (2x − 2ox, 2y − 2oy)`; the radius doubles alongside.
    pub fn circle_transform(self) -> Affine {
        Affine::scale(2.0) * Affine::translate(-self.origin())
    }

    /// Bounds of this quadrant inside `parent`.
    pub fn cell_in(self, parent: Rect) -> Rect {
        let o = self.origin();
        let (w, h) = (parent.width(), parent.height());
        let x0 = parent.x0 + o.x * w;
        let y0 = parent.y0 + o.y * h;
        Rect::new(x0, y0, x0 + 0.5 * w, y0 + 0.5 * h)
    }
}

/// A region quadtree over the unit square.
///
/// A node is either a leaf holding one value or a divided node owning exactly
/// four children, never both. Divided nodes carry no value of their own.
/// Coordinates are local: every node sees itself as `[0,1]×[0,1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quadtree<V> {
    state: State<V>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State<V> {
    Leaf(V),
    Divided(Box<[Quadtree<V>; 4]>),
}

impl<V: Default> Default for Quadtree<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V> Quadtree<V> {
    /// Create a leaf holding `value`.
    pub const fn new(value: V) -> Self {
        Self {
            state: State::Leaf(value),
        }
    }

    /// Create a divided node from four children in index order.
    ///
    /// The result is not merged; call [`Quadtree::merge_if_possible`] to normalize it.
    pub fn from_children(children: [Self; 4]) -> Self {
        Self {
            state: State::Divided(Box::new(children)),
        }
    }

    /// Turn this node into a leaf holding `value`, dropping any subtree.
    pub fn set_value(&mut self, value: V) {
        self.state = State::Leaf(value);
    }

    /// The value of a leaf; `None` for divided nodes.
    pub fn value(&self) -> Option<&V> {
        match &self.state {
            State::Leaf(value) => Some(value),
            State::Divided(_) => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.state, State::Leaf(_))
    }

    /// Whether this node owns four children.
    pub fn is_divided(&self) -> bool {
        matches!(self.state, State::Divided(_))
    }

    /// Child at `index`.
    ///
    /// Returns `Ok(None)` for a leaf and an error for indices outside `0..4`,
    /// whatever the node's state.
    pub fn child(&self, index: usize) -> Result<Option<&Self>, QuadtreeError> {
        let quadrant = Quadrant::from_index(index)?;
        Ok(self.quadrant(quadrant))
    }

    /// Mutable child at `index`. See [`Quadtree::child`].
    pub fn child_mut(&mut self, index: usize) -> Result<Option<&mut Self>, QuadtreeError> {
        let quadrant = Quadrant::from_index(index)?;
        Ok(self.quadrant_mut(quadrant))
    }

    /// Child in `quadrant`, if divided.
    pub fn quadrant(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Mutable child in `quadrant`, if divided.
    pub fn quadrant_mut(&mut self, quadrant: Quadrant) -> Option<&mut Self> {
        self.children_mut().map(|c| &mut c[quadrant.index()])
    }

    /// All four children in index order, if divided.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.state {
            State::Divided(children) => Some(children),
            State::Leaf(_) => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut [Self; 4]> {
        match &mut self.state {
            State::Divided(children) => Some(children),
            State::Leaf(_) => None,
        }
    }

    /// Height of the subtree; 0 for a leaf.
    pub fn depth(&self) -> usize {
        match &self.state {
            State::Leaf(_) => 0,
            State::Divided(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.state {
            State::Leaf(_) => 1,
            State::Divided(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Iterate all leaves with their bounds in this node's unit frame.
    ///
    /// Leaves are yielded in pre-order, children in index order.
    pub fn leaves(&self) -> Leaves<'_, V> {
        Leaves {
            stack: alloc::vec![(self, Rect::new(0.0, 0.0, 1.0, 1.0))],
        }
    }
}

impl<V: Clone> Quadtree<V> {
    /// Split a leaf into four leaves that inherit its value.
    ///
    /// Does nothing if the node is already divided.
    pub fn subdivide(&mut self) {
        if let State::Leaf(value) = &self.state {
            let children = Box::new(core::array::from_fn(|_| Self::new(value.clone())));
            self.state = State::Divided(children);
        }
    }
}

impl<V: Clone + Eq> Quadtree<V> {
    /// Collapse uniform regions, bottom-up.
    ///
    /// Children are normalized first; a divided node then becomes a leaf when
    /// all four children are leaves holding equal values. Equality is `V`'s
    /// [`Eq`], so the outcome is deterministic for any value type accepted here.
    pub fn merge_if_possible(&mut self) {
        let State::Divided(children) = &mut self.state else {
            return;
        };
        for child in children.iter_mut() {
            child.merge_if_possible();
        }
        let Some(first) = children[0].value() else {
            return;
        };
        if children[1..].iter().all(|c| c.value() == Some(first)) {
            let merged = first.clone();
            log::trace!("collapsing four uniform quadrants into a leaf");
            self.state = State::Leaf(merged);
        }
    }

    /// Whether no divided node in the subtree could still be merged.
    pub fn is_normalized(&self) -> bool {
        let Some(children) = self.children() else {
            return true;
        };
        if !children.iter().all(Self::is_normalized) {
            return false;
        }
        match children[0].value() {
            Some(first) => !children[1..].iter().all(|c| c.value() == Some(first)),
            None => true,
        }
    }
}

/// Iterator over the leaves of a [`Quadtree`]. See [`Quadtree::leaves`].
#[derive(Debug)]
pub struct Leaves<'a, V> {
    stack: Vec<(&'a Quadtree<V>, Rect)>,
}

impl<'a, V> Iterator for Leaves<'a, V> {
    type Item = (Rect, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, bounds)) = self.stack.pop() {
            match &node.state {
                State::Leaf(value) => return Some((bounds, value)),
                State::Divided(children) => {
                    for quadrant in Quadrant::ALL.into_iter().rev() {
                        self.stack
                            .push((&children[quadrant.index()], quadrant.cell_in(bounds)));
                    }
                }
            }
        }
        None
    }
}
