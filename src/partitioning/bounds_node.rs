use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, Vector};
use crate::query::details::intersection_test_aabb_triangle_with_normal;
use crate::shape::{MeshGroup, Triangle};

/// A triangle stored at a leaf of a [`BoundsNode`] hierarchy.
///
/// The normal and the AABB are computed once when the hierarchy is built, so every
/// cell test reuses them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LeafTriangle {
    triangle: Triangle,
    normal: Vector<Real>,
    aabb: Aabb,
}

impl LeafTriangle {
    /// Precomputes the normal and the tight AABB of `triangle`.
    ///
    /// The normal is kept unnormalized: the intersection test only needs its direction,
    /// and normalizing would overflow for large triangles.
    pub fn new(triangle: Triangle) -> Self {
        let normal = triangle.scaled_normal();
        let aabb = triangle.local_aabb();

        Self {
            triangle,
            normal,
            aabb,
        }
    }

    /// The triangle itself.
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// The normal of the triangle, scaled by twice its area.
    #[inline]
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The tight AABB of the triangle.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Is the normal of this triangle unusable?
    ///
    /// This is the case for zero-area triangles, and for triangles whose normal does not
    /// fit in a `Real`. The intersection test then ignores the normal axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector::zeros() || !self.normal.iter().all(|n| n.is_finite())
    }

    /// Exact intersection test between this triangle and `aabb`.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        intersection_test_aabb_triangle_with_normal(aabb, &self.triangle, &self.normal)
    }
}

/// A node of the bounding hierarchy used by the voxelizer.
///
/// The hierarchy built by [`BoundsNode::build`] has three levels:
/// 1. the root, bounded by the voxelized region, with one child per object;
/// 2. one internal node per object, bounded by the object bound, with one child per
///    triangle;
/// 3. one leaf per triangle, bounded by the triangle AABB.
///
/// Internal nodes let whole objects be rejected with a box-box test before their
/// triangles are tested exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundsNode {
    /// A node grouping other nodes under a common bound.
    Internal {
        /// The bound of this node.
        aabb: Aabb,
        /// The child nodes.
        children: Vec<BoundsNode>,
    },
    /// A node holding a single triangle.
    Leaf {
        /// The bound of this node, i.e., the triangle AABB.
        aabb: Aabb,
        /// The triangle.
        triangle: LeafTriangle,
    },
}

impl BoundsNode {
    /// Builds the region/object/triangle hierarchy of `groups`.
    pub fn build(region: Aabb, groups: &[MeshGroup]) -> Self {
        let mut num_degenerate = 0usize;

        let children = groups
            .iter()
            .map(|group| {
                let leaves = group
                    .triangles()
                    .iter()
                    .map(|tri| {
                        let triangle = LeafTriangle::new(*tri);
                        if triangle.is_degenerate() {
                            num_degenerate += 1;
                        }

                        BoundsNode::Leaf {
                            aabb: *triangle.aabb(),
                            triangle,
                        }
                    })
                    .collect();

                BoundsNode::Internal {
                    aabb: *group.aabb(),
                    children: leaves,
                }
            })
            .collect();

        if num_degenerate > 0 {
            log::debug!(
                "{} degenerate triangle(s) found: their normal axis will be ignored.",
                num_degenerate
            );
        }

        BoundsNode::Internal {
            aabb: region,
            children,
        }
    }

    /// The bound of this node.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        match self {
            BoundsNode::Internal { aabb, .. } | BoundsNode::Leaf { aabb, .. } => aabb,
        }
    }

    /// The children of this node. Empty for leaves.
    #[inline]
    pub fn children(&self) -> &[BoundsNode] {
        match self {
            BoundsNode::Internal { children, .. } => children,
            BoundsNode::Leaf { .. } => &[],
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, BoundsNode::Leaf { .. })
    }

    /// The number of triangles stored in this subtree.
    pub fn num_leaves(&self) -> usize {
        match self {
            BoundsNode::Internal { children, .. } => children.iter().map(Self::num_leaves).sum(),
            BoundsNode::Leaf { .. } => 1,
        }
    }

    /// Does at least one triangle of this subtree intersect `aabb`?
    ///
    /// Internal nodes whose bound does not intersect `aabb` are skipped entirely. The
    /// traversal stops at the first intersecting triangle.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        match self {
            BoundsNode::Internal {
                aabb: bound,
                children,
            } => {
                bound.intersects(aabb) && children.iter().any(|child| child.intersects_aabb(aabb))
            }
            BoundsNode::Leaf { triangle, .. } => triangle.intersects_aabb(aabb),
        }
    }
}
