//! Non-persistent geometric queries.
//!
//! The only query needed for voxelization is the exact test between a triangle and an
//! axis-aligned box, [`intersection_test_aabb_triangle`]. The specific functions have the
//! form `intersection_test_[shape1]_[shape2]()`.

pub use self::intersection_test::{
    intersection_test_aabb_triangle, intersection_test_aabb_triangle_with_normal,
};

mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
