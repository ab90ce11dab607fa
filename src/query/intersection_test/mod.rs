//! Implementation details of the intersection tests.

pub use self::intersection_test_aabb_triangle::{
    intersection_test_aabb_triangle, intersection_test_aabb_triangle_with_normal,
};

mod intersection_test_aabb_triangle;
