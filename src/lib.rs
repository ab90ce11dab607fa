/*!
trivox
========

**trivox** converts triangle meshes into axis-aligned voxel occupancy grids.

The two building blocks are an exact triangle/box intersection test based on the
separating axis theorem ([`query::intersection_test_aabb_triangle`]) and a
[`Voxelizer`](transformation::voxelization::Voxelizer) that walks every cell of a
regular grid, rejecting whole objects with cheap box-box tests before running the
exact test on individual triangles.

```
# #[cfg(feature = "f32")] {
use trivox3d::bounding_volume::Aabb;
use trivox3d::na::{Point3, Vector3};
use trivox3d::shape::{MeshGroup, Triangle};
use trivox3d::transformation::voxelization::Voxelizer;

let region = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(0.5));
let triangle = Triangle::new(
    Point3::new(0.1, 0.1, 0.1),
    Point3::new(0.2, 0.1, 0.1),
    Point3::new(0.1, 0.2, 0.1),
);
let group = MeshGroup::from_triangles(vec![triangle]);

let voxelizer = Voxelizer::new(region, [2, 2, 2]).unwrap();
let grid = voxelizer.voxelize(&[group]).unwrap();

assert!(grid.is_occupied(1, 1, 1));
assert_eq!(grid.num_occupied(), 1);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
