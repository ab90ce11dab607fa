//! Transformation of triangle meshes into other representations.

/// Voxelization of sets of 3D triangle meshes into occupancy grids.
pub mod voxelization;
