/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes with a constant time
/// intersection test. The voxelizer relies on it to reject a whole object before
/// testing its triangles.
pub trait BoundingVolume {
    /// Checks if this bounding volume intersects another one. Touching volumes
    /// intersect.
    fn intersects(&self, _: &Self) -> bool;
}
