use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Triangle;

/// Indicates an inconsistency while building a [`MeshGroup`] from an indexed mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshGroupError {
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index}, but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-range vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
}

/// The triangles of one source object, together with the object bound.
///
/// This is the unit the voxelizer rejects at once: if a cell does not intersect
/// [`MeshGroup::aabb`], none of the group's triangles are tested against that cell.
/// The bound is therefore expected to enclose every triangle of the group.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshGroup {
    aabb: Aabb,
    triangles: Vec<Triangle>,
}

impl MeshGroup {
    /// Creates a group from an object bound supplied by the host and its triangles.
    ///
    /// The bound is kept as-is, so it may be looser than the triangles (e.g. a render
    /// bound), but triangle parts lying outside of it will never be voxelized.
    pub fn new(aabb: Aabb, triangles: Vec<Triangle>) -> Self {
        Self { aabb, triangles }
    }

    /// Creates a group whose bound is the tight AABB of `triangles`.
    ///
    /// An empty group gets an invalid bound that intersects nothing.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let aabb = Aabb::from_points(
            triangles
                .iter()
                .flat_map(|tri| tri.vertices().iter().copied()),
        );
        Self { aabb, triangles }
    }

    /// Creates a group from an indexed triangle mesh transformed by `transform`.
    ///
    /// Every index is checked before any triangle is built, so a malformed mesh is
    /// rejected as a whole.
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use trivox3d::math::Isometry;
    /// use trivox3d::na::{Point3, Vector3};
    /// use trivox3d::shape::{MeshGroup, MeshGroupError};
    ///
    /// let vertices = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let pos = Isometry::translation(0.0, 0.0, 2.0);
    ///
    /// let group = MeshGroup::from_indexed(&pos, &vertices, &[[0, 1, 2]]).unwrap();
    /// assert_eq!(group.aabb().mins, Point3::new(0.0, 0.0, 2.0));
    ///
    /// let err = MeshGroup::from_indexed(&pos, &vertices, &[[0, 1, 3]]).unwrap_err();
    /// assert!(matches!(err, MeshGroupError::IndexOutOfBounds { index: 3, .. }));
    /// # }
    /// ```
    pub fn from_indexed(
        transform: &Isometry<Real>,
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<Self, MeshGroupError> {
        let num_vertices = vertices.len();

        for (tri_id, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|i| **i as usize >= num_vertices) {
                return Err(MeshGroupError::IndexOutOfBounds {
                    triangle: tri_id as u32,
                    index: *bad,
                    num_vertices: num_vertices as u32,
                });
            }
        }

        let triangles = indices
            .iter()
            .map(|idx| Triangle::from(idx.map(|i| transform * vertices[i as usize])))
            .collect();

        Ok(Self::from_triangles(triangles))
    }

    /// The bound of this object.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The triangles of this object.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The number of triangles of this object.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Does this group contain no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
