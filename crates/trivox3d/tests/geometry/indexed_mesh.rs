use na::{Isometry3, Point3, Vector3};
use trivox3d::bounding_volume::Aabb;
use trivox3d::shape::{MeshGroup, MeshGroupError};

fn tetrahedron() -> (Vec<Point3<f32>>, Vec<[u32; 3]>) {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
    (vertices, indices)
}

#[test]
fn indexed_mesh_is_moved_to_world_space() {
    let (vertices, indices) = tetrahedron();
    let shift = Vector3::new(2.0, -1.0, 0.5);
    let group =
        MeshGroup::from_indexed(&Isometry3::new(shift, na::zero()), &vertices, &indices).unwrap();

    assert_eq!(group.num_triangles(), 4);
    assert_eq!(
        *group.aabb(),
        Aabb::new(Point3::new(2.0, -1.0, 0.5), Point3::new(3.0, 0.0, 1.5))
    );

    for tri in group.triangles() {
        let bound = tri.local_aabb();
        assert!((0..3).all(|i| {
            group.aabb().mins[i] <= bound.mins[i] && bound.maxs[i] <= group.aabb().maxs[i]
        }));
    }
}

#[test]
fn out_of_bounds_index_is_rejected() {
    let (vertices, mut indices) = tetrahedron();
    indices.push([1, 4, 2]);

    let err = MeshGroup::from_indexed(&Isometry3::identity(), &vertices, &indices).unwrap_err();
    assert_eq!(
        err,
        MeshGroupError::IndexOutOfBounds {
            triangle: 4,
            index: 4,
            num_vertices: 4,
        }
    );
}

#[test]
fn empty_index_buffer_gives_empty_group() {
    let (vertices, _) = tetrahedron();
    let group = MeshGroup::from_indexed(&Isometry3::identity(), &vertices, &[]).unwrap();

    assert!(group.is_empty());
    assert_eq!(*group.aabb(), Aabb::new_invalid());
}
