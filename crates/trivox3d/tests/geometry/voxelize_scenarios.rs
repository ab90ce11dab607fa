use na::{Isometry3, Point3, Vector3};
use trivox3d::bounding_volume::Aabb;
use trivox3d::shape::{MeshGroup, Triangle};
use trivox3d::transformation::voxelization::Voxelizer;

fn unit_region() -> Aabb {
    Aabb::from_half_extents(Point3::origin(), Vector3::repeat(0.5))
}

/// Two triangles covering the square `[-s, s]²` at height `z`.
fn square(s: f32, z: f32) -> Vec<Triangle> {
    let a = Point3::new(-s, -s, z);
    let b = Point3::new(s, -s, z);
    let c = Point3::new(s, s, z);
    let d = Point3::new(-s, s, z);
    vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
}

#[test]
fn small_triangle_in_the_last_octant() {
    let voxelizer = Voxelizer::new(unit_region(), [2, 2, 2]).unwrap();
    let triangle = Triangle::new(
        Point3::new(0.1, 0.1, 0.1),
        Point3::new(0.2, 0.1, 0.1),
        Point3::new(0.1, 0.2, 0.1),
    );
    let grid = voxelizer
        .voxelize(&[MeshGroup::from_triangles(vec![triangle])])
        .unwrap();

    for k in 0..2 {
        for j in 0..2 {
            for i in 0..2 {
                assert_eq!(grid.is_occupied(i, j, k), [i, j, k] == [1, 1, 1]);
            }
        }
    }
}

#[test]
fn horizontal_plane_fills_one_layer() {
    let voxelizer = Voxelizer::new(unit_region(), [8, 8, 8]).unwrap();
    // z = 0.03 lies strictly inside the layer k = 4, which spans [0, 0.125].
    let grid = voxelizer
        .voxelize(&[MeshGroup::from_triangles(square(1.0, 0.03))])
        .unwrap();

    assert_eq!(grid.num_occupied(), 64);
    assert!(grid.occupied_cells().all(|[_, _, k]| k == 4));
}

#[test]
fn triangle_on_a_cell_boundary_marks_both_sides() {
    let voxelizer = Voxelizer::new(unit_region(), [2, 2, 2]).unwrap();
    // The plane z = 0 is shared by the layers k = 0 and k = 1.
    let grid = voxelizer
        .voxelize(&[MeshGroup::from_triangles(square(0.25, 0.0))])
        .unwrap();

    assert_eq!(grid.num_occupied(), 8);
}

#[test]
fn vertices_on_cell_edges_mark_every_touching_cell() {
    let voxelizer = Voxelizer::new(unit_region(), [2, 2, 2]).unwrap();
    // Every vertex lies on an edge shared by four cells, and each triangle edge lies on
    // a face shared by two cells. Touching counts as intersecting, so all the cells
    // sharing a point with the triangle are occupied: only the cell (0, 0, 0), which
    // lies strictly below the plane x + y + z = 0.5, stays empty.
    let triangle = Triangle::new(
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(0.0, 0.5, 0.0),
        Point3::new(0.0, 0.0, 0.5),
    );
    let grid = voxelizer
        .voxelize(&[MeshGroup::from_triangles(vec![triangle])])
        .unwrap();

    assert_eq!(grid.num_occupied(), 7);
    for k in 0..2 {
        for j in 0..2 {
            for i in 0..2 {
                assert_eq!(grid.is_occupied(i, j, k), [i, j, k] != [0, 0, 0]);
            }
        }
    }
}

#[test]
fn geometry_outside_the_region_is_ignored() {
    let voxelizer = Voxelizer::new(unit_region(), [4, 4, 4]).unwrap();
    let far = MeshGroup::from_triangles(square(0.2, 3.0));

    let grid = voxelizer.voxelize(&[far]).unwrap();
    assert_eq!(grid.num_occupied(), 0);
}

#[test]
fn objects_are_merged_into_one_grid() {
    let voxelizer = Voxelizer::new(unit_region(), [4, 4, 4]).unwrap();
    let low = MeshGroup::from_triangles(square(1.0, -0.3));
    let high = MeshGroup::from_triangles(square(1.0, 0.3));

    let grid_low = voxelizer.voxelize(&[low.clone()]).unwrap();
    let grid_high = voxelizer.voxelize(&[high.clone()]).unwrap();
    let grid = voxelizer.voxelize(&[low, high]).unwrap();

    assert_eq!(grid_low.num_occupied(), 16);
    assert_eq!(grid_high.num_occupied(), 16);
    assert_eq!(grid.num_occupied(), 32);

    for ((all, low), high) in grid
        .as_slice()
        .iter()
        .zip(grid_low.as_slice())
        .zip(grid_high.as_slice())
    {
        assert_eq!(*all, *low || *high);
    }
}

#[test]
fn object_bound_covering_the_region_is_equivalent() {
    let voxelizer = Voxelizer::new(unit_region(), [4, 4, 4]).unwrap();
    let triangles = square(1.0, 0.1);

    let tight = MeshGroup::from_triangles(triangles.clone());
    let covering = MeshGroup::new(unit_region(), triangles);

    assert_eq!(
        voxelizer.voxelize(&[tight]).unwrap(),
        voxelizer.voxelize(&[covering]).unwrap()
    );
}

#[test]
fn rotated_mesh_is_voxelized_in_world_space() {
    let voxelizer = Voxelizer::new(unit_region(), [4, 4, 4]).unwrap();
    let vertices = [
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
    ];
    let indices = [[0, 1, 2], [0, 2, 3]];

    // Rotating the z = 0.1 plane by 90° around the y axis yields the x = 0.1 plane.
    let pos = Isometry3::rotation(Vector3::y() * core::f32::consts::FRAC_PI_2)
        * Isometry3::translation(0.0, 0.0, 0.1);
    let group = MeshGroup::from_indexed(&pos, &vertices, &indices).unwrap();
    let grid = voxelizer.voxelize(&[group]).unwrap();

    // x = 0.1 lies in the column i = 2, which spans [0, 0.25].
    assert_eq!(grid.num_occupied(), 16);
    assert!(grid.occupied_cells().all(|[i, _, _]| i == 2));
}
