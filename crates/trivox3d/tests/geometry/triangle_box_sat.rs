use na::{Point3, Vector3};
use oorandom::Rand32;
use trivox3d::bounding_volume::{Aabb, BoundingVolume};
use trivox3d::query::intersection_test_aabb_triangle;
use trivox3d::shape::Triangle;

fn random_point(rng: &mut Rand32, range: f32) -> Point3<f32> {
    Point3::new(
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
    )
}

fn random_triangle(rng: &mut Rand32, range: f32) -> Triangle {
    Triangle::new(
        random_point(rng, range),
        random_point(rng, range),
        random_point(rng, range),
    )
}

fn contains_point(aabb: &Aabb, pt: &Point3<f32>) -> bool {
    (0..3).all(|i| pt[i] >= aabb.mins[i] && pt[i] <= aabb.maxs[i])
}

fn random_box(rng: &mut Rand32) -> Aabb {
    let half_extents = Vector3::new(
        0.05 + rng.rand_float(),
        0.05 + rng.rand_float(),
        0.05 + rng.rand_float(),
    );
    Aabb::from_half_extents(random_point(rng, 1.0), half_extents)
}

#[test]
fn intersection_implies_overlapping_aabbs() {
    let mut rng = Rand32::new(0);

    for _ in 0..2000 {
        let tri = random_triangle(&mut rng, 3.0);
        let aabb = random_box(&mut rng);

        if intersection_test_aabb_triangle(&aabb, &tri) {
            assert!(aabb.intersects(&tri.local_aabb()), "{:?} {:?}", aabb, tri);
        }
    }
}

#[test]
fn sampled_points_inside_the_box_imply_intersection() {
    let mut rng = Rand32::new(42);
    let subdivs = 16;

    for _ in 0..2000 {
        let tri = random_triangle(&mut rng, 2.0);
        let aabb = random_box(&mut rng);

        // Shrink the box slightly so that samples found inside are not sitting on the
        // boundary up to rounding errors.
        let shrunk = Aabb::from_half_extents(
            aabb.center(),
            aabb.half_extents() - Vector3::repeat(1.0e-4),
        );
        let mut any_inside = false;

        for u in 0..=subdivs {
            for v in 0..=subdivs - u {
                let (bu, bv) = (u as f32 / subdivs as f32, v as f32 / subdivs as f32);
                let pt = tri.a + (tri.b - tri.a) * bu + (tri.c - tri.a) * bv;
                any_inside |= contains_point(&shrunk, &pt);
            }
        }

        if any_inside {
            assert!(intersection_test_aabb_triangle(&aabb, &tri), "{:?} {:?}", aabb, tri);
        }
    }
}

#[test]
fn result_is_invariant_by_vertex_permutation() {
    let mut rng = Rand32::new(7);

    for _ in 0..1000 {
        let tri = random_triangle(&mut rng, 2.0);
        let aabb = random_box(&mut rng);
        let expected = intersection_test_aabb_triangle(&aabb, &tri);

        let permutations = [
            Triangle::new(tri.b, tri.c, tri.a),
            Triangle::new(tri.c, tri.a, tri.b),
        ];

        for permuted in &permutations {
            assert_eq!(intersection_test_aabb_triangle(&aabb, permuted), expected);
        }
    }
}

#[test]
fn triangle_far_from_box_never_intersects() {
    let mut rng = Rand32::new(1234);
    let aabb = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));

    for _ in 0..500 {
        let shift = Vector3::new(0.0, 0.0, 2.5);
        let tri = random_triangle(&mut rng, 1.0);
        let tri = Triangle::new(tri.a + shift, tri.b + shift, tri.c + shift);
        assert!(!intersection_test_aabb_triangle(&aabb, &tri));
    }
}
