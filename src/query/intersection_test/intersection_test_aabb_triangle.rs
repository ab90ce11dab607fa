use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// This is an exact separating-axis test over the 13 candidate axes of a box/triangle
/// pair: the 3 box face normals, the 9 cross products between the triangle edges and the
/// box axes, and the triangle normal. Shapes that only touch are considered intersecting.
///
/// Degenerate triangles are supported: their normal axis is simply not tested.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use trivox3d::bounding_volume::Aabb;
/// use trivox3d::query::intersection_test_aabb_triangle;
/// use trivox3d::shape::Triangle;
/// use trivox3d::na::{Point3, Vector3};
///
/// let aabb = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));
/// let crossing = Triangle::new(
///     Point3::new(-5.0, -5.0, 0.0),
///     Point3::new(5.0, -5.0, 0.0),
///     Point3::new(0.0, 5.0, 0.0),
/// );
/// let above = Triangle::new(
///     Point3::new(-5.0, -5.0, 1.5),
///     Point3::new(5.0, -5.0, 1.5),
///     Point3::new(0.0, 5.0, 1.5),
/// );
///
/// assert!(intersection_test_aabb_triangle(&aabb, &crossing));
/// assert!(!intersection_test_aabb_triangle(&aabb, &above));
/// # }
/// ```
#[inline]
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    intersection_test_aabb_triangle_with_normal(aabb1, triangle2, &triangle2.scaled_normal())
}

/// Tests if a triangle intersects an AABB, using a precomputed triangle normal.
///
/// The `normal` only needs to be collinear with the actual triangle normal, its norm is
/// irrelevant. A zero (or non-finite) `normal` disables the triangle-normal axis, which is
/// how degenerate triangles are handled.
pub fn intersection_test_aabb_triangle_with_normal(
    aabb1: &Aabb,
    triangle2: &Triangle,
    normal: &Vector<Real>,
) -> bool {
    let center = aabb1.center();
    let half_extents = aabb1.half_extents();

    // Triangle vertices in the local-space of the box.
    let v0 = triangle2.a - center.coords;
    let v1 = triangle2.b - center.coords;
    let v2 = triangle2.c - center.coords;

    // Box face normals.
    for i in 0..3 {
        let min = v0[i].min(v1[i]).min(v2[i]);
        let max = v0[i].max(v1[i]).max(v2[i]);

        if min > half_extents[i] || max < -half_extents[i] {
            return false;
        }
    }

    // Edge × box axis. Both endpoints of an edge project onto the same value on these
    // axes, so only the edge origin and the opposite vertex are projected.
    let edges = [(v1 - v0, v0, v2), (v2 - v1, v1, v0), (v0 - v2, v2, v1)];

    for (edge, origin, opposite) in &edges {
        if edge_axes_separate(edge, origin, opposite, &half_extents) {
            return false;
        }
    }

    // Triangle normal.
    if normal.iter().all(|n| n.is_finite()) && *normal != Vector::zeros() {
        return plane_box_overlap(normal, &v0, &half_extents);
    }

    true
}

/// Tests the three axes `edge × x`, `edge × y` and `edge × z`.
#[inline]
fn edge_axes_separate(
    edge: &Vector<Real>,
    origin: &Point<Real>,
    opposite: &Point<Real>,
    half_extents: &Vector<Real>,
) -> bool {
    let fe = edge.abs();

    // edge × x = (0, e.z, -e.y)
    let p0 = edge.z * origin.y - edge.y * origin.z;
    let p1 = edge.z * opposite.y - edge.y * opposite.z;
    let rad = fe.z * half_extents.y + fe.y * half_extents.z;
    if interval_separated(p0, p1, rad) {
        return true;
    }

    // edge × y = (-e.z, 0, e.x)
    let p0 = edge.x * origin.z - edge.z * origin.x;
    let p1 = edge.x * opposite.z - edge.z * opposite.x;
    let rad = fe.z * half_extents.x + fe.x * half_extents.z;
    if interval_separated(p0, p1, rad) {
        return true;
    }

    // edge × z = (e.y, -e.x, 0)
    let p0 = edge.y * origin.x - edge.x * origin.y;
    let p1 = edge.y * opposite.x - edge.x * opposite.y;
    let rad = fe.y * half_extents.x + fe.x * half_extents.y;
    interval_separated(p0, p1, rad)
}

#[inline]
fn interval_separated(p0: Real, p1: Real, rad: Real) -> bool {
    let (min, max) = if p0 < p1 { (p0, p1) } else { (p1, p0) };
    min > rad || max < -rad
}

/// Does the plane with normal `normal` passing through `vertex` intersect the box
/// centered at the origin with the given half-extents?
#[inline]
fn plane_box_overlap(
    normal: &Vector<Real>,
    vertex: &Point<Real>,
    half_extents: &Vector<Real>,
) -> bool {
    let mut vmin = Vector::zeros();
    let mut vmax = Vector::zeros();

    // Pick the box corners with the smallest and the largest projection on the normal.
    for i in 0..3 {
        if normal[i] > 0.0 {
            vmin[i] = -half_extents[i] - vertex[i];
            vmax[i] = half_extents[i] - vertex[i];
        } else {
            vmin[i] = half_extents[i] - vertex[i];
            vmax[i] = -half_extents[i] - vertex[i];
        }
    }

    if normal.dot(&vmin) > 0.0 {
        return false;
    }

    normal.dot(&vmax) >= 0.0
}
