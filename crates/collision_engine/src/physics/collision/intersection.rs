//! Exact intersection tests used by the narrow phase
//!
//! - [`segment_plane_intersection`] - where a finite segment crosses a plane
//! - [`point_in_triangle`] - angle-sum inside test for a point in the triangle's plane
//! - [`triangle_pierces`] - whether any edge of one triangle passes through another
//!
//! Each test has a `_with` variant taking explicit [`NarrowPhaseTolerances`];
//! the plain versions use the defaults.
//!
//! The tolerances are absolute. The parallel check compares the raw
//! `dot(direction, normal)`, so it depends on both segment length and normal
//! length, and the angle-sum check accepts points slightly outside an edge.

use log::trace;

use crate::core::config::NarrowPhaseTolerances;
use crate::foundation::math::{constants, utils, Vec3};
use super::primitives::{LineSegment, Plane, Triangle};

/// Point where `segment` crosses `plane`, if it does
///
/// Returns `None` when the segment is parallel to the plane (within
/// [`constants::PARALLEL_TOLERANCE`], even if it lies in the plane) or when
/// the crossing lies before the start or past the end of the segment.
pub fn segment_plane_intersection(segment: &LineSegment, plane: &Plane) -> Option<Vec3> {
    segment_plane_intersection_with(segment, plane, constants::PARALLEL_TOLERANCE)
}

/// [`segment_plane_intersection`] with an explicit parallel tolerance
pub fn segment_plane_intersection_with(
    segment: &LineSegment,
    plane: &Plane,
    parallel_tolerance: f32,
) -> Option<Vec3> {
    let direction = segment.direction();

    let denom = direction.dot(&plane.normal);
    if denom.abs() < parallel_tolerance {
        return None;
    }

    let plane_offset = (plane.point - segment.start).dot(&plane.normal);
    let t = plane_offset / denom;

    // Plane behind the start, or not reached by the end
    if t < 0.0 || t > 1.0 {
        return None;
    }

    Some(segment.start + direction * t)
}

/// Sum of the angles subtended at `point` by the triangle's three edges
///
/// `None` if `point` coincides with a vertex, where the angles are undefined.
pub fn angle_sum(point: &Vec3, triangle: &Triangle) -> Option<f32> {
    let to_v0 = (point - triangle.v0).try_normalize(constants::ZERO_LENGTH_EPSILON)?;
    let to_v1 = (point - triangle.v1).try_normalize(constants::ZERO_LENGTH_EPSILON)?;
    let to_v2 = (point - triangle.v2).try_normalize(constants::ZERO_LENGTH_EPSILON)?;

    Some(
        utils::angle_between_unit(&to_v0, &to_v1)
            + utils::angle_between_unit(&to_v1, &to_v2)
            + utils::angle_between_unit(&to_v2, &to_v0),
    )
}

/// Whether a point already in the triangle's plane lies inside the triangle
///
/// Inside points see the three edges under angles summing to a full turn;
/// outside points see less. A point is inside when the sum is within
/// [`constants::ANGLE_SUM_TOLERANCE`] of [`constants::FULL_TURN_APPROX`].
/// Edges count as inside, and so do points a hair outside them. A point
/// exactly on a vertex is inside.
pub fn point_in_triangle(point: &Vec3, triangle: &Triangle) -> bool {
    point_in_triangle_with(point, triangle, &NarrowPhaseTolerances::default())
}

/// [`point_in_triangle`] with explicit tolerances
pub fn point_in_triangle_with(
    point: &Vec3,
    triangle: &Triangle,
    tolerances: &NarrowPhaseTolerances,
) -> bool {
    match angle_sum(point, triangle) {
        Some(total) => (total - tolerances.full_turn).abs() < tolerances.angle_sum,
        None => true,
    }
}

/// Whether an edge of `b` passes through the interior of `a`
///
/// One-directional: only `b`'s edges are tested against `a`'s plane. A
/// triangle whose edges all miss the other's interior is not detected, so
/// callers that need a symmetric answer run it both ways (see
/// [`PairCollisionSystem`](crate::physics::PairCollisionSystem)).
pub fn triangle_pierces(a: &Triangle, b: &Triangle) -> bool {
    triangle_pierces_with(a, b, &NarrowPhaseTolerances::default())
}

/// [`triangle_pierces`] with explicit tolerances
pub fn triangle_pierces_with(a: &Triangle, b: &Triangle, tolerances: &NarrowPhaseTolerances) -> bool {
    let plane = a.plane();

    for (index, edge) in b.edges().iter().enumerate() {
        let Some(point) = segment_plane_intersection_with(edge, &plane, tolerances.parallel) else {
            continue;
        };

        if point_in_triangle_with(&point, a, tolerances) {
            trace!("edge {} crosses the plane inside the triangle at {:?}", index, point);
            return true;
        }
    }

    false
}
