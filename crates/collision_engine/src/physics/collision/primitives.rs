//! Primitive collision shapes
//!
//! Provides the geometric primitives (bounding spheres, triangles, segments,
//! planes) the collision tests operate on.

use crate::foundation::math::{utils, Vec3};
use super::error::CollisionError;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Builds a sphere that contains every point
    ///
    /// The center is the center of the points' axis-aligned bounding box (not
    /// the centroid) and the radius is the largest distance from that center
    /// to any point. Cheap and always containing, but not minimal.
    ///
    /// An empty slice yields a zero sphere at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((min, max)) = utils::component_bounds(points) else {
            return Self::new(Vec3::zeros(), 0.0);
        };

        let center = (min + max) * 0.5;
        let radius = points
            .iter()
            .map(|p| (p - center).magnitude())
            .fold(0.0_f32, f32::max);

        Self { center, radius }
    }

    /// Builds the bounding sphere of three triangle vertices
    pub fn from_triangle(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self::from_points(&[v0, v1, v2])
    }

    /// Check if this sphere overlaps another
    ///
    /// Strict: spheres whose centers are exactly `radius_a + radius_b` apart
    /// do not overlap.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance = (other.center - self.center).magnitude();
        distance < self.radius + other.radius
    }

    /// True if `point` lies within the sphere, allowing `tolerance` slack
    pub fn contains_point(&self, point: &Vec3, tolerance: f32) -> bool {
        (point - self.center).magnitude() <= self.radius + tolerance
    }

    /// Move the sphere without changing its radius
    pub fn translate(&mut self, offset: &Vec3) {
        self.center += offset;
    }
}

/// A directed line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start (t = 0)
    pub start: Vec3,
    /// Segment end (t = 1)
    pub end: Vec3,
}

impl LineSegment {
    /// Creates a new segment
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// `end - start`
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Point at parameter `t`; `t` in `[0, 1]` stays on the segment
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + self.direction() * t
    }
}

/// A plane given by one point in it and a normal
///
/// The normal does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Any point in the plane
    pub point: Vec3,
    /// Plane normal, not necessarily normalized
    pub normal: Vec3,
}

impl Plane {
    /// Creates a new plane
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// A triangle with a cached bounding sphere
///
/// The sphere is a cache owned by the caller: after writing to `v0`, `v1` or
/// `v2` directly, call [`Triangle::refresh_bounding_sphere`] before the next
/// broad-phase query. [`Triangle::translate`] and [`Triangle::set_vertices`]
/// keep it current on their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v0: Vec3,
    /// Second vertex
    pub v1: Vec3,
    /// Third vertex
    pub v2: Vec3,
    /// Sphere containing all three vertices
    pub bounding_sphere: BoundingSphere,
}

impl Triangle {
    /// Creates a new triangle and computes its bounding sphere
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            bounding_sphere: BoundingSphere::from_triangle(v0, v1, v2),
        }
    }

    /// Like [`Triangle::new`] but rejects NaN or infinite coordinates
    pub fn try_new(v0: Vec3, v1: Vec3, v2: Vec3) -> Result<Self, CollisionError> {
        for (index, vertex) in [v0, v1, v2].into_iter().enumerate() {
            if !utils::is_finite(&vertex) {
                return Err(CollisionError::NonFiniteVertex { index, vertex });
            }
        }
        Ok(Self::new(v0, v1, v2))
    }

    /// The three vertices in order
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Replace all vertices and recompute the bounding sphere
    pub fn set_vertices(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) {
        *self = Self::new(v0, v1, v2);
    }

    /// Recompute the bounding sphere from the current vertices
    pub fn refresh_bounding_sphere(&mut self) {
        self.bounding_sphere = BoundingSphere::from_triangle(self.v0, self.v1, self.v2);
    }

    /// Move the triangle and its bounding sphere by `offset`
    pub fn translate(&mut self, offset: &Vec3) {
        self.v0 += offset;
        self.v1 += offset;
        self.v2 += offset;
        self.bounding_sphere.translate(offset);
    }

    /// Face normal `(v1 - v0) x (v2 - v0)`, not normalized
    ///
    /// Recomputed on every call; its length is twice the triangle's area.
    pub fn face_normal(&self) -> Vec3 {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        edge1.cross(&edge2)
    }

    /// The plane the triangle lies in
    pub fn plane(&self) -> Plane {
        Plane::new(self.v0, self.face_normal())
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Edges `v0 -> v1`, `v1 -> v2`, `v2 -> v0`
    pub fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.v0, self.v1),
            LineSegment::new(self.v1, self.v2),
            LineSegment::new(self.v2, self.v0),
        ]
    }

    /// True if the vertices are collinear or coincident
    pub fn is_degenerate(&self) -> bool {
        self.face_normal().magnitude_squared() <= f32::EPSILON * f32::EPSILON
    }
}
