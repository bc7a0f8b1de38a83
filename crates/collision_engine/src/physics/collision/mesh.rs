//! Collision mesh representation
//!
//! A triangle soup with one bounding sphere around all of it, so a pair of
//! objects can be rejected before any triangle pair is tested.

use crate::foundation::math::Vec3;
use super::error::CollisionError;
use super::primitives::{BoundingSphere, Triangle};

/// A collision mesh in world space
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionMesh {
    triangles: Vec<Triangle>,
    bounding_sphere: BoundingSphere,
}

impl CollisionMesh {
    /// Builds a mesh from triangles, rejecting an empty list
    pub fn try_from_triangles(triangles: Vec<Triangle>) -> Result<Self, CollisionError> {
        if triangles.is_empty() {
            return Err(CollisionError::EmptyMesh);
        }

        let bounding_sphere = Self::enclosing_sphere(&triangles);
        Ok(Self {
            triangles,
            bounding_sphere,
        })
    }

    /// Builds a mesh from a vertex list and triangle indices
    ///
    /// Trailing indices that do not form a full triangle are ignored.
    /// Out-of-range indices and non-finite vertices are errors.
    pub fn from_indexed(vertices: &[Vec3], indices: &[u32]) -> Result<Self, CollisionError> {
        let mut triangles = Vec::with_capacity(indices.len() / 3);

        for chunk in indices.chunks_exact(3) {
            let fetch = |i: u32| {
                vertices
                    .get(i as usize)
                    .copied()
                    .ok_or(CollisionError::IndexOutOfRange {
                        index: i,
                        vertex_count: vertices.len(),
                    })
            };
            triangles.push(Triangle::try_new(fetch(chunk[0])?, fetch(chunk[1])?, fetch(chunk[2])?)?);
        }

        Self::try_from_triangles(triangles)
    }

    /// Triangles in the mesh
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Sphere around every vertex of the mesh
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// Move every triangle and the enclosing sphere
    pub fn translate(&mut self, offset: &Vec3) {
        for triangle in &mut self.triangles {
            triangle.translate(offset);
        }
        self.bounding_sphere.translate(offset);
    }

    fn enclosing_sphere(triangles: &[Triangle]) -> BoundingSphere {
        let points: Vec<Vec3> = triangles.iter().flat_map(Triangle::vertices).collect();
        BoundingSphere::from_points(&points)
    }
}
