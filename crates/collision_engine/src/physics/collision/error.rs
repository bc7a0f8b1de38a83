//! Errors raised while building collision geometry

use thiserror::Error;

use crate::foundation::math::Vec3;

/// Collision geometry errors
///
/// Only the checked constructors return these. Queries on already-built
/// geometry always produce a verdict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A vertex has a NaN or infinite coordinate
    #[error("vertex {index} is not finite: ({}, {}, {})", .vertex.x, .vertex.y, .vertex.z)]
    NonFiniteVertex {
        /// Index of the offending vertex
        index: usize,
        /// The vertex as given
        vertex: Vec3,
    },

    /// A triangle index points past the end of the vertex list
    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The index as given
        index: u32,
        /// Number of vertices available
        vertex_count: usize,
    },

    /// A mesh was built from zero triangles
    #[error("collision mesh has no triangles")]
    EmptyMesh,
}
