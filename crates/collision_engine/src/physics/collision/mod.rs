//! Collision geometry and intersection tests
//!
//! Provides the bounding volumes and exact tests behind the two-phase
//! triangle collision query.
//!
//! # Module Organization
//!
//! - [`primitives`] - Bounding spheres, triangles, segments, planes
//! - [`intersection`] - Segment/plane, point-in-triangle and triangle piercing tests
//! - [`mesh`] - Triangle soups with an enclosing sphere
//! - [`error`] - Errors from the checked constructors

pub mod error;
pub mod primitives;
pub mod intersection;
pub mod mesh;

// Re-export commonly used types
pub use error::CollisionError;
pub use primitives::{BoundingSphere, LineSegment, Plane, Triangle};
pub use intersection::{
    point_in_triangle,
    segment_plane_intersection,
    triangle_pierces,
};
pub use mesh::CollisionMesh;
