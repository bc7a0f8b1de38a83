//! Physics module for collision detection
//!
//! Provides bounding-sphere culling and exact triangle intersection, plus
//! small helpers for moving triangles and querying sets of them.

pub mod collision;
pub mod collision_system;
pub mod motion;
pub mod scene;

pub use collision::{
    BoundingSphere,
    CollisionError,
    CollisionMesh,
    LineSegment,
    Plane,
    Triangle,
};
pub use collision_system::{
    test_triangle_pair,
    AngleSumNarrowPhase,
    CollisionVerdict,
    MeshVerdict,
    NarrowPhase,
    PairCollisionSystem,
    PairVerdict,
};
pub use motion::PingPongMotion;
pub use scene::{CollisionScene, ScenePair, TriangleKey};
