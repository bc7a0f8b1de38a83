//! # Collision Engine
//!
//! Triangle-versus-triangle collision detection with bounding-sphere culling.
//!
//! ## Features
//!
//! - **Broad Phase**: cached bounding spheres reject distant pairs cheaply
//! - **Narrow Phase**: edge/plane crossing plus angle-sum inside test, run in both directions
//! - **Scenarios**: TOML or RON files describing triangles, motion and tolerances
//! - **Scenes**: slot-map backed sets of triangles queried pairwise
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let small = Triangle::new(
//!     Vec3::new(1.0, -1.0, 1.0),
//!     Vec3::new(-1.0, 1.0, 1.0),
//!     Vec3::new(-3.0, -1.0, 1.0),
//! );
//! let large = Triangle::new(
//!     Vec3::new(0.0, 2.0, 0.0),
//!     Vec3::new(0.0, -2.0, 2.0),
//!     Vec3::new(0.0, -2.0, -2.0),
//! );
//!
//! let verdict = PairCollisionSystem::default().test_pair(&small, &large);
//! assert_eq!(verdict.spheres, CollisionVerdict::Yes);
//! assert_eq!(verdict.triangles, CollisionVerdict::Yes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

// Core modules
pub mod core;

pub mod config;
pub mod debug;
pub mod foundation;
pub mod physics;

/// Common imports for collision users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        core::config::{MotionConfig, NarrowPhaseTolerances, ScenarioConfig, StepConfig, TriangleConfig},
        debug::{CollisionReport, VerdictColors, VerdictTally},
        foundation::math::Vec3,
        physics::{
            BoundingSphere, CollisionError, CollisionMesh, CollisionScene, CollisionVerdict,
            NarrowPhase, PairCollisionSystem, PairVerdict, PingPongMotion, Triangle,
        },
    };
}
