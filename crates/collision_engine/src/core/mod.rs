//! # Core Module
//!
//! Shared configuration types used by the collision system and its drivers.
//!
//! ## Organization
//!
//! - **Config**: scenario files, motion, step schedule and tolerances

pub mod config;

// Re-export commonly used config types
pub use config::{
    MotionConfig,
    NarrowPhaseTolerances,
    ScenarioConfig,
    StepConfig,
    TriangleConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
