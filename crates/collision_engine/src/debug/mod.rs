//! Debug module for visualization and reporting helpers

pub mod collision_debug;

pub use collision_debug::{CollisionReport, ColorPair, FrameColors, VerdictColors, VerdictTally};
