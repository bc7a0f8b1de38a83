//! Collision-specific debug output
//!
//! Turns verdicts into what a viewer shows: a color per triangle and per
//! bounding sphere, and a one-line console report per query.

use std::fmt;

use crate::foundation::math::Vec3;
use crate::physics::collision_system::{CollisionVerdict, PairVerdict};

/// Colors for one object: resting and colliding
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    /// Color when the verdict is `No` or `NotChecked`
    pub resting: Vec3,
    /// Color when the verdict is `Yes`
    pub colliding: Vec3,
}

impl ColorPair {
    /// Pick the color for a verdict
    pub fn for_verdict(&self, verdict: CollisionVerdict) -> Vec3 {
        if verdict.is_yes() {
            self.colliding
        } else {
            self.resting
        }
    }
}

/// Color scheme for collision visualization (RGB, 0..1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerdictColors {
    /// First triangle and its sphere
    pub first: ColorPair,
    /// Second triangle and its sphere
    pub second: ColorPair,
}

impl Default for VerdictColors {
    fn default() -> Self {
        Self {
            first: ColorPair {
                resting: Vec3::new(0.0, 0.0, 1.0),   // Blue
                colliding: Vec3::new(1.0, 0.0, 0.0), // Red
            },
            second: ColorPair {
                resting: Vec3::new(0.0, 1.0, 0.0),   // Green
                colliding: Vec3::new(1.0, 1.0, 0.0), // Yellow
            },
        }
    }
}

/// Colors to draw one frame with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameColors {
    /// First triangle, from the triangle verdict
    pub first_triangle: Vec3,
    /// First sphere, from the sphere verdict
    pub first_sphere: Vec3,
    /// Second triangle, from the triangle verdict
    pub second_triangle: Vec3,
    /// Second sphere, from the sphere verdict
    pub second_sphere: Vec3,
}

impl VerdictColors {
    /// Colors for a pair verdict
    pub fn frame_colors(&self, verdict: &PairVerdict) -> FrameColors {
        FrameColors {
            first_triangle: self.first.for_verdict(verdict.triangles),
            first_sphere: self.first.for_verdict(verdict.spheres),
            second_triangle: self.second.for_verdict(verdict.triangles),
            second_sphere: self.second.for_verdict(verdict.spheres),
        }
    }
}

/// Console line for a pair verdict
///
/// `Spheres = COLLISION_YES  |  Triangles = COLLISION_NO`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionReport(pub PairVerdict);

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spheres = {:<15}|  Triangles = {}", self.0.spheres, self.0.triangles)
    }
}

/// Running counts of pair verdicts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerdictTally {
    /// Broad phase rejected the pair
    pub separated: u32,
    /// Spheres overlapped, triangles did not
    pub near_miss: u32,
    /// Triangles collided
    pub colliding: u32,
}

impl VerdictTally {
    /// Count one verdict
    pub fn record(&mut self, verdict: &PairVerdict) {
        match (verdict.spheres, verdict.triangles) {
            (_, CollisionVerdict::Yes) => self.colliding += 1,
            (CollisionVerdict::Yes, _) => self.near_miss += 1,
            _ => self.separated += 1,
        }
    }

    /// Total verdicts recorded
    pub fn total(&self) -> u32 {
        self.separated + self.near_miss + self.colliding
    }
}
