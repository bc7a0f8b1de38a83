//! Math utilities and types
//!
//! Provides the vector types and numeric constants shared by the collision code.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Segments whose direction projects onto the plane normal with an absolute
    /// value below this are treated as parallel to the plane.
    ///
    /// Absolute, not scale-relative: very large or very small geometry can be
    /// misclassified near the parallel case.
    pub const PARALLEL_TOLERANCE: f32 = 0.001;

    /// Full turn used by the angle-sum inside test.
    ///
    /// Deliberately the literal `6.28` rather than [`TAU`]; the inside boundary
    /// of the classifier is defined relative to this value.
    pub const FULL_TURN_APPROX: f32 = 6.28;

    /// Allowed deviation of the angle sum from [`FULL_TURN_APPROX`].
    pub const ANGLE_SUM_TOLERANCE: f32 = 0.01;

    /// Below this magnitude a vector is treated as zero length.
    pub const ZERO_LENGTH_EPSILON: f32 = f32::EPSILON;
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Component-wise minimum and maximum over a set of points
    ///
    /// Returns `None` for an empty slice.
    pub fn component_bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
        let (first, rest) = points.split_first()?;
        let bounds = rest.iter().fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Some(bounds)
    }

    /// True if every component is finite
    pub fn is_finite(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }

    /// Angle between two unit vectors in radians
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding in the inputs cannot
    /// push `acos` out of its domain.
    pub fn angle_between_unit(a: &Vec3, b: &Vec3) -> f32 {
        a.dot(b).clamp(-1.0, 1.0).acos()
    }
}
