//! # Scenario Configuration
//!
//! Serializable description of a two-triangle collision scenario: the
//! triangles themselves, how the driver moves triangle A, how many fixed steps
//! to run, and the narrow-phase tolerances.
//!
//! ## Defaults
//!
//! `ScenarioConfig::default()` reproduces the classic sample exactly: a small
//! triangle in the `z = 1` plane sliding along x through a larger triangle
//! standing in the `x = 0` plane, bouncing when its sphere center passes ±7.
//!
//! Files may be TOML or RON; see [`Config`]. Every field has a default, so a
//! file only needs the values it changes.
//!
//! Vectors are written as arrays in TOML (`[1.0, -1.0, 1.0]`) and as tuples
//! in RON (`(1.0, -1.0, 1.0)`).

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::{constants, utils, Vec3};
use crate::physics::collision::{CollisionError, Triangle};

/// Three vertices of a triangle as they appear in a scenario file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleConfig {
    /// Vertices in world space, winding order preserved
    pub vertices: [Vec3; 3],
}

impl TriangleConfig {
    /// Create from three vertices
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { vertices: [v0, v1, v2] }
    }

    /// Build a triangle with its bounding sphere computed
    pub fn to_triangle(&self) -> Result<Triangle, CollisionError> {
        let [v0, v1, v2] = self.vertices;
        Triangle::try_new(v0, v1, v2)
    }
}

/// Back-and-forth motion of triangle A along the x axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Whether the driver moves triangle A at all
    pub enabled: bool,
    /// Units per second
    pub speed: f32,
    /// Turn around once the sphere center drops below this x
    pub min_x: f32,
    /// Turn around once the sphere center rises above this x
    pub max_x: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 2.0,
            min_x: -7.0,
            max_x: 7.0,
        }
    }
}

/// Fixed-step schedule for the headless driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Number of steps to evaluate
    pub frames: u32,
    /// Simulated seconds per step
    pub frame_time: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_time: 1.0 / 60.0,
        }
    }
}

/// Numeric tolerances of the narrow phase
///
/// The defaults are the literal values the classifier is defined by. Any other
/// value changes which near-boundary configurations count as hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowPhaseTolerances {
    /// Minimum `|dot(direction, normal)|` for a segment to count as crossing
    pub parallel: f32,
    /// Target angle sum for a point inside a triangle
    pub full_turn: f32,
    /// Allowed deviation from `full_turn`
    pub angle_sum: f32,
}

impl Default for NarrowPhaseTolerances {
    fn default() -> Self {
        Self {
            parallel: constants::PARALLEL_TOLERANCE,
            full_turn: constants::FULL_TURN_APPROX,
            angle_sum: constants::ANGLE_SUM_TOLERANCE,
        }
    }
}

impl NarrowPhaseTolerances {
    /// Validate the tolerances
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("parallel", self.parallel),
            ("full_turn", self.full_turn),
            ("angle_sum", self.angle_sum),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "tolerance '{}' must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Complete scenario for the collision driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Human readable scenario name
    pub name: String,
    /// The moving triangle
    pub triangle_a: TriangleConfig,
    /// The stationary triangle
    pub triangle_b: TriangleConfig,
    /// Motion applied to triangle A
    pub motion: MotionConfig,
    /// Step schedule
    pub steps: StepConfig,
    /// Narrow-phase tolerances
    pub tolerances: NarrowPhaseTolerances,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "Basic 3D Collision Detection".to_string(),
            triangle_a: TriangleConfig::new(
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(-3.0, -1.0, 1.0),
            ),
            triangle_b: TriangleConfig::new(
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(0.0, -2.0, 2.0),
                Vec3::new(0.0, -2.0, -2.0),
            ),
            motion: MotionConfig::default(),
            steps: StepConfig::default(),
            tolerances: NarrowPhaseTolerances::default(),
        }
    }
}

impl ScenarioConfig {
    /// Validate the scenario
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, triangle) in [("triangle_a", &self.triangle_a), ("triangle_b", &self.triangle_b)] {
            if let Some(index) = triangle.vertices.iter().position(|v| !utils::is_finite(v)) {
                return Err(ConfigError::Validation(format!(
                    "{} vertex {} has a non-finite coordinate",
                    label, index
                )));
            }
        }

        if !self.motion.speed.is_finite() || self.motion.speed < 0.0 {
            return Err(ConfigError::Validation(format!(
                "motion speed must be finite and non-negative, got {}",
                self.motion.speed
            )));
        }

        if self.motion.min_x.is_nan()
            || self.motion.max_x.is_nan()
            || self.motion.min_x >= self.motion.max_x
        {
            return Err(ConfigError::Validation(format!(
                "motion min_x ({}) must be below max_x ({})",
                self.motion.min_x, self.motion.max_x
            )));
        }

        if !self.steps.frame_time.is_finite() || self.steps.frame_time <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "frame_time must be positive, got {}",
                self.steps.frame_time
            )));
        }

        self.tolerances.validate()
    }
}

impl Config for ScenarioConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_scenario_matches_sample() {
        let scenario = ScenarioConfig::default();
        assert_eq!(scenario.triangle_a.vertices[0], Vec3::new(1.0, -1.0, 1.0));
        assert_eq!(scenario.triangle_b.vertices[2], Vec3::new(0.0, -2.0, -2.0));
        assert_eq!(scenario.motion.speed, 2.0);
        assert_eq!(scenario.motion.min_x, -7.0);
        assert_eq!(scenario.motion.max_x, 7.0);
        assert_eq!(scenario.tolerances, NarrowPhaseTolerances::default());
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_default_tolerances_are_contract_literals() {
        let tolerances = NarrowPhaseTolerances::default();
        assert_eq!(tolerances.parallel, 0.001);
        assert_eq!(tolerances.full_turn, 6.28);
        assert_eq!(tolerances.angle_sum, 0.01);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut scenario = ScenarioConfig::default();
        scenario.triangle_b.vertices[1].y = f32::NAN;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));

        let mut scenario = ScenarioConfig::default();
        scenario.motion.min_x = 8.0;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));

        let mut scenario = ScenarioConfig::default();
        scenario.steps.frame_time = 0.0;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));

        let mut scenario = ScenarioConfig::default();
        scenario.tolerances.angle_sum = -0.01;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
            name = "offset"

            [triangle_a]
            vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]

            [motion]
            enabled = false
        "#;
        let scenario = ScenarioConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert_eq!(scenario.name, "offset");
        assert_eq!(scenario.triangle_a.vertices[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(scenario.triangle_b, ScenarioConfig::default().triangle_b);
        assert!(!scenario.motion.enabled);
        assert_eq!(scenario.motion.speed, 2.0);
        assert_eq!(scenario.steps, StepConfig::default());
    }

    #[test]
    fn test_ron_text_is_reloadable() {
        let scenario = ScenarioConfig::default();
        let text = scenario.to_string_with_format(ConfigFormat::Ron).unwrap();
        let loaded = ScenarioConfig::from_str_with_format(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_hand_written_ron_uses_tuple_vectors() {
        let text = r#"
            (
                name: "lifted",
                triangle_a: (
                    vertices: (
                        (1.0, -1.0, 3.0),
                        (-1.0, 1.0, 3.0),
                        (-3.0, -1.0, 3.0),
                    ),
                ),
                motion: (enabled: false),
            )
        "#;
        let scenario = ScenarioConfig::from_str_with_format(text, ConfigFormat::Ron).unwrap();
        assert_eq!(scenario.name, "lifted");
        assert_eq!(scenario.triangle_a.vertices[2], Vec3::new(-3.0, -1.0, 3.0));
        assert_eq!(scenario.triangle_b, ScenarioConfig::default().triangle_b);
        assert!(!scenario.motion.enabled);

        let arrays = text.replace("(1.0, -1.0, 3.0)", "[1.0, -1.0, 3.0]");
        let result = ScenarioConfig::from_str_with_format(&arrays, ConfigFormat::Ron);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_nan_motion_limits_are_rejected() {
        let mut scenario = ScenarioConfig::default();
        scenario.motion.max_x = f32::NAN;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));

        let mut scenario = ScenarioConfig::default();
        scenario.motion.min_x = f32::NAN;
        assert!(matches!(scenario.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = ScenarioConfig::from_str_with_format("name = [", ConfigFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_triangle_config_builds_sphere() {
        let triangle = ScenarioConfig::default().triangle_b.to_triangle().unwrap();
        assert_eq!(triangle.bounding_sphere.center, Vec3::zeros());
    }
}
