//! Back-and-forth motion along the x axis
//!
//! Slides a triangle toward -x until its bounding-sphere center passes
//! `min_x`, then toward +x until it passes `max_x`, and so on. Time is
//! supplied by the caller one step at a time.

use crate::core::config::MotionConfig;
use crate::foundation::math::Vec3;
use crate::physics::collision::Triangle;

/// Ping-pong mover for a single triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPongMotion {
    config: MotionConfig,
    moving_back: bool,
}

impl PingPongMotion {
    /// Create a mover that starts heading toward -x
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            moving_back: true,
        }
    }

    /// True while heading toward -x
    pub fn is_moving_back(&self) -> bool {
        self.moving_back
    }

    /// Advance `triangle` by `dt` seconds
    ///
    /// Moves the vertices and the cached sphere together; a disabled mover
    /// leaves the triangle untouched.
    pub fn advance(&mut self, triangle: &mut Triangle, dt: f32) {
        if !self.config.enabled {
            return;
        }

        let amount = self.config.speed * dt;

        if self.moving_back {
            triangle.translate(&Vec3::new(-amount, 0.0, 0.0));
            if triangle.bounding_sphere.center.x < self.config.min_x {
                self.moving_back = false;
            }
        } else {
            triangle.translate(&Vec3::new(amount, 0.0, 0.0));
            if triangle.bounding_sphere.center.x > self.config.max_x {
                self.moving_back = true;
            }
        }
    }
}
