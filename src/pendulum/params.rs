use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use super::state::ConfigError;

/// Physical parameters and initial conditions for a single pendulum.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PendulumParams {
    pub theta: f64, // initial angle from the downward vertical [rad]
    #[serde(default)]
    pub angular_velocity: f64,
    pub length: f64,
    pub damping_coefficient: f64,
    pub force_amplitude: f64, // amplitude of the vertical pivot oscillation
    pub force_frequency: f64, // angular frequency of the pivot oscillation
}

/**
 * Describes the drawing surface that each pendulum is rendered onto. The pendulum pivot
 * is anchored at the center of the (square) canvas. Colors are RGB triples.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CanvasSpecification {
    #[serde(default = "CanvasSpecification::default_size")]
    pub size: u32,
    #[serde(default = "CanvasSpecification::default_bob_radius")]
    pub bob_radius: f64,
    #[serde(default = "CanvasSpecification::default_line_width")]
    pub line_width: f64,
    #[serde(default = "CanvasSpecification::default_line_color")]
    pub line_color: [u8; 3],
    #[serde(default = "CanvasSpecification::default_bob_color")]
    pub bob_color: [u8; 3],
    #[serde(default = "CanvasSpecification::default_background")]
    pub background: [u8; 3],
}

impl CanvasSpecification {
    fn default_size() -> u32 {
        600
    }
    fn default_bob_radius() -> f64 {
        10.0
    }
    fn default_line_width() -> f64 {
        1.0
    }
    fn default_line_color() -> [u8; 3] {
        [0x44, 0x44, 0x44]
    }
    fn default_bob_color() -> [u8; 3] {
        [0x00, 0x80, 0x00]
    }
    fn default_background() -> [u8; 3] {
        [0xff, 0xff, 0xff]
    }

    pub fn center(&self) -> nalgebra::Vector2<f64> {
        let half = 0.5 * (self.size as f64);
        nalgebra::Vector2::new(half, half)
    }

    /**
     * Width of a frame that tiles `count` canvases left to right. Fails if the canvas is
     * empty, the stroke sizes are not finite and non-negative, or the width overflows `u32`.
     */
    pub fn tiled_width(&self, count: usize) -> Result<u32, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidCanvas("size must be positive".to_owned()));
        }
        for (name, value) in [("bob_radius", self.bob_radius), ("line_width", self.line_width)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidCanvas(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        u32::try_from(count.max(1))
            .ok()
            .and_then(|n| self.size.checked_mul(n))
            .ok_or_else(|| {
                ConfigError::InvalidCanvas(format!(
                    "{} canvases of size {} do not fit in one frame",
                    count, self.size
                ))
            })
    }
}

impl Default for CanvasSpecification {
    fn default() -> Self {
        CanvasSpecification {
            size: Self::default_size(),
            bob_radius: Self::default_bob_radius(),
            line_width: Self::default_line_width(),
            line_color: Self::default_line_color(),
            bob_color: Self::default_bob_color(),
            background: Self::default_background(),
        }
    }
}

/// Top-level parameter file: one canvas layout shared by every pendulum.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationParams {
    #[serde(default)]
    pub canvas: CanvasSpecification,
    pub pendulums: Vec<PendulumParams>,
}

impl AnimationParams {
    /**
     * Two identical driven pendulums whose initial angles differ by 1e-4 rad. Used to
     * show how quickly the trajectories separate.
     */
    pub fn reference() -> AnimationParams {
        let pendulum = |theta: f64| PendulumParams {
            theta,
            angular_velocity: 0.0,
            length: 160.0,
            damping_coefficient: 0.01,
            force_amplitude: 50.0,
            force_frequency: 1.0,
        };
        AnimationParams {
            canvas: CanvasSpecification::default(),
            pendulums: vec![pendulum(2.0001), pendulum(2.0)],
        }
    }
}
