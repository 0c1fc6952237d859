use nalgebra::Vector2;
use thiserror::Error;

use crate::core::ode_solvers::half_stage_rk4_step;

use super::{dynamics::angular_acceleration, params::PendulumParams};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("pendulum length must be positive, got {0}")]
    NonPositiveLength(f64),
    #[error("damping coefficient must be non-negative, got {0}")]
    NegativeDamping(f64),
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),
}

/**
 * Physical constants and kinematic state of one pendulum.
 *
 * `theta` is measured from the downward vertical and is never wrapped, so it may
 * leave `[-pi, pi]` after the pendulum goes over the top.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    pub theta: f64,
    pub angular_velocity: f64,
    length: f64,
    damping_coefficient: f64,
    force_amplitude: f64,
    force_frequency: f64,
}

impl PendulumState {
    pub fn new(params: &PendulumParams) -> Result<PendulumState, ConfigError> {
        for (name, value) in [
            ("theta", params.theta),
            ("angular_velocity", params.angular_velocity),
            ("length", params.length),
            ("damping_coefficient", params.damping_coefficient),
            ("force_amplitude", params.force_amplitude),
            ("force_frequency", params.force_frequency),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if params.length <= 0.0 {
            return Err(ConfigError::NonPositiveLength(params.length));
        }
        if params.damping_coefficient < 0.0 {
            return Err(ConfigError::NegativeDamping(params.damping_coefficient));
        }
        Ok(PendulumState {
            theta: params.theta,
            angular_velocity: params.angular_velocity,
            length: params.length,
            damping_coefficient: params.damping_coefficient,
            force_amplitude: params.force_amplitude,
            force_frequency: params.force_frequency,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn damping_coefficient(&self) -> f64 {
        self.damping_coefficient
    }

    pub fn force_amplitude(&self) -> f64 {
        self.force_amplitude
    }

    pub fn force_frequency(&self) -> f64 {
        self.force_frequency
    }

    /**
     * Integrate the angle and angular velocity forward by `step`, starting at simulation
     * time `time`. Large steps are not clamped: a stalled host produces a large jump.
     */
    pub fn advance(&mut self, time: f64, step: f64) {
        let dynamics = |t: f64, theta: f64, angular_velocity: f64| {
            angular_acceleration(self, t, theta, angular_velocity)
        };
        let x = half_stage_rk4_step(
            step,
            time,
            Vector2::new(self.theta, self.angular_velocity),
            &dynamics,
        );
        self.theta = x[0];
        self.angular_velocity = x[1];
    }

    /// Energy per unit `length^2 * mass` of the undriven pendulum, up to a constant.
    pub fn specific_energy(&self) -> f64 {
        0.5 * self.angular_velocity * self.angular_velocity
            - (super::dynamics::GRAVITY / self.length) * self.theta.cos()
    }
}
