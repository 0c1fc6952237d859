use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::state::PendulumState;

/// Pivot and bob positions relative to the rest position of the pivot.
/// The y-axis points down, matching image coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub pivot: Vector2<f64>,
    pub end: Vector2<f64>,
}

/**
 * The pivot oscillates vertically as `-a * cos(w * t)`; the bob hangs `length` away
 * from it at angle `theta` from the downward vertical.
 */
pub fn project(pendulum: &PendulumState, time: f64) -> Projection {
    let pivot = Vector2::new(
        0.0,
        -pendulum.force_amplitude() * (time * pendulum.force_frequency()).cos(),
    );
    let end = Vector2::new(
        pivot[0] + pendulum.length() * pendulum.theta.sin(),
        pivot[1] + pendulum.length() * pendulum.theta.cos(),
    );
    Projection { pivot, end }
}
