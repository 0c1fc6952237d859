use super::state::PendulumState;

pub const GRAVITY: f64 = 9.81;

/**
 * Angular acceleration of a damped pendulum whose pivot is driven vertically by
 * `-a * cos(w * t)`:
 *
 * theta_ddot = -2 * delta * theta_dot - (g / l) * sin(theta) + (a * w^2 / l) * cos(w * t) * sin(theta)
 *
 * The trial `theta` and `angular_velocity` are passed separately from the pendulum so that
 * the integrator can evaluate intermediate stages.
 */
pub fn angular_acceleration(
    pendulum: &PendulumState,
    t: f64,
    theta: f64,
    angular_velocity: f64,
) -> f64 {
    let l = pendulum.length();
    let delta = pendulum.damping_coefficient();
    let a = pendulum.force_amplitude();
    let w = pendulum.force_frequency();
    (-2.0 * delta * angular_velocity) - ((GRAVITY / l) * theta.sin())
        + ((a * w * w / l) * (w * t).cos() * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pendulum::params::PendulumParams;
    use approx::assert_relative_eq;

    fn pendulum(damping_coefficient: f64, force_amplitude: f64) -> PendulumState {
        PendulumState::new(&PendulumParams {
            theta: 0.0,
            angular_velocity: 0.0,
            length: 2.0,
            damping_coefficient,
            force_amplitude,
            force_frequency: 3.0,
        })
        .unwrap()
    }

    #[test]
    fn test_rest_position_is_equilibrium() {
        let p = pendulum(0.1, 0.5);
        for &t in &[0.0, 0.3, 17.0] {
            assert_eq!(angular_acceleration(&p, t, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn test_individual_terms() {
        let theta = 0.4;

        // gravity only
        let p = pendulum(0.0, 0.0);
        assert_relative_eq!(
            angular_acceleration(&p, 1.0, theta, 5.0),
            -(GRAVITY / 2.0) * theta.sin(),
            epsilon = 1e-12
        );

        // damping opposes the motion
        let p = pendulum(0.25, 0.0);
        assert_relative_eq!(
            angular_acceleration(&p, 1.0, 0.0, 2.0),
            -2.0 * 0.25 * 2.0,
            epsilon = 1e-12
        );

        // forcing term at t = 0, where cos(w * t) == 1
        let p = pendulum(0.0, 0.5);
        let forcing = (0.5 * 9.0 / 2.0) * theta.sin();
        assert_relative_eq!(
            angular_acceleration(&p, 0.0, theta, 0.0),
            -(GRAVITY / 2.0) * theta.sin() + forcing,
            epsilon = 1e-12
        );
    }
}
