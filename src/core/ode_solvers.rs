//! Explicit ODE solvers

use nalgebra::Vector2;

/**
 * Advance a second-order system with state `[q, v]` (position, rate) by one step of `dt`,
 * where `acceleration(t, q, v)` returns the second derivative of `q`.
 *
 * This is the half-stage Runge-Kutta variant used by the pendulum animation:
 * - every stage derivative is scaled by `0.5 * dt`,
 * - the trial position of both the second and third stage is built from `q` and `k1`,
 * - the position update spans the full `dt`.
 *
 * Rendered trajectories must reproduce this exact arithmetic. Do not swap it for the
 * textbook RK4 update.
 */
pub fn half_stage_rk4_step<F>(dt: f64, t: f64, x: Vector2<f64>, acceleration: &F) -> Vector2<f64>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let q = x[0];
    let v = x[1];
    let h = 0.5 * dt;
    let t_mid = t + 0.5 * dt;
    let t_next = t + dt;
    let k1 = h * acceleration(t, q, v);
    let q_mid = q + 0.5 * dt * (q + 0.5 * k1);
    let k2 = h * acceleration(t_mid, q_mid, v + k1);
    let k3 = h * acceleration(t_mid, q_mid, v + k2);
    let k4 = h * acceleration(t_next, q + dt * (v + k3), v + 2.0 * k3);
    const ONE_BY_THREE: f64 = 1.0 / 3.0;
    let q_next = q + dt * (v + ONE_BY_THREE * (k1 + k2 + k3));
    let v_next = v + ONE_BY_THREE * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
    Vector2::new(q_next, v_next)
}

/// Fixed-step simulation from `t_begin`, returning the final state.
pub fn half_stage_rk4_simulate<F>(
    t_begin: f64,
    dt: f64,
    n_steps: u32,
    x0: Vector2<f64>,
    acceleration: &F,
) -> Vector2<f64>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let mut x = x0;
    for i_step in 0..n_steps {
        let t = t_begin + (i_step as f64) * dt;
        x = half_stage_rk4_step(dt, t, x, acceleration);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_step_is_identity() {
        let acceleration = |t: f64, q: f64, v: f64| t.cos() - 0.1 * v - q.sin();
        for &(q, v, t) in &[(0.0, 0.0, 0.0), (2.0, -1.5, 3.0), (-40.0, 12.0, 1e4)] {
            let x = Vector2::new(q, v);
            let x_next = half_stage_rk4_step(0.0, t, x, &acceleration);
            assert_eq!(x_next, x);
        }
    }

    #[test]
    fn test_constant_acceleration_is_exact() {
        // Each stage sees the same acceleration, so the update collapses to
        // q + v*dt + 0.5*a*dt^2 and v + a*dt.
        let a = -3.25;
        let acceleration = |_: f64, _: f64, _: f64| a;
        let dt = 0.2;
        let (q, v) = (1.5, 0.75);
        let x_next = half_stage_rk4_step(dt, 0.0, Vector2::new(q, v), &acceleration);
        assert_relative_eq!(x_next[0], q + v * dt + 0.5 * a * dt * dt, epsilon = 1e-12);
        assert_relative_eq!(x_next[1], v + a * dt, epsilon = 1e-12);
    }

    #[test]
    fn test_stage_times() {
        // Record every time the solver queries the dynamics.
        let times = std::cell::RefCell::new(Vec::new());
        let acceleration = |t: f64, _: f64, _: f64| {
            times.borrow_mut().push(t);
            0.0
        };
        half_stage_rk4_step(0.4, 2.0, Vector2::new(0.0, 0.0), &acceleration);
        let times = times.into_inner();
        assert_eq!(times.len(), 4);
        assert_relative_eq!(times[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(times[1], 2.2, epsilon = 1e-12);
        assert_relative_eq!(times[2], 2.2, epsilon = 1e-12);
        assert_relative_eq!(times[3], 2.4, epsilon = 1e-12);
    }

    #[test]
    fn test_simulate_matches_repeated_steps() {
        let acceleration = |t: f64, q: f64, v: f64| t.cos() - 0.1 * v - q.sin();
        let dt = 0.05;
        let mut x = Vector2::new(0.3, -0.2);
        let x0 = x;
        for i in 0..40 {
            x = half_stage_rk4_step(dt, 1.0 + (i as f64) * dt, x, &acceleration);
        }
        let x_sim = half_stage_rk4_simulate(1.0, dt, 40, x0, &acceleration);
        assert_relative_eq!(x_sim[0], x[0], epsilon = 1e-12);
        assert_relative_eq!(x_sim[1], x[1], epsilon = 1e-12);
    }
}
