//! Benchmark of the per-frame work for the reference configuration: integrating both
//! pendulums and building their draw commands.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pendulum_animator::{
    core::ode_solvers::half_stage_rk4_simulate,
    pendulum::{
        driver::{fixed_cadence_timestamps, Driver, DEFAULT_FRAME_PERIOD_MS},
        params::AnimationParams,
    },
};

fn simulate_one_second_of_frames() {
    let mut driver = Driver::new(&AnimationParams::reference()).unwrap();
    for timestamp in fixed_cadence_timestamps(0.0, DEFAULT_FRAME_PERIOD_MS, 60) {
        black_box(driver.step(timestamp));
    }
}

fn integrate_forced_pendulum() {
    let acceleration = |t: f64, q: f64, v: f64| t.cos() - 0.1 * v - q.sin();
    black_box(half_stage_rk4_simulate(
        0.0,
        0.01,
        1000,
        nalgebra::Vector2::new(2.0, 0.0),
        &acceleration,
    ));
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("driver_reference_60_frames", |b| {
        b.iter(simulate_one_second_of_frames);
    });
    c.bench_function("half_stage_rk4_1000_steps", |b| {
        b.iter(integrate_forced_pendulum);
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
