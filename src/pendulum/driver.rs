use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::surface::RenderCommand;

use super::{
    params::{AnimationParams, CanvasSpecification},
    projection::{project, Projection},
    render::pendulum_render_commands,
    state::{ConfigError, PendulumState},
};

/// Wall-clock milliseconds per unit of simulation time. Slows the motion down enough
/// to follow by eye.
pub const MILLISECONDS_PER_TIME_UNIT: f64 = 100.0;

/// Steps longer than this (in simulation time) usually mean the host stalled.
pub const LARGE_STEP_WARNING_THRESHOLD: f64 = 1.0;

/// Nominal frame period of a 60 Hz display.
pub const DEFAULT_FRAME_PERIOD_MS: f64 = 1000.0 / 60.0;

/// Timestamps of a host that fires exactly every `period_ms`, starting at `start_ms`.
pub fn fixed_cadence_timestamps(
    start_ms: f64,
    period_ms: f64,
    count: usize,
) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| start_ms + (i as f64) * period_ms)
}

/// Simulation time and step size derived from one frame timestamp.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    pub time: f64,
    pub step: f64,
}

/**
 * Converts monotonically increasing frame timestamps (milliseconds) into simulation time.
 *
 * The first timestamp seen becomes the start time, and produces a zero-length step.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationClock {
    Uninitialized,
    Running { start_time: f64, previous_time: f64 },
}

impl Default for SimulationClock {
    fn default() -> Self {
        SimulationClock::Uninitialized
    }
}

impl SimulationClock {
    pub fn tick(&mut self, timestamp_ms: f64) -> ClockTick {
        let (start_time, previous_time) = match *self {
            SimulationClock::Uninitialized => (timestamp_ms, timestamp_ms),
            SimulationClock::Running {
                start_time,
                previous_time,
            } => (start_time, previous_time),
        };
        *self = SimulationClock::Running {
            start_time,
            previous_time: timestamp_ms,
        };
        ClockTick {
            time: (timestamp_ms - start_time) / MILLISECONDS_PER_TIME_UNIT,
            step: (timestamp_ms - previous_time) / MILLISECONDS_PER_TIME_UNIT,
        }
    }
}

/// Everything produced for a single pendulum on one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumFrame {
    pub projection: Projection,
    pub commands: Vec<RenderCommand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: ClockTick,
    pub pendulums: Vec<PendulumFrame>,
}

/**
 * Owns the simulation clock and every pendulum. The host calls `step()` once per frame
 * with the current timestamp and draws the returned commands; how often that happens is
 * up to the host.
 */
#[derive(Debug, Clone)]
pub struct Driver {
    clock: SimulationClock,
    pendulums: Vec<PendulumState>,
    canvas: CanvasSpecification,
}

impl Driver {
    pub fn new(params: &AnimationParams) -> Result<Driver, ConfigError> {
        params.canvas.tiled_width(params.pendulums.len())?;
        let pendulums = params
            .pendulums
            .iter()
            .map(PendulumState::new)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = pendulums.len(), "created pendulum driver");
        Ok(Driver {
            clock: SimulationClock::default(),
            pendulums,
            canvas: params.canvas.clone(),
        })
    }

    pub fn pendulums(&self) -> &[PendulumState] {
        &self.pendulums
    }

    pub fn canvas(&self) -> &CanvasSpecification {
        &self.canvas
    }

    pub fn clock(&self) -> SimulationClock {
        self.clock
    }

    /// Advance every pendulum to `timestamp_ms` and build the draw commands for it.
    pub fn step(&mut self, timestamp_ms: f64) -> Frame {
        let tick = self.clock.tick(timestamp_ms);
        if tick.step > LARGE_STEP_WARNING_THRESHOLD || tick.step < 0.0 {
            warn!(
                step = tick.step,
                timestamp_ms, "irregular frame step; integrating without clamping"
            );
        }
        trace!(time = tick.time, step = tick.step, "frame");

        let canvas = &self.canvas;
        let pendulums = self
            .pendulums
            .iter_mut()
            .map(|pendulum| {
                pendulum.advance(tick.time, tick.step);
                let projection = project(pendulum, tick.time);
                PendulumFrame {
                    projection,
                    commands: pendulum_render_commands(canvas, &projection),
                }
            })
            .collect();

        Frame { tick, pendulums }
    }
}
