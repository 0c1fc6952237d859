use image::Rgb;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    core::{
        file_io::{serialize_to_json, FilePrefix},
        raster_canvas::RasterCanvas,
        stopwatch::Stopwatch,
        surface::apply_commands,
    },
    pendulum::{
        driver::{fixed_cadence_timestamps, ClockTick, Driver, Frame},
        params::AnimationParams,
        projection::Projection,
    },
};

use super::CliError;

/// Timestamp of the first synthetic frame.
const FIRST_TIMESTAMP_MS: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub frames: usize,
    pub frame_period_ms: f64,
    pub image_stride: usize, // zero disables image output
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PendulumSample {
    pub theta: f64,
    pub angular_velocity: f64,
    pub projection: Projection,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    pub frame: usize,
    pub timestamp_ms: f64,
    pub tick: ClockTick,
    pub pendulums: Vec<PendulumSample>,
}

fn validate(options: &RenderOptions) -> Result<(), CliError> {
    if options.frames == 0 {
        return Err(CliError::InvalidOption(
            "frame count must be positive".to_owned(),
        ));
    }
    if !(options.frame_period_ms.is_finite() && options.frame_period_ms > 0.0) {
        return Err(CliError::InvalidOption(format!(
            "frame period must be positive, got {}",
            options.frame_period_ms
        )));
    }
    Ok(())
}

/**
 * Headless host: drives the simulation with evenly spaced timestamps and invokes
 * `on_frame` after every step with the frame index and the driver output.
 */
pub fn simulate_trajectory<F>(
    params: &AnimationParams,
    options: &RenderOptions,
    mut on_frame: F,
) -> Result<Vec<TrajectorySample>, CliError>
where
    F: FnMut(usize, &Frame) -> Result<(), CliError>,
{
    validate(options)?;
    let mut driver = Driver::new(params)?;
    let mut trajectory = Vec::with_capacity(options.frames);
    for (index, timestamp_ms) in
        fixed_cadence_timestamps(FIRST_TIMESTAMP_MS, options.frame_period_ms, options.frames)
            .enumerate()
    {
        let frame = driver.step(timestamp_ms);
        on_frame(index, &frame)?;
        trajectory.push(TrajectorySample {
            frame: index,
            timestamp_ms,
            tick: frame.tick,
            pendulums: driver
                .pendulums()
                .iter()
                .zip(frame.pendulums.iter())
                .map(|(state, output)| PendulumSample {
                    theta: state.theta,
                    angular_velocity: state.angular_velocity,
                    projection: output.projection,
                })
                .collect(),
        });
    }
    Ok(trajectory)
}

/**
 * Writes into the directory of `file_prefix`:
 * - `<base>.json`: a copy of the parameters,
 * - `<base>_pendulum_<j>_frame_<i>.png`: every `image_stride`-th frame of each pendulum,
 * - `<base>_trajectory.json`: state and projected coordinates for every frame,
 * - `<base>_diagnostics.txt`: timing information.
 */
pub fn render_animation(
    params: &AnimationParams,
    options: &RenderOptions,
    file_prefix: FilePrefix,
) -> Result<(), CliError> {
    let mut stopwatch = Stopwatch::new("Pendulum Render".to_owned());
    validate(options)?;
    Driver::new(params)?;
    serialize_to_json(&file_prefix.with_suffix(".json"), params)?;

    let background = Rgb(params.canvas.background);
    let mut canvases = vec![
        RasterCanvas::new(params.canvas.size, background);
        params.pendulums.len()
    ];
    stopwatch.record_split("setup".to_owned());

    let mut image_count = 0;
    let trajectory = simulate_trajectory(params, options, |index, frame| {
        if options.image_stride == 0 || index % options.image_stride != 0 {
            return Ok(());
        }
        for (j, (canvas, output)) in canvases
            .iter_mut()
            .zip(frame.pendulums.iter())
            .enumerate()
        {
            apply_commands(canvas, &output.commands);
            let suffix = format!("_pendulum_{}_frame_{:05}.png", j, index);
            canvas.save(&file_prefix.with_suffix(&suffix))?;
            image_count += 1;
        }
        Ok(())
    })?;
    stopwatch.record_split("simulation".to_owned());
    info!(
        frames = trajectory.len(),
        images = image_count,
        directory = %file_prefix.directory_path.display(),
        "finished render"
    );

    serialize_to_json(&file_prefix.with_suffix("_trajectory.json"), &trajectory)?;
    stopwatch.record_split("write_trajectory".to_owned());

    stopwatch.display(&mut file_prefix.create_file_with_suffix("_diagnostics.txt")?)?;
    Ok(())
}
