use std::time::{Duration, Instant};

use image::Rgb;
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{
    core::{raster_canvas::RasterCanvas, stopwatch::Stopwatch, surface::apply_commands},
    pendulum::{
        driver::{Driver, Frame, DEFAULT_FRAME_PERIOD_MS},
        params::AnimationParams,
    },
};

use super::CliError;

/**
 * Draw every pendulum onto its own canvas, then tile the canvases left to right into an
 * RGBA frame buffer that is `frame_width` pixels wide.
 */
pub fn draw_frame_side_by_side(
    frame: &Frame,
    canvases: &mut [RasterCanvas],
    rgba_frame: &mut [u8],
    frame_width: u32,
) {
    let mut x_offset = 0;
    for (canvas, output) in canvases.iter_mut().zip(frame.pendulums.iter()) {
        apply_commands(canvas, &output.commands);
        canvas.copy_into_rgba_frame(rgba_frame, frame_width, x_offset);
        x_offset += canvas.image().width();
    }
}

/**
 * Interactive host: opens a window and steps the driver with the wall-clock time (in
 * milliseconds since the window opened) on every redraw, roughly 60 times per second.
 * Escape or closing the window exits.
 */
pub fn animate(params: &AnimationParams) -> Result<(), CliError> {
    let mut driver = Driver::new(params)?;
    let canvas_size = params.canvas.size;
    let frame_width = params.canvas.tiled_width(params.pendulums.len())?;
    let frame_height = canvas_size;
    let mut canvases = vec![
        RasterCanvas::new(canvas_size, Rgb(params.canvas.background));
        params.pendulums.len()
    ];

    let event_loop = EventLoop::new();
    let window = {
        let logical_size = LogicalSize::new(frame_width as f64, frame_height as f64);
        WindowBuilder::new()
            .with_title("Driven Damped Pendulums")
            .with_inner_size(logical_size)
            .with_min_inner_size(logical_size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(frame_width, frame_height, surface_texture)?
    };

    let frame_period = Duration::from_secs_f64(1e-3 * DEFAULT_FRAME_PERIOD_MS);
    let stopwatch = Stopwatch::new("Pendulum Animation".to_owned());
    info!(
        pendulums = params.pendulums.len(),
        frame_width, frame_height, "starting animation"
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + frame_period);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::Escape)
                    {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!(%err, "unable to resize surface; exiting");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                let frame = driver.step(stopwatch.total_elapsed_millis());
                draw_frame_side_by_side(&frame, &mut canvases, pixels.frame_mut(), frame_width);
                if let Err(err) = pixels.render() {
                    error!(%err, "unable to render pixels; exiting");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
