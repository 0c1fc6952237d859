use image::Rgb;
use nalgebra::Vector2;

use crate::core::surface::RenderCommand;

use super::{params::CanvasSpecification, projection::Projection};

/**
 * Drawing sequence for one pendulum on its own canvas: clear the canvas, draw the arm
 * from the pivot to the bob, then draw the bob. Projected coordinates are relative to the
 * canvas center.
 */
pub fn pendulum_render_commands(
    canvas: &CanvasSpecification,
    projection: &Projection,
) -> Vec<RenderCommand> {
    let center = canvas.center();
    let size = canvas.size as f64;
    vec![
        RenderCommand::ClearRect {
            origin: Vector2::new(0.0, 0.0),
            size: Vector2::new(size, size),
            color: Rgb(canvas.background),
        },
        RenderCommand::Line {
            from: center + projection.pivot,
            to: center + projection.end,
            width: canvas.line_width,
            color: Rgb(canvas.line_color),
        },
        RenderCommand::FilledCircle {
            center: center + projection.end,
            radius: canvas.bob_radius,
            color: Rgb(canvas.bob_color),
        },
    ]
}
