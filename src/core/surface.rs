//! Minimal drawing interface used to decouple the simulation from any display backend.

use image::Rgb;
use nalgebra::Vector2;

/**
 * The three primitives that the animation needs. Coordinates are in surface pixels
 * with the origin in the top-left corner and the y-axis pointing down.
 */
pub trait Surface {
    fn clear_rect(&mut self, origin: Vector2<f64>, size: Vector2<f64>, color: Rgb<u8>);
    fn draw_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Rgb<u8>);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Rgb<u8>);
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearRect {
        origin: Vector2<f64>,
        size: Vector2<f64>,
        color: Rgb<u8>,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Rgb<u8>,
    },
    FilledCircle {
        center: Vector2<f64>,
        radius: f64,
        color: Rgb<u8>,
    },
}

/// Replay a list of commands onto a surface, in order.
pub fn apply_commands<S: Surface + ?Sized>(surface: &mut S, commands: &[RenderCommand]) {
    for command in commands {
        match *command {
            RenderCommand::ClearRect {
                origin,
                size,
                color,
            } => surface.clear_rect(origin, size, color),
            RenderCommand::Line {
                from,
                to,
                width,
                color,
            } => surface.draw_line(from, to, width, color),
            RenderCommand::FilledCircle {
                center,
                radius,
                color,
            } => surface.fill_circle(center, radius, color),
        }
    }
}
