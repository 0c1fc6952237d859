use image::{Rgb, RgbImage};
use nalgebra::Vector2;

use super::surface::Surface;

/**
 * Software surface backed by an in-memory RGB image. Shapes are rasterized by testing
 * the center of every pixel in their bounding box; there is no anti-aliasing.
 */
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    image: RgbImage,
}

/// Inclusive pixel ranges covering `[low, upp]` in continuous coordinates, clipped to `n`.
fn pixel_range(low: f64, upp: f64, n: u32) -> Option<(u32, u32)> {
    if n == 0 || !(low.is_finite() && upp.is_finite()) {
        return None;
    }
    let first = low.floor().max(0.0);
    let last = upp.ceil().min((n - 1) as f64);
    if first > last {
        None
    } else {
        Some((first as u32, last as u32))
    }
}

fn distance_to_segment(point: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let length_squared = ab.norm_squared();
    if length_squared == 0.0 {
        return (point - a).norm();
    }
    let alpha = ((point - a).dot(&ab) / length_squared).clamp(0.0, 1.0);
    (point - (a + alpha * ab)).norm()
}

impl RasterCanvas {
    pub fn new(size: u32, background: Rgb<u8>) -> RasterCanvas {
        RasterCanvas {
            image: RgbImage::from_pixel(size, size, background),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save(&self, path: &std::path::Path) -> image::ImageResult<()> {
        self.image.save(path)
    }

    /**
     * Copy this canvas into an RGBA frame buffer (as used by `pixels`) whose rows are
     * `frame_width` pixels wide, with the top-left corner of the canvas at `x_offset`.
     * Pixels that fall outside the frame are skipped.
     */
    pub fn copy_into_rgba_frame(&self, frame: &mut [u8], frame_width: u32, x_offset: u32) {
        let frame_height = frame.len() as u32 / (4 * frame_width.max(1));
        for (x, y, pixel) in self.image.enumerate_pixels() {
            let frame_x = x + x_offset;
            if frame_x >= frame_width || y >= frame_height {
                continue;
            }
            let index = 4 * (y * frame_width + frame_x) as usize;
            frame[index..index + 3].copy_from_slice(&pixel.0);
            frame[index + 3] = 0xff;
        }
    }

    fn fill_where<F: Fn(Vector2<f64>) -> bool>(
        &mut self,
        low: Vector2<f64>,
        upp: Vector2<f64>,
        color: Rgb<u8>,
        inside: F,
    ) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            pixel_range(low[0], upp[0], self.image.width()),
            pixel_range(low[1], upp[1], self.image.height()),
        ) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Vector2::new(x as f64 + 0.5, y as f64 + 0.5);
                if inside(center) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

impl Surface for RasterCanvas {
    fn clear_rect(&mut self, origin: Vector2<f64>, size: Vector2<f64>, color: Rgb<u8>) {
        let upp = origin + size;
        self.fill_where(origin, upp, color, |p| {
            p[0] >= origin[0] && p[0] < upp[0] && p[1] >= origin[1] && p[1] < upp[1]
        });
    }

    fn draw_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Rgb<u8>) {
        // Thin lines still cover at least one pixel across.
        let half_width = (0.5 * width).max(0.5);
        let margin = Vector2::new(half_width, half_width);
        self.fill_where(
            from.inf(&to) - margin,
            from.sup(&to) + margin,
            color,
            |p| distance_to_segment(p, from, to) <= half_width,
        );
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Rgb<u8>) {
        let margin = Vector2::new(radius, radius);
        self.fill_where(center - margin, center + margin, color, |p| {
            (p - center).norm() <= radius
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn count(canvas: &RasterCanvas, color: Rgb<u8>) -> usize {
        canvas.image().pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_clear_rect_is_clipped() {
        let mut canvas = RasterCanvas::new(10, WHITE);
        canvas.clear_rect(Vector2::new(-5.0, 8.0), Vector2::new(8.0, 8.0), RED);
        // x in [0, 3), y in [8, 10)
        assert_eq!(count(&canvas, RED), 3 * 2);
        assert_eq!(*canvas.image().get_pixel(2, 9), RED);
        assert_eq!(*canvas.image().get_pixel(3, 9), WHITE);
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RasterCanvas::new(40, WHITE);
        canvas.fill_circle(Vector2::new(20.0, 20.0), 10.0, RED);
        let area = count(&canvas, RED) as f64;
        let expected = std::f64::consts::PI * 100.0;
        assert!((area - expected).abs() < 0.1 * expected);
        assert_eq!(*canvas.image().get_pixel(20, 20), RED);
        assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_vertical_line() {
        let mut canvas = RasterCanvas::new(20, WHITE);
        canvas.draw_line(Vector2::new(10.0, 2.0), Vector2::new(10.0, 12.0), 1.0, RED);
        for y in 2..12 {
            assert_eq!(*canvas.image().get_pixel(9, y), RED);
        }
        assert_eq!(*canvas.image().get_pixel(10, 18), WHITE);
        assert_eq!(*canvas.image().get_pixel(3, 5), WHITE);
    }

    #[test]
    fn test_shapes_outside_canvas_are_ignored() {
        let mut canvas = RasterCanvas::new(8, WHITE);
        canvas.fill_circle(Vector2::new(-100.0, -100.0), 5.0, RED);
        canvas.draw_line(
            Vector2::new(f64::NAN, 0.0),
            Vector2::new(3.0, 3.0),
            1.0,
            RED,
        );
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn test_copy_into_rgba_frame() {
        let mut canvas = RasterCanvas::new(2, WHITE);
        canvas.clear_rect(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), RED);
        let mut frame = vec![0u8; 4 * 3 * 2];
        canvas.copy_into_rgba_frame(&mut frame, 3, 1);
        assert_eq!(&frame[0..4], &[0, 0, 0, 0]);
        assert_eq!(&frame[4..8], &[255, 0, 0, 255]);
        assert_eq!(&frame[8..12], &[255, 255, 255, 255]);
        assert_eq!(&frame[12..16], &[0, 0, 0, 0]);
    }
}
