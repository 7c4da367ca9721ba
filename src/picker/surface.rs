//! Pixel buffers for the picker's hue track and saturation/brightness square.
//!
//! The square is built the way a 2D canvas would paint it: a pure-hue fill,
//! then a white overlay fading out to the right, then a black overlay fading
//! in toward the bottom. Per pixel that composite is `v * (s * hue + 1 - s)`,
//! which is exactly `hsv_to_rgb` at that pixel's (s, v).

use crate::core::color::{hue_sector, hsv_to_rgb, Rgba};

/// RGBA8 pixels, row-major, ready to upload as a texture
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pub width: u16,
    pub height: u16,
    pub bytes: Vec<u8>,
}

impl PixelBuffer {
    fn new(width: u16, height: u16) -> Self {
        PixelBuffer {
            width,
            height,
            bytes: Vec::with_capacity(width as usize * height as usize * 4),
        }
    }

    fn push(&mut self, color: Rgba) {
        self.bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgba {
            r: self.bytes[i],
            g: self.bytes[i + 1],
            b: self.bytes[i + 2],
            a: self.bytes[i + 3],
        })
    }
}

/// Saturation of column `x` and brightness of row `y`, both in 0.0-1.0
pub fn square_position(x: u16, y: u16, width: u16, height: u16) -> (f32, f32) {
    let s = x as f32 / (width.max(2) - 1) as f32;
    let v = 1.0 - y as f32 / (height.max(2) - 1) as f32;
    (s, v)
}

/// Composite one square pixel from the three layers
pub fn composite_square_pixel(hue: f32, s: f32, v: f32) -> Rgba {
    let (r, g, b) = hue_sector(hue.rem_euclid(360.0), 1.0);
    let layer = |base: f32| {
        // White overlay, alpha 1 - s
        let lit = base * s + (1.0 - s);
        // Black overlay, alpha 1 - v
        let shaded = lit * v;
        (shaded * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgba::rgb(layer(r), layer(g), layer(b))
}

pub fn build_square(hue: f32, width: u16, height: u16) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let (s, v) = square_position(x, y, width, height);
            buffer.push(composite_square_pixel(hue, s, v));
        }
    }
    buffer
}

/// Vertical hue ramp, red at the top wrapping back to red at the bottom
pub fn build_hue_track(width: u16, height: u16) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        let hue = y as f32 / height.max(1) as f32 * 360.0;
        let color = hsv_to_rgb(hue, 100.0, 100.0);
        for _ in 0..width {
            buffer.push(color);
        }
    }
    buffer
}
