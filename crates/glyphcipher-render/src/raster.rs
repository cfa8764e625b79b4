//! Minimal RGBA raster with the primitives the chart needs.

use glyphcipher_core::Rgb;

/// Row-major RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Creates an opaque buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let size = width as usize * height as usize;
        let mut data = Vec::with_capacity(size * 4);
        for _ in 0..size {
            data.extend_from_slice(&[fill.r, fill.g, fill.b, 255]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Sets a pixel; coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    /// Fills a disc centered at `(cx, cy)`, clipped to the buffer.
    ///
    /// Only pixels inside the buffer are visited, so the cost is bounded by
    /// the buffer size whatever the radius.
    pub fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        if !(cx.is_finite() && cy.is_finite() && radius > 0.0) || self.data.is_empty() {
            return;
        }
        let r2 = radius * radius;
        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;
        let x0 = ((cx - radius).floor() as i64).max(0);
        let x1 = ((cx + radius).ceil() as i64).min(max_x);
        let y0 = ((cy - radius).floor() as i64).max(0);
        let y1 = ((cy + radius).ceil() as i64).min(max_y);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Draws a horizontal line from `x0` to `x1` inclusive.
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.set(x, y, color);
        }
    }

    /// Draws a vertical line from `y0` to `y1` inclusive.
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgb) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.set(x, y, color);
        }
    }
}
