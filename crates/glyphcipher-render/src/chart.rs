//! Scatter chart surface.
//!
//! [`ChartData`] is what the chart shows: one point per cipher value with its
//! gradient color. A [`ChartSurface`] turns that data into a live chart, and a
//! [`ChartSlot`] owns at most one live chart at a time, always tearing the old
//! one down before creating its replacement.

use serde::{Deserialize, Serialize};

use glyphcipher_core::{sequence_colors, ChartParams, CipherSequence, Rgb};

use crate::error::RenderResult;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig};
use crate::raster::RgbaBuffer;

const BACKGROUND: Rgb = Rgb::new(255, 255, 255);
const AXIS: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
const ZERO_LINE: Rgb = Rgb::new(0xd0, 0xd4, 0xd9);

const MARGIN_LEFT: u32 = 48;
const MARGIN_BOTTOM: u32 = 40;
const MARGIN_TOP: u32 = 16;
const MARGIN_RIGHT: u32 = 16;

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Character position (x).
    pub position: usize,
    /// Cipher value (y).
    pub value: i64,
    /// CSS color, e.g. `rgb(255, 0, 0)`.
    pub color: String,
}

/// Complete description of a scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub label: String,
    pub x_title: String,
    pub y_title: String,
    pub point_radius: u32,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    /// Builds chart data for a sequence, coloring each point against the
    /// sequence's own min and max.
    pub fn from_sequence(sequence: &CipherSequence, params: &ChartParams) -> Self {
        let colors = sequence_colors(sequence);
        let points = sequence
            .iter()
            .zip(colors)
            .map(|((position, value), color)| ChartPoint {
                position,
                value,
                color: color.to_css(),
            })
            .collect();

        Self {
            label: params.label.clone(),
            x_title: params.x_title.clone(),
            y_title: params.y_title.clone(),
            point_radius: params.point_radius,
            points,
        }
    }

    /// Range of plotted values, or `None` when there are no points.
    pub fn value_bounds(&self) -> Option<(i64, i64)> {
        let min = self.points.iter().map(|p| p.value).min()?;
        let max = self.points.iter().map(|p| p.value).max()?;
        Some((min, max))
    }
}

/// Something that can materialize chart data into a live chart.
pub trait ChartSurface {
    /// Handle to a live chart.
    type Chart;

    /// Creates a new live chart.
    fn create(&mut self, data: &ChartData) -> RenderResult<Self::Chart>;

    /// Tears down a live chart.
    fn destroy(&mut self, chart: Self::Chart);
}

/// Owner of the single live chart on a surface.
///
/// [`replace`](ChartSlot::replace) destroys the current chart before creating
/// the next one. If creation fails the slot is left empty. Dropping the slot
/// destroys whatever chart is still live.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    live: Option<S::Chart>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// Replaces the live chart with one built from `data`.
    pub fn replace(&mut self, data: &ChartData) -> RenderResult<&S::Chart> {
        self.clear();
        let chart = self.surface.create(data)?;
        Ok(self.live.insert(chart))
    }

    /// The live chart, if any.
    pub fn live(&self) -> Option<&S::Chart> {
        self.live.as_ref()
    }

    /// Destroys the live chart, if any.
    pub fn clear(&mut self) {
        if let Some(chart) = self.live.take() {
            self.surface.destroy(chart);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ChartSurface> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A chart rasterized into an RGBA buffer.
#[derive(Debug, Clone)]
pub struct RasterChart {
    pub data: ChartData,
    pub buffer: RgbaBuffer,
}

impl RasterChart {
    /// Encodes the raster as PNG, returning the bytes and their BLAKE3 hash.
    pub fn to_png(&self, config: &PngConfig) -> RenderResult<(Vec<u8>, String)> {
        write_rgba_to_vec_with_hash(&self.buffer, config)
    }
}

/// Surface that rasterizes scatter charts at a fixed size.
#[derive(Debug, Clone)]
pub struct RasterChartSurface {
    width: u32,
    height: u32,
    created: usize,
    destroyed: usize,
}

impl RasterChartSurface {
    pub fn new(params: &ChartParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            created: 0,
            destroyed: 0,
        }
    }

    /// Number of charts currently alive on this surface.
    pub fn live_count(&self) -> usize {
        self.created - self.destroyed
    }

    /// Pixel coordinates of every point in `data`.
    pub fn layout(&self, data: &ChartData) -> Vec<(f64, f64)> {
        let left = MARGIN_LEFT.min(self.width) as f64;
        let right = self.width.saturating_sub(MARGIN_RIGHT) as f64;
        let top = MARGIN_TOP.min(self.height) as f64;
        let bottom = self.height.saturating_sub(MARGIN_BOTTOM) as f64;
        let (lo, hi) = padded_range(data.value_bounds());
        let count = data.points.len();

        data.points
            .iter()
            .map(|point| {
                let x = if count <= 1 {
                    (left + right) / 2.0
                } else {
                    left + point.position as f64 * (right - left) / (count - 1) as f64
                };
                let y = bottom - (point.value as f64 - lo) / (hi - lo) * (bottom - top);
                (x, y)
            })
            .collect()
    }

    fn rasterize(&self, data: &ChartData) -> RgbaBuffer {
        let mut buffer = RgbaBuffer::new(self.width, self.height, BACKGROUND);
        let left = MARGIN_LEFT.min(self.width) as i64;
        let right = self.width.saturating_sub(MARGIN_RIGHT) as i64;
        let top = MARGIN_TOP.min(self.height) as i64;
        let bottom = self.height.saturating_sub(MARGIN_BOTTOM) as i64;

        let (lo, hi) = padded_range(data.value_bounds());
        if lo < 0.0 && hi > 0.0 {
            let zero = bottom as f64 - (0.0 - lo) / (hi - lo) * (bottom - top) as f64;
            buffer.hline(left, right, zero.round() as i64, ZERO_LINE);
        }

        buffer.vline(left, top, bottom, AXIS);
        buffer.hline(left, right, bottom, AXIS);

        for (point, (x, y)) in data.points.iter().zip(self.layout(data)) {
            let color = parse_css_rgb(&point.color).unwrap_or(AXIS);
            buffer.fill_disc(x, y, data.point_radius as f64, color);
        }

        buffer
    }
}

impl ChartSurface for RasterChartSurface {
    type Chart = RasterChart;

    fn create(&mut self, data: &ChartData) -> RenderResult<RasterChart> {
        let buffer = self.rasterize(data);
        self.created += 1;
        Ok(RasterChart {
            data: data.clone(),
            buffer,
        })
    }

    fn destroy(&mut self, chart: RasterChart) {
        drop(chart);
        self.destroyed += 1;
    }
}

/// Value range with 5% headroom; a single value gets a range of +/- 1.
fn padded_range(bounds: Option<(i64, i64)>) -> (f64, f64) {
    match bounds {
        None => (-1.0, 1.0),
        Some((min, max)) if min == max => (min as f64 - 1.0, max as f64 + 1.0),
        Some((min, max)) => {
            let pad = (max as f64 - min as f64) * 0.05;
            (min as f64 - pad, max as f64 + pad)
        }
    }
}

/// Parses `rgb(r, g, b)` as produced by [`Rgb::to_css`].
fn parse_css_rgb(css: &str) -> Option<Rgb> {
    let inner = css.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}
