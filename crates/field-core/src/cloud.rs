//! Point cloud generation: the resting grid and the text/scatter targets.
//!
//! Both buffers are flat `[x0, y0, z0, x1, y1, z1, ...]` arrays in
//! plane-local coordinates. They are built once and only read afterwards.

use crate::constants::*;
use crate::error::{FieldError, Result};
use rand::Rng;
use std::f32::consts::TAU;

/// Size and subdivision of the resting plane.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub width: f32,
    pub height: f32,
    pub subdiv_x: u32,
    pub subdiv_y: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            subdiv_x: PLANE_SUBDIV_X,
            subdiv_y: PLANE_SUBDIV_Y,
        }
    }
}

impl GridSpec {
    pub fn point_count(&self) -> usize {
        (self.subdiv_x as usize + 1) * (self.subdiv_y as usize + 1)
    }

    fn validate(&self) -> Result<()> {
        if self.subdiv_x == 0 || self.subdiv_y == 0 {
            return Err(FieldError::InvalidGrid("subdivisions must be at least 1"));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(FieldError::InvalidGrid("width and height must be positive"));
        }
        Ok(())
    }
}

/// How the text is drawn into the offscreen raster.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub raster_size: u32,
    pub font: String,
    pub stroke_width: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            raster_size: TEXT_RASTER_SIZE,
            font: TEXT_FONT.to_string(),
            stroke_width: TEXT_STROKE_WIDTH,
        }
    }
}

/// Raster scan parameters and the world rectangle the raster maps onto.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleParams {
    pub stride: usize,
    pub alpha_threshold: u8,
    pub extent_x: f32,
    pub extent_y: f32,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            stride: TEXT_SAMPLE_STRIDE,
            alpha_threshold: TEXT_ALPHA_THRESHOLD,
            extent_x: TEXT_EXTENT_X,
            extent_y: TEXT_EXTENT_Y,
        }
    }
}

/// Jittered ring used for particles the outline does not claim.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterParams {
    pub radius_min: f32,
    pub radius_span: f32,
    pub y_squash: f32,
    pub depth: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            radius_min: SCATTER_RADIUS_MIN,
            radius_span: SCATTER_RADIUS_SPAN,
            y_squash: SCATTER_Y_SQUASH,
            depth: SCATTER_DEPTH,
        }
    }
}

/// Single-channel coverage raster, row-major, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaRaster {
    pub width: u32,
    pub height: u32,
    pub alpha: Vec<u8>,
}

impl AlphaRaster {
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self> {
        if alpha.len() != width as usize * height as usize {
            return Err(FieldError::RasterSize {
                width,
                height,
                len: alpha.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Keep the alpha channel of RGBA8 pixel data (canvas `ImageData` layout).
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(FieldError::RasterSize {
                width,
                height,
                len: rgba.len() / 4,
            });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.alpha[(y * self.width + x) as usize]
    }
}

/// Source of text coverage. The browser strokes the text on a 2D canvas.
pub trait GlyphRasterizer {
    fn rasterize(&mut self, text: &str, style: &TextStyle) -> Result<AlphaRaster>;
}

/// Row-major grid of `(subdiv_x + 1) * (subdiv_y + 1)` points on z = 0,
/// starting at the top-left corner.
pub fn plane_grid(spec: &GridSpec) -> Result<Vec<f32>> {
    spec.validate()?;
    let cols = spec.subdiv_x as usize + 1;
    let rows = spec.subdiv_y as usize + 1;
    let half_w = spec.width * 0.5;
    let half_h = spec.height * 0.5;
    let cell_w = spec.width / spec.subdiv_x as f32;
    let cell_h = spec.height / spec.subdiv_y as f32;
    let mut out = Vec::with_capacity(cols * rows * 3);
    for iy in 0..rows {
        let y = half_h - iy as f32 * cell_h;
        for ix in 0..cols {
            let x = ix as f32 * cell_w - half_w;
            out.extend_from_slice(&[x, y, 0.0]);
        }
    }
    Ok(out)
}

/// Collect outline pixels at a fixed stride and map them into the world
/// rectangle centred at the origin. Raster y grows down, plane y grows up.
pub fn sample_outline(raster: &AlphaRaster, params: &SampleParams) -> Vec<f32> {
    let stride = params.stride.max(1);
    let w = raster.width as f32;
    let h = raster.height as f32;
    let mut out = Vec::new();
    for y in (0..raster.height).step_by(stride) {
        for x in (0..raster.width).step_by(stride) {
            if raster.alpha_at(x, y) > params.alpha_threshold {
                let px = (x as f32 / w) * params.extent_x - params.extent_x * 0.5;
                let py = params.extent_y * 0.5 - (y as f32 / h) * params.extent_y;
                out.extend_from_slice(&[px, py, 0.0]);
            }
        }
    }
    out
}

/// Fit outline samples to exactly `count` particles. Extra samples are
/// dropped in scan order; missing ones are filled from the scatter ring.
pub fn reconcile_targets<R: Rng + ?Sized>(
    samples: &[f32],
    count: usize,
    scatter: &ScatterParams,
    rng: &mut R,
) -> Vec<f32> {
    let used = (samples.len() / 3).min(count);
    let mut out = Vec::with_capacity(count * 3);
    out.extend_from_slice(&samples[..used * 3]);
    for _ in used..count {
        let angle = rng.gen::<f32>() * TAU;
        let radius = scatter.radius_min + rng.gen::<f32>() * scatter.radius_span;
        out.push(angle.cos() * radius);
        out.push(angle.sin() * radius * scatter.y_squash);
        out.push((rng.gen::<f32>() - 0.5) * scatter.depth);
    }
    if used < samples.len() / 3 {
        log::debug!(
            "[cloud] {} outline samples truncated to {} particles",
            samples.len() / 3,
            count
        );
    }
    out
}

/// Index-aligned base and target buffers, immutable once built.
#[derive(Clone, Debug)]
pub struct PointCloud {
    base: Vec<f32>,
    target: Vec<f32>,
    outline_count: usize,
}

impl PointCloud {
    /// Build from pre-sampled outline points.
    pub fn build<R: Rng + ?Sized>(
        grid: &GridSpec,
        samples: &[f32],
        scatter: &ScatterParams,
        rng: &mut R,
    ) -> Result<Self> {
        let base = plane_grid(grid)?;
        let count = base.len() / 3;
        let target = reconcile_targets(samples, count, scatter, rng);
        debug_assert_eq!(base.len(), target.len());
        Ok(Self {
            base,
            target,
            outline_count: (samples.len() / 3).min(count),
        })
    }

    /// Rasterize `text`, sample its outline and build the cloud.
    pub fn from_text<G, R>(
        grid: &GridSpec,
        text: &str,
        rasterizer: &mut G,
        style: &TextStyle,
        sample: &SampleParams,
        scatter: &ScatterParams,
        rng: &mut R,
    ) -> Result<Self>
    where
        G: GlyphRasterizer + ?Sized,
        R: Rng + ?Sized,
    {
        if text.trim().is_empty() {
            return Err(FieldError::EmptyText);
        }
        let raster = rasterizer.rasterize(text, style)?;
        let samples = sample_outline(&raster, sample);
        let cloud = Self::build(grid, &samples, scatter, rng)?;
        log::info!(
            "[cloud] particles={} outline={} scatter={}",
            cloud.len(),
            cloud.outline_count,
            cloud.len() - cloud.outline_count
        );
        Ok(cloud)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.base.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Particles whose target lies on the text outline; the rest are scatter.
    pub fn outline_count(&self) -> usize {
        self.outline_count
    }

    pub fn base(&self) -> &[f32] {
        &self.base
    }

    pub fn target(&self) -> &[f32] {
        &self.target
    }

    #[inline]
    pub fn base_xy(&self, i: usize) -> [f32; 2] {
        [self.base[i * 3], self.base[i * 3 + 1]]
    }

    #[inline]
    pub fn target_xyz(&self, i: usize) -> [f32; 3] {
        [self.target[i * 3], self.target[i * 3 + 1], self.target[i * 3 + 2]]
    }
}
