//! The drawing-surface boundary.
//!
//! [`Surface`] is the seam between the harness and the external primitive
//! library: one method per primitive kind, integer coordinates, degree
//! angles, straight-alpha RGBA. Rasterization quality (anti-aliasing, curve
//! flattening, texture sampling) is a property of the implementation, not of
//! this contract. Methods fail only on resource exhaustion, which the
//! harness treats as fatal.

use crate::foundation::core::{Region, Rgba8};
use crate::foundation::error::{BenchError, BenchResult};

pub mod cpu;
mod label;

pub use cpu::CpuSurface;

#[cfg(test)]
#[path = "../tests/unit/gfx.rs"]
mod tests;

/// A small owned texture used by the textured-polygon primitive.
///
/// Plain pixel data; the surface uploads it on use. Ownership scopes the
/// resource to the draw (or case) that built it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TexturePatch {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl TexturePatch {
    /// Create a patch; `pixels` must hold exactly `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> BenchResult<Self> {
        if width == 0 || height == 0 {
            return Err(BenchError::config("texture patch must be non-empty"));
        }
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(BenchError::config(format!(
                "texture patch expects {} pixels, got {}",
                (width as usize) * (height as usize),
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Patch width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Patch height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data in row-major order.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }
}

/// A rendered RGBA8 frame (premultiplied alpha, row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Copy of the pixel data converted back to straight alpha, for image
    /// encoders that expect unassociated channels.
    pub fn to_straight_alpha(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a != 0 && a != 255 {
                let a16 = u16::from(a);
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a16 / 2) / a16).min(255) as u8;
                }
            }
        }
        out
    }
}

/// Produces finished frames from accumulated draws.
///
/// Split from [`Surface`] so case execution can be tested against mocks
/// that never rasterize.
pub trait Renderable {
    /// Rasterize everything drawn since the last call and reset.
    fn render(&mut self) -> BenchResult<FrameRgba>;
}

/// The primitive-drawing collaborator consumed by benchmark cases.
///
/// `set_clip` both clips subsequent draws to `region` and translates their
/// coordinates by the region origin (viewport semantics); `clear_clip`
/// restores full-surface drawing in surface coordinates.
pub trait Surface {
    /// Surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`, ignoring any active clip.
    fn clear(&mut self, color: Rgba8) -> BenchResult<()>;

    /// Restrict and re-origin subsequent draws to `region`.
    fn set_clip(&mut self, region: Region) -> BenchResult<()>;

    /// Remove any active clip.
    fn clear_clip(&mut self) -> BenchResult<()>;

    /// Single pixel.
    fn pixel(&mut self, x: i32, y: i32, color: Rgba8) -> BenchResult<()>;

    /// Horizontal line from `x1` to `x2` at `y`.
    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgba8) -> BenchResult<()>;

    /// Vertical line at `x` from `y1` to `y2`.
    fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Rgba8) -> BenchResult<()>;

    /// One-pixel line between two points.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()>;

    /// Line with the given stroke width.
    fn thick_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u8,
        color: Rgba8,
    ) -> BenchResult<()>;

    /// Rectangle outline between two corners.
    fn rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()>;

    /// Rounded-rectangle outline with corner radius `radius`.
    fn rounded_rectangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        radius: i32,
        color: Rgba8,
    ) -> BenchResult<()>;

    /// Filled axis-aligned box between two corners.
    fn filled_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()>;

    /// Circle outline.
    fn circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()>;

    /// Anti-aliased circle outline.
    fn aa_circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()>;

    /// Filled circle.
    fn filled_circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()>;

    /// Ellipse outline with radii `rx` / `ry`.
    fn ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: Rgba8) -> BenchResult<()>;

    /// Anti-aliased ellipse outline.
    fn aa_ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: Rgba8) -> BenchResult<()>;

    /// Filled ellipse.
    fn filled_ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: Rgba8)
    -> BenchResult<()>;

    /// Bezier curve through `points` control points, flattened with `steps`
    /// interpolation steps (implementations may flatten adaptively instead).
    fn bezier(&mut self, points: &[(i32, i32)], steps: u32, color: Rgba8) -> BenchResult<()>;

    /// Closed polygon outline.
    fn polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()>;

    /// Anti-aliased closed polygon outline.
    fn aa_polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()>;

    /// Filled polygon.
    fn filled_polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()>;

    /// Triangle outline.
    #[allow(clippy::too_many_arguments)]
    fn trigon(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Rgba8,
    ) -> BenchResult<()>;

    /// Circular arc from `a1` to `a2` degrees.
    fn arc(&mut self, x: i32, y: i32, r: i32, a1: i32, a2: i32, color: Rgba8) -> BenchResult<()>;

    /// Pie-slice outline from `a1` to `a2` degrees.
    fn pie(&mut self, x: i32, y: i32, r: i32, a1: i32, a2: i32, color: Rgba8) -> BenchResult<()>;

    /// Filled pie slice from `a1` to `a2` degrees.
    fn filled_pie(
        &mut self,
        x: i32,
        y: i32,
        r: i32,
        a1: i32,
        a2: i32,
        color: Rgba8,
    ) -> BenchResult<()>;

    /// Polygon filled with a repeating texture patch.
    fn textured_polygon(
        &mut self,
        points: &[(i32, i32)],
        texture: &TexturePatch,
    ) -> BenchResult<()>;

    /// Text label with its top-left corner at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba8) -> BenchResult<()>;
}
