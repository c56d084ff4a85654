//! The benchmark-case catalog.
//!
//! Each case names one primitive kind and draws a full [`SceneSample`]
//! through a shared four-region, four-policy driver. The catalog is a
//! fixed, ordered, process-wide read-only table; indices into it are the
//! contract between the cycler and the loop.

use crate::foundation::core::Rgba8;
use crate::foundation::error::BenchResult;
use crate::gfx::{Surface, TexturePatch};
use crate::scene::{SceneRecord, SceneSample};
use crate::viewport::Quadrants;

/// Corner radius shared by every rounded-rectangle draw.
const ROUNDED_RADIUS: i32 = 4;

/// Interpolation-step hint passed to the surface for curve draws.
const BEZIER_STEPS: u32 = 100;

/// The per-quadrant color treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Per-record random color at alpha 255.
    FullAlpha,
    /// Per-record random color with the record's spatial alpha.
    VaryAlpha,
    /// Same as [`ColorPolicy::VaryAlpha`], composited over the gradient
    /// swatch.
    VaryAlphaOnColor,
    /// Three-way classification on the record's base x, alpha 255.
    ColorTest,
}

impl ColorPolicy {
    /// All policies in quadrant draw order.
    pub const IN_ORDER: [Self; 4] = [
        Self::FullAlpha,
        Self::VaryAlpha,
        Self::VaryAlphaOnColor,
        Self::ColorTest,
    ];

    /// Resolve the draw color for `record` on a surface of full width
    /// `width`.
    pub fn color(self, record: &SceneRecord, width: i32) -> Rgba8 {
        match self {
            Self::FullAlpha => Rgba8::new(record.red, record.green, record.blue, 255),
            Self::VaryAlpha | Self::VaryAlphaOnColor => {
                Rgba8::new(record.red, record.green, record.blue, record.alpha)
            }
            Self::ColorTest => {
                if record.x < width / 6 {
                    Rgba8::RED
                } else if record.x < width / 3 {
                    Rgba8::GREEN
                } else {
                    Rgba8::BLUE
                }
            }
        }
    }

    /// Whether this policy substitutes radius-offset geometry for the
    /// paired-record geometry.
    fn offset_geometry(self) -> bool {
        matches!(self, Self::ColorTest)
    }
}

type DrawHook =
    fn(&mut dyn Surface, &SceneSample, usize, ColorPolicy, Rgba8) -> BenchResult<()>;

/// One named benchmark case: a stride, a record lookahead, and a draw hook.
pub struct BenchmarkCase {
    /// Display name, also used for CLI selection.
    pub name: &'static str,
    stride: usize,
    lookahead: usize,
    draw: DrawHook,
}

impl BenchmarkCase {
    const fn new(name: &'static str, stride: usize, lookahead: usize, draw: DrawHook) -> Self {
        Self {
            name,
            stride,
            lookahead,
            draw,
        }
    }

    /// Record-index stride between consecutive draws.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Execute the case over all four quadrants.
    ///
    /// Returns the number of draw calls actually issued. The clip is always
    /// cleared on return, including on error.
    pub fn run(
        &self,
        surface: &mut dyn Surface,
        quadrants: &Quadrants,
        scene: &SceneSample,
    ) -> BenchResult<u64> {
        let result = self.run_inner(surface, quadrants, scene);
        surface.clear_clip()?;
        result
    }

    fn run_inner(
        &self,
        surface: &mut dyn Surface,
        quadrants: &Quadrants,
        scene: &SceneSample,
    ) -> BenchResult<u64> {
        let width = surface.size().0 as i32;
        let end = scene.len().saturating_sub(self.lookahead);
        let mut drawn = 0u64;
        for (region, policy) in quadrants.in_order().into_iter().zip(ColorPolicy::IN_ORDER) {
            surface.set_clip(region)?;
            let mut i = 0;
            while i < end {
                let color = policy.color(scene.record(i), width);
                (self.draw)(surface, scene, i, policy, color)?;
                drawn += 1;
                i += self.stride;
            }
        }
        Ok(drawn)
    }
}

/// The fixed catalog, in cycling order.
pub static CATALOG: &[BenchmarkCase] = &[
    BenchmarkCase::new("Pixel", 1, 0, draw_pixel),
    BenchmarkCase::new("Hline", 2, 1, draw_hline),
    BenchmarkCase::new("Vline", 2, 1, draw_vline),
    BenchmarkCase::new("Rectangle", 2, 1, draw_rectangle),
    BenchmarkCase::new("RoundedRectangle", 2, 1, draw_rounded_rectangle),
    BenchmarkCase::new("Box", 2, 1, draw_box),
    BenchmarkCase::new("Line", 2, 1, draw_line),
    BenchmarkCase::new("Circle", 2, 0, draw_circle),
    BenchmarkCase::new("AACircle", 2, 0, draw_aa_circle),
    BenchmarkCase::new("FilledCircle", 2, 0, draw_filled_circle),
    BenchmarkCase::new("Ellipse", 2, 0, draw_ellipse),
    BenchmarkCase::new("AAEllipse", 2, 0, draw_aa_ellipse),
    BenchmarkCase::new("FilledEllipse", 2, 0, draw_filled_ellipse),
    BenchmarkCase::new("Bezier", 5, 3, draw_bezier),
    BenchmarkCase::new("Polygon", 3, 3, draw_polygon),
    BenchmarkCase::new("AAPolygon", 4, 3, draw_aa_polygon),
    BenchmarkCase::new("FilledPolygon", 4, 3, draw_filled_polygon),
    BenchmarkCase::new("Trigon", 1, 0, draw_trigon),
    BenchmarkCase::new("Arc", 1, 0, draw_arc),
    BenchmarkCase::new("Pie", 1, 0, draw_pie),
    BenchmarkCase::new("FilledPie", 1, 0, draw_filled_pie),
    BenchmarkCase::new("ThickLine", 6, 1, draw_thick_line),
    BenchmarkCase::new("TexturedPolygon", 1, 0, draw_textured_polygon),
];

/// Find a case by (case-insensitive) name.
pub fn find_case(name: &str) -> Option<(usize, &'static BenchmarkCase)> {
    CATALOG
        .iter()
        .enumerate()
        .find(|(_, case)| case.name.eq_ignore_ascii_case(name))
}

/// Endpoint pair for two-record primitives.
///
/// The color-test quadrant replaces the paired record with radius offsets
/// from the base point so classified shapes stay compact.
fn endpoints(scene: &SceneSample, i: usize, policy: ColorPolicy) -> (i32, i32, i32, i32) {
    let a = scene.record(i);
    if policy.offset_geometry() {
        (a.x, a.y, a.x + a.r1, a.y + a.r2)
    } else {
        let b = scene.record(i + 1);
        (a.x, a.y, b.x, b.y)
    }
}

/// Three vertices for curve and polygon primitives.
fn tri_points(scene: &SceneSample, i: usize, policy: ColorPolicy) -> [(i32, i32); 3] {
    let a = scene.record(i);
    if policy.offset_geometry() {
        [(a.x, a.y), (a.x + a.r1, a.y), (a.x, a.y + a.r2)]
    } else {
        let b = scene.record(i + 1);
        let c = scene.record(i + 2);
        [(a.x, a.y), (b.x, b.y), (c.x, c.y)]
    }
}

fn draw_pixel(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.pixel(r.x, r.y, color)
}

fn draw_hline(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let a = scene.record(i);
    if policy.offset_geometry() {
        let y = scene.record(i + 1).y;
        s.hline(a.x, a.x + a.r1, y, color)
    } else {
        let b = scene.record(i + 1);
        s.hline(a.x, b.x, b.y, color)
    }
}

fn draw_vline(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let a = scene.record(i);
    if policy.offset_geometry() {
        s.vline(a.x, a.y, a.y + a.r1, color)
    } else {
        let b = scene.record(i + 1);
        s.vline(a.x, a.y, b.y, color)
    }
}

fn draw_rectangle(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let (x1, y1, x2, y2) = endpoints(scene, i, policy);
    s.rectangle(x1, y1, x2, y2, color)
}

fn draw_rounded_rectangle(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let (x1, y1, x2, y2) = endpoints(scene, i, policy);
    s.rounded_rectangle(x1, y1, x2, y2, ROUNDED_RADIUS, color)
}

fn draw_box(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let (x1, y1, x2, y2) = endpoints(scene, i, policy);
    s.filled_box(x1, y1, x2, y2, color)
}

fn draw_line(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let (x1, y1, x2, y2) = endpoints(scene, i, policy);
    s.line(x1, y1, x2, y2, color)
}

fn draw_thick_line(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let (x1, y1, x2, y2) = endpoints(scene, i, policy);
    let width = scene.record(i).stroke_width;
    s.thick_line(x1, y1, x2, y2, width, color)
}

fn draw_circle(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.circle(r.x, r.y, r.r1, color)
}

fn draw_aa_circle(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.aa_circle(r.x, r.y, r.r1, color)
}

fn draw_filled_circle(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.filled_circle(r.x, r.y, r.r1, color)
}

fn draw_ellipse(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.ellipse(r.x, r.y, r.r1, r.r2, color)
}

fn draw_aa_ellipse(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.aa_ellipse(r.x, r.y, r.r1, r.r2, color)
}

fn draw_filled_ellipse(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.filled_ellipse(r.x, r.y, r.r1, r.r2, color)
}

fn draw_bezier(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    s.bezier(&tri_points(scene, i, policy), BEZIER_STEPS, color)
}

fn draw_polygon(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    s.polygon(&tri_points(scene, i, policy), color)
}

fn draw_aa_polygon(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    s.aa_polygon(&tri_points(scene, i, policy), color)
}

fn draw_filled_polygon(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    s.filled_polygon(&tri_points(scene, i, policy), color)
}

fn draw_trigon(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let [(x1, y1), (x2, y2), (x3, y3)] = scene.record(i).tri;
    s.trigon(x1, y1, x2, y2, x3, y3, color)
}

fn draw_arc(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.arc(r.x, r.y, r.r1, r.a1, r.a2, color)
}

fn draw_pie(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.pie(r.x, r.y, r.r1, r.a1, r.a2, color)
}

fn draw_filled_pie(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    _policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let r = scene.record(i);
    s.filled_pie(r.x, r.y, r.r1, r.a1, r.a2, color)
}

fn draw_textured_polygon(
    s: &mut dyn Surface,
    scene: &SceneSample,
    i: usize,
    policy: ColorPolicy,
    color: Rgba8,
) -> BenchResult<()> {
    let record = scene.record(i);
    // The 2x2 patch is rebuilt per draw, matching the per-record alpha and
    // classification recoloring of the workload.
    let patch = match policy {
        ColorPolicy::ColorTest => TexturePatch::new(2, 2, vec![color; 4])?,
        _ => {
            let a = match policy {
                ColorPolicy::FullAlpha => 255,
                _ => record.alpha,
            };
            TexturePatch::new(
                2,
                2,
                vec![
                    Rgba8::new(255, 255, 255, a),
                    Rgba8::new(255, 255, 0, a),
                    Rgba8::new(0, 255, 255, a),
                    Rgba8::new(255, 0, 255, a),
                ],
            )?
        }
    };
    s.textured_polygon(&record.tri, &patch)
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
