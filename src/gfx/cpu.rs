//! The `vello_cpu` drawing surface.

use std::sync::Arc;

use kurbo::{PathEl, Shape};

use crate::foundation::core::{Region, Rgba8};
use crate::foundation::error::{BenchError, BenchResult};
use crate::gfx::label::{LabelBrush, LabelEngine};
use crate::gfx::{FrameRgba, Surface, TexturePatch};

/// Flattening tolerance for curve-bearing outlines.
const PATH_TOLERANCE: f64 = 0.1;

/// Stroke width for hairline outlines.
const HAIRLINE: f64 = 1.0;

/// CPU implementation of [`Surface`] backed by `vello_cpu`.
///
/// Draw calls accumulate into a retained scene; [`CpuSurface::render`]
/// rasterizes the scene into a premultiplied RGBA8 frame and resets it.
/// An active clip region both clips and re-origins draws (viewport
/// semantics).
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    width: u32,
    height: u32,
    clip: Option<Region>,
    labels: LabelEngine,
    font_cache: Option<(u64, vello_cpu::peniko::FontData)>,
    font_warned: bool,
}

impl CpuSurface {
    /// Create a surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> BenchResult<Self> {
        if width == 0 || height == 0 {
            return Err(BenchError::config("surface dimensions must be > 0"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| BenchError::config("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| BenchError::config("surface height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width,
            height,
            clip: None,
            labels: LabelEngine::new(),
            font_cache: None,
            font_warned: false,
        })
    }

    fn origin(&self) -> (i32, i32) {
        self.clip.map_or((0, 0), |r| (r.x, r.y))
    }

    fn begin(&mut self, color: Rgba8) {
        let (dx, dy) = self.origin();
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(dx),
                f64::from(dy),
            )));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
    }

    fn fill(&mut self, path: &kurbo::BezPath, color: Rgba8) -> BenchResult<()> {
        self.begin(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn stroke(&mut self, path: &kurbo::BezPath, width: f64, color: Rgba8) -> BenchResult<()> {
        self.begin(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn fill_rect_px(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        self.begin(color);
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            f64::from(x0),
            f64::from(y0),
            f64::from(x1),
            f64::from(y1),
        ));
    }

    fn font_for_bytes(&mut self, id: u64, bytes: &[u8], index: u32) -> vello_cpu::peniko::FontData {
        if let Some((cached_id, font)) = &self.font_cache
            && *cached_id == id
        {
            return font.clone();
        }
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.to_vec()),
            index,
        );
        self.font_cache = Some((id, font.clone()));
        font
    }
}

impl crate::gfx::Renderable for CpuSurface {
    /// Rasterize the accumulated scene and reset it for the next frame.
    fn render(&mut self) -> BenchResult<FrameRgba> {
        if self.clip.take().is_some() {
            self.ctx.pop_layer();
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width as u16, self.height as u16);
        self.ctx.render_to_pixmap(&mut pixmap);
        self.ctx.reset();
        Ok(FrameRgba {
            width: self.width,
            height: self.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba8) -> BenchResult<()> {
        let clip = self.clip;
        if clip.is_some() {
            self.ctx.pop_layer();
            self.clip = None;
        }
        self.fill_rect_px(0, 0, self.width as i32, self.height as i32, color);
        if let Some(region) = clip {
            self.set_clip(region)?;
        }
        Ok(())
    }

    fn set_clip(&mut self, region: Region) -> BenchResult<()> {
        if region.right() > self.width as i32 || region.bottom() > self.height as i32 {
            return Err(BenchError::config(format!(
                "clip region {region:?} exceeds {}x{} surface",
                self.width, self.height
            )));
        }
        if self.clip.take().is_some() {
            self.ctx.pop_layer();
        }
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&region_path(region));
        self.clip = Some(region);
        Ok(())
    }

    fn clear_clip(&mut self) -> BenchResult<()> {
        if self.clip.take().is_some() {
            self.ctx.pop_layer();
        }
        Ok(())
    }

    fn pixel(&mut self, x: i32, y: i32, color: Rgba8) -> BenchResult<()> {
        self.fill_rect_px(x, y, x + 1, y + 1, color);
        Ok(())
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgba8) -> BenchResult<()> {
        self.fill_rect_px(x1.min(x2), y, x1.max(x2) + 1, y + 1, color);
        Ok(())
    }

    fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Rgba8) -> BenchResult<()> {
        self.fill_rect_px(x, y1.min(y2), x + 1, y1.max(y2) + 1, color);
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()> {
        self.stroke(&segment_path(x1, y1, x2, y2), HAIRLINE, color)
    }

    fn thick_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u8,
        color: Rgba8,
    ) -> BenchResult<()> {
        self.stroke(&segment_path(x1, y1, x2, y2), f64::from(width), color)
    }

    fn rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()> {
        self.stroke(&rect_px(x1, y1, x2, y2).to_path(PATH_TOLERANCE), HAIRLINE, color)
    }

    fn rounded_rectangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        radius: i32,
        color: Rgba8,
    ) -> BenchResult<()> {
        let rr = kurbo::RoundedRect::from_rect(rect_px(x1, y1, x2, y2), f64::from(radius.max(0)));
        self.stroke(&rr.to_path(PATH_TOLERANCE), HAIRLINE, color)
    }

    fn filled_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) -> BenchResult<()> {
        self.fill_rect_px(x1, y1, x2, y2, color);
        Ok(())
    }

    fn circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()> {
        let c = kurbo::Circle::new((f64::from(x), f64::from(y)), f64::from(r.max(0)));
        self.stroke(&c.to_path(PATH_TOLERANCE), HAIRLINE, color)
    }

    fn aa_circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()> {
        // The sparse-strip rasterizer anti-aliases everything; the aliased
        // and anti-aliased entry points share one path here.
        self.circle(x, y, r, color)
    }

    fn filled_circle(&mut self, x: i32, y: i32, r: i32, color: Rgba8) -> BenchResult<()> {
        let c = kurbo::Circle::new((f64::from(x), f64::from(y)), f64::from(r.max(0)));
        self.fill(&c.to_path(PATH_TOLERANCE), color)
    }

    fn ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: Rgba8) -> BenchResult<()> {
        let e = ellipse_px(x, y, rx, ry);
        self.stroke(&e.to_path(PATH_TOLERANCE), HAIRLINE, color)
    }

    fn aa_ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: Rgba8) -> BenchResult<()> {
        self.ellipse(x, y, rx, ry, color)
    }

    fn filled_ellipse(
        &mut self,
        x: i32,
        y: i32,
        rx: i32,
        ry: i32,
        color: Rgba8,
    ) -> BenchResult<()> {
        let e = ellipse_px(x, y, rx, ry);
        self.fill(&e.to_path(PATH_TOLERANCE), color)
    }

    fn bezier(&mut self, points: &[(i32, i32)], _steps: u32, color: Rgba8) -> BenchResult<()> {
        // `_steps` is the caller's flattening hint; curves are flattened
        // adaptively here instead.
        let mut path = kurbo::BezPath::new();
        match points {
            [p0, p1, p2] => {
                path.move_to(to_point(*p0));
                path.quad_to(to_point(*p1), to_point(*p2));
            }
            [p0, p1, p2, p3] => {
                path.move_to(to_point(*p0));
                path.curve_to(to_point(*p1), to_point(*p2), to_point(*p3));
            }
            _ => {
                return Err(BenchError::config(format!(
                    "bezier expects 3 or 4 control points, got {}",
                    points.len()
                )));
            }
        }
        self.stroke(&path, HAIRLINE, color)
    }

    fn polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()> {
        self.stroke(&polygon_path(points)?, HAIRLINE, color)
    }

    fn aa_polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()> {
        self.polygon(points, color)
    }

    fn filled_polygon(&mut self, points: &[(i32, i32)], color: Rgba8) -> BenchResult<()> {
        self.fill(&polygon_path(points)?, color)
    }

    fn trigon(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Rgba8,
    ) -> BenchResult<()> {
        self.polygon(&[(x1, y1), (x2, y2), (x3, y3)], color)
    }

    fn arc(&mut self, x: i32, y: i32, r: i32, a1: i32, a2: i32, color: Rgba8) -> BenchResult<()> {
        let arc = arc_px(x, y, r, a1, a2);
        self.stroke(&arc.to_path(PATH_TOLERANCE), HAIRLINE, color)
    }

    fn pie(&mut self, x: i32, y: i32, r: i32, a1: i32, a2: i32, color: Rgba8) -> BenchResult<()> {
        self.stroke(&pie_path(x, y, r, a1, a2), HAIRLINE, color)
    }

    fn filled_pie(
        &mut self,
        x: i32,
        y: i32,
        r: i32,
        a1: i32,
        a2: i32,
        color: Rgba8,
    ) -> BenchResult<()> {
        self.fill(&pie_path(x, y, r, a1, a2), color)
    }

    fn textured_polygon(
        &mut self,
        points: &[(i32, i32)],
        texture: &TexturePatch,
    ) -> BenchResult<()> {
        let path = polygon_path(points)?;
        let image = patch_to_image(texture)?;
        self.begin(Rgba8::WHITE);
        self.ctx.set_paint(image);
        self.ctx.fill_path(&bezpath_to_cpu(&path));
        Ok(())
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba8) -> BenchResult<()> {
        let brush = LabelBrush {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout = self.labels.layout(text, 13.0, brush)?;

        let (dx, dy) = self.origin();
        let mut drew = false;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                let pf = run.run().font();
                let font = self.font_for_bytes(pf.data.id(), pf.data.data(), pf.index);
                self.ctx
                    .set_blend_mode(vello_cpu::peniko::BlendMode::default());
                self.ctx
                    .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                self.ctx
                    .set_transform(vello_cpu::kurbo::Affine::translate((
                        f64::from(x + dx),
                        f64::from(y + dy),
                    )));
                self.ctx
                    .set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
                drew = true;
            }
        }

        if !drew && !self.font_warned {
            tracing::warn!("no usable system font; overlay labels will not render");
            self.font_warned = true;
        }
        Ok(())
    }
}

fn to_point(p: (i32, i32)) -> kurbo::Point {
    kurbo::Point::new(f64::from(p.0), f64::from(p.1))
}

fn segment_path(x1: i32, y1: i32, x2: i32, y2: i32) -> kurbo::BezPath {
    let mut path = kurbo::BezPath::new();
    path.move_to(to_point((x1, y1)));
    path.line_to(to_point((x2, y2)));
    path
}

fn rect_px(x1: i32, y1: i32, x2: i32, y2: i32) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(x1.min(x2)),
        f64::from(y1.min(y2)),
        f64::from(x1.max(x2)),
        f64::from(y1.max(y2)),
    )
}

fn ellipse_px(x: i32, y: i32, rx: i32, ry: i32) -> kurbo::Ellipse {
    kurbo::Ellipse::new(
        (f64::from(x), f64::from(y)),
        (f64::from(rx.max(0)), f64::from(ry.max(0))),
        0.0,
    )
}

fn arc_px(x: i32, y: i32, r: i32, a1: i32, a2: i32) -> kurbo::Arc {
    let start = f64::from(a1).to_radians();
    let sweep = f64::from((a2 - a1).rem_euclid(360)).to_radians();
    kurbo::Arc::new(
        (f64::from(x), f64::from(y)),
        (f64::from(r.max(0)), f64::from(r.max(0))),
        start,
        sweep,
        0.0,
    )
}

fn pie_path(x: i32, y: i32, r: i32, a1: i32, a2: i32) -> kurbo::BezPath {
    let arc = arc_px(x, y, r, a1, a2);
    let center = kurbo::Point::new(f64::from(x), f64::from(y));
    let mut path = kurbo::BezPath::new();
    path.move_to(center);
    let mut first = true;
    for el in arc.path_elements(PATH_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) if first => path.line_to(p),
            other => path.push(other),
        }
        first = false;
    }
    path.close_path();
    path
}

fn polygon_path(points: &[(i32, i32)]) -> BenchResult<kurbo::BezPath> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| BenchError::config("polygon requires at least one vertex"))?;
    let mut path = kurbo::BezPath::new();
    path.move_to(to_point(*first));
    for p in rest {
        path.line_to(to_point(*p));
    }
    path.close_path();
    Ok(path)
}

fn region_path(region: Region) -> vello_cpu::kurbo::BezPath {
    let x0 = f64::from(region.x);
    let y0 = f64::from(region.y);
    let x1 = f64::from(region.right());
    let y1 = f64::from(region.bottom());
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(vello_cpu::kurbo::Point::new(x0, y0));
    path.line_to(vello_cpu::kurbo::Point::new(x1, y0));
    path.line_to(vello_cpu::kurbo::Point::new(x1, y1));
    path.line_to(vello_cpu::kurbo::Point::new(x0, y1));
    path.close_path();
    path
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn patch_to_image(patch: &TexturePatch) -> BenchResult<vello_cpu::Image> {
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (patch.width() as usize) * (patch.height() as usize),
    );
    for px in patch.pixels() {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array(
            premul_rgba8([px.r, px.g, px.b, px.a]),
        ));
    }
    let w: u16 = patch
        .width()
        .try_into()
        .map_err(|_| BenchError::render("texture patch width exceeds u16"))?;
    let h: u16 = patch
        .height()
        .try_into()
        .map_err(|_| BenchError::render("texture patch height exceeds u16"))?;
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

#[cfg(test)]
#[path = "../../tests/unit/gfx_cpu.rs"]
mod tests;
