//! Screen decoration drawn between benchmark runs.
//!
//! Clears the surface, paints the analog color gradient under the
//! bottom-right quadrant, draws the band separators and the header texts.
//! All coordinates are in surface space with no clip active.

use crate::foundation::core::Rgba8;
use crate::foundation::error::BenchResult;
use crate::gfx::Surface;
use crate::viewport::{HEADER_H, MID_BAND_H, TITLE_BAND_H, half_height};

/// Approximate half advance of one label glyph, for centering.
const HALF_CHAR_W: i32 = 4;

/// Clear the surface and draw the frame chrome for `title`.
///
/// The gradient swatch covers the nominal bottom-right half (before border
/// inset) so the `A=0-254 on Color` quadrant composites over non-black
/// pixels. Gradient channels follow `(128*fx^2, 128*(1-fx*fy)^2, 128*fy^2)`
/// with `fx`, `fy` normalized across the half.
pub fn clear_screen(surface: &mut dyn Surface, title: &str) -> BenchResult<()> {
    let (w, h) = surface.size();
    let (w, h) = (w as i32, h as i32);
    let half_w = w / 2;
    let half_h = half_height(h);
    let mid_top = HEADER_H + half_h;
    let bottom_y = mid_top + MID_BAND_H;

    surface.clear_clip()?;
    surface.clear(Rgba8::BLACK)?;

    // Gradient swatch under the bottom-right quadrant.
    let step_x = 1.0 / f64::from(half_w.max(1));
    let step_y = 1.0 / f64::from(half_h.max(1));
    let mut fx = 0.0;
    for x in half_w..w {
        let mut fy = 0.0;
        for y in bottom_y..h {
            let fxy = 1.0 - fx * fy;
            surface.pixel(
                x,
                y,
                Rgba8::new(
                    (128.0 * fx * fx) as u8,
                    (128.0 * fxy * fxy) as u8,
                    (128.0 * fy * fy) as u8,
                    255,
                ),
            )?;
            fy += step_y;
        }
        fx += step_x;
    }

    // Band separators.
    surface.hline(0, w, TITLE_BAND_H - 1, Rgba8::WHITE)?;
    surface.hline(0, w, HEADER_H - 1, Rgba8::WHITE)?;
    surface.hline(0, w, mid_top + 1, Rgba8::WHITE)?;
    surface.hline(0, w, bottom_y - 1, Rgba8::WHITE)?;
    surface.vline(half_w, TITLE_BAND_H, h, Rgba8::WHITE)?;

    // Header texts.
    let headline = format!("Current Primitive: {title}  -  Space = next, Backspace = previous, Q = quit");
    centered_text(surface, half_w, 13, &headline)?;
    centered_text(surface, w / 4, TITLE_BAND_H + 6, "A=255 on Black")?;
    centered_text(surface, 3 * w / 4, TITLE_BAND_H + 6, "A=0-254 on Black")?;
    centered_text(surface, w / 4, mid_top + 6, "A=255, Color Test")?;
    centered_text(surface, 3 * w / 4, mid_top + 6, "A=0-254 on Color")?;

    Ok(())
}

fn centered_text(surface: &mut dyn Surface, cx: i32, y: i32, text: &str) -> BenchResult<()> {
    let x = cx - HALF_CHAR_W * text.len() as i32;
    surface.text(x, y, text, Rgba8::WHITE)
}

#[cfg(test)]
#[path = "../tests/unit/annotate.rs"]
mod tests;
