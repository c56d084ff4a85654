//! Screen layout: header bands, mid band, and the four comparison quadrants.
//!
//! The drawable area excludes a 60-pixel header (40-pixel title band plus a
//! 20-pixel quadrant-label band) and a 20-pixel mid band separating the top
//! and bottom halves. Each quadrant is further inset by a configurable border
//! on every edge. A layout that leaves any quadrant without positive area is
//! a configuration error, reported before any draw call is issued.

use crate::foundation::core::Region;
use crate::foundation::error::BenchResult;

/// Height of the title band at the top of the surface.
pub const TITLE_BAND_H: i32 = 40;
/// Height of the quadrant-label band below the title band.
pub const LABEL_BAND_H: i32 = 20;
/// Total header height above the drawable area.
pub const HEADER_H: i32 = TITLE_BAND_H + LABEL_BAND_H;
/// Height of the band separating the top and bottom halves.
pub const MID_BAND_H: i32 = 20;

/// Default inset applied to every quadrant edge.
pub const DEFAULT_BORDER: i32 = 10;

/// The four comparison regions, one per color policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quadrants {
    /// Top-left: per-record color at full opacity.
    pub full_alpha: Region,
    /// Top-right: per-record color with spatially-varying alpha.
    pub vary_alpha: Region,
    /// Bottom-right: varying alpha again, over the gradient swatch.
    pub vary_alpha_on_color: Region,
    /// Bottom-left: three-way color classification at full opacity.
    pub color_test: Region,
}

impl Quadrants {
    /// The regions in draw order.
    pub fn in_order(&self) -> [Region; 4] {
        [
            self.full_alpha,
            self.vary_alpha,
            self.vary_alpha_on_color,
            self.color_test,
        ]
    }
}

/// Height of one drawable half for a surface of height `h`.
pub fn half_height(h: i32) -> i32 {
    (h - HEADER_H - MID_BAND_H) / 2
}

/// Top edge of the bottom drawable half for a surface of height `h`.
pub fn bottom_half_y(h: i32) -> i32 {
    HEADER_H + MID_BAND_H + half_height(h)
}

/// Compute the four inset comparison regions for a `width` x `height`
/// surface.
///
/// Each nominal half shrinks by `border` pixels on every edge. Errors if the
/// surface is too small for the configured layout.
pub fn quadrants(width: i32, height: i32, border: i32) -> BenchResult<Quadrants> {
    let half_w = width / 2;
    let half_h = half_height(height);
    let top_y = HEADER_H;
    let bottom_y = bottom_half_y(height);

    let inset = |x1: i32, y1: i32, x2: i32, y2: i32| {
        Region::new(
            x1 + border,
            y1 + border,
            x2 - x1 - 2 * border,
            y2 - y1 - 2 * border,
        )
    };

    Ok(Quadrants {
        full_alpha: inset(0, top_y, half_w, top_y + half_h)?,
        vary_alpha: inset(half_w, top_y, width, top_y + half_h)?,
        vary_alpha_on_color: inset(half_w, bottom_y, width, height)?,
        color_test: inset(0, bottom_y, half_w, height)?,
    })
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
