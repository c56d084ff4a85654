use super::*;
use crate::gfx::Renderable as _;

fn pixel_at(frame: &FrameRgba, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    frame.data[i..i + 4].try_into().unwrap()
}

#[test]
fn construction_validates_dimensions() {
    assert!(CpuSurface::new(0, 100).is_err());
    assert!(CpuSurface::new(100, 0).is_err());
    assert!(CpuSurface::new(70_000, 100).is_err());
    assert!(CpuSurface::new(64, 64).is_ok());
}

#[test]
fn size_reports_construction_dimensions() {
    let surface = CpuSurface::new(320, 240).unwrap();
    assert_eq!(surface.size(), (320, 240));
}

#[test]
fn render_produces_a_full_frame() {
    let mut surface = CpuSurface::new(32, 16).unwrap();
    surface.clear(Rgba8::BLACK).unwrap();
    let frame = surface.render().unwrap();
    assert_eq!((frame.width, frame.height), (32, 16));
    assert_eq!(frame.data.len(), 32 * 16 * 4);
    assert_eq!(pixel_at(&frame, 0, 0), [0, 0, 0, 255]);
    assert_eq!(pixel_at(&frame, 31, 15), [0, 0, 0, 255]);
}

#[test]
fn filled_box_paints_solid_color() {
    let mut surface = CpuSurface::new(64, 64).unwrap();
    surface.clear(Rgba8::BLACK).unwrap();
    surface.filled_box(0, 0, 16, 16, Rgba8::RED).unwrap();
    let frame = surface.render().unwrap();
    assert_eq!(pixel_at(&frame, 8, 8), [255, 0, 0, 255]);
    assert_eq!(pixel_at(&frame, 40, 40), [0, 0, 0, 255]);
}

#[test]
fn clip_translates_and_restricts_draws() {
    let mut surface = CpuSurface::new(64, 64).unwrap();
    surface.clear(Rgba8::BLACK).unwrap();
    let region = Region::new(10, 10, 20, 20).unwrap();
    surface.set_clip(region).unwrap();
    // Local origin maps to the region origin.
    surface.filled_box(0, 0, 4, 4, Rgba8::WHITE).unwrap();
    // Extends past the region; the overhang is clipped away.
    surface.filled_box(15, 15, 40, 40, Rgba8::GREEN).unwrap();
    surface.clear_clip().unwrap();
    let frame = surface.render().unwrap();

    assert_eq!(pixel_at(&frame, 12, 12), [255, 255, 255, 255]);
    assert_eq!(pixel_at(&frame, 28, 28), [0, 255, 0, 255]);
    // Outside the clip region.
    assert_eq!(pixel_at(&frame, 35, 35), [0, 0, 0, 255]);
    assert_eq!(pixel_at(&frame, 5, 5), [0, 0, 0, 255]);
}

#[test]
fn clip_region_must_fit_the_surface() {
    let mut surface = CpuSurface::new(32, 32).unwrap();
    let oversize = Region::new(16, 16, 32, 32).unwrap();
    assert!(surface.set_clip(oversize).is_err());
}

#[test]
fn clear_ignores_the_active_clip() {
    let mut surface = CpuSurface::new(64, 64).unwrap();
    let region = Region::new(10, 10, 20, 20).unwrap();
    surface.set_clip(region).unwrap();
    surface.clear(Rgba8::BLUE).unwrap();
    let frame = surface.render().unwrap();
    assert_eq!(pixel_at(&frame, 0, 0), [0, 0, 255, 255]);
    assert_eq!(pixel_at(&frame, 63, 63), [0, 0, 255, 255]);
}

#[test]
fn bezier_requires_three_or_four_points() {
    let mut surface = CpuSurface::new(32, 32).unwrap();
    assert!(surface.bezier(&[(0, 0)], 100, Rgba8::WHITE).is_err());
    assert!(
        surface
            .bezier(&[(0, 0), (10, 0), (10, 10)], 100, Rgba8::WHITE)
            .is_ok()
    );
    assert!(
        surface
            .bezier(&[(0, 0), (10, 0), (10, 10), (0, 10)], 100, Rgba8::WHITE)
            .is_ok()
    );
}

#[test]
fn polygon_requires_a_vertex() {
    let mut surface = CpuSurface::new(32, 32).unwrap();
    assert!(surface.polygon(&[], Rgba8::WHITE).is_err());
}

#[test]
fn textured_polygon_paints_inside_the_outline() {
    let mut surface = CpuSurface::new(64, 64).unwrap();
    surface.clear(Rgba8::BLACK).unwrap();
    let patch = TexturePatch::new(2, 2, vec![Rgba8::WHITE; 4]).unwrap();
    surface
        .textured_polygon(&[(0, 0), (63, 0), (63, 63), (0, 63)], &patch)
        .unwrap();
    let frame = surface.render().unwrap();
    assert_ne!(pixel_at(&frame, 1, 1), [0, 0, 0, 255]);
}

#[test]
fn pixel_paints_one_texel() {
    let mut surface = CpuSurface::new(16, 16).unwrap();
    surface.clear(Rgba8::BLACK).unwrap();
    surface.pixel(5, 7, Rgba8::YELLOW).unwrap();
    let frame = surface.render().unwrap();
    assert_eq!(pixel_at(&frame, 5, 7), [255, 255, 0, 255]);
    assert_eq!(pixel_at(&frame, 6, 7), [0, 0, 0, 255]);
}
