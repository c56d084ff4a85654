use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn texture_patch_validates_pixel_count() {
    let pixels = vec![Rgba8::WHITE; 4];
    assert!(TexturePatch::new(2, 2, pixels.clone()).is_ok());
    assert!(TexturePatch::new(3, 2, pixels.clone()).is_err());
    assert!(TexturePatch::new(0, 2, Vec::new()).is_err());
}

#[test]
fn texture_patch_accessors() {
    let patch = TexturePatch::new(2, 1, vec![Rgba8::RED, Rgba8::BLUE]).unwrap();
    assert_eq!((patch.width(), patch.height()), (2, 1));
    assert_eq!(patch.pixels(), &[Rgba8::RED, Rgba8::BLUE]);
}

#[test]
fn straight_alpha_conversion_inverts_premultiplication() {
    let frame = FrameRgba {
        width: 3,
        height: 1,
        // Half-covered red, an opaque pixel, a fully transparent pixel.
        data: vec![128, 0, 0, 128, 10, 20, 30, 255, 5, 5, 5, 0],
    };
    let straight = frame.to_straight_alpha();
    assert_eq!(&straight[0..4], &[255, 0, 0, 128]);
    assert_eq!(&straight[4..8], &[10, 20, 30, 255]);
    assert_eq!(&straight[8..12], &[5, 5, 5, 0]);
}
