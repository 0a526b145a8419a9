//! Integration tests for the color value types

mod common;
use common::*;

use chroma_harmony::{Hsl, Hsv, Rgb};

#[test]
fn hue_wraps_into_range() {
    assert!(approx_eq(Hsl::new(370.0, 0.5, 0.5).h(), 10.0, EPSILON));
    assert!(approx_eq(Hsl::new(-10.0, 0.5, 0.5).h(), 350.0, EPSILON));
    assert!(approx_eq(Hsl::new(720.0, 0.5, 0.5).h(), 0.0, EPSILON));
    assert!(approx_eq(Hsl::new(360.0, 0.5, 0.5).h(), 0.0, EPSILON));
    assert!(approx_eq(Hsl::new(-360.0, 0.5, 0.5).h(), 0.0, EPSILON));
}

#[test]
fn hue_stays_in_half_open_interval() {
    // A tiny negative hue must not land on exactly 360.0 after wrapping.
    let h = Hsl::new(-1e-15, 0.5, 0.5).h();
    assert!((0.0..360.0).contains(&h));

    for &raw in &[-720.0, -359.999, -0.001, 0.0, 359.999, 1080.5] {
        let h = Hsl::new(raw, 0.5, 0.5).h();
        assert!((0.0..360.0).contains(&h), "hue {raw} wrapped to {h}");
    }
}

#[test]
fn saturation_and_lightness_are_clamped() {
    let hsl = Hsl::new(180.0, 1.5, -0.2);
    assert_eq!(hsl.s(), 1.0);
    assert_eq!(hsl.l(), 0.0);

    let hsl = Hsl::new(180.0, -0.5, 1.2);
    assert_eq!(hsl.s(), 0.0);
    assert_eq!(hsl.l(), 1.0);
}

#[test]
fn hsv_normalizes_like_hsl() {
    let hsv = Hsv::new(-90.0, 2.0, -1.0);
    assert!(approx_eq(hsv.h(), 270.0, EPSILON));
    assert_eq!(hsv.s(), 1.0);
    assert_eq!(hsv.v(), 0.0);
}

#[test]
fn with_sl_preserves_hue_and_normalizes() {
    let base = Hsl::new(123.0, 0.4, 0.6);
    let adjusted = base.with_sl(1.5, -0.1);

    assert!(approx_eq(adjusted.h(), 123.0, EPSILON));
    assert_eq!(adjusted.s(), 1.0);
    assert_eq!(adjusted.l(), 0.0);

    // The original is untouched.
    assert!(approx_eq(base.s(), 0.4, EPSILON));
    assert!(approx_eq(base.l(), 0.6, EPSILON));
}

#[test]
fn with_saturation_and_lightness_adjust_one_axis() {
    let base = Hsl::new(200.0, 0.5, 0.5);

    let desaturated = base.with_saturation(0.1);
    assert!(approx_eq(desaturated.h(), 200.0, EPSILON));
    assert!(approx_eq(desaturated.s(), 0.1, EPSILON));
    assert!(approx_eq(desaturated.l(), 0.5, EPSILON));

    let lightened = base.with_lightness(0.9);
    assert!(approx_eq(lightened.h(), 200.0, EPSILON));
    assert!(approx_eq(lightened.s(), 0.5, EPSILON));
    assert!(approx_eq(lightened.l(), 0.9, EPSILON));
}

#[test]
fn rotate_hue_wraps_around_the_wheel() {
    let base = Hsl::new(350.0, 0.5, 0.5);
    assert!(approx_eq(base.rotate_hue(30.0).h(), 20.0, EPSILON));
    assert!(approx_eq(base.rotate_hue(-30.0).h(), 320.0, EPSILON));
    assert!(approx_eq(base.rotate_hue(720.0).h(), 350.0, EPSILON));
}

#[test]
fn rgb_byte_conversion_rounds_half_away_from_zero() {
    // 0.5 * 255 = 127.5 rounds up to 128
    assert_eq!(Rgb::new(0.5, 0.0, 1.0).to_bytes(), (128, 0, 255));
    assert_eq!(Rgb::from_bytes(51, 102, 204), Rgb::new(0.2, 0.4, 0.8));
}

#[test]
fn rgb_byte_conversion_clamps_out_of_range_channels() {
    assert_eq!(Rgb::new(1.2, -0.3, 0.5).to_bytes(), (255, 0, 128));
}

#[test]
fn display_renders_rounded_components() {
    let hsl = Hsl::new(195.4, 0.5, 0.25);
    assert_eq!(format!("{hsl}"), "hsl(195, 0.50, 0.25)");

    let hsv = Hsv::new(30.0, 1.0, 0.75);
    assert_eq!(format!("{hsv}"), "hsv(30, 1.00, 0.75)");
}
