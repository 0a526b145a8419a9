//! Shared test infrastructure for chroma-harmony integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chroma_harmony::{Hsl, Hsv, Rgb};

/// Tolerance for float comparisons after a conversion round-trip.
pub const EPSILON: f64 = 1e-6;

/// Looser tolerance when comparing against the f32-based `palette` oracle.
pub const ORACLE_EPSILON: f64 = 1e-4;

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

pub fn rgb_eq(a: Rgb, b: Rgb, eps: f64) -> bool {
    approx_eq(a.r, b.r, eps) && approx_eq(a.g, b.g, eps) && approx_eq(a.b, b.b, eps)
}

/// Circular distance between two hues in degrees.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

pub fn hsl_eq(a: Hsl, b: Hsl, eps: f64) -> bool {
    hue_distance(a.h(), b.h()) < eps && approx_eq(a.s(), b.s(), eps) && approx_eq(a.l(), b.l(), eps)
}

pub fn hsv_eq(a: Hsv, b: Hsv, eps: f64) -> bool {
    hue_distance(a.h(), b.h()) < eps && approx_eq(a.s(), b.s(), eps) && approx_eq(a.v(), b.v(), eps)
}

// ============================================================================
// Sample colors
// ============================================================================

pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);

/// A grid of channel values that exercises the interesting boundaries.
pub const CHANNEL_GRID: [f64; 7] = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
