//! RGB/HSL/HSV conversions using the standard hexcone algorithms.
//!
//! All conversions are total: the division-by-zero edges (black, white, and
//! achromatic grays) return a defined 0 rather than NaN. The piecewise hue
//! derivation and the sextant table are shared between the HSL and HSV paths
//! so the two can never drift apart.

use libm::fabs;

use crate::types::{Hsl, Hsv, Rgb};

/// Derives the hue in degrees from normalized channels.
///
/// `c` is the chroma (max - min) and must be non-zero; callers handle the
/// achromatic case before calling.
fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, c: f64) -> f64 {
    let h = if max == r {
        60.0 * (((g - b) / c) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / c + 2.0)
    } else {
        60.0 * ((r - g) / c + 4.0)
    };

    // The mod-6 result is negative when max == r and g < b.
    if h < 0.0 { h + 360.0 } else { h }
}

/// Selects the (r1, g1, b1) base point for the sextant `h_prime` falls into.
///
/// `h_prime` is hue / 60 and lies in [0, 6) for normalized hues.
fn sextant(h_prime: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

impl Rgb {
    /// Converts to HSL.
    ///
    /// Achromatic colors (all channels equal) yield hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.clamped();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let c = max - min;
        let l = (max + min) / 2.0;

        if c == 0.0 {
            return Hsl::new(0.0, 0.0, l);
        }

        let h = hue_from_channels(r, g, b, max, c);

        // The denominator reaches 0 only at l = 0 or l = 1, which float
        // rounding can produce even with c > 0.
        let denom = 1.0 - fabs(2.0 * l - 1.0);
        let s = if denom > 0.0 { c / denom } else { 0.0 };

        Hsl::new(h, s, l)
    }

    /// Converts to HSV.
    ///
    /// Achromatic colors yield hue 0 and saturation 0; black yields value 0.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.clamped();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let c = max - min;
        let v = max;

        if c == 0.0 {
            return Hsv::new(0.0, 0.0, v);
        }

        let h = hue_from_channels(r, g, b, max, c);
        let s = if v > 0.0 { c / v } else { 0.0 };

        Hsv::new(h, s, v)
    }
}

impl Hsl {
    /// Converts to RGB via the hexcone algorithm.
    pub fn to_rgb(self) -> Rgb {
        let c = (1.0 - fabs(2.0 * self.l() - 1.0)) * self.s();
        let h_prime = self.h() / 60.0;
        let x = c * (1.0 - fabs(h_prime % 2.0 - 1.0));

        let (r1, g1, b1) = sextant(h_prime, c, x);
        let m = self.l() - c / 2.0;

        Rgb::new(r1 + m, g1 + m, b1 + m)
    }

    /// Converts directly to HSV without passing through RGB.
    pub fn to_hsv(self) -> Hsv {
        let l = self.l();
        let v = l + self.s() * l.min(1.0 - l);
        let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

        Hsv::new(self.h(), s, v)
    }
}

impl Hsv {
    /// Converts to RGB via the hexcone algorithm.
    pub fn to_rgb(self) -> Rgb {
        let c = self.v() * self.s();
        let h_prime = self.h() / 60.0;
        let x = c * (1.0 - fabs(h_prime % 2.0 - 1.0));

        let (r1, g1, b1) = sextant(h_prime, c, x);
        let m = self.v() - c;

        Rgb::new(r1 + m, g1 + m, b1 + m)
    }

    /// Converts directly to HSL without passing through RGB.
    pub fn to_hsl(self) -> Hsl {
        let v = self.v();
        let l = v * (1.0 - self.s() / 2.0);
        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };

        Hsl::new(self.h(), s, l)
    }
}
