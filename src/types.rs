//! Color value types with construction-time normalization.

use core::fmt;

/// An RGB color with floating-point channels.
///
/// Channels are semantically in the range 0.0-1.0. The type itself does not
/// clamp on construction (mirroring `palette::Srgb`); every operation in this
/// crate that consumes an `Rgb` clamps channels on entry, so out-of-range
/// inputs degrade to the nearest in-range color instead of producing NaN or
/// garbage hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel, 0.0-1.0.
    pub r: f64,

    /// Green channel, 0.0-1.0.
    pub g: f64,

    /// Blue channel, 0.0-1.0.
    pub b: f64,
}

impl Rgb {
    /// Black (all channels 0.0).
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// White (all channels 1.0).
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Creates an RGB color from normalized channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB color from 8-bit channels.
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Converts to 8-bit channels.
    ///
    /// Channels are clamped to 0.0-1.0, scaled by 255 and rounded to the
    /// nearest integer (half away from zero).
    #[inline]
    pub fn to_bytes(self) -> (u8, u8, u8) {
        (
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        )
    }

    /// Returns the channels clamped to 0.0-1.0.
    #[inline]
    pub(crate) fn clamped(self) -> (f64, f64, f64) {
        (
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

#[inline]
fn channel_to_byte(channel: f64) -> u8 {
    libm::round(channel.clamp(0.0, 1.0) * 255.0) as u8
}

/// Wraps a hue angle into [0, 360).
fn normalize_hue(h: f64) -> f64 {
    let mut h = h % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    // A tiny negative input rounds up to exactly 360.0 after the correction;
    // keep the interval half-open.
    if h >= 360.0 { 0.0 } else { h }
}

/// Clamps saturation/lightness/value into [0, 1].
#[inline]
fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// An HSL color: hue in degrees, saturation and lightness in 0.0-1.0.
///
/// The constructor normalizes its inputs: hue is wrapped into [0, 360) and
/// saturation/lightness are clamped into [0, 1]. Instances are immutable;
/// the `with_*` methods return adjusted copies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    /// Creates an HSL color, wrapping hue into [0, 360) and clamping
    /// saturation and lightness into [0, 1].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation, 0.0-1.0.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Lightness, 0.0-1.0.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Returns a copy with new saturation and lightness, hue preserved.
    #[inline]
    pub fn with_sl(self, s: f64, l: f64) -> Self {
        Self::new(self.h, s, l)
    }

    /// Returns a copy with new saturation, hue and lightness preserved.
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Returns a copy with new lightness, hue and saturation preserved.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Returns a copy with the hue rotated by `degrees`, wrapping around the
    /// color wheel. Saturation and lightness are preserved.
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.2}, {:.2})", self.h, self.s, self.l)
    }
}

/// An HSV color: hue in degrees, saturation and value in 0.0-1.0.
///
/// Normalized on construction exactly like [`Hsl`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    /// Creates an HSV color, wrapping hue into [0, 360) and clamping
    /// saturation and value into [0, 1].
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation, 0.0-1.0.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value (brightness), 0.0-1.0.
    #[inline]
    pub fn v(&self) -> f64 {
        self.v
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({:.0}, {:.2}, {:.2})", self.h, self.s, self.v)
    }
}
