//! Color-harmony palette generation.
//!
//! A [`HarmonyScheme`] derives a small, ordered set of HSL colors from a
//! single base color by rotating its hue around the color wheel (and, for
//! the monochromatic scheme, varying saturation and lightness instead).

use heapless::Vec;

use crate::hex::HexString;
use crate::types::Hsl;

/// The largest palette any scheme produces (Tetradic).
pub const MAX_PALETTE_COLORS: usize = 4;

/// An ordered, non-empty set of harmony colors.
pub type Palette = Vec<Hsl, MAX_PALETTE_COLORS>;

/// A rule relating multiple hues around a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HarmonyScheme {
    /// Same hue, varied saturation and lightness.
    Monochromatic,

    /// Base hue and its direct opposite (180° apart).
    Complementary,

    /// Base hue plus the two hues flanking its complement (±30° from 180°).
    SplitComplementary,

    /// Neighboring hues (±30°) for smooth transitions.
    Analogous,

    /// Three hues equally spaced 120° apart.
    Triadic,

    /// A rectangle on the wheel: base, +90°, +180°, +270°.
    Tetradic,
}

impl HarmonyScheme {
    /// All schemes, in presentation order.
    pub const ALL: [HarmonyScheme; 6] = [
        HarmonyScheme::Monochromatic,
        HarmonyScheme::Complementary,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Analogous,
        HarmonyScheme::Triadic,
        HarmonyScheme::Tetradic,
    ];

    /// Human-readable name, suitable for a scheme picker.
    pub fn label(self) -> &'static str {
        match self {
            HarmonyScheme::Monochromatic => "Monochromatic",
            HarmonyScheme::Complementary => "Complementary",
            HarmonyScheme::SplitComplementary => "Split-Complementary",
            HarmonyScheme::Analogous => "Analogous",
            HarmonyScheme::Triadic => "Triadic",
            HarmonyScheme::Tetradic => "Tetradic",
        }
    }

    /// Looks a scheme up by its [`label`](Self::label). Returns `None` for
    /// unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// The number of colors [`generate`](Self::generate) produces.
    pub fn palette_size(self) -> usize {
        match self {
            HarmonyScheme::Complementary => 2,
            HarmonyScheme::Tetradic => 4,
            _ => 3,
        }
    }

    /// Generates the harmony palette for `base`.
    ///
    /// The output is ordered: the base color comes first (for Monochromatic
    /// it sits between the darkened and lightened variants) and hue offsets
    /// follow in increasing order. Saturation and lightness are copied from
    /// the base except for the explicit monochromatic adjustments; hue
    /// arithmetic wraps around the color wheel via `Hsl`'s constructor.
    pub fn generate(self, base: Hsl) -> Palette {
        match self {
            HarmonyScheme::Monochromatic => palette_of(&[
                base.with_sl(base.s() * 0.3, base.l() * 0.6),
                base,
                base.with_sl(base.s() * 0.8, base.l() * 1.2),
            ]),
            HarmonyScheme::Complementary => palette_of(&[base, base.rotate_hue(180.0)]),
            HarmonyScheme::SplitComplementary => {
                palette_of(&[base, base.rotate_hue(150.0), base.rotate_hue(210.0)])
            }
            HarmonyScheme::Analogous => {
                palette_of(&[base, base.rotate_hue(30.0), base.rotate_hue(-30.0)])
            }
            HarmonyScheme::Triadic => {
                palette_of(&[base, base.rotate_hue(120.0), base.rotate_hue(240.0)])
            }
            HarmonyScheme::Tetradic => palette_of(&[
                base,
                base.rotate_hue(90.0),
                base.rotate_hue(180.0),
                base.rotate_hue(270.0),
            ]),
        }
    }
}

fn palette_of(colors: &[Hsl]) -> Palette {
    let mut palette = Palette::new();
    for &color in colors.iter().take(MAX_PALETTE_COLORS) {
        let _ = palette.push(color);
    }
    palette
}

/// Renders a palette as uppercase `#RRGGBB` strings, in palette order.
///
/// This is the export boundary: a consumer serializing a palette (e.g. to a
/// flat JSON array) works from these strings.
pub fn palette_hex(palette: &Palette) -> Vec<HexString, MAX_PALETTE_COLORS> {
    palette.iter().map(|hsl| hsl.to_rgb().to_hex()).collect()
}
