#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: normalized RGB color, the hex-codec endpoint
//! - **`Hsl`** / **`Hsv`**: hue/saturation/lightness(value) colors, normalized
//!   on construction (hue wrapped into [0, 360), S/L/V clamped into [0, 1])
//! - **`HarmonyScheme`**: one of six rules deriving a palette from a base color
//! - **`Palette`**: the ordered, fixed-capacity result of a harmony scheme
//! - **`InvalidHexFormat`**: the single recoverable error, raised by hex parsing
//!
//! All operations are pure, deterministic and allocation-free; there is no
//! shared state, so everything is safe to call from any number of threads.

pub mod harmony;
pub mod hex;
pub mod types;

mod convert;

pub use harmony::{HarmonyScheme, MAX_PALETTE_COLORS, Palette, palette_hex};
pub use hex::{HexString, InvalidHexFormat};
pub use types::{Hsl, Hsv, Rgb};
