//! Color space types and conversions
//!
//! This module provides:
//! - The 8-bit RGB hub every other space converts through
//! - Monochrome, HSL, HSV, CIELAB, CIE XYZ, Oklab and LCH spaces
//! - The [`ColorSpace`] contract and the [`convert`] routing helper
//!
//! The conversion graph is a star: any space reaches any other by routing
//! through RGB, which costs one deliberate 8-bit requantization. The only
//! direct edge bypassing the hub is LAB↔LCH, a polar restatement that loses
//! no precision.

pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod lch;
pub mod mono;
pub mod oklab;
pub mod rgb;
pub mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use lch::Lch;
pub use mono::Mono;
pub use oklab::Oklab;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// Contract every color space must satisfy to participate in the
/// conversion graph
///
/// Conversions never fail: out-of-range intermediates are clamped or wrapped
/// before the final 8-bit quantization at the RGB boundary. Spaces without an
/// alpha channel produce opaque RGB.
pub trait ColorSpace: Sized {
    /// Convert from the canonical RGB hub representation
    fn from_rgb(rgb: Rgb) -> Self;

    /// Convert to the canonical RGB hub representation
    fn to_rgb(&self) -> Rgb;
}

/// Convert between any two color spaces by routing through the RGB hub
///
/// Incurs one 8-bit requantization unless source or destination is RGB
/// itself. LAB→LCH callers wanting full precision should use
/// [`Lch::from_lab`] directly.
#[inline]
pub fn convert<Src: ColorSpace, Dst: ColorSpace>(src: &Src) -> Dst {
    Dst::from_rgb(src.to_rgb())
}
