//! Monochrome (grayscale + alpha) color
//!
//! Derived from RGB via the luminance weighting; arithmetic mirrors the RGB
//! hub on a single value channel.

use std::ops::{Add, Mul, Sub};

use rand::Rng;

use crate::color::{ColorSpace, Rgb};

/// Grayscale color with 8-bit value and alpha
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, bytemuck::Pod, bytemuck::Zeroable,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mono {
    /// Gray value (0 = black, 255 = white)
    pub v: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub a: u8,
}

impl Default for Mono {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Mono {
    /// Create a new opaque gray value
    #[inline]
    pub const fn new(v: u8) -> Self {
        Self { v, a: 255 }
    }

    /// Return the same gray with a different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Invert the gray value, keeping alpha
    #[inline]
    pub const fn invert(&self) -> Self {
        Self {
            v: 255 - self.v,
            a: self.a,
        }
    }

    /// Scale toward white by `factor`
    #[inline]
    pub fn brighten(&self, factor: f64) -> Self {
        *self * (1.0 + factor)
    }

    /// Scale toward black by `factor`
    #[inline]
    pub fn darken(&self, factor: f64) -> Self {
        *self * (1.0 - factor)
    }

    /// Linear interpolation toward `other`; ratio is clamped into [0,1]
    pub fn mix(&self, other: Mono, ratio: f64) -> Self {
        let t = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
        Self {
            v: lerp(self.v, other.v),
            a: lerp(self.a, other.a),
        }
    }

    /// Format as a single-channel hex literal, e.g. `#80`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}", self.v)
    }

    /// A random opaque gray from the thread-local generator
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(rng.r#gen())
    }

    /// Black
    pub const BLACK: Self = Self::new(0);
    /// White
    pub const WHITE: Self = Self::new(255);
    /// Mid gray
    pub const GRAY: Self = Self::new(128);
}

impl ColorSpace for Mono {
    /// Rounded luminance of the RGB color; alpha carried over
    fn from_rgb(rgb: Rgb) -> Self {
        Self {
            v: rgb.luminance().round() as u8,
            a: rgb.a,
        }
    }

    /// Replicate the gray value into all three channels
    fn to_rgb(&self) -> Rgb {
        Rgb::new(self.v, self.v, self.v).with_alpha(self.a)
    }
}

impl Add for Mono {
    type Output = Self;

    /// Saturating addition on the value channel; alpha kept from self
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            v: self.v.saturating_add(rhs.v),
            a: self.a,
        }
    }
}

impl Sub for Mono {
    type Output = Self;

    /// Saturating subtraction on the value channel; alpha kept from self
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            v: self.v.saturating_sub(rhs.v),
            a: self.a,
        }
    }
}

impl Mul<f64> for Mono {
    type Output = Self;

    /// Scale the value channel, clamped to [0,255]; alpha unchanged
    fn mul(self, factor: f64) -> Self::Output {
        Self {
            v: (self.v as f64 * factor).round().clamp(0.0, 255.0) as u8,
            a: self.a,
        }
    }
}
