//! CIE L*a*b* color space (D65)
//!
//! LAB conversions are the hot path for perceptual distance work, so this
//! module routes through the precomputed tables in [`crate::math::lut`]
//! instead of the direct transcendental functions XYZ uses. Table
//! quantization keeps RGB round trips within ±2 per channel.
//!
//! Alpha is carried as a double in [0,255] so the type stays a flat run of
//! four 64-bit fields.

use crate::color::xyz::{D65_X, D65_Y, D65_Z, SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::color::{ColorSpace, Rgb};
use crate::math::lut::{gamma_decode_u8, gamma_encode_linear, lab_f_inv_lookup, lab_f_lookup};

/// D65 reference white, normalized so Y = 1
const WHITE: [f64; 3] = [D65_X / 100.0, D65_Y / 100.0, D65_Z / 100.0];

/// Threshold under which two LAB colors read as the same color
pub const SIMILARITY_THRESHOLD: f64 = 2.3;

/// CIE L*a*b* color with double-precision channels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, [0, 100]
    pub l: f64,
    /// Green-red axis, nominally [-128, 127]
    pub a: f64,
    /// Blue-yellow axis, nominally [-128, 127]
    pub b: f64,
    /// Alpha in [0, 255], stored as a double
    pub alpha: f64,
}

impl Default for Lab {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Lab {
    /// Create an opaque LAB color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
            b,
            alpha: 255.0,
        }
    }

    /// Create a LAB color with explicit alpha in [0,255]
    #[inline]
    pub const fn with_alpha(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    /// CIE76 color difference: Euclidean distance in (L, a, b)
    pub fn delta_e(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Simplified Delta E 2000 approximation
    ///
    /// Chroma-weighted Euclidean distance with `sl = 1`,
    /// `sc = 1 + 0.045·C1`, `sh = 1 + 0.015·C1`. This is not the full
    /// CIEDE2000 formula; it skips the rotation and lightness-weighting
    /// terms and is asymmetric in its arguments.
    pub fn delta_e_2000(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;

        let c1 = (self.a * self.a + self.b * self.b).sqrt();
        let c2 = (other.a * other.a + other.b * other.b).sqrt();
        let dc = c1 - c2;

        // Non-negative in exact arithmetic; the guard absorbs float noise
        let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

        let sl = 1.0;
        let sc = 1.0 + 0.045 * c1;
        let sh = 1.0 + 0.015 * c1;

        ((dl / sl).powi(2) + (dc / sc).powi(2) + (dh / sh).powi(2)).sqrt()
    }

    /// True when the CIE76 difference is below `threshold`
    #[inline]
    pub fn is_similar(&self, other: &Self, threshold: f64) -> bool {
        self.delta_e(other) < threshold
    }

    /// Shift lightness by `amount`, clamped to [0, 100]
    pub fn adjust_lightness(&self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 100.0),
            ..*self
        }
    }

    /// Linear interpolation toward `other`; ratio is clamped into [0,1]
    pub fn mix(&self, other: &Self, ratio: f64) -> Self {
        let t = ratio.clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self {
            l: lerp(self.l, other.l),
            a: lerp(self.a, other.a),
            b: lerp(self.b, other.b),
            alpha: lerp(self.alpha, other.alpha),
        }
    }

    /// Check if approximately equal to another LAB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl ColorSpace for Lab {
    fn from_rgb(rgb: Rgb) -> Self {
        let linear = [
            gamma_decode_u8(rgb.r),
            gamma_decode_u8(rgb.g),
            gamma_decode_u8(rgb.b),
        ];
        let xyz = SRGB_TO_XYZ.multiply_vec(linear);

        let fx = lab_f_lookup(xyz[0] / WHITE[0]);
        let fy = lab_f_lookup(xyz[1] / WHITE[1]);
        let fz = lab_f_lookup(xyz[2] / WHITE[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: rgb.a as f64,
        }
    }

    fn to_rgb(&self) -> Rgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let xyz = [
            lab_f_inv_lookup(fx) * WHITE[0],
            lab_f_inv_lookup(fy) * WHITE[1],
            lab_f_inv_lookup(fz) * WHITE[2],
        ];
        let [r, g, b] = XYZ_TO_SRGB.multiply_vec(xyz);

        let quantize = |linear: f64| {
            (gamma_encode_linear(linear) * 255.0)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(quantize(r), quantize(g), quantize(b))
            .with_alpha(self.alpha.round().clamp(0.0, 255.0) as u8)
    }
}
