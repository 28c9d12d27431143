//! Oklab color space
//!
//! A perceptually uniform space derived through an LMS cone-response
//! intermediate: linearize sRGB, project to LMS, cube-root, then project to
//! (L, a, b). Lightness lives in [0,1]; a and b stay roughly in [-0.4, 0.4]
//! for in-gamut colors.

use std::f64::consts::PI;

use crate::color::{ColorSpace, Rgb};
use crate::math::gamma::{srgb_gamma_decode, srgb_gamma_encode};
use crate::math::matrix::Matrix3x3;

const LINEAR_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

const LMS_TO_LINEAR: Matrix3x3 = Matrix3x3::new([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// Oklab color with double-precision channels, no alpha
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Perceptual lightness, [0, 1]
    pub l: f64,
    /// Green-red axis, ≈[-0.4, 0.4]
    pub a: f64,
    /// Blue-yellow axis, ≈[-0.4, 0.4]
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Perceptual lightness
    #[inline]
    pub const fn lightness(&self) -> f64 {
        self.l
    }

    /// Chroma: distance from the neutral axis in the (a, b) plane
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in radians, (-π, π]
    #[inline]
    pub fn hue_radians(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Hue angle in degrees, [0, 360)
    pub fn hue_degrees(&self) -> f64 {
        let h = self.hue_radians().to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Shift lightness by `delta`, clamped to [0, 1]
    pub fn adjust_lightness(&self, delta: f64) -> Self {
        Self {
            l: (self.l + delta).clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Scale chroma by `factor`, leaving lightness and hue alone
    pub fn adjust_chroma(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            b: self.b * factor,
            ..*self
        }
    }

    /// Rotate hue by `degrees` in the (a, b) plane
    ///
    /// A plain 2D rotation, so lightness and chroma magnitude are preserved
    /// exactly.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let radians = degrees * PI / 180.0;
        let (sin_h, cos_h) = radians.sin_cos();
        Self {
            l: self.l,
            a: self.a * cos_h - self.b * sin_h,
            b: self.a * sin_h + self.b * cos_h,
        }
    }

    /// Euclidean perceptual distance in (L, a, b)
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Check if approximately equal to another Oklab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl ColorSpace for Oklab {
    fn from_rgb(rgb: Rgb) -> Self {
        let linear = [
            srgb_gamma_decode(rgb.r as f64 / 255.0),
            srgb_gamma_decode(rgb.g as f64 / 255.0),
            srgb_gamma_decode(rgb.b as f64 / 255.0),
        ];
        let lms = LINEAR_TO_LMS.multiply_vec(linear);
        let lms_cbrt = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let [l, a, b] = LMS_TO_OKLAB.multiply_vec(lms_cbrt);
        Self { l, a, b }
    }

    fn to_rgb(&self) -> Rgb {
        let lms_cbrt = OKLAB_TO_LMS.multiply_vec([self.l, self.a, self.b]);
        let lms = [
            lms_cbrt[0] * lms_cbrt[0] * lms_cbrt[0],
            lms_cbrt[1] * lms_cbrt[1] * lms_cbrt[1],
            lms_cbrt[2] * lms_cbrt[2] * lms_cbrt[2],
        ];
        let [r, g, b] = LMS_TO_LINEAR.multiply_vec(lms);

        let quantize = |linear: f64| {
            let encoded = srgb_gamma_encode(linear.clamp(0.0, 1.0));
            (encoded * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(quantize(r), quantize(g), quantize(b))
    }
}
