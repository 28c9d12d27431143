//! CIE XYZ color space (D65)
//!
//! XYZ is linear in light intensity and serves as the pivot between sRGB and
//! LAB. Values are scaled to the D65 ranges: X in ≈[0,95.047], Y in
//! ≈[0,100], Z in ≈[0,108.883]. Z has no canonical upper clamp.

use crate::color::{ColorSpace, Rgb};
use crate::math::gamma::{srgb_gamma_decode, srgb_gamma_encode};
use crate::math::matrix::Matrix3x3;

/// D65 white point X scale
pub const D65_X: f64 = 95.047;
/// D65 white point Y scale
pub const D65_Y: f64 = 100.0;
/// D65 white point Z scale
pub const D65_Z: f64 = 108.883;

/// Linear sRGB → XYZ matrix (D65), output normalized to [0,1]
pub(crate) const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ → linear sRGB matrix (D65), input normalized to [0,1]
pub(crate) const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// CIE XYZ tristimulus coordinates, D65-scaled
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value, ≈[0, 95.047]
    pub x: f64,
    /// Y tristimulus value (luminance), ≈[0, 100]
    pub y: f64,
    /// Z tristimulus value, ≈[0, 108.883]
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Luminance (the Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Clamp each component to be non-negative
    ///
    /// There is no upper clamp; out-of-gamut highlights keep their magnitude
    /// and are only resolved at the 8-bit RGB boundary.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
            z: self.z.max(0.0),
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl ColorSpace for Xyz {
    fn from_rgb(rgb: Rgb) -> Self {
        let linear = [
            srgb_gamma_decode(rgb.r as f64 / 255.0),
            srgb_gamma_decode(rgb.g as f64 / 255.0),
            srgb_gamma_decode(rgb.b as f64 / 255.0),
        ];
        let [x, y, z] = SRGB_TO_XYZ.multiply_vec(linear);
        Self {
            x: x * D65_X,
            y: y * D65_Y,
            z: z * D65_Z,
        }
    }

    fn to_rgb(&self) -> Rgb {
        let normalized = [self.x / D65_X, self.y / D65_Y, self.z / D65_Z];
        let [r, g, b] = XYZ_TO_SRGB.multiply_vec(normalized);

        let quantize = |linear: f64| {
            let encoded = srgb_gamma_encode(linear.clamp(0.0, 1.0));
            (encoded * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(quantize(r), quantize(g), quantize(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_point() {
        // Matrix rows sum to (0.95047, 1.0, 1.08883); the per-component
        // D65 scale squares those factors into x and z
        let white = Xyz::from_rgb(Rgb::WHITE);
        assert!((white.x - 0.95047 * D65_X).abs() < 0.01);
        assert!((white.y - D65_Y).abs() < 0.01);
        assert!((white.z - 1.08883 * D65_Z).abs() < 0.01);
    }

    #[test]
    fn test_black() {
        let black = Xyz::from_rgb(Rgb::BLACK);
        assert!(black.x.abs() < 1e-9);
        assert!(black.y.abs() < 1e-9);
        assert!(black.z.abs() < 1e-9);
    }

    #[test]
    fn test_normalize_lower_clamp_only() {
        let xyz = Xyz::new(-10.0, 50.0, 200.0).normalize();
        assert_eq!(xyz.to_array(), [0.0, 50.0, 200.0]);
    }

    #[test]
    fn test_luminance_is_y() {
        let xyz = Xyz::new(1.0, 42.0, 3.0);
        assert_eq!(xyz.luminance(), 42.0);
    }

    #[test]
    fn test_matrices_are_inverses() {
        let inv = SRGB_TO_XYZ.inverse().expect("sRGB matrix is invertible");
        assert!(
            inv.approx_eq(&XYZ_TO_SRGB, 1e-4),
            "hard-coded inverse drifts from computed inverse"
        );
    }

    #[test]
    fn test_roundtrip_sampled() {
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (17, 250, 99),
            (240, 3, 77),
        ] {
            let rgb = Rgb::new(r, g, b);
            let back = Xyz::from_rgb(rgb).to_rgb();
            assert!(
                (back.r as i32 - r as i32).abs() <= 2
                    && (back.g as i32 - g as i32).abs() <= 2
                    && (back.b as i32 - b as i32).abs() <= 2,
                "XYZ roundtrip out of bounds: {:?} -> {:?}",
                rgb,
                back
            );
        }
    }

    #[test]
    fn test_out_of_gamut_clamps_at_rgb() {
        // Wildly out-of-gamut values still produce a valid color
        let rgb = Xyz::new(-50.0, 250.0, 500.0).to_rgb();
        assert_eq!(rgb.a, 255);
    }
}
