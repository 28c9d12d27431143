//! Gamma and transfer function operations
//!
//! This module provides:
//! - sRGB gamma encode/decode (IEC 61966-2-1 piecewise law)
//! - The CIELAB f/f⁻¹ nonlinearity used between XYZ and L*a*b*

/// CIELAB linearity threshold (216/24389, commonly quoted as 0.008856)
pub const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment of the CIELAB nonlinearity
pub const LAB_KAPPA: f64 = 7.787;

/// Offset term of the CIELAB nonlinearity (16/116)
pub const LAB_OFFSET: f64 = 16.0 / 116.0;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light in [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light in [0,1] to an sRGB-encoded value in [0,1].
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// CIELAB forward nonlinearity: f(t) for XYZ → Lab
#[inline]
pub fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

/// CIELAB inverse nonlinearity: f⁻¹(t) for Lab → XYZ
#[inline]
pub fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA
    }
}
