//! CIE LCH color space
//!
//! A polar restatement of LAB: lightness is shared, chroma is the radial
//! distance in the (a, b) plane and hue is the angle. Because it is not an
//! independent gamut, LAB↔LCH is the one direct conversion edge that skips
//! the RGB hub, so no 8-bit requantization is paid.

use std::f64::consts::PI;

use crate::color::{ColorSpace, Lab, Rgb};

/// CIE LCH color with double-precision channels, no alpha
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lch {
    /// Lightness, [0, 100]
    pub l: f64,
    /// Chroma, >= 0 with no upper bound
    pub c: f64,
    /// Hue in degrees, [0, 360)
    pub h: f64,
}

impl Lch {
    /// Create an LCH color; the result is normalized
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }.normalize()
    }

    /// Clamp lightness into [0,100], chroma to >= 0, and wrap hue into
    /// [0, 360)
    pub fn normalize(&self) -> Self {
        let mut h = self.h;
        if !(0.0..360.0).contains(&h) {
            h %= 360.0;
            if h < 0.0 {
                h += 360.0;
            }
        }
        Self {
            l: self.l.clamp(0.0, 100.0),
            c: self.c.max(0.0),
            h,
        }
    }

    /// Direct polar transform from LAB; no RGB requantization
    pub fn from_lab(lab: &Lab) -> Self {
        let c = lab.a.hypot(lab.b);
        let mut h = lab.b.atan2(lab.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        Self { l: lab.l, c, h }.normalize()
    }

    /// Direct Cartesian transform back to LAB; no RGB requantization
    pub fn to_lab(&self) -> Lab {
        let h_rad = self.h * PI / 180.0;
        Lab::new(self.l, self.c * h_rad.cos(), self.c * h_rad.sin())
    }

    /// Lightness
    #[inline]
    pub const fn lightness(&self) -> f64 {
        self.l
    }

    /// Chroma
    #[inline]
    pub const fn chroma(&self) -> f64 {
        self.c
    }

    /// Hue in degrees
    #[inline]
    pub const fn hue(&self) -> f64 {
        self.h
    }

    /// Hue in radians
    #[inline]
    pub fn hue_radians(&self) -> f64 {
        self.h * PI / 180.0
    }

    /// Shift lightness by `delta`, clamped to [0, 100]
    pub fn adjust_lightness(&self, delta: f64) -> Self {
        Self::new(self.l + delta, self.c, self.h)
    }

    /// Shift chroma by `delta`, floored at 0
    pub fn adjust_chroma(&self, delta: f64) -> Self {
        Self::new(self.l, self.c + delta, self.h)
    }

    /// Scale chroma by `factor`, floored at 0
    pub fn scale_chroma(&self, factor: f64) -> Self {
        Self::new(self.l, self.c * factor, self.h)
    }

    /// Rotate hue by `degrees`, wrapping into [0, 360)
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self::new(self.l, self.c, self.h + degrees)
    }

    /// Replace the hue outright, wrapping into [0, 360)
    pub fn with_hue(&self, hue_degrees: f64) -> Self {
        Self::new(self.l, self.c, hue_degrees)
    }

    /// Perceptual distance with a chroma-weighted, wraparound-aware hue term
    ///
    /// `dh` is corrected to the shortest arc when it exceeds 180°, then
    /// weighted by `2·sqrt(avgC·C2)·sin(dh·π/360)` before entering the
    /// Euclidean sum. Not the full CIEDE2000 formula.
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let dc = self.c - other.c;

        let mut dh = self.h - other.h;
        if dh.abs() > 180.0 {
            dh = if dh > 0.0 { dh - 360.0 } else { dh + 360.0 };
        }

        let avg_c = (self.c + other.c) / 2.0;
        let dh_weighted = 2.0 * (avg_c * other.c).sqrt() * (dh * PI / 360.0).sin();

        (dl * dl + dc * dc + dh_weighted * dh_weighted).sqrt()
    }

    /// Complementary color: hue rotated 180°
    pub fn complement(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Analogous pair at ±30°
    pub fn analogous(&self) -> (Self, Self) {
        (self.rotate_hue(-30.0), self.rotate_hue(30.0))
    }

    /// Triadic pair at +120° and +240°
    pub fn triadic(&self) -> (Self, Self) {
        (self.rotate_hue(120.0), self.rotate_hue(240.0))
    }

    /// Split-complementary pair at +150° and +210°
    pub fn split_complementary(&self) -> (Self, Self) {
        (self.rotate_hue(150.0), self.rotate_hue(210.0))
    }

    /// Tetradic triple at +90°, +180° and +270°
    pub fn tetradic(&self) -> (Self, Self, Self) {
        (
            self.rotate_hue(90.0),
            self.rotate_hue(180.0),
            self.rotate_hue(270.0),
        )
    }

    /// Check if approximately equal to another LCH color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        Self::from_lab(&lab)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        lch.to_lab()
    }
}

impl ColorSpace for Lch {
    /// Routes through LAB; the RGB edge is where quantization happens
    fn from_rgb(rgb: Rgb) -> Self {
        Self::from_lab(&Lab::from_rgb(rgb))
    }

    fn to_rgb(&self) -> Rgb {
        self.to_lab().to_rgb()
    }
}
