//! HSV color space
//!
//! Hue, saturation and value stored as floats. Hue is circular in [0,360);
//! saturation and value are clamped fractions in [0,1]. HSV carries no
//! alpha, so conversions to RGB are opaque.

use crate::color::{ColorSpace, Rgb};

/// HSV color with float channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, [0.0, 360.0)
    pub h: f32,
    /// Saturation in [0.0, 1.0]
    pub s: f32,
    /// Value in [0.0, 1.0]
    pub v: f32,
}

impl Hsv {
    /// Create an HSV color, wrapping hue and clamping saturation/value
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        let mut hue = h % 360.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        Self {
            h: hue,
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Adjust value asymptotically; delta is clamped into [-1,1]
    ///
    /// Positive deltas consume the remaining headroom toward 1, negative
    /// deltas shrink toward 0: `v + delta·(1−v)` going up, `v + delta·v`
    /// going down. This is not additive clamping.
    pub fn adjust_brightness(&self, delta: f32) -> Self {
        let d = delta.clamp(-1.0, 1.0);
        let v = if d > 0.0 {
            self.v + d * (1.0 - self.v)
        } else {
            self.v + d * self.v
        };
        Self {
            v: v.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Adjust saturation asymptotically; delta is clamped into [-1,1]
    ///
    /// Same headroom law as [`adjust_brightness`](Self::adjust_brightness).
    pub fn adjust_saturation(&self, delta: f32) -> Self {
        let d = delta.clamp(-1.0, 1.0);
        let s = if d > 0.0 {
            self.s + d * (1.0 - self.s)
        } else {
            self.s + d * self.s
        };
        Self {
            s: s.clamp(0.0, 1.0),
            ..*self
        }
    }
}

impl ColorSpace for Hsv {
    fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta < 1e-6 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        if h < 0.0 {
            h += 360.0;
        }

        let s = if max < 1e-6 { 0.0 } else { delta / max };

        Self::new(h, s, max)
    }

    fn to_rgb(&self) -> Rgb {
        let c = self.v * self.s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (rp, gp, bp) = if self.h < 60.0 {
            (c, x, 0.0)
        } else if self.h < 120.0 {
            (x, c, 0.0)
        } else if self.h < 180.0 {
            (0.0, c, x)
        } else if self.h < 240.0 {
            (0.0, x, c)
        } else if self.h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let quantize = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(quantize(rp), quantize(gp), quantize(bp))
    }
}
