//! HSL color space with fixed-point hue
//!
//! Hue is stored as an integer in [0,35999], representing degrees ×100, so
//! hue arithmetic is exact. Saturation, lightness and alpha are 8-bit.
//! The hue domain is circular: out-of-range hues wrap, they never clamp.

use rand::Rng;

use crate::color::{ColorSpace, Rgb};

/// Fixed-point hue modulus: 360 degrees ×100
const HUE_MOD: i64 = 36000;

/// Default angle for analogous and split-complementary harmonies, in degrees
pub const DEFAULT_HARMONY_ANGLE: f64 = 30.0;

/// HSL color: fixed-point hue, 8-bit saturation/lightness/alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in [0,35999], representing [0.0,360.0) degrees ×100
    pub h: u16,
    /// Saturation in [0,255], representing [0.0,1.0]
    pub s: u8,
    /// Lightness in [0,255], representing [0.0,1.0]
    pub l: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub alpha: u8,
}

impl Default for Hsl {
    fn default() -> Self {
        Self {
            h: 0,
            s: 0,
            l: 0,
            alpha: 255,
        }
    }
}

impl Hsl {
    /// Create an opaque HSL color from float components
    ///
    /// Hue is in degrees and wraps into [0,360); saturation and lightness are
    /// fractions clamped into [0,1].
    pub fn new(hue_degrees: f64, saturation: f64, lightness: f64) -> Self {
        let mut h = hue_degrees % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        Self {
            h: ((h * 100.0).round() as i64 % HUE_MOD) as u16,
            s: (saturation.clamp(0.0, 1.0) * 255.0).round() as u8,
            l: (lightness.clamp(0.0, 1.0) * 255.0).round() as u8,
            alpha: 255,
        }
    }

    /// Return the same color with a different alpha
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Hue in degrees, [0.0, 360.0)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.h as f64 / 100.0
    }

    /// Saturation as a fraction in [0,1]
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.s as f64 / 255.0
    }

    /// Lightness as a fraction in [0,1]
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.l as f64 / 255.0
    }

    /// Compare hue against a value in degrees with 0.1° tolerance
    ///
    /// Named comparison replacing an equality-operator overload: equality on
    /// the full color remains derived field equality.
    #[inline]
    pub fn hue_approx_eq(&self, degrees: f64) -> bool {
        (self.hue_degrees() - degrees).abs() < 0.1
    }

    /// Rotate hue by a delta in degrees, wrapping around the circle
    ///
    /// The double-modulo form handles negative deltas under truncating
    /// integer modulo.
    pub fn adjust_hue(&self, degrees: f64) -> Self {
        let shifted = self.h as i64 + (degrees * 100.0).round() as i64;
        Self {
            h: ((shifted % HUE_MOD + HUE_MOD) % HUE_MOD) as u16,
            ..*self
        }
    }

    /// Multiply saturation by a factor, clamped to [0,255]
    pub fn adjust_saturation(&self, factor: f64) -> Self {
        Self {
            s: (self.s as f64 * factor).round().clamp(0.0, 255.0) as u8,
            ..*self
        }
    }

    /// Multiply lightness by a factor, clamped to [0,255]
    pub fn adjust_lightness(&self, factor: f64) -> Self {
        Self {
            l: (self.l as f64 * factor).round().clamp(0.0, 255.0) as u8,
            ..*self
        }
    }

    /// Increase saturation by an amount in [0,1] of full scale
    pub fn saturate(&self, amount: f64) -> Self {
        Self {
            s: (self.s as f64 + amount * 255.0).round().clamp(0.0, 255.0) as u8,
            ..*self
        }
    }

    /// Decrease saturation by an amount in [0,1] of full scale
    pub fn desaturate(&self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Increase lightness by an amount in [0,1] of full scale
    pub fn lighten(&self, amount: f64) -> Self {
        Self {
            l: (self.l as f64 + amount * 255.0).round().clamp(0.0, 255.0) as u8,
            ..*self
        }
    }

    /// Decrease lightness by an amount in [0,1] of full scale
    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Complementary color: hue rotated 180°
    pub fn complement(&self) -> Self {
        self.adjust_hue(180.0)
    }

    /// Triadic harmony: this color plus +120° and +240° rotations
    pub fn triadic(&self) -> [Self; 3] {
        [*self, self.adjust_hue(120.0), self.adjust_hue(240.0)]
    }

    /// Analogous harmony: −angle, this color, +angle
    pub fn analogous(&self, angle: f64) -> [Self; 3] {
        [self.adjust_hue(-angle), *self, self.adjust_hue(angle)]
    }

    /// Split-complementary harmony: this color, 180°−angle, 180°+angle
    pub fn split_complementary(&self, angle: f64) -> [Self; 3] {
        [
            *self,
            self.adjust_hue(180.0 - angle),
            self.adjust_hue(180.0 + angle),
        ]
    }

    /// A random opaque HSL color from the thread-local generator
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            h: rng.gen_range(0..HUE_MOD as u16),
            s: rng.r#gen(),
            l: rng.r#gen(),
            alpha: 255,
        }
    }
}

impl ColorSpace for Hsl {
    fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let lightness = (max + min) / 2.0;
        let l = (lightness * 255.0).round() as u8;

        if delta == 0.0 {
            // Achromatic: hue and saturation are zero by convention
            return Self {
                h: 0,
                s: 0,
                l,
                alpha: rgb.a,
            };
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // 60°-sector formula keyed on the maximal channel
        let mut hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue = hue / 6.0 * 360.0;

        Self {
            h: ((hue * 100.0).round() as i64 % HUE_MOD) as u16,
            s: (saturation * 255.0).round().clamp(0.0, 255.0) as u8,
            l,
            alpha: rgb.a,
        }
    }

    fn to_rgb(&self) -> Rgb {
        if self.s == 0 {
            // Achromatic: reuse the 8-bit lightness directly
            return Rgb::new(self.l, self.l, self.l).with_alpha(self.alpha);
        }

        let l = self.lightness();
        let s = self.saturation();
        let h = self.hue_degrees() / 360.0;

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |offset: f64| {
            let mut t = h + offset;
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Rgb::new(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0)).with_alpha(self.alpha)
    }
}
