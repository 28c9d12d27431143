//! RGB color hub
//!
//! 8-bit-per-channel RGBA is the canonical, exact representation. Every other
//! color space converts to and from it, and all continuous-space math is
//! rounded to nearest and clamped to [0,255] here and only here.

use std::ops::{Add, Mul, Sub};

use rand::Rng;

use crate::color::ColorSpace;

/// RGB color with 8-bit channels and alpha
///
/// Alpha defaults to 255 (opaque). Arithmetic saturates per channel; none of
/// the operations here can fail.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub a: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgb {
    /// Create a new opaque RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Create RGB from a flat [r, g, b, a] array
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }

    /// Convert to a flat [r, g, b, a] array
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Perceived brightness: 0.299·r + 0.587·g + 0.114·b, in [0,255]
    ///
    /// Alpha does not participate.
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// True if the perceived brightness is below mid-gray
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.luminance() < 128.0
    }

    /// True if the perceived brightness is at or above mid-gray
    #[inline]
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Linear interpolation toward `other`
    ///
    /// The ratio is clamped into [0,1]; 0 keeps self, 1 yields `other`.
    /// Alpha interpolates like the color channels.
    pub fn mix(&self, other: Rgb, ratio: f64) -> Self {
        let t = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    /// Scale toward white by `factor` (0.2 = 20% brighter)
    #[inline]
    pub fn brighten(&self, factor: f64) -> Self {
        *self * (1.0 + factor)
    }

    /// Scale toward black by `factor` (0.2 = 20% darker)
    #[inline]
    pub fn darken(&self, factor: f64) -> Self {
        *self * (1.0 - factor)
    }

    /// Invert the color channels, keeping alpha
    #[inline]
    pub const fn invert(&self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    /// Replace all channels with the rounded luminance, keeping alpha
    pub fn to_grayscale(&self) -> Self {
        let gray = self.luminance().round() as u8;
        Self {
            r: gray,
            g: gray,
            b: gray,
            a: self.a,
        }
    }

    /// Transparency as a fraction (1.0 = fully transparent)
    #[inline]
    pub fn transparency(&self) -> f64 {
        1.0 - self.a as f64 / 255.0
    }

    /// True if alpha is below 255
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a < 255
    }

    /// True if alpha is exactly 255
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Additive blend: channels sum with saturation, alpha kept
    #[inline]
    pub const fn blend_add(&self, other: Rgb) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            a: self.a,
        }
    }

    /// Subtractive blend: channels subtract with saturation, alpha kept
    #[inline]
    pub const fn blend_subtract(&self, other: Rgb) -> Self {
        Self {
            r: self.r.saturating_sub(other.r),
            g: self.g.saturating_sub(other.g),
            b: self.b.saturating_sub(other.b),
            a: self.a,
        }
    }

    /// Multiply blend: channel product normalized by 255
    #[inline]
    pub const fn blend_multiply(&self, other: Rgb) -> Self {
        Self {
            r: ((self.r as u16 * other.r as u16) / 255) as u8,
            g: ((self.g as u16 * other.g as u16) / 255) as u8,
            b: ((self.b as u16 * other.b as u16) / 255) as u8,
            a: self.a,
        }
    }

    /// Screen blend: inverse multiply of the channel inverses
    #[inline]
    pub const fn blend_screen(&self, other: Rgb) -> Self {
        const fn screen(a: u8, b: u8) -> u8 {
            255 - (((255 - a as u16) * (255 - b as u16)) / 255) as u8
        }
        Self {
            r: screen(self.r, other.r),
            g: screen(self.g, other.g),
            b: screen(self.b, other.b),
            a: self.a,
        }
    }

    /// Overlay blend: multiply below mid-gray, screen above
    #[inline]
    pub const fn blend_overlay(&self, other: Rgb) -> Self {
        const fn overlay(base: u8, blend: u8) -> u8 {
            if base < 128 {
                ((2 * base as u16 * blend as u16) / 255) as u8
            } else {
                255 - ((2 * (255 - base as u16) * (255 - blend as u16)) / 255) as u8
            }
        }
        Self {
            r: overlay(self.r, other.r),
            g: overlay(self.g, other.g),
            b: overlay(self.b, other.b),
            a: self.a,
        }
    }

    /// Porter-Duff "over" compositing against a background with its own alpha
    pub fn alpha_blend(&self, background: Rgb) -> Self {
        if self.a == 255 {
            return *self;
        }
        if self.a == 0 {
            return background;
        }

        let alpha_fg = self.a as f64 / 255.0;
        let alpha_bg = background.a as f64 / 255.0;
        let alpha_out = alpha_fg + alpha_bg * (1.0 - alpha_fg);

        if alpha_out == 0.0 {
            return Self::TRANSPARENT;
        }

        let blend = |fg: u8, bg: u8| {
            ((fg as f64 * alpha_fg + bg as f64 * alpha_bg * (1.0 - alpha_fg)) / alpha_out).round()
                as u8
        };
        Self {
            r: blend(self.r, background.r),
            g: blend(self.g, background.g),
            b: blend(self.b, background.b),
            a: (alpha_out * 255.0).round() as u8,
        }
    }

    /// Alpha blend assuming an opaque background; result is opaque
    pub fn alpha_blend_simple(&self, background: Rgb) -> Self {
        if self.a == 255 {
            return *self;
        }
        if self.a == 0 {
            return background;
        }

        let alpha = self.a as f64 / 255.0;
        let inv = 1.0 - alpha;
        let blend = |fg: u8, bg: u8| (fg as f64 * alpha + bg as f64 * inv).round() as u8;
        Self {
            r: blend(self.r, background.r),
            g: blend(self.g, background.g),
            b: blend(self.b, background.b),
            a: 255,
        }
    }

    /// Shift toward red/orange; factor is clamped into [0,1]
    pub fn warm(&self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: add_clamped(self.r, 255.0 * f * 0.3),
            g: add_clamped(self.g, 255.0 * f * 0.1),
            b: self.b,
            a: self.a,
        }
    }

    /// Shift toward blue/cyan; factor is clamped into [0,1]
    pub fn cool(&self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: self.r,
            g: add_clamped(self.g, 255.0 * f * 0.1),
            b: add_clamped(self.b, 255.0 * f * 0.3),
            a: self.a,
        }
    }

    /// Adjust contrast; `contrast` is clamped into [-1,1]
    ///
    /// Positive values push channels away from mid-gray, negative values pull
    /// them toward it.
    pub fn adjust_contrast(&self, contrast: f64) -> Self {
        let c = contrast.clamp(-1.0, 1.0);
        let factor = (259.0 * (c * 255.0 + 255.0)) / (255.0 * (259.0 - c * 255.0));
        let apply =
            |v: u8| (factor * (v as f64 - 128.0) + 128.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
            a: self.a,
        }
    }

    /// Apply gamma encoding per channel: v' = v^(1/gamma)
    pub fn apply_gamma(&self, gamma: f64) -> Self {
        let correct = |v: u8| {
            let normalized = v as f64 / 255.0;
            (normalized.powf(1.0 / gamma) * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: correct(self.r),
            g: correct(self.g),
            b: correct(self.b),
            a: self.a,
        }
    }

    /// Remove gamma encoding per channel: v' = v^gamma
    pub fn remove_gamma(&self, gamma: f64) -> Self {
        let remove = |v: u8| {
            let normalized = v as f64 / 255.0;
            (normalized.powf(gamma) * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: remove(self.r),
            g: remove(self.g),
            b: remove(self.b),
            a: self.a,
        }
    }

    /// Format as a hex literal, e.g. `#ff8000`
    ///
    /// Alpha is appended only when requested and not fully opaque.
    pub fn to_hex(&self, include_alpha: bool) -> String {
        if include_alpha && self.a != 255 {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// A random opaque color from the thread-local generator
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(rng.r#gen(), rng.r#gen(), rng.r#gen())
    }

    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Mid gray
    pub const GRAY: Self = Self::new(128, 128, 128);
    /// Red primary
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green primary
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue primary
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Yellow
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Cyan
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Magenta
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// Add a float delta to an 8-bit channel, clamping into range
#[inline]
fn add_clamped(v: u8, delta: f64) -> u8 {
    (v as f64 + delta).round().clamp(0.0, 255.0) as u8
}

impl ColorSpace for Rgb {
    #[inline]
    fn from_rgb(rgb: Rgb) -> Self {
        rgb
    }

    #[inline]
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl From<[u8; 4]> for Rgb {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 4] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl Add for Rgb {
    type Output = Self;

    /// Per-channel saturating addition; alpha participates
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
            a: self.a.saturating_add(rhs.a),
        }
    }
}

impl Sub for Rgb {
    type Output = Self;

    /// Per-channel saturating subtraction; alpha participates
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r.saturating_sub(rhs.r),
            g: self.g.saturating_sub(rhs.g),
            b: self.b.saturating_sub(rhs.b),
            a: self.a.saturating_sub(rhs.a),
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    /// Scale color channels by a factor, clamped to [0,255]; alpha unchanged
    fn mul(self, factor: f64) -> Self::Output {
        let scale = |v: u8| (v as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}
