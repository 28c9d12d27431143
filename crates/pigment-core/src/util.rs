//! Palette and accessibility helpers built on the conversion engine
//!
//! Everything here is a consumer of the color spaces: contrast and WCAG
//! checks, distance metrics in several spaces, palette search and dedup,
//! grayscale variants and sepia toning.

use crate::color::{ColorSpace, Hsl, Lab, Mono, Rgb};

/// WCAG contrast compliance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessibilityLevel {
    /// Below every WCAG threshold
    Fail,
    /// 3:1, large text only
    AaLarge,
    /// 4.5:1
    AaNormal,
    /// 4.5:1, large text
    AaaLarge,
    /// 7:1
    AaaNormal,
}

/// WCAG contrast ratio between two colors, in [1, 21]
pub fn contrast_ratio(a: &Rgb, b: &Rgb) -> f64 {
    let lum_a = a.luminance() / 255.0;
    let lum_b = b.luminance() / 255.0;
    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classify a foreground/background pair against the WCAG thresholds
pub fn check_accessibility(
    foreground: &Rgb,
    background: &Rgb,
    large_text: bool,
) -> AccessibilityLevel {
    let ratio = contrast_ratio(foreground, background);

    if ratio >= 7.0 {
        AccessibilityLevel::AaaNormal
    } else if ratio >= 4.5 {
        if large_text {
            AccessibilityLevel::AaaLarge
        } else {
            AccessibilityLevel::AaNormal
        }
    } else if ratio >= 3.0 && large_text {
        AccessibilityLevel::AaLarge
    } else {
        AccessibilityLevel::Fail
    }
}

/// Black or white, whichever contrasts more against `background`
pub fn best_contrast_color(background: &Rgb) -> Rgb {
    if contrast_ratio(&Rgb::WHITE, background) > contrast_ratio(&Rgb::BLACK, background) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Euclidean distance in 8-bit RGB space
pub fn rgb_distance(a: &Rgb, b: &Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Perceptual distance: CIE76 delta E between the LAB images of both colors
pub fn color_distance(a: &Rgb, b: &Rgb) -> f64 {
    Lab::from_rgb(*a).delta_e(&Lab::from_rgb(*b))
}

/// Absolute difference in perceived luminance, on the 0-255 scale
pub fn brightness_difference(a: &Rgb, b: &Rgb) -> f64 {
    (a.luminance() - b.luminance()).abs()
}

/// Shortest angular hue distance in degrees, [0, 180]
pub fn hue_difference(a: &Rgb, b: &Rgb) -> f64 {
    let h1 = Hsl::from_rgb(*a).hue_degrees();
    let h2 = Hsl::from_rgb(*b).hue_degrees();

    let diff = (h1 - h2).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// The palette entry perceptually closest to `target`, or `None` for an
/// empty palette
pub fn find_closest_color(target: &Rgb, palette: &[Rgb]) -> Option<Rgb> {
    palette.iter().copied().min_by(|a, b| {
        color_distance(target, a)
            .partial_cmp(&color_distance(target, b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Drop palette entries within `threshold` RGB distance of an earlier entry
///
/// Keeps first occurrences, so the output order follows the input.
pub fn remove_duplicates(palette: &[Rgb], threshold: f64) -> Vec<Rgb> {
    let mut unique: Vec<Rgb> = Vec::new();
    for &color in palette {
        if !unique.iter().any(|u| rgb_distance(&color, u) < threshold) {
            unique.push(color);
        }
    }
    unique
}

/// Grayscale by channel average
pub fn to_grayscale_average(color: &Rgb) -> Rgb {
    let gray = ((color.r as u16 + color.g as u16 + color.b as u16) / 3) as u8;
    Rgb::new(gray, gray, gray).with_alpha(color.a)
}

/// Grayscale by perceived luminance
pub fn to_grayscale_luminance(color: &Rgb) -> Rgb {
    Mono::from_rgb(*color).to_rgb()
}

/// Grayscale by HSL lightness: midpoint of the channel extremes
pub fn to_grayscale_lightness(color: &Rgb) -> Rgb {
    let max = color.r.max(color.g).max(color.b) as u16;
    let min = color.r.min(color.g).min(color.b) as u16;
    let gray = ((max + min) / 2) as u8;
    Rgb::new(gray, gray, gray).with_alpha(color.a)
}

/// Grayscale by zeroing HSL saturation, keeping hue and lightness
pub fn to_grayscale_desaturate(color: &Rgb) -> Rgb {
    let hsl = Hsl::from_rgb(*color);
    Hsl {
        s: 0,
        ..hsl
    }
    .to_rgb()
}

/// Classic sepia tone matrix, clamped per channel
pub fn to_sepia(color: &Rgb) -> Rgb {
    let r = color.r as f64;
    let g = color.g as f64;
    let b = color.b as f64;

    let mix = |weights: [f64; 3]| {
        (r * weights[0] + g * weights[1] + b * weights[2]).clamp(0.0, 255.0) as u8
    };

    Rgb::new(
        mix([0.393, 0.769, 0.189]),
        mix([0.349, 0.686, 0.168]),
        mix([0.272, 0.534, 0.131]),
    )
    .with_alpha(color.a)
}
