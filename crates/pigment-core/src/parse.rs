//! Textual color parsing
//!
//! Accepts hex literals (`#RGB`, `#RRGGBB`, `#RRGGBBAA`, case-insensitive,
//! the leading `#` optional) and CSS functional notation (`rgb()`, `rgba()`,
//! `hsl()`, `hsla()` with comma separators and optional whitespace).
//!
//! Numeric components supplied out of range are clamped, never rejected.
//! Only structural problems fail: empty input, a wrong digit count, an
//! unknown function keyword, a wrong component count, or a non-numeric
//! token.

use std::str::FromStr;

use crate::color::{Hsl, Rgb};
use crate::error::{ParseError, Result};

/// Parse any supported textual color form into RGB
///
/// `hsl()`/`hsla()` input is converted through [`Hsl::to_rgb`], which costs
/// the usual 8-bit quantization.
pub fn parse(text: &str) -> Result<Rgb> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if trimmed.starts_with("hsl(") || trimmed.starts_with("hsla(") {
        use crate::color::ColorSpace;
        return Ok(parse_hsl(trimmed)?.to_rgb());
    }
    parse_rgb(trimmed)
}

/// Parse a hex literal or `rgb()`/`rgba()` functional notation
pub fn parse_rgb(text: &str) -> Result<Rgb> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if trimmed.starts_with("rgb(") || trimmed.starts_with("rgba(") {
        return parse_css_rgb(trimmed);
    }
    if trimmed.contains('(') {
        let name = trimmed.split('(').next().unwrap_or("").to_string();
        return Err(ParseError::UnknownFunction(name));
    }
    parse_hex(trimmed)
}

/// Parse `hsl()`/`hsla()` functional notation
pub fn parse_hsl(text: &str) -> Result<Hsl> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if !trimmed.starts_with("hsl(") && !trimmed.starts_with("hsla(") {
        let name = trimmed.split('(').next().unwrap_or(trimmed).to_string();
        return Err(ParseError::UnknownFunction(name));
    }

    let parts = function_args(trimmed)?;
    if parts.len() < 3 || parts.len() > 4 {
        return Err(ParseError::ComponentCount {
            expected: "3 or 4",
            actual: parts.len(),
        });
    }

    let h = parse_float(&parts[0])?;
    let s = parse_percent_fraction(&parts[1])?;
    let l = parse_percent_fraction(&parts[2])?;

    let mut hsl = Hsl::new(h, s, l);
    if parts.len() == 4 {
        let a = parse_float(&parts[3])?;
        hsl.alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Ok(hsl)
}

fn parse_hex(text: &str) -> Result<Rgb> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.is_ascii() {
        return Err(ParseError::HexDigit(text.to_string()));
    }

    // Shorthand doubles each digit; 6-digit forms gain the implied opaque
    // alpha, so every accepted form normalizes to 8 digits.
    let expanded: String = match digits.len() {
        3 => {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            format!("{doubled}ff")
        }
        6 => format!("{digits}ff"),
        8 => digits.to_string(),
        n => return Err(ParseError::HexLength(n)),
    };

    let byte = |range: std::ops::Range<usize>| -> Result<u8> {
        expanded
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ParseError::HexDigit(text.to_string()))
    };

    Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?).with_alpha(byte(6..8)?))
}

fn parse_css_rgb(text: &str) -> Result<Rgb> {
    let parts = function_args(text)?;
    if parts.len() < 3 || parts.len() > 4 {
        return Err(ParseError::ComponentCount {
            expected: "3 or 4",
            actual: parts.len(),
        });
    }

    let channel = |s: &str| -> Result<u8> {
        let v: i64 = s
            .parse()
            .map_err(|_| ParseError::InvalidComponent(s.to_string()))?;
        Ok(v.clamp(0, 255) as u8)
    };

    let mut rgb = Rgb::new(channel(&parts[0])?, channel(&parts[1])?, channel(&parts[2])?);
    if parts.len() == 4 {
        let a = parse_float(&parts[3])?;
        rgb.a = (a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    Ok(rgb)
}

/// Extract the comma-separated arguments between the parentheses,
/// whitespace stripped
fn function_args(text: &str) -> Result<Vec<String>> {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let start = clean
        .find('(')
        .ok_or_else(|| ParseError::MalformedFunction(text.to_string()))?;
    let end = clean[start..]
        .find(')')
        .map(|i| start + i)
        .ok_or_else(|| ParseError::MalformedFunction(text.to_string()))?;

    Ok(clean[start + 1..end].split(',').map(str::to_string).collect())
}

fn parse_float(s: &str) -> Result<f64> {
    s.parse()
        .map_err(|_| ParseError::InvalidComponent(s.to_string()))
}

/// Parse a percentage or bare fraction into a clamped [0,1] value
fn parse_percent_fraction(s: &str) -> Result<f64> {
    let body = s.strip_suffix('%').unwrap_or(s);
    let v = parse_float(body)?;
    Ok((v / 100.0).clamp(0.0, 1.0))
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgb(s)
    }
}

impl FromStr for Hsl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hsl(s)
    }
}
