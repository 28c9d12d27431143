//! Precomputed lookup tables for the LAB conversion pipeline
//!
//! Four immutable tables accelerate the hot transfer functions:
//!
//! - gamma decode: 256 entries, indexed by the original 8-bit value (exact)
//! - gamma encode: 4096 entries, indexed by a linear value in [0,1]
//! - Lab f and f⁻¹: 4096 entries each, domain normalized to [0,2]
//!
//! Tables are built once on first use and never mutated afterwards, so
//! unsynchronized concurrent reads are safe. Continuous-domain lookups
//! interpolate linearly between adjacent entries; the round-trip bounds in
//! pigment-tests pin the acceptable residual error.

use std::sync::LazyLock;

use crate::math::gamma::{lab_f, lab_f_inv, srgb_gamma_decode, srgb_gamma_encode};

/// Entries in the 8-bit indexed gamma decode table
pub const GAMMA_DECODE_SIZE: usize = 256;

/// Entries in the linear-indexed gamma encode table
pub const GAMMA_ENCODE_SIZE: usize = 4096;

/// Entries in each Lab nonlinearity table
pub const LAB_F_SIZE: usize = 4096;

/// Upper bound of the Lab table domain
const LAB_F_DOMAIN: f64 = 2.0;

static GAMMA_DECODE: LazyLock<[f64; GAMMA_DECODE_SIZE]> = LazyLock::new(|| {
    let mut table = [0.0; GAMMA_DECODE_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = srgb_gamma_decode(i as f64 / 255.0);
    }
    table
});

static GAMMA_ENCODE: LazyLock<[f64; GAMMA_ENCODE_SIZE]> = LazyLock::new(|| {
    let mut table = [0.0; GAMMA_ENCODE_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = srgb_gamma_encode(i as f64 / (GAMMA_ENCODE_SIZE - 1) as f64);
    }
    table
});

static LAB_F: LazyLock<[f64; LAB_F_SIZE]> = LazyLock::new(|| {
    let mut table = [0.0; LAB_F_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        let t = i as f64 / (LAB_F_SIZE - 1) as f64 * LAB_F_DOMAIN;
        *entry = lab_f(t);
    }
    table
});

static LAB_F_INV: LazyLock<[f64; LAB_F_SIZE]> = LazyLock::new(|| {
    let mut table = [0.0; LAB_F_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        let t = i as f64 / (LAB_F_SIZE - 1) as f64 * LAB_F_DOMAIN;
        *entry = lab_f_inv(t);
    }
    table
});

/// Linear interpolation between the two table entries bracketing a
/// normalized position in [0,1]
#[inline]
fn interpolate(table: &[f64], normalized: f64) -> f64 {
    let pos = normalized * (table.len() - 1) as f64;
    let idx = pos.floor() as usize;
    if idx >= table.len() - 1 {
        return table[table.len() - 1];
    }
    let frac = pos - idx as f64;
    table[idx] + frac * (table[idx + 1] - table[idx])
}

/// Gamma decode an 8-bit sRGB channel to linear light
///
/// Indexed directly by the channel value, so this lookup is exact.
#[inline]
pub fn gamma_decode_u8(value: u8) -> f64 {
    GAMMA_DECODE[value as usize]
}

/// Gamma encode a linear value in [0,1]
///
/// Input is clamped into [0,1], then interpolated between adjacent entries.
#[inline]
pub fn gamma_encode_linear(linear: f64) -> f64 {
    interpolate(&GAMMA_ENCODE[..], linear.clamp(0.0, 1.0))
}

/// Lab forward nonlinearity via table lookup
///
/// Input is clamped into the [0,2] table domain, then interpolated
/// between adjacent entries.
#[inline]
pub fn lab_f_lookup(t: f64) -> f64 {
    interpolate(&LAB_F[..], (t / LAB_F_DOMAIN).clamp(0.0, 1.0))
}

/// Lab inverse nonlinearity via table lookup
///
/// Input is clamped into the [0,2] table domain, then interpolated
/// between adjacent entries.
#[inline]
pub fn lab_f_inv_lookup(t: f64) -> f64 {
    interpolate(&LAB_F_INV[..], (t / LAB_F_DOMAIN).clamp(0.0, 1.0))
}
