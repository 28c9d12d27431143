//! Numeric building blocks for the conversion engine
//!
//! This module provides:
//! - sRGB gamma and CIELAB nonlinearity transfer functions
//! - Precomputed lookup tables accelerating the LAB pipeline
//! - 3x3 matrix constants for tristimulus transforms

pub mod gamma;
pub mod lut;
pub mod matrix;

pub use gamma::{lab_f, lab_f_inv, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3x3;
