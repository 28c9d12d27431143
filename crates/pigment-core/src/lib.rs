//! # pigment - multi-space color conversion engine
//!
//! Color representations across eight spaces (RGB, monochrome, HSL, HSV,
//! CIE LAB, CIE XYZ, Oklab, CIE LCH) with exact numerical transforms
//! between them.
//!
//! ## Design
//!
//! - **RGB hub**: every space converts through 8-bit RGB (star topology),
//!   so n spaces need 2n converters instead of n². The one direct edge is
//!   LAB↔LCH, which is a lossless polar restatement.
//! - **Immutable values**: every operation returns a new color; nothing is
//!   mutated in place.
//! - **Permissive numerics**: conversions and adjustments never fail.
//!   Circular fields wrap, linear fields clamp, and 8-bit quantization
//!   happens exactly once, at the RGB boundary. Only textual parsing
//!   returns errors.
//! - **Lookup tables**: the LAB path runs on precomputed gamma and
//!   nonlinearity tables, built lazily once and read-only afterwards.
//!
//! ## Quick Start
//!
//! ```
//! use pigment_core::{convert, ColorSpace, Hsl, Lab, Rgb};
//!
//! let coral: Rgb = "#ff7f50".parse().unwrap();
//!
//! // Route through the hub explicitly or via convert()
//! let lab = Lab::from_rgb(coral);
//! let hsl: Hsl = convert(&coral);
//!
//! let muted = hsl.desaturate(0.3).to_rgb();
//! assert!(lab.delta_e(&Lab::from_rgb(muted)) > 0.0);
//! ```

pub mod color;
pub mod error;
pub mod math;
pub mod parse;
pub mod util;

pub use color::{ColorSpace, Hsl, Hsv, Lab, Lch, Mono, Oklab, Rgb, Xyz, convert};
pub use error::{ParseError, Result};
pub use parse::{parse, parse_hsl, parse_rgb};

/// Version of pigment
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
