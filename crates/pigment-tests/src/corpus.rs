//! Test corpus generation
//!
//! Two complementary samplings of the 8-bit RGB cube: a coarse regular grid
//! that pins the corners and axes, and a seeded random spray for the
//! interior. Both are deterministic so failures reproduce.

use pigment_core::Rgb;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed seed so every run sees the same corpus
const CORPUS_SEED: u64 = 0x7069676d656e74; // "pigment"

/// Regular grid over the RGB cube with the given step
///
/// Always includes 0 and 255 on each axis, so all eight corners are
/// present. A step of 51 yields 6³ = 216 colors.
pub fn grid_corpus(step: usize) -> Vec<Rgb> {
    let mut axis: Vec<u8> = (0..256)
        .step_by(step.max(1))
        .chain(std::iter::once(255))
        .map(|v| v as u8)
        .collect();
    axis.dedup();

    let mut colors = Vec::with_capacity(axis.len().pow(3));
    for &r in &axis {
        for &g in &axis {
            for &b in &axis {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors
}

/// Seeded uniform spray of `count` colors
pub fn random_corpus(count: usize) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(CORPUS_SEED);
    (0..count)
        .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_includes_corners() {
        let grid = grid_corpus(51);
        assert!(grid.contains(&Rgb::BLACK));
        assert!(grid.contains(&Rgb::WHITE));
        assert!(grid.contains(&Rgb::new(255, 0, 0)));
        assert!(grid.contains(&Rgb::new(0, 255, 255)));
    }

    #[test]
    fn test_random_corpus_deterministic() {
        assert_eq!(random_corpus(100), random_corpus(100));
    }
}
