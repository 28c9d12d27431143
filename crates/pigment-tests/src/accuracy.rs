//! Per-channel error accounting for round-trip sweeps

use pigment_core::Rgb;

/// Aggregated channel deltas across a sweep
#[derive(Debug, Default, Clone)]
pub struct ChannelDeltaStats {
    /// Number of colors compared
    pub count: usize,
    /// Largest absolute delta seen on any channel
    pub max_delta: u32,
    /// Sum of per-color worst-channel deltas, for the mean
    sum_of_max: u64,
    /// The input that produced `max_delta`, for failure messages
    pub worst_input: Option<Rgb>,
}

impl ChannelDeltaStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one original/round-tripped pair
    pub fn record(&mut self, original: Rgb, round_tripped: Rgb) {
        let delta = channel_delta(original, round_tripped);
        self.count += 1;
        self.sum_of_max += delta as u64;
        if delta > self.max_delta || self.worst_input.is_none() {
            self.max_delta = delta;
            self.worst_input = Some(original);
        }
    }

    /// Mean of the per-color worst-channel deltas
    pub fn mean_delta(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum_of_max as f64 / self.count as f64
    }

    /// Panic with context unless every recorded delta was within `bound`
    pub fn assert_within(&self, bound: u32, label: &str) {
        assert!(
            self.max_delta <= bound,
            "{label}: max channel delta {} exceeds bound {} (worst input {:?}, {} colors, mean {:.3})",
            self.max_delta,
            bound,
            self.worst_input,
            self.count,
            self.mean_delta(),
        );
    }
}

/// Worst absolute per-channel difference between two colors, alpha excluded
pub fn channel_delta(a: Rgb, b: Rgb) -> u32 {
    let dr = (a.r as i32 - b.r as i32).unsigned_abs();
    let dg = (a.g as i32 - b.g as i32).unsigned_abs();
    let db = (a.b as i32 - b.b as i32).unsigned_abs();
    dr.max(dg).max(db)
}
