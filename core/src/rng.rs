//! Random sources for the predictor.
//!
//! RULE: Scoring code never calls a platform RNG directly.
//! Every draw goes through a `UniformSource` handed in by the caller,
//! so tests can pin the noise and seeded runs replay exactly.
//!
//! Seeded streams are derived from a single master seed XOR a stable
//! slot index. This means:
//!   - Adding a new slot never changes existing slots' streams.
//!   - Each slot's stream is fully reproducible in isolation.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Anything that can produce a uniform draw in [0.0, 1.0).
pub trait UniformSource {
    fn next_f64(&mut self) -> f64;

    /// Continuous uniform draw in [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn bits_to_unit(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// A named, deterministic RNG stream.
pub struct StreamRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StreamRng {
    /// Create a stream from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl UniformSource for StreamRng {
    fn next_f64(&mut self) -> f64 {
        bits_to_unit(self.inner.next_u64())
    }
}

/// Production source, seeded from OS entropy.
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self { inner: StdRng::from_entropy() }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        bits_to_unit(self.inner.next_u64())
    }
}

/// A source that always returns the same draw. Values outside [0, 1)
/// are pulled back into range.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl UniformSource for FixedDraw {
    fn next_f64(&mut self) -> f64 {
        if !self.0.is_finite() || self.0 < 0.0 {
            0.0
        } else if self.0 >= 1.0 {
            1.0 - f64::EPSILON
        } else {
            self.0
        }
    }
}

/// All seeded streams for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: StreamSlot) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every slot's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Predictor = 0,
    Comparison = 1,
    HistoricalMatrix = 2,
    // Add new slots here — append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Predictor => "predictor",
            Self::Comparison => "comparison",
            Self::HistoricalMatrix => "historical_matrix",
        }
    }
}
