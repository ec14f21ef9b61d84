//! Deterministic random streams for shop and stage generation.
//!
//! Every round's stage and shop must be reproducible from `(seed, round)`
//! alone, so generation never touches an OS-seeded source. The opponent mover
//! is the only consumer of `rand`, and it is seeded from the run seed as well.

// Float conversions here are exact or intentionally truncating.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// Mulberry32 increment.
const MULBERRY_STEP: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor that maps a `u32` into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fast 32-bit PRNG (mulberry32). Not cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream from a 32-bit seed. Any seed, including zero, is valid.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create the stream for a given round of a run.
    #[must_use]
    pub const fn for_round(seed: u32, round: u32) -> Self {
        Self::new(derive_seed(seed, round))
    }

    /// Generate the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_STEP);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Generate an index in `[0, n)` as `floor(next_f64() * n)`.
    ///
    /// Returns 0 when `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let scaled = self.next_f64() * n as f64;
        (scaled as usize).min(n - 1)
    }

    /// Fisher-Yates shuffle walking from the back of the slice.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Combine a run seed and a round number into a round-scoped seed.
///
/// FNV-style step: `((offset ^ seed) ^ round) * prime`, wrapping. Seed and
/// round are XORed, so pairs with equal `seed ^ round` collide.
#[must_use]
pub const fn derive_seed(seed: u32, round: u32) -> u32 {
    let h = FNV_OFFSET ^ seed;
    (h ^ round).wrapping_mul(FNV_PRIME)
}
