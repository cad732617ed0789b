//! RNG module - uniform random piece selection
//!
//! Each draw picks uniformly among the seven kinds with no bag or
//! anti-repetition scheme, so arbitrarily long same-piece streaks are
//! possible. The generator is a seedable LCG so piece sequences are
//! reproducible in tests.

use crate::types::{PieceKind, PIECE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform seven-way piece picker
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn pick(&mut self) -> PieceKind {
        PIECE_KINDS[self.rng.next_range(PIECE_KINDS.len() as u32) as usize]
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
