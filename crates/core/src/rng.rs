//! RNG module - small deterministic random source
//!
//! Every random decision in the games (food placement, piece kinds, mine
//! layout) goes through [`SimpleRng`], so a fixed seed replays a session.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay on the c-only orbit; nudge it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low ones
    /// for a power-of-two modulus LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Uniformly random tetromino kind
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Derive an independent seed for a child game.
    pub fn fork_seed(&mut self) -> u32 {
        self.next_u32() ^ 0x9E37_79B9
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
