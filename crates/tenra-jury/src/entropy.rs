//! # Entropy Sources
//!
//! Jury selection consumes a caller-supplied seed; it never generates
//! entropy itself. The [`EntropySource`] trait isolates the seed origin
//! so it can be swapped without touching selection logic.
//!
//! ## Security Note
//!
//! Any entropy source visible to or influenceable by transaction
//! proposers is a manipulation risk: a proposer who can predict the seed
//! can grind until a favorable jury is drawn. [`OsEntropy`] is acceptable
//! for a trusted coordinator; ledger-style deployments should substitute
//! a verifiable randomness source (VRF or commit-reveal) behind this same
//! trait.

use rand::rngs::OsRng;
use rand::RngCore;

/// Supplies seeds for jury selection.
pub trait EntropySource {
    /// Draw the next selection seed.
    fn draw_seed(&mut self) -> u64;
}

/// Operating-system entropy, for trusted-coordinator deployments.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn draw_seed(&mut self) -> u64 {
        OsRng.next_u64()
    }
}

/// A fixed seed, for deterministic tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn draw_seed(&mut self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_entropy_is_stable() {
        let mut src = FixedEntropy(42);
        assert_eq!(src.draw_seed(), 42);
        assert_eq!(src.draw_seed(), 42);
    }
}
