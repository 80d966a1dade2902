//! # Jury Selection
//!
//! Draws exactly [`JURY_SIZE`] distinct members from the active pool,
//! deterministically for a given seed.
//!
//! The collision policy is forward scanning: when a draw lands on an
//! index that was already taken, the index advances by one (modulo pool
//! size) until a free slot is found. This keeps selection O(jury size²)
//! regardless of pool size and makes the outcome a pure function of
//! `(seed, pool order)`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tenra_core::constants::JURY_SIZE;
use tenra_core::{AccountId, EngineError};
use tenra_ledger::LedgerOfRecord;

/// Select [`JURY_SIZE`] distinct active jurors using `seed`.
///
/// With exactly [`JURY_SIZE`] active members the whole pool is returned;
/// larger pools are sampled with forward-scanning duplicate avoidance.
///
/// # Errors
///
/// Returns [`EngineError::NotEnoughJurors`] when the active pool is
/// smaller than a jury.
pub fn select_jurors(
    ledger: &LedgerOfRecord,
    seed: u64,
) -> Result<[AccountId; JURY_SIZE], EngineError> {
    let pool = ledger.active_jurors();
    if pool.len() < JURY_SIZE {
        return Err(EngineError::NotEnoughJurors {
            available: pool.len(),
            required: JURY_SIZE,
        });
    }
    if pool.len() == JURY_SIZE {
        return Ok([pool[0], pool[1], pool[2]]);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut taken = [usize::MAX; JURY_SIZE];
    let mut selected = [pool[0]; JURY_SIZE];
    for slot in 0..JURY_SIZE {
        let mut idx = rng.gen_range(0..pool.len());
        while taken[..slot].contains(&idx) {
            idx = (idx + 1) % pool.len();
        }
        taken[slot] = idx;
        selected[slot] = pool[idx];
    }
    Ok(selected)
}
