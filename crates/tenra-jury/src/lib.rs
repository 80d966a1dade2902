//! # tenra-jury — Juror Pool & Jury Selection
//!
//! Implements the staking side of the engine:
//!
//! - **Pool** (`pool.rs`): stake/unstake with the unstake delay and
//!   open-assignment blocking, plus the assignment and reputation
//!   bookkeeping invoked by the dispute coordinator.
//!
//! - **Selection** (`selection.rs`): deterministic seeded selection of 3
//!   distinct active jurors with forward-scanning duplicate avoidance.
//!
//! - **Entropy** (`entropy.rs`): the injectable [`EntropySource`]
//!   abstraction separating *where randomness comes from* (an operational
//!   security decision) from *how selection uses it* (deterministic given
//!   a seed).

pub mod entropy;
pub mod pool;
pub mod selection;

pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use pool::JurorPool;
pub use selection::select_jurors;
