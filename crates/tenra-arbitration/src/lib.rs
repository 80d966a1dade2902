//! # tenra-arbitration — Dispute Resolution
//!
//! Implements the dispute side of the engine:
//!
//! - **Coordinator** (`coordinator.rs`): the dispute lifecycle state
//!   machine `None → Active → Resolved`, jury assignment, vote casting
//!   with automatic resolution at full participation, and pull-based
//!   timeout resolution.
//!
//! - **Evidence** (`evidence.rs`): content-digested evidence intake for
//!   the append-only evidence log.
//!
//! - **Rewards** (`rewards.rs`): juror payout computation and final
//!   party settlement at resolution.
//!
//! ## Crate Policy
//!
//! - Depends on `tenra-escrow` for the platform-fee configuration and on
//!   `tenra-jury` for selection and juror bookkeeping.
//! - All settlement value movement is pull-payment through the ledger's
//!   credit balances; nothing in this crate pushes funds outward.

pub mod coordinator;
pub mod evidence;
pub mod rewards;

pub use coordinator::DisputeCoordinator;
pub use rewards::{distribute, Settlement};
