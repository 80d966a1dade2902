//! # tenra-ledger — Ledger of Record
//!
//! Keyed storage for the rental-arbitration engine:
//!
//! - **Agreement** (`agreement.rs`): rental agreement records with their
//!   escrow totals and withdrawal flags.
//!
//! - **Juror** (`juror.rs`): staking records with reputation counters and
//!   the open-assignment list that blocks unstaking.
//!
//! - **Dispute** (`dispute.rs`): dispute records with jury assignment,
//!   per-juror votes, tallies, outcome, and append-only evidence.
//!
//! - **Store** (`store.rs`): [`LedgerOfRecord`], the arena holding all
//!   tables, monotonic ID counters, reverse indexes, and the
//!   pull-payment credit balances.
//!
//! ## Crate Policy
//!
//! - Storage only. Role checks, time gates, and fund rules live in the
//!   owning component crates (`tenra-escrow`, `tenra-jury`,
//!   `tenra-arbitration`); the ledger never enforces them.
//! - Records are never deleted. Terminal agreements and resolved disputes
//!   are retained for audit; jurors are deactivated, not removed.
//! - Every public operation of the engine runs against `&mut
//!   LedgerOfRecord`, so the exclusive borrow serializes all access.

pub mod agreement;
pub mod dispute;
pub mod juror;
pub mod store;

pub use agreement::{Agreement, AgreementStatus};
pub use dispute::{Dispute, DisputeOutcome, DisputeStatus, EvidenceRecord, Vote};
pub use juror::Juror;
pub use store::LedgerOfRecord;
