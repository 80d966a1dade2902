//! # tenra-escrow — Agreement Registry & Fund Custody
//!
//! Implements the rental-agreement side of the engine:
//!
//! - **Registry** (`registry.rs`): agreement creation, rent release,
//!   deposit return, cancellation, completion, and the pull-payment
//!   withdrawal step.
//!
//! - **Assets** (`asset.rs`): the external asset-registry boundary as a
//!   trait, plus an in-memory implementation for tests and the demo CLI.
//!
//! - **Config** (`config.rs`): platform configuration guards — operator
//!   identity, capped basis-point fee, and the paused flag.
//!
//! ## Crate Policy
//!
//! - Reject-before-mutate: every operation validates fully before any
//!   ledger write. External asset transfers happen before ledger writes,
//!   so a registry failure cannot leave accounting half-applied.
//! - Value leaves the engine only through the pull-payment withdrawal
//!   step; no operation pushes funds outward.

pub mod asset;
pub mod config;
pub mod registry;

pub use asset::{AssetRegistry, InMemoryAssetRegistry};
pub use config::PlatformConfig;
pub use registry::{require_escrow_untouched, AgreementRegistry};
