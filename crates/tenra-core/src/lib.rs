//! # tenra-core — Foundational Types for the Tenra Stack
//!
//! This crate is the bedrock of the Tenra rental-arbitration engine. It
//! defines the type-system primitives every other crate in the workspace
//! builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`,
//!    `AgreementId`, `DisputeId`, `AssetRef`, `EvidenceRef` — all newtypes
//!    with distinct namespaces. No bare strings or integers for identifiers.
//!
//! 2. **`Tokens` amounts with checked arithmetic.** Fund accounting never
//!    wraps silently: every addition and subtraction surfaces overflow as
//!    [`EngineError::AmountOverflow`].
//!
//! 3. **UTC-only, seconds-precision timestamps.** Every time-gated rule in
//!    the engine compares against a `Timestamp` supplied by the caller's
//!    execution context, never against an ambient clock.
//!
//! 4. **Digests flow through canonical bytes.** `sha256_digest()` accepts
//!    only `&CanonicalBytes`, so evidence digests cannot be computed over
//!    non-canonical serializations.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tenra-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All persisted types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod canonical;
pub mod constants;
pub mod digest;
pub mod error;
pub mod identity;
pub mod money;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::EngineError;
pub use identity::{AccountId, AgreementId, AssetRef, DisputeId, EvidenceRef};
pub use money::Tokens;
pub use temporal::Timestamp;
