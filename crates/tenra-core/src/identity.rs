//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the Tenra Stack. These prevent
//! accidental identifier confusion — you cannot pass an `AgreementId`
//! where a `DisputeId` is expected, and an asset reference can never be
//! mistaken for an evidence reference.
//!
//! Accounts are UUID-based because the engine receives an authenticated
//! principal from an external wallet layer and never mints identities
//! itself. Agreements and disputes use monotonic integer IDs allocated by
//! the ledger's counters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated principal: landlord, tenant, juror, or operator.
///
/// The engine treats this as opaque. Authentication happens in the wallet
/// layer; every public operation receives the caller's `AccountId` as an
/// explicit parameter and validates it against stored role fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic identifier for a rental agreement, allocated by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgreementId(pub u64);

/// Monotonic identifier for a dispute, allocated by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisputeId(pub u64);

/// Reference to a property token in the external asset registry.
///
/// Opaque to the engine; ownership checks and custody transfers are
/// delegated to the registry collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Wrap a registry reference string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Content reference to evidence or metadata in the off-chain store.
///
/// Typically a content-addressed locator produced by the storage
/// collaborator. The engine records it verbatim and digests the
/// surrounding evidence record for integrity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceRef(pub String);

impl EvidenceRef {
    /// Wrap a content reference string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

impl std::fmt::Display for AgreementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agreement:{}", self.0)
    }
}

impl std::fmt::Display for DisputeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dispute:{}", self.0)
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "asset:{}", self.0)
    }
}

impl std::fmt::Display for EvidenceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
