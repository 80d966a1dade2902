//! # Evidence Intake
//!
//! Builds content-digested [`EvidenceRecord`]s for the append-only
//! evidence log. The record's digest covers its canonical content fields,
//! so any stored entry can later be re-verified against the off-chain
//! store without trusting the ledger copy.

use serde::Serialize;

use tenra_core::{
    sha256_digest, AccountId, CanonicalBytes, DisputeId, EngineError, EvidenceRef, Timestamp,
};
use tenra_ledger::EvidenceRecord;

/// The digested content of an evidence record.
///
/// Field order is irrelevant: canonicalization sorts keys before hashing.
#[derive(Serialize)]
struct EvidenceContent<'a> {
    dispute_id: DisputeId,
    submitted_by: AccountId,
    evidence_ref: &'a EvidenceRef,
    submitted_at: Timestamp,
}

/// Build an evidence record with its content digest.
pub fn record_evidence(
    dispute_id: DisputeId,
    submitted_by: AccountId,
    evidence_ref: EvidenceRef,
    submitted_at: Timestamp,
) -> Result<EvidenceRecord, EngineError> {
    let content = EvidenceContent {
        dispute_id,
        submitted_by,
        evidence_ref: &evidence_ref,
        submitted_at,
    };
    let digest = sha256_digest(&CanonicalBytes::new(&content)?);
    Ok(EvidenceRecord {
        submitted_by,
        evidence_ref,
        digest,
        submitted_at,
    })
}

/// Re-verify a stored record against its digest.
pub fn verify_evidence(
    dispute_id: DisputeId,
    record: &EvidenceRecord,
) -> Result<bool, EngineError> {
    let content = EvidenceContent {
        dispute_id,
        submitted_by: record.submitted_by,
        evidence_ref: &record.evidence_ref,
        submitted_at: record.submitted_at,
    };
    let digest = sha256_digest(&CanonicalBytes::new(&content)?);
    Ok(digest == record.digest)
}
