//! # Dispute Records
//!
//! The persisted form of a contested agreement under jury review: the
//! denormalized parties, the 3-member jury, per-juror votes, tallies, and
//! the append-only evidence log.
//!
//! ## States
//!
//! ```text
//! Active ──▶ Resolved (terminal, never re-opened)
//! ```
//!
//! Parties are copied from the agreement at raise time so resolution is
//! independent of any later agreement mutation.

use serde::{Deserialize, Serialize};

use tenra_core::constants::JURY_SIZE;
use tenra_core::{
    AccountId, AgreementId, ContentDigest, DisputeId, EvidenceRef, Timestamp, Tokens,
};

/// The lifecycle status of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisputeStatus {
    /// Voting is open (until deadline or full participation).
    Active,
    /// Outcome settled and rewards distributed. Terminal.
    Resolved,
}

impl DisputeStatus {
    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Resolved => "RESOLVED",
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A juror's verdict on a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    /// The tenant's claim prevails.
    TenantWins,
    /// The landlord's claim prevails.
    LandlordWins,
}

/// The settled outcome of a resolved dispute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisputeOutcome {
    /// Whether the tenant won (`tenant_votes > landlord_votes`).
    pub tenant_wins: bool,
    /// When the dispute was resolved.
    pub resolved_at: Timestamp,
}

/// An append-only evidence entry attached to a dispute.
///
/// The digest covers the canonical serialization of the record's content
/// fields, so an entry can be re-verified against the off-chain store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Who submitted the evidence (landlord or tenant).
    pub submitted_by: AccountId,
    /// Content reference into the off-chain store.
    pub evidence_ref: EvidenceRef,
    /// SHA-256 digest of the canonical record content.
    pub digest: ContentDigest,
    /// When the evidence was submitted.
    pub submitted_at: Timestamp,
}

/// A contested agreement under review by a 3-member jury.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispute {
    /// Monotonic identifier allocated by the ledger.
    pub id: DisputeId,
    /// The agreement under dispute (one open dispute per agreement).
    pub agreement_id: AgreementId,
    /// The party who raised the dispute.
    pub raised_by: AccountId,
    /// Landlord at raise time (denormalized).
    pub landlord: AccountId,
    /// Tenant at raise time (denormalized).
    pub tenant: AccountId,
    /// When the dispute was raised.
    pub created_at: Timestamp,
    /// Deadline after which anyone may trigger resolution.
    pub voting_deadline: Timestamp,
    /// Current lifecycle status.
    pub status: DisputeStatus,
    /// The randomly selected jury, exactly [`JURY_SIZE`] distinct members.
    pub assigned_jurors: [AccountId; JURY_SIZE],
    /// Each assigned juror's vote, indexed in parallel with
    /// `assigned_jurors`.
    pub votes: [Option<Vote>; JURY_SIZE],
    /// Running tally of tenant-favoring votes.
    pub tenant_votes: u8,
    /// Running tally of landlord-favoring votes.
    pub landlord_votes: u8,
    /// Set exactly once at resolution.
    pub outcome: Option<DisputeOutcome>,
    /// Juror reward pool, funded by the agreement's dispute fee.
    pub reward_pool: Tokens,
    /// Append-only evidence log (the raising party's initial submission
    /// is the first entry).
    pub evidence: Vec<EvidenceRecord>,
}

impl Dispute {
    /// Whether `account` is the landlord or tenant of this dispute.
    pub fn is_party(&self, account: &AccountId) -> bool {
        self.landlord == *account || self.tenant == *account
    }

    /// The jury-slot index of `account`, if assigned.
    pub fn juror_index(&self, account: &AccountId) -> Option<usize> {
        self.assigned_jurors.iter().position(|j| j == account)
    }

    /// Number of votes cast so far.
    pub fn votes_cast(&self) -> usize {
        self.votes.iter().filter(|v| v.is_some()).count()
    }

    /// Whether every assigned juror has voted.
    pub fn all_voted(&self) -> bool {
        self.votes_cast() == JURY_SIZE
    }

    /// The tie-break policy: tenant wins only with a strict majority, so
    /// a zero-vote timeout resolves in the landlord's favor.
    pub fn tenant_leading(&self) -> bool {
        self.tenant_votes > self.landlord_votes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dispute {
        Dispute {
            id: DisputeId(1),
            agreement_id: AgreementId(1),
            raised_by: AccountId::new(),
            landlord: AccountId::new(),
            tenant: AccountId::new(),
            created_at: Timestamp::from_epoch_secs(0).unwrap(),
            voting_deadline: Timestamp::from_epoch_secs(259_200).unwrap(),
            status: DisputeStatus::Active,
            assigned_jurors: [AccountId::new(), AccountId::new(), AccountId::new()],
            votes: [None, None, None],
            tenant_votes: 0,
            landlord_votes: 0,
            outcome: None,
            reward_pool: Tokens(10),
            evidence: Vec::new(),
        }
    }

    #[test]
    fn juror_index_finds_assigned_members() {
        let d = sample();
        assert_eq!(d.juror_index(&d.assigned_jurors[2]), Some(2));
        assert_eq!(d.juror_index(&AccountId::new()), None);
    }

    #[test]
    fn vote_progress_tracking() {
        let mut d = sample();
        assert_eq!(d.votes_cast(), 0);
        assert!(!d.all_voted());
        d.votes[0] = Some(Vote::TenantWins);
        d.votes[2] = Some(Vote::LandlordWins);
        assert_eq!(d.votes_cast(), 2);
        d.votes[1] = Some(Vote::TenantWins);
        assert!(d.all_voted());
    }

    #[test]
    fn zero_votes_defaults_to_landlord() {
        let d = sample();
        assert!(!d.tenant_leading());
    }
}
