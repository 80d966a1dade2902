//! # Agreement Records
//!
//! The persisted form of a rental agreement: parties, locked funds,
//! duration, withdrawal flags, and lifecycle status.
//!
//! ## States
//!
//! ```text
//! Active ──▶ Disputed ──▶ Completed (terminal)
//!   │
//!   ├──▶ Completed (terminal, both parties withdrawn)
//!   └──▶ Cancelled (terminal, tenant cancel within window)
//! ```
//!
//! Terminal records are retained for audit and never mutated again.

use serde::{Deserialize, Serialize};

use tenra_core::{AccountId, AgreementId, AssetRef, DisputeId, Timestamp, Tokens};

/// The lifecycle status of an agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    /// Agreement is live; withdrawals and disputes are possible.
    Active,
    /// An open dispute suspends normal withdrawals.
    Disputed,
    /// Both sides settled (happy path or via dispute resolution). Terminal.
    Completed,
    /// Tenant cancelled within the cancellation window. Terminal.
    Cancelled,
}

impl AgreementStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disputed => "DISPUTED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rental agreement binding a landlord, a tenant, and a locked value
/// pool for a fixed duration.
///
/// # Invariant
///
/// `total_locked == rent + deposit + dispute_fee`, established at creation
/// and immutable thereafter. The registry validates the supplied value
/// against this sum before the record is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agreement {
    /// Monotonic identifier allocated by the ledger.
    pub id: AgreementId,
    /// The property owner.
    pub landlord: AccountId,
    /// The renting party (the creator of the agreement).
    pub tenant: AccountId,
    /// Reference to the property token in the external asset registry.
    pub asset: AssetRef,
    /// Monthly-rate rent amount locked for the landlord.
    pub rent: Tokens,
    /// Security deposit locked for the tenant.
    pub deposit: Tokens,
    /// Fee funding the juror reward pool if a dispute is raised.
    pub dispute_fee: Tokens,
    /// Exact sum of rent, deposit, and dispute fee.
    pub total_locked: Tokens,
    /// When the agreement was created.
    pub start_time: Timestamp,
    /// Rental duration in 30-day months.
    pub duration_months: u32,
    /// Current lifecycle status.
    pub status: AgreementStatus,
    /// Whether the landlord's rent share has been withdrawn.
    pub landlord_withdrawn: bool,
    /// Whether the tenant's deposit share has been withdrawn.
    pub tenant_withdrawn: bool,
    /// Back-reference to the dispute raised on this agreement, if any.
    pub dispute_id: Option<DisputeId>,
}

impl Agreement {
    /// Whether `account` is the landlord or the tenant.
    pub fn is_party(&self, account: &AccountId) -> bool {
        self.landlord == *account || self.tenant == *account
    }

    /// When the cancellation window closes.
    pub fn cancel_window_end(&self, window_secs: i64) -> Timestamp {
        self.start_time.plus_secs(window_secs)
    }

    /// When the rental period ends (30-day month convention).
    pub fn period_end(&self, month_secs: i64) -> Timestamp {
        self.start_time
            .plus_secs(month_secs * i64::from(self.duration_months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Agreement {
        Agreement {
            id: AgreementId(1),
            landlord: AccountId::new(),
            tenant: AccountId::new(),
            asset: AssetRef::new("prop-001"),
            rent: Tokens(100),
            deposit: Tokens(200),
            dispute_fee: Tokens(10),
            total_locked: Tokens(310),
            start_time: Timestamp::from_epoch_secs(1_000_000).unwrap(),
            duration_months: 12,
            status: AgreementStatus::Active,
            landlord_withdrawn: false,
            tenant_withdrawn: false,
            dispute_id: None,
        }
    }

    #[test]
    fn party_check_matches_both_sides() {
        let a = sample();
        assert!(a.is_party(&a.landlord));
        assert!(a.is_party(&a.tenant));
        assert!(!a.is_party(&AccountId::new()));
    }

    #[test]
    fn period_end_uses_month_convention() {
        let a = sample();
        let month = 30 * 24 * 60 * 60;
        assert_eq!(a.period_end(month).secs_since(a.start_time), 12 * month);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!AgreementStatus::Active.is_terminal());
        assert!(!AgreementStatus::Disputed.is_terminal());
        assert!(AgreementStatus::Completed.is_terminal());
        assert!(AgreementStatus::Cancelled.is_terminal());
    }
}
