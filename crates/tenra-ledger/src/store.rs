//! # Ledger of Record
//!
//! [`LedgerOfRecord`] is the single arena holding every table the engine
//! reads or writes: agreements, jurors, disputes, withdrawable credit
//! balances, the two monotonic ID counters, and the reverse indexes.
//!
//! ## Ownership Discipline
//!
//! The store exposes plain keyed access and mechanical index maintenance,
//! nothing else. Each table has exactly one owning component that mutates
//! it (the registry for agreements, the pool for jurors and the active
//! set, the coordinator for disputes), and every public engine operation
//! takes `&mut LedgerOfRecord`, so the borrow checker serializes all
//! access — there is no interleaving to guard against.

use std::collections::BTreeMap;

use tenra_core::{AccountId, AgreementId, AssetRef, DisputeId, EngineError, Tokens};

use crate::agreement::Agreement;
use crate::dispute::Dispute;
use crate::juror::Juror;

/// Append-only keyed storage for the rental-arbitration engine.
#[derive(Debug, Default)]
pub struct LedgerOfRecord {
    agreements: BTreeMap<AgreementId, Agreement>,
    jurors: BTreeMap<AccountId, Juror>,
    disputes: BTreeMap<DisputeId, Dispute>,
    /// Pull-payment balances awaiting withdrawal.
    credits: BTreeMap<AccountId, Tokens>,
    /// Asset → agreement binding (latest agreement per asset).
    asset_index: BTreeMap<AssetRef, AgreementId>,
    /// Agreement → open dispute (at most one at a time).
    open_disputes: BTreeMap<AgreementId, DisputeId>,
    /// Active juror membership, swap-removed on deactivation.
    active_jurors: Vec<AccountId>,
    /// Position of each active juror inside `active_jurors`.
    active_index: BTreeMap<AccountId, usize>,
    next_agreement_id: u64,
    next_dispute_id: u64,
}

impl LedgerOfRecord {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // ── ID counters ────────────────────────────────────────────────────

    /// Allocate the next agreement identifier.
    pub fn allocate_agreement_id(&mut self) -> AgreementId {
        self.next_agreement_id += 1;
        AgreementId(self.next_agreement_id)
    }

    /// Allocate the next dispute identifier.
    pub fn allocate_dispute_id(&mut self) -> DisputeId {
        self.next_dispute_id += 1;
        DisputeId(self.next_dispute_id)
    }

    // ── Agreements ─────────────────────────────────────────────────────

    /// Persist a new agreement record.
    pub fn insert_agreement(&mut self, agreement: Agreement) {
        self.agreements.insert(agreement.id, agreement);
    }

    /// Look up an agreement.
    pub fn agreement(&self, id: AgreementId) -> Result<&Agreement, EngineError> {
        self.agreements.get(&id).ok_or_else(|| EngineError::NotFound {
            entity: "agreement".to_string(),
            id: id.to_string(),
        })
    }

    /// Look up an agreement for mutation.
    pub fn agreement_mut(&mut self, id: AgreementId) -> Result<&mut Agreement, EngineError> {
        self.agreements
            .get_mut(&id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "agreement".to_string(),
                id: id.to_string(),
            })
    }

    // ── Jurors ─────────────────────────────────────────────────────────

    /// Persist a new juror record and add it to the active set.
    pub fn insert_juror(&mut self, juror: Juror) {
        let account = juror.account;
        self.jurors.insert(account, juror);
        self.activate_juror(account);
    }

    /// Look up a juror record (active or not).
    pub fn juror(&self, account: &AccountId) -> Result<&Juror, EngineError> {
        self.jurors
            .get(account)
            .ok_or_else(|| EngineError::NotFound {
                entity: "juror".to_string(),
                id: account.to_string(),
            })
    }

    /// Look up a juror record for mutation.
    pub fn juror_mut(&mut self, account: &AccountId) -> Result<&mut Juror, EngineError> {
        self.jurors
            .get_mut(account)
            .ok_or_else(|| EngineError::NotFound {
                entity: "juror".to_string(),
                id: account.to_string(),
            })
    }

    /// Whether a juror record exists for `account`.
    pub fn has_juror(&self, account: &AccountId) -> bool {
        self.jurors.contains_key(account)
    }

    // ── Active juror set ───────────────────────────────────────────────

    /// Add `account` to the active set (no-op if already present).
    pub fn activate_juror(&mut self, account: AccountId) {
        if self.active_index.contains_key(&account) {
            return;
        }
        self.active_index.insert(account, self.active_jurors.len());
        self.active_jurors.push(account);
    }

    /// Remove `account` from the active set via swap-with-last, keeping
    /// removal O(1).
    pub fn deactivate_juror(&mut self, account: &AccountId) {
        let Some(pos) = self.active_index.remove(account) else {
            return;
        };
        self.active_jurors.swap_remove(pos);
        if pos < self.active_jurors.len() {
            let moved = self.active_jurors[pos];
            self.active_index.insert(moved, pos);
        }
    }

    /// The current active membership, in storage order.
    pub fn active_jurors(&self) -> &[AccountId] {
        &self.active_jurors
    }

    /// Number of active jurors.
    pub fn active_juror_count(&self) -> usize {
        self.active_jurors.len()
    }

    // ── Disputes ───────────────────────────────────────────────────────

    /// Persist a new dispute record.
    pub fn insert_dispute(&mut self, dispute: Dispute) {
        self.disputes.insert(dispute.id, dispute);
    }

    /// Look up a dispute.
    pub fn dispute(&self, id: DisputeId) -> Result<&Dispute, EngineError> {
        self.disputes.get(&id).ok_or_else(|| EngineError::NotFound {
            entity: "dispute".to_string(),
            id: id.to_string(),
        })
    }

    /// Look up a dispute for mutation.
    pub fn dispute_mut(&mut self, id: DisputeId) -> Result<&mut Dispute, EngineError> {
        self.disputes
            .get_mut(&id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "dispute".to_string(),
                id: id.to_string(),
            })
    }

    // ── Reverse indexes ────────────────────────────────────────────────

    /// Bind `asset` to `agreement_id`, replacing any previous binding.
    pub fn bind_asset(&mut self, asset: AssetRef, agreement_id: AgreementId) {
        self.asset_index.insert(asset, agreement_id);
    }

    /// The agreement currently bound to `asset`, if any.
    pub fn agreement_for_asset(&self, asset: &AssetRef) -> Option<AgreementId> {
        self.asset_index.get(asset).copied()
    }

    /// Record the open dispute for an agreement.
    pub fn set_open_dispute(&mut self, agreement_id: AgreementId, dispute_id: DisputeId) {
        self.open_disputes.insert(agreement_id, dispute_id);
    }

    /// The open dispute on `agreement_id`, if any.
    pub fn open_dispute_for(&self, agreement_id: AgreementId) -> Option<DisputeId> {
        self.open_disputes.get(&agreement_id).copied()
    }

    /// Clear the open-dispute marker at resolution.
    pub fn clear_open_dispute(&mut self, agreement_id: AgreementId) {
        self.open_disputes.remove(&agreement_id);
    }

    // ── Pull-payment credits ───────────────────────────────────────────

    /// Credit `account` with `amount`, accumulating onto any existing
    /// balance.
    pub fn credit(&mut self, account: AccountId, amount: Tokens) -> Result<(), EngineError> {
        if amount.is_zero() {
            return Ok(());
        }
        let current = self.credits.get(&account).copied().unwrap_or(Tokens::ZERO);
        let updated = current.checked_add(amount, "credit_balance")?;
        self.credits.insert(account, updated);
        Ok(())
    }

    /// The withdrawable balance of `account`.
    pub fn balance_of(&self, account: &AccountId) -> Tokens {
        self.credits.get(account).copied().unwrap_or(Tokens::ZERO)
    }

    /// Drain and return the withdrawable balance of `account`.
    pub fn take_credit(&mut self, account: &AccountId) -> Tokens {
        self.credits.remove(account).unwrap_or(Tokens::ZERO)
    }
}
