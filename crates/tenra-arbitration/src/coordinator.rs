//! # Dispute Coordinator
//!
//! Drives the dispute lifecycle state machine:
//!
//! ```text
//! None ──raise_dispute()──▶ Active ──resolution──▶ Resolved (terminal)
//! ```
//!
//! Resolution triggers automatically when the third vote lands, or by a
//! pull-based [`DisputeCoordinator::resolve_dispute`] call from anyone
//! once the voting deadline has passed. A resolved dispute is never
//! re-opened; there is no cancellation path.
//!
//! ## Tie-Break Policy
//!
//! `tenant_wins = tenant_votes > landlord_votes`. With a full 3-vote jury
//! a tie is impossible; on a zero-vote timeout the comparison yields
//! false, so the landlord wins by default. This is an explicit, tested
//! policy rather than an accident of ordering.

use tracing::info;

use tenra_core::constants::VOTING_PERIOD_SECS;
use tenra_core::{AccountId, AgreementId, DisputeId, EngineError, EvidenceRef, Timestamp};
use tenra_escrow::{require_escrow_untouched, PlatformConfig};
use tenra_jury::{select_jurors, EntropySource, JurorPool};
use tenra_ledger::{
    AgreementStatus, Dispute, DisputeOutcome, DisputeStatus, LedgerOfRecord, Vote,
};

use crate::evidence::record_evidence;
use crate::rewards::{distribute, Settlement};

/// Dispute lifecycle management: raise, evidence, voting, resolution.
pub struct DisputeCoordinator {
    config: PlatformConfig,
    pool: JurorPool,
    entropy: Box<dyn EntropySource + Send>,
    voting_period_secs: i64,
}

impl DisputeCoordinator {
    /// A coordinator sharing the platform configuration and juror pool
    /// rules with the rest of the engine.
    pub fn new(
        config: PlatformConfig,
        pool: JurorPool,
        entropy: Box<dyn EntropySource + Send>,
    ) -> Self {
        Self {
            config,
            pool,
            entropy,
            voting_period_secs: VOTING_PERIOD_SECS,
        }
    }

    /// Raise a dispute on an active agreement.
    ///
    /// The caller must be a party; the active juror pool must hold at
    /// least a full jury; the agreement must not already be under an
    /// open dispute; and the escrow must be untouched — settlement pays
    /// out the full rent + deposit, so any prior rent release or deposit
    /// return blocks a dispute. On success the jury is drawn, the
    /// initial evidence is logged, and the agreement flips to Disputed.
    pub fn raise_dispute(
        &mut self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        agreement_id: AgreementId,
        evidence_ref: EvidenceRef,
        now: Timestamp,
    ) -> Result<DisputeId, EngineError> {
        self.config.require_unpaused()?;

        let agreement = ledger.agreement(agreement_id)?;
        if !agreement.is_party(&caller) {
            return Err(EngineError::Unauthorized {
                caller: caller.to_string(),
                operation: "raise_dispute".to_string(),
            });
        }
        if agreement.status != AgreementStatus::Active {
            return Err(EngineError::WrongState {
                entity: "agreement".to_string(),
                id: agreement_id.to_string(),
                state: agreement.status.to_string(),
                operation: "raise_dispute".to_string(),
            });
        }
        if let Some(open) = ledger.open_dispute_for(agreement_id) {
            return Err(EngineError::DisputeAlreadyExists {
                agreement_id: agreement_id.to_string(),
                dispute_id: open.to_string(),
            });
        }
        require_escrow_untouched(agreement)?;

        let landlord = agreement.landlord;
        let tenant = agreement.tenant;
        let reward_pool = agreement.dispute_fee;

        let seed = self.entropy.draw_seed();
        let assigned_jurors = select_jurors(ledger, seed)?;

        let id = ledger.allocate_dispute_id();
        let initial_evidence = record_evidence(id, caller, evidence_ref, now)?;
        ledger.insert_dispute(Dispute {
            id,
            agreement_id,
            raised_by: caller,
            landlord,
            tenant,
            created_at: now,
            voting_deadline: now.plus_secs(self.voting_period_secs),
            status: DisputeStatus::Active,
            assigned_jurors,
            votes: [None, None, None],
            tenant_votes: 0,
            landlord_votes: 0,
            outcome: None,
            reward_pool,
            evidence: vec![initial_evidence],
        });
        ledger.set_open_dispute(agreement_id, id);
        self.pool.record_assignment(ledger, &assigned_jurors, id)?;

        let agreement = ledger.agreement_mut(agreement_id)?;
        agreement.status = AgreementStatus::Disputed;
        agreement.dispute_id = Some(id);

        info!(dispute = %id, agreement = %agreement_id, raised_by = %caller, "dispute raised");
        Ok(id)
    }

    /// Append evidence to an active dispute.
    ///
    /// Either party may submit; votes are untouched.
    pub fn submit_evidence(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        dispute_id: DisputeId,
        evidence_ref: EvidenceRef,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let dispute = ledger.dispute(dispute_id)?;
        require_active(dispute, "submit_evidence")?;
        if !dispute.is_party(&caller) {
            return Err(EngineError::Unauthorized {
                caller: caller.to_string(),
                operation: "submit_evidence".to_string(),
            });
        }

        let record = record_evidence(dispute_id, caller, evidence_ref, now)?;
        ledger.dispute_mut(dispute_id)?.evidence.push(record);
        info!(dispute = %dispute_id, submitted_by = %caller, "evidence submitted");
        Ok(())
    }

    /// Cast an assigned juror's vote.
    ///
    /// Resolution triggers immediately when the third vote lands.
    pub fn cast_vote(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        dispute_id: DisputeId,
        vote: Vote,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let dispute = ledger.dispute(dispute_id)?;
        require_active(dispute, "cast_vote")?;
        let slot = dispute
            .juror_index(&caller)
            .ok_or_else(|| EngineError::NotAssignedJuror {
                caller: caller.to_string(),
                dispute_id: dispute_id.to_string(),
            })?;
        if dispute.votes[slot].is_some() {
            return Err(EngineError::AlreadyVoted {
                caller: caller.to_string(),
                dispute_id: dispute_id.to_string(),
            });
        }
        if now > dispute.voting_deadline {
            return Err(EngineError::VotingEnded {
                dispute_id: dispute_id.to_string(),
                deadline: dispute.voting_deadline.to_iso8601(),
            });
        }

        let dispute = ledger.dispute_mut(dispute_id)?;
        dispute.votes[slot] = Some(vote);
        match vote {
            Vote::TenantWins => dispute.tenant_votes += 1,
            Vote::LandlordWins => dispute.landlord_votes += 1,
        }
        let quorum = dispute.all_voted();
        self.pool.record_vote(ledger, &caller)?;
        info!(dispute = %dispute_id, juror = %caller, ?vote, "vote cast");

        if quorum {
            self.finalize(ledger, dispute_id, now)?;
        }
        Ok(())
    }

    /// Resolve a dispute whose votes are final.
    ///
    /// Callable by anyone (no caller check by design): once the deadline
    /// has passed, any participant may pull the resolution through.
    /// Before the deadline it requires full participation, which
    /// [`cast_vote`](Self::cast_vote) already handles automatically.
    pub fn resolve_dispute(
        &self,
        ledger: &mut LedgerOfRecord,
        dispute_id: DisputeId,
        now: Timestamp,
    ) -> Result<Settlement, EngineError> {
        let dispute = ledger.dispute(dispute_id)?;
        require_active(dispute, "resolve_dispute")?;
        if !dispute.all_voted() && now <= dispute.voting_deadline {
            return Err(EngineError::TooEarly {
                dispute_id: dispute_id.to_string(),
                deadline: dispute.voting_deadline.to_iso8601(),
                votes_cast: dispute.votes_cast(),
                jury_size: dispute.votes.len(),
            });
        }
        self.finalize(ledger, dispute_id, now)
    }

    /// Settle rewards and close the dispute and its agreement.
    ///
    /// Preconditions (dispute Active, votes final) are the callers'
    /// responsibility.
    fn finalize(
        &self,
        ledger: &mut LedgerOfRecord,
        dispute_id: DisputeId,
        now: Timestamp,
    ) -> Result<Settlement, EngineError> {
        let settlement = distribute(ledger, &self.pool, &self.config, dispute_id, now)?;

        let dispute = ledger.dispute_mut(dispute_id)?;
        dispute.status = DisputeStatus::Resolved;
        dispute.outcome = Some(DisputeOutcome {
            tenant_wins: settlement.tenant_wins,
            resolved_at: now,
        });
        let agreement_id = dispute.agreement_id;

        ledger.clear_open_dispute(agreement_id);
        ledger.agreement_mut(agreement_id)?.status = AgreementStatus::Completed;

        info!(
            dispute = %dispute_id,
            agreement = %agreement_id,
            tenant_wins = settlement.tenant_wins,
            "dispute resolved"
        );
        Ok(settlement)
    }
}

fn require_active(dispute: &Dispute, operation: &str) -> Result<(), EngineError> {
    if dispute.status != DisputeStatus::Active {
        return Err(EngineError::WrongState {
            entity: "dispute".to_string(),
            id: dispute.id.to_string(),
            state: dispute.status.to_string(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
