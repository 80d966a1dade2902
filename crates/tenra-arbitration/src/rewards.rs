//! # Reward Distribution & Settlement
//!
//! Computes juror payouts and the final party settlement for a dispute
//! whose votes are final. Invoked only by the coordinator's resolution
//! path.
//!
//! ## Payout Rules
//!
//! - `correct_count` is the winning side's tally.
//! - `reward_per_juror = reward_pool / correct_count` (integer division);
//!   the remainder is not distributed among jurors.
//! - Every assigned juror has the dispute removed from their
//!   open-assignment list regardless of how (or whether) they voted.
//! - Tenant win: the tenant is credited
//!   `rent + deposit + (dispute_fee − rewards_paid)`, so the division
//!   remainder flows back to the tenant.
//! - Landlord win: the landlord is credited `rent + deposit` net of the
//!   platform fee, and the unpaid dispute-fee remainder stays retained by
//!   the system.
//!
//! The coordinator admits disputes only on untouched escrow, so the full
//! rent + deposit are still locked when settlement runs.

use std::collections::BTreeMap;

use tracing::info;

use tenra_core::{AccountId, DisputeId, EngineError, Timestamp, Tokens};
use tenra_escrow::PlatformConfig;
use tenra_jury::JurorPool;
use tenra_ledger::{LedgerOfRecord, Vote};

/// Summary of a dispute settlement, returned for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Whether the tenant won (`tenant_votes > landlord_votes`).
    pub tenant_wins: bool,
    /// The winning side's tally.
    pub correct_count: u8,
    /// Reward credited to each majority voter.
    pub reward_per_juror: Tokens,
    /// Total juror rewards paid (`reward_per_juror × correct_count`).
    pub rewards_paid: Tokens,
    /// Amount credited to the tenant.
    pub tenant_credit: Tokens,
    /// Amount credited to the landlord.
    pub landlord_credit: Tokens,
    /// Platform fee credited to the operator (landlord wins only).
    pub platform_fee: Tokens,
    /// Dispute-fee remainder retained by the system.
    pub retained: Tokens,
}

/// Distribute juror rewards and settle the parties of `dispute_id`.
///
/// Pure accounting: credits land on pull-payment balances, juror
/// reputation counters are updated through the pool, and every assigned
/// juror's open-assignment entry is closed. Every credit is validated
/// against its recipient's balance before anything is committed, so the
/// settlement either applies in full or leaves the ledger untouched.
/// The dispute and agreement status transitions are the coordinator's
/// responsibility.
pub fn distribute(
    ledger: &mut LedgerOfRecord,
    pool: &JurorPool,
    config: &PlatformConfig,
    dispute_id: DisputeId,
    _resolved_at: Timestamp,
) -> Result<Settlement, EngineError> {
    let dispute = ledger.dispute(dispute_id)?;
    let tenant_wins = dispute.tenant_leading();
    let correct_count = if tenant_wins {
        dispute.tenant_votes
    } else {
        dispute.landlord_votes
    };
    let winning_vote = if tenant_wins {
        Vote::TenantWins
    } else {
        Vote::LandlordWins
    };

    let assigned = dispute.assigned_jurors;
    let votes = dispute.votes;
    let reward_pool = dispute.reward_pool;
    let landlord = dispute.landlord;
    let tenant = dispute.tenant;
    let agreement_id = dispute.agreement_id;

    let agreement = ledger.agreement(agreement_id)?;
    let rent = agreement.rent;
    let deposit = agreement.deposit;

    let reward_per_juror = reward_pool.split(u64::from(correct_count));
    let rewards_paid = Tokens(reward_per_juror.units() * u64::from(correct_count));
    let fee_remainder = reward_pool.checked_sub(rewards_paid, "settle_dispute")?;

    let mut tenant_credit = Tokens::ZERO;
    let mut landlord_credit = Tokens::ZERO;
    let mut platform_fee = Tokens::ZERO;
    let mut retained = Tokens::ZERO;
    if tenant_wins {
        tenant_credit = rent
            .checked_add(deposit, "settle_dispute")?
            .checked_add(fee_remainder, "settle_dispute")?;
    } else {
        let gross = rent.checked_add(deposit, "settle_dispute")?;
        platform_fee = config.platform_fee(gross);
        landlord_credit = gross.checked_sub(platform_fee, "settle_dispute")?;
        retained = fee_remainder;
    }

    // Aggregate every planned credit per recipient and validate the
    // resulting balances (and each winner's earnings counter) before
    // committing anything, so an overflow rejects the whole settlement.
    let mut planned: BTreeMap<AccountId, Tokens> = BTreeMap::new();
    for (account, vote) in assigned.iter().zip(votes.iter()) {
        if *vote == Some(winning_vote) {
            let entry = planned.entry(*account).or_insert(Tokens::ZERO);
            *entry = entry.checked_add(reward_per_juror, "settle_dispute")?;
            ledger
                .juror(account)?
                .total_earned
                .checked_add(reward_per_juror, "juror_reward")?;
        }
    }
    if tenant_wins {
        let entry = planned.entry(tenant).or_insert(Tokens::ZERO);
        *entry = entry.checked_add(tenant_credit, "settle_dispute")?;
    } else {
        let entry = planned.entry(landlord).or_insert(Tokens::ZERO);
        *entry = entry.checked_add(landlord_credit, "settle_dispute")?;
        let entry = planned.entry(config.operator).or_insert(Tokens::ZERO);
        *entry = entry.checked_add(platform_fee, "settle_dispute")?;
    }
    for (account, total) in &planned {
        ledger
            .balance_of(account)
            .checked_add(*total, "settle_dispute")?;
    }

    for (account, vote) in assigned.iter().zip(votes.iter()) {
        if *vote == Some(winning_vote) {
            pool.award(ledger, account, reward_per_juror)?;
        }
        pool.close_assignment(ledger, account, dispute_id)?;
    }
    if tenant_wins {
        ledger.credit(tenant, tenant_credit)?;
    } else {
        ledger.credit(landlord, landlord_credit)?;
        ledger.credit(config.operator, platform_fee)?;
    }

    let settlement = Settlement {
        tenant_wins,
        correct_count,
        reward_per_juror,
        rewards_paid,
        tenant_credit,
        landlord_credit,
        platform_fee,
        retained,
    };
    info!(
        dispute = %dispute_id,
        tenant_wins,
        %rewards_paid,
        %tenant_credit,
        %landlord_credit,
        "dispute settled"
    );
    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // The integer-division payout rule, isolated from ledger plumbing.
    fn payout(pool: u64, correct: u8) -> (u64, u64) {
        let per = Tokens(pool).split(u64::from(correct));
        (per.units(), per.units() * u64::from(correct))
    }

    #[test]
    fn two_of_three_split_scenario_b() {
        let (per, paid) = payout(10, 2);
        assert_eq!(per, 5);
        assert_eq!(paid, 10);
    }

    #[test]
    fn remainder_is_withheld_from_jurors() {
        let (per, paid) = payout(10, 3);
        assert_eq!(per, 3);
        assert_eq!(paid, 9);
    }

    #[test]
    fn zero_correct_votes_pays_nothing() {
        let (per, paid) = payout(10, 0);
        assert_eq!(per, 0);
        assert_eq!(paid, 0);
    }

    proptest! {
        #[test]
        fn paid_rewards_never_exceed_the_pool(pool in 0u64..1_000_000, correct in 0u8..=3) {
            let (_, paid) = payout(pool, correct);
            prop_assert!(paid <= pool);
        }
    }
}
