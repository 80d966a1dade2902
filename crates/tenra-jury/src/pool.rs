//! # Juror Pool
//!
//! Staking, unstaking, and the bookkeeping the dispute coordinator
//! performs against juror records.
//!
//! ## Unstake Rules
//!
//! A juror may unstake only after the unstake delay has elapsed since the
//! current membership began, and only with zero open dispute
//! assignments. Removal from the active set is O(1) swap-with-last via
//! the ledger; the record itself is retained (deactivated) so reputation
//! counters survive re-staking.

use tracing::info;

use tenra_core::constants::{MAX_STAKE, MIN_STAKE, UNSTAKE_DELAY_SECS};
use tenra_core::{AccountId, DisputeId, EngineError, Timestamp, Tokens};
use tenra_ledger::{Juror, LedgerOfRecord};

/// Staking and membership management for the juror pool.
#[derive(Debug, Clone)]
pub struct JurorPool {
    min_stake: Tokens,
    max_stake: Tokens,
    unstake_delay_secs: i64,
}

impl Default for JurorPool {
    fn default() -> Self {
        Self {
            min_stake: MIN_STAKE,
            max_stake: MAX_STAKE,
            unstake_delay_secs: UNSTAKE_DELAY_SECS,
        }
    }
}

impl JurorPool {
    /// A pool with the protocol's default stake bounds and delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stake `amount` tokens, joining the active pool on first stake.
    ///
    /// Each individual stake must be within `[MIN_STAKE, MAX_STAKE]`, and
    /// the accumulated total may not exceed `MAX_STAKE`. A fully unstaked
    /// juror who returns starts a fresh membership: the unstake delay
    /// restarts and the stake accumulates from zero, but reputation
    /// counters are retained.
    pub fn stake(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        amount: Tokens,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        if amount < self.min_stake {
            return Err(EngineError::BelowMinimumStake {
                amount: amount.to_string(),
                minimum: self.min_stake.to_string(),
            });
        }
        if amount > self.max_stake {
            return Err(EngineError::AboveMaximumStake {
                amount: amount.to_string(),
                maximum: self.max_stake.to_string(),
            });
        }

        if ledger.has_juror(&caller) {
            let juror = ledger.juror(&caller)?;
            if juror.is_active {
                let total = juror.staked.checked_add(amount, "stake")?;
                if total > self.max_stake {
                    return Err(EngineError::AboveMaximumStake {
                        amount: total.to_string(),
                        maximum: self.max_stake.to_string(),
                    });
                }
                let juror = ledger.juror_mut(&caller)?;
                juror.staked = total;
                info!(juror = %caller, %total, "stake increased");
            } else {
                let juror = ledger.juror_mut(&caller)?;
                juror.staked = amount;
                juror.staked_at = now;
                juror.is_active = true;
                ledger.activate_juror(caller);
                info!(juror = %caller, stake = %amount, "juror re-activated");
            }
        } else {
            ledger.insert_juror(Juror::new(caller, amount, now));
            info!(juror = %caller, stake = %amount, "juror joined the pool");
        }
        Ok(())
    }

    /// Withdraw the full stake and leave the active pool.
    ///
    /// The returned amount is credited to the caller's pull-payment
    /// balance; draining it is a separate withdrawal step.
    pub fn unstake(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        now: Timestamp,
    ) -> Result<Tokens, EngineError> {
        if !ledger.has_juror(&caller) || !ledger.juror(&caller)?.is_active {
            return Err(EngineError::NotAJuror {
                caller: caller.to_string(),
            });
        }
        let juror = ledger.juror(&caller)?;
        let eligible_at = juror.staked_at.plus_secs(self.unstake_delay_secs);
        if now < eligible_at {
            return Err(EngineError::UnstakeDelayNotMet {
                caller: caller.to_string(),
                eligible_at: eligible_at.to_iso8601(),
            });
        }
        if juror.has_open_assignments() {
            return Err(EngineError::HasActiveDisputes {
                caller: caller.to_string(),
                open_disputes: juror.open_assignments.len(),
            });
        }

        let juror = ledger.juror_mut(&caller)?;
        let returned = juror.staked;
        juror.staked = Tokens::ZERO;
        juror.is_active = false;
        ledger.deactivate_juror(&caller);
        ledger.credit(caller, returned)?;

        info!(juror = %caller, %returned, "juror unstaked");
        Ok(returned)
    }

    // ── Coordinator bookkeeping ────────────────────────────────────────
    //
    // Juror records are owned by the pool; the dispute coordinator and
    // reward distributor mutate them only through these entry points.

    /// Record a jury assignment on each selected juror.
    pub fn record_assignment(
        &self,
        ledger: &mut LedgerOfRecord,
        jurors: &[AccountId],
        dispute_id: DisputeId,
    ) -> Result<(), EngineError> {
        for account in jurors {
            let juror = ledger.juror_mut(account)?;
            juror.disputes_assigned += 1;
            juror.open_assignments.push(dispute_id);
        }
        Ok(())
    }

    /// Record that a juror cast a vote.
    pub fn record_vote(
        &self,
        ledger: &mut LedgerOfRecord,
        account: &AccountId,
    ) -> Result<(), EngineError> {
        let juror = ledger.juror_mut(account)?;
        juror.disputes_voted += 1;
        Ok(())
    }

    /// Credit a majority-voting juror's reward and bump their counters.
    pub fn award(
        &self,
        ledger: &mut LedgerOfRecord,
        account: &AccountId,
        amount: Tokens,
    ) -> Result<(), EngineError> {
        let juror = ledger.juror_mut(account)?;
        juror.correct_votes += 1;
        juror.total_earned = juror.total_earned.checked_add(amount, "juror_reward")?;
        ledger.credit(*account, amount)?;
        Ok(())
    }

    /// Release a juror's open assignment at resolution, unblocking
    /// future unstaking.
    pub fn close_assignment(
        &self,
        ledger: &mut LedgerOfRecord,
        account: &AccountId,
        dispute_id: DisputeId,
    ) -> Result<(), EngineError> {
        ledger.juror_mut(account)?.close_assignment(dispute_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(secs).unwrap()
    }

    #[test]
    fn stake_bounds_are_enforced() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();
        assert!(matches!(
            pool.stake(&mut ledger, juror, Tokens(99), t(0)),
            Err(EngineError::BelowMinimumStake { .. })
        ));
        assert!(matches!(
            pool.stake(&mut ledger, juror, Tokens(10_001), t(0)),
            Err(EngineError::AboveMaximumStake { .. })
        ));
        pool.stake(&mut ledger, juror, Tokens(100), t(0)).unwrap();
        assert_eq!(ledger.active_juror_count(), 1);
    }

    #[test]
    fn repeat_stakes_accumulate_up_to_the_cap() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();
        pool.stake(&mut ledger, juror, Tokens(5_000), t(0)).unwrap();
        pool.stake(&mut ledger, juror, Tokens(4_000), t(0)).unwrap();
        assert_eq!(ledger.juror(&juror).unwrap().staked, Tokens(9_000));
        // Still one membership entry.
        assert_eq!(ledger.active_juror_count(), 1);
        assert!(matches!(
            pool.stake(&mut ledger, juror, Tokens(2_000), t(0)),
            Err(EngineError::AboveMaximumStake { .. })
        ));
    }

    #[test]
    fn unstake_requires_membership_delay_and_no_assignments() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();

        assert!(matches!(
            pool.unstake(&mut ledger, juror, t(0)),
            Err(EngineError::NotAJuror { .. })
        ));

        pool.stake(&mut ledger, juror, Tokens(500), t(0)).unwrap();
        assert!(matches!(
            pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS - 1)),
            Err(EngineError::UnstakeDelayNotMet { .. })
        ));

        pool.record_assignment(&mut ledger, &[juror], DisputeId(1))
            .unwrap();
        assert!(matches!(
            pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS)),
            Err(EngineError::HasActiveDisputes { .. })
        ));

        pool.close_assignment(&mut ledger, &juror, DisputeId(1))
            .unwrap();
        let returned = pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS)).unwrap();
        assert_eq!(returned, Tokens(500));
        assert_eq!(ledger.balance_of(&juror), Tokens(500));
        assert_eq!(ledger.active_juror_count(), 0);
        assert!(!ledger.juror(&juror).unwrap().is_active);
    }

    #[test]
    fn unstake_twice_fails_not_a_juror() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();
        pool.stake(&mut ledger, juror, Tokens(500), t(0)).unwrap();
        pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS)).unwrap();
        assert!(matches!(
            pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS)),
            Err(EngineError::NotAJuror { .. })
        ));
    }

    #[test]
    fn restaking_restarts_the_delay_but_keeps_history() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();
        pool.stake(&mut ledger, juror, Tokens(500), t(0)).unwrap();
        pool.record_assignment(&mut ledger, &[juror], DisputeId(1))
            .unwrap();
        pool.record_vote(&mut ledger, &juror).unwrap();
        pool.close_assignment(&mut ledger, &juror, DisputeId(1))
            .unwrap();
        pool.unstake(&mut ledger, juror, t(UNSTAKE_DELAY_SECS)).unwrap();

        let rejoin = t(UNSTAKE_DELAY_SECS + 100);
        pool.stake(&mut ledger, juror, Tokens(300), rejoin).unwrap();
        let record = ledger.juror(&juror).unwrap();
        assert_eq!(record.staked, Tokens(300));
        assert_eq!(record.staked_at, rejoin);
        assert_eq!(record.disputes_assigned, 1);
        assert_eq!(record.disputes_voted, 1);
        assert!(matches!(
            pool.unstake(&mut ledger, juror, rejoin.plus_secs(1)),
            Err(EngineError::UnstakeDelayNotMet { .. })
        ));
    }

    #[test]
    fn award_updates_reputation_and_credits_reward() {
        let pool = JurorPool::new();
        let mut ledger = LedgerOfRecord::new();
        let juror = AccountId::new();
        pool.stake(&mut ledger, juror, Tokens(500), t(0)).unwrap();
        pool.award(&mut ledger, &juror, Tokens(5)).unwrap();
        let record = ledger.juror(&juror).unwrap();
        assert_eq!(record.correct_votes, 1);
        assert_eq!(record.total_earned, Tokens(5));
        assert_eq!(ledger.balance_of(&juror), Tokens(5));
    }
}
