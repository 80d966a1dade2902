//! # Juror Records
//!
//! The persisted form of a juror: stake, activity flag, reputation
//! counters, and the open-assignment list.
//!
//! A juror record is created on first stake and never deleted. A full
//! unstake zeroes the stake and flips `is_active`; the counters survive so
//! a returning juror keeps their history.

use serde::{Deserialize, Serialize};

use tenra_core::{AccountId, DisputeId, Timestamp, Tokens};

/// A staked participant eligible for random dispute assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Juror {
    /// The juror's account identity.
    pub account: AccountId,
    /// Total tokens currently staked.
    pub staked: Tokens,
    /// When the current membership began (first stake of this activation).
    pub staked_at: Timestamp,
    /// Whether the juror is in the active selection pool.
    pub is_active: bool,
    /// Lifetime count of dispute assignments.
    pub disputes_assigned: u64,
    /// Lifetime count of votes cast.
    pub disputes_voted: u64,
    /// Lifetime count of votes matching the dispute outcome.
    pub correct_votes: u64,
    /// Lifetime juror rewards earned.
    pub total_earned: Tokens,
    /// Disputes currently assigned and unresolved. Non-empty blocks
    /// unstaking.
    pub open_assignments: Vec<DisputeId>,
}

impl Juror {
    /// A fresh record for a first-time staker.
    pub fn new(account: AccountId, staked: Tokens, staked_at: Timestamp) -> Self {
        Self {
            account,
            staked,
            staked_at,
            is_active: true,
            disputes_assigned: 0,
            disputes_voted: 0,
            correct_votes: 0,
            total_earned: Tokens::ZERO,
            open_assignments: Vec::new(),
        }
    }

    /// Whether the juror currently has unresolved assignments.
    pub fn has_open_assignments(&self) -> bool {
        !self.open_assignments.is_empty()
    }

    /// Drop `dispute_id` from the open-assignment list if present.
    pub fn close_assignment(&mut self, dispute_id: DisputeId) {
        self.open_assignments.retain(|d| *d != dispute_id);
    }
}
