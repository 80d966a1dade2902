//! # Engine Error Taxonomy
//!
//! Structured error hierarchy for the rental-arbitration engine. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every rejected operation surfaces a specific error kind; there are no
//!   silent no-ops and no retries inside the engine.
//! - State machine rejections carry the entity, its current state, and the
//!   attempted operation.
//! - Fund accounting errors fail loudly — overflow is never wrapped.
//! - Rejection happens before any mutation, so a returned error guarantees
//!   all records are exactly as they were before the call.

use thiserror::Error;

/// Errors arising from engine operations.
///
/// Each variant carries enough context for operators to diagnose the
/// failure without inspecting logs: identifiers, current states, and the
/// limits that were violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A parameter failed validation (zero amount, duration out of range, …).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The supplied value does not match the required total.
    #[error("invalid payment: supplied {supplied}, required {required}")]
    InvalidPayment {
        /// The value supplied with the call.
        supplied: String,
        /// The exact value the operation requires.
        required: String,
    },

    /// The caller is not permitted to perform this operation.
    #[error("unauthorized: {caller} may not perform {operation}")]
    Unauthorized {
        /// The caller identity.
        caller: String,
        /// The attempted operation.
        operation: String,
    },

    /// The referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind ("agreement", "dispute", "juror", …).
        entity: String,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The entity is not in a state that permits this operation.
    #[error("{entity} {id} in state {state} cannot perform {operation}")]
    WrongState {
        /// Entity kind.
        entity: String,
        /// The entity identifier.
        id: String,
        /// The current state name.
        state: String,
        /// The attempted operation.
        operation: String,
    },

    /// The party has already withdrawn its share.
    #[error("{party} has already withdrawn from agreement {agreement_id}")]
    AlreadyWithdrawn {
        /// Which side already withdrew ("landlord" or "tenant").
        party: String,
        /// The agreement identifier.
        agreement_id: String,
    },

    /// The cancellation window has closed.
    #[error("cancellation window closed for agreement {agreement_id} at {window_end}")]
    WindowExpired {
        /// The agreement identifier.
        agreement_id: String,
        /// When the window closed (ISO 8601).
        window_end: String,
    },

    /// The rental period has not elapsed yet.
    #[error("rental period of agreement {agreement_id} runs until {period_end}")]
    PeriodNotOver {
        /// The agreement identifier.
        agreement_id: String,
        /// When the period ends (ISO 8601).
        period_end: String,
    },

    /// Stake amount below the protocol minimum.
    #[error("stake of {amount} is below the minimum of {minimum}")]
    BelowMinimumStake {
        /// The offered stake amount.
        amount: String,
        /// The protocol minimum.
        minimum: String,
    },

    /// Stake amount (or resulting total) above the protocol maximum.
    #[error("stake of {amount} exceeds the maximum of {maximum}")]
    AboveMaximumStake {
        /// The offending amount.
        amount: String,
        /// The protocol maximum.
        maximum: String,
    },

    /// The caller has no active juror membership.
    #[error("{caller} is not an active juror")]
    NotAJuror {
        /// The caller identity.
        caller: String,
    },

    /// The unstake delay since first stake has not elapsed.
    #[error("juror {caller} may not unstake before {eligible_at}")]
    UnstakeDelayNotMet {
        /// The caller identity.
        caller: String,
        /// When unstaking becomes possible (ISO 8601).
        eligible_at: String,
    },

    /// The juror is assigned to open disputes and cannot unstake.
    #[error("juror {caller} has {open_disputes} open dispute assignment(s)")]
    HasActiveDisputes {
        /// The caller identity.
        caller: String,
        /// Number of unresolved assignments.
        open_disputes: usize,
    },

    /// Fewer active jurors than a jury requires.
    #[error("active juror pool has {available} members, {required} required")]
    NotEnoughJurors {
        /// Current active pool size.
        available: usize,
        /// Required jury size.
        required: usize,
    },

    /// The agreement already has an open dispute.
    #[error("agreement {agreement_id} already has open dispute {dispute_id}")]
    DisputeAlreadyExists {
        /// The agreement identifier.
        agreement_id: String,
        /// The open dispute identifier.
        dispute_id: String,
    },

    /// The asset is already bound to a live agreement.
    #[error("asset {asset} is already rented under agreement {agreement_id}")]
    AssetAlreadyRented {
        /// The asset reference.
        asset: String,
        /// The live agreement identifier.
        agreement_id: String,
    },

    /// The caller is not one of the jurors assigned to this dispute.
    #[error("{caller} is not assigned to dispute {dispute_id}")]
    NotAssignedJuror {
        /// The caller identity.
        caller: String,
        /// The dispute identifier.
        dispute_id: String,
    },

    /// The juror has already cast a vote on this dispute.
    #[error("juror {caller} already voted on dispute {dispute_id}")]
    AlreadyVoted {
        /// The caller identity.
        caller: String,
        /// The dispute identifier.
        dispute_id: String,
    },

    /// The voting deadline has passed.
    #[error("voting on dispute {dispute_id} ended at {deadline}")]
    VotingEnded {
        /// The dispute identifier.
        dispute_id: String,
        /// The deadline that passed (ISO 8601).
        deadline: String,
    },

    /// Resolution requested before the deadline with votes outstanding.
    #[error("dispute {dispute_id} cannot resolve before {deadline} with {votes_cast}/{jury_size} votes cast")]
    TooEarly {
        /// The dispute identifier.
        dispute_id: String,
        /// The voting deadline (ISO 8601).
        deadline: String,
        /// Votes cast so far.
        votes_cast: usize,
        /// Total jury size.
        jury_size: usize,
    },

    /// The asset registry reports a different owner than expected.
    #[error("asset {asset} is owned by {actual}, expected {expected}")]
    AssetOwnershipMismatch {
        /// The asset reference.
        asset: String,
        /// The owner the caller claimed.
        expected: String,
        /// The owner the registry reports.
        actual: String,
    },

    /// An external transfer against the asset registry failed.
    ///
    /// Fund settlement never raises this: value movement is pull-payment
    /// and cannot fail inside a state-mutating call.
    #[error("asset transfer failed for {asset}: {reason}")]
    TransferFailed {
        /// The asset reference.
        asset: String,
        /// Registry-provided failure reason.
        reason: String,
    },

    /// The caller has no withdrawable balance.
    #[error("{caller} has no withdrawable balance")]
    NothingToWithdraw {
        /// The caller identity.
        caller: String,
    },

    /// The platform is paused; state-changing operations are rejected.
    #[error("platform is paused")]
    Paused,

    /// Token arithmetic overflowed.
    #[error("token amount overflow during {operation}")]
    AmountOverflow {
        /// The accounting step that overflowed.
        operation: String,
    },

    /// Canonicalization failed during digest computation.
    #[error("canonicalization error: {0}")]
    Canonicalization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_state_message_carries_context() {
        let err = EngineError::WrongState {
            entity: "agreement".to_string(),
            id: "agreement:7".to_string(),
            state: "CANCELLED".to_string(),
            operation: "release_rent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("agreement:7"));
        assert!(msg.contains("CANCELLED"));
        assert!(msg.contains("release_rent"));
    }

    #[test]
    fn too_early_message_includes_vote_progress() {
        let err = EngineError::TooEarly {
            dispute_id: "dispute:1".to_string(),
            deadline: "2026-01-04T00:00:00Z".to_string(),
            votes_cast: 2,
            jury_size: 3,
        };
        assert!(err.to_string().contains("2/3"));
    }
}
