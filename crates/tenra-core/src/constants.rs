//! # Protocol Constants
//!
//! Fixed parameters of the rental-arbitration protocol. Durations are in
//! seconds; amounts are in smallest token units.
//!
//! A rental "month" is fixed at 30 days. Period-elapsed checks multiply
//! the agreement's month count by this constant rather than doing calendar
//! arithmetic, so eligibility is deterministic across timezones and leap
//! handling.

use crate::money::Tokens;

/// Number of jurors assigned to every dispute.
pub const JURY_SIZE: usize = 3;

/// Minimum stake to join the juror pool.
pub const MIN_STAKE: Tokens = Tokens::new(100);

/// Maximum total stake a single juror may hold.
pub const MAX_STAKE: Tokens = Tokens::new(10_000);

/// Delay between a juror's first stake and unstake eligibility.
pub const UNSTAKE_DELAY_SECS: i64 = 7 * 24 * 60 * 60;

/// Window after agreement creation during which the tenant may cancel.
pub const CANCEL_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Voting period granted to a jury once a dispute is raised.
pub const VOTING_PERIOD_SECS: i64 = 3 * 24 * 60 * 60;

/// Seconds in one rental month (30-day convention).
pub const MONTH_SECS: i64 = 30 * 24 * 60 * 60;

/// Minimum rental duration in months.
pub const MIN_DURATION_MONTHS: u32 = 1;

/// Maximum rental duration in months.
pub const MAX_DURATION_MONTHS: u32 = 60;

/// Default platform fee in basis points (1 %).
pub const DEFAULT_FEE_BPS: u16 = 100;

/// Upper bound on the configurable platform fee (10 %).
pub const MAX_FEE_BPS: u16 = 1_000;

/// Basis-point denominator (100 % == 10_000 bps).
pub const BPS_DENOMINATOR: u16 = 10_000;
