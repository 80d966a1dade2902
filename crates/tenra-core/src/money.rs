//! # Token Amounts — Checked Fund Arithmetic
//!
//! Defines `Tokens`, the engine's monetary unit. Amounts are integer token
//! units (smallest denomination); fractional values do not exist in the
//! engine.
//!
//! ## Security Invariant
//!
//! Fund accounting must never wrap. Every arithmetic path returns
//! `Result` and surfaces overflow as [`EngineError::AmountOverflow`] with
//! the accounting step that failed. Basis-point fee computation widens to
//! `u128` internally so the multiply cannot overflow.

use serde::{Deserialize, Serialize};

use crate::constants::BPS_DENOMINATOR;
use crate::error::EngineError;

/// An amount of tokens in smallest units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Tokens(pub u64);

impl Tokens {
    /// The zero amount.
    pub const ZERO: Tokens = Tokens(0);

    /// Construct from raw units.
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// The raw unit count.
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountOverflow`] naming `operation` if the
    /// sum exceeds `u64::MAX`.
    pub fn checked_add(self, other: Tokens, operation: &str) -> Result<Tokens, EngineError> {
        self.0
            .checked_add(other.0)
            .map(Tokens)
            .ok_or_else(|| EngineError::AmountOverflow {
                operation: operation.to_string(),
            })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountOverflow`] naming `operation` if
    /// `other` exceeds `self`. Underflow in fund accounting indicates a
    /// bookkeeping defect and must never be masked.
    pub fn checked_sub(self, other: Tokens, operation: &str) -> Result<Tokens, EngineError> {
        self.0
            .checked_sub(other.0)
            .map(Tokens)
            .ok_or_else(|| EngineError::AmountOverflow {
                operation: operation.to_string(),
            })
    }

    /// Integer division of this amount into `shares` equal parts.
    ///
    /// The remainder is **not** distributed; callers decide where it flows.
    /// Returns `Tokens::ZERO` when `shares` is zero.
    pub fn split(self, shares: u64) -> Tokens {
        if shares == 0 {
            Tokens::ZERO
        } else {
            Tokens(self.0 / shares)
        }
    }

    /// Compute a basis-point fee on this amount, rounding down.
    ///
    /// `10_000` basis points == 100 %. The intermediate product is widened
    /// to `u128`, so the computation cannot overflow for any `u64` amount.
    pub fn bps_fee(self, bps: u16) -> Tokens {
        let fee = (self.0 as u128) * (bps as u128) / (BPS_DENOMINATOR as u128);
        // fee <= self.0 because bps is capped at the denominator by the
        // fee-config guard, and self.0 fits in u64 regardless.
        Tokens(fee as u64)
    }
}

impl std::fmt::Display for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn checked_add_overflow_names_operation() {
        let err = Tokens(u64::MAX)
            .checked_add(Tokens(1), "lock_funds")
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::AmountOverflow {
                operation: "lock_funds".to_string()
            }
        );
    }

    #[test]
    fn checked_sub_underflow_is_an_error() {
        assert!(Tokens(5).checked_sub(Tokens(6), "refund").is_err());
        assert_eq!(
            Tokens(5).checked_sub(Tokens(5), "refund").unwrap(),
            Tokens::ZERO
        );
    }

    #[test]
    fn split_uses_integer_division() {
        assert_eq!(Tokens(10).split(2), Tokens(5));
        assert_eq!(Tokens(10).split(3), Tokens(3));
        assert_eq!(Tokens(10).split(0), Tokens::ZERO);
    }

    #[test]
    fn one_percent_fee() {
        assert_eq!(Tokens(100).bps_fee(100), Tokens(1));
        assert_eq!(Tokens(99).bps_fee(100), Tokens::ZERO);
        assert_eq!(Tokens(10_000).bps_fee(250), Tokens(250));
    }

    proptest! {
        #[test]
        fn fee_never_exceeds_amount(amount in any::<u64>(), bps in 0u16..=10_000) {
            let fee = Tokens(amount).bps_fee(bps);
            prop_assert!(fee.units() <= amount);
        }

        #[test]
        fn split_conserves_funds(amount in any::<u64>(), shares in 1u64..=100) {
            let per_share = Tokens(amount).split(shares);
            prop_assert!(per_share.units() * shares <= amount);
        }
    }
}
