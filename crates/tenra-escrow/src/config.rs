//! # Platform Configuration Guards
//!
//! Small composable guards used at the entry of state-changing
//! operations: an explicit operator check, an explicit paused-flag check,
//! and a capped basis-point platform fee. These replace inherited
//! access-control base types with plain functions the call sites name
//! directly.

use serde::{Deserialize, Serialize};

use tenra_core::constants::{DEFAULT_FEE_BPS, MAX_FEE_BPS};
use tenra_core::{AccountId, EngineError, Tokens};

/// Operator identity, platform fee, and paused flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// The platform operator, permitted to pause and to assist
    /// withdrawals on behalf of parties.
    pub operator: AccountId,
    /// Platform fee in basis points, capped at [`MAX_FEE_BPS`].
    fee_bps: u16,
    /// When set, all state-changing operations are rejected.
    paused: bool,
}

impl PlatformConfig {
    /// Configuration with the default 1 % fee.
    pub fn new(operator: AccountId) -> Self {
        Self {
            operator,
            fee_bps: DEFAULT_FEE_BPS,
            paused: false,
        }
    }

    /// Configuration with an explicit fee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameters`] if `fee_bps` exceeds
    /// the [`MAX_FEE_BPS`] cap.
    pub fn with_fee(operator: AccountId, fee_bps: u16) -> Result<Self, EngineError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(EngineError::InvalidParameters(format!(
                "fee of {fee_bps} bps exceeds the cap of {MAX_FEE_BPS} bps"
            )));
        }
        Ok(Self {
            operator,
            fee_bps,
            paused: false,
        })
    }

    /// The configured fee in basis points.
    pub fn fee_bps(&self) -> u16 {
        self.fee_bps
    }

    /// The platform fee on `amount`, rounding down.
    pub fn platform_fee(&self, amount: Tokens) -> Tokens {
        amount.bps_fee(self.fee_bps)
    }

    /// Whether `caller` is the platform operator.
    pub fn is_operator(&self, caller: &AccountId) -> bool {
        self.operator == *caller
    }

    /// Guard: reject when the platform is paused.
    pub fn require_unpaused(&self) -> Result<(), EngineError> {
        if self.paused {
            Err(EngineError::Paused)
        } else {
            Ok(())
        }
    }

    /// Pause or resume the platform. Operator only.
    pub fn set_paused(&mut self, caller: &AccountId, paused: bool) -> Result<(), EngineError> {
        if !self.is_operator(caller) {
            return Err(EngineError::Unauthorized {
                caller: caller.to_string(),
                operation: "set_paused".to_string(),
            });
        }
        self.paused = paused;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_cap_is_enforced() {
        let op = AccountId::new();
        assert!(PlatformConfig::with_fee(op, 1_000).is_ok());
        assert!(PlatformConfig::with_fee(op, 1_001).is_err());
    }

    #[test]
    fn default_fee_is_one_percent() {
        let config = PlatformConfig::new(AccountId::new());
        assert_eq!(config.platform_fee(Tokens(100)), Tokens(1));
    }

    #[test]
    fn only_operator_may_pause() {
        let op = AccountId::new();
        let mut config = PlatformConfig::new(op);
        assert!(config.set_paused(&AccountId::new(), true).is_err());
        assert!(config.require_unpaused().is_ok());

        config.set_paused(&op, true).unwrap();
        assert_eq!(config.require_unpaused(), Err(EngineError::Paused));

        config.set_paused(&op, false).unwrap();
        assert!(config.require_unpaused().is_ok());
    }
}
