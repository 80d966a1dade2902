//! # Agreement Registry
//!
//! Creates rental agreements, holds their escrow totals, and drives the
//! happy-path lifecycle: rent release, deposit return, cancellation, and
//! completion. Dispute-driven settlement lives in `tenra-arbitration`;
//! this module only flips the agreement to `Disputed`-adjacent states via
//! the coordinator's calls against the ledger.
//!
//! ## Fund Discipline
//!
//! All value movement is pull-payment: operations credit the recipient's
//! balance in the ledger and recipients drain it with
//! [`AgreementRegistry::withdraw_balance`]. The only external call is the
//! asset-custody transfer, which is performed *before* any ledger write so
//! a registry failure cannot corrupt committed accounting.

use tracing::info;

use tenra_core::constants::{CANCEL_WINDOW_SECS, MAX_DURATION_MONTHS, MIN_DURATION_MONTHS, MONTH_SECS};
use tenra_core::{AccountId, AgreementId, AssetRef, EngineError, Timestamp, Tokens};
use tenra_ledger::{Agreement, AgreementStatus, LedgerOfRecord};

use crate::asset::AssetRegistry;
use crate::config::PlatformConfig;

/// Create/settle/cancel rental agreements and account for their funds.
///
/// Stateless apart from the platform configuration; all records live in
/// the [`LedgerOfRecord`] passed to every call.
#[derive(Debug, Clone)]
pub struct AgreementRegistry {
    config: PlatformConfig,
}

impl AgreementRegistry {
    /// A registry with the given platform configuration.
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }

    /// The platform configuration.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Mutable access for pause/resume.
    pub fn config_mut(&mut self) -> &mut PlatformConfig {
        &mut self.config
    }

    /// Establish a new rental agreement.
    ///
    /// The caller becomes the tenant. Requires all three amounts to be
    /// positive, the duration within protocol bounds, the supplied value
    /// to equal `rent + deposit + dispute_fee` exactly, and the asset to
    /// be owned by `landlord` and not already under a live agreement.
    /// Custody of the asset moves landlord → tenant before the record is
    /// persisted.
    #[allow(clippy::too_many_arguments)]
    pub fn create_agreement(
        &self,
        ledger: &mut LedgerOfRecord,
        assets: &mut dyn AssetRegistry,
        caller: AccountId,
        landlord: AccountId,
        asset: AssetRef,
        rent: Tokens,
        deposit: Tokens,
        dispute_fee: Tokens,
        duration_months: u32,
        supplied_value: Tokens,
        now: Timestamp,
    ) -> Result<AgreementId, EngineError> {
        self.config.require_unpaused()?;

        if caller == landlord {
            return Err(EngineError::InvalidParameters(
                "landlord cannot rent from themselves".to_string(),
            ));
        }
        if rent.is_zero() || deposit.is_zero() || dispute_fee.is_zero() {
            return Err(EngineError::InvalidParameters(
                "rent, deposit, and dispute fee must all be positive".to_string(),
            ));
        }
        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&duration_months) {
            return Err(EngineError::InvalidParameters(format!(
                "duration of {duration_months} months outside [{MIN_DURATION_MONTHS}, {MAX_DURATION_MONTHS}]"
            )));
        }

        let total_locked = rent
            .checked_add(deposit, "lock_funds")?
            .checked_add(dispute_fee, "lock_funds")?;
        if supplied_value != total_locked {
            return Err(EngineError::InvalidPayment {
                supplied: supplied_value.to_string(),
                required: total_locked.to_string(),
            });
        }

        let owner = assets.owner_of(&asset)?;
        if owner != landlord {
            return Err(EngineError::AssetOwnershipMismatch {
                asset: asset.to_string(),
                expected: landlord.to_string(),
                actual: owner.to_string(),
            });
        }

        if let Some(existing_id) = ledger.agreement_for_asset(&asset) {
            let existing = ledger.agreement(existing_id)?;
            if !existing.status.is_terminal() {
                return Err(EngineError::AssetAlreadyRented {
                    asset: asset.to_string(),
                    agreement_id: existing_id.to_string(),
                });
            }
        }

        // External custody transfer before any ledger write.
        assets.transfer(&asset, &landlord, &caller)?;

        let id = ledger.allocate_agreement_id();
        ledger.insert_agreement(Agreement {
            id,
            landlord,
            tenant: caller,
            asset: asset.clone(),
            rent,
            deposit,
            dispute_fee,
            total_locked,
            start_time: now,
            duration_months,
            status: AgreementStatus::Active,
            landlord_withdrawn: false,
            tenant_withdrawn: false,
            dispute_id: None,
        });
        ledger.bind_asset(asset, id);

        info!(agreement = %id, %landlord, tenant = %caller, %total_locked, "agreement created");
        Ok(id)
    }

    /// Release the rent share to the landlord, net of the platform fee.
    ///
    /// Callable by either party or the operator, once, while Active.
    pub fn release_rent_to_landlord(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        id: AgreementId,
        _now: Timestamp,
    ) -> Result<(), EngineError> {
        self.config.require_unpaused()?;

        let agreement = ledger.agreement(id)?;
        self.require_party_or_operator(agreement.landlord, agreement.tenant, &caller, "release_rent")?;
        require_active(agreement, "release_rent")?;
        if agreement.landlord_withdrawn {
            return Err(EngineError::AlreadyWithdrawn {
                party: "landlord".to_string(),
                agreement_id: id.to_string(),
            });
        }

        let landlord = agreement.landlord;
        let rent = agreement.rent;
        let fee = self.config.platform_fee(rent);
        let net = rent.checked_sub(fee, "release_rent")?;

        // Validate both credit additions before committing either.
        ledger.balance_of(&landlord).checked_add(net, "release_rent")?;
        ledger
            .balance_of(&self.config.operator)
            .checked_add(fee, "release_rent")?;

        ledger.credit(landlord, net)?;
        ledger.credit(self.config.operator, fee)?;
        let agreement = ledger.agreement_mut(id)?;
        agreement.landlord_withdrawn = true;
        complete_if_fully_withdrawn(agreement);

        info!(agreement = %id, %landlord, %net, %fee, "rent released to landlord");
        Ok(())
    }

    /// Return the deposit plus dispute fee to the tenant.
    ///
    /// Callable by either party or the operator, once, while Active. A
    /// tenant caller must wait out the rental period; the landlord (or
    /// operator) may return early.
    pub fn return_deposit_to_tenant(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
        id: AgreementId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        self.config.require_unpaused()?;

        let agreement = ledger.agreement(id)?;
        self.require_party_or_operator(agreement.landlord, agreement.tenant, &caller, "return_deposit")?;
        require_active(agreement, "return_deposit")?;
        if agreement.tenant_withdrawn {
            return Err(EngineError::AlreadyWithdrawn {
                party: "tenant".to_string(),
                agreement_id: id.to_string(),
            });
        }
        if caller == agreement.tenant {
            let period_end = agreement.period_end(MONTH_SECS);
            if now < period_end {
                return Err(EngineError::PeriodNotOver {
                    agreement_id: id.to_string(),
                    period_end: period_end.to_iso8601(),
                });
            }
        }

        let tenant = agreement.tenant;
        let refund = agreement
            .deposit
            .checked_add(agreement.dispute_fee, "return_deposit")?;

        ledger.credit(tenant, refund)?;
        let agreement = ledger.agreement_mut(id)?;
        agreement.tenant_withdrawn = true;
        complete_if_fully_withdrawn(agreement);

        info!(agreement = %id, %tenant, %refund, "deposit returned to tenant");
        Ok(())
    }

    /// Cancel the agreement within the cancellation window.
    ///
    /// Tenant only, Active only, and the escrow must be untouched: the
    /// refund covers the full rent + deposit, so any prior rent release
    /// or deposit return blocks cancellation. The asset returns to the
    /// landlord, the tenant is refunded rent + deposit, and the landlord
    /// keeps the dispute fee as compensation. One-directional terminal
    /// transition.
    pub fn cancel_agreement(
        &self,
        ledger: &mut LedgerOfRecord,
        assets: &mut dyn AssetRegistry,
        caller: AccountId,
        id: AgreementId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        self.config.require_unpaused()?;

        let agreement = ledger.agreement(id)?;
        if caller != agreement.tenant {
            return Err(EngineError::Unauthorized {
                caller: caller.to_string(),
                operation: "cancel_agreement".to_string(),
            });
        }
        require_active(agreement, "cancel_agreement")?;
        require_escrow_untouched(agreement)?;
        let window_end = agreement.cancel_window_end(CANCEL_WINDOW_SECS);
        if now > window_end {
            return Err(EngineError::WindowExpired {
                agreement_id: id.to_string(),
                window_end: window_end.to_iso8601(),
            });
        }

        let landlord = agreement.landlord;
        let tenant = agreement.tenant;
        let asset = agreement.asset.clone();
        let refund = agreement.rent.checked_add(agreement.deposit, "cancel_refund")?;
        let compensation = agreement.dispute_fee;

        // Validate both credit additions before the external transfer.
        ledger.balance_of(&tenant).checked_add(refund, "cancel_refund")?;
        ledger
            .balance_of(&landlord)
            .checked_add(compensation, "cancel_refund")?;

        // External custody transfer before any ledger write.
        assets.transfer(&asset, &tenant, &landlord)?;

        ledger.credit(tenant, refund)?;
        ledger.credit(landlord, compensation)?;
        let agreement = ledger.agreement_mut(id)?;
        agreement.status = AgreementStatus::Cancelled;

        info!(agreement = %id, %tenant, %refund, %compensation, "agreement cancelled");
        Ok(())
    }

    /// Drain the caller's accumulated pull-payment balance.
    pub fn withdraw_balance(
        &self,
        ledger: &mut LedgerOfRecord,
        caller: AccountId,
    ) -> Result<Tokens, EngineError> {
        let balance = ledger.take_credit(&caller);
        if balance.is_zero() {
            return Err(EngineError::NothingToWithdraw {
                caller: caller.to_string(),
            });
        }
        info!(account = %caller, amount = %balance, "balance withdrawn");
        Ok(balance)
    }

    /// Look up the agreement bound to `asset`, if any.
    pub fn agreement_by_asset<'l>(
        &self,
        ledger: &'l LedgerOfRecord,
        asset: &AssetRef,
    ) -> Result<&'l Agreement, EngineError> {
        let id = ledger
            .agreement_for_asset(asset)
            .ok_or_else(|| EngineError::NotFound {
                entity: "agreement".to_string(),
                id: asset.to_string(),
            })?;
        ledger.agreement(id)
    }

    fn require_party_or_operator(
        &self,
        landlord: AccountId,
        tenant: AccountId,
        caller: &AccountId,
        operation: &str,
    ) -> Result<(), EngineError> {
        if *caller == landlord || *caller == tenant || self.config.is_operator(caller) {
            Ok(())
        } else {
            Err(EngineError::Unauthorized {
                caller: caller.to_string(),
                operation: operation.to_string(),
            })
        }
    }
}

/// Reject operations that pay out the full rent + deposit once either
/// share has already left escrow. Without this guard a release followed
/// by a cancellation (or a dispute) would credit more than was locked.
pub fn require_escrow_untouched(agreement: &Agreement) -> Result<(), EngineError> {
    if agreement.landlord_withdrawn || agreement.tenant_withdrawn {
        let party = if agreement.landlord_withdrawn {
            "landlord"
        } else {
            "tenant"
        };
        return Err(EngineError::AlreadyWithdrawn {
            party: party.to_string(),
            agreement_id: agreement.id.to_string(),
        });
    }
    Ok(())
}

fn require_active(agreement: &Agreement, operation: &str) -> Result<(), EngineError> {
    if agreement.status != AgreementStatus::Active {
        return Err(EngineError::WrongState {
            entity: "agreement".to_string(),
            id: agreement.id.to_string(),
            state: agreement.status.to_string(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

fn complete_if_fully_withdrawn(agreement: &mut Agreement) {
    if agreement.landlord_withdrawn && agreement.tenant_withdrawn {
        agreement.status = AgreementStatus::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::InMemoryAssetRegistry;
    use tenra_core::constants::{CANCEL_WINDOW_SECS, MONTH_SECS};

    struct Fixture {
        ledger: LedgerOfRecord,
        assets: InMemoryAssetRegistry,
        registry: AgreementRegistry,
        landlord: AccountId,
        tenant: AccountId,
        asset: AssetRef,
        t0: Timestamp,
    }

    fn fixture() -> Fixture {
        let landlord = AccountId::new();
        let tenant = AccountId::new();
        let asset = AssetRef::new("prop-001");
        let mut assets = InMemoryAssetRegistry::new();
        assets.register(asset.clone(), landlord);
        Fixture {
            ledger: LedgerOfRecord::new(),
            assets,
            registry: AgreementRegistry::new(PlatformConfig::new(AccountId::new())),
            landlord,
            tenant,
            asset,
            t0: Timestamp::from_epoch_secs(1_000_000).unwrap(),
        }
    }

    fn create(fx: &mut Fixture) -> AgreementId {
        fx.registry
            .create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                fx.tenant,
                fx.landlord,
                fx.asset.clone(),
                Tokens(100),
                Tokens(200),
                Tokens(10),
                12,
                Tokens(310),
                fx.t0,
            )
            .unwrap()
    }

    #[test]
    fn create_locks_exact_total_and_moves_custody() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let agreement = fx.ledger.agreement(id).unwrap();
        assert_eq!(agreement.total_locked, Tokens(310));
        assert_eq!(agreement.status, AgreementStatus::Active);
        assert_eq!(fx.assets.owner_of(&fx.asset).unwrap(), fx.tenant);
        assert_eq!(fx.ledger.agreement_for_asset(&fx.asset), Some(id));
    }

    #[test]
    fn create_rejects_wrong_value() {
        let mut fx = fixture();
        let err = fx
            .registry
            .create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                fx.tenant,
                fx.landlord,
                fx.asset.clone(),
                Tokens(100),
                Tokens(200),
                Tokens(10),
                12,
                Tokens(300),
                fx.t0,
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPayment { .. }));
        // Nothing was persisted and custody did not move.
        assert_eq!(fx.assets.owner_of(&fx.asset).unwrap(), fx.landlord);
        assert_eq!(fx.ledger.agreement_for_asset(&fx.asset), None);
    }

    #[test]
    fn create_rejects_self_rental_zero_amounts_and_bad_duration() {
        let mut fx = fixture();
        let base = |fx: &mut Fixture, caller, rent, duration| {
            fx.registry.create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                caller,
                fx.landlord,
                fx.asset.clone(),
                rent,
                Tokens(200),
                Tokens(10),
                duration,
                Tokens(210).checked_add(rent, "test").unwrap(),
                fx.t0,
            )
        };
        let landlord = fx.landlord;
        let tenant = fx.tenant;
        assert!(base(&mut fx, landlord, Tokens(100), 12).is_err());
        assert!(base(&mut fx, tenant, Tokens::ZERO, 12).is_err());
        assert!(base(&mut fx, tenant, Tokens(100), 0).is_err());
        assert!(base(&mut fx, tenant, Tokens(100), 61).is_err());
    }

    #[test]
    fn create_rejects_foreign_asset() {
        let mut fx = fixture();
        let stranger = AccountId::new();
        let err = fx
            .registry
            .create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                fx.tenant,
                stranger,
                fx.asset.clone(),
                Tokens(100),
                Tokens(200),
                Tokens(10),
                12,
                Tokens(310),
                fx.t0,
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::AssetOwnershipMismatch { .. }));
    }

    #[test]
    fn create_rejects_already_rented_asset() {
        let mut fx = fixture();
        create(&mut fx);
        // The tenant now owns custody; re-register ownership back to the
        // landlord to isolate the index check.
        fx.assets.register(fx.asset.clone(), fx.landlord);
        let other_tenant = AccountId::new();
        let err = fx
            .registry
            .create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                other_tenant,
                fx.landlord,
                fx.asset.clone(),
                Tokens(100),
                Tokens(200),
                Tokens(10),
                12,
                Tokens(310),
                fx.t0,
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::AssetAlreadyRented { .. }));
    }

    #[test]
    fn rent_release_credits_landlord_net_of_fee() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        // Scenario A: 1 % of 100 goes to the operator.
        assert_eq!(fx.ledger.balance_of(&fx.landlord), Tokens(99));
        assert_eq!(
            fx.ledger.balance_of(&fx.registry.config().operator),
            Tokens(1)
        );
    }

    #[test]
    fn second_rent_release_fails_already_withdrawn() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .release_rent_to_landlord(&mut fx.ledger, fx.tenant, id, fx.t0)
            .unwrap();
        let err = fx
            .registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyWithdrawn { .. }));
    }

    #[test]
    fn tenant_deposit_return_waits_for_period() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let early = fx.t0.plus_secs(MONTH_SECS);
        let err = fx
            .registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.tenant, id, early)
            .unwrap_err();
        assert!(matches!(err, EngineError::PeriodNotOver { .. }));

        let after = fx.t0.plus_secs(12 * MONTH_SECS);
        fx.registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.tenant, id, after)
            .unwrap();
        // Scenario A: deposit 200 + dispute fee 10.
        assert_eq!(fx.ledger.balance_of(&fx.tenant), Tokens(210));
    }

    #[test]
    fn landlord_may_return_deposit_early() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        assert_eq!(fx.ledger.balance_of(&fx.tenant), Tokens(210));
        let err = fx
            .registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyWithdrawn { .. }));
    }

    #[test]
    fn both_withdrawals_complete_the_agreement() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        fx.registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        assert_eq!(
            fx.ledger.agreement(id).unwrap().status,
            AgreementStatus::Completed
        );
    }

    #[test]
    fn stranger_cannot_release_or_return() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let stranger = AccountId::new();
        assert!(matches!(
            fx.registry
                .release_rent_to_landlord(&mut fx.ledger, stranger, id, fx.t0),
            Err(EngineError::Unauthorized { .. })
        ));
        assert!(matches!(
            fx.registry
                .return_deposit_to_tenant(&mut fx.ledger, stranger, id, fx.t0),
            Err(EngineError::Unauthorized { .. })
        ));
    }

    #[test]
    fn cancel_within_window_settles_scenario_c() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let within = fx.t0.plus_secs(CANCEL_WINDOW_SECS - 1);
        fx.registry
            .cancel_agreement(&mut fx.ledger, &mut fx.assets, fx.tenant, id, within)
            .unwrap();
        assert_eq!(fx.ledger.balance_of(&fx.tenant), Tokens(300));
        assert_eq!(fx.ledger.balance_of(&fx.landlord), Tokens(10));
        assert_eq!(fx.assets.owner_of(&fx.asset).unwrap(), fx.landlord);
        let agreement = fx.ledger.agreement(id).unwrap();
        assert_eq!(agreement.status, AgreementStatus::Cancelled);

        // Cancelled is terminal: no further operations succeed.
        assert!(matches!(
            fx.registry
                .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, within),
            Err(EngineError::WrongState { .. })
        ));
    }

    #[test]
    fn cancel_after_rent_release_is_rejected() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        let err = fx
            .registry
            .cancel_agreement(&mut fx.ledger, &mut fx.assets, fx.tenant, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyWithdrawn { .. }));

        // Only the rent share ever left escrow; 99 + 1 of the 310 locked.
        let operator = fx.registry.config().operator;
        let credited = fx
            .ledger
            .balance_of(&fx.landlord)
            .checked_add(fx.ledger.balance_of(&fx.tenant), "test")
            .unwrap()
            .checked_add(fx.ledger.balance_of(&operator), "test")
            .unwrap();
        assert_eq!(credited, Tokens(100));
        assert!(credited <= fx.ledger.agreement(id).unwrap().total_locked);
        assert_eq!(
            fx.ledger.agreement(id).unwrap().status,
            AgreementStatus::Active
        );
    }

    #[test]
    fn cancel_after_deposit_return_is_rejected() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .return_deposit_to_tenant(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        let err = fx
            .registry
            .cancel_agreement(&mut fx.ledger, &mut fx.assets, fx.tenant, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyWithdrawn { .. }));
        // The tenant holds exactly the deposit + dispute fee, nothing more.
        assert_eq!(fx.ledger.balance_of(&fx.tenant), Tokens(210));
    }

    #[test]
    fn rent_release_rejects_whole_when_a_credit_would_overflow() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let operator = fx.registry.config().operator;
        fx.ledger.credit(operator, Tokens(u64::MAX)).unwrap();

        let err = fx
            .registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AmountOverflow { .. }));
        // Neither credit landed and the withdrawal flag is untouched.
        assert_eq!(fx.ledger.balance_of(&fx.landlord), Tokens::ZERO);
        assert!(!fx.ledger.agreement(id).unwrap().landlord_withdrawn);
    }

    #[test]
    fn cancel_after_window_fails() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let late = fx.t0.plus_secs(CANCEL_WINDOW_SECS + 1);
        let err = fx
            .registry
            .cancel_agreement(&mut fx.ledger, &mut fx.assets, fx.tenant, id, late)
            .unwrap_err();
        assert!(matches!(err, EngineError::WindowExpired { .. }));
    }

    #[test]
    fn only_tenant_may_cancel() {
        let mut fx = fixture();
        let id = create(&mut fx);
        let err = fx
            .registry
            .cancel_agreement(&mut fx.ledger, &mut fx.assets, fx.landlord, id, fx.t0)
            .unwrap_err();
        assert!(matches!(err, EngineError::Unauthorized { .. }));
    }

    #[test]
    fn withdraw_balance_drains_once() {
        let mut fx = fixture();
        let id = create(&mut fx);
        fx.registry
            .release_rent_to_landlord(&mut fx.ledger, fx.landlord, id, fx.t0)
            .unwrap();
        assert_eq!(
            fx.registry
                .withdraw_balance(&mut fx.ledger, fx.landlord)
                .unwrap(),
            Tokens(99)
        );
        assert!(matches!(
            fx.registry.withdraw_balance(&mut fx.ledger, fx.landlord),
            Err(EngineError::NothingToWithdraw { .. })
        ));
    }

    #[test]
    fn paused_platform_rejects_mutations() {
        let mut fx = fixture();
        let operator = fx.registry.config().operator;
        fx.registry
            .config_mut()
            .set_paused(&operator, true)
            .unwrap();
        let err = fx
            .registry
            .create_agreement(
                &mut fx.ledger,
                &mut fx.assets,
                fx.tenant,
                fx.landlord,
                fx.asset.clone(),
                Tokens(100),
                Tokens(200),
                Tokens(10),
                12,
                Tokens(310),
                fx.t0,
            )
            .unwrap_err();
        assert_eq!(err, EngineError::Paused);
    }
}
