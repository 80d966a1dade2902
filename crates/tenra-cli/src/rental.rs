//! # Rental Subcommand
//!
//! Happy-path rental lifecycle: create an agreement, release the rent,
//! return the deposit after the rental period, and drain both balances.

use anyhow::Context;
use clap::Args;

use tenra_core::constants::MONTH_SECS;
use tenra_core::{AccountId, AssetRef, Timestamp, Tokens};
use tenra_escrow::{AgreementRegistry, InMemoryAssetRegistry, PlatformConfig};
use tenra_ledger::LedgerOfRecord;

/// Arguments for the rental demo.
#[derive(Args, Debug)]
pub struct RentalArgs {
    /// Monthly rent in tokens.
    #[arg(long, default_value_t = 100)]
    pub rent: u64,
    /// Security deposit in tokens.
    #[arg(long, default_value_t = 200)]
    pub deposit: u64,
    /// Dispute fee in tokens.
    #[arg(long, default_value_t = 10)]
    pub dispute_fee: u64,
    /// Rental duration in months.
    #[arg(long, default_value_t = 1)]
    pub months: u32,
}

/// Run the scripted happy-path lifecycle and print the fund flows.
pub fn run(args: RentalArgs) -> anyhow::Result<()> {
    let operator = AccountId::new();
    let landlord = AccountId::new();
    let tenant = AccountId::new();
    let asset = AssetRef::new("prop-001");
    let t0 = Timestamp::now();

    let mut ledger = LedgerOfRecord::new();
    let mut assets = InMemoryAssetRegistry::new();
    assets.register(asset.clone(), landlord);
    let registry = AgreementRegistry::new(PlatformConfig::new(operator));

    let rent = Tokens(args.rent);
    let deposit = Tokens(args.deposit);
    let dispute_fee = Tokens(args.dispute_fee);
    let supplied = rent
        .checked_add(deposit, "demo")?
        .checked_add(dispute_fee, "demo")?;

    let id = registry
        .create_agreement(
            &mut ledger,
            &mut assets,
            tenant,
            landlord,
            asset,
            rent,
            deposit,
            dispute_fee,
            args.months,
            supplied,
            t0,
        )
        .context("creating the agreement")?;
    println!("created {id}: {supplied} locked, custody with the tenant");

    registry
        .release_rent_to_landlord(&mut ledger, landlord, id, t0)
        .context("releasing rent")?;

    let period_end = t0.plus_secs(i64::from(args.months) * MONTH_SECS);
    registry
        .return_deposit_to_tenant(&mut ledger, tenant, id, period_end)
        .context("returning the deposit")?;

    let landlord_take = registry.withdraw_balance(&mut ledger, landlord)?;
    let tenant_take = registry.withdraw_balance(&mut ledger, tenant)?;
    let operator_take = registry.withdraw_balance(&mut ledger, operator)?;
    println!("landlord withdrew {landlord_take}");
    println!("tenant withdrew   {tenant_take}");
    println!("operator withdrew {operator_take} (platform fee)");

    let agreement = ledger.agreement(id)?;
    println!("final status: {}", agreement.status);
    Ok(())
}
