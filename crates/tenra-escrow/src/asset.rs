//! # Asset Registry Boundary
//!
//! The ownership-token representation of a property lives in an external
//! registry. The engine needs exactly two capabilities from it: verifying
//! the owner of an asset and transferring custody. Both sit behind the
//! [`AssetRegistry`] trait so the engine can be driven against a chain
//! adapter in production and [`InMemoryAssetRegistry`] in tests.

use std::collections::BTreeMap;

use tenra_core::{AccountId, AssetRef, EngineError};

/// External asset-registry collaborator.
pub trait AssetRegistry {
    /// The current owner of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the registry has no record of
    /// the asset.
    fn owner_of(&self, asset: &AssetRef) -> Result<AccountId, EngineError>;

    /// Transfer custody of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TransferFailed`] if `from` is not the
    /// current owner or the registry rejects the transfer.
    fn transfer(
        &mut self,
        asset: &AssetRef,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), EngineError>;
}

/// In-memory asset registry for tests and the demo CLI.
#[derive(Debug, Default)]
pub struct InMemoryAssetRegistry {
    owners: BTreeMap<AssetRef, AccountId>,
}

impl InMemoryAssetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `asset` as owned by `owner`.
    pub fn register(&mut self, asset: AssetRef, owner: AccountId) {
        self.owners.insert(asset, owner);
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn owner_of(&self, asset: &AssetRef) -> Result<AccountId, EngineError> {
        self.owners
            .get(asset)
            .copied()
            .ok_or_else(|| EngineError::NotFound {
                entity: "asset".to_string(),
                id: asset.to_string(),
            })
    }

    fn transfer(
        &mut self,
        asset: &AssetRef,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), EngineError> {
        let owner = self.owner_of(asset)?;
        if owner != *from {
            return Err(EngineError::TransferFailed {
                asset: asset.to_string(),
                reason: format!("transfer from {from} rejected, owner is {owner}"),
            });
        }
        self.owners.insert(asset.clone(), *to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_requires_current_owner() {
        let mut registry = InMemoryAssetRegistry::new();
        let owner = AccountId::new();
        let other = AccountId::new();
        let asset = AssetRef::new("prop-001");
        registry.register(asset.clone(), owner);

        assert!(matches!(
            registry.transfer(&asset, &other, &owner),
            Err(EngineError::TransferFailed { .. })
        ));

        registry.transfer(&asset, &owner, &other).unwrap();
        assert_eq!(registry.owner_of(&asset).unwrap(), other);
    }

    #[test]
    fn unknown_asset_is_not_found() {
        let registry = InMemoryAssetRegistry::new();
        assert!(matches!(
            registry.owner_of(&AssetRef::new("missing")),
            Err(EngineError::NotFound { .. })
        ));
    }
}
