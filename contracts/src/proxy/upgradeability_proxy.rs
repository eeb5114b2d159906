//! A proxy whose implementation can be upgraded.
//!
//! The proxy answers the management surface itself: the version record and
//! upgrade controls of [`UpgradeabilityStorage`], plus the ownership and
//! access controls. Every other call, including empty calldata, is forwarded
//! to the current implementation by delegated execution, so the
//! implementation's code runs against the proxy's storage with the original
//! sender.
//!
//! Implementations must lay out their storage as an extension of
//! [`UpgradeabilityStorage`]: own fields start at
//! [`UpgradeabilityStorage::SLOTS`], and later versions only append.
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolError;
pub use sol::*;
use tracing::trace;

use crate::{
    host::{storage::StorageType, ArbResult, Context, Router},
    proxy::{
        upgradeability::{
            Error, IUpgradeability, UpgradeAuthority, UpgradeabilityStorage,
        },
        IProxy,
    },
};

mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// No implementation has been set yet.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ProxyMissingImplementation();
    }
}

/// State of an [`UpgradeabilityProxy`] contract.
#[derive(Debug)]
pub struct UpgradeabilityProxy {
    /// Layout shared with the implementations.
    pub storage: UpgradeabilityStorage,
}

impl StorageType for UpgradeabilityProxy {
    const SLOTS: usize = UpgradeabilityStorage::SLOTS;

    fn new(slot: U256) -> Self {
        Self { storage: UpgradeabilityStorage::new(slot) }
    }
}

impl Default for UpgradeabilityProxy {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

impl UpgradeabilityProxy {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `initial_owner` - The initial owner of the proxy.
    /// * `authority` - Who may upgrade.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If `initial_owner` is [`Address::ZERO`].
    pub fn constructor(
        &self,
        ctx: &mut Context<'_>,
        initial_owner: Address,
        authority: UpgradeAuthority,
    ) -> Result<(), Error> {
        self.storage.constructor(ctx, initial_owner, authority)
    }
}

impl IProxy for UpgradeabilityProxy {
    fn implementation(&self, ctx: &Context<'_>) -> Result<Address, Vec<u8>> {
        let implementation = self.storage.implementation(ctx);
        if implementation.is_zero() {
            return Err(ProxyMissingImplementation {}.abi_encode());
        }
        Ok(implementation)
    }
}

impl Router for UpgradeabilityProxy {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        self.storage.dispatch(ctx, calldata)
    }

    fn fallback(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        trace!(len = calldata.len(), "forwarding to implementation");
        Some(self.do_fallback(ctx, calldata))
    }
}
