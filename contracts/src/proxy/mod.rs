//! Contracts that forward calls to a replaceable implementation while keeping
//! their own storage.
use alloy_primitives::Address;

use crate::host::{ArbResult, Context};

pub mod abi;
pub mod upgradeability;
pub mod upgradeability_proxy;

/// This trait provides a fallback function that delegates all calls to another
/// contract using delegated execution. We refer to the second contract as the
/// _implementation_ behind the proxy, and it has to be specified by
/// implementing [`IProxy::implementation`].
///
/// Additionally, delegation to the implementation can be triggered manually
/// through the [`IProxy::do_fallback`] function, or to a different contract
/// through the [`IProxy::delegate`] function.
///
/// The return data or revert data of the delegated call is relayed back to the
/// caller of the proxy unchanged.
pub trait IProxy {
    /// Delegates the current call to `implementation`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `implementation` - The address of the implementation contract.
    /// * `calldata` - The calldata to delegate to the implementation contract.
    ///
    /// # Errors
    ///
    /// * The revert data of the implementation.
    fn delegate(
        &self,
        ctx: &mut Context<'_>,
        implementation: Address,
        calldata: &[u8],
    ) -> ArbResult {
        ctx.delegate_call(implementation, calldata)
    }

    /// Returns the address to which the fallback function and
    /// [`IProxy::do_fallback`] should delegate.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * Encoded revert data if no implementation can be resolved.
    fn implementation(&self, ctx: &Context<'_>) -> Result<Address, Vec<u8>>;

    /// Fallback function that delegates calls to the address returned
    /// by [`IProxy::implementation`]. Will run if no other function in the
    /// contract matches the call data.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `calldata` - The calldata to delegate to the implementation contract.
    ///
    /// # Errors
    ///
    /// * The error of [`IProxy::implementation`], or the revert data of the
    ///   implementation.
    fn do_fallback(&self, ctx: &mut Context<'_>, calldata: &[u8]) -> ArbResult {
        let implementation = self.implementation(ctx)?;
        self.delegate(ctx, implementation, calldata)
    }
}
