//! Typed handles to deployed contracts.
use std::{convert::Infallible, sync::Arc};

use alloy_primitives::Address;

use super::{ArbResult, Context, Host, Router};

/// A deployed contract: its address plus its storage layout.
pub struct Contract<C> {
    address: Address,
    code: Arc<C>,
}

impl<C> Clone for Contract<C> {
    fn clone(&self) -> Self {
        Self { address: self.address, code: Arc::clone(&self.code) }
    }
}

impl<C: Router> Contract<C> {
    pub(crate) fn new(address: Address, code: Arc<C>) -> Self {
        Self { address, code }
    }

    /// Address of the contract account.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    pub(crate) fn code(&self) -> &C {
        &self.code
    }

    /// Prepares calls to this contract sent by `account`.
    pub fn sender<'a>(
        &'a self,
        host: &'a mut Host,
        account: Address,
    ) -> Sender<'a, C> {
        Sender { contract: self, host, account }
    }
}

/// Calls to a [`Contract`] from a fixed sender.
pub struct Sender<'a, C> {
    contract: &'a Contract<C>,
    host: &'a mut Host,
    account: Address,
}

impl<C: Router> Sender<'_, C> {
    /// Runs a typed operation as a transaction. Nothing is persisted if it
    /// fails.
    ///
    /// # Errors
    ///
    /// * Whatever error `f` returns.
    pub fn exec<R, E>(
        &mut self,
        f: impl FnOnce(&C, &mut Context<'_>) -> Result<R, E>,
    ) -> Result<R, E> {
        let code = self.contract.code();
        self.host
            .execute(self.account, self.contract.address, |ctx| f(code, ctx))
    }

    /// Runs a read-only typed operation.
    pub fn view<R>(&mut self, f: impl FnOnce(&C, &Context<'_>) -> R) -> R {
        let code = self.contract.code();
        let result = self.host.execute::<R, Infallible>(
            self.account,
            self.contract.address,
            |ctx| Ok(f(code, ctx)),
        );
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Sends raw calldata as a transaction.
    ///
    /// # Errors
    ///
    /// * The revert data of the contract, unchanged.
    pub fn call(&mut self, calldata: &[u8]) -> ArbResult {
        self.host.call(self.account, self.contract.address, calldata)
    }
}
