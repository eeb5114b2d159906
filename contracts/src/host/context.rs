//! Execution context of a call frame.
use alloy_primitives::{Address, Log, U256};
use alloy_sol_types::SolEvent;
use tracing::trace;

use super::{ArbResult, Frame, Host};

/// Binds a call frame to the [`Host`].
///
/// Storage reads and writes go to the account returned by
/// [`Context::contract_address`]. Under delegated execution that is the
/// delegating account, while [`Context::code_address`] names the account
/// whose code runs.
pub struct Context<'a> {
    host: &'a mut Host,
    frame: Frame,
}

impl<'a> Context<'a> {
    pub(crate) fn new(host: &'a mut Host, frame: Frame) -> Self {
        Self { host, frame }
    }

    /// Account that sent the current call.
    #[must_use]
    pub fn msg_sender(&self) -> Address {
        self.frame.sender
    }

    /// Account whose storage the current frame operates on.
    #[must_use]
    pub fn contract_address(&self) -> Address {
        self.frame.address
    }

    /// Account whose code is executing.
    #[must_use]
    pub fn code_address(&self) -> Address {
        self.frame.code_address
    }

    /// Returns whether `account` holds code.
    #[must_use]
    pub fn has_code(&self, account: Address) -> bool {
        self.host.has_code(account)
    }

    /// Reads the storage word at `slot`.
    #[must_use]
    pub fn load(&self, slot: U256) -> U256 {
        self.host.load(self.frame.address, slot)
    }

    /// Writes `value` to the storage word at `slot`.
    pub fn store(&mut self, slot: U256, value: U256) {
        self.host.store(self.frame.address, slot, value);
    }

    /// Emits `event` from the current storage account.
    pub fn log<E: SolEvent>(&mut self, event: E) {
        let log = Log {
            address: self.frame.address,
            data: event.encode_log_data(),
        };
        self.host.push_log(log);
    }

    /// Calls `to` with `calldata`, with the current storage account as
    /// sender.
    ///
    /// # Errors
    ///
    /// * The revert data of the callee, unchanged.
    pub fn call(&mut self, to: Address, calldata: &[u8]) -> ArbResult {
        trace!(from = %self.frame.address, %to, "call");
        let frame = Frame {
            address: to,
            code_address: to,
            sender: self.frame.address,
            depth: self.frame.depth + 1,
        };
        self.host.run_frame(frame, calldata)
    }

    /// Runs the code of `implementation` against the current storage
    /// account, keeping the current sender.
    ///
    /// # Errors
    ///
    /// * The revert data of the implementation, unchanged.
    pub fn delegate_call(
        &mut self,
        implementation: Address,
        calldata: &[u8],
    ) -> ArbResult {
        trace!(
            address = %self.frame.address,
            %implementation,
            "delegate call"
        );
        let frame = Frame {
            code_address: implementation,
            depth: self.frame.depth + 1,
            ..self.frame
        };
        self.host.run_frame(frame, calldata)
    }
}
