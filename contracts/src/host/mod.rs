//! An in-process execution host for contracts.
//!
//! The [`Host`] owns every account: its code, its word-addressed storage and
//! its deployment nonce. Contracts never own state themselves. A contract is a
//! layout of storage slots (see [`storage`]) whose operations read and write
//! through a [`Context`], which binds a call frame to the account whose
//! storage is active and to the account that sent the call.
//!
//! Delegated execution ([`Context::delegate_call`]) runs the code of another
//! account against the current frame's storage and keeps the current sender.
//! This is what lets an [`UpgradeabilityProxy`] swap logic without moving
//! state.
//!
//! Every external call is a transaction: it either fully applies or fully
//! reverts, logs included. Nested frames revert only their own changes.
//!
//! [`UpgradeabilityProxy`]: crate::proxy::upgradeability_proxy::UpgradeabilityProxy
use std::{collections::HashMap, convert::Infallible, panic, sync::Arc, thread};

use alloy_primitives::{Address, Log, U256};
use alloy_sol_types::{SolCall, SolEvent, SolInterface};
use tracing::{debug, trace};

mod context;
mod contract;
pub mod storage;

pub use context::Context;
pub use contract::{Contract, Sender};

/// Result of executing a call: the ABI-encoded return data on success, or
/// the ABI-encoded revert data on failure.
pub type ArbResult = Result<Vec<u8>, Vec<u8>>;

/// Maximum depth of nested call frames, as on the EVM.
pub const MAX_CALL_DEPTH: usize = 1024;

/// Stack reserved for a chain of nested frames. Sized so that
/// [`MAX_CALL_DEPTH`] is reached before the native stack runs out.
const CALL_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Executable code of an account.
///
/// A router receives raw calldata and either handles it or returns [`None`]
/// so that the next router in a composition (or the fallback) can try.
pub trait Router: Send + Sync + 'static {
    /// Handles `calldata` if its selector belongs to this contract.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Execution context of the current call frame.
    /// * `calldata` - Raw ABI-encoded call.
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult>;

    /// Runs when no selector matched. Contracts without a fallback revert
    /// with empty data.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Execution context of the current call frame.
    /// * `calldata` - Raw ABI-encoded call.
    fn fallback(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        let _ = (ctx, calldata);
        None
    }
}

/// Decodes `calldata` as a call of the interface `I`.
///
/// Returns [`None`] when the selector is not part of `I`, and an empty revert
/// when the selector matches but the arguments are malformed.
pub fn decode_call<I: SolInterface>(
    calldata: &[u8],
) -> Option<Result<I, Vec<u8>>> {
    let selector: [u8; 4] = calldata.get(..4)?.try_into().ok()?;
    if !I::valid_selector(selector) {
        return None;
    }
    Some(I::abi_decode(calldata).map_err(|_| Vec::new()))
}

/// Encodes the return value of a fallible call `C`.
pub fn returns<C: SolCall, E: Into<Vec<u8>>>(
    result: Result<C::Return, E>,
) -> ArbResult {
    result.map(|value| C::abi_encode_returns(&value)).map_err(Into::into)
}

/// Encodes the return value of an infallible call `C`.
#[allow(clippy::unnecessary_wraps)]
pub fn ok<C: SolCall>(value: &C::Return) -> ArbResult {
    Ok(C::abi_encode_returns(value))
}

/// Encodes the outcome of a call without return values.
pub fn done<E: Into<Vec<u8>>>(result: Result<(), E>) -> ArbResult {
    result.map(|()| Vec::new()).map_err(Into::into)
}

#[derive(Default)]
struct Account {
    code: Option<Arc<dyn Router>>,
    storage: HashMap<U256, U256>,
    nonce: u64,
}

enum JournalEntry {
    StorageChanged { address: Address, slot: U256, previous: U256 },
    AccountCreated { address: Address },
    NonceIncremented { address: Address },
}

#[derive(Clone, Copy)]
struct Checkpoint {
    journal: usize,
    logs: usize,
}

/// A single call frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    /// Account whose storage is read and written.
    pub(crate) address: Address,
    /// Account whose code is executing.
    pub(crate) code_address: Address,
    /// Account that sent the call.
    pub(crate) sender: Address,
    pub(crate) depth: usize,
}

/// State of every account plus the logs emitted so far.
#[derive(Default)]
pub struct Host {
    accounts: HashMap<Address, Account>,
    journal: Vec<JournalEntry>,
    logs: Vec<Log>,
    on_call_stack: bool,
}

impl Host {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys `code` from `deployer` without running any constructor.
    ///
    /// The address is derived from the deployer and its nonce, like a
    /// `CREATE`.
    pub fn deploy<C: Router>(
        &mut self,
        deployer: Address,
        code: C,
    ) -> Contract<C> {
        let contract = self.create(deployer, code);
        self.journal.clear();
        contract
    }

    /// Deploys `code` from `deployer` and runs `constructor` with `deployer`
    /// as sender, atomically. A failing constructor leaves no account
    /// behind.
    ///
    /// # Errors
    ///
    /// * Whatever error `constructor` returns.
    pub fn deploy_with<C, E>(
        &mut self,
        deployer: Address,
        code: C,
        constructor: impl FnOnce(&C, &mut Context<'_>) -> Result<(), E>,
    ) -> Result<Contract<C>, E>
    where
        C: Router,
    {
        let checkpoint = self.checkpoint();
        let contract = self.create(deployer, code);
        let frame = Frame::root(deployer, contract.address());
        let result = constructor(
            contract.code(),
            &mut Context::new(self, frame),
        );
        match result {
            Ok(()) => {
                self.journal.clear();
                Ok(contract)
            }
            Err(error) => {
                debug!(address = %contract.address(), "constructor reverted");
                self.revert_to(checkpoint);
                self.journal.clear();
                Err(error)
            }
        }
    }

    /// Sends an external call from `sender` to `to` as a transaction.
    ///
    /// # Errors
    ///
    /// * The revert data of the called contract, unchanged.
    pub fn call(
        &mut self,
        sender: Address,
        to: Address,
        calldata: &[u8],
    ) -> ArbResult {
        debug!(%sender, %to, len = calldata.len(), "transaction");
        let result = self.run_frame(Frame::root(sender, to), calldata);
        self.journal.clear();
        result
    }

    /// Runs `f` as a transaction sent by `sender` against the storage of
    /// `address`. Every change made by `f` is discarded if it returns an
    /// error.
    ///
    /// # Errors
    ///
    /// * Whatever error `f` returns.
    pub fn execute<R, E>(
        &mut self,
        sender: Address,
        address: Address,
        f: impl FnOnce(&mut Context<'_>) -> Result<R, E>,
    ) -> Result<R, E> {
        let checkpoint = self.checkpoint();
        let result = f(&mut Context::new(self, Frame::root(sender, address)));
        if result.is_err() {
            debug!(%sender, %address, "transaction reverted");
            self.revert_to(checkpoint);
        }
        self.journal.clear();
        result
    }

    /// Runs the read-only `f` against the storage of `address`.
    pub fn view<R>(
        &mut self,
        address: Address,
        f: impl FnOnce(&Context<'_>) -> R,
    ) -> R {
        let result = self.execute::<R, Infallible>(
            Address::ZERO,
            address,
            |ctx| Ok(f(ctx)),
        );
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns whether `address` holds code.
    #[must_use]
    pub fn has_code(&self, address: Address) -> bool {
        self.accounts
            .get(&address)
            .is_some_and(|account| account.code.is_some())
    }

    /// Returns the raw storage word of `address` at `slot`.
    #[must_use]
    pub fn storage_at(&self, address: Address, slot: U256) -> U256 {
        self.accounts
            .get(&address)
            .and_then(|account| account.storage.get(&slot))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the deployment nonce of `address`.
    #[must_use]
    pub fn nonce(&self, address: Address) -> u64 {
        self.accounts.get(&address).map_or(0, |account| account.nonce)
    }

    /// Returns every log emitted by committed calls, oldest first.
    #[must_use]
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Returns whether `address` emitted `event`.
    pub fn emitted<E: SolEvent>(&self, address: Address, event: &E) -> bool {
        let expected = event.encode_log_data();
        self.logs
            .iter()
            .any(|log| log.address == address && log.data == expected)
    }

    /// Executes `frame` and reverts its changes if it fails.
    ///
    /// The outermost frame of a chain moves to a thread with
    /// [`CALL_STACK_SIZE`] of stack, so that deep recursion ends at
    /// [`MAX_CALL_DEPTH`] as a revert.
    pub(crate) fn run_frame(
        &mut self,
        frame: Frame,
        calldata: &[u8],
    ) -> ArbResult {
        if self.on_call_stack {
            return self.execute_frame(frame, calldata);
        }

        self.on_call_stack = true;
        let result = thread::scope(|scope| {
            let spawned = thread::Builder::new()
                .name("call-stack".into())
                .stack_size(CALL_STACK_SIZE)
                .spawn_scoped(scope, || self.execute_frame(frame, calldata));
            match spawned {
                Ok(handle) => handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload)),
                Err(error) => {
                    debug!(%error, "failed to allocate call stack");
                    Err(Vec::new())
                }
            }
        });
        self.on_call_stack = false;
        result
    }

    fn execute_frame(&mut self, frame: Frame, calldata: &[u8]) -> ArbResult {
        if frame.depth > MAX_CALL_DEPTH {
            debug!(depth = frame.depth, "call depth exceeded");
            return Err(Vec::new());
        }
        let Some(code) = self.code(frame.code_address) else {
            trace!(
                address = %frame.code_address,
                "call to account without code"
            );
            return Ok(Vec::new());
        };

        let checkpoint = self.checkpoint();
        let result = {
            let mut ctx = Context::new(self, frame);
            code.route(&mut ctx, calldata)
                .or_else(|| code.fallback(&mut ctx, calldata))
                .unwrap_or_else(|| Err(Vec::new()))
        };
        if result.is_err() {
            debug!(
                address = %frame.address,
                code = %frame.code_address,
                depth = frame.depth,
                "frame reverted"
            );
            self.revert_to(checkpoint);
        }
        result
    }

    pub(crate) fn load(&self, address: Address, slot: U256) -> U256 {
        self.storage_at(address, slot)
    }

    pub(crate) fn store(&mut self, address: Address, slot: U256, value: U256) {
        let storage = &mut self.accounts.entry(address).or_default().storage;
        let previous = if value.is_zero() {
            storage.remove(&slot)
        } else {
            storage.insert(slot, value)
        }
        .unwrap_or_default();
        trace!(%address, %slot, %value, "store");
        self.journal.push(JournalEntry::StorageChanged {
            address,
            slot,
            previous,
        });
    }

    pub(crate) fn push_log(&mut self, log: Log) {
        self.logs.push(log);
    }

    fn code(&self, address: Address) -> Option<Arc<dyn Router>> {
        self.accounts.get(&address).and_then(|account| account.code.clone())
    }

    fn create<C: Router>(&mut self, deployer: Address, code: C) -> Contract<C> {
        let deployer_account = self.accounts.entry(deployer).or_default();
        let address = deployer.create(deployer_account.nonce);
        deployer_account.nonce += 1;
        self.journal.push(JournalEntry::NonceIncremented { address: deployer });

        let code = Arc::new(code);
        self.accounts.insert(
            address,
            Account {
                code: Some(Arc::clone(&code) as Arc<dyn Router>),
                ..Account::default()
            },
        );
        self.journal.push(JournalEntry::AccountCreated { address });
        debug!(%deployer, %address, "deployed");

        Contract::new(address, code)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint { journal: self.journal.len(), logs: self.logs.len() }
    }

    fn revert_to(&mut self, checkpoint: Checkpoint) {
        while self.journal.len() > checkpoint.journal {
            let Some(entry) = self.journal.pop() else { break };
            match entry {
                JournalEntry::StorageChanged { address, slot, previous } => {
                    let storage =
                        &mut self.accounts.entry(address).or_default().storage;
                    if previous.is_zero() {
                        storage.remove(&slot);
                    } else {
                        storage.insert(slot, previous);
                    }
                }
                JournalEntry::AccountCreated { address } => {
                    self.accounts.remove(&address);
                }
                JournalEntry::NonceIncremented { address } => {
                    if let Some(account) = self.accounts.get_mut(&address) {
                        account.nonce -= 1;
                    }
                }
            }
        }
        self.logs.truncate(checkpoint.logs);
    }
}

impl Frame {
    fn root(sender: Address, address: Address) -> Self {
        Self { address, code_address: address, sender, depth: 0 }
    }
}
