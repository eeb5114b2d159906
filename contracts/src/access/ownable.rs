//! Contract module which provides a basic access control mechanism, where
//! there is an account (an owner) that can be granted exclusive access to
//! specific functions.
//!
//! The initial owner is set to the address provided by the deployer. This can
//! later be changed with [`IOwnable::transfer_ownership`]. Ownership can never
//! be renounced, so an initialized contract always has an owner.
//!
//! This module is used through composition. It will make available the
//! [`Ownable::only_owner`] function, which can be called to restrict operations
//! to the owner.
use alloy_primitives::{aliases::B32, Address, U256};
use alloy_sol_types::SolError;
pub use sol::*;

use crate::{
    access::abi::OwnableAbi::{self, OwnableAbiCalls},
    error::ErrorKind,
    host::{
        decode_call, done, ok,
        storage::{Layout, StorageAddress, StorageType, StorageValue},
        ArbResult, Context, Router,
    },
    utils::introspection::erc165::{self, Erc165, IErc165},
};

mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when ownership gets transferred between accounts.
        ///
        /// * `previous_owner` - Address of the previous owner.
        /// * `new_owner` - Address of the new owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    }

    sol! {
        /// The caller account is not authorized to perform an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableUnauthorizedAccount(address account);
        /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
        ///
        /// * `owner` - Account that's not allowed to become the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableInvalidOwner(address owner);
    }
}

/// An error that occurred in the implementation of an [`Ownable`] contract.
#[derive(Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
    InvalidOwner(OwnableInvalidOwner),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnauthorizedAccount(_) => ErrorKind::Unauthorized,
            Error::InvalidOwner(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::UnauthorizedAccount(e) => e.abi_encode(),
            Error::InvalidOwner(e) => e.abi_encode(),
        }
    }
}

/// State of an [`Ownable`] contract.
#[derive(Debug)]
pub struct Ownable {
    /// The current owner of this contract.
    pub(crate) owner: StorageAddress,
}

impl StorageType for Ownable {
    const SLOTS: usize = 1;

    fn new(slot: U256) -> Self {
        let mut layout = Layout::at(slot);
        Self { owner: layout.field() }
    }
}

impl Default for Ownable {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

/// Interface for an [`Ownable`] contract.
pub trait IOwnable {
    /// The error type associated to the trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns the address of the current owner.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    #[must_use]
    fn owner(&self, ctx: &Context<'_>) -> Address;

    /// Transfers ownership of the contract to a new account (`new_owner`).
    /// Can only be called by the current owner.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `new_owner` - The next owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidOwner`] - If `new_owner` is the [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn transfer_ownership(
        &self,
        ctx: &mut Context<'_>,
        new_owner: Address,
    ) -> Result<(), Self::Error>;
}

impl Ownable {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `initial_owner` - The initial owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If initial owner is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn constructor(
        &self,
        ctx: &mut Context<'_>,
        initial_owner: Address,
    ) -> Result<(), Error> {
        if initial_owner.is_zero() {
            return Err(Error::InvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }
        self._transfer_ownership(ctx, initial_owner);
        Ok(())
    }

    /// Checks if the [`Context::msg_sender`] is set as the owner.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If called by any account other than
    ///   the owner.
    pub fn only_owner(&self, ctx: &Context<'_>) -> Result<(), Error> {
        let account = ctx.msg_sender();
        if self.owner.get(ctx) != account {
            return Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }

    /// Transfers ownership of the contract to a new account (`new_owner`).
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `new_owner` - Account that is going to be the next owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn _transfer_ownership(
        &self,
        ctx: &mut Context<'_>,
        new_owner: Address,
    ) {
        let previous_owner = self.owner.get(ctx);
        self.owner.set(ctx, new_owner);
        ctx.log(OwnershipTransferred { previous_owner, new_owner });
    }

    /// Handles calls of the [`OwnableAbi`] surface.
    pub fn dispatch(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        let call = match decode_call::<OwnableAbiCalls>(calldata)? {
            Ok(call) => call,
            Err(e) => return Some(Err(e)),
        };
        Some(match call {
            OwnableAbiCalls::owner(_) => {
                ok::<OwnableAbi::ownerCall>(&self.owner(ctx))
            }
            OwnableAbiCalls::transferOwnership(call) => {
                done(self.transfer_ownership(ctx, call.newOwner))
            }
        })
    }
}

impl IOwnable for Ownable {
    type Error = Error;

    fn owner(&self, ctx: &Context<'_>) -> Address {
        self.owner.get(ctx)
    }

    fn transfer_ownership(
        &self,
        ctx: &mut Context<'_>,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.only_owner(ctx)?;

        if new_owner.is_zero() {
            return Err(Error::InvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }

        self._transfer_ownership(ctx, new_owner);

        Ok(())
    }
}

impl IErc165 for Ownable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        erc165::interface_id::<OwnableAbiCalls>() == interface_id
            || Erc165.supports_interface(interface_id)
    }
}

impl Router for Ownable {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        erc165::route(self, calldata).or_else(|| self.dispatch(ctx, calldata))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;

    use super::*;
    use crate::host::{Contract, Host};

    const ALICE: Address = Address::repeat_byte(0xa1);
    const BOB: Address = Address::repeat_byte(0xb0);

    fn deploy(host: &mut Host) -> Contract<Ownable> {
        host.deploy(ALICE, Ownable::default())
    }

    #[test]
    fn constructor() {
        let mut host = Host::new();
        let contract = deploy(&mut host);
        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, ALICE))
            .unwrap();

        let owner =
            contract.sender(&mut host, ALICE).view(|c, ctx| c.owner(ctx));
        assert_eq!(owner, ALICE);

        assert!(host.emitted(
            contract.address(),
            &OwnershipTransferred {
                previous_owner: Address::ZERO,
                new_owner: ALICE,
            }
        ));
    }

    #[test]
    fn constructor_reverts_when_invalid_owner() {
        let mut host = Host::new();
        let contract = deploy(&mut host);

        let err = contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, Address::ZERO))
            .expect_err("should revert");

        assert!(matches!(
            err,
            Error::InvalidOwner(OwnableInvalidOwner { owner })
                if owner.is_zero()
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(host.logs().is_empty());
    }

    #[test]
    fn transfers_ownership() {
        let mut host = Host::new();
        let contract = deploy(&mut host);
        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, ALICE))
            .unwrap();

        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.transfer_ownership(ctx, BOB))
            .expect("should transfer ownership");
        let owner =
            contract.sender(&mut host, ALICE).view(|c, ctx| c.owner(ctx));
        assert_eq!(owner, BOB);

        assert!(host.emitted(
            contract.address(),
            &OwnershipTransferred { previous_owner: ALICE, new_owner: BOB }
        ));
    }

    #[test]
    fn prevents_non_owners_from_transferring() {
        let mut host = Host::new();
        let contract = deploy(&mut host);
        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, BOB))
            .unwrap();

        let err = contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.transfer_ownership(ctx, ALICE))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == ALICE
        ));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        let owner =
            contract.sender(&mut host, ALICE).view(|c, ctx| c.owner(ctx));
        assert_eq!(owner, BOB);
    }

    #[test]
    fn prevents_reaching_stuck_state() {
        let mut host = Host::new();
        let contract = deploy(&mut host);
        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, ALICE))
            .unwrap();

        let err = contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.transfer_ownership(ctx, Address::ZERO))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidOwner(OwnableInvalidOwner { owner })
                if owner.is_zero()
        ));
    }

    #[test]
    fn routes_abi_calls() {
        let mut host = Host::new();
        let contract = deploy(&mut host);
        contract
            .sender(&mut host, ALICE)
            .exec(|c, ctx| c.constructor(ctx, ALICE))
            .unwrap();

        let calldata =
            OwnableAbi::transferOwnershipCall { newOwner: BOB }.abi_encode();
        contract.sender(&mut host, ALICE).call(&calldata).unwrap();

        let output = contract
            .sender(&mut host, BOB)
            .call(&OwnableAbi::ownerCall {}.abi_encode())
            .unwrap();
        let owner = OwnableAbi::ownerCall::abi_decode_returns(&output).unwrap();
        assert_eq!(owner, BOB);

        let err =
            contract.sender(&mut host, ALICE).call(&calldata).unwrap_err();
        assert_eq!(
            err,
            OwnableUnauthorizedAccount { account: ALICE }.abi_encode()
        );
    }

    #[test]
    fn rejects_unknown_selectors() {
        let mut host = Host::new();
        let contract = deploy(&mut host);

        let err = contract
            .sender(&mut host, ALICE)
            .call(&[0xde, 0xad, 0xbe, 0xef])
            .unwrap_err();

        assert!(err.is_empty());
        assert_eq!(host.storage_at(contract.address(), U256::ZERO), U256::ZERO);
    }

    #[test]
    fn interface_id() {
        let actual = erc165::interface_id::<OwnableAbiCalls>();
        // owner() ^ transferOwnership(address)
        let expected: B32 = 0x7f58_28d0_u32.to_be_bytes().into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn supports_interface() {
        let ownable = Ownable::default();
        let interface_id = erc165::interface_id::<OwnableAbiCalls>();
        assert!(ownable.supports_interface(interface_id));
        assert!(ownable.supports_interface(Erc165::INTERFACE_ID));

        let fake_interface_id: B32 = 0x1234_5678_u32.to_be_bytes().into();
        assert!(!ownable.supports_interface(fake_interface_id));
    }
}
