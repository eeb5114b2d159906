//! Contract module that keeps a list of accounts allowed to use protected
//! functionality, managed by the owner of an [`Ownable`] contract.
//!
//! Membership is a plain flag per account. The owner is not a member by
//! default: an owner that wants to use protected functions grants access to
//! itself first.
//!
//! Composed contracts guard their own operations with
//! [`Accessable::only_access`].
use alloy_primitives::{aliases::B32, Address, U256};
use alloy_sol_types::SolError;
pub use sol::*;

use crate::{
    access::{
        abi::AccessableAbi::{self, AccessableAbiCalls},
        ownable::{self, Ownable},
    },
    error::ErrorKind,
    host::{
        decode_call, done, ok,
        storage::{Layout, StorageBool, StorageMap, StorageType, StorageValue},
        ArbResult, Context, Router,
    },
    utils::introspection::erc165::{self, IErc165},
};

mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `authorized_address` is granted access.
        ///
        /// * `authorized_address` - Account that was granted access.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event AccessGranted(address indexed authorized_address);
        /// Emitted when `unauthorized_address` loses access.
        ///
        /// * `unauthorized_address` - Account whose access was revoked.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event AccessRevoked(address indexed unauthorized_address);
    }

    sol! {
        /// The caller account has not been granted access.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessableUnauthorizedAccount(address account);
        /// Access can't be granted to or revoked from this account.
        /// (eg. [`Address::ZERO`])
        ///
        /// * `account` - The rejected account.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessableInvalidAccount(address account);
    }
}

/// An error that occurred in the implementation of an [`Accessable`]
/// contract.
#[derive(Debug)]
pub enum Error {
    /// The caller account has not been granted access.
    UnauthorizedAccount(AccessableUnauthorizedAccount),
    /// The account can't be granted or revoked access.
    InvalidAccount(AccessableInvalidAccount),
    /// Error type from [`Ownable`] contract [`ownable::Error`].
    Ownable(ownable::Error),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnauthorizedAccount(_) => ErrorKind::Unauthorized,
            Error::InvalidAccount(_) => ErrorKind::InvalidArgument,
            Error::Ownable(e) => e.kind(),
        }
    }
}

impl From<ownable::Error> for Error {
    fn from(value: ownable::Error) -> Self {
        Error::Ownable(value)
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::UnauthorizedAccount(e) => e.abi_encode(),
            Error::InvalidAccount(e) => e.abi_encode(),
            Error::Ownable(e) => e.into(),
        }
    }
}

/// State of an [`Accessable`] contract.
#[derive(Debug)]
pub struct Accessable {
    /// [`Ownable`] contract managing the access list.
    pub ownable: Ownable,
    /// Whether an account has been granted access.
    pub(crate) access: StorageMap<Address, StorageBool>,
}

impl StorageType for Accessable {
    const SLOTS: usize = Ownable::SLOTS + 1;

    fn new(slot: U256) -> Self {
        let mut layout = Layout::at(slot);
        Self { ownable: layout.field(), access: layout.field() }
    }
}

impl Default for Accessable {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

/// Interface for an [`Accessable`] contract.
pub trait IAccessable {
    /// The error type associated to the trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns `true` if `account` has been granted access.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `account` - The account to check.
    #[must_use]
    fn has_access(&self, ctx: &Context<'_>, account: Address) -> bool;

    /// Grants access to `account`. Granting an account that already has
    /// access leaves the list unchanged but still emits the event.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `account` - The account to grant access to.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAccount`] - If `account` is [`Address::ZERO`], whoever
    ///   the caller is.
    /// * [`Error::Ownable`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`AccessGranted`].
    fn grant_access(
        &self,
        ctx: &mut Context<'_>,
        account: Address,
    ) -> Result<(), Self::Error>;

    /// Revokes access from `account`. Revoking an account without access
    /// leaves the list unchanged but still emits the event.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `account` - The account to revoke access from.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidAccount`] - If `account` is [`Address::ZERO`], whoever
    ///   the caller is.
    /// * [`Error::Ownable`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`AccessRevoked`].
    fn revoke_access(
        &self,
        ctx: &mut Context<'_>,
        account: Address,
    ) -> Result<(), Self::Error>;
}

impl Accessable {
    /// Constructor. Sets `initial_owner` as the owner of the access list.
    ///
    /// # Errors
    ///
    /// * [`Error::Ownable`] - If `initial_owner` is [`Address::ZERO`].
    pub fn constructor(
        &self,
        ctx: &mut Context<'_>,
        initial_owner: Address,
    ) -> Result<(), Error> {
        Ok(self.ownable.constructor(ctx, initial_owner)?)
    }

    /// Checks if the [`Context::msg_sender`] has been granted access.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If the caller has no access.
    pub fn only_access(&self, ctx: &Context<'_>) -> Result<(), Error> {
        self._check_access(ctx, ctx.msg_sender())
    }

    /// Checks if `account` has been granted access.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If `account` has no access.
    pub fn _check_access(
        &self,
        ctx: &Context<'_>,
        account: Address,
    ) -> Result<(), Error> {
        if !self.has_access(ctx, account) {
            return Err(Error::UnauthorizedAccount(
                AccessableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }

    /// Handles calls of the [`AccessableAbi`] and
    /// [`crate::access::abi::OwnableAbi`] surfaces.
    pub fn dispatch(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        let call = match decode_call::<AccessableAbiCalls>(calldata) {
            Some(Ok(call)) => call,
            Some(Err(e)) => return Some(Err(e)),
            None => return self.ownable.dispatch(ctx, calldata),
        };
        Some(match call {
            AccessableAbiCalls::hasAccess(call) => {
                ok::<AccessableAbi::hasAccessCall>(
                    &self.has_access(ctx, call.account),
                )
            }
            AccessableAbiCalls::grantAccess(call) => {
                done(self.grant_access(ctx, call.account))
            }
            AccessableAbiCalls::revokeAccess(call) => {
                done(self.revoke_access(ctx, call.account))
            }
        })
    }

    fn set_access(
        &self,
        ctx: &mut Context<'_>,
        account: Address,
        granted: bool,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::InvalidAccount(AccessableInvalidAccount {
                account,
            }));
        }

        self.ownable.only_owner(ctx)?;

        self.access.setter(&account).set(ctx, granted);
        Ok(())
    }
}

impl IAccessable for Accessable {
    type Error = Error;

    fn has_access(&self, ctx: &Context<'_>, account: Address) -> bool {
        self.access.getter(&account).get(ctx)
    }

    fn grant_access(
        &self,
        ctx: &mut Context<'_>,
        account: Address,
    ) -> Result<(), Self::Error> {
        self.set_access(ctx, account, true)?;
        ctx.log(AccessGranted { authorized_address: account });
        Ok(())
    }

    fn revoke_access(
        &self,
        ctx: &mut Context<'_>,
        account: Address,
    ) -> Result<(), Self::Error> {
        self.set_access(ctx, account, false)?;
        ctx.log(AccessRevoked { unauthorized_address: account });
        Ok(())
    }
}

impl IErc165 for Accessable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        erc165::interface_id::<AccessableAbiCalls>() == interface_id
            || self.ownable.supports_interface(interface_id)
    }
}

impl Router for Accessable {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        erc165::route(self, calldata).or_else(|| self.dispatch(ctx, calldata))
    }
}
