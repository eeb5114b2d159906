//! Storage of upgradeable contracts: the [`EternalStorage`] layout extended
//! with the version record of the current implementation.
//!
//! Upgrades are authorized according to the configured
//! [`UpgradeAuthority`]. By default every account that has been granted
//! access may upgrade; the owner can restrict upgrades to itself.
//!
//! Implementations running behind an
//! [`crate::proxy::upgradeability_proxy::UpgradeabilityProxy`] share this
//! layout. Fields they add must start at [`UpgradeabilityStorage::SLOTS`].
use alloy_primitives::{aliases::B32, Address, U256};
use alloy_sol_types::SolError;
pub use sol::*;
use tracing::debug;

use crate::{
    access::accessable,
    error::ErrorKind,
    host::{
        decode_call, done, ok,
        storage::{
            Layout, StorageAddress, StorageBool, StorageString, StorageType,
            StorageValue,
        },
        ArbResult, Context, Router,
    },
    proxy::abi::UpgradeabilityAbi::{self, UpgradeabilityAbiCalls},
    storage::eternal_storage::EternalStorage,
    utils::introspection::erc165::{self, IErc165},
};

mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the implementation is upgraded.
        ///
        /// * `version` - Label of the new version.
        /// * `implementation` - Address of the new implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Upgraded(string version, address indexed implementation);
        /// Emitted when the upgrade authority changes.
        ///
        /// * `authority` - Discriminant of the new [`super::UpgradeAuthority`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        event UpgradeAuthorityChanged(uint8 authority);
    }

    sol! {
        /// The implementation is not a valid implementation account.
        /// (eg. [`alloy_primitives::Address::ZERO`])
        ///
        /// * `implementation` - The rejected implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error UpgradeabilityInvalidImplementation(address implementation);
        /// The implementation is already the current one.
        ///
        /// * `implementation` - The current implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error UpgradeabilitySameImplementation(address implementation);
        /// The discriminant does not name an upgrade authority.
        ///
        /// * `authority` - The rejected discriminant.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error UpgradeabilityInvalidAuthority(uint8 authority);
    }
}

/// Who may upgrade the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum UpgradeAuthority {
    /// Any account that has been granted access.
    #[default]
    Access = 0,
    /// The owner only.
    Owner = 1,
}

impl From<UpgradeAuthority> for u8 {
    fn from(authority: UpgradeAuthority) -> Self {
        authority as u8
    }
}

impl TryFrom<u8> for UpgradeAuthority {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UpgradeAuthority::Access),
            1 => Ok(UpgradeAuthority::Owner),
            authority => Err(Error::InvalidAuthority(
                UpgradeabilityInvalidAuthority { authority },
            )),
        }
    }
}

/// An error that occurred in the implementation of an
/// [`UpgradeabilityStorage`] contract.
#[derive(Debug)]
pub enum Error {
    /// The implementation is [`Address::ZERO`].
    InvalidImplementation(UpgradeabilityInvalidImplementation),
    /// The implementation is already the current one.
    SameImplementation(UpgradeabilitySameImplementation),
    /// The discriminant does not name an [`UpgradeAuthority`].
    InvalidAuthority(UpgradeabilityInvalidAuthority),
    /// Error type from [`crate::access::accessable::Accessable`] contract
    /// [`accessable::Error`].
    Accessable(accessable::Error),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidImplementation(_) | Error::InvalidAuthority(_) => {
                ErrorKind::InvalidArgument
            }
            Error::SameImplementation(_) => ErrorKind::NoOpUpgrade,
            Error::Accessable(e) => e.kind(),
        }
    }
}

impl From<accessable::Error> for Error {
    fn from(value: accessable::Error) -> Self {
        Error::Accessable(value)
    }
}

impl From<crate::access::ownable::Error> for Error {
    fn from(value: crate::access::ownable::Error) -> Self {
        Error::Accessable(value.into())
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::InvalidImplementation(e) => e.abi_encode(),
            Error::SameImplementation(e) => e.abi_encode(),
            Error::InvalidAuthority(e) => e.abi_encode(),
            Error::Accessable(e) => e.into(),
        }
    }
}

/// State of an [`UpgradeabilityStorage`] contract.
#[derive(Debug)]
pub struct UpgradeabilityStorage {
    /// [`EternalStorage`] layout shared with the implementations.
    pub eternal: EternalStorage,
    implementation: StorageAddress,
    version: StorageString,
    owner_only: StorageBool,
}

impl StorageType for UpgradeabilityStorage {
    const SLOTS: usize = EternalStorage::SLOTS + 3;

    fn new(slot: U256) -> Self {
        let mut layout = Layout::at(slot);
        Self {
            eternal: layout.field(),
            implementation: layout.field(),
            version: layout.field(),
            owner_only: layout.field(),
        }
    }
}

impl Default for UpgradeabilityStorage {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

/// Interface for an [`UpgradeabilityStorage`] contract.
pub trait IUpgradeability {
    /// The error type associated to the trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns the label of the current version. Empty before the first
    /// upgrade.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    #[must_use]
    fn version(&self, ctx: &Context<'_>) -> String;

    /// Returns the current implementation. [`Address::ZERO`] before the first
    /// upgrade.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    #[must_use]
    fn implementation(&self, ctx: &Context<'_>) -> Address;

    /// Replaces the implementation and the version label.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `version` - Label of the new version.
    /// * `implementation` - Address of the new implementation.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller is not allowed to upgrade under
    ///   the current [`UpgradeAuthority`].
    /// * [`Error::InvalidImplementation`] - If `implementation` is
    ///   [`Address::ZERO`] or the address of the contract itself.
    /// * [`Error::SameImplementation`] - If `implementation` is the current
    ///   implementation.
    ///
    /// # Events
    ///
    /// * [`Upgraded`].
    fn upgrade_to(
        &self,
        ctx: &mut Context<'_>,
        version: String,
        implementation: Address,
    ) -> Result<(), Self::Error>;

    /// Returns who may upgrade.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    #[must_use]
    fn upgrade_authority(&self, ctx: &Context<'_>) -> UpgradeAuthority;

    /// Changes who may upgrade. Can only be called by the owner.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `authority` - The new upgrade authority.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`UpgradeAuthorityChanged`].
    fn set_upgrade_authority(
        &self,
        ctx: &mut Context<'_>,
        authority: UpgradeAuthority,
    ) -> Result<(), Self::Error>;
}

impl UpgradeabilityStorage {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `initial_owner` - The initial owner of this contract.
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
        self.eternal.access.constructor(ctx, initial_owner)?;
        self._set_upgrade_authority(ctx, authority);
        Ok(())
    }

    /// Checks if the [`Context::msg_sender`] may upgrade.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has no access, or is not the
    ///   owner when upgrades are restricted to the owner.
    pub fn only_upgrader(&self, ctx: &Context<'_>) -> Result<(), Error> {
        match self.upgrade_authority(ctx) {
            UpgradeAuthority::Access => self.eternal.access.only_access(ctx)?,
            UpgradeAuthority::Owner => {
                self.eternal.access.ownable.only_owner(ctx)?;
            }
        }
        Ok(())
    }

    /// Sets the upgrade authority. Internal function without access
    /// restriction.
    ///
    /// # Events
    ///
    /// * [`UpgradeAuthorityChanged`].
    pub fn _set_upgrade_authority(
        &self,
        ctx: &mut Context<'_>,
        authority: UpgradeAuthority,
    ) {
        self.owner_only.set(ctx, authority == UpgradeAuthority::Owner);
        ctx.log(UpgradeAuthorityChanged { authority: authority.into() });
    }

    /// Handles calls of the [`UpgradeabilityAbi`] surface, then the access
    /// control surface. Calls of the key-value surface are left unhandled.
    pub fn dispatch(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        let call = match decode_call::<UpgradeabilityAbiCalls>(calldata) {
            Some(Ok(call)) => call,
            Some(Err(e)) => return Some(Err(e)),
            None => return self.eternal.access.dispatch(ctx, calldata),
        };
        Some(match call {
            UpgradeabilityAbiCalls::version(_) => {
                ok::<UpgradeabilityAbi::versionCall>(&self.version(ctx))
            }
            UpgradeabilityAbiCalls::implementation(_) => {
                ok::<UpgradeabilityAbi::implementationCall>(
                    &self.implementation(ctx),
                )
            }
            UpgradeabilityAbiCalls::upgradeTo(call) => {
                done(self.upgrade_to(ctx, call.version, call.implementation))
            }
            UpgradeabilityAbiCalls::upgradeAuthority(_) => {
                ok::<UpgradeabilityAbi::upgradeAuthorityCall>(&u8::from(
                    self.upgrade_authority(ctx),
                ))
            }
            UpgradeabilityAbiCalls::setUpgradeAuthority(call) => done(
                UpgradeAuthority::try_from(call.authority)
                    .and_then(|a| self.set_upgrade_authority(ctx, a)),
            ),
        })
    }
}

impl IUpgradeability for UpgradeabilityStorage {
    type Error = Error;

    fn version(&self, ctx: &Context<'_>) -> String {
        self.version.get_string(ctx)
    }

    fn implementation(&self, ctx: &Context<'_>) -> Address {
        self.implementation.get(ctx)
    }

    fn upgrade_to(
        &self,
        ctx: &mut Context<'_>,
        version: String,
        implementation: Address,
    ) -> Result<(), Error> {
        self.only_upgrader(ctx)?;

        if implementation.is_zero() || implementation == ctx.contract_address()
        {
            return Err(Error::InvalidImplementation(
                UpgradeabilityInvalidImplementation { implementation },
            ));
        }

        if self.implementation.get(ctx) == implementation {
            return Err(Error::SameImplementation(
                UpgradeabilitySameImplementation { implementation },
            ));
        }

        debug!(%implementation, %version, "upgrade");
        self.implementation.set(ctx, implementation);
        self.version.set_str(ctx, &version);
        ctx.log(Upgraded { version, implementation });

        Ok(())
    }

    fn upgrade_authority(&self, ctx: &Context<'_>) -> UpgradeAuthority {
        if self.owner_only.get(ctx) {
            UpgradeAuthority::Owner
        } else {
            UpgradeAuthority::Access
        }
    }

    fn set_upgrade_authority(
        &self,
        ctx: &mut Context<'_>,
        authority: UpgradeAuthority,
    ) -> Result<(), Error> {
        self.eternal.access.ownable.only_owner(ctx)?;
        self._set_upgrade_authority(ctx, authority);
        Ok(())
    }
}

impl IErc165 for UpgradeabilityStorage {
    fn supports_interface(&self, interface_id: B32) -> bool {
        erc165::interface_id::<UpgradeabilityAbiCalls>() == interface_id
            || self.eternal.supports_interface(interface_id)
    }
}

impl Router for UpgradeabilityStorage {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        erc165::route(self, calldata)
            .or_else(|| self.dispatch(ctx, calldata))
            .or_else(|| self.eternal.dispatch(ctx, calldata))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address};
    use alloy_sol_types::SolCall;

    use super::*;
    use crate::{
        access::{
            accessable::{AccessableUnauthorizedAccount, IAccessable},
            ownable,
        },
        host::{Contract, Host},
        storage::{abi::EternalStorageAbi, eternal_storage::IEternalStorage},
    };

    const OWNER: Address = Address::repeat_byte(0x0a);
    const AUTHORIZED: Address = Address::repeat_byte(0xa1);
    const UNAUTHORIZED: Address = Address::repeat_byte(0xb0);
    const IMPL_A: Address = Address::repeat_byte(0x1a);
    const IMPL_B: Address = Address::repeat_byte(0x1b);

    fn deploy(
        host: &mut Host,
        authority: UpgradeAuthority,
    ) -> Contract<UpgradeabilityStorage> {
        let contract = host
            .deploy_with(OWNER, UpgradeabilityStorage::default(), |c, ctx| {
                c.constructor(ctx, OWNER, authority)
            })
            .unwrap();
        contract
            .sender(host, OWNER)
            .exec(|c, ctx| c.eternal.access.grant_access(ctx, AUTHORIZED))
            .unwrap();
        contract
    }

    fn upgrade(
        host: &mut Host,
        contract: &Contract<UpgradeabilityStorage>,
        account: Address,
        version: &str,
        implementation: Address,
    ) -> Result<(), Error> {
        contract
            .sender(host, account)
            .exec(|c, ctx| c.upgrade_to(ctx, version.into(), implementation))
    }

    #[test]
    fn layout_extends_eternal_storage() {
        assert_eq!(UpgradeabilityStorage::SLOTS, 17);
    }

    #[test]
    fn starts_without_version_and_implementation() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        contract.sender(&mut host, UNAUTHORIZED).view(|c, ctx| {
            assert_eq!(c.version(ctx), "");
            assert_eq!(c.implementation(ctx), Address::ZERO);
            assert_eq!(c.upgrade_authority(ctx), UpgradeAuthority::Access);
        });
    }

    #[test]
    fn assigns_implementation() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A)
            .expect("should upgrade");

        contract.sender(&mut host, UNAUTHORIZED).view(|c, ctx| {
            assert_eq!(c.version(ctx), "v1");
            assert_eq!(c.implementation(ctx), IMPL_A);
        });
        assert!(host.emitted(
            contract.address(),
            &Upgraded { version: "v1".into(), implementation: IMPL_A }
        ));
    }

    #[test]
    fn updates_implementation() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);
        upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A).unwrap();

        upgrade(&mut host, &contract, AUTHORIZED, "v2", IMPL_B).unwrap();

        contract.sender(&mut host, UNAUTHORIZED).view(|c, ctx| {
            assert_eq!(c.version(ctx), "v2");
            assert_eq!(c.implementation(ctx), IMPL_B);
        });
    }

    #[test]
    fn prevents_assigning_same_implementation() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);
        upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A).unwrap();

        let err = upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::SameImplementation(
                UpgradeabilitySameImplementation { implementation }
            ) if implementation == IMPL_A
        ));
        assert_eq!(err.kind(), ErrorKind::NoOpUpgrade);
    }

    #[test]
    fn same_implementation_with_new_label_is_still_rejected() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);
        upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A).unwrap();

        let err = upgrade(&mut host, &contract, AUTHORIZED, "v2", IMPL_A)
            .unwrap_err();

        assert!(matches!(err, Error::SameImplementation(_)));
        let version = contract
            .sender(&mut host, UNAUTHORIZED)
            .view(|c, ctx| c.version(ctx));
        assert_eq!(version, "v1");
    }

    #[test]
    fn returning_to_a_previous_implementation_is_allowed() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);
        upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A).unwrap();
        upgrade(&mut host, &contract, AUTHORIZED, "v2", IMPL_B).unwrap();

        upgrade(&mut host, &contract, AUTHORIZED, "v3", IMPL_A).unwrap();

        let implementation = contract
            .sender(&mut host, UNAUTHORIZED)
            .view(|c, ctx| c.implementation(ctx));
        assert_eq!(implementation, IMPL_A);
    }

    #[test]
    fn prevents_assigning_null_address() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        let err =
            upgrade(&mut host, &contract, AUTHORIZED, "v1", Address::ZERO)
                .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidImplementation(
                UpgradeabilityInvalidImplementation { implementation }
            ) if implementation.is_zero()
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn prevents_assigning_own_address() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);
        let own = contract.address();

        let err = upgrade(&mut host, &contract, AUTHORIZED, "v1", own)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidImplementation(
                UpgradeabilityInvalidImplementation { implementation }
            ) if implementation == own
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let implementation = contract
            .sender(&mut host, OWNER)
            .view(|c, ctx| c.implementation(ctx));
        assert!(implementation.is_zero());
    }

    #[test]
    fn only_authorized_can_upgrade() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        let err = upgrade(&mut host, &contract, UNAUTHORIZED, "v1", IMPL_A)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Accessable(accessable::Error::UnauthorizedAccount(
                AccessableUnauthorizedAccount { account }
            )) if account == UNAUTHORIZED
        ));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        let implementation = contract
            .sender(&mut host, UNAUTHORIZED)
            .view(|c, ctx| c.implementation(ctx));
        assert_eq!(implementation, Address::ZERO);
    }

    #[test]
    fn authority_is_checked_before_arguments() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        let err =
            upgrade(&mut host, &contract, UNAUTHORIZED, "v1", Address::ZERO)
                .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn owner_authority_restricts_upgrades_to_owner() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Owner);

        let err = upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Accessable(accessable::Error::Ownable(
                ownable::Error::UnauthorizedAccount(_)
            ))
        ));

        upgrade(&mut host, &contract, OWNER, "v1", IMPL_A)
            .expect("owner should upgrade without access");
    }

    #[test]
    fn owner_changes_upgrade_authority() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        contract
            .sender(&mut host, OWNER)
            .exec(|c, ctx| {
                c.set_upgrade_authority(ctx, UpgradeAuthority::Owner)
            })
            .unwrap();

        let authority = contract
            .sender(&mut host, OWNER)
            .view(|c, ctx| c.upgrade_authority(ctx));
        assert_eq!(authority, UpgradeAuthority::Owner);
        assert!(host.emitted(
            contract.address(),
            &UpgradeAuthorityChanged { authority: 1 }
        ));
        let err = upgrade(&mut host, &contract, AUTHORIZED, "v1", IMPL_A)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn only_owner_changes_upgrade_authority() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        let err = contract
            .sender(&mut host, AUTHORIZED)
            .exec(|c, ctx| {
                c.set_upgrade_authority(ctx, UpgradeAuthority::Owner)
            })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn rejects_unknown_authority_discriminant() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        let err = contract
            .sender(&mut host, OWNER)
            .call(
                &UpgradeabilityAbi::setUpgradeAuthorityCall { authority: 7 }
                    .abi_encode(),
            )
            .unwrap_err();

        assert_eq!(
            err,
            UpgradeabilityInvalidAuthority { authority: 7 }.abi_encode()
        );
        assert!(matches!(
            UpgradeAuthority::try_from(2),
            Err(Error::InvalidAuthority(_))
        ));
    }

    #[test]
    fn routes_management_and_storage_calls() {
        let mut host = Host::new();
        let contract = deploy(&mut host, UpgradeAuthority::Access);

        contract
            .sender(&mut host, AUTHORIZED)
            .call(
                &UpgradeabilityAbi::upgradeToCall {
                    version: "0".into(),
                    implementation: IMPL_A,
                }
                .abi_encode(),
            )
            .unwrap();
        let output = contract
            .sender(&mut host, UNAUTHORIZED)
            .call(&UpgradeabilityAbi::versionCall {}.abi_encode())
            .unwrap();
        assert_eq!(
            UpgradeabilityAbi::versionCall::abi_decode_returns(&output)
                .unwrap(),
            "0"
        );

        contract
            .sender(&mut host, AUTHORIZED)
            .call(
                &EternalStorageAbi::setUintCall {
                    key: "limit".into(),
                    value: uint!(42_U256),
                }
                .abi_encode(),
            )
            .unwrap();
        let value = contract
            .sender(&mut host, UNAUTHORIZED)
            .view(|c, ctx| c.eternal.get_uint(ctx, "limit"))
            .unwrap();
        assert_eq!(value, uint!(42_U256));
    }

    #[test]
    fn supports_interface() {
        let storage = UpgradeabilityStorage::default();

        let interface_id = erc165::interface_id::<UpgradeabilityAbiCalls>();
        assert!(storage.supports_interface(interface_id));
        assert!(storage.supports_interface(erc165::Erc165::INTERFACE_ID));
    }
}
