//! Typed key-value storage that outlives the logic using it.
//!
//! Values are grouped in six independent namespaces, one per [`ValueKind`].
//! Each namespace keeps a value map and a presence map keyed by the text key,
//! so a stored zero value is distinguishable from a missing one.
//!
//! Reads are open to everyone. Writes and deletions require the caller to be
//! granted access through the embedded [`Accessable`] contract.
//!
//! The storage layout of [`EternalStorage`] starts at slot zero and is a prefix
//! of [`crate::proxy::upgradeability::UpgradeabilityStorage`], so an
//! [`EternalStorage`] deployment can serve as the implementation behind an
//! [`crate::proxy::upgradeability_proxy::UpgradeabilityProxy`].
use alloy_primitives::{aliases::B32, Address, Bytes, I256, U256};
use alloy_sol_types::SolError;
pub use sol::*;

use crate::{
    access::accessable::{self, Accessable},
    error::ErrorKind,
    host::{
        decode_call, done, ok, returns,
        storage::{
            Layout, StorageAddress, StorageBool, StorageBytes, StorageI256,
            StorageMap, StorageString, StorageType, StorageU256, StorageValue,
        },
        ArbResult, Context, Router,
    },
    storage::abi::EternalStorageAbi::{self, EternalStorageAbiCalls},
    utils::introspection::erc165::{self, IErc165},
};

mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when a value is stored under `key`.
        ///
        /// * `kind` - Discriminant of the value kind.
        /// * `key` - Key the value was stored under.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ValueSet(uint8 kind, string key);
        /// Emitted when the value under `key` is deleted.
        ///
        /// * `kind` - Discriminant of the value kind.
        /// * `key` - Key of the deleted value.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ValueDeleted(uint8 kind, string key);
    }

    sol! {
        /// No value of kind `kind` is stored under `key`.
        ///
        /// * `kind` - Discriminant of the value kind.
        /// * `key` - The missing key.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error EternalStorageMissingValue(uint8 kind, string key);
    }
}

/// Kind of a stored value. The discriminant is the one reported by events
/// and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    /// `bool`.
    Bool = 0,
    /// Signed 256-bit integer.
    Int = 1,
    /// Unsigned 256-bit integer.
    Uint = 2,
    /// UTF-8 string.
    String = 3,
    /// Account address.
    Address = 4,
    /// Raw bytes.
    Bytes = 5,
}

impl From<ValueKind> for u8 {
    fn from(kind: ValueKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => ValueKind::Bool,
            1 => ValueKind::Int,
            2 => ValueKind::Uint,
            3 => ValueKind::String,
            4 => ValueKind::Address,
            5 => ValueKind::Bytes,
            other => return Err(other),
        })
    }
}

/// An error that occurred in the implementation of an [`EternalStorage`]
/// contract.
#[derive(Debug)]
pub enum Error {
    /// No value of the requested kind is stored under the key.
    MissingValue(EternalStorageMissingValue),
    /// Error type from [`Accessable`] contract [`accessable::Error`].
    Accessable(accessable::Error),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingValue(_) => ErrorKind::NotFound,
            Error::Accessable(e) => e.kind(),
        }
    }

    fn missing(kind: ValueKind, key: &str) -> Self {
        Error::MissingValue(EternalStorageMissingValue {
            kind: kind.into(),
            key: key.to_owned(),
        })
    }
}

impl From<accessable::Error> for Error {
    fn from(value: accessable::Error) -> Self {
        Error::Accessable(value)
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::MissingValue(e) => e.abi_encode(),
            Error::Accessable(e) => e.into(),
        }
    }
}

/// One namespace of values: the values themselves plus whether each key is
/// present.
#[derive(Debug)]
pub struct Cells<V> {
    values: StorageMap<str, V>,
    present: StorageMap<str, StorageBool>,
}

impl<V> StorageType for Cells<V> {
    const SLOTS: usize = 2;

    fn new(slot: U256) -> Self {
        let mut layout = Layout::at(slot);
        Self { values: layout.field(), present: layout.field() }
    }
}

impl<V: StorageValue> Cells<V> {
    /// Returns whether a value is stored under `key`.
    pub fn contains(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.present.getter(key).get(ctx)
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, ctx: &Context<'_>, key: &str) -> Option<V::Value> {
        self.contains(ctx, key).then(|| self.values.getter(key).get(ctx))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&self, ctx: &mut Context<'_>, key: &str, value: V::Value) {
        self.values.setter(key).set(ctx, value);
        self.present.setter(key).set(ctx, true);
    }

    /// Removes the value under `key`, returning whether one was stored.
    pub fn remove(&self, ctx: &mut Context<'_>, key: &str) -> bool {
        if !self.contains(ctx, key) {
            return false;
        }
        self.values.setter(key).erase(ctx);
        self.present.setter(key).erase(ctx);
        true
    }
}

/// State of an [`EternalStorage`] contract.
#[derive(Debug)]
pub struct EternalStorage {
    /// [`Accessable`] contract gating mutations.
    pub access: Accessable,
    bools: Cells<StorageBool>,
    ints: Cells<StorageI256>,
    uints: Cells<StorageU256>,
    strings: Cells<StorageString>,
    addresses: Cells<StorageAddress>,
    bytes: Cells<StorageBytes>,
}

impl StorageType for EternalStorage {
    const SLOTS: usize = Accessable::SLOTS + 6 * 2;

    fn new(slot: U256) -> Self {
        let mut layout = Layout::at(slot);
        Self {
            access: layout.field(),
            bools: layout.field(),
            ints: layout.field(),
            uints: layout.field(),
            strings: layout.field(),
            addresses: layout.field(),
            bytes: layout.field(),
        }
    }
}

impl Default for EternalStorage {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

/// Interface for an [`EternalStorage`] contract.
///
/// Every value kind offers the same four operations: get, set, has and
/// delete. Access is checked before presence, so an unauthorized delete of a
/// missing key fails with [`Error::Accessable`].
pub trait IEternalStorage {
    /// The error type associated to the trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns the `bool` stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no `bool` is stored under `key`.
    fn get_bool(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<bool, Self::Error>;

    /// Stores a `bool` under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::Bool`].
    fn set_bool(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: bool,
    ) -> Result<(), Self::Error>;

    /// Returns whether a `bool` is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_bool(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the `bool` stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no `bool` is stored under `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::Bool`].
    fn delete_bool(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;

    /// Returns the signed integer stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no signed integer is stored under `key`.
    fn get_int(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<I256, Self::Error>;

    /// Stores a signed integer under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::Int`].
    fn set_int(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: I256,
    ) -> Result<(), Self::Error>;

    /// Returns whether a signed integer is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_int(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the signed integer stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no signed integer is stored under `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::Int`].
    fn delete_int(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;

    /// Returns the unsigned integer stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no unsigned integer is stored under
    ///   `key`.
    fn get_uint(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<U256, Self::Error>;

    /// Stores an unsigned integer under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::Uint`].
    fn set_uint(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Returns whether an unsigned integer is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_uint(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the unsigned integer stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no unsigned integer is stored under
    ///   `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::Uint`].
    fn delete_uint(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;

    /// Returns the string stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no string is stored under `key`.
    fn get_string(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<String, Self::Error>;

    /// Stores a string under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::String`].
    fn set_string(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: String,
    ) -> Result<(), Self::Error>;

    /// Returns whether a string is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_string(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the string stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no string is stored under `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::String`].
    fn delete_string(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;

    /// Returns the address stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no address is stored under `key`.
    fn get_address(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<Address, Self::Error>;

    /// Stores an address under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::Address`].
    fn set_address(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: Address,
    ) -> Result<(), Self::Error>;

    /// Returns whether an address is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_address(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the address stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no address is stored under `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::Address`].
    fn delete_address(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;

    /// Returns the byte array stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key the value was stored under.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingValue`] - If no byte array is stored under `key`.
    fn get_bytes(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<Bytes, Self::Error>;

    /// Stores a byte array under `key`, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key to store the value under.
    /// * `value` - The value to store.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    ///
    /// # Events
    ///
    /// * [`ValueSet`] with kind [`ValueKind::Bytes`].
    fn set_bytes(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: Bytes,
    ) -> Result<(), Self::Error>;

    /// Returns whether a byte array is stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Read access to the contract's state.
    /// * `key` - Key to look up.
    #[must_use]
    fn has_bytes(&self, ctx: &Context<'_>, key: &str) -> bool;

    /// Removes the byte array stored under `key` and resets its storage.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `ctx` - Write access to the contract's state.
    /// * `key` - Key of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If the caller has not been granted access.
    /// * [`Error::MissingValue`] - If no byte array is stored under `key`.
    ///
    /// # Events
    ///
    /// * [`ValueDeleted`] with kind [`ValueKind::Bytes`].
    fn delete_bytes(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Self::Error>;
}

impl EternalStorage {
    /// Constructor. Sets `initial_owner` as the owner of the access list.
    ///
    /// # Errors
    ///
    /// * [`Error::Accessable`] - If `initial_owner` is [`Address::ZERO`].
    pub fn constructor(
        &self,
        ctx: &mut Context<'_>,
        initial_owner: Address,
    ) -> Result<(), Error> {
        Ok(self.access.constructor(ctx, initial_owner)?)
    }

    fn read<V: StorageValue>(
        cells: &Cells<V>,
        ctx: &Context<'_>,
        kind: ValueKind,
        key: &str,
    ) -> Result<V::Value, Error> {
        cells.get(ctx, key).ok_or_else(|| Error::missing(kind, key))
    }

    fn write<V: StorageValue>(
        &self,
        cells: &Cells<V>,
        ctx: &mut Context<'_>,
        kind: ValueKind,
        key: &str,
        value: V::Value,
    ) -> Result<(), Error> {
        self.access.only_access(ctx)?;
        cells.insert(ctx, key, value);
        ctx.log(ValueSet { kind: kind.into(), key: key.to_owned() });
        Ok(())
    }

    fn delete<V: StorageValue>(
        &self,
        cells: &Cells<V>,
        ctx: &mut Context<'_>,
        kind: ValueKind,
        key: &str,
    ) -> Result<(), Error> {
        self.access.only_access(ctx)?;
        if !cells.remove(ctx, key) {
            return Err(Error::missing(kind, key));
        }
        ctx.log(ValueDeleted { kind: kind.into(), key: key.to_owned() });
        Ok(())
    }

    /// Handles calls of the [`EternalStorageAbi`] surface, then those of the
    /// embedded [`Accessable`] contract.
    pub fn dispatch(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        use EternalStorageAbi as abi;
        use EternalStorageAbiCalls as Call;

        let call = match decode_call::<EternalStorageAbiCalls>(calldata) {
            Some(Ok(call)) => call,
            Some(Err(e)) => return Some(Err(e)),
            None => return self.access.dispatch(ctx, calldata),
        };
        Some(match call {
            Call::getBool(c) => {
                returns::<abi::getBoolCall, _>(self.get_bool(ctx, &c.key))
            }
            Call::setBool(c) => done(self.set_bool(ctx, &c.key, c.value)),
            Call::hasBool(c) => {
                ok::<abi::hasBoolCall>(&self.has_bool(ctx, &c.key))
            }
            Call::deleteBool(c) => done(self.delete_bool(ctx, &c.key)),

            Call::getInt(c) => {
                returns::<abi::getIntCall, _>(self.get_int(ctx, &c.key))
            }
            Call::setInt(c) => done(self.set_int(ctx, &c.key, c.value)),
            Call::hasInt(c) => {
                ok::<abi::hasIntCall>(&self.has_int(ctx, &c.key))
            }
            Call::deleteInt(c) => done(self.delete_int(ctx, &c.key)),

            Call::getUint(c) => {
                returns::<abi::getUintCall, _>(self.get_uint(ctx, &c.key))
            }
            Call::setUint(c) => done(self.set_uint(ctx, &c.key, c.value)),
            Call::hasUint(c) => {
                ok::<abi::hasUintCall>(&self.has_uint(ctx, &c.key))
            }
            Call::deleteUint(c) => done(self.delete_uint(ctx, &c.key)),

            Call::getString(c) => {
                returns::<abi::getStringCall, _>(self.get_string(ctx, &c.key))
            }
            Call::setString(c) => done(self.set_string(ctx, &c.key, c.value)),
            Call::hasString(c) => {
                ok::<abi::hasStringCall>(&self.has_string(ctx, &c.key))
            }
            Call::deleteString(c) => done(self.delete_string(ctx, &c.key)),

            Call::getAddress(c) => {
                returns::<abi::getAddressCall, _>(self.get_address(ctx, &c.key))
            }
            Call::setAddress(c) => done(self.set_address(ctx, &c.key, c.value)),
            Call::hasAddress(c) => {
                ok::<abi::hasAddressCall>(&self.has_address(ctx, &c.key))
            }
            Call::deleteAddress(c) => done(self.delete_address(ctx, &c.key)),

            Call::getBytes(c) => {
                returns::<abi::getBytesCall, _>(self.get_bytes(ctx, &c.key))
            }
            Call::setBytes(c) => done(self.set_bytes(ctx, &c.key, c.value)),
            Call::hasBytes(c) => {
                ok::<abi::hasBytesCall>(&self.has_bytes(ctx, &c.key))
            }
            Call::deleteBytes(c) => done(self.delete_bytes(ctx, &c.key)),
        })
    }
}

impl IEternalStorage for EternalStorage {
    type Error = Error;

    fn get_bool(&self, ctx: &Context<'_>, key: &str) -> Result<bool, Error> {
        Self::read(&self.bools, ctx, ValueKind::Bool, key)
    }

    fn set_bool(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: bool,
    ) -> Result<(), Error> {
        self.write(&self.bools, ctx, ValueKind::Bool, key, value)
    }

    fn has_bool(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.bools.contains(ctx, key)
    }

    fn delete_bool(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.bools, ctx, ValueKind::Bool, key)
    }

    fn get_int(&self, ctx: &Context<'_>, key: &str) -> Result<I256, Error> {
        Self::read(&self.ints, ctx, ValueKind::Int, key)
    }

    fn set_int(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: I256,
    ) -> Result<(), Error> {
        self.write(&self.ints, ctx, ValueKind::Int, key, value)
    }

    fn has_int(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.ints.contains(ctx, key)
    }

    fn delete_int(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.ints, ctx, ValueKind::Int, key)
    }

    fn get_uint(&self, ctx: &Context<'_>, key: &str) -> Result<U256, Error> {
        Self::read(&self.uints, ctx, ValueKind::Uint, key)
    }

    fn set_uint(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: U256,
    ) -> Result<(), Error> {
        self.write(&self.uints, ctx, ValueKind::Uint, key, value)
    }

    fn has_uint(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.uints.contains(ctx, key)
    }

    fn delete_uint(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.uints, ctx, ValueKind::Uint, key)
    }

    fn get_string(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<String, Error> {
        Self::read(&self.strings, ctx, ValueKind::String, key)
    }

    fn set_string(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: String,
    ) -> Result<(), Error> {
        self.write(&self.strings, ctx, ValueKind::String, key, value)
    }

    fn has_string(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.strings.contains(ctx, key)
    }

    fn delete_string(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.strings, ctx, ValueKind::String, key)
    }

    fn get_address(
        &self,
        ctx: &Context<'_>,
        key: &str,
    ) -> Result<Address, Error> {
        Self::read(&self.addresses, ctx, ValueKind::Address, key)
    }

    fn set_address(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: Address,
    ) -> Result<(), Error> {
        self.write(&self.addresses, ctx, ValueKind::Address, key, value)
    }

    fn has_address(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.addresses.contains(ctx, key)
    }

    fn delete_address(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.addresses, ctx, ValueKind::Address, key)
    }

    fn get_bytes(&self, ctx: &Context<'_>, key: &str) -> Result<Bytes, Error> {
        Self::read(&self.bytes, ctx, ValueKind::Bytes, key)
    }

    fn set_bytes(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
        value: Bytes,
    ) -> Result<(), Error> {
        self.write(&self.bytes, ctx, ValueKind::Bytes, key, value)
    }

    fn has_bytes(&self, ctx: &Context<'_>, key: &str) -> bool {
        self.bytes.contains(ctx, key)
    }

    fn delete_bytes(
        &self,
        ctx: &mut Context<'_>,
        key: &str,
    ) -> Result<(), Error> {
        self.delete(&self.bytes, ctx, ValueKind::Bytes, key)
    }
}

impl IErc165 for EternalStorage {
    fn supports_interface(&self, interface_id: B32) -> bool {
        erc165::interface_id::<EternalStorageAbiCalls>() == interface_id
            || self.access.supports_interface(interface_id)
    }
}

impl Router for EternalStorage {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        erc165::route(self, calldata).or_else(|| self.dispatch(ctx, calldata))
    }
}
