//! Slot-addressed accessors for persistent storage.
//!
//! Accessors hold only their slot. Values are read and written through a
//! [`Context`], so one layout value describes the storage of every account
//! that runs the same code.
use alloy_primitives::{Address, B256, I256, U256};

use crate::host::Context;

pub use bytes::{StorageBytes, StorageString};
pub use map::{StorageKey, StorageMap};

mod bytes;
mod map;

/// A type that lives at a fixed position of the storage layout.
pub trait StorageType: Sized {
    /// Number of consecutive slots the type occupies.
    const SLOTS: usize = 1;

    /// Binds the type to the layout starting at `slot`.
    fn new(slot: U256) -> Self;
}

/// An accessor that reads and writes a single value.
pub trait StorageValue: StorageType {
    /// Value stored by the accessor.
    type Value;

    /// Reads the value. Unwritten storage reads as the zero value.
    fn get(&self, ctx: &Context<'_>) -> Self::Value;

    /// Writes `value`.
    fn set(&self, ctx: &mut Context<'_>, value: Self::Value);

    /// Resets the storage to its zero representation.
    fn erase(&self, ctx: &mut Context<'_>);
}

/// Hands out consecutive slots to the fields of a contract, in declaration
/// order.
#[derive(Debug)]
pub struct Layout {
    next: U256,
}

impl Layout {
    /// Starts a layout at `slot`.
    #[must_use]
    pub fn at(slot: U256) -> Self {
        Self { next: slot }
    }

    /// Binds the next field.
    pub fn field<T: StorageType>(&mut self) -> T {
        let field = T::new(self.next);
        self.next += U256::from(T::SLOTS);
        field
    }
}

pub(crate) fn word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}

pub(crate) fn from_word(word: B256) -> U256 {
    U256::from_be_bytes(word.0)
}

/// Accessor for a storage-backed [`Address`].
#[derive(Debug, Clone, Copy)]
pub struct StorageAddress {
    slot: U256,
}

impl StorageType for StorageAddress {
    fn new(slot: U256) -> Self {
        Self { slot }
    }
}

impl StorageValue for StorageAddress {
    type Value = Address;

    fn get(&self, ctx: &Context<'_>) -> Address {
        Address::from_word(word(ctx.load(self.slot)))
    }

    fn set(&self, ctx: &mut Context<'_>, value: Address) {
        ctx.store(self.slot, from_word(value.into_word()));
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        ctx.store(self.slot, U256::ZERO);
    }
}

/// Accessor for a storage-backed `bool`.
#[derive(Debug, Clone, Copy)]
pub struct StorageBool {
    slot: U256,
}

impl StorageType for StorageBool {
    fn new(slot: U256) -> Self {
        Self { slot }
    }
}

impl StorageValue for StorageBool {
    type Value = bool;

    fn get(&self, ctx: &Context<'_>) -> bool {
        !ctx.load(self.slot).is_zero()
    }

    fn set(&self, ctx: &mut Context<'_>, value: bool) {
        ctx.store(self.slot, U256::from(u8::from(value)));
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        ctx.store(self.slot, U256::ZERO);
    }
}

/// Accessor for a storage-backed [`U256`].
#[derive(Debug, Clone, Copy)]
pub struct StorageU256 {
    slot: U256,
}

impl StorageType for StorageU256 {
    fn new(slot: U256) -> Self {
        Self { slot }
    }
}

impl StorageValue for StorageU256 {
    type Value = U256;

    fn get(&self, ctx: &Context<'_>) -> U256 {
        ctx.load(self.slot)
    }

    fn set(&self, ctx: &mut Context<'_>, value: U256) {
        ctx.store(self.slot, value);
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        ctx.store(self.slot, U256::ZERO);
    }
}

/// Accessor for a storage-backed [`I256`], kept in two's complement.
#[derive(Debug, Clone, Copy)]
pub struct StorageI256 {
    slot: U256,
}

impl StorageType for StorageI256 {
    fn new(slot: U256) -> Self {
        Self { slot }
    }
}

impl StorageValue for StorageI256 {
    type Value = I256;

    fn get(&self, ctx: &Context<'_>) -> I256 {
        I256::from_raw(ctx.load(self.slot))
    }

    fn set(&self, ctx: &mut Context<'_>, value: I256) {
        ctx.store(self.slot, value.into_raw());
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        ctx.store(self.slot, U256::ZERO);
    }
}
