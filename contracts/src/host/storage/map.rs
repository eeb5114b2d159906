use std::marker::PhantomData;

use alloy_primitives::{keccak256, Address, B256, U256};

use super::{from_word, StorageType};

/// A key of a [`StorageMap`].
///
/// Entries live at `keccak256(encode(key) ‖ root)`, the Solidity mapping
/// rule, where value types are padded to a word and strings contribute
/// their raw bytes.
pub trait StorageKey {
    /// Computes the slot of this key in the map rooted at `root`.
    fn to_slot(&self, root: U256) -> U256;
}

fn hash_with_root(key: &[u8], root: U256) -> U256 {
    let mut preimage = Vec::with_capacity(key.len() + 32);
    preimage.extend_from_slice(key);
    preimage.extend_from_slice(&root.to_be_bytes::<32>());
    from_word(keccak256(preimage))
}

impl StorageKey for Address {
    fn to_slot(&self, root: U256) -> U256 {
        hash_with_root(self.into_word().as_slice(), root)
    }
}

impl StorageKey for B256 {
    fn to_slot(&self, root: U256) -> U256 {
        hash_with_root(self.as_slice(), root)
    }
}

impl StorageKey for U256 {
    fn to_slot(&self, root: U256) -> U256 {
        hash_with_root(&self.to_be_bytes::<32>(), root)
    }
}

impl StorageKey for str {
    fn to_slot(&self, root: U256) -> U256 {
        hash_with_root(self.as_bytes(), root)
    }
}

impl StorageKey for String {
    fn to_slot(&self, root: U256) -> U256 {
        self.as_str().to_slot(root)
    }
}

/// Accessor for a storage-backed mapping from `K` to `V`.
#[derive(Debug)]
pub struct StorageMap<K: ?Sized, V> {
    slot: U256,
    marker: PhantomData<fn(&K) -> V>,
}

impl<K: ?Sized, V> Clone for StorageMap<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized, V> Copy for StorageMap<K, V> {}

impl<K: ?Sized, V> StorageType for StorageMap<K, V> {
    fn new(slot: U256) -> Self {
        Self { slot, marker: PhantomData }
    }
}

impl<K, V> StorageMap<K, V>
where
    K: StorageKey + ?Sized,
    V: StorageType,
{
    /// Root slot of the map.
    #[must_use]
    pub fn slot(&self) -> U256 {
        self.slot
    }

    /// Returns the accessor of the entry for `key`, for reading.
    pub fn getter(&self, key: &K) -> V {
        V::new(key.to_slot(self.slot))
    }

    /// Returns the accessor of the entry for `key`, for writing.
    ///
    /// Binds the same slot as [`Self::getter`]. Writes still go through the
    /// [`crate::host::Context`] passed to the accessor.
    pub fn setter(&self, key: &K) -> V {
        self.getter(key)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256, uint, Address, U256};

    use super::*;
    use crate::host::{
        storage::{StorageBool, StorageValue},
        Host,
    };

    #[test]
    fn address_keys_follow_solidity_mapping_slots() {
        // keccak256(abi.encode(address(1), uint256(0)))
        let expected = b256!(
            "ada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d"
        );
        let slot = address!("0000000000000000000000000000000000000001")
            .to_slot(U256::ZERO);

        assert_eq!(slot, from_word(expected));
    }

    #[test]
    fn entries_are_independent() {
        let mut host = Host::new();
        let account = Address::repeat_byte(0x11);
        let map = StorageMap::<str, StorageBool>::new(uint!(3_U256));

        host.execute(Address::ZERO, account, |ctx| {
            map.setter("a").set(ctx, true);
            Ok::<_, ()>(())
        })
        .unwrap();

        host.view(account, |ctx| {
            assert!(map.getter("a").get(ctx));
            assert!(!map.getter("b").get(ctx));
            assert!(!map.getter("").get(ctx));
        });
    }

    #[test]
    fn setter_and_getter_bind_the_same_slot() {
        let mut host = Host::new();
        let account = Address::repeat_byte(0x11);
        let map = StorageMap::<Address, StorageBool>::new(uint!(5_U256));
        let key = Address::repeat_byte(0x22);

        host.execute(Address::ZERO, account, |ctx| {
            map.setter(&key).set(ctx, true);
            Ok::<_, ()>(())
        })
        .unwrap();

        assert_eq!(
            host.storage_at(account, key.to_slot(uint!(5_U256))),
            U256::from(1)
        );
        host.view(account, |ctx| assert!(map.getter(&key).get(ctx)));
    }

    #[test]
    fn same_key_under_different_roots_differs() {
        assert_ne!("key".to_slot(U256::ZERO), "key".to_slot(uint!(1_U256)));
    }
}
