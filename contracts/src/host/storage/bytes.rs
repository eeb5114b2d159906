use alloy_primitives::{keccak256, Bytes, U256};

use super::{from_word, word, StorageType, StorageValue};
use crate::host::Context;

/// Accessor for storage-backed bytes.
///
/// Follows the Solidity byte array layout. Up to 31 bytes are kept inline
/// in the root slot, left aligned, with `2 * len` in the lowest byte. Longer
/// arrays store `2 * len + 1` in the root slot and their contents in words
/// starting at `keccak256(root)`.
#[derive(Debug, Clone, Copy)]
pub struct StorageBytes {
    root: U256,
}

impl StorageType for StorageBytes {
    fn new(slot: U256) -> Self {
        Self { root: slot }
    }
}

impl StorageBytes {
    /// Number of bytes stored.
    #[must_use]
    pub fn len(&self, ctx: &Context<'_>) -> usize {
        let header = ctx.load(self.root);
        if header.bit(0) {
            let len = header >> 1usize;
            usize::try_from(len).unwrap_or(usize::MAX)
        } else {
            // Inline arrays hold at most 31 bytes. A longer length can only
            // come from a slot that was never written as bytes.
            let len = usize::from(header.byte(0) / 2);
            if len < 32 {
                len
            } else {
                0
            }
        }
    }

    /// Returns whether no bytes are stored.
    #[must_use]
    pub fn is_empty(&self, ctx: &Context<'_>) -> bool {
        self.len(ctx) == 0
    }

    fn data_slot(&self) -> U256 {
        from_word(keccak256(self.root.to_be_bytes::<32>()))
    }

    fn words(len: usize) -> usize {
        len.div_ceil(32)
    }

    /// Reads the stored bytes.
    #[must_use]
    pub fn get_bytes(&self, ctx: &Context<'_>) -> Vec<u8> {
        let header = ctx.load(self.root);
        let len = self.len(ctx);
        if !header.bit(0) {
            return word(header)
                .as_slice()
                .get(..len)
                .map(<[u8]>::to_vec)
                .unwrap_or_default();
        }

        let base = self.data_slot();
        let mut data = Vec::with_capacity(Self::words(len) * 32);
        for index in 0..Self::words(len) {
            let chunk = word(ctx.load(base + U256::from(index)));
            data.extend_from_slice(chunk.as_slice());
        }
        data.truncate(len);
        data
    }

    /// Overwrites the stored bytes with `value`.
    pub fn set_bytes(&self, ctx: &mut Context<'_>, value: impl AsRef<[u8]>) {
        self.erase(ctx);
        let value = value.as_ref();
        let len = value.len();
        if len < 32 {
            let mut inline = [0u8; 32];
            inline[..len].copy_from_slice(value);
            #[allow(clippy::cast_possible_truncation)]
            {
                inline[31] = (len * 2) as u8;
            }
            ctx.store(self.root, U256::from_be_bytes(inline));
            return;
        }

        ctx.store(self.root, U256::from(len) * U256::from(2) + U256::from(1));
        let base = self.data_slot();
        for (index, chunk) in value.chunks(32).enumerate() {
            let mut padded = [0u8; 32];
            padded[..chunk.len()].copy_from_slice(chunk);
            ctx.store(base + U256::from(index), U256::from_be_bytes(padded));
        }
    }
}

impl StorageValue for StorageBytes {
    type Value = Bytes;

    fn get(&self, ctx: &Context<'_>) -> Bytes {
        self.get_bytes(ctx).into()
    }

    fn set(&self, ctx: &mut Context<'_>, value: Bytes) {
        self.set_bytes(ctx, value);
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        let header = ctx.load(self.root);
        if header.bit(0) {
            let base = self.data_slot();
            for index in 0..Self::words(self.len(ctx)) {
                ctx.store(base + U256::from(index), U256::ZERO);
            }
        }
        ctx.store(self.root, U256::ZERO);
    }
}

/// Accessor for a storage-backed UTF-8 string, laid out like
/// [`StorageBytes`].
#[derive(Debug, Clone, Copy)]
pub struct StorageString(StorageBytes);

impl StorageType for StorageString {
    fn new(slot: U256) -> Self {
        Self(StorageBytes::new(slot))
    }
}

impl StorageString {
    /// Reads the stored string. Invalid UTF-8 is replaced with
    /// `U+FFFD`.
    #[must_use]
    pub fn get_string(&self, ctx: &Context<'_>) -> String {
        String::from_utf8_lossy(&self.0.get_bytes(ctx)).into_owned()
    }

    /// Overwrites the stored string with `value`.
    pub fn set_str(&self, ctx: &mut Context<'_>, value: impl AsRef<str>) {
        self.0.set_bytes(ctx, value.as_ref());
    }
}

impl StorageValue for StorageString {
    type Value = String;

    fn get(&self, ctx: &Context<'_>) -> String {
        self.get_string(ctx)
    }

    fn set(&self, ctx: &mut Context<'_>, value: String) {
        self.set_str(ctx, value);
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        self.0.erase(ctx);
    }
}
