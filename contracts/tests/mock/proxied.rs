use alloy_primitives::{uint, U256};
use alloy_sol_macro::sol;
use eternal_contracts::{
    host::{
        decode_call, done, ok,
        storage::{Layout, StorageType, StorageU256, StorageValue},
        ArbResult, Context, Router,
    },
    proxy::upgradeability::UpgradeabilityStorage,
};

sol! {
    interface ProxiedAbi {
        function setValue(uint256 value) external;
        function getValue() external view returns (uint256);
    }
}

use ProxiedAbi::ProxiedAbiCalls;

/// First version: stores and returns a single value.
pub struct ProxiedV0 {
    pub storage: UpgradeabilityStorage,
    value: StorageU256,
}

/// Second version: same layout, reports the stored value doubled.
pub struct ProxiedV1 {
    pub storage: UpgradeabilityStorage,
    value: StorageU256,
}

macro_rules! proxied_layout {
    ($name:ident) => {
        impl StorageType for $name {
            const SLOTS: usize = UpgradeabilityStorage::SLOTS + 1;

            fn new(slot: U256) -> Self {
                let mut layout = Layout::at(slot);
                Self { storage: layout.field(), value: layout.field() }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(U256::ZERO)
            }
        }
    };
}

proxied_layout!(ProxiedV0);
proxied_layout!(ProxiedV1);

fn route_value(
    value: &StorageU256,
    ctx: &mut Context<'_>,
    calldata: &[u8],
    scale: U256,
) -> Option<ArbResult> {
    let call = match decode_call::<ProxiedAbiCalls>(calldata)? {
        Ok(call) => call,
        Err(e) => return Some(Err(e)),
    };
    Some(match call {
        ProxiedAbiCalls::setValue(call) => {
            value.set(ctx, call.value);
            done::<Vec<u8>>(Ok(()))
        }
        ProxiedAbiCalls::getValue(_) => {
            ok::<ProxiedAbi::getValueCall>(&(value.get(ctx) * scale))
        }
    })
}

impl Router for ProxiedV0 {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        route_value(&self.value, ctx, calldata, uint!(1_U256))
    }
}

impl Router for ProxiedV1 {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        route_value(&self.value, ctx, calldata, uint!(2_U256))
    }
}
