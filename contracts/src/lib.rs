/*!
# Eternal Contracts

Typed persistent storage, access control and upgradeable proxies for
contracts that run on an EVM-like in-process host.

- [`storage::EternalStorage`] keeps values of six kinds under string keys and
  tracks, per kind, whether a key has ever been written.
- [`access::Ownable`] and [`access::Accessable`] gate mutations behind a
  single owner and an owner-managed access list.
- [`proxy::upgradeability_proxy::UpgradeabilityProxy`] forwards every call
  it does not manage to a replaceable implementation by delegated execution,
  so state written through the proxy survives upgrades.

## Usage

Contracts are storage layouts. Deploy them on a [`host::Host`] and send
calls either as typed operations or as ABI-encoded calldata:

```
use alloy_primitives::{uint, Address};
use alloy_sol_types::SolCall;
use eternal_contracts::{
    access::IAccessable,
    host::Host,
    proxy::{
        abi::UpgradeabilityAbi,
        upgradeability::UpgradeAuthority,
        upgradeability_proxy::UpgradeabilityProxy,
    },
    storage::{abi::EternalStorageAbi, EternalStorage},
};

let owner = Address::repeat_byte(0x01);
let mut host = Host::new();

let implementation = host.deploy(owner, EternalStorage::default());
let proxy = host
    .deploy_with(owner, UpgradeabilityProxy::default(), |c, ctx| {
        c.constructor(ctx, owner, UpgradeAuthority::Access)
    })
    .unwrap();

proxy
    .sender(&mut host, owner)
    .exec(|c, ctx| c.storage.eternal.access.grant_access(ctx, owner))
    .unwrap();
proxy
    .sender(&mut host, owner)
    .call(
        &UpgradeabilityAbi::upgradeToCall {
            version: "0".into(),
            implementation: implementation.address(),
        }
        .abi_encode(),
    )
    .unwrap();

let set = EternalStorageAbi::setUintCall {
    key: "limit".into(),
    value: uint!(42_U256),
};
proxy.sender(&mut host, owner).call(&set.abi_encode()).unwrap();
```
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod access;
pub mod error;
pub mod host;
pub mod proxy;
pub mod storage;
pub mod utils;
