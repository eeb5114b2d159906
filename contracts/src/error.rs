//! Classification of contract failures.
//!
//! Every contract error maps to one [`ErrorKind`]. Revert data relayed by a
//! proxy can be classified as well, since it is the ABI encoding of one of the
//! errors declared by this crate.
use std::fmt;

use alloy_sol_types::SolError;

use crate::{
    access::{
        accessable::{AccessableInvalidAccount, AccessableUnauthorizedAccount},
        ownable::{OwnableInvalidOwner, OwnableUnauthorizedAccount},
    },
    proxy::{
        upgradeability::{
            UpgradeabilityInvalidAuthority,
            UpgradeabilityInvalidImplementation,
            UpgradeabilitySameImplementation,
        },
        upgradeability_proxy::ProxyMissingImplementation,
    },
    storage::eternal_storage::EternalStorageMissingValue,
};

/// Kind of a contract failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller lacks the required ownership or access.
    Unauthorized,
    /// An argument is not acceptable, e.g. the null identity.
    InvalidArgument,
    /// No value of the requested kind is stored under the key.
    NotFound,
    /// The upgrade targets the current implementation.
    NoOpUpgrade,
    /// The proxy has no implementation to forward to.
    NoImplementation,
}

impl ErrorKind {
    /// Classifies ABI-encoded revert data.
    ///
    /// Returns [`None`] for empty data and for errors not declared by this
    /// crate.
    #[must_use]
    pub fn from_revert(data: &[u8]) -> Option<Self> {
        let selector: [u8; 4] = data.get(..4)?.try_into().ok()?;
        let table = [
            (OwnableUnauthorizedAccount::SELECTOR, Self::Unauthorized),
            (AccessableUnauthorizedAccount::SELECTOR, Self::Unauthorized),
            (OwnableInvalidOwner::SELECTOR, Self::InvalidArgument),
            (AccessableInvalidAccount::SELECTOR, Self::InvalidArgument),
            (
                UpgradeabilityInvalidImplementation::SELECTOR,
                Self::InvalidArgument,
            ),
            (UpgradeabilityInvalidAuthority::SELECTOR, Self::InvalidArgument),
            (EternalStorageMissingValue::SELECTOR, Self::NotFound),
            (UpgradeabilitySameImplementation::SELECTOR, Self::NoOpUpgrade),
            (ProxyMissingImplementation::SELECTOR, Self::NoImplementation),
        ];
        let (_, kind) =
            table.into_iter().find(|(candidate, _)| *candidate == selector)?;
        Some(kind)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unauthorized => "caller is not authorized",
            Self::InvalidArgument => "invalid argument",
            Self::NotFound => "value not found",
            Self::NoOpUpgrade => "implementation is already current",
            Self::NoImplementation => "no implementation set",
        };
        f.write_str(text)
    }
}
