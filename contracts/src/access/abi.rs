//! Solidity interfaces of the access control contracts.
//!
//! Used to decode incoming calls and to build calldata for them.
#![allow(missing_docs)]
#![allow(clippy::pub_underscore_fields)]

use alloy_sol_macro::sol;

sol! {
    /// Single owner surface of [`crate::access::ownable::Ownable`].
    interface OwnableAbi {
        function owner() external view returns (address);
        function transferOwnership(address newOwner) external;
    }
}

sol! {
    /// Access list surface of [`crate::access::accessable::Accessable`].
    interface AccessableAbi {
        function hasAccess(address account) external view returns (bool);
        function grantAccess(address account) external;
        function revokeAccess(address account) external;
    }
}
