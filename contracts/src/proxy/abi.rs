//! Solidity interface of the upgrade management surface.
#![allow(missing_docs)]

use alloy_sol_macro::sol;

sol! {
    /// Version record and upgrade controls of
    /// [`crate::proxy::upgradeability::UpgradeabilityStorage`].
    interface UpgradeabilityAbi {
        function version() external view returns (string);
        function implementation() external view returns (address);
        function upgradeTo(string version, address implementation) external;
        function upgradeAuthority() external view returns (uint8);
        function setUpgradeAuthority(uint8 authority) external;
    }
}
