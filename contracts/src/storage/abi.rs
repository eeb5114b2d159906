//! Solidity interface of [`crate::storage::eternal_storage::EternalStorage`].
#![allow(missing_docs)]

use alloy_sol_macro::sol;

sol! {
    /// Typed key-value surface, one group of functions per value kind.
    interface EternalStorageAbi {
        function getBool(string key) external view returns (bool);
        function setBool(string key, bool value) external;
        function hasBool(string key) external view returns (bool);
        function deleteBool(string key) external;

        function getInt(string key) external view returns (int256);
        function setInt(string key, int256 value) external;
        function hasInt(string key) external view returns (bool);
        function deleteInt(string key) external;

        function getUint(string key) external view returns (uint256);
        function setUint(string key, uint256 value) external;
        function hasUint(string key) external view returns (bool);
        function deleteUint(string key) external;

        function getString(string key) external view returns (string);
        function setString(string key, string value) external;
        function hasString(string key) external view returns (bool);
        function deleteString(string key) external;

        function getAddress(string key) external view returns (address);
        function setAddress(string key, address value) external;
        function hasAddress(string key) external view returns (bool);
        function deleteAddress(string key) external;

        function getBytes(string key) external view returns (bytes);
        function setBytes(string key, bytes value) external;
        function hasBytes(string key) external view returns (bool);
        function deleteBytes(string key) external;
    }
}
