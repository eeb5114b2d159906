//! Trait and implementation of the ERC-165 standard, as defined in the [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-165
use alloy_primitives::aliases::B32;
use alloy_sol_types::SolInterface;

use crate::host::{decode_call, ok, ArbResult};

pub use abi::Erc165Abi;

mod abi {
    #![allow(missing_docs)]

    use alloy_sol_macro::sol;

    sol! {
        /// ERC-165 surface.
        interface Erc165Abi {
            function supportsInterface(bytes4 interfaceId) external view returns (bool);
        }
    }
}

/// Interface of the ERC-165 standard, as defined in the [ERC].
///
/// Implementers can declare support of contract interfaces, which others can
/// query.
///
/// For an implementation, see [`Erc165`].
///
/// [ERC]: https://eips.ethereum.org/EIPS/eip-165
pub trait IErc165 {
    /// Returns true if this contract implements the interface defined by
    /// `interface_id`. See the corresponding [ERC] to learn more about how
    /// these ids are created.
    ///
    /// # Arguments
    ///
    /// * `&self` - Storage layout of the contract.
    /// * `interface_id` - The interface identifier, as specified in the [ERC].
    ///
    /// [ERC]: https://eips.ethereum.org/EIPS/eip-165#how-interfaces-are-identified
    fn supports_interface(&self, interface_id: B32) -> bool;
}

/// Implementation of the [`IErc165`] trait.
///
/// Contracts that want to support ERC-165 should implement the [`IErc165`]
/// trait for the additional interface ids they support and fall back to
/// [`Erc165::supports_interface`] like:
///
/// ```rust,ignore
/// impl IErc165 for Ownable {
///     fn supports_interface(&self, interface_id: B32) -> bool {
///         erc165::interface_id::<OwnableAbiCalls>() == interface_id
///             || Erc165.supports_interface(interface_id)
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Erc165;

impl Erc165 {
    /// Interface id of ERC-165 itself, `0x01ffc9a7`.
    pub const INTERFACE_ID: B32 = B32::new([0x01, 0xff, 0xc9, 0xa7]);
}

impl IErc165 for Erc165 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        Self::INTERFACE_ID == interface_id
    }
}

/// Computes the interface id of `I`: the XOR of all its selectors.
#[must_use]
pub fn interface_id<I: SolInterface>() -> B32 {
    let id = (0..I::COUNT)
        .filter_map(I::selector_at)
        .fold([0u8; 4], |mut id, selector| {
            id.iter_mut().zip(selector).for_each(|(byte, s)| *byte ^= s);
            id
        });
    B32::new(id)
}

/// Answers `supportsInterface` calls on behalf of `contract`.
pub(crate) fn route<C: IErc165 + ?Sized>(
    contract: &C,
    calldata: &[u8],
) -> Option<ArbResult> {
    match decode_call::<Erc165Abi::Erc165AbiCalls>(calldata)? {
        Ok(Erc165Abi::Erc165AbiCalls::supportsInterface(call)) => {
            Some(ok::<Erc165Abi::supportsInterfaceCall>(
                &contract.supports_interface(call.interfaceId),
            ))
        }
        Err(e) => Some(Err(e)),
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolCall;

    use super::*;

    #[test]
    fn interface_id_of_erc165_is_its_selector() {
        assert_eq!(
            interface_id::<Erc165Abi::Erc165AbiCalls>(),
            Erc165::INTERFACE_ID
        );
    }

    #[test]
    fn supports_interface() {
        assert!(Erc165.supports_interface(Erc165::INTERFACE_ID));

        let fake_interface_id: B32 = 0x1234_5678_u32.to_be_bytes().into();
        assert!(!Erc165.supports_interface(fake_interface_id));
    }

    #[test]
    fn routes_supports_interface_calls() {
        let calldata = Erc165Abi::supportsInterfaceCall {
            interfaceId: Erc165::INTERFACE_ID,
        }
        .abi_encode();

        let output = route(&Erc165, &calldata).unwrap().unwrap();

        assert!(Erc165Abi::supportsInterfaceCall::abi_decode_returns(&output)
            .unwrap());
        assert!(route(&Erc165, &[0, 0, 0, 0]).is_none());
    }
}
