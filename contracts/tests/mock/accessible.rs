use alloy_primitives::{uint, U256};
use alloy_sol_macro::sol;
use eternal_contracts::{
    access::{Accessable, AccessableError},
    host::{decode_call, returns, ArbResult, Context, Router},
};

sol! {
    interface AccessibleAbi {
        function getAuthorizedValue() external view returns (uint256);
    }
}

use AccessibleAbi::AccessibleAbiCalls;

/// Exposes a value only to accounts that have been granted access.
#[derive(Default)]
pub struct AccessibleMock {
    pub access: Accessable,
}

impl AccessibleMock {
    pub fn authorized_value(
        &self,
        ctx: &Context<'_>,
    ) -> Result<U256, AccessableError> {
        self.access.only_access(ctx)?;
        Ok(uint!(42_U256))
    }
}

impl Router for AccessibleMock {
    fn route(
        &self,
        ctx: &mut Context<'_>,
        calldata: &[u8],
    ) -> Option<ArbResult> {
        match decode_call::<AccessibleAbiCalls>(calldata) {
            Some(Ok(AccessibleAbiCalls::getAuthorizedValue(_))) => {
                Some(returns::<AccessibleAbi::getAuthorizedValueCall, _>(
                    self.authorized_value(ctx),
                ))
            }
            Some(Err(e)) => Some(Err(e)),
            None => self.access.dispatch(ctx, calldata),
        }
    }
}
