//! Fee arithmetic shared by admission checks.
//!
//! EVM fees are priced in wei (18 decimals) while the host chain settles in
//! its native denomination (6 decimals). Conversion truncates, so any fee
//! below one native unit converts to zero.

use alloy_primitives::U256;

use crate::tx_data::TxData;

/// Wei per smallest native unit (10^12).
pub const WEI_PER_NATIVE: U256 = U256::from_limbs([1_000_000_000_000, 0, 0, 0]);

/// Convert a wei amount to the native denomination, truncating toward zero.
pub fn wei_to_native(wei: U256) -> U256 {
    wei / WEI_PER_NATIVE
}

/// Convert a native amount to wei. Returns `None` on overflow.
pub fn native_to_wei(native: U256) -> Option<U256> {
    native.checked_mul(WEI_PER_NATIVE)
}

/// Calculate the price per gas a transaction actually pays.
///
/// - Legacy / EIP-2930: gas_price
/// - EIP-1559: min(max_fee_per_gas, base_fee + max_priority_fee_per_gas)
pub fn effective_gas_price(tx: &TxData, base_fee: u128) -> u128 {
    match tx {
        TxData::Legacy(tx) => tx.tx().gas_price,
        TxData::AccessList(tx) => tx.tx().gas_price,
        TxData::DynamicFee(tx) => {
            let max_fee = tx.tx().max_fee_per_gas;
            let priority_fee = tx.tx().max_priority_fee_per_gas;
            max_fee.min(base_fee.saturating_add(priority_fee))
        }
    }
}
