//! Ethereum transaction data carried inside a host-chain message.
//!
//! The payload is an EIP-2718 encoded, signed transaction. Decoding keeps the
//! signed form intact so the same bytes can be signature-checked further down
//! the pipeline.

use alloy_consensus::{Signed, TxEip1559, TxEip2930, TxLegacy};
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{B256, U256};

use crate::error::{TxDataError, TxDataResult};
use crate::fees::effective_gas_price;

/// Transaction type constants per EIP-2718.
pub mod tx_type {
    /// Legacy transaction (pre-EIP-2718).
    pub const LEGACY: u8 = 0x00;
    /// EIP-2930 access list transaction.
    pub const EIP2930: u8 = 0x01;
    /// EIP-1559 fee market transaction.
    pub const EIP1559: u8 = 0x02;
    /// EIP-4844 blob transaction.
    pub const EIP4844: u8 = 0x03;
}

/// Decoded transaction data, tagged by fee regime.
///
/// - `Legacy` and `AccessList` pay a fixed gas price.
/// - `DynamicFee` pays `min(fee_cap, base_fee + tip_cap)` per gas.
#[derive(Clone, Debug)]
pub enum TxData {
    /// Legacy transaction (untyped RLP list).
    Legacy(Signed<TxLegacy>),
    /// EIP-2930 access list transaction (type 0x01).
    AccessList(Signed<TxEip2930>),
    /// EIP-1559 dynamic fee transaction (type 0x02).
    DynamicFee(Signed<TxEip1559>),
}

impl TxData {
    /// Decode transaction data from EIP-2718 bytes, rejecting trailing input.
    pub fn decode(bytes: &[u8]) -> TxDataResult<Self> {
        let mut input = bytes;
        let tx = Self::decode_from(&mut input)?;
        if !input.is_empty() {
            return Err(TxDataError::TrailingBytes(input.len()));
        }
        Ok(tx)
    }

    /// Decode transaction data from the front of a byte slice, advancing it.
    ///
    /// # Format
    ///
    /// - Legacy: RLP list starting with 0xc0-0xff
    /// - Typed: type byte (0x00-0x7f) followed by the RLP payload
    pub fn decode_from(bytes: &mut &[u8]) -> TxDataResult<Self> {
        let input = *bytes;
        let Some(&first_byte) = input.first() else {
            return Err(TxDataError::EmptyInput);
        };

        // RLP list prefixes start at 0xc0
        if first_byte >= 0xc0 {
            let mut cursor = input;
            let signed = Signed::<TxLegacy>::rlp_decode(&mut cursor).map_err(|source| {
                TxDataError::Rlp {
                    tx_type: tx_type::LEGACY,
                    source,
                }
            })?;
            *bytes = cursor;
            return Ok(TxData::Legacy(signed));
        }

        let mut cursor = &input[1..];
        let rlp_err = |source: alloy_rlp::Error| TxDataError::Rlp {
            tx_type: first_byte,
            source,
        };
        let tx = match first_byte {
            tx_type::EIP2930 => {
                TxData::AccessList(Signed::<TxEip2930>::rlp_decode(&mut cursor).map_err(rlp_err)?)
            }
            tx_type::EIP1559 => {
                TxData::DynamicFee(Signed::<TxEip1559>::rlp_decode(&mut cursor).map_err(rlp_err)?)
            }
            // A legacy transaction is never type-prefixed.
            ty => return Err(TxDataError::UnsupportedTxType(ty)),
        };
        *bytes = cursor;
        Ok(tx)
    }

    /// Encode to the same EIP-2718 form that `decode` accepts.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            TxData::Legacy(tx) => tx.rlp_encode(&mut buf),
            TxData::AccessList(tx) => {
                buf.push(tx_type::EIP2930);
                tx.rlp_encode(&mut buf);
            }
            TxData::DynamicFee(tx) => {
                buf.push(tx_type::EIP1559);
                tx.rlp_encode(&mut buf);
            }
        }
        buf
    }

    /// Returns the transaction type byte.
    pub fn tx_type(&self) -> u8 {
        match self {
            TxData::Legacy(_) => tx_type::LEGACY,
            TxData::AccessList(_) => tx_type::EIP2930,
            TxData::DynamicFee(_) => tx_type::EIP1559,
        }
    }

    /// Whether this transaction prices gas through the base fee mechanism.
    pub fn is_dynamic_fee(&self) -> bool {
        matches!(self, TxData::DynamicFee(_))
    }

    /// Transaction hash as signed.
    pub fn tx_hash(&self) -> B256 {
        match self {
            TxData::Legacy(tx) => *tx.hash(),
            TxData::AccessList(tx) => *tx.hash(),
            TxData::DynamicFee(tx) => *tx.hash(),
        }
    }

    /// Gas limit signed into the transaction.
    pub fn gas_limit(&self) -> u64 {
        match self {
            TxData::Legacy(tx) => tx.tx().gas_limit,
            TxData::AccessList(tx) => tx.tx().gas_limit,
            TxData::DynamicFee(tx) => tx.tx().gas_limit,
        }
    }

    /// Fixed gas price, `None` for dynamic fee transactions.
    pub fn gas_price(&self) -> Option<u128> {
        match self {
            TxData::Legacy(tx) => Some(tx.tx().gas_price),
            TxData::AccessList(tx) => Some(tx.tx().gas_price),
            TxData::DynamicFee(_) => None,
        }
    }

    /// Maximum price per gas the sender accepts.
    ///
    /// For fixed-price transactions this is the gas price itself.
    pub fn gas_fee_cap(&self) -> u128 {
        match self {
            TxData::Legacy(tx) => tx.tx().gas_price,
            TxData::AccessList(tx) => tx.tx().gas_price,
            TxData::DynamicFee(tx) => tx.tx().max_fee_per_gas,
        }
    }

    /// Priority fee per gas paid on top of the base fee.
    pub fn gas_tip_cap(&self) -> u128 {
        match self {
            TxData::Legacy(tx) => tx.tx().gas_price,
            TxData::AccessList(tx) => tx.tx().gas_price,
            TxData::DynamicFee(tx) => tx.tx().max_priority_fee_per_gas,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            TxData::Legacy(tx) => tx.tx().chain_id,
            TxData::AccessList(tx) => Some(tx.tx().chain_id),
            TxData::DynamicFee(tx) => Some(tx.tx().chain_id),
        }
    }

    pub fn nonce(&self) -> u64 {
        match self {
            TxData::Legacy(tx) => tx.tx().nonce,
            TxData::AccessList(tx) => tx.tx().nonce,
            TxData::DynamicFee(tx) => tx.tx().nonce,
        }
    }

    /// Access list, if the transaction type carries one.
    pub fn access_list(&self) -> Option<&AccessList> {
        match self {
            TxData::Legacy(_) => None,
            TxData::AccessList(tx) => Some(&tx.tx().access_list),
            TxData::DynamicFee(tx) => Some(&tx.tx().access_list),
        }
    }

    /// Price per gas actually charged at the given base fee.
    pub fn effective_gas_price(&self, base_fee: u128) -> u128 {
        effective_gas_price(self, base_fee)
    }

    /// Total fee in wei charged at the given base fee: effective price times
    /// gas limit.
    pub fn effective_fee_wei(&self, base_fee: u128) -> U256 {
        U256::from(self.effective_gas_price(base_fee)) * U256::from(self.gas_limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(TxData::decode(&[]).unwrap_err(), TxDataError::EmptyInput);
    }

    #[test]
    fn test_typed_legacy_prefix_rejected() {
        let err = TxData::decode(&[tx_type::LEGACY, 0xc0]).unwrap_err();
        assert_eq!(err, TxDataError::UnsupportedTxType(tx_type::LEGACY));
    }

    #[test]
    fn test_blob_type_rejected() {
        let err = TxData::decode(&[tx_type::EIP4844, 0xc0]).unwrap_err();
        assert_eq!(err, TxDataError::UnsupportedTxType(tx_type::EIP4844));
    }

    #[test]
    fn test_truncated_dynamic_fee_body_fails() {
        let err = TxData::decode(&[tx_type::EIP1559, 0xf8]).unwrap_err();
        assert!(matches!(
            err,
            TxDataError::Rlp {
                tx_type: tx_type::EIP1559,
                ..
            }
        ));
    }
}
