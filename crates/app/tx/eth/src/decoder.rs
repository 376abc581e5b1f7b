//! Transaction-data decoder implementing the `TxDataCodec` trait.

use std::collections::BTreeSet;

use crate::error::{TxDataError, TxDataResult};
use crate::traits::TxDataCodec;
use crate::tx_data::{tx_type, TxData};

/// Payload codec that decodes EIP-2718 bytes and then filters on type.
///
/// A payload of a type outside the allowed set fails with
/// [`TxDataError::TxTypeNotAllowed`] even when it decodes cleanly.
#[derive(Clone, Debug)]
pub struct TypedTxDecoder {
    allowed_types: BTreeSet<u8>,
}

impl TypedTxDecoder {
    /// Create a decoder that accepts every type the EVM module understands:
    /// legacy, access list and dynamic fee.
    pub fn ethereum() -> Self {
        Self::with_types([tx_type::LEGACY, tx_type::EIP2930, tx_type::EIP1559])
    }

    /// Accept exactly `types`.
    pub fn with_types(types: impl IntoIterator<Item = u8>) -> Self {
        Self {
            allowed_types: types.into_iter().collect(),
        }
    }

    /// Add a transaction type to the allowed set.
    pub fn allow_type(&mut self, tx_type: u8) -> &mut Self {
        self.allowed_types.insert(tx_type);
        self
    }

    /// Remove a transaction type from the allowed set.
    pub fn deny_type(&mut self, tx_type: u8) -> &mut Self {
        self.allowed_types.remove(&tx_type);
        self
    }

    pub fn is_allowed(&self, tx_type: u8) -> bool {
        self.allowed_types.contains(&tx_type)
    }
}

impl TxDataCodec for TypedTxDecoder {
    fn unpack_tx_data(&self, payload: &[u8]) -> TxDataResult<TxData> {
        let tx = TxData::decode(payload)?;

        let tx_type = tx.tx_type();
        if !self.is_allowed(tx_type) {
            return Err(TxDataError::TxTypeNotAllowed(tx_type));
        }

        Ok(tx)
    }
}

impl Default for TypedTxDecoder {
    fn default() -> Self {
        Self::ethereum()
    }
}
