//! Codec seam used by admission checks.

use crate::error::TxDataResult;
use crate::tx_data::TxData;

/// Unpacks the opaque payload of an Ethereum message into typed data.
///
/// Implementations must be deterministic: the same bytes always decode to
/// the same variant or the same error, on every node.
pub trait TxDataCodec: Send + Sync {
    fn unpack_tx_data(&self, payload: &[u8]) -> TxDataResult<TxData>;
}

impl<C: TxDataCodec + ?Sized> TxDataCodec for &C {
    fn unpack_tx_data(&self, payload: &[u8]) -> TxDataResult<TxData> {
        (**self).unpack_tx_data(payload)
    }
}

impl<C: TxDataCodec + ?Sized> TxDataCodec for std::sync::Arc<C> {
    fn unpack_tx_data(&self, payload: &[u8]) -> TxDataResult<TxData> {
        (**self).unpack_tx_data(payload)
    }
}
