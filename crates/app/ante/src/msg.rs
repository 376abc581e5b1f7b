//! The Ethereum transaction message.

use alloy_primitives::Bytes;
use evolve_tx_eth::{TxData, TxDataResult};

use crate::tx::Msg;

/// Type URL of [`MsgEthereumTx`].
pub const MSG_ETHEREUM_TX_TYPE_URL: &str = "/eth.evm.v1.MsgEthereumTx";

/// An Ethereum transaction wrapped as a host-chain message.
///
/// `from` must stay empty on the wire: the sender is recovered from the
/// signature inside `data`, never taken from this field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgEthereumTx {
    pub from: String,
    /// Declared gas limit of the wrapped transaction.
    pub gas: u64,
    /// EIP-2718 encoded signed transaction.
    pub data: Bytes,
}

impl MsgEthereumTx {
    /// Wrap encoded transaction bytes, taking the gas limit from the payload.
    pub fn new(data: impl Into<Bytes>) -> TxDataResult<Self> {
        let data = data.into();
        let tx = TxData::decode(&data)?;
        Ok(Self {
            from: String::new(),
            gas: tx.gas_limit(),
            data,
        })
    }

    pub fn from_tx_data(tx: &TxData) -> Self {
        Self {
            from: String::new(),
            gas: tx.gas_limit(),
            data: tx.encode().into(),
        }
    }

    pub fn gas(&self) -> u64 {
        self.gas
    }
}

impl Msg for MsgEthereumTx {
    fn type_url(&self) -> &str {
        MSG_ETHEREUM_TX_TYPE_URL
    }

    fn as_ethereum_tx(&self) -> Option<&MsgEthereumTx> {
        Some(self)
    }
}
