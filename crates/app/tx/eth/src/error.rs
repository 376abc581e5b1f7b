//! Transaction-data decoding errors.

use thiserror::Error;

/// Errors produced while unpacking an Ethereum transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxDataError {
    /// The payload carried no bytes at all.
    #[error("empty transaction input")]
    EmptyInput,

    /// The RLP body of the transaction was malformed.
    #[error("failed to decode transaction type {tx_type:#04x}: {source}")]
    Rlp {
        tx_type: u8,
        #[source]
        source: alloy_rlp::Error,
    },

    /// The type byte is not an Ethereum type this decoder knows.
    #[error("unsupported transaction type {0:#04x}")]
    UnsupportedTxType(u8),

    /// The type is known but filtered out by the decoder configuration.
    #[error("transaction type {0:#04x} is not allowed")]
    TxTypeNotAllowed(u8),

    /// Bytes remained after a complete transaction was decoded.
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),
}

/// Result type for transaction-data operations.
pub type TxDataResult<T> = Result<T, TxDataError>;
