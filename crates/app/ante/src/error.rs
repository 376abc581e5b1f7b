//! Error types for the ante crate.

use std::fmt;

use evolve_tx_eth::TxDataError;
use thiserror::Error;

use crate::coins::Coins;
use crate::tx::TxValidationError;

/// Coarse classification of an admission failure.
///
/// Callers match on this rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field that must be empty, zero or singular is not.
    Structural,
    /// The envelope or a message lacks a required capability.
    UnsupportedType,
    /// A message payload did not decode into transaction data.
    Unpack,
    /// A dynamic fee transaction arrived before the base fee is active.
    UnsupportedFeeRegime,
    /// Declared fee or gas disagrees with the computed total.
    Mismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Structural => "structural",
            ErrorKind::UnsupportedType => "unsupported_type",
            ErrorKind::Unpack => "unpack",
            ErrorKind::UnsupportedFeeRegime => "unsupported_fee_regime",
            ErrorKind::Mismatch => "mismatch",
        };
        f.write_str(name)
    }
}

/// Reasons a transaction is refused admission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnteError {
    #[error("tx basic validation failed: {0}")]
    BasicValidation(#[source] TxValidationError),

    #[error("invalid tx type {type_name}, does not expose a raw tx view")]
    UnsupportedTx { type_name: &'static str },

    #[error("for eth tx body Memo TimeoutHeight NonCriticalExtensionOptions should be empty")]
    NonEmptyBodyFields,

    #[error("for eth tx length of ExtensionOptions should be 1, got {0}")]
    ExtensionOptionsCount(usize),

    #[error("for eth tx AuthInfo SignerInfos should be empty, got {0}")]
    NonEmptySignerInfos(usize),

    #[error("for eth tx AuthInfo Fee payer and granter should be empty")]
    FeePayerOrGranterSet,

    #[error("for eth tx Signatures should be empty, got {0}")]
    NonEmptySignatures(usize),

    #[error("invalid message type {type_url} at index {index}, expected MsgEthereumTx")]
    UnexpectedMsgType { index: usize, type_url: String },

    #[error("invalid From {from} at index {index}, expect empty string")]
    NonEmptyFrom { index: usize, from: String },

    #[error("failed to unpack MsgEthereumTx data at index {index}: {source}")]
    Unpack {
        index: usize,
        #[source]
        source: TxDataError,
    },

    #[error("invalid gas at index {index}: message declares {msg_gas}, signed tx has {tx_gas}")]
    MsgGasMismatch {
        index: usize,
        msg_gas: u64,
        tx_gas: u64,
    },

    #[error("dynamic fee tx not supported at index {index}: base fee is not active")]
    DynamicFeeNotSupported { index: usize },

    #[error("invalid AuthInfo Fee Amount ({declared} != {computed})")]
    FeeAmountMismatch { declared: Coins, computed: Coins },

    #[error("invalid AuthInfo Fee GasLimit ({declared} != {computed})")]
    GasLimitMismatch { declared: u64, computed: u64 },

    #[error("total message gas overflows u64 at index {index}")]
    GasOverflow { index: usize },

    #[error("total message fee overflows 256 bits at index {index}")]
    FeeOverflow { index: usize },
}

impl AnteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnteError::BasicValidation(_)
            | AnteError::NonEmptyBodyFields
            | AnteError::ExtensionOptionsCount(_)
            | AnteError::NonEmptySignerInfos(_)
            | AnteError::FeePayerOrGranterSet
            | AnteError::NonEmptySignatures(_)
            | AnteError::NonEmptyFrom { .. } => ErrorKind::Structural,
            AnteError::UnsupportedTx { .. } | AnteError::UnexpectedMsgType { .. } => {
                ErrorKind::UnsupportedType
            }
            AnteError::Unpack { .. } => ErrorKind::Unpack,
            AnteError::DynamicFeeNotSupported { .. } => ErrorKind::UnsupportedFeeRegime,
            // A total past the representable range can never equal a declared value.
            AnteError::MsgGasMismatch { .. }
            | AnteError::FeeAmountMismatch { .. }
            | AnteError::GasLimitMismatch { .. }
            | AnteError::GasOverflow { .. }
            | AnteError::FeeOverflow { .. } => ErrorKind::Mismatch,
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error when loading config.
    #[error("failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    /// Validation failed with one or more errors.
    #[error("config validation failed:\n{}", .0.join("\n"))]
    ValidationFailed(Vec<String>),
}
