//! Host-chain transaction envelope and the capability traits the ante
//! pipeline dispatches on.
//!
//! The envelope mirrors the protobuf layout of a signed host transaction:
//! a body with messages and extension options, auth info with signer infos
//! and the fee, and the raw signature list.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Bytes;
use thiserror::Error;

use crate::coins::Coins;
use crate::msg::MsgEthereumTx;

/// Upper bound on the gas a transaction may request: `2^63 - 1`.
pub const MAX_GAS_WANTED: u64 = (1 << 63) - 1;

/// Type URL of the extension option that marks an Ethereum-wrapped tx.
pub const EXTENSION_OPTIONS_ETHEREUM_TX_TYPE_URL: &str = "/eth.evm.v1.ExtensionOptionsEthereumTx";

/// A type-tagged opaque value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Any {
    pub type_url: String,
    pub value: Bytes,
}

impl Any {
    pub fn new(type_url: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }
}

/// A message carried in a transaction body.
pub trait Msg: fmt::Debug + Send + Sync {
    /// Fully qualified type URL of the message.
    fn type_url(&self) -> &str;

    /// View this message as an Ethereum transaction message, if it is one.
    fn as_ethereum_tx(&self) -> Option<&MsgEthereumTx> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct TxBody {
    pub messages: Vec<Arc<dyn Msg>>,
    pub memo: String,
    pub timeout_height: u64,
    pub extension_options: Vec<Any>,
    pub non_critical_extension_options: Vec<Any>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerInfo {
    pub public_key: Option<Any>,
    pub sequence: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fee {
    pub amount: Coins,
    pub gas_limit: u64,
    pub payer: String,
    pub granter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Fee,
}

/// The raw protocol view of a transaction.
#[derive(Debug, Clone, Default)]
pub struct RawTx {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub signatures: Vec<Bytes>,
}

impl RawTx {
    /// Wrap Ethereum messages the way a well-formed client does: one
    /// Ethereum extension option, no signer infos, no envelope signatures.
    pub fn ethereum(messages: Vec<Arc<dyn Msg>>, fee: Fee) -> Self {
        Self {
            body: TxBody {
                messages,
                extension_options: vec![Any::new(
                    EXTENSION_OPTIONS_ETHEREUM_TX_TYPE_URL,
                    Bytes::new(),
                )],
                ..Default::default()
            },
            auth_info: AuthInfo {
                signer_infos: Vec::new(),
                fee,
            },
            signatures: Vec::new(),
        }
    }

    pub fn msgs(&self) -> &[Arc<dyn Msg>] {
        &self.body.messages
    }
}

/// Failures of the envelope's own structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxValidationError {
    #[error("invalid gas supplied; {gas_limit} > {max}")]
    GasLimitTooHigh { gas_limit: u64, max: u64 },

    /// The envelope carries no signatures. Ethereum-wrapped transactions
    /// sign inside their payload, so this one is expected for them.
    #[error("no signatures supplied")]
    NoSignatures,

    #[error("wrong number of signatures; expected {signers}, got {signatures}")]
    SignatureCountMismatch { signatures: usize, signers: usize },
}

/// A candidate transaction as handed to the ante pipeline.
pub trait Tx {
    /// Stateless structural validation of the envelope itself.
    fn validate_basic(&self) -> Result<(), TxValidationError>;

    /// The raw protocol view, if this envelope exposes one.
    fn as_raw_tx(&self) -> Option<&RawTx> {
        None
    }
}

impl Tx for RawTx {
    fn validate_basic(&self) -> Result<(), TxValidationError> {
        let fee = &self.auth_info.fee;
        if fee.gas_limit > MAX_GAS_WANTED {
            return Err(TxValidationError::GasLimitTooHigh {
                gas_limit: fee.gas_limit,
                max: MAX_GAS_WANTED,
            });
        }

        if self.signatures.is_empty() {
            return Err(TxValidationError::NoSignatures);
        }

        let signers = self.auth_info.signer_infos.len();
        if self.signatures.len() != signers {
            return Err(TxValidationError::SignatureCountMismatch {
                signatures: self.signatures.len(),
                signers,
            });
        }

        Ok(())
    }

    fn as_raw_tx(&self) -> Option<&RawTx> {
        Some(self)
    }
}
