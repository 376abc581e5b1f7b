//! Ethereum transaction data for the Evolve ante pipeline.
//!
//! An Ethereum transaction reaches the host chain as the opaque payload of a
//! message. This crate turns that payload into typed data and prices it.
//!
//! # Transaction Types
//!
//! - **Legacy (untyped)**: fixed gas price, optionally with EIP-155 replay protection
//! - **EIP-2930 (0x01)**: fixed gas price plus an access list
//! - **EIP-1559 (0x02)**: fee cap and tip cap against the chain base fee
//!
//! # Usage
//!
//! ```text
//! use evolve_tx_eth::{wei_to_native, TxDataCodec, TypedTxDecoder};
//!
//! let codec = TypedTxDecoder::ethereum();
//! let tx = codec.unpack_tx_data(&payload)?;
//! let fee = wei_to_native(tx.effective_fee_wei(base_fee));
//! ```

pub mod decoder;
pub mod error;
pub mod fees;
pub mod traits;
pub mod tx_data;

pub use decoder::TypedTxDecoder;
pub use error::{TxDataError, TxDataResult};
pub use fees::{effective_gas_price, native_to_wei, wei_to_native, WEI_PER_NATIVE};
pub use traits::TxDataCodec;
pub use tx_data::{tx_type, TxData};
