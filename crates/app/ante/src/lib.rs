//! Ante handling for Ethereum transactions on an Evolve host chain.
//!
//! The host chain carries Ethereum transactions as [`MsgEthereumTx`]
//! messages inside its own envelope. Before such an envelope is admitted it
//! runs through an [`AnteChain`] of decorators; this crate provides the
//! chain machinery and [`EthValidateBasicDecorator`], the stateless check
//! that the envelope is a well-formed Ethereum wrapper whose declared fee
//! and gas match its messages.
//!
//! # Usage
//!
//! ```text
//! use evolve_ante::{AnteChain, AnteContext, EthValidateBasicDecorator, StaticFeeOracle};
//!
//! let chain = AnteChain::new()
//!     .with(EthValidateBasicDecorator::new(StaticFeeOracle::inactive()));
//! let ctx = chain.run(AnteContext::new(height), &raw_tx)?;
//! ```

pub mod coins;
pub mod config;
pub mod context;
pub mod decorator;
pub mod error;
pub mod fee_oracle;
pub mod msg;
pub mod observability;
pub mod reconcile;
pub mod tx;
pub mod validate_basic;

pub use coins::{Coin, Coins};
pub use config::{load_config, load_config_from_str, AnteConfig};
pub use context::AnteContext;
pub use decorator::{AnteChain, AnteDecorator, AnteNext, AnteResult};
pub use error::{AnteError, ConfigError, ErrorKind};
pub use fee_oracle::{FeeOracle, ForkFeeOracle, StaticFeeOracle};
pub use msg::{MsgEthereumTx, MSG_ETHEREUM_TX_TYPE_URL};
pub use observability::{init_tracing, init_tracing_from_config, TracingInitError};
pub use reconcile::FeeTotals;
pub use tx::{
    Any, AuthInfo, Fee, Msg, RawTx, SignerInfo, Tx, TxBody, TxValidationError,
    EXTENSION_OPTIONS_ETHEREUM_TX_TYPE_URL, MAX_GAS_WANTED,
};
pub use validate_basic::EthValidateBasicDecorator;
