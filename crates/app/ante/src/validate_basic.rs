//! Stateless admission checks for Ethereum-wrapped transactions.
//!
//! An Ethereum transaction reaches the host chain inside a host envelope
//! whose own auth fields must be empty: the signature, fee and gas all live
//! inside the wrapped payloads. [`EthValidateBasicDecorator`] enforces that
//! shape and then checks that the fee and gas the envelope declares are
//! exactly what its messages add up to.
//!
//! # Checks
//!
//! 1. The envelope's own `validate_basic`, where a missing signature is fine
//! 2. The envelope exposes a raw view
//! 3. Memo, timeout height, non-critical extension options, signer infos,
//!    fee payer, fee granter and signatures are all empty, and there is
//!    exactly one extension option
//! 4. Every message is a [`MsgEthereumTx`](crate::MsgEthereumTx) with an
//!    empty `from` whose payload decodes, signs the same gas limit the
//!    message declares, and can be priced
//! 5. Declared fee amount and gas limit equal the computed totals
//!
//! Rechecks skip all of the above.

use evolve_tx_eth::{wei_to_native, TxDataCodec, TypedTxDecoder};

use crate::config::{AnteConfig, EvmConfig};
use crate::context::AnteContext;
use crate::decorator::{AnteDecorator, AnteNext, AnteResult};
use crate::error::AnteError;
use crate::fee_oracle::FeeOracle;
use crate::reconcile::FeeTotals;
use crate::tx::{RawTx, Tx, TxValidationError};

/// Ante decorator that admits only well-formed Ethereum-wrapped envelopes.
pub struct EthValidateBasicDecorator<O, C = TypedTxDecoder> {
    fee_oracle: O,
    codec: C,
    evm_denom: String,
}

impl<O: FeeOracle> EthValidateBasicDecorator<O> {
    /// Decorator accepting legacy, access list and dynamic fee payloads,
    /// charging fees in the default EVM denomination.
    pub fn new(fee_oracle: O) -> Self {
        Self {
            fee_oracle,
            codec: TypedTxDecoder::ethereum(),
            evm_denom: EvmConfig::DEFAULT_DENOM.to_string(),
        }
    }

    pub fn from_config(fee_oracle: O, config: &AnteConfig) -> Self {
        Self {
            fee_oracle,
            codec: config.evm.decoder(),
            evm_denom: config.evm.denom.clone(),
        }
    }
}

impl<O, C> EthValidateBasicDecorator<O, C> {
    /// Replace the payload codec.
    pub fn with_codec<D: TxDataCodec>(self, codec: D) -> EthValidateBasicDecorator<O, D> {
        EthValidateBasicDecorator {
            fee_oracle: self.fee_oracle,
            codec,
            evm_denom: self.evm_denom,
        }
    }

    pub fn with_evm_denom(mut self, evm_denom: impl Into<String>) -> Self {
        self.evm_denom = evm_denom.into();
        self
    }

    pub fn evm_denom(&self) -> &str {
        &self.evm_denom
    }
}

impl<O: FeeOracle, C: TxDataCodec> EthValidateBasicDecorator<O, C> {
    /// Run every admission check against `tx` and return the totals its
    /// messages add up to. Does not consult the recheck flag.
    pub fn validate<T: Tx>(&self, ctx: &AnteContext, tx: &T) -> Result<FeeTotals, AnteError> {
        match tx.validate_basic() {
            // Ethereum-wrapped envelopes are signed inside their payloads.
            Ok(()) | Err(TxValidationError::NoSignatures) => {}
            Err(err) => return Err(AnteError::BasicValidation(err)),
        }

        let raw = tx.as_raw_tx().ok_or(AnteError::UnsupportedTx {
            type_name: std::any::type_name::<T>(),
        })?;

        check_envelope(raw)?;

        let base_fee = self.fee_oracle.base_fee_wei(ctx);
        let mut totals = FeeTotals::new();

        for (index, msg) in raw.msgs().iter().enumerate() {
            let eth_msg = msg
                .as_ethereum_tx()
                .ok_or_else(|| AnteError::UnexpectedMsgType {
                    index,
                    type_url: msg.type_url().to_string(),
                })?;

            if !eth_msg.from.is_empty() {
                return Err(AnteError::NonEmptyFrom {
                    index,
                    from: eth_msg.from.clone(),
                });
            }

            totals.add_gas(index, eth_msg.gas())?;

            let tx_data = self
                .codec
                .unpack_tx_data(&eth_msg.data)
                .map_err(|source| AnteError::Unpack { index, source })?;

            // Fees are priced from the signed gas limit.
            if eth_msg.gas() != tx_data.gas_limit() {
                return Err(AnteError::MsgGasMismatch {
                    index,
                    msg_gas: eth_msg.gas(),
                    tx_gas: tx_data.gas_limit(),
                });
            }

            if tx_data.is_dynamic_fee() && base_fee.is_none() {
                return Err(AnteError::DynamicFeeNotSupported { index });
            }

            let fee = wei_to_native(tx_data.effective_fee_wei(base_fee.unwrap_or_default()));
            totals.add_fee(index, &self.evm_denom, fee)?;
        }

        totals.reconcile(&raw.auth_info.fee)?;
        Ok(totals)
    }
}

fn check_envelope(raw: &RawTx) -> Result<(), AnteError> {
    let body = &raw.body;
    if !body.memo.is_empty()
        || body.timeout_height != 0
        || !body.non_critical_extension_options.is_empty()
    {
        return Err(AnteError::NonEmptyBodyFields);
    }

    if body.extension_options.len() != 1 {
        return Err(AnteError::ExtensionOptionsCount(body.extension_options.len()));
    }

    let auth_info = &raw.auth_info;
    if !auth_info.signer_infos.is_empty() {
        return Err(AnteError::NonEmptySignerInfos(auth_info.signer_infos.len()));
    }

    if !auth_info.fee.payer.is_empty() || !auth_info.fee.granter.is_empty() {
        return Err(AnteError::FeePayerOrGranterSet);
    }

    if !raw.signatures.is_empty() {
        return Err(AnteError::NonEmptySignatures(raw.signatures.len()));
    }

    Ok(())
}

impl<T, O, C> AnteDecorator<T> for EthValidateBasicDecorator<O, C>
where
    T: Tx,
    O: FeeOracle,
    C: TxDataCodec,
{
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &T,
        is_recheck: bool,
        next: AnteNext<'_, T>,
    ) -> AnteResult {
        if is_recheck {
            tracing::trace!(height = ctx.height(), "recheck, skipping eth basic validation");
            return next(ctx, tx, is_recheck);
        }

        match self.validate(&ctx, tx) {
            Ok(totals) => {
                tracing::trace!(
                    height = ctx.height(),
                    fee = %totals.amount(),
                    gas_limit = totals.gas_limit(),
                    "eth basic validation passed"
                );
                next(ctx, tx, is_recheck)
            }
            Err(err) => {
                tracing::debug!(
                    height = ctx.height(),
                    kind = %err.kind(),
                    error = %err,
                    "eth basic validation rejected tx"
                );
                Err(err)
            }
        }
    }
}
