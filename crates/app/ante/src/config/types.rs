//! Configuration types for the ante pipeline.

use serde::Deserialize;

use evolve_tx_eth::{tx_type, TypedTxDecoder};

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnteConfig {
    /// EVM admission settings.
    #[serde(default)]
    pub evm: EvmConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// EVM admission settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvmConfig {
    /// Native denomination converted EVM fees are charged in. Default: unibi.
    #[serde(default = "EvmConfig::default_denom")]
    pub denom: String,

    /// EIP-2718 type bytes accepted in message payloads. Default: 0, 1, 2.
    #[serde(default = "EvmConfig::default_allowed_tx_types")]
    pub allowed_tx_types: Vec<u8>,
}

impl Default for EvmConfig {
    fn default() -> Self {
        Self {
            denom: Self::default_denom(),
            allowed_tx_types: Self::default_allowed_tx_types(),
        }
    }
}

impl EvmConfig {
    pub const DEFAULT_DENOM: &'static str = "unibi";

    fn default_denom() -> String {
        Self::DEFAULT_DENOM.to_string()
    }

    fn default_allowed_tx_types() -> Vec<u8> {
        vec![tx_type::LEGACY, tx_type::EIP2930, tx_type::EIP1559]
    }

    /// Build the payload decoder this configuration describes.
    pub fn decoder(&self) -> TypedTxDecoder {
        TypedTxDecoder::with_types(self.allowed_tx_types.iter().copied())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Log level: trace, debug, info, warn, error. Default: info.
    #[serde(default = "ObservabilityConfig::default_log_level")]
    pub log_level: String,

    /// Log format: json or pretty. Default: pretty.
    #[serde(default = "ObservabilityConfig::default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_format: Self::default_log_format(),
        }
    }
}

impl ObservabilityConfig {
    fn default_log_level() -> String {
        "info".to_string()
    }

    fn default_log_format() -> String {
        "pretty".to_string()
    }
}
