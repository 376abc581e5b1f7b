//! Configuration validation.
//!
//! Validates configuration and collects all errors before returning,
//! enabling users to fix multiple issues in a single iteration.

use evolve_tx_eth::tx_type;

use crate::config::types::{AnteConfig, EvmConfig, ObservabilityConfig};
use crate::error::ConfigError;

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// Validate the entire configuration.
pub fn validate_config(config: &AnteConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    validate_evm_config(&config.evm, &mut errors);
    validate_observability_config(&config.observability, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed(errors))
    }
}

fn validate_evm_config(config: &EvmConfig, errors: &mut Vec<String>) {
    let denom = &config.denom;
    if denom.is_empty() {
        errors.push("evm.denom cannot be empty".to_string());
    } else {
        if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
            errors.push(format!(
                "evm.denom '{}' must be between {} and {} characters",
                denom, MIN_DENOM_LEN, MAX_DENOM_LEN
            ));
        }

        if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
            errors.push(format!("evm.denom '{}' must start with a letter", denom));
        }

        if !denom
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
        {
            errors.push(format!(
                "evm.denom '{}' contains invalid characters. Only alphanumeric and / : . _ - are allowed.",
                denom
            ));
        }
    }

    if config.allowed_tx_types.is_empty() {
        errors.push("evm.allowed_tx_types cannot be empty".to_string());
    }

    let known = [tx_type::LEGACY, tx_type::EIP2930, tx_type::EIP1559];
    for ty in &config.allowed_tx_types {
        if !known.contains(ty) {
            errors.push(format!(
                "evm.allowed_tx_types contains unsupported type {}. Supported: 0, 1, 2",
                ty
            ));
        }
    }
}

fn validate_observability_config(config: &ObservabilityConfig, errors: &mut Vec<String>) {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.log_level.to_lowercase().as_str()) {
        errors.push(format!(
            "observability.log_level '{}' is invalid. Valid levels: trace, debug, info, warn, error",
            config.log_level
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.log_format.to_lowercase().as_str()) {
        errors.push(format!(
            "observability.log_format '{}' is invalid. Valid formats: json, pretty",
            config.log_format
        ));
    }
}
