//! Fee and gas aggregation across the messages of one transaction.

use alloy_primitives::U256;

use crate::coins::{Coin, Coins};
use crate::error::AnteError;
use crate::tx::Fee;

/// Running totals for a single validation call.
///
/// Additions are checked; a total that leaves the representable range is
/// reported against the message that pushed it over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeTotals {
    amount: Coins,
    gas_limit: u64,
}

impl FeeTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_gas(&mut self, index: usize, gas: u64) -> Result<(), AnteError> {
        self.gas_limit = self
            .gas_limit
            .checked_add(gas)
            .ok_or(AnteError::GasOverflow { index })?;
        Ok(())
    }

    pub fn add_fee(&mut self, index: usize, denom: &str, fee: U256) -> Result<(), AnteError> {
        let total = std::mem::take(&mut self.amount);
        self.amount = total
            .checked_add(Coin::new(denom, fee))
            .ok_or(AnteError::FeeOverflow { index })?;
        Ok(())
    }

    pub fn amount(&self) -> &Coins {
        &self.amount
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Compare against the fee the envelope declares: amount first, then
    /// gas limit. Both must match exactly.
    pub fn reconcile(&self, fee: &Fee) -> Result<(), AnteError> {
        if fee.amount != self.amount {
            return Err(AnteError::FeeAmountMismatch {
                declared: fee.amount.clone(),
                computed: self.amount.clone(),
            });
        }

        if fee.gas_limit != self.gas_limit {
            return Err(AnteError::GasLimitMismatch {
                declared: fee.gas_limit,
                computed: self.gas_limit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn declared(amount: u64, gas_limit: u64) -> Fee {
        Fee {
            amount: Coins::single("unibi", U256::from(amount)),
            gas_limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_totals_match_zero_fee() {
        let totals = FeeTotals::new();
        assert_eq!(totals.reconcile(&declared(0, 0)), Ok(()));
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = FeeTotals::new();
        totals.add_gas(0, 21_000).unwrap();
        totals.add_fee(0, "unibi", U256::from(21_000)).unwrap();
        totals.add_gas(1, 50_000).unwrap();
        totals.add_fee(1, "unibi", U256::from(100_000)).unwrap();

        assert_eq!(totals.gas_limit(), 71_000);
        assert_eq!(totals.amount(), &Coins::single("unibi", U256::from(121_000u64)));
        assert_eq!(totals.reconcile(&declared(121_000, 71_000)), Ok(()));
    }

    #[test]
    fn test_zero_fee_leaves_amount_empty() {
        let mut totals = FeeTotals::new();
        totals.add_fee(0, "unibi", U256::ZERO).unwrap();
        assert!(totals.amount().is_empty());
    }

    #[test]
    fn test_fee_checked_before_gas() {
        let mut totals = FeeTotals::new();
        totals.add_gas(0, 21_000).unwrap();
        totals.add_fee(0, "unibi", U256::from(21_000)).unwrap();

        let err = totals.reconcile(&declared(1, 1)).unwrap_err();
        assert!(matches!(err, AnteError::FeeAmountMismatch { .. }));

        let err = totals.reconcile(&declared(21_000, 1)).unwrap_err();
        assert_eq!(
            err,
            AnteError::GasLimitMismatch {
                declared: 1,
                computed: 21_000
            }
        );
    }

    #[test]
    fn test_gas_overflow_is_mismatch() {
        let mut totals = FeeTotals::new();
        totals.add_gas(0, u64::MAX).unwrap();
        let err = totals.add_gas(1, 1).unwrap_err();
        assert_eq!(err, AnteError::GasOverflow { index: 1 });
        assert_eq!(err.kind(), ErrorKind::Mismatch);
    }

    #[test]
    fn test_fee_overflow_is_mismatch() {
        let mut totals = FeeTotals::new();
        totals.add_fee(0, "unibi", U256::MAX).unwrap();
        let err = totals.add_fee(1, "unibi", U256::from(1)).unwrap_err();
        assert_eq!(err, AnteError::FeeOverflow { index: 1 });
    }
}
