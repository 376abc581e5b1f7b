//! Base fee lookup.

use std::sync::Arc;

use crate::context::AnteContext;

/// Supplies the base fee in force at the context's height.
///
/// `None` means the dynamic fee mechanism is not active yet.
pub trait FeeOracle: Send + Sync {
    fn base_fee_wei(&self, ctx: &AnteContext) -> Option<u128>;
}

impl<O: FeeOracle + ?Sized> FeeOracle for &O {
    fn base_fee_wei(&self, ctx: &AnteContext) -> Option<u128> {
        (**self).base_fee_wei(ctx)
    }
}

impl<O: FeeOracle + ?Sized> FeeOracle for Arc<O> {
    fn base_fee_wei(&self, ctx: &AnteContext) -> Option<u128> {
        (**self).base_fee_wei(ctx)
    }
}

/// An oracle returning the same answer at every height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticFeeOracle {
    base_fee: Option<u128>,
}

impl StaticFeeOracle {
    pub fn new(base_fee: Option<u128>) -> Self {
        Self { base_fee }
    }

    /// Dynamic fees are never active.
    pub fn inactive() -> Self {
        Self { base_fee: None }
    }

    pub fn active(base_fee: u128) -> Self {
        Self {
            base_fee: Some(base_fee),
        }
    }
}

impl FeeOracle for StaticFeeOracle {
    fn base_fee_wei(&self, _ctx: &AnteContext) -> Option<u128> {
        self.base_fee
    }
}

/// An oracle whose base fee switches on at a fork height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkFeeOracle {
    activation_height: u64,
    base_fee: u128,
}

impl ForkFeeOracle {
    pub fn new(activation_height: u64, base_fee: u128) -> Self {
        Self {
            activation_height,
            base_fee,
        }
    }

    pub fn activation_height(&self) -> u64 {
        self.activation_height
    }
}

impl FeeOracle for ForkFeeOracle {
    fn base_fee_wei(&self, ctx: &AnteContext) -> Option<u128> {
        (ctx.height() >= self.activation_height).then_some(self.base_fee)
    }
}
