//! Coin amounts as carried in a transaction fee.

use std::fmt;

use alloy_primitives::U256;

/// A single denomination and amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    pub denom: String,
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: U256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A canonical set of coins.
///
/// Entries are sorted by denom, each denom appears at most once and zero
/// amounts are dropped, so derived equality is exact set equality. The empty
/// set is the zero amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a canonical set, merging duplicate denoms.
    ///
    /// Returns `None` if merging overflows an amount.
    pub fn from_coins(coins: impl IntoIterator<Item = Coin>) -> Option<Self> {
        coins
            .into_iter()
            .try_fold(Self::new(), |acc, coin| acc.checked_add(coin))
    }

    /// A set holding one coin, or the empty set when the amount is zero.
    pub fn single(denom: impl Into<String>, amount: U256) -> Self {
        let coin = Coin::new(denom, amount);
        if coin.is_zero() {
            Self::new()
        } else {
            Self(vec![coin])
        }
    }

    /// Add one coin, keeping the set canonical. Returns `None` on overflow.
    pub fn checked_add(mut self, coin: Coin) -> Option<Self> {
        if coin.is_zero() {
            return Some(self);
        }
        match self.0.binary_search_by(|c| c.denom.as_str().cmp(&coin.denom)) {
            Ok(pos) => {
                let slot = &mut self.0[pos];
                slot.amount = slot.amount.checked_add(coin.amount)?;
            }
            Err(pos) => self.0.insert(pos, coin),
        }
        Some(self)
    }

    /// Amount held in `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> U256 {
        self.0
            .binary_search_by(|c| c.denom.as_str().cmp(denom))
            .map(|pos| self.0[pos].amount)
            .unwrap_or(U256::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("0");
        }
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}
