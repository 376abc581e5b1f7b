//! Per-transaction context threaded through the ante pipeline.

/// Read-only view of the chain state a transaction is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnteContext {
    height: u64,
    is_recheck: bool,
}

impl AnteContext {
    pub fn new(height: u64) -> Self {
        Self {
            height,
            is_recheck: false,
        }
    }

    /// Mark this context as a recheck pass over an already admitted tx.
    pub fn with_recheck(mut self, is_recheck: bool) -> Self {
        self.is_recheck = is_recheck;
        self
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn is_recheck(&self) -> bool {
        self.is_recheck
    }
}
