//! Composable ante handlers.
//!
//! Each decorator either rejects a transaction or hands it to `next`, the
//! rest of the chain. A decorator that accepts must return whatever `next`
//! returns.

use crate::context::AnteContext;
use crate::error::AnteError;

pub type AnteResult = Result<AnteContext, AnteError>;

/// Continuation invoked by a decorator that accepts a transaction.
pub type AnteNext<'a, T> = &'a dyn Fn(AnteContext, &T, bool) -> AnteResult;

/// One admission step over transactions of type `T`.
pub trait AnteDecorator<T>: Send + Sync {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &T,
        is_recheck: bool,
        next: AnteNext<'_, T>,
    ) -> AnteResult;
}

/// Ordered sequence of decorators run front to back.
pub struct AnteChain<T> {
    decorators: Vec<Box<dyn AnteDecorator<T>>>,
}

impl<T> AnteChain<T> {
    pub fn new() -> Self {
        Self {
            decorators: Vec::new(),
        }
    }

    /// Append a decorator to the end of the chain.
    pub fn with(mut self, decorator: impl AnteDecorator<T> + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Run `tx` through every decorator, taking the recheck flag from `ctx`.
    pub fn run(&self, ctx: AnteContext, tx: &T) -> AnteResult {
        let is_recheck = ctx.is_recheck();
        self.run_from(0, ctx, tx, is_recheck)
    }

    fn run_from(&self, index: usize, ctx: AnteContext, tx: &T, is_recheck: bool) -> AnteResult {
        let Some(decorator) = self.decorators.get(index) else {
            return Ok(ctx);
        };
        decorator.ante_handle(
            ctx,
            tx,
            is_recheck,
            &|ctx: AnteContext, tx: &T, is_recheck: bool| {
                self.run_from(index + 1, ctx, tx, is_recheck)
            },
        )
    }
}

impl<T> Default for AnteChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
