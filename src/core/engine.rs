use super::errors::RouterError;
use super::registry::PoolSnapshot;
use super::router::get_best_trade;
use super::types::{Trade, TradeQuery};
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of a guarded quote computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteOutcome {
    /// The result is for the newest query seen by this engine.
    Current(Option<Trade>),
    /// A newer query arrived while this one was being computed; the stale
    /// result is withheld so it can never overwrite the newer one.
    Superseded,
}

/// Latest-wins guard around the router. Callers that recompute on every
/// input change (amount keystrokes, pool refresh ticks) route all their
/// computations through one engine; only the result of the most recently
/// started computation is ever released.
#[derive(Debug, Default)]
pub struct QuoteEngine {
    generation: AtomicU64,
}

impl QuoteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new computation and get its generation token.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Compute the best trade for `query`, discarding the result if a newer
    /// computation began in the meantime.
    pub fn quote(
        &self,
        snapshot: &PoolSnapshot,
        query: &TradeQuery,
        max_hops: usize,
    ) -> Result<QuoteOutcome, RouterError> {
        let generation = self.begin();
        let best = get_best_trade(snapshot, query, max_hops)?;
        if self.is_current(generation) {
            Ok(QuoteOutcome::Current(best))
        } else {
            tracing::debug!(generation, "quote superseded by newer query");
            Ok(QuoteOutcome::Superseded)
        }
    }
}
