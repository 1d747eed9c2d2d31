use super::constants::SLIPPAGE_DENOMINATOR;
use super::errors::RouterError;
use super::paths::find_paths;
use super::registry::PoolSnapshot;
use super::swap::{simulate_exact_in, simulate_exact_out};
use super::trade::trade_comparator;
use super::types::{Direction, Trade, TradeQuery};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Enumerate, simulate and rank every viable trade for the query, best first.
/// An empty vector means no route had enough liquidity — a normal outcome the
/// caller renders as "insufficient liquidity", not a failure.
pub fn get_ranked_trades(
    snapshot: &PoolSnapshot,
    query: &TradeQuery,
    max_hops: usize,
) -> Result<Vec<Trade>, RouterError> {
    validate_query(query)?;

    let candidate_paths = find_paths(snapshot, &query.token_in, &query.token_out, max_hops);
    tracing::debug!(
        candidates = candidate_paths.len(),
        token_in = %query.token_in,
        token_out = %query.token_out,
        "enumerated candidate paths"
    );

    let mut trades: Vec<Trade> = candidate_paths
        .iter()
        .filter_map(|path| match query.direction {
            Direction::ExactIn => simulate_exact_in(snapshot, path, &query.amount),
            Direction::ExactOut => simulate_exact_out(snapshot, path, &query.amount),
        })
        .collect();

    // Stable sort: equally-good trades keep their discovery order
    trades.sort_by(trade_comparator);
    Ok(trades)
}

/// Head of the ranked candidate list, or None when no route is viable.
pub fn get_best_trade(
    snapshot: &PoolSnapshot,
    query: &TradeQuery,
    max_hops: usize,
) -> Result<Option<Trade>, RouterError> {
    Ok(get_ranked_trades(snapshot, query, max_hops)?.into_iter().next())
}

fn validate_query(query: &TradeQuery) -> Result<(), RouterError> {
    if query.token_in == query.token_out {
        return Err(RouterError::InvalidQuery(
            "input and output token must differ".to_string(),
        ));
    }
    if query.amount.is_zero() {
        return Err(RouterError::InvalidQuery(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Slippage floor for an exact-in trade: the least output the caller should
/// accept on-chain. Applied after route selection, never during it.
pub fn minimum_received(trade: &Trade, slippage_bps: u32) -> BigUint {
    let denominator = BigUint::from(SLIPPAGE_DENOMINATOR);
    let tolerance = BigUint::from(slippage_bps.min(SLIPPAGE_DENOMINATOR));
    trade.amount_out() * (&denominator - tolerance) / denominator
}

/// Slippage ceiling for an exact-out trade: the most input the caller should
/// allow, rounded up.
pub fn maximum_sold(trade: &Trade, slippage_bps: u32) -> BigUint {
    let denominator = BigUint::from(SLIPPAGE_DENOMINATOR);
    let tolerance = BigUint::from(slippage_bps);
    let numerator = trade.amount_in() * (&denominator + tolerance);
    (&numerator + &denominator - BigUint::one()) / denominator
}
