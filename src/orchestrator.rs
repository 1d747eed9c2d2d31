use crate::config::RouterConfig;
use crate::core::engine::{QuoteEngine, QuoteOutcome};
use crate::core::registry::{self, PoolSnapshot};
use crate::core::router::{maximum_sold, minimum_received};
use crate::core::types::{Direction, Trade, TradeQuery};
use crate::core::units;
use crate::types::{QuoteRequest, QuoteResponse, ResponsePool};
use anyhow::{anyhow, Context, Result};
use num_bigint::BigUint;
use std::path::Path;
use std::str::FromStr;

pub fn validate_request(config: &RouterConfig, request: &QuoteRequest) -> Result<()> {
    if request.buyTokenAddress.trim().is_empty() || request.sellTokenAddress.trim().is_empty() {
        return Err(anyhow!("Buy and Sell Token addresses cannot be empty"));
    }

    if !config.supported_tokens.contains(&request.buyTokenAddress)
        || !config.supported_tokens.contains(&request.sellTokenAddress)
    {
        return Err(anyhow!("Unsupported token address"));
    }

    match (&request.sellAmount, &request.buyAmount) {
        (Some(_), Some(_)) => Err(anyhow!("Provide either Sell or Buy Amount, not both")),
        (None, None) => Err(anyhow!("Either Sell or Buy Amount is mandatory")),
        _ => Ok(()),
    }
}

/// Read the snapshot the external data layer last wrote to the working dir.
pub fn load_snapshot(config: &RouterConfig) -> Result<PoolSnapshot> {
    let dir = Path::new(config.working_dir.as_str());
    let snapshot_file_path = dir.join(config.snapshot_file.clone());
    registry::read_snapshot_from_disk(snapshot_file_path)
}

/// Bootstrap a snapshot from the CSV pool-definition file and persist it in
/// the snapshot format. Block number 0 marks reserves not yet refreshed
/// against a specific block.
pub fn import_pool_definitions(config: &RouterConfig) -> Result<PoolSnapshot> {
    let dir = Path::new(config.working_dir.as_str());
    if !dir.exists() {
        return Err(anyhow!("Working directory not found"));
    }
    let pool_file_path = dir.join(config.pool_file.clone());
    let snapshot_file_path = dir.join(config.snapshot_file.clone());

    let pools = registry::read_pools_from_csv(pool_file_path, &config.supported_tokens)
        .context("Error reading pool definitions".to_string())?;
    let snapshot = PoolSnapshot::new(pools, 0);
    registry::write_snapshot_on_disk(snapshot_file_path, &snapshot)
        .context("Error writing pool snapshot".to_string())?;
    Ok(snapshot)
}

/// Resolve a quote request against the supplied snapshot. `Ok(None)` means no
/// route had enough liquidity — the caller presents that as a normal state.
pub fn get_router_quote(
    config: &RouterConfig,
    snapshot: &PoolSnapshot,
    engine: &QuoteEngine,
    params: &QuoteRequest,
) -> Result<Option<QuoteResponse>> {
    validate_request(config, params)?;

    let (raw_amount, direction) = match (&params.sellAmount, &params.buyAmount) {
        (Some(amount), None) => (amount, Direction::ExactIn),
        (None, Some(amount)) => (amount, Direction::ExactOut),
        // validate_request already rejected the other combinations
        _ => unreachable!(),
    };
    let amount = BigUint::from_str(raw_amount.trim())
        .map_err(|_| anyhow!("Amount must be a positive integer in native units"))?;

    let query = TradeQuery {
        token_in: params.sellTokenAddress.clone(),
        token_out: params.buyTokenAddress.clone(),
        amount,
        direction,
    };

    let best = match engine.quote(snapshot, &query, config.max_hops)? {
        QuoteOutcome::Current(best) => best,
        QuoteOutcome::Superseded => return Err(anyhow!("Quote superseded by a newer query")),
    };
    let Some(trade) = best else {
        tracing::info!(
            token_in = %query.token_in,
            token_out = %query.token_out,
            "no viable route for quote"
        );
        return Ok(None);
    };

    let slippage_bps = params.slippageBps.unwrap_or(config.default_slippage_bps);
    let guaranteed = match direction {
        Direction::ExactIn => minimum_received(&trade, slippage_bps),
        Direction::ExactOut => maximum_sold(&trade, slippage_bps),
    };

    log_trade(snapshot, &trade);

    Ok(Some(QuoteResponse {
        sellTokenAddress: params.sellTokenAddress.clone(),
        buyTokenAddress: params.buyTokenAddress.clone(),
        sellAmount: trade.amount_in().to_string(),
        buyAmount: trade.amount_out().to_string(),
        guaranteedAmount: guaranteed.to_string(),
        blockNumber: snapshot.block_number,
        chainId: config.chain_id.clone(),
        route: build_response_route(snapshot, &trade),
    }))
}

fn build_response_route(snapshot: &PoolSnapshot, trade: &Trade) -> Vec<ResponsePool> {
    trade
        .path
        .pools
        .iter()
        .enumerate()
        .map(|(hop, &pool_index)| ResponsePool {
            pairAddress: snapshot.pool(pool_index).address.clone(),
            tokenIn: trade.path.tokens[hop].clone(),
            tokenOut: trade.path.tokens[hop + 1].clone(),
        })
        .collect()
}

fn log_trade(snapshot: &PoolSnapshot, trade: &Trade) {
    // Display formatting only; routing math never goes through f64
    let first_pool = snapshot.pool(trade.path.pools[0]);
    let last_pool = snapshot.pool(trade.path.pools[trade.path.hops() - 1]);
    let decimals_in = first_pool
        .decimals_of(&trade.path.tokens[0])
        .unwrap_or_default();
    let decimals_out = last_pool
        .decimals_of(&trade.path.tokens[trade.path.tokens.len() - 1])
        .unwrap_or_default();
    tracing::info!(
        hops = trade.path.hops(),
        amount_in = units::to_display(trade.amount_in(), decimals_in),
        amount_out = units::to_display(trade.amount_out(), decimals_out),
        "selected best trade"
    );
}
