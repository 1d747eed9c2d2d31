use dex_router::config::RouterConfig;
use dex_router::core::constants::DEFAULT_FEE_BPS;
use dex_router::core::engine::{QuoteEngine, QuoteOutcome};
use dex_router::core::errors::RouterError;
use dex_router::core::paths::find_paths;
use dex_router::core::registry::{
    read_pools_from_csv, read_snapshot_from_disk, write_snapshot_on_disk, PoolSnapshot,
};
use dex_router::core::router::{get_best_trade, get_ranked_trades, maximum_sold, minimum_received};
use dex_router::core::swap::{simulate_exact_in, simulate_exact_out};
use dex_router::core::trade::trade_comparator;
use dex_router::core::types::{Direction, Pool, Trade, TradePath, TradeQuery};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::HashSet;

const A: &str = "0xaaa";
const B: &str = "0xbbb";
const C: &str = "0xccc";
const D: &str = "0xddd";

fn pool(address: &str, token0: &str, token1: &str, reserve0: u128, reserve1: u128) -> Pool {
    Pool {
        address: address.to_string(),
        token0: token0.to_string(),
        token1: token1.to_string(),
        reserve0: BigUint::from(reserve0),
        reserve1: BigUint::from(reserve1),
        decimals0: 18,
        decimals1: 18,
        fee_bps: DEFAULT_FEE_BPS,
    }
}

fn snapshot(pools: Vec<Pool>) -> PoolSnapshot {
    PoolSnapshot::new(pools, 1)
}

fn exact_in(token_in: &str, token_out: &str, amount: u128) -> TradeQuery {
    TradeQuery {
        token_in: token_in.to_string(),
        token_out: token_out.to_string(),
        amount: BigUint::from(amount),
        direction: Direction::ExactIn,
    }
}

fn exact_out(token_in: &str, token_out: &str, amount: u128) -> TradeQuery {
    TradeQuery {
        token_in: token_in.to_string(),
        token_out: token_out.to_string(),
        amount: BigUint::from(amount),
        direction: Direction::ExactOut,
    }
}

#[test]
fn single_pool_exact_in_matches_closed_form() {
    // out = floor(100 * 9970 * 2000 / (1000 * 10000 + 100 * 9970)) = 181
    let snap = snapshot(vec![pool("0xp", A, B, 1000, 2000)]);
    let trade = get_best_trade(&snap, &exact_in(A, B, 100), 3)
        .unwrap()
        .expect("direct pool must route");

    assert_eq!(trade.amount_out(), &BigUint::from(181u32));
    assert_eq!(trade.path.tokens, vec![A.to_string(), B.to_string()]);
    assert_eq!(trade.hop_amounts.len(), 2);
    assert_eq!(&trade.hop_amounts[0], trade.amount_in());
    assert_eq!(&trade.hop_amounts[1], trade.amount_out());
}

#[test]
fn exact_out_round_trip_never_needs_more_input() {
    // Fee monotonicity: feeding the simulated output back as an exact-out
    // target must not require more than the original input.
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let reserve0: u128 = rng.gen_range(1_000..1_000_000_000_000);
        let reserve1: u128 = rng.gen_range(1_000..1_000_000_000_000);
        let amount_in: u128 = rng.gen_range(1..reserve0 / 2);

        let snap = snapshot(vec![pool("0xp", A, B, reserve0, reserve1)]);
        let paths = find_paths(&snap, &A.to_string(), &B.to_string(), 1);
        let path = &paths[0];

        let Some(forward) = simulate_exact_in(&snap, path, &BigUint::from(amount_in)) else {
            continue;
        };
        let reverse = simulate_exact_out(&snap, path, forward.amount_out())
            .expect("simulated output must be reachable");

        assert!(
            reverse.amount_in() <= &BigUint::from(amount_in),
            "round trip required {} for original input {}",
            reverse.amount_in(),
            amount_in
        );
    }
}

#[test]
fn exact_in_never_beats_zero_fee_constant_product() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let reserve0: u128 = rng.gen_range(1_000..1_000_000_000_000);
        let reserve1: u128 = rng.gen_range(1_000..1_000_000_000_000);
        let amount_in: u128 = rng.gen_range(1..reserve0);

        let snap = snapshot(vec![pool("0xp", A, B, reserve0, reserve1)]);
        let paths = find_paths(&snap, &A.to_string(), &B.to_string(), 1);
        let path = &paths[0];
        let Some(trade) = simulate_exact_in(&snap, path, &BigUint::from(amount_in)) else {
            continue;
        };

        let zero_fee_bound =
            BigUint::from(amount_in) * BigUint::from(reserve1) / BigUint::from(reserve0 + amount_in);
        assert!(trade.amount_out() <= &zero_fee_bound);
    }
}

#[test]
fn find_paths_respects_hop_bound_and_pool_uniqueness() {
    let snap = snapshot(vec![
        pool("0xab", A, B, 1000, 1000),
        pool("0xbc", B, C, 1000, 1000),
        pool("0xcd", C, D, 1000, 1000),
        pool("0xac", A, C, 1000, 1000),
        pool("0xbd", B, D, 1000, 1000),
        pool("0xad", A, D, 1000, 1000),
    ]);

    for max_hops in 1..=3 {
        let paths = find_paths(&snap, &A.to_string(), &D.to_string(), max_hops);
        assert!(!paths.is_empty());
        for path in &paths {
            assert!(path.hops() <= max_hops);
            assert_eq!(path.tokens.len(), path.pools.len() + 1);
            assert_eq!(path.tokens[0], A);
            assert_eq!(path.tokens[path.tokens.len() - 1], D);

            let distinct: HashSet<usize> = path.pools.iter().copied().collect();
            assert_eq!(distinct.len(), path.pools.len(), "repeated pool in path");
        }
    }

    // Larger hop budget can only add paths, never remove them
    let one_hop = find_paths(&snap, &A.to_string(), &D.to_string(), 1);
    let three_hops = find_paths(&snap, &A.to_string(), &D.to_string(), 3);
    assert!(three_hops.len() > one_hop.len());
}

#[test]
fn two_hop_route_when_no_direct_pool() {
    let snap = snapshot(vec![
        pool("0xab", A, B, 1_000_000, 2_000_000),
        pool("0xbc", B, C, 2_000_000, 1_000_000),
    ]);

    let trade = get_best_trade(&snap, &exact_in(A, C, 10_000), 3)
        .unwrap()
        .expect("two-hop route must exist");
    assert_eq!(
        trade.path.tokens,
        vec![A.to_string(), B.to_string(), C.to_string()]
    );
    assert_eq!(trade.path.hops(), 2);

    // The trade combines both hops: second hop priced on the first hop's output
    let first_hop_out = &trade.hop_amounts[1];
    let second_pool = snap.pool(trade.path.pools[1]);
    let (reserve_in, reserve_out) = second_pool.oriented_reserves(B).unwrap();
    assert_eq!(
        trade.amount_out(),
        &second_pool.get_amount_out(first_hop_out, reserve_in, reserve_out)
    );

    // D is absent from every pool: no candidates, not an error
    assert_eq!(get_best_trade(&snap, &exact_in(A, D, 10_000), 3).unwrap(), None);
}

#[test]
fn exact_out_exceeding_reserve_is_infeasible() {
    let snap = snapshot(vec![pool("0xp", A, B, 1000, 2000)]);

    // Requesting the whole output reserve (or more) cannot be served
    assert_eq!(get_best_trade(&snap, &exact_out(A, B, 2000), 3).unwrap(), None);
    assert_eq!(get_best_trade(&snap, &exact_out(A, B, 2500), 3).unwrap(), None);

    // Just below the reserve is still feasible
    let trade = get_best_trade(&snap, &exact_out(A, B, 1999), 3)
        .unwrap()
        .expect("output below reserve must be feasible");
    assert_eq!(trade.amount_out(), &BigUint::from(1999u32));
}

#[test]
fn zero_liquidity_pool_is_never_routed() {
    let snap = snapshot(vec![
        pool("0xdrained", A, B, 0, 2000),
        pool("0xlive", A, B, 1000, 2000),
    ]);

    let trades = get_ranked_trades(&snap, &exact_in(A, B, 100), 3).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].path.pools, vec![1]);
}

#[test]
fn best_trade_is_deterministic() {
    let snap = snapshot(vec![
        pool("0xab1", A, B, 1_000_000, 2_000_000),
        pool("0xab2", A, B, 1_000_000, 2_000_000),
        pool("0xbc", B, C, 2_000_000, 1_000_000),
        pool("0xac", A, C, 900_000, 450_000),
    ]);
    let query = exact_in(A, C, 10_000);

    let first = get_ranked_trades(&snap, &query, 3).unwrap();
    let second = get_ranked_trades(&snap, &query, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn equal_trades_keep_discovery_order() {
    // Two identical pools produce numerically equal trades; the earlier
    // pool in the snapshot must win.
    let snap = snapshot(vec![
        pool("0xab1", A, B, 1_000_000, 2_000_000),
        pool("0xab2", A, B, 1_000_000, 2_000_000),
    ]);

    let trades = get_ranked_trades(&snap, &exact_in(A, B, 10_000), 3).unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].amount_out(), trades[1].amount_out());
    assert_eq!(trades[0].path.pools, vec![0]);
}

#[test]
fn comparator_prefers_fewer_hops_on_equal_amounts() {
    let short = Trade {
        path: TradePath {
            tokens: vec![A.to_string(), B.to_string()],
            pools: vec![0],
        },
        direction: Direction::ExactIn,
        amount_fixed: BigUint::from(100u32),
        amount_computed: BigUint::from(181u32),
        hop_amounts: vec![BigUint::from(100u32), BigUint::from(181u32)],
    };
    let long = Trade {
        path: TradePath {
            tokens: vec![A.to_string(), C.to_string(), B.to_string()],
            pools: vec![1, 2],
        },
        direction: Direction::ExactIn,
        amount_fixed: BigUint::from(100u32),
        amount_computed: BigUint::from(181u32),
        hop_amounts: vec![
            BigUint::from(100u32),
            BigUint::from(140u32),
            BigUint::from(181u32),
        ],
    };

    assert_eq!(trade_comparator(&short, &long), Ordering::Less);
    assert_eq!(trade_comparator(&long, &short), Ordering::Greater);

    // Larger output wins regardless of hops
    let mut better_long = long.clone();
    better_long.amount_computed = BigUint::from(182u32);
    assert_eq!(trade_comparator(&better_long, &short), Ordering::Less);
}

#[test]
fn invalid_queries_fail_fast() {
    let snap = snapshot(vec![pool("0xp", A, B, 1000, 2000)]);

    let same_token = get_best_trade(&snap, &exact_in(A, A, 100), 3);
    assert!(matches!(same_token, Err(RouterError::InvalidQuery(_))));

    let zero_amount = get_best_trade(&snap, &exact_in(A, B, 0), 3);
    assert!(matches!(zero_amount, Err(RouterError::InvalidQuery(_))));
}

#[test]
fn router_never_mutates_the_snapshot() {
    let snap = snapshot(vec![
        pool("0xab", A, B, 1_000_000, 2_000_000),
        pool("0xbc", B, C, 2_000_000, 1_000_000),
    ]);
    let before = snap.clone();

    get_ranked_trades(&snap, &exact_in(A, C, 10_000), 3).unwrap();
    get_ranked_trades(&snap, &exact_out(A, C, 10_000), 3).unwrap();
    assert_eq!(snap, before);
}

#[test]
fn slippage_bounds_applied_after_selection() {
    let snap = snapshot(vec![pool("0xp", A, B, 1_000_000, 2_000_000)]);

    let trade = get_best_trade(&snap, &exact_in(A, B, 10_000), 3)
        .unwrap()
        .unwrap();
    let floor = minimum_received(&trade, 50);
    assert_eq!(floor, trade.amount_out() * BigUint::from(9950u32) / BigUint::from(10_000u32));
    assert!(&floor <= trade.amount_out());
    // Zero tolerance keeps the quoted amount
    assert_eq!(&minimum_received(&trade, 0), trade.amount_out());

    let trade = get_best_trade(&snap, &exact_out(A, B, 10_000), 3)
        .unwrap()
        .unwrap();
    let ceiling = maximum_sold(&trade, 50);
    assert!(&ceiling >= trade.amount_in());
    assert_eq!(&maximum_sold(&trade, 0), trade.amount_in());
}

#[test]
fn quote_engine_releases_only_current_generation() {
    let snap = snapshot(vec![pool("0xp", A, B, 1_000_000, 2_000_000)]);
    let engine = QuoteEngine::new();
    let query = exact_in(A, B, 10_000);

    let outcome = engine.quote(&snap, &query, 3).unwrap();
    let expected = get_best_trade(&snap, &query, 3).unwrap();
    assert_eq!(outcome, QuoteOutcome::Current(expected));

    // A computation that started before a newer one began is stale
    let stale = engine.begin();
    engine.begin();
    assert!(!engine.is_current(stale));
}

#[test]
fn snapshot_survives_disk_round_trip() {
    let snap = snapshot(vec![
        pool("0xab", A, B, 1_000_000, 2_000_000),
        pool("0xbc", B, C, 2_000_000, 1_000_000),
    ]);
    let path = std::env::temp_dir().join("dex_router_snapshot_test.json");

    write_snapshot_on_disk(&path, &snap).unwrap();
    let restored = read_snapshot_from_disk(&path).unwrap();
    assert_eq!(restored, snap);

    let _ = std::fs::remove_file(path);
}

#[test]
fn csv_loader_filters_unsupported_tokens() {
    let path = std::env::temp_dir().join("dex_router_pools_test.csv");
    std::fs::write(
        &path,
        "0xp1,0xaaa,0xbbb,1000,2000,18,6\n\
         0xp2,0xaaa,0xeee,1,1,18,18\n\
         0xp3,0xbbb,0xccc,5000,5000,6,6,25\n",
    )
    .unwrap();

    let supported: Vec<String> = [A, B, C].iter().map(|x| x.to_string()).collect();
    let pools = read_pools_from_csv(&path, &supported).unwrap();

    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].address, "0xp1");
    assert_eq!(pools[0].fee_bps, DEFAULT_FEE_BPS);
    assert_eq!(pools[0].decimals1, 6);
    assert_eq!(pools[1].address, "0xp3");
    assert_eq!(pools[1].fee_bps, 25);

    let _ = std::fs::remove_file(path);
}

#[test]
fn snapshot_knows_which_tokens_it_covers() {
    let snap = snapshot(vec![pool("0xab", A, B, 1000, 2000)]);
    assert!(snap.contains_token(&A.to_string()));
    assert!(snap.contains_token(&B.to_string()));
    assert!(!snap.contains_token(&C.to_string()));
}

#[test]
fn display_units_round_at_token_precision() {
    use dex_router::core::units::{from_display, to_display};

    assert_eq!(to_display(&BigUint::from(1_500_000u32), 6), 1.5);
    assert_eq!(from_display(1.5, 6), BigUint::from(1_500_000u32));
    // Truncates below the smallest unit and clamps non-positive values
    assert_eq!(from_display(0.0000001, 6), BigUint::from(0u32));
    assert_eq!(from_display(-2.0, 6), BigUint::from(0u32));
}

#[test]
fn config_defaults_are_routable() {
    let config = RouterConfig::default();
    assert!(config.max_hops >= 1);
    assert!(!config.supported_tokens.is_empty());
    assert!(config.default_slippage_bps < 10_000);
}
