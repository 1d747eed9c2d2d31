use super::types::{Direction, Trade};
use std::cmp::Ordering;

/// Total order over trades of the same direction: best trade first. Exact-in
/// ranks by descending output, exact-out by ascending required input. Equal
/// outcomes prefer the shorter path. Trades still tied compare Equal — a
/// stable sort over enumeration order then keeps the earlier-discovered
/// route first, which is what makes repeated calls return identical results.
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    debug_assert_eq!(a.direction, b.direction);
    let by_amount = match a.direction {
        Direction::ExactIn => b.amount_out().cmp(a.amount_out()),
        Direction::ExactOut => a.amount_in().cmp(b.amount_in()),
    };
    by_amount.then_with(|| a.path.hops().cmp(&b.path.hops()))
}
