use super::constants::FEE_DENOMINATOR;
use super::registry::PoolSnapshot;
use super::types::{Direction, Pool, Trade, TradePath};
use num_bigint::BigUint;
use num_traits::{One, Zero};

impl Pool {
    /// Constant-product output for an exact input, fee taken off the input:
    /// out = (x * (D - f) * R_out) / (R_in * D + x * (D - f)), floored to
    /// match on-chain integer semantics.
    pub fn get_amount_out(
        &self,
        amount_in: &BigUint,
        reserve_in: &BigUint,
        reserve_out: &BigUint,
    ) -> BigUint {
        let fee_denominator = BigUint::from(FEE_DENOMINATOR);
        let fee_numerator = BigUint::from(self.fee_bps);
        if fee_numerator >= fee_denominator {
            return BigUint::zero();
        }

        let amount_in_with_fee = amount_in * (&fee_denominator - &fee_numerator);
        let numerator = &amount_in_with_fee * reserve_out;
        let denominator = reserve_in * &fee_denominator + &amount_in_with_fee;

        if denominator.is_zero() {
            return BigUint::zero();
        }
        numerator / denominator
    }

    /// Input required for an exact output, solved in reverse and rounded up.
    /// None when the pool cannot supply `amount_out` — the requested output
    /// must stay strictly below the output reserve.
    pub fn get_amount_in(
        &self,
        amount_out: &BigUint,
        reserve_in: &BigUint,
        reserve_out: &BigUint,
    ) -> Option<BigUint> {
        let fee_denominator = BigUint::from(FEE_DENOMINATOR);
        let fee_numerator = BigUint::from(self.fee_bps);
        if fee_numerator >= fee_denominator {
            return None;
        }

        if amount_out >= reserve_out {
            return None;
        }
        let numerator = reserve_in * amount_out * &fee_denominator;
        let denominator = (reserve_out - amount_out) * (&fee_denominator - &fee_numerator);
        if denominator.is_zero() {
            return None;
        }
        // Round up so the computed input is always sufficient on-chain
        Some((&numerator + &denominator - BigUint::one()) / denominator)
    }
}

/// Walk the path forward, feeding each hop's output into the next. None when
/// any hop is unusable or produces nothing — the path is then simply not a
/// candidate, never an error.
pub fn simulate_exact_in(
    snapshot: &PoolSnapshot,
    path: &TradePath,
    amount_in: &BigUint,
) -> Option<Trade> {
    let mut hop_amounts = Vec::with_capacity(path.tokens.len());
    hop_amounts.push(amount_in.clone());

    let mut current = amount_in.clone();
    for (hop, &pool_index) in path.pools.iter().enumerate() {
        let pool = snapshot.pool(pool_index);
        if !pool.is_usable() {
            return None;
        }
        let (reserve_in, reserve_out) = pool.oriented_reserves(&path.tokens[hop])?;
        current = pool.get_amount_out(&current, reserve_in, reserve_out);
        if current.is_zero() {
            return None;
        }
        hop_amounts.push(current.clone());
    }

    Some(Trade {
        path: path.clone(),
        direction: Direction::ExactIn,
        amount_fixed: amount_in.clone(),
        amount_computed: current,
        hop_amounts,
    })
}

/// Walk the path backward, computing the input each preceding hop must supply
/// for the known downstream output. None when any hop cannot cover the
/// required output.
pub fn simulate_exact_out(
    snapshot: &PoolSnapshot,
    path: &TradePath,
    amount_out: &BigUint,
) -> Option<Trade> {
    let mut hop_amounts = vec![amount_out.clone()];

    let mut current = amount_out.clone();
    for (hop, &pool_index) in path.pools.iter().enumerate().rev() {
        let pool = snapshot.pool(pool_index);
        if !pool.is_usable() {
            return None;
        }
        let (reserve_in, reserve_out) = pool.oriented_reserves(&path.tokens[hop])?;
        current = pool.get_amount_in(&current, reserve_in, reserve_out)?;
        hop_amounts.push(current.clone());
    }

    // Built output-end first; flip so indices line up with path tokens
    hop_amounts.reverse();

    Some(Trade {
        path: path.clone(),
        direction: Direction::ExactOut,
        amount_fixed: amount_out.clone(),
        amount_computed: current,
        hop_amounts,
    })
}
