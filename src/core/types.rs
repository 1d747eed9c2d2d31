use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Token address in the chain's hex form.
pub type TokenId = String;

/// One constant-product liquidity pool as seen at snapshot time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pool {
    pub address: String,
    pub token0: TokenId,
    pub token1: TokenId,
    pub reserve0: BigUint,
    pub reserve1: BigUint,
    pub decimals0: u32,
    pub decimals1: u32,
    /// Swap fee in basis points (30 = 0.3%)
    pub fee_bps: u32,
}

impl Pool {
    pub fn contains(&self, token: &str) -> bool {
        self.token0 == token || self.token1 == token
    }

    /// The opposite side of the pair, or None if `token` is not in this pool.
    pub fn other(&self, token: &str) -> Option<&TokenId> {
        if self.token0 == token {
            Some(&self.token1)
        } else if self.token1 == token {
            Some(&self.token0)
        } else {
            None
        }
    }

    /// Reserves oriented as (reserve_in, reserve_out) for a swap that enters
    /// the pool with `token_in`.
    pub fn oriented_reserves(&self, token_in: &str) -> Option<(&BigUint, &BigUint)> {
        if self.token0 == token_in {
            Some((&self.reserve0, &self.reserve1))
        } else if self.token1 == token_in {
            Some((&self.reserve1, &self.reserve0))
        } else {
            None
        }
    }

    pub fn decimals_of(&self, token: &str) -> Option<u32> {
        if self.token0 == token {
            Some(self.decimals0)
        } else if self.token1 == token {
            Some(self.decimals1)
        } else {
            None
        }
    }

    /// A pool with an empty side cannot price a swap.
    pub fn is_usable(&self) -> bool {
        !self.reserve0.is_zero() && !self.reserve1.is_zero()
    }
}

/// Which side of the trade the caller fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    ExactIn,
    ExactOut,
}

#[derive(Clone, Debug)]
pub struct TradeQuery {
    pub token_in: TokenId,
    pub token_out: TokenId,
    pub amount: BigUint,
    pub direction: Direction,
}

/// An ordered walk through the pool graph. `pools` holds indices into the
/// snapshot's pool vector; `tokens` has one more entry than `pools`, with
/// consecutive pools sharing the token between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TradePath {
    pub tokens: Vec<TokenId>,
    pub pools: Vec<usize>,
}

impl TradePath {
    pub fn hops(&self) -> usize {
        self.pools.len()
    }
}

/// A simulated trade along one path. `amount_fixed` is the side the caller
/// specified; `amount_computed` is the derived side. `hop_amounts` carries the
/// token amount at every node of the path, input end first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    pub path: TradePath,
    pub direction: Direction,
    pub amount_fixed: BigUint,
    pub amount_computed: BigUint,
    pub hop_amounts: Vec<BigUint>,
}

impl Trade {
    pub fn amount_in(&self) -> &BigUint {
        match self.direction {
            Direction::ExactIn => &self.amount_fixed,
            Direction::ExactOut => &self.amount_computed,
        }
    }

    pub fn amount_out(&self) -> &BigUint {
        match self.direction {
            Direction::ExactIn => &self.amount_computed,
            Direction::ExactOut => &self.amount_fixed,
        }
    }
}
