use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, ToSchema, IntoParams, Clone, Debug)]
pub struct QuoteRequest {
    #[schema(example = "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8")]
    pub sellTokenAddress: String,

    #[schema(example = "0x4718f5a0fc34cc1af16a1cdee98ffb20c31f5cd61d6ab07201858f4287c938d")]
    pub buyTokenAddress: String,

    /// Exact-in amount in the sell token's native units. Exactly one of
    /// sellAmount/buyAmount must be set.
    #[schema(example = "1000000", nullable = true)]
    pub sellAmount: Option<String>,

    /// Exact-out amount in the buy token's native units.
    #[schema(example = "2106900000", nullable = true)]
    pub buyAmount: Option<String>,

    /// Slippage tolerance in basis points, applied to the quoted amount only.
    #[schema(example = 50, nullable = true)]
    pub slippageBps: Option<u32>,
}

#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct QuoteResponse {
    pub sellTokenAddress: String,
    pub buyTokenAddress: String,
    pub sellAmount: String,
    pub buyAmount: String,
    /// Minimum received (exact-in) or maximum sold (exact-out) after the
    /// slippage tolerance is applied.
    pub guaranteedAmount: String,
    pub blockNumber: u64,
    pub chainId: String,
    pub route: Vec<ResponsePool>,
}

#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ResponsePool {
    pub pairAddress: String,
    pub tokenIn: String,
    pub tokenOut: String,
}
