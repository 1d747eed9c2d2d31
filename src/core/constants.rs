/// Fee and slippage ratios are expressed in basis points over this base.
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Protocol-wide swap fee: 30 bps = 0.3%, the constant-product default.
pub const DEFAULT_FEE_BPS: u32 = 30;

/// Hop bound for path enumeration. Routes longer than this are never
/// worth their cumulative fee in practice.
pub const DEFAULT_MAX_HOPS: usize = 3;

pub const SLIPPAGE_DENOMINATOR: u32 = 10_000;
