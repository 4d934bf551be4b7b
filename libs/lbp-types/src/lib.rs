#![no_std]

mod config;
mod error;
mod migration;
mod plan;
mod pool;

pub use config::*;
pub use error::*;
pub use migration::*;
pub use plan::*;
pub use pool::*;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
/// Limited by u128 sqrt price representation (originally -887272 for uint160)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Limited by u128 sqrt price representation (originally 887272 for uint160)
pub const MAX_TICK: i32 = 443636;

/// Minimum sqrt price (at MIN_TICK)
/// sqrt(1.0001^-443636) * 2^96, rounded up
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Maximum sqrt price (at MAX_TICK), exclusive upper bound for pool prices
/// sqrt(1.0001^443636) * 2^96, bounded by u128::MAX
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Smallest tick spacing a pool accepts
pub const MIN_TICK_SPACING: i32 = 1;

/// Largest tick spacing a pool accepts
pub const MAX_TICK_SPACING: i32 = 16383;

/// Maximum LP fee in hundredths of a basis point (100%)
pub const MAX_LP_FEE: u32 = 1_000_000;

/// Denominator for the share of total supply sold in the auction
pub const TOKEN_SPLIT_DENOMINATOR: u32 = 10_000_000;

/// Fee amount in hundredths of a basis point (1e-6)
/// 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Lowest tick that is a multiple of `tick_spacing`
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// Highest tick that is a multiple of `tick_spacing`
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}

/// Calculate maximum liquidity per tick for a given tick spacing
pub fn max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let min_tick = min_usable_tick(tick_spacing);
    let max_tick = max_usable_tick(tick_spacing);
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    u128::MAX / num_ticks
}
