use crate::liquidity_math::{
    get_liquidity_for_amount0, get_liquidity_for_amount1, get_liquidity_for_amounts,
};
use crate::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, tick_floor};
use lbp_types::{max_liquidity_per_tick, max_usable_tick, min_usable_tick, LbpError};
use soroban_sdk::{log, Env};

/// A single-asset position placed entirely on one side of the current price
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OneSidedPosition {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}

/// Usable full-range bounds for a tick spacing
pub fn full_range_ticks(tick_spacing: i32) -> (i32, i32) {
    (min_usable_tick(tick_spacing), max_usable_tick(tick_spacing))
}

/// Liquidity of the full-range position at `sqrt_price_x96`.
///
/// Fails with `InvalidLiquidity` if it is zero or above the per-tick ceiling.
pub fn full_range_liquidity(
    env: &Env,
    sqrt_price_x96: u128,
    tick_spacing: i32,
    amount0: u128,
    amount1: u128,
) -> Result<u128, LbpError> {
    let (tick_lower, tick_upper) = full_range_ticks(tick_spacing);
    let ceiling = max_liquidity_per_tick(tick_spacing);

    let liquidity = get_liquidity_for_amounts(
        env,
        sqrt_price_x96,
        get_sqrt_ratio_at_tick(env, tick_lower),
        get_sqrt_ratio_at_tick(env, tick_upper),
        amount0,
        amount1,
    );

    match liquidity {
        Some(liquidity) if liquidity > 0 && liquidity <= ceiling => Ok(liquidity),
        Some(liquidity) => {
            log!(
                env,
                "full range liquidity invalid (liquidity, max_per_tick)",
                liquidity,
                ceiling
            );
            Err(LbpError::InvalidLiquidity)
        }
        None => {
            log!(
                env,
                "full range liquidity overflows u128 (max_per_tick)",
                ceiling
            );
            Err(LbpError::InvalidLiquidity)
        }
    }
}

/// Tick range for a one-sided position that must not contain `current_tick`.
///
/// A token0 position sits above the price and a token1 position below it,
/// each reaching out to the usable full-range bound. `None` when the current
/// tick is within one spacing of that bound.
pub fn one_sided_range(
    current_tick: i32,
    tick_spacing: i32,
    asset_is_token0: bool,
) -> Option<(i32, i32)> {
    let (min_tick, max_tick) = full_range_ticks(tick_spacing);

    if asset_is_token0 {
        if max_tick - current_tick <= tick_spacing {
            return None;
        }
        Some((tick_floor(current_tick, tick_spacing) + tick_spacing, max_tick))
    } else {
        if current_tick - min_tick <= tick_spacing {
            return None;
        }
        Some((min_tick, tick_floor(current_tick, tick_spacing)))
    }
}

/// One-sided position for `amount` of a single asset, or `None` when it
/// should be skipped: degenerate range, zero liquidity, or the combined
/// liquidity with the full-range position (`base_liquidity`) exceeds the
/// per-tick ceiling.
pub fn one_sided_position(
    env: &Env,
    sqrt_price_x96: u128,
    tick_spacing: i32,
    amount: u128,
    asset_is_token0: bool,
    base_liquidity: u128,
) -> Option<OneSidedPosition> {
    let current_tick = get_tick_at_sqrt_ratio(env, sqrt_price_x96);
    let (tick_lower, tick_upper) = match one_sided_range(current_tick, tick_spacing, asset_is_token0)
    {
        Some(range) => range,
        None => {
            log!(
                env,
                "one sided range degenerate (tick, spacing)",
                current_tick,
                tick_spacing
            );
            return None;
        }
    };

    let sqrt_lower = get_sqrt_ratio_at_tick(env, tick_lower);
    let sqrt_upper = get_sqrt_ratio_at_tick(env, tick_upper);
    let liquidity = if asset_is_token0 {
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount)
    } else {
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount)
    };

    let liquidity = match liquidity {
        Some(liquidity) if liquidity > 0 => liquidity,
        _ => return None,
    };

    // Both positions share one full-range bound
    let ceiling = max_liquidity_per_tick(tick_spacing);
    match base_liquidity.checked_add(liquidity) {
        Some(total) if total <= ceiling => {}
        _ => {
            log!(
                env,
                "one sided liquidity above ceiling (liquidity, full_range, max_per_tick)",
                liquidity,
                base_liquidity,
                ceiling
            );
            return None;
        }
    }

    Some(OneSidedPosition {
        tick_lower,
        tick_upper,
        liquidity,
    })
}
