use crate::full_math::u256_max;
use lbp_types::Q96;
use soroban_sdk::{Env, U256};

/// Calculate liquidity from token amounts for a price range.
/// Returns `None` when the liquidity does not fit in u128.
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
    amount1: u128,
) -> Option<u128> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Current price below range - all token0
        get_liquidity_for_amount0(env, sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // Current price in range - both tokens, bounded by the scarcer one
        let liquidity0 = liquidity_for_amount0(env, sqrt_ratio_x96, sqrt_ratio_upper, amount0);
        let liquidity1 = liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_x96, amount1);
        let liquidity = match (liquidity0, liquidity1) {
            (Some(l0), Some(l1)) => {
                if l0 < l1 {
                    l0
                } else {
                    l1
                }
            }
            (Some(l0), None) => l0,
            (None, Some(l1)) => l1,
            (None, None) => return None,
        };
        liquidity.to_u128()
    } else {
        // Current price above range - all token1
        get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// Calculate liquidity from amount0
/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
) -> Option<u128> {
    liquidity_for_amount0(env, sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)?.to_u128()
}

/// Calculate liquidity from amount1
/// L = amount1 / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount1: u128,
) -> Option<u128> {
    liquidity_for_amount1(env, sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)?.to_u128()
}

// `None` only when amount0 * intermediate overflows 256 bits, which already
// implies a liquidity above u128::MAX
fn liquidity_for_amount0(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
) -> Option<U256> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if amount0 == 0 {
        return Some(U256::from_u32(env, 0));
    }

    let lower = U256::from_u128(env, sqrt_ratio_lower);
    let upper = U256::from_u128(env, sqrt_ratio_upper);
    let amount = U256::from_u128(env, amount0);

    let intermediate = lower.mul(&upper).div(&U256::from_u128(env, Q96));
    if intermediate > u256_max(env).div(&amount) {
        return None;
    }

    let width = U256::from_u128(env, sqrt_ratio_upper - sqrt_ratio_lower);
    Some(amount.mul(&intermediate).div(&width))
}

fn liquidity_for_amount1(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount1: u128,
) -> Option<U256> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let amount = U256::from_u128(env, amount1);
    let width = U256::from_u128(env, sqrt_ratio_upper - sqrt_ratio_lower);
    Some(amount.mul(&U256::from_u128(env, Q96)).div(&width))
}

fn sort(a: u128, b: u128) -> (u128, u128) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
