use crate::full_math::sqrt_u256;
use lbp_types::{LbpError, MAX_SQRT_RATIO, MIN_SQRT_RATIO};
use soroban_sdk::{log, Env, U256};

/// Largest Q96 price the pool can represent before widening: 2^160 - 1
pub fn max_price_x96(env: &Env) -> U256 {
    U256::from_u32(env, 1)
        .shl(160)
        .sub(&U256::from_u32(env, 1))
}

/// 2^192 / price, the Q96 price seen from the other side of the pair
pub fn invert_price_x96(env: &Env, price_x96: &U256) -> Result<U256, LbpError> {
    if *price_x96 == U256::from_u32(env, 0) {
        log!(env, "price is zero");
        return Err(LbpError::InvalidPrice);
    }
    Ok(U256::from_u32(env, 1).shl(192).div(price_x96))
}

/// Convert an auction clearing price (Q96, currency per token) into the
/// pool's token1-per-token0 price widened to Q192.
///
/// The auction always quotes currency per token. When the currency sorts
/// first it is token0, so the pool price is the reciprocal.
pub fn convert_to_price_x192(
    env: &Env,
    clearing_price_x96: &U256,
    currency_is_currency0: bool,
) -> Result<U256, LbpError> {
    if *clearing_price_x96 == U256::from_u32(env, 0) {
        log!(env, "clearing price is zero");
        return Err(LbpError::InvalidPrice);
    }

    let max_price = max_price_x96(env);
    if *clearing_price_x96 > max_price {
        log!(
            env,
            "clearing price out of range (price, max)",
            clearing_price_x96.clone(),
            max_price
        );
        return Err(LbpError::InvalidPrice);
    }

    let price_x96 = if currency_is_currency0 {
        invert_price_x96(env, clearing_price_x96)?
    } else {
        clearing_price_x96.clone()
    };

    if price_x96 > max_price || price_x96 == U256::from_u32(env, 0) {
        log!(
            env,
            "price out of range (price, max)",
            price_x96,
            max_price
        );
        return Err(LbpError::InvalidPrice);
    }

    Ok(price_x96.shl(96))
}

/// Square root of a Q192 price as a Q96 sqrt price, rounded down.
/// The result must lie in [MIN_SQRT_RATIO, MAX_SQRT_RATIO).
pub fn convert_to_sqrt_price_x96(env: &Env, price_x192: &U256) -> Result<u128, LbpError> {
    let sqrt_price_x96 = sqrt_u256(env, price_x192);

    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        log!(
            env,
            "sqrt price out of bounds (sqrt_price, min, max)",
            sqrt_price_x96,
            MIN_SQRT_RATIO,
            MAX_SQRT_RATIO
        );
        return Err(LbpError::InvalidPrice);
    }

    Ok(sqrt_price_x96)
}
