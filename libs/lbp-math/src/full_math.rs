use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let result = a_256.mul(&b_256).div(&denom_256);

    u128_from_u256(env, &result)
}

/// floor(x * y / 2^96) for any x below 2^160 and y below 2^128,
/// without forming the full 288-bit product
pub fn mul_shr_96(env: &Env, x: &U256, y: &U256) -> U256 {
    let q96 = U256::from_u128(env, 1u128 << 96);
    let hi = x.shr(96);
    let lo = x.rem_euclid(&q96);
    hi.mul(y).add(&lo.mul(y).shr(96))
}

/// Integer square root, rounded down. The root of any 256-bit value fits in u128.
pub fn sqrt_u256(env: &Env, value: &U256) -> u128 {
    let zero = U256::from_u32(env, 0);
    if *value == zero {
        return 0;
    }

    // Newton iteration from a power of two at or above the root decreases
    // monotonically to floor(sqrt(value))
    let bits = bit_length(value);
    let mut x = U256::from_u32(env, 1).shl((bits + 1) / 2);
    loop {
        let y = x.add(&value.div(&x)).shr(1);
        if y >= x {
            break;
        }
        x = y;
    }

    u128_from_u256(env, &x)
}

/// Number of significant bits in a U256
pub fn bit_length(value: &U256) -> u32 {
    let hi = value.shr(128).to_u128().unwrap_or(0);
    if hi != 0 {
        return 256 - hi.leading_zeros();
    }
    let lo = value.to_u128().unwrap_or(0);
    128 - lo.leading_zeros()
}

/// U256 max value: 2^256 - 1
pub fn u256_max(env: &Env) -> U256 {
    let high = U256::from_u128(env, u128::MAX);
    high.shl(128).add(&U256::from_u128(env, u128::MAX))
}

/// Convert U256 to u128, panics if overflow
fn u128_from_u256(_env: &Env, value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("U256 overflow when converting to u128"),
    }
}
