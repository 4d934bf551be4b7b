use lbp_types::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::full_math::u256_max;

// Q128 constant: 2^128 represented as U256
fn q128(env: &Env) -> U256 {
    U256::from_u32(env, 1).shl(128)
}

// sqrt(1.0001^-(2^i)) in Q128, for i in 0..19
const SQRT_RATIO_STEPS: [u128; 19] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
];

/// Calculate sqrt(1.0001^tick) * 2^96, rounded up
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> u128 {
    if tick < MIN_TICK || tick > MAX_TICK {
        panic!("Tick out of bounds");
    }

    let abs_tick = tick.unsigned_abs();

    // Product of the per-bit factors, computed for the negative tick in Q128
    let mut ratio = q128(env);
    for (bit, step) in SQRT_RATIO_STEPS.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            ratio = mul_shift_128(env, &ratio, *step);
        }
    }

    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128 -> Q96, rounding up so the result never undershoots the tick
    let shift_32 = U256::from_u128(env, 1u128 << 32);
    let mut result = ratio.div(&shift_32);
    if ratio.rem_euclid(&shift_32) > U256::from_u32(env, 0) {
        result = result.add(&U256::from_u32(env, 1));
    }

    result.to_u128().unwrap_or(u128::MAX)
}

/// Greatest tick whose sqrt ratio is at or below `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> i32 {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        panic!("sqrt price out of bounds");
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = (low + high + 1).div_euclid(2);
        let sqrt_at_mid = get_sqrt_ratio_at_tick(env, mid);

        if sqrt_at_mid <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}

/// Round a tick down to the nearest multiple of `tick_spacing`
pub fn tick_floor(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing) * tick_spacing
}

/// Helper: multiply by u128 and right shift by 128 bits
fn mul_shift_128(env: &Env, x: &U256, y: u128) -> U256 {
    let y_256 = U256::from_u128(env, y);
    x.mul(&y_256).shr(128)
}
