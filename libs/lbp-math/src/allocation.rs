use crate::full_math::mul_shr_96;
use lbp_types::LbpError;
use soroban_sdk::{log, Env, U256};

/// How the raised currency and the token reserve split into the full-range position
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Allocation {
    /// Tokens paired with the currency, never above the reserve
    pub token_amount: u128,
    /// Currency the reserve cannot absorb at this price
    pub leftover_currency: u128,
    /// Currency paired with `token_amount`
    pub currency_amount: u128,
}

/// Pair the raised currency with reserve tokens at the pool price.
///
/// `price_x192` is token1 per token0. When the currency is currency0 the
/// tokens bought are `price * raised`, otherwise `raised / price`. If the
/// reserve is too small the token side is capped and the currency that the
/// reserve can absorb is derived back from the price.
pub fn allocate_amounts(
    env: &Env,
    price_x192: &U256,
    currency_raised: u128,
    currency_is_currency0: bool,
    reserve_supply: u128,
) -> Result<Allocation, LbpError> {
    // price_x192 is a Q96 price shifted left by 96, so this is exact
    let price_x96 = price_x192.shr(96);
    if price_x96 == U256::from_u32(env, 0) {
        log!(env, "allocation price is zero");
        return Err(LbpError::InvalidPrice);
    }

    let raised = U256::from_u128(env, currency_raised);
    let reserve = U256::from_u128(env, reserve_supply);

    let token_amount = if currency_is_currency0 {
        mul_shr_96(env, &price_x96, &raised)
    } else {
        raised.shl(96).div(&price_x96)
    };

    if token_amount <= reserve {
        // Bounded by the reserve, so it fits
        let token_amount = token_amount.to_u128().unwrap_or(reserve_supply);
        return Ok(Allocation {
            token_amount,
            leftover_currency: 0,
            currency_amount: currency_raised,
        });
    }

    let currency_for_reserve = if currency_is_currency0 {
        reserve.shl(96).div(&price_x96)
    } else {
        mul_shr_96(env, &price_x96, &reserve)
    };

    let currency_amount = match currency_for_reserve.to_u128() {
        Some(amount) if amount <= currency_raised => amount,
        _ => {
            log!(
                env,
                "currency for reserve overflows (amount, raised)",
                currency_for_reserve,
                currency_raised
            );
            return Err(LbpError::AmountOverflow);
        }
    };

    Ok(Allocation {
        token_amount: reserve_supply,
        leftover_currency: currency_raised - currency_amount,
        currency_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_math::convert_to_price_x192;
    use lbp_types::Q96;
    use soroban_sdk::Env;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn price(env: &Env, clearing_x96: u128, currency_is_currency0: bool) -> U256 {
        convert_to_price_x192(env, &U256::from_u128(env, clearing_x96), currency_is_currency0)
            .unwrap()
    }

    #[test]
    fn test_reserve_covers_raised_currency() {
        let env = Env::default();
        // 2 currency per token: 100 currency buys 50 tokens
        for currency_is_currency0 in [false, true] {
            let p = price(&env, 2 * Q96, currency_is_currency0);
            let allocation =
                allocate_amounts(&env, &p, 100 * E18, currency_is_currency0, 500 * E18).unwrap();
            assert_eq!(allocation.token_amount, 50 * E18);
            assert_eq!(allocation.currency_amount, 100 * E18);
            assert_eq!(allocation.leftover_currency, 0);
        }
    }

    #[test]
    fn test_reserve_exactly_consumed() {
        let env = Env::default();
        let p = price(&env, Q96, false);
        let allocation = allocate_amounts(&env, &p, 500 * E18, false, 500 * E18).unwrap();
        assert_eq!(allocation.token_amount, 500 * E18);
        assert_eq!(allocation.leftover_currency, 0);
    }

    #[test]
    fn test_reserve_caps_token_amount() {
        let env = Env::default();
        // 0.5 currency per token: 500 currency would need 1000 tokens
        for currency_is_currency0 in [false, true] {
            let p = price(&env, Q96 / 2, currency_is_currency0);
            let allocation =
                allocate_amounts(&env, &p, 500 * E18, currency_is_currency0, 400 * E18).unwrap();
            assert_eq!(allocation.token_amount, 400 * E18);
            assert_eq!(allocation.currency_amount, 200 * E18);
            assert_eq!(allocation.leftover_currency, 300 * E18);
        }
    }

    #[test]
    fn test_token_amount_rounds_down() {
        let env = Env::default();
        // 3 currency per token
        let p = price(&env, 3 * Q96, false);
        let allocation = allocate_amounts(&env, &p, 10, false, 1_000).unwrap();
        assert_eq!(allocation.token_amount, 3);
        assert_eq!(allocation.currency_amount, 10);
    }

    #[test]
    fn test_zero_price_rejected() {
        let env = Env::default();
        let zero = U256::from_u32(&env, 0);
        assert_eq!(
            allocate_amounts(&env, &zero, 100, false, 100),
            Err(LbpError::InvalidPrice)
        );
    }

    #[test]
    fn test_huge_token_amount_does_not_overflow() {
        let env = Env::default();
        // Very cheap token: implied token amount is far above u128
        let p = price(&env, 1, false);
        let allocation = allocate_amounts(&env, &p, u128::MAX >> 1, false, 1_000 * E18).unwrap();
        assert_eq!(allocation.token_amount, 1_000 * E18);
        assert_eq!(
            allocation.currency_amount + allocation.leftover_currency,
            u128::MAX >> 1
        );
    }
}
