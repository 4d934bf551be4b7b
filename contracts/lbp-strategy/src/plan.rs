use lbp_math::{full_range_ticks, one_sided_position};
use lbp_types::{
    ClearOrTakeParams, LaunchConfig, MigrationData, MintParams, PoolKey, PositionAction,
    SettleParams,
};
use soroban_sdk::{vec, Env, Vec};

/// The leftover asset that may back a one-sided position
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OneSidedLeg {
    pub amount: u128,
    /// True for leftover tokens, false for leftover currency
    pub is_token: bool,
    /// The leftover asset is currency0 of the pool
    pub asset_is_token0: bool,
}

/// Pick the one-sided leg allowed by the configuration, if any.
///
/// Leftover tokens and leftover currency never coexist because the reserve
/// caps the token amount, so at most one leg is ever returned.
pub fn select_one_sided_leg(config: &LaunchConfig, data: &MigrationData) -> Option<OneSidedLeg> {
    if config.create_one_sided_token_position && data.leftover_token > 0 {
        return Some(OneSidedLeg {
            amount: data.leftover_token,
            is_token: true,
            asset_is_token0: !data.currency_is_currency0,
        });
    }

    if config.create_one_sided_currency_position && data.leftover_currency > 0 {
        return Some(OneSidedLeg {
            amount: data.leftover_currency,
            is_token: false,
            asset_is_token0: data.currency_is_currency0,
        });
    }

    None
}

/// Position actions plus the exact amounts they consume
pub struct PositionPlan {
    pub actions: Vec<PositionAction>,
    pub token_amount: u128,
    pub currency_amount: u128,
}

/// Build the position plan for a migration.
///
/// Always mints the full-range position. The one-sided position is appended
/// only when `should_create_one_sided` is set and the leg survives the range
/// and liquidity checks, in which case `has_one_sided_position` is set.
pub fn build_position_plan(
    env: &Env,
    config: &LaunchConfig,
    pool_key: &PoolKey,
    data: &mut MigrationData,
) -> PositionPlan {
    let (amount0, amount1) = data.full_range_amounts();
    let (tick_lower, tick_upper) = full_range_ticks(config.tick_spacing);

    let full_range = MintParams {
        pool_key: pool_key.clone(),
        tick_lower,
        tick_upper,
        liquidity: data.liquidity,
        amount0_max: amount0,
        amount1_max: amount1,
        owner: config.position_recipient.clone(),
    };

    let mut token_amount = data.token_amount;
    let mut currency_amount = data.currency_amount;
    let mut one_sided = None;

    if data.should_create_one_sided {
        if let Some(leg) = select_one_sided_leg(config, data) {
            if let Some(position) = one_sided_position(
                env,
                data.sqrt_price_x96,
                config.tick_spacing,
                leg.amount,
                leg.asset_is_token0,
                data.liquidity,
            ) {
                if leg.is_token {
                    token_amount += leg.amount;
                } else {
                    currency_amount += leg.amount;
                }

                let (amount0_max, amount1_max) = if leg.asset_is_token0 {
                    (leg.amount, 0)
                } else {
                    (0, leg.amount)
                };

                one_sided = Some(MintParams {
                    pool_key: pool_key.clone(),
                    tick_lower: position.tick_lower,
                    tick_upper: position.tick_upper,
                    liquidity: position.liquidity,
                    amount0_max,
                    amount1_max,
                    owner: config.position_recipient.clone(),
                });
                data.has_one_sided_position = true;
            }
        }
    }

    let (total0, total1) = if data.currency_is_currency0 {
        (currency_amount, token_amount)
    } else {
        (token_amount, currency_amount)
    };

    let mut actions = vec![
        env,
        PositionAction::Settle(SettleParams {
            currency: pool_key.currency0.clone(),
            amount: total0,
        }),
        PositionAction::Settle(SettleParams {
            currency: pool_key.currency1.clone(),
            amount: total1,
        }),
        PositionAction::MintFromDeltas(full_range),
    ];
    if let Some(mint) = one_sided {
        actions.push_back(PositionAction::MintFromDeltas(mint));
    }
    actions.push_back(PositionAction::ClearOrTake(ClearOrTakeParams {
        currency: pool_key.currency0.clone(),
        amount_max: 0,
    }));
    actions.push_back(PositionAction::ClearOrTake(ClearOrTakeParams {
        currency: pool_key.currency1.clone(),
        amount_max: 0,
    }));

    PositionPlan {
        actions,
        token_amount,
        currency_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::prepare_migration_data;
    use lbp_math::get_sqrt_ratio_at_tick;
    use lbp_types::{max_usable_tick, Q96};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, U256};

    const E18: u128 = 1_000_000_000_000_000_000;

    fn config(env: &Env, token_leg: bool, currency_leg: bool) -> LaunchConfig {
        let a = Address::generate(env);
        let b = Address::generate(env);
        LaunchConfig {
            token: a.clone(),
            currency: b.clone(),
            fee: 3000,
            tick_spacing: 60,
            total_supply: 1_000,
            auction_supply: 500,
            reserve_supply: 500,
            position_recipient: Address::generate(env),
            migration_block: 100,
            sweep_block: 200,
            operator: Address::generate(env),
            create_one_sided_token_position: token_leg,
            create_one_sided_currency_position: currency_leg,
            auction_factory: Address::generate(env),
            pool_manager: Address::generate(env),
            position_manager: Address::generate(env),
        }
    }

    #[test]
    fn test_token_leg_preferred_when_tokens_left() {
        let env = Env::default();
        let config = config(&env, true, true);
        let data = MigrationData {
            leftover_token: 10,
            currency_is_currency0: true,
            ..Default::default()
        };
        let leg = select_one_sided_leg(&config, &data).unwrap();
        assert!(leg.is_token);
        assert_eq!(leg.amount, 10);
        // Currency is token0, so the token is token1
        assert!(!leg.asset_is_token0);
    }

    #[test]
    fn test_currency_leg_when_currency_left() {
        let env = Env::default();
        let config = config(&env, true, true);
        let data = MigrationData {
            leftover_currency: 7,
            currency_is_currency0: true,
            ..Default::default()
        };
        let leg = select_one_sided_leg(&config, &data).unwrap();
        assert!(!leg.is_token);
        assert!(leg.asset_is_token0);
    }

    #[test]
    fn test_leg_requires_flag() {
        let env = Env::default();
        let data = MigrationData {
            leftover_token: 10,
            ..Default::default()
        };
        assert_eq!(select_one_sided_leg(&config(&env, false, true), &data), None);
        assert!(select_one_sided_leg(&config(&env, true, false), &data).is_some());

        let nothing_left = MigrationData::default();
        assert_eq!(select_one_sided_leg(&config(&env, true, true), &nothing_left), None);
    }

    /// 1000-token launch split evenly, with the given currency ordering
    fn ordered_config(
        env: &Env,
        currency_is_currency0: bool,
        tick_spacing: i32,
        token_leg: bool,
    ) -> LaunchConfig {
        let mut config = config(env, token_leg, false);
        let (low, high) = if config.token < config.currency {
            (config.token.clone(), config.currency.clone())
        } else {
            (config.currency.clone(), config.token.clone())
        };
        if currency_is_currency0 {
            config.currency = low;
            config.token = high;
        } else {
            config.token = low;
            config.currency = high;
        }
        config.tick_spacing = tick_spacing;
        config.total_supply = 1_000 * E18 as i128;
        config.auction_supply = 500 * E18 as i128;
        config.reserve_supply = 500 * E18 as i128;
        config
    }

    fn pool_key_for(env: &Env, config: &LaunchConfig) -> PoolKey {
        PoolKey::new(
            &config.token,
            &config.currency,
            config.fee,
            config.tick_spacing,
            &Address::generate(env),
        )
    }

    /// Settled amount of `asset` in the plan
    fn settled(actions: &Vec<PositionAction>, asset: &Address) -> u128 {
        actions
            .iter()
            .filter_map(|action| match action {
                PositionAction::Settle(params) if params.currency == *asset => Some(params.amount),
                _ => None,
            })
            .sum()
    }

    #[test]
    fn test_plan_includes_token_leg() {
        for currency_is_currency0 in [false, true] {
            let env = Env::default();
            let config = ordered_config(&env, currency_is_currency0, 60, true);
            let key = pool_key_for(&env, &config);

            // 2 currency per token: 100 currency pairs with 50 reserve tokens
            let price = U256::from_u128(&env, 2 * Q96);
            let mut data = prepare_migration_data(&env, &config, &price, 100 * E18).unwrap();
            assert!(data.should_create_one_sided);

            let plan = build_position_plan(&env, &config, &key, &mut data);
            assert!(data.has_one_sided_position);
            assert_eq!(plan.actions.len(), 6);
            assert!(matches!(
                plan.actions.get(3).unwrap(),
                PositionAction::MintFromDeltas(_)
            ));

            // Full-range amounts plus the leftover tokens
            assert_eq!(plan.token_amount, 500 * E18);
            assert_eq!(plan.currency_amount, 100 * E18);
            assert_eq!(settled(&plan.actions, &config.token), plan.token_amount);
            assert_eq!(settled(&plan.actions, &config.currency), plan.currency_amount);
        }
    }

    #[test]
    fn test_plan_skips_leg_near_max_tick() {
        let env = Env::default();
        env.cost_estimate().budget().reset_unlimited();
        let config = ordered_config(&env, false, 16383, true);
        let key = pool_key_for(&env, &config);

        // Token is token0, so its leg would sit above a price within one
        // spacing of the highest usable tick
        let tick = max_usable_tick(16383) - 8000;
        let sqrt_price = U256::from_u128(&env, get_sqrt_ratio_at_tick(&env, tick));
        let price = sqrt_price.pow(2).shr(96);
        let mut data = prepare_migration_data(&env, &config, &price, 500 * E18).unwrap();
        assert!(data.should_create_one_sided);

        let plan = build_position_plan(&env, &config, &key, &mut data);
        assert!(!data.has_one_sided_position);
        assert_eq!(plan.actions.len(), 5);

        // Only the full-range amounts are settled
        assert_eq!(plan.token_amount, data.token_amount);
        assert_eq!(plan.currency_amount, data.currency_amount);
        assert_eq!(settled(&plan.actions, &config.token), data.token_amount);
        assert_eq!(settled(&plan.actions, &config.currency), data.currency_amount);
    }

    #[test]
    fn test_plan_without_leftover_is_full_range_only() {
        let env = Env::default();
        let config = ordered_config(&env, true, 60, true);
        let key = pool_key_for(&env, &config);

        let price = U256::from_u128(&env, Q96);
        let mut data = prepare_migration_data(&env, &config, &price, 500 * E18).unwrap();
        assert!(!data.should_create_one_sided);

        let plan = build_position_plan(&env, &config, &key, &mut data);
        assert!(!data.has_one_sided_position);
        assert_eq!(plan.actions.len(), 5);
        assert_eq!(settled(&plan.actions, &key.currency0), 500 * E18);
        assert_eq!(settled(&plan.actions, &key.currency1), 500 * E18);
    }
}
