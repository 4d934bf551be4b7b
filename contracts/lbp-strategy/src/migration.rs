use crate::events;
use crate::external;
use crate::plan::{build_position_plan, select_one_sided_leg};
use crate::storage;
use lbp_math::{allocate_amounts, convert_to_price_x192, convert_to_sqrt_price_x96, full_range_liquidity};
use lbp_types::{LaunchConfig, LbpError, MigrationData, PoolKey};
use soroban_sdk::{log, Address, Env, U256};

/// Pool identity for this launch, hooked to the strategy itself
pub fn pool_key(env: &Env, config: &LaunchConfig) -> PoolKey {
    PoolKey::new(
        &config.token,
        &config.currency,
        config.fee,
        config.tick_spacing,
        &env.current_contract_address(),
    )
}

/// Move the raised currency and the token reserve into the pool.
///
/// Nothing marks a finished migration. A repeated call normally stops at the
/// currency balance check with `InsufficientCurrency`; if the strategy was
/// funded again, the pool manager rejects the second initialization.
pub fn migrate(env: &Env) -> Result<(), LbpError> {
    let config = storage::get_config(env)?;

    let current_block = env.ledger().sequence();
    if current_block < config.migration_block {
        log!(
            env,
            "migration not allowed yet (migration_block, current_block)",
            config.migration_block,
            current_block
        );
        return Err(LbpError::MigrationNotAllowed);
    }

    let auction = storage::get_auction(env).ok_or(LbpError::AuctionNotCreated)?;

    external::auction_checkpoint(env, &auction);
    let clearing_price = external::auction_clearing_price(env, &auction);
    let currency_raised = read_currency_raised(env, &auction)?;

    let balance = external::balance_of(env, &config.currency);
    if balance < currency_raised as i128 {
        log!(
            env,
            "insufficient currency (balance, currency_raised)",
            balance,
            currency_raised
        );
        return Err(LbpError::InsufficientCurrency);
    }

    let mut data = prepare_migration_data(env, &config, &clearing_price, currency_raised)?;

    let key = pool_key(env, &config);
    external::pool_initialize(env, &config.pool_manager, &key, data.sqrt_price_x96)?;

    let plan = build_position_plan(env, &config, &key, &mut data);
    if data.should_create_one_sided && !data.has_one_sided_position {
        log!(
            env,
            "one-sided position skipped (sqrt_price_x96)",
            data.sqrt_price_x96
        );
    }

    // Amounts are bounded by the reserve and the raised currency, both i128
    if plan.token_amount > 0 {
        external::transfer_out(
            env,
            &config.token,
            &config.position_manager,
            plan.token_amount as i128,
        );
    }
    if plan.currency_amount > 0 {
        external::transfer_out(
            env,
            &config.currency,
            &config.position_manager,
            plan.currency_amount as i128,
        );
    }

    external::position_manager_modify_liquidities(
        env,
        &config.position_manager,
        &plan.actions,
        env.ledger().timestamp(),
    );

    events::emit_migrated(env, &key, data.sqrt_price_x96);

    Ok(())
}

/// Currency raised by the auction as a token amount
pub fn read_currency_raised(env: &Env, auction: &Address) -> Result<u128, LbpError> {
    let raised = external::auction_currency_raised(env, auction);

    let max_amount = U256::from_u128(env, i128::MAX as u128);
    if raised > max_amount {
        log!(env, "currency raised too high (raised, max)", raised, max_amount);
        return Err(LbpError::CurrencyAmountTooHigh);
    }

    match raised.to_u128() {
        Some(0) | None => Err(LbpError::NoCurrencyRaised),
        Some(amount) => Ok(amount),
    }
}

/// Price, amounts and liquidity for a migration at `clearing_price`
pub fn prepare_migration_data(
    env: &Env,
    config: &LaunchConfig,
    clearing_price: &U256,
    currency_raised: u128,
) -> Result<MigrationData, LbpError> {
    let currency_is_currency0 = config.currency_is_currency0();
    let reserve_supply = config.reserve_supply as u128;

    let price_x192 = convert_to_price_x192(env, clearing_price, currency_is_currency0)?;
    let sqrt_price_x96 = convert_to_sqrt_price_x96(env, &price_x192)?;

    let allocation = allocate_amounts(
        env,
        &price_x192,
        currency_raised,
        currency_is_currency0,
        reserve_supply,
    )?;

    let mut data = MigrationData {
        sqrt_price_x96,
        token_amount: allocation.token_amount,
        currency_amount: allocation.currency_amount,
        leftover_currency: allocation.leftover_currency,
        leftover_token: reserve_supply - allocation.token_amount,
        liquidity: 0,
        currency_is_currency0,
        should_create_one_sided: false,
        has_one_sided_position: false,
    };

    let (amount0, amount1) = data.full_range_amounts();
    data.liquidity = full_range_liquidity(env, sqrt_price_x96, config.tick_spacing, amount0, amount1)?;
    data.should_create_one_sided = select_one_sided_leg(config, &data).is_some();

    Ok(data)
}
