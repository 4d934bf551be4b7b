use lbp_types::{LbpError, PoolKey, PositionAction};
use soroban_sdk::{log, token, Address, Bytes, BytesN, Env, IntoVal, Symbol, Vec, U256};

// === Auction ===

pub fn auction_on_tokens_received(env: &Env, auction: &Address) {
    env.invoke_contract::<()>(
        auction,
        &Symbol::new(env, "on_tokens_received"),
        ().into_val(env),
    )
}

/// Settle the auction up to the current ledger so the reads below are final
pub fn auction_checkpoint(env: &Env, auction: &Address) {
    env.invoke_contract::<()>(auction, &Symbol::new(env, "checkpoint"), ().into_val(env))
}

/// Q96 price, currency per token
pub fn auction_clearing_price(env: &Env, auction: &Address) -> U256 {
    env.invoke_contract(
        auction,
        &Symbol::new(env, "clearing_price"),
        ().into_val(env),
    )
}

pub fn auction_currency_raised(env: &Env, auction: &Address) -> U256 {
    env.invoke_contract(
        auction,
        &Symbol::new(env, "currency_raised"),
        ().into_val(env),
    )
}

// === Auction factory ===

pub fn factory_initialize_distribution(
    env: &Env,
    factory: &Address,
    token: &Address,
    amount: i128,
    config: &Bytes,
    salt: &BytesN<32>,
) -> Address {
    env.invoke_contract(
        factory,
        &Symbol::new(env, "initialize_distribution"),
        (token, amount, config.clone(), salt.clone()).into_val(env),
    )
}

// === Pool engine ===

/// Initialize the pool at `sqrt_price_x96`. Any rejection, including an
/// already initialized key, is reported as `PoolInitializationFailed`.
pub fn pool_initialize(
    env: &Env,
    pool_manager: &Address,
    pool_key: &PoolKey,
    sqrt_price_x96: u128,
) -> Result<i32, LbpError> {
    let result = env.try_invoke_contract::<i32, soroban_sdk::Error>(
        pool_manager,
        &Symbol::new(env, "initialize"),
        (pool_key.clone(), sqrt_price_x96).into_val(env),
    );

    match result {
        Ok(Ok(tick)) => Ok(tick),
        _ => {
            log!(
                env,
                "pool initialization rejected (sqrt_price)",
                sqrt_price_x96
            );
            Err(LbpError::PoolInitializationFailed)
        }
    }
}

pub fn position_manager_modify_liquidities(
    env: &Env,
    position_manager: &Address,
    actions: &Vec<PositionAction>,
    deadline: u64,
) {
    env.invoke_contract::<()>(
        position_manager,
        &Symbol::new(env, "modify_liquidities"),
        (actions.clone(), deadline).into_val(env),
    )
}

// === Tokens ===

pub fn balance_of(env: &Env, asset: &Address) -> i128 {
    token::Client::new(env, asset).balance(&env.current_contract_address())
}

pub fn transfer_out(env: &Env, asset: &Address, to: &Address, amount: i128) {
    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);
}
