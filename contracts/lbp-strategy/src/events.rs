use lbp_types::PoolKey;
use soroban_sdk::{Address, Env, Symbol};

// ============================================================
// EVENT EMITTERS
// ============================================================

/// Emit strategy configured event
pub fn emit_initialized(
    env: &Env,
    token: &Address,
    currency: &Address,
    total_supply: i128,
    auction_supply: i128,
    reserve_supply: i128,
) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (
            token.clone(),
            currency.clone(),
            total_supply,
            auction_supply,
            reserve_supply,
        ),
    );
}

/// Emit auction created event
pub fn emit_auction_created(env: &Env, auction: &Address, auction_supply: i128) {
    env.events().publish(
        (Symbol::new(env, "auction_created"),),
        (auction.clone(), auction_supply),
    );
}

/// Emit migration completed event
pub fn emit_migrated(env: &Env, pool_key: &PoolKey, sqrt_price_x96: u128) {
    env.events().publish(
        (Symbol::new(env, "migrated"),),
        (pool_key.clone(), sqrt_price_x96),
    );
}

pub fn emit_tokens_swept(env: &Env, operator: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "tokens_swept"),),
        (operator.clone(), amount),
    );
}

pub fn emit_currency_swept(env: &Env, operator: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "currency_swept"),),
        (operator.clone(), amount),
    );
}
