use crate::events;
use crate::external;
use crate::storage;
use lbp_types::{LaunchConfig, LbpError};
use soroban_sdk::{log, Address, Env};

/// Send the strategy's whole token balance to the operator
pub fn sweep_token(env: &Env, caller: &Address) -> Result<(), LbpError> {
    let config = authorize_sweep(env, caller)?;

    let balance = external::balance_of(env, &config.token);
    if balance > 0 {
        external::transfer_out(env, &config.token, &config.operator, balance);
        events::emit_tokens_swept(env, &config.operator, balance);
    }

    Ok(())
}

/// Send the strategy's whole currency balance to the operator
pub fn sweep_currency(env: &Env, caller: &Address) -> Result<(), LbpError> {
    let config = authorize_sweep(env, caller)?;

    let balance = external::balance_of(env, &config.currency);
    if balance > 0 {
        external::transfer_out(env, &config.currency, &config.operator, balance);
        events::emit_currency_swept(env, &config.operator, balance);
    }

    Ok(())
}

fn authorize_sweep(env: &Env, caller: &Address) -> Result<LaunchConfig, LbpError> {
    let config = storage::get_config(env)?;

    let current_block = env.ledger().sequence();
    if current_block < config.sweep_block {
        log!(
            env,
            "sweep not allowed yet (sweep_block, current_block)",
            config.sweep_block,
            current_block
        );
        return Err(LbpError::SweepNotAllowed);
    }

    if *caller != config.operator {
        return Err(LbpError::NotOperator);
    }
    caller.require_auth();

    Ok(config)
}
