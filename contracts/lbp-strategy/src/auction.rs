use crate::events;
use crate::external;
use crate::storage;
use lbp_types::LbpError;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{log, Address, BytesN, Env};

/// Create the auction once the full supply has arrived and hand it the
/// auction share.
pub fn create_auction(env: &Env) -> Result<Address, LbpError> {
    let config = storage::get_config(env)?;

    if storage::get_auction(env).is_some() {
        return Err(LbpError::AuctionAlreadyCreated);
    }

    let balance = external::balance_of(env, &config.token);
    if balance < config.total_supply {
        log!(
            env,
            "tokens not received (expected, actual)",
            config.total_supply,
            balance
        );
        return Err(LbpError::InvalidAmountReceived);
    }

    let auction_params = storage::get_auction_parameters(env)?;
    let auction = external::factory_initialize_distribution(
        env,
        &config.auction_factory,
        &config.token,
        config.auction_supply,
        &auction_params.to_xdr(env),
        &auction_salt(env),
    );
    storage::set_auction(env, &auction)?;

    external::transfer_out(env, &config.token, &auction, config.auction_supply);
    external::auction_on_tokens_received(env, &auction);

    events::emit_auction_created(env, &auction, config.auction_supply);

    Ok(auction)
}

/// Deterministic per-strategy salt: sha256 of the strategy address
pub fn auction_salt(env: &Env) -> BytesN<32> {
    let address_bytes = env.current_contract_address().to_xdr(env);
    env.crypto().sha256(&address_bytes).to_bytes()
}
