#![no_std]

mod auction;
mod events;
mod external;
mod migration;
mod plan;
mod storage;
mod sweep;
mod validation;

#[cfg(test)]
mod testutils;

use lbp_types::{
    AuctionParameters, LaunchConfig, LbpError, MigrationPreview, MigratorParameters, PoolKey,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct LbpStrategy;

#[contractimpl]
impl LbpStrategy {
    /// Configure the launch. `admin` must authorize the call; `token` is the
    /// asset being distributed and `total_supply` the amount the strategy
    /// expects to receive.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        total_supply: i128,
        params: MigratorParameters,
        auction_params: AuctionParameters,
        auction_factory: Address,
        pool_manager: Address,
        position_manager: Address,
    ) -> Result<(), LbpError> {
        if storage::is_initialized(&env) {
            return Err(LbpError::AlreadyInitialized);
        }

        admin.require_auth();

        let (auction_supply, reserve_supply) =
            validation::validate_launch(&env, &token, total_supply, &params, &auction_params)?;

        let config = LaunchConfig {
            token,
            currency: params.currency,
            fee: params.fee,
            tick_spacing: params.tick_spacing,
            total_supply,
            auction_supply,
            reserve_supply,
            position_recipient: params.position_recipient,
            migration_block: params.migration_block,
            sweep_block: params.sweep_block,
            operator: params.operator,
            create_one_sided_token_position: params.create_one_sided_token_position,
            create_one_sided_currency_position: params.create_one_sided_currency_position,
            auction_factory,
            pool_manager,
            position_manager,
        };

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_auction_parameters(&env, &auction_params);

        events::emit_initialized(
            &env,
            &config.token,
            &config.currency,
            total_supply,
            auction_supply,
            reserve_supply,
        );

        Ok(())
    }

    /// Create the auction after the total supply has been transferred in.
    /// Can only succeed once.
    pub fn on_tokens_received(env: Env) -> Result<Address, LbpError> {
        auction::create_auction(&env)
    }

    /// Initialize the pool at the auction's clearing price and mint the
    /// positions. Fails before the migration block, and on any call after a
    /// successful one: usually at the currency balance check, since the raised
    /// currency already left, and otherwise because the pool can only be
    /// initialized once.
    pub fn migrate(env: Env) -> Result<(), LbpError> {
        migration::migrate(&env)
    }

    pub fn sweep_token(env: Env, caller: Address) -> Result<(), LbpError> {
        sweep::sweep_token(&env, &caller)
    }

    pub fn sweep_currency(env: Env, caller: Address) -> Result<(), LbpError> {
        sweep::sweep_currency(&env, &caller)
    }

    // === View Functions ===

    pub fn admin(env: Env) -> Result<Address, LbpError> {
        storage::get_admin(&env)
    }

    pub fn config(env: Env) -> Result<LaunchConfig, LbpError> {
        storage::get_config(&env)
    }

    pub fn auction_parameters(env: Env) -> Result<AuctionParameters, LbpError> {
        storage::get_auction_parameters(&env)
    }

    pub fn token(env: Env) -> Result<Address, LbpError> {
        Ok(storage::get_config(&env)?.token)
    }

    pub fn currency(env: Env) -> Result<Address, LbpError> {
        Ok(storage::get_config(&env)?.currency)
    }

    pub fn total_supply(env: Env) -> Result<i128, LbpError> {
        Ok(storage::get_config(&env)?.total_supply)
    }

    pub fn auction_supply(env: Env) -> Result<i128, LbpError> {
        Ok(storage::get_config(&env)?.auction_supply)
    }

    pub fn reserve_supply(env: Env) -> Result<i128, LbpError> {
        Ok(storage::get_config(&env)?.reserve_supply)
    }

    pub fn migration_block(env: Env) -> Result<u32, LbpError> {
        Ok(storage::get_config(&env)?.migration_block)
    }

    pub fn sweep_block(env: Env) -> Result<u32, LbpError> {
        Ok(storage::get_config(&env)?.sweep_block)
    }

    pub fn operator(env: Env) -> Result<Address, LbpError> {
        Ok(storage::get_config(&env)?.operator)
    }

    pub fn position_recipient(env: Env) -> Result<Address, LbpError> {
        Ok(storage::get_config(&env)?.position_recipient)
    }

    /// Auction created on token receipt, if any
    pub fn auction(env: Env) -> Option<Address> {
        storage::get_auction(&env)
    }

    pub fn pool_key(env: Env) -> Result<PoolKey, LbpError> {
        let config = storage::get_config(&env)?;
        Ok(migration::pool_key(&env, &config))
    }

    /// Migration amounts for the auction's current state, without
    /// checkpointing the auction or moving funds
    pub fn preview_migration(env: Env) -> Result<MigrationPreview, LbpError> {
        let config = storage::get_config(&env)?;
        let auction = storage::get_auction(&env).ok_or(LbpError::AuctionNotCreated)?;

        let clearing_price = external::auction_clearing_price(&env, &auction);
        let currency_raised = migration::read_currency_raised(&env, &auction)?;
        let data =
            migration::prepare_migration_data(&env, &config, &clearing_price, currency_raised)?;

        Ok(MigrationPreview::from(&data))
    }
}
