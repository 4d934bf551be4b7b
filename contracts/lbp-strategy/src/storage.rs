use lbp_types::{AuctionParameters, LaunchConfig, LbpError};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// Storage layout
// ============================================================================
// Everything lives in instance storage: the admin, one launch configuration, the
// auction parameters forwarded to the factory, and the write-once auction
// handle. Migration values are recomputed on every call and never stored.
// ============================================================================

/// Storage keys for the strategy contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address that authorized the configuration (Instance storage)
    Admin,
    /// Launch configuration (Instance storage)
    Config,
    /// Auction configuration forwarded to the factory (Instance storage)
    AuctionParameters,
    /// Auction created on token receipt, set once (Instance storage)
    Auction,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// === Admin ===

pub fn get_admin(env: &Env) -> Result<Address, LbpError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(LbpError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// === Config ===

pub fn get_config(env: &Env) -> Result<LaunchConfig, LbpError> {
    let config: LaunchConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LbpError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &LaunchConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Auction parameters ===

pub fn get_auction_parameters(env: &Env) -> Result<AuctionParameters, LbpError> {
    env.storage()
        .instance()
        .get(&DataKey::AuctionParameters)
        .ok_or(LbpError::NotInitialized)
}

pub fn set_auction_parameters(env: &Env, params: &AuctionParameters) {
    env.storage()
        .instance()
        .set(&DataKey::AuctionParameters, params);
}

// === Auction ===

pub fn get_auction(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Auction)
}

/// Record the auction handle. Fails if one is already set.
pub fn set_auction(env: &Env, auction: &Address) -> Result<(), LbpError> {
    if env.storage().instance().has(&DataKey::Auction) {
        return Err(LbpError::AuctionAlreadyCreated);
    }
    env.storage().instance().set(&DataKey::Auction, auction);
    extend_instance_ttl(env);
    Ok(())
}
