use crate::Fee;
use soroban_sdk::{contracttype, Address, Bytes, U256};

/// Migration settings supplied by the launcher at initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct MigratorParameters {
    /// Quote currency raised by the auction
    pub currency: Address,
    /// Pool fee in hundredths of a basis point
    pub fee: Fee,
    /// Pool tick spacing
    pub tick_spacing: i32,
    /// Share of total supply sold in the auction, out of TOKEN_SPLIT_DENOMINATOR
    pub token_split_to_auction: u32,
    /// Receives every liquidity position minted at migration
    pub position_recipient: Address,
    /// First ledger at which migration is allowed
    pub migration_block: u32,
    /// First ledger at which the operator may sweep leftovers
    pub sweep_block: u32,
    /// Account allowed to sweep leftovers
    pub operator: Address,
    /// Place unused reserve tokens in a one-sided position
    pub create_one_sided_token_position: bool,
    /// Place unused currency in a one-sided position
    pub create_one_sided_currency_position: bool,
}

/// Auction configuration forwarded to the auction factory
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuctionParameters {
    pub currency: Address,
    pub tokens_recipient: Address,
    /// Must be the strategy so raised currency can be migrated
    pub funds_recipient: Address,
    pub start_block: u32,
    pub end_block: u32,
    pub claim_block: u32,
    pub tick_spacing: U256,
    /// Q96 floor price
    pub floor_price: U256,
    pub required_currency_raised: i128,
    pub auction_steps_data: Bytes,
}

/// Immutable launch configuration stored at initialization
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub token: Address,
    pub currency: Address,
    pub fee: Fee,
    pub tick_spacing: i32,
    pub total_supply: i128,
    /// floor(total_supply * split / TOKEN_SPLIT_DENOMINATOR)
    pub auction_supply: i128,
    /// total_supply - auction_supply, kept back for the pool
    pub reserve_supply: i128,
    pub position_recipient: Address,
    pub migration_block: u32,
    pub sweep_block: u32,
    pub operator: Address,
    pub create_one_sided_token_position: bool,
    pub create_one_sided_currency_position: bool,
    pub auction_factory: Address,
    pub pool_manager: Address,
    pub position_manager: Address,
}

impl LaunchConfig {
    /// True when the currency sorts below the token, making it currency0 of the pool
    pub fn currency_is_currency0(&self) -> bool {
        self.currency < self.token
    }
}
