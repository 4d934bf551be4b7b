use crate::PoolKey;
use soroban_sdk::{contracttype, Address};

/// Pay `amount` of `currency` out of the position manager's own balance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettleParams {
    pub currency: Address,
    pub amount: u128,
}

/// Mint a position funded by the credit opened with `Settle`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintParams {
    pub pool_key: PoolKey,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub amount0_max: u128,
    pub amount1_max: u128,
    pub owner: Address,
}

/// Forfeit remaining credit up to `amount_max`, otherwise return it to the caller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClearOrTakeParams {
    pub currency: Address,
    pub amount_max: u128,
}

/// One step of a position plan, executed atomically by the position manager
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionAction {
    Settle(SettleParams),
    MintFromDeltas(MintParams),
    ClearOrTake(ClearOrTakeParams),
}
