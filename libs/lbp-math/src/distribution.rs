use crate::full_math::mul_div;
use lbp_types::{LbpError, TOKEN_SPLIT_DENOMINATOR};
use soroban_sdk::{log, Env};

/// floor(total_supply * split / TOKEN_SPLIT_DENOMINATOR)
///
/// `split` must not exceed the denominator.
pub fn auction_supply(env: &Env, total_supply: u128, split: u32) -> u128 {
    mul_div(
        env,
        total_supply,
        split as u128,
        TOKEN_SPLIT_DENOMINATOR as u128,
    )
}

/// Tokens kept back for the pool
pub fn reserve_supply(env: &Env, total_supply: u128, split: u32) -> u128 {
    total_supply - auction_supply(env, total_supply, split)
}

/// Split total supply into (auction supply, reserve supply).
/// Fails when the auction would receive nothing.
pub fn split_supply(env: &Env, total_supply: u128, split: u32) -> Result<(u128, u128), LbpError> {
    let auction = auction_supply(env, total_supply, split);
    if auction == 0 {
        log!(
            env,
            "auction supply rounds to zero (total_supply, split)",
            total_supply,
            split
        );
        return Err(LbpError::AuctionSupplyIsZero);
    }
    Ok((auction, total_supply - auction))
}
