use lbp_math::split_supply;
use lbp_types::{
    AuctionParameters, LbpError, MigratorParameters, MAX_LP_FEE, MAX_TICK_SPACING,
    MIN_TICK_SPACING, TOKEN_SPLIT_DENOMINATOR,
};
use soroban_sdk::{log, Address, Env};

/// Check launch parameters and derive (auction supply, reserve supply).
///
/// Checks run in a fixed order so the first violated rule is the one reported.
pub fn validate_launch(
    env: &Env,
    token: &Address,
    total_supply: i128,
    params: &MigratorParameters,
    auction_params: &AuctionParameters,
) -> Result<(i128, i128), LbpError> {
    let strategy = env.current_contract_address();

    if params.token_split_to_auction >= TOKEN_SPLIT_DENOMINATOR {
        log!(
            env,
            "token split too high (split, max)",
            params.token_split_to_auction,
            TOKEN_SPLIT_DENOMINATOR
        );
        return Err(LbpError::TokenSplitTooHigh);
    }

    if params.tick_spacing < MIN_TICK_SPACING || params.tick_spacing > MAX_TICK_SPACING {
        log!(
            env,
            "invalid tick spacing (spacing, min, max)",
            params.tick_spacing,
            MIN_TICK_SPACING,
            MAX_TICK_SPACING
        );
        return Err(LbpError::InvalidTickSpacing);
    }

    if params.fee > MAX_LP_FEE {
        log!(env, "invalid fee (fee, max)", params.fee, MAX_LP_FEE);
        return Err(LbpError::InvalidFee);
    }

    if params.position_recipient == strategy {
        return Err(LbpError::InvalidPositionRecipient);
    }

    if *token == params.currency {
        return Err(LbpError::InvalidTokenAndCurrency);
    }

    if total_supply <= 0 {
        log!(env, "invalid total supply", total_supply);
        return Err(LbpError::InvalidTotalSupply);
    }

    let (auction_supply, reserve_supply) =
        split_supply(env, total_supply as u128, params.token_split_to_auction)?;

    if params.sweep_block <= params.migration_block {
        log!(
            env,
            "sweep block must follow migration block (sweep, migration)",
            params.sweep_block,
            params.migration_block
        );
        return Err(LbpError::InvalidSweepBlock);
    }

    validate_auction_parameters(env, params, auction_params, &strategy)?;

    // Both parts are bounded by a positive i128 total supply
    Ok((auction_supply as i128, reserve_supply as i128))
}

fn validate_auction_parameters(
    env: &Env,
    params: &MigratorParameters,
    auction_params: &AuctionParameters,
    strategy: &Address,
) -> Result<(), LbpError> {
    if auction_params.currency != params.currency {
        return Err(LbpError::InvalidCurrency);
    }

    if auction_params.funds_recipient != *strategy {
        return Err(LbpError::InvalidFundsRecipient);
    }

    let ordered = auction_params.start_block < auction_params.end_block
        && auction_params.end_block <= auction_params.claim_block;
    if !ordered || auction_params.end_block >= params.migration_block {
        log!(
            env,
            "invalid auction blocks (start, end, claim, migration)",
            auction_params.start_block,
            auction_params.end_block,
            auction_params.claim_block,
            params.migration_block
        );
        return Err(LbpError::InvalidEndBlock);
    }

    Ok(())
}
