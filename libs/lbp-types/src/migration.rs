use soroban_sdk::contracttype;

/// Values computed fresh for a single migration call, never persisted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MigrationData {
    /// Pool price as sqrt(price) * 2^96
    pub sqrt_price_x96: u128,
    /// Tokens placed in the full-range position
    pub token_amount: u128,
    /// Currency placed in the full-range position
    pub currency_amount: u128,
    /// Currency the reserve could not absorb at the clearing price
    pub leftover_currency: u128,
    /// Reserve tokens not needed by the full-range position
    pub leftover_token: u128,
    /// Full-range position liquidity
    pub liquidity: u128,
    /// Direction resolved once: currency sorts below the token
    pub currency_is_currency0: bool,
    /// A leftover exists and its one-sided flag is enabled
    pub should_create_one_sided: bool,
    /// Set by the plan builder once a one-sided leg is actually included
    pub has_one_sided_position: bool,
}

impl MigrationData {
    /// Full-range amounts ordered as (amount0, amount1)
    pub fn full_range_amounts(&self) -> (u128, u128) {
        if self.currency_is_currency0 {
            (self.currency_amount, self.token_amount)
        } else {
            (self.token_amount, self.currency_amount)
        }
    }
}

/// Read-only view of the migration the current auction state would produce
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationPreview {
    pub sqrt_price_x96: u128,
    pub token_amount: u128,
    pub currency_amount: u128,
    pub leftover_currency: u128,
    pub leftover_token: u128,
    pub liquidity: u128,
    pub should_create_one_sided: bool,
}

impl From<&MigrationData> for MigrationPreview {
    fn from(data: &MigrationData) -> Self {
        Self {
            sqrt_price_x96: data.sqrt_price_x96,
            token_amount: data.token_amount,
            currency_amount: data.currency_amount,
            leftover_currency: data.leftover_currency,
            leftover_token: data.leftover_token,
            liquidity: data.liquidity,
            should_create_one_sided: data.should_create_one_sided,
        }
    }
}
