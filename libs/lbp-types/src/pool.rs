use crate::Fee;
use soroban_sdk::{contracttype, Address};

/// Identity of the pool created at migration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Lower sorted asset
    pub currency0: Address,
    /// Higher sorted asset
    pub currency1: Address,
    pub fee: Fee,
    pub tick_spacing: i32,
    /// Hook contract attached to the pool (the launch strategy)
    pub hooks: Address,
}

impl PoolKey {
    pub fn new(
        token_a: &Address,
        token_b: &Address,
        fee: Fee,
        tick_spacing: i32,
        hooks: &Address,
    ) -> Self {
        let (currency0, currency1) = if token_a < token_b {
            (token_a.clone(), token_b.clone())
        } else {
            (token_b.clone(), token_a.clone())
        };
        Self {
            currency0,
            currency1,
            fee,
            tick_spacing,
            hooks: hooks.clone(),
        }
    }
}
