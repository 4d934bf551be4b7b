//! Mock collaborators registered in the test environment

pub mod auction {
    use soroban_sdk::{contract, contractimpl, contracttype, Env, U256};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        ClearingPrice,
        CurrencyRaised,
        Checkpoints,
        TokensReceived,
    }

    /// Auction whose outcome is set directly by the test
    #[contract]
    pub struct MockAuction;

    #[contractimpl]
    impl MockAuction {
        pub fn set_outcome(env: Env, clearing_price: U256, currency_raised: U256) {
            env.storage()
                .instance()
                .set(&DataKey::ClearingPrice, &clearing_price);
            env.storage()
                .instance()
                .set(&DataKey::CurrencyRaised, &currency_raised);
        }

        pub fn checkpoint(env: Env) {
            let count = Self::checkpoint_count(env.clone());
            env.storage()
                .instance()
                .set(&DataKey::Checkpoints, &(count + 1));
        }

        pub fn clearing_price(env: Env) -> U256 {
            env.storage()
                .instance()
                .get(&DataKey::ClearingPrice)
                .unwrap_or(U256::from_u32(&env, 0))
        }

        pub fn currency_raised(env: Env) -> U256 {
            env.storage()
                .instance()
                .get(&DataKey::CurrencyRaised)
                .unwrap_or(U256::from_u32(&env, 0))
        }

        pub fn on_tokens_received(env: Env) {
            let count = Self::tokens_received_count(env.clone());
            env.storage()
                .instance()
                .set(&DataKey::TokensReceived, &(count + 1));
        }

        pub fn checkpoint_count(env: Env) -> u32 {
            env.storage()
                .instance()
                .get(&DataKey::Checkpoints)
                .unwrap_or(0)
        }

        pub fn tokens_received_count(env: Env) -> u32 {
            env.storage()
                .instance()
                .get(&DataKey::TokensReceived)
                .unwrap_or(0)
        }
    }
}

pub mod auction_factory {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        Auction,
        Calls,
        LastAmount,
        LastConfig,
        LastSalt,
    }

    /// Factory that hands out a pre-registered auction
    #[contract]
    pub struct MockAuctionFactory;

    #[contractimpl]
    impl MockAuctionFactory {
        pub fn set_auction(env: Env, auction: Address) {
            env.storage().instance().set(&DataKey::Auction, &auction);
        }

        pub fn initialize_distribution(
            env: Env,
            _token: Address,
            amount: i128,
            config: Bytes,
            salt: BytesN<32>,
        ) -> Address {
            let calls = Self::calls(env.clone());
            env.storage().instance().set(&DataKey::Calls, &(calls + 1));
            env.storage().instance().set(&DataKey::LastAmount, &amount);
            env.storage().instance().set(&DataKey::LastConfig, &config);
            env.storage().instance().set(&DataKey::LastSalt, &salt);
            env.storage()
                .instance()
                .get(&DataKey::Auction)
                .expect("auction not set")
        }

        pub fn calls(env: Env) -> u32 {
            env.storage().instance().get(&DataKey::Calls).unwrap_or(0)
        }

        pub fn last_amount(env: Env) -> i128 {
            env.storage()
                .instance()
                .get(&DataKey::LastAmount)
                .unwrap_or(0)
        }

        pub fn last_config(env: Env) -> Bytes {
            env.storage()
                .instance()
                .get(&DataKey::LastConfig)
                .unwrap_or(Bytes::new(&env))
        }

        pub fn last_salt(env: Env) -> Option<BytesN<32>> {
            env.storage().instance().get(&DataKey::LastSalt)
        }
    }
}

pub mod pool_engine {
    use lbp_types::{PoolKey, PositionAction};
    use soroban_sdk::{
        contract, contracterror, contractimpl, contracttype, token, Env, Map, Vec,
    };

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        PoolKey,
        SqrtPrice,
        Plan,
        Deadline,
    }

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
    #[repr(u32)]
    pub enum MockPoolError {
        AlreadyInitialized = 1,
    }

    /// Pool manager and position manager in one contract. Records the pool
    /// it initialized and the last plan it executed.
    #[contract]
    pub struct MockPoolEngine;

    #[contractimpl]
    impl MockPoolEngine {
        pub fn initialize(
            env: Env,
            pool_key: PoolKey,
            sqrt_price_x96: u128,
        ) -> Result<i32, MockPoolError> {
            if env.storage().instance().has(&DataKey::PoolKey) {
                return Err(MockPoolError::AlreadyInitialized);
            }
            env.storage().instance().set(&DataKey::PoolKey, &pool_key);
            env.storage()
                .instance()
                .set(&DataKey::SqrtPrice, &sqrt_price_x96);
            Ok(lbp_math::get_tick_at_sqrt_ratio(&env, sqrt_price_x96))
        }

        /// Settles must be covered by what the engine actually holds
        pub fn modify_liquidities(env: Env, actions: Vec<PositionAction>, deadline: u64) {
            let mut settled = Map::new(&env);
            for action in actions.iter() {
                if let PositionAction::Settle(params) = action {
                    let total: i128 = settled.get(params.currency.clone()).unwrap_or(0);
                    let total = total + params.amount as i128;
                    let balance = token::Client::new(&env, &params.currency)
                        .balance(&env.current_contract_address());
                    if balance < total {
                        panic!("settle exceeds balance");
                    }
                    settled.set(params.currency, total);
                }
            }
            env.storage().instance().set(&DataKey::Plan, &actions);
            env.storage().instance().set(&DataKey::Deadline, &deadline);
        }

        pub fn pool_key(env: Env) -> Option<PoolKey> {
            env.storage().instance().get(&DataKey::PoolKey)
        }

        pub fn sqrt_price(env: Env) -> u128 {
            env.storage()
                .instance()
                .get(&DataKey::SqrtPrice)
                .unwrap_or(0)
        }

        pub fn last_plan(env: Env) -> Vec<PositionAction> {
            env.storage()
                .instance()
                .get(&DataKey::Plan)
                .unwrap_or(Vec::new(&env))
        }
    }
}
