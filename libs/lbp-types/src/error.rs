use soroban_sdk::contracterror;

/// Errors returned by the launch strategy and its math library.
///
/// Codes are grouped by category so callers can tell configuration problems
/// apart from timing, authorization, amount and numeric-range failures.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LbpError {
    // Initialization errors (100-199)
    /// Strategy has already been initialized
    AlreadyInitialized = 100,
    /// Strategy has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Auction split must be below TOKEN_SPLIT_DENOMINATOR
    TokenSplitTooHigh = 200,
    /// Tick spacing outside [MIN_TICK_SPACING, MAX_TICK_SPACING]
    InvalidTickSpacing = 201,
    /// Fee above MAX_LP_FEE
    InvalidFee = 202,
    /// Position recipient is a reserved address
    InvalidPositionRecipient = 203,
    /// Token and currency are the same asset
    InvalidTokenAndCurrency = 204,
    /// Split rounds the auction supply down to zero
    AuctionSupplyIsZero = 205,
    /// Sweep block must be after the migration block
    InvalidSweepBlock = 206,
    /// Total supply must be positive
    InvalidTotalSupply = 207,
    /// Auction currency differs from the launch currency
    InvalidCurrency = 208,
    /// Auction proceeds must be paid to the strategy
    InvalidFundsRecipient = 209,
    /// Auction blocks are out of order or end after the migration block
    InvalidEndBlock = 210,

    // Auction lifecycle errors (300-399)
    /// An auction has already been created for this strategy
    AuctionAlreadyCreated = 300,
    /// No auction has been created yet
    AuctionNotCreated = 301,
    /// Token balance is below the configured total supply
    InvalidAmountReceived = 302,

    // Timing errors (400-499)
    /// Migration block not reached
    MigrationNotAllowed = 400,
    /// Sweep block not reached
    SweepNotAllowed = 401,

    // Authorization errors (500-599)
    /// Caller is not the operator
    NotOperator = 500,

    // Amount errors (600-699)
    /// Currency raised does not fit the token amount width
    CurrencyAmountTooHigh = 600,
    /// Auction raised no currency
    NoCurrencyRaised = 601,
    /// Strategy holds less currency than the auction reports
    InsufficientCurrency = 602,
    /// Back-calculated currency amount does not fit
    AmountOverflow = 603,

    // Numeric range errors (700-799)
    /// Price is zero, overflows on inversion, or maps outside the sqrt price bounds
    InvalidPrice = 700,
    /// Liquidity is zero or exceeds the per-tick ceiling
    InvalidLiquidity = 701,

    // Pool errors (800-899)
    /// Pool manager rejected initialization (already initialized or bad price)
    PoolInitializationFailed = 800,
}
