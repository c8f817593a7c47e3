//! Program constants for the Period Staking program.
//!
//! PDA seeds, time constants and parameter bounds used throughout the program.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the pool vault PDA
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Suggested staking period (30 days) for pools that do not need a custom one
pub const DEFAULT_STAKING_PERIOD: i64 = 30 * SECONDS_PER_DAY;

/// Window between pool creation and the initial staking end (365 days)
pub const STAKING_WINDOW: i64 = 365 * SECONDS_PER_DAY;

/// Maximum reward rate, in percent per staking period
pub const MAX_REWARD_RATE: u8 = 100;

/// Denominator for percent-based reward rates
pub const PERCENT_DENOMINATOR: u128 = 100;
