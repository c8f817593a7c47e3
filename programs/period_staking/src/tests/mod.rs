//! Host-side tests for the settlement engine.
//!
//! The engine only sees `StakePool`, `UserStake` and a `TokenLedger`, so
//! everything here runs without a validator: positions live in a map keyed by
//! owner and tokens move through [`MemoryLedger`].

mod properties;

pub use memory_ledger::*;

use std::collections::BTreeMap;
use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_STAKING_PERIOD, SECONDS_PER_DAY};
use crate::error::StakingError;
use crate::state::{StakePool, UserStake};

pub const DAY: i64 = SECONDS_PER_DAY;
pub const PERIOD: i64 = DEFAULT_STAKING_PERIOD;
/// Pool start; kept away from zero so clock arithmetic is exercised.
pub const T0: i64 = 1_700_000_000;

pub fn pool(reward_rate: u8, max_total_staked: u64, min_staked: u64) -> StakePool {
    StakePool {
        authority: Pubkey::new_unique(),
        staking_mint: Pubkey::new_unique(),
        staking_vault: Pubkey::new_unique(),
        reward_rate,
        staking_period: PERIOD,
        staking_end: T0 + 365 * DAY,
        max_total_staked,
        min_staked,
        created_at: T0,
        last_updated: T0,
        ..StakePool::default()
    }
}

pub fn position(owner: Pubkey) -> UserStake {
    UserStake {
        owner,
        ..UserStake::default()
    }
}

/// Stable numeric code of an Anchor error, ignoring where it was raised.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(err) => err.error_code_number,
        other => panic!("expected an anchor error, got {other:?}"),
    }
}

pub fn assert_staking_error<T: Debug>(result: Result<T>, expected: StakingError) {
    let err = result.expect_err("operation should have failed");
    assert_eq!(error_code(err), error_code(expected.into()));
}

pub fn sum_staked(positions: &BTreeMap<Pubkey, UserStake>) -> u64 {
    positions.values().map(|position| position.staked).sum()
}
