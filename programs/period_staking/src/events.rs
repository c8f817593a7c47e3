//! Events emitted by the Period Staking program.

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

#[event]
pub struct PoolInitialized {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_rate: u8,
    pub staking_period: i64,
    pub staking_end: i64,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked: u64,
    pub total_staked: u64,
}

/// `compounded` is false when the reward was transferred out.
#[event]
pub struct Settled {
    pub owner: Pubkey,
    pub reward: u64,
    pub compounded: bool,
    pub settled_until: i64,
}

#[event]
pub struct RewardsWithdrawn {
    pub owner: Pubkey,
    pub reward: u64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub principal: u64,
    pub total_staked: u64,
}

#[event]
pub struct RewardsFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ExcessRecovered {
    pub authority: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PoolParameterUpdated {
    pub parameter: PoolParameter,
    pub old_value: i128,
    pub new_value: i128,
}

#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolParameter {
    RewardRate,
    StakingEnd,
    MaxTotalStaked,
    MinStaked,
}
