//! Read-only projection of a position's unsettled reward.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine;
use crate::state::{StakePool, UserStake};

#[derive(Accounts)]
pub struct PendingRewards<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(constraint = user_stake.stake_pool == stake_pool.key())]
    pub user_stake: Account<'info, UserStake>,
}

pub fn handler(ctx: Context<PendingRewards>) -> Result<u64> {
    let clock = Clock::get()?;
    engine::pending_rewards(
        &ctx.accounts.user_stake,
        &ctx.accounts.stake_pool,
        clock.unix_timestamp,
    )
}
