//! Unstake instruction handler.
//!
//! Settles the final reward and returns the whole principal.

use anchor_lang::prelude::*;

use crate::engine::{self, SettlementRoute};
use crate::events::{Settled, Unstaked};
use crate::instructions::ManagePosition;

/// Unstake the full position.
///
/// # Errors
/// - `NoActiveStake` if nothing is staked
/// - `LockPeriodNotEnded` until a full staking period has passed since the
///   last settlement, unless the staking end has been reached
pub fn handler(ctx: Context<ManagePosition>) -> Result<()> {
    let clock = Clock::get()?;
    let mut ledger = ctx.accounts.ledger();

    let accounts = &mut *ctx.accounts;
    let unstaked = engine::unstake(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        &mut ledger,
        clock.unix_timestamp,
    )?;
    let settlement = unstaked.settlement;

    msg!("Unstaked {} tokens", unstaked.principal);
    msg!("Final settlement: {} reward tokens", settlement.reward);
    msg!("Remaining pool stake: {}", accounts.stake_pool.total_staked);

    let owner = accounts.user.key();
    emit!(Settled {
        owner,
        reward: settlement.reward,
        compounded: settlement.route == SettlementRoute::Compounded,
        settled_until: settlement.settled_until,
    });
    emit!(Unstaked {
        owner,
        principal: unstaked.principal,
        total_staked: accounts.stake_pool.total_staked,
    });

    Ok(())
}
