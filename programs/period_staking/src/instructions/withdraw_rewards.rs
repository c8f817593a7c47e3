//! Withdraw rewards instruction handler.
//!
//! Cash-out counterpart of settle: the pending reward is always transferred,
//! never compounded.

use anchor_lang::prelude::*;

use crate::engine;
use crate::events::RewardsWithdrawn;
use crate::instructions::ManagePosition;

/// Withdraw accrued rewards without touching principal.
///
/// # Errors
/// Returns `InsufficientCustody` if the vault cannot cover the payout.
pub fn handler(ctx: Context<ManagePosition>) -> Result<()> {
    let clock = Clock::get()?;
    let mut ledger = ctx.accounts.ledger();

    let accounts = &mut *ctx.accounts;
    let reward = engine::withdraw_rewards(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        &mut ledger,
        clock.unix_timestamp,
    )?;

    msg!("Withdrew {} reward tokens", reward);
    msg!("Total earned by user: {}", accounts.user_stake.total_earned);
    msg!("Total paid from pool: {}", accounts.stake_pool.total_rewards_paid);

    emit!(RewardsWithdrawn {
        owner: accounts.user.key(),
        reward,
    });

    Ok(())
}
